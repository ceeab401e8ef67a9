/// Running minimum and maximum temperature for a station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationExtremes {
    pub min: f64,
    pub max: f64,
}

impl StationExtremes {
    pub fn new(temperature: f64) -> Self {
        Self {
            min: temperature,
            max: temperature,
        }
    }

    pub fn update(&mut self, temperature: f64) {
        if temperature < self.min {
            self.min = temperature;
        }
        if temperature > self.max {
            self.max = temperature;
        }
    }

    /// Fold a sequence of readings; `None` when there are none.
    pub fn from_temperatures<I: IntoIterator<Item = f64>>(temperatures: I) -> Option<Self> {
        let mut iter = temperatures.into_iter();
        let mut extremes = Self::new(iter.next()?);
        for temperature in iter {
            extremes.update(temperature);
        }
        Some(extremes)
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator). Needs at least two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let mean = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// True when `value` differs from `target` by less than `tolerance`. A zero
/// tolerance means exact equality.
pub fn within_tolerance(value: f64, target: f64, tolerance: f64) -> bool {
    if tolerance == 0.0 {
        return value == target;
    }
    (value - target).abs() < tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[10.0, 20.0, 5.0, 5.0]), Some(10.0));
        assert_eq!(mean(&[7.3]), Some(7.3));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_sample_std_dev() {
        let sd = sample_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((sd - 2.138089935).abs() < 1e-6);

        assert_eq!(sample_std_dev(&[5.0, 5.0]), Some(0.0));
        assert_eq!(sample_std_dev(&[5.0]), None);
        assert_eq!(sample_std_dev(&[]), None);
    }

    #[test]
    fn test_within_tolerance() {
        assert!(within_tolerance(10.0, 10.0005, 0.001));
        assert!(!within_tolerance(10.0, 10.002, 0.001));
        assert!(!within_tolerance(0.001, 0.0, 0.001));
        assert!(within_tolerance(0.0009, 0.0, 0.001));
        assert!(within_tolerance(10.0, 10.0, 0.0));
        assert!(!within_tolerance(10.0, 10.0001, 0.0));
    }
}

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use csv::ReaderBuilder;
use weather_stats::analyzers::{RangeAnalyzer, SeasonalAnalyzer, StabilityAnalyzer};
use weather_stats::models::{parse_temperature, TemperatureRecord};
use weather_stats::readers::TemperatureReader;
use weather_stats::utils::constants::MONTHS;

// Create test data for benchmarking: one reading per station per month per year
fn create_test_records(station_count: usize, years: usize) -> Vec<TemperatureRecord> {
    let mut records = Vec::with_capacity(station_count * years * 12);

    for station_id in 0..station_count {
        let name = format!("Test Station {}", station_id);
        for year in 0..years {
            for (i, month) in MONTHS.iter().enumerate() {
                let seasonal = 10.0 * ((i as f64) / 12.0 * std::f64::consts::TAU).cos();
                let temperature = 15.0 + seasonal + (station_id as f64) * 0.1 + (year as f64) * 0.01;
                records.push(TemperatureRecord::new(name.clone(), *month, temperature));
            }
        }
    }

    records
}

fn create_test_csv(station_count: usize) -> String {
    let mut csv = String::from("STATION_NAME");
    for month in MONTHS {
        csv.push(',');
        csv.push_str(month.name());
    }
    csv.push('\n');

    for station_id in 0..station_count {
        csv.push_str(&format!("Station {}", station_id));
        for i in 0..12 {
            if (station_id + i) % 17 == 0 {
                csv.push_str(",n/a");
            } else {
                csv.push_str(&format!(",{:.1}", 10.0 + i as f64 + station_id as f64 * 0.01));
            }
        }
        csv.push('\n');
    }

    csv
}

fn benchmark_seasonal_analyzer(c: &mut Criterion) {
    let records = create_test_records(100, 30);

    c.bench_function("seasonal_analyzer", |b| {
        b.iter(|| {
            let report = SeasonalAnalyzer::new().analyze(&records);
            black_box(report.averages.len())
        })
    });
}

fn benchmark_range_analyzer(c: &mut Criterion) {
    let records = create_test_records(100, 30);

    c.bench_function("range_analyzer", |b| {
        b.iter(|| {
            let report = RangeAnalyzer::new().analyze(&records);
            black_box(report.winners.len())
        })
    });
}

fn benchmark_stability_analyzer(c: &mut Criterion) {
    let records = create_test_records(100, 30);

    c.bench_function("stability_analyzer", |b| {
        b.iter(|| {
            let report = StabilityAnalyzer::new().analyze(&records);
            black_box(report.map(|r| r.most_stable.len()).unwrap_or(0))
        })
    });
}

fn benchmark_temperature_parsing(c: &mut Criterion) {
    let cells = vec!["12.5", " -3.0 ", "", "n/a", "NaN", "40", "1e1", "-0.4"];

    c.bench_function("temperature_parsing", |b| {
        b.iter(|| {
            let valid = cells.iter().filter_map(|c| parse_temperature(c)).count();
            black_box(valid)
        })
    });
}

fn benchmark_csv_reading_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_reading_by_size");

    for &size in &[10, 100, 1000, 5000] {
        let data = create_test_csv(size);
        group.bench_with_input(BenchmarkId::new("stations", size), &data, |b, data| {
            let reader = TemperatureReader::new();
            b.iter(|| {
                let csv_reader = ReaderBuilder::new()
                    .flexible(true)
                    .from_reader(data.as_bytes());
                black_box(reader.read_from(csv_reader).is_ok())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_seasonal_analyzer,
    benchmark_range_analyzer,
    benchmark_stability_analyzer,
    benchmark_temperature_parsing,
    benchmark_csv_reading_by_size
);
criterion_main!(benches);

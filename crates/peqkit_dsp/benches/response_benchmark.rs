//! Performance benchmarks for the DSP module
//!
//! Run with: cargo bench -p peqkit_dsp

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use peqkit_dsp::{
    compute_coefficients, compute_combined_response, magnitude_response, Band, FilterType,
    SweepConfig,
};

fn test_bands(count: usize) -> Vec<Band> {
    (0..count)
        .map(|i| {
            let filter_type = match i % 3 {
                0 => FilterType::Peaking,
                1 => FilterType::LowShelf,
                _ => FilterType::HighShelf,
            };
            Band::new(40.0 * 1.8_f64.powi(i as i32), (i as f64) - 4.0, 1.2, filter_type)
        })
        .collect()
}

fn benchmark_combined_response(c: &mut Criterion) {
    let mut group = c.benchmark_group("combined_response");

    // Typical band counts for headphone/room correction presets
    for band_count in [1, 5, 10, 20] {
        let bands = test_bands(band_count);

        for config in [SweepConfig::preview(), SweepConfig::default()] {
            group.throughput(Throughput::Elements((band_count * config.num_points) as u64));
            group.bench_function(
                format!("{}_bands_{}_points", band_count, config.num_points),
                |b| {
                    b.iter(|| compute_combined_response(black_box(&bands), black_box(&config)));
                },
            );
        }
    }

    group.finish();
}

fn benchmark_coefficients(c: &mut Criterion) {
    c.bench_function("compute_coefficients_shelf", |b| {
        let mut freq = 20.0_f64;

        b.iter(|| {
            // Simulate dragging a frequency slider
            freq = if freq > 20000.0 { 20.0 } else { freq * 1.01 };
            black_box(compute_coefficients(
                black_box(freq),
                6.0,
                0.71,
                FilterType::LowShelf,
                48000.0,
            ))
        });
    });
}

fn benchmark_magnitude_single(c: &mut Criterion) {
    c.bench_function("magnitude_response_single", |b| {
        let coeffs = compute_coefficients(1000.0, 3.0, 1.41, FilterType::Peaking, 48000.0);

        b.iter(|| black_box(magnitude_response(&coeffs, black_box(2500.0), 48000.0)));
    });
}

criterion_group!(
    benches,
    benchmark_combined_response,
    benchmark_coefficients,
    benchmark_magnitude_single
);

criterion_main!(benches);

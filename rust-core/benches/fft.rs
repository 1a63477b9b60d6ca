use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_complex::Complex64;
use std::f64::consts::PI;

use wav_spectrum::spectrum::{apply_window, transform, AnalyzerConfig, SpectrumAnalyzer, WindowType};

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    for size in [256usize, 1024, 4096, 16384] {
        let input: Vec<Complex64> = (0..size)
            .map(|n| Complex64::new((2.0 * PI * 7.0 * n as f64 / size as f64).sin(), 0.0))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| {
                let mut buffer = input.clone();
                transform(black_box(&mut buffer));
                buffer
            })
        });
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let samples: Vec<f64> = (0..48000)
        .map(|n| (2.0 * PI * 1000.0 * n as f64 / 48000.0).sin())
        .collect();
    let analyzer = SpectrumAnalyzer::new(AnalyzerConfig {
        fft_size: 4096,
        ..AnalyzerConfig::default()
    });

    c.bench_function("window_4096", |b| {
        b.iter(|| apply_window(black_box(&samples), 4096, WindowType::Hann))
    });
    c.bench_function("analyze_4096", |b| {
        b.iter(|| analyzer.analyze(black_box(&samples), 48000.0))
    });
}

criterion_group!(benches, bench_transform, bench_analyze);
criterion_main!(benches);

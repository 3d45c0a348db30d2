use criterion::{Criterion, criterion_group, criterion_main};
use pd_prob::{BinomialModel, GaussianModel};
use std::hint::black_box;

fn bench_models(c: &mut Criterion) {
    let xs: Vec<f64> = (0..10_000).map(|i| (i as f64) * 0.001 - 5.0).collect();
    let normal = GaussianModel::new(0.0, 1.3).unwrap();

    c.bench_function("gaussian_pdf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += normal.pdf(x);
            }
            black_box(acc)
        })
    });

    c.bench_function("gaussian_probability_interval", |b| {
        b.iter(|| black_box(normal.probability(black_box(-1.0), black_box(2.5)).unwrap()))
    });

    c.bench_function("gaussian_from_dataset_10k", |b| {
        b.iter(|| black_box(GaussianModel::from_dataset(black_box(&xs), true).unwrap()))
    });

    let binom = BinomialModel::new(60, 0.37).unwrap();
    c.bench_function("binomial_pmf_all_k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for k in 0..=60 {
                acc += binom.pmf(k).unwrap();
            }
            black_box(acc)
        })
    });

    let outcomes: Vec<bool> = (0..10_000).map(|i| i % 3 == 0).collect();
    c.bench_function("binomial_from_binary_data_10k", |b| {
        b.iter(|| black_box(BinomialModel::from_binary_data(black_box(&outcomes)).unwrap()))
    });
}

criterion_group!(benches, bench_models);
criterion_main!(benches);

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fourier_series::{ExpansionType, Expander};

fn bench_coefficients(c: &mut Criterion) {
	use rand::prelude::*;
	let mut rng = rand::thread_rng();
	let signal: Vec<f64> = (0..2048).map(|_| rng.gen_range(-1.0..=1.0)).collect();

	let expander = Expander::new(0.3).unwrap();

	let mut group = c.benchmark_group("Coefficients");
	for expansion_type in [
		ExpansionType::Odd,
		ExpansionType::Even,
		ExpansionType::QuarterEven,
	] {
		group.bench_function(BenchmarkId::new(expansion_type.tag(), "2048 samples"), |b| {
			b.iter(|| {
				black_box(expander.coefficients(&signal, expansion_type, 100).unwrap());
			});
		});
	}
	group.finish();
}

fn bench_reconstruct(c: &mut Criterion) {
	use rand::prelude::*;
	let mut rng = rand::thread_rng();
	let b_n: Vec<f64> = (0..=100).map(|_| rng.gen_range(-1.0..=1.0)).collect();
	let a_n = vec![0.; b_n.len()];

	let expander = Expander::new(0.3).unwrap();
	c.bench_function("Reconstruct odd", |b| {
		b.iter(|| {
			black_box(
				expander
					.reconstruct(&a_n, &b_n, ExpansionType::Odd, 2048)
					.unwrap(),
			);
		});
	});
}

criterion_group! {
  name = benches;
  config = Criterion::default().measurement_time(Duration::from_secs(8));
  targets = bench_coefficients, bench_reconstruct
}
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use julia::config::FAMOUS;
use julia::{Julia, PlaneMapper};

fn criterion_benchmark(c: &mut Criterion) {
    let (_, dragon) = FAMOUS[0];
    let set = Julia::new(dragon, PlaneMapper::square(200, 200), 100);

    c.bench_function("dragon 200x200 single", |b| {
        b.iter(|| black_box(&set).iterations())
    });

    let threads = num_cpus::get();
    c.bench_function("dragon 200x200 threaded", |b| {
        b.iter(|| black_box(&set).iterations_threaded(threads).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

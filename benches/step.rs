use conway::{Grid, Topology};
use criterion::{criterion_group, criterion_main, Criterion};

const N: usize = 1 << 9;

fn random_grid(topology: Topology) -> Grid {
    Grid::random(N, N, Some(42), 0.3)
        .unwrap()
        .with_topology(topology)
}

fn bench_step(c: &mut Criterion) {
    let mut grid = random_grid(Topology::Bounded);
    c.bench_function("step_bounded", |b| b.iter(|| grid.step()));

    let mut grid = random_grid(Topology::Torus);
    c.bench_function("step_torus", |b| b.iter(|| grid.step()));
}

#[cfg(feature = "parallel")]
fn bench_step_parallel(c: &mut Criterion) {
    let mut grid = random_grid(Topology::Torus);
    c.bench_function("step_parallel_torus", |b| b.iter(|| grid.step_parallel()));
}

#[cfg(not(feature = "parallel"))]
fn bench_step_parallel(_: &mut Criterion) {}

criterion_group!(benches, bench_step, bench_step_parallel);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pmaze::{
    core::Dims,
    maze::{algorithms, Grid, RandomSource},
    renderer::NoRenderer,
};

const DIMS: Dims = Dims(100, 100);

pub fn depth_first_search(c: &mut Criterion) {
    c.bench_function("depth_first_search", |b| {
        b.iter(|| {
            let mut grid = Grid::new(black_box(DIMS.0), black_box(DIMS.1));
            let mut rng = RandomSource::with_seed(black_box(42));
            algorithms::generate(&mut grid, &mut rng, Dims::ZERO, &mut NoRenderer).unwrap();
            grid
        })
    });
}

pub fn backtracking(c: &mut Criterion) {
    let mut grid = Grid::new(DIMS.0, DIMS.1);
    let mut rng = RandomSource::with_seed(42);
    algorithms::generate(&mut grid, &mut rng, Dims::ZERO, &mut NoRenderer).unwrap();

    c.bench_function("backtracking", |b| {
        b.iter(|| {
            grid.reset_visited();
            algorithms::solve(black_box(&mut grid), &mut NoRenderer).unwrap()
        })
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = depth_first_search, backtracking}
criterion_main!(benches);

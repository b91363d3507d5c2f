use core::hint::black_box;
use criterion::{Criterion, criterion_group, criterion_main};
use railgrid_core::*;

fn full_rail_grid(size: Coord) -> Grid {
    let mut grid = Grid::empty(size);
    for row in 0..size {
        for col in 0..size {
            grid.set_tile((row, col), Tile::new(TileKind::StraightRail, Rotation::R0))
                .unwrap();
        }
    }
    grid
}

fn striped_grid(size: Coord) -> Grid {
    let mut grid = Grid::empty(size);
    for row in (0..size).step_by(2) {
        for col in 0..size {
            grid.set_tile((row, col), Tile::new(TileKind::CurveRail, Rotation::R0))
                .unwrap();
        }
    }
    grid
}

fn bench_validate(c: &mut Criterion) {
    let full = full_rail_grid(7);
    c.bench_function("validate_full_7x7", |b| {
        b.iter(|| validate(black_box(&full)))
    });

    let striped = striped_grid(7);
    c.bench_function("analyze_striped_7x7", |b| {
        b.iter(|| analyze(black_box(&striped)))
    });
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);

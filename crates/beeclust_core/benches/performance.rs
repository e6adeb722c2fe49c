//! Performance benchmarks for beeclust_core using Criterion.rs.

use beeclust_core::cell::{Cell, Direction};
use beeclust_core::config::BeeClustConfig;
use beeclust_core::grid::Grid;
use beeclust_core::heat::HeatField;
use beeclust_core::random::seeded;
use beeclust_core::runner::run_ticks;
use beeclust_core::simulation::Simulation;
use beeclust_core::swarm::detect_swarms;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Square arena with a wall ring, two heaters, one cooler, and a bee on
/// every `spacing`-th cell.
fn arena(size: usize, spacing: usize) -> Grid {
    let mut grid = Grid::empty(size, size).expect("non-empty arena");
    for pos in grid.positions().collect::<Vec<_>>() {
        let (row, column) = pos;
        if row == 0 || column == 0 || row == size - 1 || column == size - 1 {
            grid.set_cell(pos, Cell::Wall);
        } else if (row * size + column) % spacing == 0 {
            let facing = Direction::ALL[(row + column) % 4];
            grid.set_cell(pos, Cell::Bee { facing });
        }
    }
    grid.set_cell((size / 4, size / 4), Cell::Heater);
    grid.set_cell((3 * size / 4, size / 4), Cell::Heater);
    grid.set_cell((size / 2, 3 * size / 4), Cell::Cooler);
    grid
}

fn bench_simulation_run(c: &mut Criterion) {
    let scenarios = vec![("small", 32, 5), ("medium", 100, 7), ("large", 250, 9)];

    let mut group = c.benchmark_group("simulation_run");
    for (name, size, spacing) in scenarios {
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(size, spacing),
            |b, &(size, spacing)| {
                b.iter(|| {
                    let mut sim =
                        Simulation::new(arena(size, spacing), BeeClustConfig::default(), seeded(42))
                            .expect("valid arena");
                    black_box(run_ticks(&mut sim, 100));
                });
            },
        );
    }
    group.finish();
}

fn bench_heat_field(c: &mut Criterion) {
    let config = BeeClustConfig::default();
    let mut group = c.benchmark_group("heat_field");
    for size in [64, 256, 512] {
        let grid = arena(size, 11);
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| black_box(HeatField::build(grid, &config)));
        });
    }
    group.finish();
}

fn bench_swarm_detection(c: &mut Criterion) {
    let grid = arena(256, 2);
    let bees = grid.bee_positions();
    c.bench_function("detect_swarms_dense_256", |b| {
        b.iter(|| black_box(detect_swarms(&bees, grid.rows(), grid.columns())));
    });
}

criterion_group!(benches, bench_simulation_run, bench_heat_field, bench_swarm_detection);
criterion_main!(benches);

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use room_planner::{DeskLength, ProblemVariant, Region, SolveContext, SolverConfig};
use std::time::Duration;

const ROOMS: &[(i32, i32, i32)] = &[(12, 12, 2), (20, 20, 3), (24, 30, 2), (60, 45, 3)];

fn bench_cold_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("cold_solve");
    for &(rows, cols, len) in ROOMS {
        let id = BenchmarkId::from_parameter(format!("{rows}x{cols}_L{len}"));
        group.bench_with_input(id, &(rows, cols, len), |b, &(rows, cols, len)| {
            b.iter_batched(
                || SolveContext::for_variant(ProblemVariant::Level6, &SolverConfig::default()),
                |mut ctx| {
                    let placement = ctx.solve(
                        black_box(Region::with_size(rows, cols)),
                        DeskLength::new(len),
                    );
                    black_box(placement.desk_count())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_warm_solve(c: &mut Criterion) {
    let mut ctx = SolveContext::for_variant(ProblemVariant::Level6, &SolverConfig::default());
    let length = DeskLength::new(3);
    ctx.solve(Region::with_size(20, 20), length);

    c.bench_function("warm_solve_20x20_L3", |b| {
        b.iter(|| black_box(ctx.solve(black_box(Region::new(5, 7, 25, 27)), length)))
    });
}

fn bench_spiral_limit(c: &mut Criterion) {
    let mut group = c.benchmark_group("spiral_search_limit");
    for limit in [0, 11, 21] {
        group.bench_with_input(BenchmarkId::from_parameter(limit), &limit, |b, &limit| {
            b.iter_batched(
                || {
                    SolveContext::for_variant(
                        ProblemVariant::Level5,
                        &SolverConfig {
                            spiral_search_limit: limit,
                        },
                    )
                },
                |mut ctx| black_box(ctx.solve(Region::with_size(16, 16), DeskLength::new(2))),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(20)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(5));
    targets = bench_cold_solve, bench_warm_solve, bench_spiral_limit
}

criterion_main!(benches);

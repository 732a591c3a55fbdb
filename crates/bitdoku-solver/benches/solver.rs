//! Benchmarks for the propagation loop and the full search.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use bitdoku_core::Board;
use bitdoku_solver::{propagate, solve};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

/// Mostly settled by forced singles; propagation does nearly all the work.
fn easy_puzzle() -> Board {
    "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
    "
    .parse()
    .unwrap()
}

/// A complete grid with every 1, 2, and 3 blanked out. No cell is forced at
/// the start, so the driver has to branch and discard repeatedly.
fn branchy_puzzle() -> Board {
    "
    5_4 678 9__
    67_ _95 _48
    _98 _4_ 567
    859 76_ 4__
    4_6 85_ 79_
    7__ 9_4 856
    96_ 5_7 _84
    _87 4_9 6_5
    _45 _86 _79
    "
    .parse()
    .unwrap()
}

fn bench_propagate(c: &mut Criterion) {
    let puzzles = [
        ("easy", easy_puzzle()),
        ("branchy", branchy_puzzle()),
        ("empty", Board::new()),
    ];

    for (param, board) in puzzles {
        c.bench_with_input(BenchmarkId::new("propagate", param), &board, |b, board| {
            b.iter_batched_ref(
                || hint::black_box(board.clone()),
                |board| {
                    let outcome = propagate(board);
                    hint::black_box(outcome)
                },
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_solve(c: &mut Criterion) {
    let puzzles = [("easy", easy_puzzle()), ("branchy", branchy_puzzle())];

    for (param, board) in puzzles {
        c.bench_with_input(BenchmarkId::new("solve", param), &board, |b, board| {
            b.iter(|| solve(hint::black_box(board)));
        });
    }
}

criterion_group!(benches, bench_propagate, bench_solve);
criterion_main!(benches);

//! Command-line interface for the bitdoku solver.
//!
//! Loads a puzzle file (a single grid, or a multi-puzzle corpus with
//! `--batch`), solves every puzzle, and prints the solutions. Wall-clock
//! timings for loading and solving are reported through the `log` facade;
//! set `RUST_LOG=info` to see them.

use std::{error::Error, fs, path::PathBuf, process::ExitCode, time::Instant};

use bitdoku_core::Board;
use bitdoku_solver::solve;
use clap::Parser;

mod batch;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to the puzzle file.
    puzzle: PathBuf,

    /// Treat the file as a multi-puzzle corpus (`Grid NN` headers).
    #[arg(long)]
    batch: bool,

    /// Print the sum, over all solutions, of the 3-digit number formed by
    /// the first three cells of each solved grid.
    #[arg(long)]
    checksum: bool,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let load_started = Instant::now();
    let text = fs::read_to_string(&args.puzzle)?;
    let boards = if args.batch {
        batch::parse(&text)?
    } else {
        vec![text.parse::<Board>()?]
    };
    log::info!(
        "loaded {} puzzle(s) in {:?}",
        boards.len(),
        load_started.elapsed()
    );

    let solve_started = Instant::now();
    let mut checksum = 0_u64;
    let mut failures = 0_usize;
    for (i, board) in boards.iter().enumerate() {
        if boards.len() > 1 {
            println!("Puzzle {}:", i + 1);
        }
        let started = Instant::now();
        match solve(board) {
            Ok(solution) => {
                log::info!("puzzle {} solved in {:?}", i + 1, started.elapsed());
                println!("{solution}");
                checksum += corner_number(&solution);
            }
            Err(err) => {
                log::info!("puzzle {} failed in {:?}", i + 1, started.elapsed());
                failures += 1;
                println!("({err})");
            }
        }
        println!();
    }
    log::info!(
        "solved {} puzzle(s) in {:?}",
        boards.len() - failures,
        solve_started.elapsed()
    );

    if args.checksum {
        println!("Checksum: {checksum}");
    }

    if failures > 0 {
        return Err(format!("{failures} puzzle(s) had no solution").into());
    }
    Ok(())
}

/// The 3-digit number formed by the first three cells of a solved board.
fn corner_number(solution: &Board) -> u64 {
    bitdoku_core::CellIndex::all()
        .take(3)
        .map(|cell| u64::from(solution.solved_digit(cell).value()))
        .fold(0, |acc, digit| acc * 10 + digit)
}

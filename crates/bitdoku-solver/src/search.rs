//! The backtracking search driver.
//!
//! [`solve`] runs propagation and branching over an explicit first-in
//! first-out worklist of candidate boards until one of them propagates to a
//! complete assignment or the worklist runs dry. There is no recursion and no
//! cycle detection: every commit strictly reduces the number of unsolved
//! cells, so no board state can recur along any path and the search always
//! terminates.

use std::collections::VecDeque;

use bitdoku_core::Board;
use derive_more::{Display, Error};

use crate::{
    branch::branches,
    propagate::{Propagation, propagate},
};

/// The search exhausted its worklist without finding a solution.
///
/// Returned by [`solve`] when the puzzle has no valid completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("puzzle has no solution")]
pub struct Unsolvable;

/// Searches for a solution to `board`.
///
/// The worklist starts with a clone of the input board. Each step pops the
/// front board and propagates it: a solved board is returned immediately, a
/// contradictory board is discarded, and an undetermined board is replaced at
/// the back of the worklist by one child per available digit of its
/// most-constrained cell.
///
/// The first solution reached under this ordering is returned; when a puzzle
/// has several completions, no particular one is promised, only a valid one.
///
/// # Errors
///
/// Returns [`Unsolvable`] if the worklist is exhausted without reaching a
/// solved board.
///
/// # Examples
///
/// ```
/// use bitdoku_core::Board;
/// use bitdoku_solver::solve;
///
/// let board: Board = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()
/// .unwrap();
///
/// let solution = solve(&board)?;
/// assert!(solution.is_solved());
/// # Ok::<(), bitdoku_solver::Unsolvable>(())
/// ```
pub fn solve(board: &Board) -> Result<Board, Unsolvable> {
    let mut worklist = VecDeque::from([board.clone()]);
    let mut peak = worklist.len();
    let mut visited = 0_u64;

    while let Some(mut current) = worklist.pop_front() {
        visited += 1;
        match propagate(&mut current) {
            Propagation::Solved => {
                log::debug!("solved after {visited} boards, worklist peaked at {peak}");
                return Ok(current);
            }
            Propagation::Invalid => {}
            Propagation::Undetermined { cell, .. } => {
                worklist.extend(branches(&current, cell));
                peak = peak.max(worklist.len());
            }
        }
    }

    log::debug!("exhausted after {visited} boards, worklist peaked at {peak}");
    Err(Unsolvable)
}

#[cfg(test)]
mod tests {
    use bitdoku_core::{CellIndex, Digit, DigitSet, Group};

    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    /// Every row, column, and quad contains each digit 1-9 exactly once.
    fn assert_valid_solution(solution: &Board) {
        assert!(solution.is_solved());
        for group in Group::ALL {
            let digits: DigitSet = group
                .cells()
                .into_iter()
                .map(|cell| solution.solved_digit(cell))
                .collect();
            assert_eq!(digits, DigitSet::FULL, "duplicate digit in {group:?}");
        }
    }

    /// The solution keeps every pre-filled clue of the puzzle.
    fn assert_preserves_clues(puzzle: &Board, solution: &Board) {
        for cell in CellIndex::all() {
            if puzzle.is_cell_solved(cell) {
                assert_eq!(puzzle.solved_digit(cell), solution.solved_digit(cell));
            }
        }
    }

    #[test]
    fn test_solves_puzzle_by_propagation_alone() {
        let puzzle = board(
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
        ",
        );
        let solution = solve(&puzzle).unwrap();
        assert_valid_solution(&solution);
        assert_preserves_clues(&puzzle, &solution);
        assert_eq!(solution.solved_digit(CellIndex::new(2)), Digit::D4);
    }

    #[test]
    fn test_solves_corpus_style_puzzle() {
        let puzzle = board(
            "
            003 020 600
            900 305 001
            001 806 400
            008 102 900
            700 000 008
            006 708 200
            002 609 500
            800 203 009
            005 010 300
        ",
        );
        let solution = solve(&puzzle).unwrap();
        assert_valid_solution(&solution);
        assert_preserves_clues(&puzzle, &solution);

        // the three digits in the top-left corner of this well-known grid
        let corner: Vec<_> = (0..3)
            .map(|i| solution.solved_digit(CellIndex::new(i)).value())
            .collect();
        assert_eq!(corner, [4, 8, 3]);
    }

    #[test]
    fn test_solves_puzzle_that_needs_branching() {
        // a complete grid with every 1 and 2 blanked: propagation leaves
        // {1, 2} in each blank, so the driver has to guess
        let puzzle = board(
            "
            534 678 9__
            67_ _95 348
            _98 34_ 567
            859 76_ 4_3
            4_6 853 79_
            7_3 9_4 856
            96_ 537 _84
            _87 4_9 635
            345 _86 _79
        ",
        );
        let solution = solve(&puzzle).unwrap();
        assert_valid_solution(&solution);
        assert_preserves_clues(&puzzle, &solution);
    }

    #[test]
    fn test_immediate_contradiction_is_unsolvable() {
        // (0, 8) has no available digit at all
        let puzzle = board(
            "
            123 456 77_
            ___ ___ __8
            ___ ___ __9
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        );
        assert_eq!(solve(&puzzle), Err(Unsolvable));
    }

    #[test]
    fn test_wrong_clue_makes_puzzle_unsolvable() {
        // the same puzzle as the propagation-only test, with (0, 2) pinned
        // to 2 instead of its unique value 4; locally consistent, globally
        // impossible, so the search must exhaust the worklist
        let puzzle = board(
            "
            532 _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        ",
        );
        assert_eq!(solve(&puzzle), Err(Unsolvable));
    }

    #[test]
    fn test_unsolvable_error_message() {
        assert_eq!(Unsolvable.to_string(), "puzzle has no solution");
    }
}

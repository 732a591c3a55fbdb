//! The constraint elimination loop.
//!
//! [`propagate`] narrows a board as far as pure elimination will go: any
//! unsolved cell whose row, column, and quad together already contain eight
//! digits is forced to the ninth, and every forced commit can unlock further
//! eliminations elsewhere. The loop runs once per search-frontier pop and
//! either settles the board outright or reports the best cell to branch on.

use bitdoku_core::{Board, CellIndex};
use derive_more::IsVariant;

/// Outcome of running [`propagate`] over a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Propagation {
    /// Every cell is solved; the board is a complete, consistent assignment.
    Solved,
    /// Some cell has no available digit left. The board is a contradiction
    /// and the branch it came from is dead. This is a normal, frequent
    /// outcome during search, not an error.
    Invalid,
    /// Elimination alone cannot settle the board; the search must branch.
    Undetermined {
        /// The most-constrained unsolved cell found in the final scan: the
        /// first cell with the fewest available digits. On ties the cell
        /// discovered first wins; that ordering is an implementation detail,
        /// not a guaranteed contract.
        cell: CellIndex,
        /// The number of digits available at `cell` (always at least 2).
        candidates: u8,
    },
}

/// Repeatedly scans the unsolved cells of `board`, committing every forced
/// single, until the board is solved, contradictory, or stable.
///
/// Each pass walks the unsolved cells in increasing index order using the
/// solved-tracker's skip operation, so already-solved cells are never
/// revisited. A cell with no available digit aborts the scan immediately with
/// [`Propagation::Invalid`]. A cell with exactly one available digit is
/// committed on the spot and the scan continues; the pass is then repeated,
/// since the new commit may have narrowed cells scanned earlier. A stable,
/// incomplete board yields [`Propagation::Undetermined`] with the
/// most-constrained cell of the final pass.
///
/// Availability is read straight from the board's taken-value cache, which
/// [`Board::commit`] maintains incrementally, so a pass costs one mask union
/// per unsolved cell.
///
/// # Examples
///
/// ```
/// use bitdoku_core::Board;
/// use bitdoku_solver::{Propagation, propagate};
///
/// let mut board = Board::new();
/// let outcome = propagate(&mut board);
/// assert!(outcome.is_undetermined());
/// ```
pub fn propagate(board: &mut Board) -> Propagation {
    loop {
        let mut best: Option<(CellIndex, usize)> = None;
        let mut changed = false;

        let mut index = 0;
        loop {
            index = board.next_unsolved_at_or_after(index);
            if index >= 81 {
                break;
            }
            let cell = CellIndex::new(index);
            let available = board.candidates(cell);

            match available.len() {
                0 => return Propagation::Invalid,
                1 => {
                    if let Some(digit) = available.as_single() {
                        board.commit(cell, digit);
                        changed = true;
                    }
                }
                count => {
                    // strict improvement only: first-found wins ties
                    if best.is_none_or(|(_, best_count)| count < best_count) {
                        best = Some((cell, count));
                    }
                }
            }
            index += 1;
        }

        if board.is_solved() {
            return Propagation::Solved;
        }
        if !changed {
            let Some((cell, count)) = best else {
                unreachable!("an unsolved, contradiction-free board has a cell to branch on")
            };
            #[expect(clippy::cast_possible_truncation)]
            let candidates = count as u8;
            return Propagation::Undetermined { cell, candidates };
        }
        // at least one cell was forced this pass; rescan, the commits may
        // have narrowed cells visited before them
    }
}

#[cfg(test)]
mod tests {
    use bitdoku_core::{Digit, DigitSet};

    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_all_unknown_board_branches_on_first_cell() {
        let mut board = Board::new();
        let outcome = propagate(&mut board);
        assert_eq!(
            outcome,
            Propagation::Undetermined {
                cell: CellIndex::new(0),
                candidates: 9,
            }
        );
        assert_eq!(board.solved_count(), 0);
    }

    #[test]
    fn test_tie_breaks_to_first_discovered_cell() {
        // positions 7 and 8 of row 0 both have {8, 9}; the earlier wins
        let mut board = board(
            "
            123 456 7__
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        );
        let outcome = propagate(&mut board);
        assert_eq!(
            outcome,
            Propagation::Undetermined {
                cell: CellIndex::new(7),
                candidates: 2,
            }
        );
    }

    #[test]
    fn test_reports_most_constrained_cell() {
        // row 1 / column 1 sees {1, 2, 3} in its row, {5, 6} in its column,
        // and {4, 9} in its quad, leaving exactly {7, 8}
        let mut board = board(
            "
            __4 ___ ___
            ___ _1_ 2_3
            9__ ___ ___
            _5_ ___ ___
            ___ ___ ___
            _6_ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        );
        let outcome = propagate(&mut board);
        let expected_cell = CellIndex::from_row_col(1, 1);
        assert_eq!(
            outcome,
            Propagation::Undetermined {
                cell: expected_cell,
                candidates: 2,
            }
        );
        assert_eq!(
            board.candidates(expected_cell),
            DigitSet::from_iter([Digit::D7, Digit::D8])
        );
    }

    #[test]
    fn test_complete_assignment_is_solved_without_commits() {
        let mut board = board(
            "
            534 678 912
            672 195 348
            198 342 567
            859 761 423
            426 853 791
            713 924 856
            961 537 284
            287 419 635
            345 286 179
        ",
        );
        let before = board.clone();
        let outcome = propagate(&mut board);
        assert_eq!(outcome, Propagation::Solved);
        assert_eq!(board, before);
    }

    #[test]
    fn test_forced_single_is_committed() {
        // (0, 8) sees {1..=8} in its row, leaving only 9
        let mut board = board(
            "
            123 456 78_
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        );
        propagate(&mut board);
        let cell = CellIndex::from_row_col(0, 8);
        assert!(board.is_cell_solved(cell));
        assert_eq!(board.solved_digit(cell), Digit::D9);
    }

    #[test]
    fn test_duplicate_in_row_propagates_to_invalid() {
        // row 0 holds the digit 7 twice; together with the 8 and 9 below,
        // (0, 8) is left with no available digit
        let mut board = board(
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
        let outcome = propagate(&mut board);
        assert_eq!(outcome, Propagation::Invalid);
        assert!(!outcome.is_solved());
    }

    #[test]
    fn test_propagation_is_idempotent_when_stuck() {
        let mut board = board(
            "
            __4 ___ ___
            ___ _1_ 2_3
            9__ ___ ___
            _5_ ___ ___
            ___ ___ ___
            _6_ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        );
        let first = propagate(&mut board);
        let solved_after_first = board.solved_count();

        let second = propagate(&mut board);
        assert_eq!(first, second);
        assert_eq!(board.solved_count(), solved_after_first);
    }
}

//! Mutable per-puzzle board state.
//!
//! A [`Board`] owns everything the solver mutates while working on one
//! puzzle: the 81 per-cell candidate masks, the solved-cell tracker, and the
//! cached per-row/column/quad taken-digit masks. Cloning a board is a full
//! value copy; no state is shared between boards, so a clone can be committed
//! to freely without affecting its parent.

use std::fmt::{self, Display, Write as _};

use crate::{
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    topology::{CellIndex, Group},
    tracker::SolvedCells,
};

/// Cached taken-digit masks, one [`DigitSet`] per row, column, and quad.
///
/// Kept in lockstep with every cell commit; this cache is the single source
/// of truth for computing a cell's remaining candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TakenValues {
    row: [DigitSet; 9],
    column: [DigitSet; 9],
    quad: [DigitSet; 9],
}

impl TakenValues {
    const EMPTY: Self = Self {
        row: [DigitSet::EMPTY; 9],
        column: [DigitSet::EMPTY; 9],
        quad: [DigitSet::EMPTY; 9],
    };
}

/// The state of one 9×9 puzzle: 81 cell masks, a solved-cell tracker, and the
/// taken-value cache.
///
/// A board is created either from an external digit grid (via
/// [`from_digits`](Self::from_digits) or [`FromStr`](std::str::FromStr)),
/// which recomputes the taken-value cache in full, or by cloning a parent
/// board during search, after which [`commit`](Self::commit) keeps the cache
/// current incrementally.
///
/// # Examples
///
/// ```
/// use bitdoku_core::{Board, CellIndex, Digit};
///
/// let mut board: Board = "
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
/// .parse()?;
///
/// let corner = CellIndex::from_row_col(0, 2);
/// assert!(!board.is_cell_solved(corner));
/// assert!(board.candidates(corner).contains(Digit::D4));
///
/// board.commit(corner, Digit::D4);
/// assert_eq!(board.solved_digit(corner), Digit::D4);
/// # Ok::<(), bitdoku_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 81],
    solved: SolvedCells,
    taken: TakenValues,
}

impl Board {
    /// Creates a board with all 81 cells unknown.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [Cell::unknown(); 81],
            solved: SolvedCells::EMPTY,
            taken: TakenValues::EMPTY,
        }
    }

    /// Creates a board from 81 digit values in row-major order.
    ///
    /// A value of 0 marks an unknown cell; values 1-9 are pre-filled clues.
    /// The taken-value cache is recomputed in full once all cells are set.
    ///
    /// # Panics
    ///
    /// Panics if any value is greater than 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitdoku_core::{Board, CellIndex, Digit};
    ///
    /// let mut digits = [0; 81];
    /// digits[0] = 5;
    ///
    /// let board = Board::from_digits(&digits);
    /// assert_eq!(board.solved_digit(CellIndex::new(0)), Digit::D5);
    /// assert_eq!(board.solved_count(), 1);
    /// ```
    #[must_use]
    pub fn from_digits(digits: &[u8; 81]) -> Self {
        let mut board = Self::new();
        for (index, &value) in digits.iter().enumerate() {
            if value != 0 {
                #[expect(clippy::cast_possible_truncation)]
                let cell = CellIndex::new(index as u8);
                board.cells[index] = Cell::solved(Digit::from_value(value));
                board.solved.insert(cell);
            }
        }
        board.recompute_taken();
        board
    }

    /// Rebuilds the taken-value cache from scratch, one pass per row, column,
    /// and quad, unioning the digit bits of every solved member.
    ///
    /// Only needed when a board is first constructed from raw digits;
    /// [`commit`](Self::commit) maintains the cache incrementally afterwards.
    fn recompute_taken(&mut self) {
        for (taken, group) in self.taken.row.iter_mut().zip(Group::ROWS) {
            *taken = Self::group_taken(&self.cells, &self.solved, group);
        }
        for (taken, group) in self.taken.column.iter_mut().zip(Group::COLUMNS) {
            *taken = Self::group_taken(&self.cells, &self.solved, group);
        }
        for (taken, group) in self.taken.quad.iter_mut().zip(Group::QUADS) {
            *taken = Self::group_taken(&self.cells, &self.solved, group);
        }
    }

    fn group_taken(cells: &[Cell; 81], solved: &SolvedCells, group: Group) -> DigitSet {
        group
            .cells()
            .into_iter()
            .filter(|cell| solved.contains(*cell))
            .map(|cell| cells[usize::from(cell.index())].digit())
            .collect()
    }

    /// Commits a digit to a cell: marks the cell solved, sets the tracker
    /// bit, and unions the digit into the row, column, and quad taken masks.
    ///
    /// The digit is not validated against the cell's available set; callers
    /// are responsible for only committing digits reported by
    /// [`candidates`](Self::candidates).
    pub fn commit(&mut self, cell: CellIndex, digit: Digit) {
        self.cells[usize::from(cell.index())] = Cell::solved(digit);
        self.solved.insert(cell);
        self.taken.row[usize::from(cell.row())].insert(digit);
        self.taken.column[usize::from(cell.column())].insert(digit);
        self.taken.quad[usize::from(cell.quad())].insert(digit);
    }

    /// Returns the digits still available to a cell: the complement of the
    /// union of its row, column, and quad taken masks.
    ///
    /// The result may have zero members (the cell is a contradiction), one
    /// (a forced single), or several. For a solved cell the result reflects
    /// what its groups still admit, which excludes its own digit; callers
    /// normally query unsolved cells only.
    #[must_use]
    pub fn candidates(&self, cell: CellIndex) -> DigitSet {
        let taken = self.taken.row[usize::from(cell.row())]
            | self.taken.column[usize::from(cell.column())]
            | self.taken.quad[usize::from(cell.quad())];
        taken.complement()
    }

    /// Returns the digits already committed within a group.
    #[must_use]
    pub fn taken(&self, group: Group) -> DigitSet {
        match group {
            Group::Row(y) => self.taken.row[usize::from(y)],
            Group::Column(x) => self.taken.column[usize::from(x)],
            Group::Quad(q) => self.taken.quad[usize::from(q)],
        }
    }

    /// Returns `true` if the cell is solved.
    #[inline]
    #[must_use]
    pub fn is_cell_solved(&self, cell: CellIndex) -> bool {
        self.solved.contains(cell)
    }

    /// Returns the committed digit of a solved cell.
    ///
    /// Calling this on an unsolved cell is a caller bug; it is checked with a
    /// debug assertion and returns a meaningless digit in release builds.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the cell is not solved.
    #[inline]
    #[must_use]
    pub fn solved_digit(&self, cell: CellIndex) -> Digit {
        self.cells[usize::from(cell.index())].digit()
    }

    /// Returns `true` if all 81 cells are solved.
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved.is_complete()
    }

    /// Returns the number of solved cells.
    #[inline]
    #[must_use]
    pub fn solved_count(&self) -> u32 {
        self.solved.count()
    }

    /// Returns the first position at or after `index` whose cell is
    /// unsolved, or 81 if every cell from `index` onward is solved.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `index` is greater than 81.
    #[inline]
    #[must_use]
    pub fn next_unsolved_at_or_after(&self, index: u8) -> u8 {
        self.solved.next_unsolved_at_or_after(index)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Board {
    /// Renders the board as nine rows of nine glyphs: digits for solved
    /// cells, `_` for unsolved cells, with a space between 3-column blocks.
    ///
    /// The output round-trips through [`FromStr`](std::str::FromStr).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row != 0 {
                f.write_char('\n')?;
            }
            for col in 0..9 {
                if col == 3 || col == 6 {
                    f.write_char(' ')?;
                }
                let cell = CellIndex::from_row_col(row, col);
                if self.is_cell_solved(cell) {
                    write!(f, "{}", self.solved_digit(cell))?;
                } else {
                    f.write_char('_')?;
                }
            }
        }
        Ok(())
    }
}

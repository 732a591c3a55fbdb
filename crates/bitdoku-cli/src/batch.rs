//! Parser for multi-puzzle corpus files.
//!
//! The corpus format used for bulk test collections stores many puzzles in
//! one file: a header line beginning with `Grid` starts a new puzzle, and
//! the following lines carry its 81 cells as digits (`0`, `.`, and `_` mean
//! "unknown"). Blank lines are skipped.
//!
//! ```text
//! Grid 01
//! 003020600
//! 900305001
//! ...
//! Grid 02
//! 200080300
//! ...
//! ```

use bitdoku_core::Board;
use derive_more::{Display, Error};

/// Error parsing a puzzle corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBatchError {
    /// A cell line contains a character that is not a digit or a
    /// placeholder.
    #[display("line {line}: unexpected character {ch:?}")]
    UnexpectedCharacter {
        /// 1-based line number of the offending character.
        line: usize,
        /// The offending character.
        ch: char,
    },
    /// A puzzle did not end with exactly 81 cells.
    #[display("puzzle ending at line {line} has {count} cells, expected 81")]
    WrongCellCount {
        /// 1-based line number of the last line of the puzzle.
        line: usize,
        /// The number of cells the puzzle actually had.
        count: usize,
    },
    /// Cell data appeared before the first `Grid` header.
    #[display("line {line}: cell data before the first grid header")]
    MissingHeader {
        /// 1-based line number of the stray cell data.
        line: usize,
    },
    /// The corpus contains no grids at all.
    #[display("corpus contains no grids")]
    Empty,
}

#[derive(Debug)]
struct PendingGrid {
    digits: [u8; 81],
    count: usize,
    last_line: usize,
}

impl PendingGrid {
    fn new() -> Self {
        Self {
            digits: [0; 81],
            count: 0,
            last_line: 0,
        }
    }

    fn push(&mut self, value: u8, line: usize) {
        if self.count < 81 {
            self.digits[self.count] = value;
        }
        self.count += 1;
        self.last_line = line;
    }

    fn finish(&self) -> Result<Board, ParseBatchError> {
        if self.count != 81 {
            return Err(ParseBatchError::WrongCellCount {
                line: self.last_line,
                count: self.count,
            });
        }
        Ok(Board::from_digits(&self.digits))
    }
}

/// Parses a multi-puzzle corpus into one board per `Grid` header.
///
/// # Errors
///
/// Returns a [`ParseBatchError`] if any puzzle has the wrong cell count, a
/// cell line contains an unexpected character, cell data appears before the
/// first header, or the corpus contains no grids.
pub fn parse(text: &str) -> Result<Vec<Board>, ParseBatchError> {
    let mut boards = Vec::new();
    let mut pending: Option<PendingGrid> = None;

    for (line_index, line) in text.lines().enumerate() {
        let line_no = line_index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('G') {
            if let Some(grid) = pending.take() {
                boards.push(grid.finish()?);
            }
            pending = Some(PendingGrid::new());
            continue;
        }
        let Some(grid) = pending.as_mut() else {
            return Err(ParseBatchError::MissingHeader { line: line_no });
        };
        for ch in trimmed.chars() {
            match ch {
                '.' | '_' => grid.push(0, line_no),
                '0'..='9' => grid.push(ch as u8 - b'0', line_no),
                ch if ch.is_whitespace() => {}
                ch => {
                    return Err(ParseBatchError::UnexpectedCharacter { line: line_no, ch });
                }
            }
        }
    }

    if let Some(grid) = pending.take() {
        boards.push(grid.finish()?);
    }
    if boards.is_empty() {
        return Err(ParseBatchError::Empty);
    }
    Ok(boards)
}

//! Text format for puzzle boards.
//!
//! A board is written as 81 cells in row-major order. Digits `1`-`9` are
//! pre-filled clues; `0`, `.`, and `_` all mean "unknown". A `#` starts a
//! comment that runs to the end of the line, and any other whitespace is
//! ignored, so the grid can be laid out freely:
//!
//! ```
//! use bitdoku_core::Board;
//!
//! let board: Board = "
//!     ## a puzzle with a single clue
//!     5__ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//! "
//! .parse()?;
//! assert_eq!(board.solved_count(), 1);
//! # Ok::<(), bitdoku_core::ParseBoardError>(())
//! ```

use std::str::FromStr;

use derive_more::{Display, Error};
use tinyvec::ArrayVec;

use crate::board::Board;

/// Error parsing a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The text contains a character that is not a digit, a placeholder, a
    /// comment, or whitespace.
    #[display("unexpected character {_0:?} in board text")]
    UnexpectedCharacter(#[error(not(source))] char),
    /// The text does not contain exactly 81 cells.
    #[display("expected 81 cells, found {_0}")]
    WrongCellCount(#[error(not(source))] usize),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut digits: ArrayVec<[u8; 81]> = ArrayVec::new();
        let mut count = 0_usize;
        let mut in_comment = false;

        for ch in s.chars() {
            if in_comment {
                in_comment = ch != '\n';
                continue;
            }
            let value = match ch {
                '#' => {
                    in_comment = true;
                    continue;
                }
                '.' | '_' => 0,
                '0'..='9' => ch as u8 - b'0',
                ch if ch.is_whitespace() => continue,
                ch => return Err(ParseBoardError::UnexpectedCharacter(ch)),
            };
            count += 1;
            if count <= 81 {
                digits.push(value);
            }
        }

        if count != 81 {
            return Err(ParseBoardError::WrongCellCount(count));
        }
        Ok(Board::from_digits(&digits.into_inner()))
    }
}

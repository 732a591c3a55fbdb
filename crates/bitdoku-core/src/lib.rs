//! Core board state for the bitdoku solver.
//!
//! This crate provides the data structures a 9×9 constraint-solving search
//! works over. It has no solving logic of its own; the propagation and
//! search loops live in `bitdoku-solver` and drive the types defined here.
//!
//! # Overview
//!
//! - [`topology`]: the constant 9×9 grid topology: [`CellIndex`] and
//!   [`Group`] with compile-time lookup tables between the 81 linear cell
//!   positions and their row/column/quad memberships.
//! - [`digit`] and [`digit_set`]: [`Digit`] values 1-9 and [`DigitSet`],
//!   the 9-bit mask used for candidate and taken-digit sets.
//! - [`cell`]: [`Cell`], one cell's candidate mask plus solved flag packed
//!   into a `u16`.
//! - [`tracker`]: [`SolvedCells`], the 81-bit solved-position set with a
//!   trailing-ones skip-scan.
//! - [`board`]: [`Board`], the mutable per-puzzle state tying the above
//!   together with the cached per-group taken-digit masks.
//! - [`parse`]: the text format ([`FromStr`](std::str::FromStr) for
//!   [`Board`], rendering via [`Display`](std::fmt::Display)).
//!
//! # Examples
//!
//! ```
//! use bitdoku_core::{Board, CellIndex, Digit};
//!
//! let mut board: Board = "
//!     12_ ___ ___
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
//!
//! // digits 1 and 2 are taken in row 0, so the neighbour has 7 candidates
//! let cell = CellIndex::from_row_col(0, 2);
//! assert_eq!(board.candidates(cell).len(), 7);
//!
//! board.commit(cell, Digit::D3);
//! assert_eq!(board.solved_count(), 3);
//! # Ok::<(), bitdoku_core::ParseBoardError>(())
//! ```

pub mod board;
pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod parse;
pub mod topology;
pub mod tracker;

pub use self::{
    board::Board,
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    parse::ParseBoardError,
    topology::{CellIndex, Group},
    tracker::SolvedCells,
};

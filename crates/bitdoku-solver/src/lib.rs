//! Constraint propagation and backtracking search for bitdoku boards.
//!
//! The solver combines two mechanisms over the board state defined in
//! [`bitdoku_core`]:
//!
//! - [`propagate`]: the elimination loop, which commits every digit forced
//!   by its row/column/quad constraints and identifies the most-constrained
//!   cell when elimination alone is not enough.
//! - [`branches`]: the lazy enumerator producing one cloned child board per
//!   available digit of a chosen cell.
//! - [`solve`]: the search driver tying the two together over a FIFO
//!   worklist, returning the first complete assignment found or
//!   [`Unsolvable`].
//!
//! # Examples
//!
//! ```
//! use bitdoku_core::Board;
//! use bitdoku_solver::solve;
//!
//! let puzzle: Board = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()
//! .unwrap();
//!
//! let solution = solve(&puzzle)?;
//! assert!(solution.is_solved());
//! println!("{solution}");
//! # Ok::<(), bitdoku_solver::Unsolvable>(())
//! ```

pub use self::{branch::*, propagate::*, search::*};

mod branch;
mod propagate;
mod search;

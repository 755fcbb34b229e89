//! Core value types for the tintoku graph-coloring sudoku solver.
//!
//! This crate provides the puzzle-domain vocabulary shared by the solver:
//!
//! - [`digit`]: Type-safe sudoku digits 1-9, doubling as the solver's colors
//! - [`position`]: Cell coordinates on the 9×9 board, with the canonical
//!   row-major enumeration order
//! - [`cell_set`]: An 81-bit set of board positions
//! - [`digit_set`]: A 9-bit set of digits
//! - [`grid`]: The 9×9 digit grid, with text parsing and rendering
//!
//! # Examples
//!
//! ```
//! use std::str::FromStr as _;
//!
//! use tintoku_core::{Digit, DigitGrid, Position};
//!
//! let grid = DigitGrid::from_str(
//!     "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//!     ",
//! )?;
//!
//! assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
//! assert_eq!(grid.get(Position::new(0, 2)), None);
//! assert_eq!(grid.given_count(), 30);
//! # Ok::<(), tintoku_core::GridParseError>(())
//! ```

pub mod cell_set;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

pub use self::{
    cell_set::CellSet,
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, GridParseError},
    position::Position,
};

//! Sudoku solving by greedy graph coloring.
//!
//! A sudoku puzzle is a graph-coloring problem in disguise: take one node per
//! cell, connect every pair of cells that may not share a value (same row,
//! column, or 3×3 box), and a solution is a proper 9-coloring of that graph
//! with the digits as colors.
//!
//! This crate provides the two halves of that view:
//!
//! - [`ConstraintGraph`]: the fixed 81-node, 20-regular constraint graph,
//!   puzzle-independent and built once
//! - [`greedy::color`]: a single-pass greedy colorer that seeds the givens
//!   and fills the remaining cells in row-major order
//!
//! Greedy coloring without backtracking is deliberately incomplete: a cell
//! whose colored neighbors already use all nine digits is left unassigned.
//! [`Coloring::is_complete`] and [`Coloring::uncolored`] expose that outcome
//! to callers; [`validate`] offers the optional consistency checks the
//! colorer itself never performs.
//!
//! # Examples
//!
//! ```
//! use std::str::FromStr as _;
//!
//! use tintoku_core::DigitGrid;
//! use tintoku_solver::{ConstraintGraph, greedy};
//!
//! let puzzle = DigitGrid::from_str(
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
//! let coloring = greedy::color(ConstraintGraph::shared(), &puzzle);
//! println!("{coloring}");
//! # Ok::<(), tintoku_core::GridParseError>(())
//! ```

pub use self::{coloring::*, error::*, graph::*};

mod coloring;
mod error;
mod graph;
pub mod greedy;
pub mod validate;

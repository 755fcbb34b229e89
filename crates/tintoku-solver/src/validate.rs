//! Optional consistency checks.
//!
//! The greedy colorer itself never validates anything: conflicting givens are
//! seeded silently, and the resulting coloring is printed as-is by a caller
//! that wants reference behavior. This module is the clearly separate layer
//! for callers that do want guarantees:
//!
//! - [`check_grid`] rejects a puzzle whose givens already conflict, before
//!   solving
//! - [`check_coloring`] verifies that a produced coloring is proper on its
//!   assigned cells, after solving
//!
//! Both scan cells in row-major order and report the first conflict found,
//! so the error is deterministic for a given input.

use tintoku_core::{Digit, DigitGrid, Position};

use crate::{coloring::Coloring, error::Conflict, graph::ConstraintGraph};

/// Checks that no two peer givens of the puzzle share a digit.
///
/// # Errors
///
/// Returns the first [`Conflict`] found in a row-major scan.
///
/// # Examples
///
/// ```
/// use tintoku_core::{Digit, DigitGrid, Position};
/// use tintoku_solver::{ConstraintGraph, validate};
///
/// let mut puzzle = DigitGrid::new();
/// puzzle.set(Position::new(0, 0), Some(Digit::D5));
/// puzzle.set(Position::new(0, 3), Some(Digit::D5));
///
/// let conflict = validate::check_grid(ConstraintGraph::shared(), &puzzle).unwrap_err();
/// assert_eq!(conflict.first, Position::new(0, 0));
/// assert_eq!(conflict.second, Position::new(0, 3));
/// ```
pub fn check_grid(graph: &ConstraintGraph, puzzle: &DigitGrid) -> Result<(), Conflict> {
    first_conflict(graph, |pos| puzzle.get(pos))
}

/// Checks that the assigned cells of a coloring form a proper coloring.
///
/// Uncolored cells are skipped: a partial coloring is proper as long as no
/// two *assigned* peers share a digit.
///
/// # Errors
///
/// Returns the first [`Conflict`] found in a row-major scan.
pub fn check_coloring(graph: &ConstraintGraph, coloring: &Coloring) -> Result<(), Conflict> {
    first_conflict(graph, |pos| coloring.digit(pos))
}

/// Scans edges in row-major order of their earlier endpoint and reports the
/// first pair of equal-digit peers.
fn first_conflict<F>(graph: &ConstraintGraph, digit_at: F) -> Result<(), Conflict>
where
    F: Fn(Position) -> Option<Digit>,
{
    for first in Position::all() {
        let Some(digit) = digit_at(first) else {
            continue;
        };
        for second in graph.neighbors(first) {
            // visit each edge once, from its earlier endpoint
            if second <= first {
                continue;
            }
            if digit_at(second) == Some(digit) {
                return Err(Conflict {
                    first,
                    second,
                    digit,
                });
            }
        }
    }
    Ok(())
}

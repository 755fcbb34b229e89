//! Single-pass greedy coloring of the constraint graph.
//!
//! The algorithm runs in two strictly ordered phases:
//!
//! 1. **Seed**: every given of the puzzle is copied into the coloring
//!    unchanged. No consistency checking happens here; a puzzle whose givens
//!    conflict is seeded as-is (see [`validate::check_grid`] for the opt-in
//!    pre-check).
//! 2. **Fill**: every still-uncolored cell is visited in row-major order
//!    ([`Position::all`]). The cell receives the smallest digit not used by
//!    any of its already-colored neighbors, or stays uncolored when all nine
//!    digits are taken.
//!
//! Because there is no backtracking, a cell's assignment depends only on
//! neighbors colored before it — seeded neighbors and fill-phase neighbors
//! with a smaller row-major index. Later neighbors have no influence. That
//! makes the result fully deterministic, and also incomplete on some inputs:
//! greedy coloring is a heuristic, not a certified solver. Callers needing a
//! guaranteed solution must check [`Coloring::is_complete`].
//!
//! [`validate::check_grid`]: crate::validate::check_grid

use tintoku_core::{DigitGrid, DigitSet, Position};

use crate::{coloring::Coloring, graph::ConstraintGraph};

/// Colors the constraint graph for the given puzzle.
///
/// Seeds the puzzle's givens, then greedily fills the remaining cells in
/// row-major order. Neither input is mutated; calling twice with the same
/// inputs yields an identical coloring.
///
/// The result may be partial: a cell whose 20 neighbors already use all nine
/// digits at visitation time is silently left unassigned.
///
/// # Examples
///
/// ```
/// use tintoku_core::{Digit, DigitGrid, Position};
/// use tintoku_solver::{ConstraintGraph, greedy};
///
/// let coloring = greedy::color(ConstraintGraph::shared(), &DigitGrid::new());
///
/// // On the empty puzzle the first row is filled 1..9
/// assert_eq!(coloring.digit(Position::new(0, 0)), Some(Digit::D1));
/// assert_eq!(coloring.digit(Position::new(0, 8)), Some(Digit::D9));
/// ```
#[must_use]
pub fn color(graph: &ConstraintGraph, puzzle: &DigitGrid) -> Coloring {
    let mut coloring = Coloring::new();
    seed(&mut coloring, puzzle);
    fill(&mut coloring, graph);
    coloring
}

/// Seed phase: copies every given into the coloring, unchecked.
fn seed(coloring: &mut Coloring, puzzle: &DigitGrid) {
    for (pos, digit) in puzzle.givens() {
        coloring.assign(pos, digit);
    }
}

/// Fill phase: assigns each uncolored cell the smallest digit absent from
/// its already-colored neighbors, in row-major order.
fn fill(coloring: &mut Coloring, graph: &ConstraintGraph) {
    for pos in Position::all() {
        if coloring.digit(pos).is_some() {
            continue;
        }
        let used: DigitSet = graph
            .neighbors(pos)
            .iter()
            .filter_map(|neighbor| coloring.digit(neighbor))
            .collect();
        if let Some(digit) = used.smallest_missing() {
            coloring.assign(pos, digit);
        }
        // all nine digits taken: the cell stays uncolored
    }
}

//! The coloring produced by a solve call.

use std::fmt::{self, Display};

use tintoku_core::{CellSet, Digit, DigitGrid, Position, position::CELL_COUNT};

/// An assignment of digits (colors) to board cells.
///
/// A coloring is created fresh per solve call and may be *partial*: the
/// greedy colorer leaves a cell unassigned when its colored neighbors
/// already use all nine digits. Incompleteness is surfaced as data, not as
/// an error — check [`is_complete`] or [`uncolored`] when a full solution is
/// required.
///
/// [`is_complete`]: Coloring::is_complete
/// [`uncolored`]: Coloring::uncolored
///
/// # Examples
///
/// ```
/// use tintoku_core::DigitGrid;
/// use tintoku_solver::{ConstraintGraph, greedy};
///
/// let coloring = greedy::color(ConstraintGraph::shared(), &DigitGrid::new());
/// if !coloring.is_complete() {
///     for cell in coloring.uncolored() {
///         eprintln!("no color for {cell}");
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coloring {
    cells: [Option<Digit>; CELL_COUNT],
}

impl Default for Coloring {
    fn default() -> Self {
        Self::new()
    }
}

impl Coloring {
    /// Creates a coloring with every cell unassigned.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Assigns a digit to a cell.
    ///
    /// Only the solver builds colorings; consumers read them.
    pub(crate) const fn assign(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = Some(digit);
    }

    /// Returns the digit assigned to a cell, or `None` if the cell is
    /// uncolored.
    #[must_use]
    pub const fn digit(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Returns the zero-based color (0-8) assigned to a cell, or `None` if
    /// the cell is uncolored.
    #[must_use]
    pub fn color(&self, pos: Position) -> Option<u8> {
        self.digit(pos).map(Digit::color_index)
    }

    /// Returns the number of cells that have been assigned a digit.
    #[must_use]
    pub fn assigned_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if all 81 cells are assigned.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.assigned_count() == CELL_COUNT
    }

    /// Returns the set of cells left without a color.
    #[must_use]
    pub fn uncolored(&self) -> CellSet {
        Position::all()
            .filter(|pos| self.digit(*pos).is_none())
            .collect()
    }

    /// Converts the coloring into a digit grid, with uncolored cells empty.
    #[must_use]
    pub fn to_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::all() {
            grid.set(pos, self.digit(pos));
        }
        grid
    }
}

impl Display for Coloring {
    /// Renders 9 lines of 9 space-separated digits, `_` for uncolored cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_grid(), f)
    }
}

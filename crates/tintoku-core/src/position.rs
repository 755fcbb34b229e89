//! Cell positions on the 9×9 board.
//!
//! The solver's results depend on the order in which cells are visited, so the
//! enumeration order is part of this module's contract: [`Position::all`]
//! yields cells in row-major order (row 0 left to right, then row 1, ...),
//! and [`Position::index`] is the matching linear index 0-80.

use std::fmt::{self, Display};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 81;

/// A cell position on the 9×9 board, addressed by `(row, col)`.
///
/// Both coordinates are in the range 0-8, enforced at construction time.
/// Positions are plain values: they are never mutated, only referenced.
///
/// # Examples
///
/// ```
/// use tintoku_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.box_index(), 5);
/// assert_eq!(pos.index(), 43);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9, "Row must be 0-8");
        assert!(col < 9, "Column must be 0-8");
        Self { row, col }
    }

    /// Creates a position from its row-major linear index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    ///
    /// # Examples
    ///
    /// ```
    /// use tintoku_core::Position;
    ///
    /// assert_eq!(Position::from_index(0), Position::new(0, 0));
    /// assert_eq!(Position::from_index(80), Position::new(8, 8));
    /// ```
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < CELL_COUNT, "Cell index must be 0-80");
        Self::new((index / 9) as u8, (index % 9) as u8)
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index of the containing 3×3 box (0-8, left to right, top
    /// to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Returns the row-major linear index of this position (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Returns an iterator over all 81 positions in row-major order.
    ///
    /// This is the canonical cell enumeration order: the greedy colorer
    /// visits cells in exactly this order, so it is part of the public
    /// contract rather than an implementation detail.
    ///
    /// # Examples
    ///
    /// ```
    /// use tintoku_core::Position;
    ///
    /// let all: Vec<_> = Position::all().collect();
    /// assert_eq!(all.len(), 81);
    /// assert_eq!(all[0], Position::new(0, 0));
    /// assert_eq!(all[1], Position::new(0, 1));
    /// assert_eq!(all[9], Position::new(1, 0));
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CELL_COUNT).map(Self::from_index)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

//! The 9×9 digit grid.
//!
//! [`DigitGrid`] is the puzzle handed to the solver: each cell either holds a
//! given digit or is empty. Grids can be built programmatically, parsed from
//! text, or constructed from raw `[[u8; 9]; 9]` rows with fail-fast range
//! validation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{
    cell_set::CellSet,
    digit::Digit,
    position::{CELL_COUNT, Position},
};

/// Error produced when constructing a [`DigitGrid`] from external input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The text contained a character that is neither a digit, an empty-cell
    /// marker, nor whitespace.
    #[display("invalid character in grid: {ch:?}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
    /// The text did not contain exactly 81 cells.
    #[display("expected 81 cells, found {found}")]
    WrongCellCount {
        /// Number of cells found.
        found: usize,
    },
    /// A raw cell value was outside the range 0-9.
    #[display("cell value out of range at {pos}: {value}")]
    ValueOutOfRange {
        /// The cell holding the bad value.
        pos: Position,
        /// The rejected value.
        value: u8,
    },
}

/// A 9×9 grid of optional digits.
///
/// `None` marks an empty (unknown) cell; `Some(digit)` marks a given. The
/// grid is the immutable input to the coloring step: the solver reads givens
/// from it and never writes back.
///
/// # Text format
///
/// [`FromStr`] accepts digits `1`-`9` for givens and `0`, `.`, or `_` for
/// empty cells; all whitespace is ignored. [`Display`] renders 9 lines of 9
/// space-separated symbols, with `_` for empty cells.
///
/// # Examples
///
/// ```
/// use std::str::FromStr as _;
///
/// use tintoku_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(0, 0), Some(Digit::D5));
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
///
/// let parsed = DigitGrid::from_str("5________ _________ _________ _________ \
///     _________ _________ _________ _________ _________")?;
/// assert_eq!(parsed, grid);
/// # Ok::<(), tintoku_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; CELL_COUNT],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    /// Creates a grid with all 81 cells empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Creates a grid from raw row-major values, where `0` means empty and
    /// `1`-`9` are givens.
    ///
    /// This is the fail-fast validation boundary for callers holding
    /// untrusted numeric input: values outside 0-9 are rejected with the
    /// offending cell named in the error. The 9×9 shape is enforced by the
    /// argument type.
    ///
    /// # Errors
    ///
    /// Returns [`GridParseError::ValueOutOfRange`] if any value exceeds 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use tintoku_core::{Digit, DigitGrid, Position};
    ///
    /// let mut rows = [[0; 9]; 9];
    /// rows[4][4] = 7;
    /// let grid = DigitGrid::from_values(rows)?;
    /// assert_eq!(grid.get(Position::new(4, 4)), Some(Digit::D7));
    /// assert_eq!(grid.given_count(), 1);
    /// # Ok::<(), tintoku_core::GridParseError>(())
    /// ```
    pub fn from_values(rows: [[u8; 9]; 9]) -> Result<Self, GridParseError> {
        let mut grid = Self::new();
        for pos in Position::all() {
            let value = rows[usize::from(pos.row())][usize::from(pos.col())];
            if value > 9 {
                return Err(GridParseError::ValueOutOfRange { pos, value });
            }
            grid.set(pos, Digit::try_from_value(value));
        }
        Ok(grid)
    }

    /// Returns the digit at a position, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the digit at a position.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns an iterator over the given cells as `(Position, Digit)` pairs,
    /// in row-major order.
    pub fn givens(&self) -> impl Iterator<Item = (Position, Digit)> {
        Position::all().filter_map(|pos| self.get(pos).map(|digit| (pos, digit)))
    }

    /// Returns the set of positions holding a given.
    #[must_use]
    pub fn given_cells(&self) -> CellSet {
        self.givens().map(|(pos, _)| pos).collect()
    }

    /// Returns the number of given cells.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.givens().count()
    }
}

impl FromStr for DigitGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let digit = match ch {
                '0' | '.' | '_' => None,
                '1'..='9' => {
                    // `to_digit` cannot fail for '1'..='9'
                    #[expect(clippy::cast_possible_truncation)]
                    let value = ch.to_digit(10).map_or(0, |d| d as u8);
                    Some(Digit::from_value(value))
                }
                _ => return Err(GridParseError::InvalidCharacter { ch }),
            };
            if count >= CELL_COUNT {
                // keep counting so the error reports the full cell count
                count += 1;
                continue;
            }
            grid.cells[count] = digit;
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(GridParseError::WrongCellCount { found: count });
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            for col in 0..9 {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.get(Position::new(row, col)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Sudoku digit representation.
//!
//! In the graph-coloring view of sudoku, the nine digits are the nine colors:
//! digit `d` is color `d - 1`. [`Digit`] carries both views, so the solver
//! never juggles raw integers with off-by-one conventions.

use std::fmt::{self, Display};

/// A sudoku digit in the range 1-9.
///
/// Type-safe representation of a digit, preventing invalid values at compile
/// time. Each digit is also a graph color: [`color_index`] maps the digit to
/// the zero-based color 0-8 used by the greedy colorer, and
/// [`from_color_index`] maps back.
///
/// [`color_index`]: Digit::color_index
/// [`from_color_index`]: Digit::from_color_index
///
/// # Examples
///
/// ```
/// use tintoku_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
/// assert_eq!(digit.color_index(), 4);
/// assert_eq!(Digit::from_color_index(4), Digit::D5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// Array containing all digits from 1 to 9, in ascending order.
    ///
    /// The order matters to the greedy colorer: "smallest available color"
    /// means the first available digit in this order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a u8 value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use tintoku_core::Digit;
    ///
    /// assert_eq!(Digit::from_value(5), Digit::D5);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value).unwrap_or_else(|| panic!("Invalid digit value: {value}"))
    }

    /// Creates a digit from a u8 value, returning `None` outside 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use tintoku_core::Digit;
    ///
    /// assert_eq!(Digit::try_from_value(9), Some(Digit::D9));
    /// assert_eq!(Digit::try_from_value(0), None);
    /// assert_eq!(Digit::try_from_value(10), None);
    /// ```
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Creates a digit from a zero-based color index in the range 0-8.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use tintoku_core::Digit;
    ///
    /// assert_eq!(Digit::from_color_index(0), Digit::D1);
    /// assert_eq!(Digit::from_color_index(8), Digit::D9);
    /// ```
    #[must_use]
    pub fn from_color_index(index: u8) -> Self {
        assert!(index < 9, "Color index must be 0-8, got {index}");
        Self::from_value(index + 1)
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the zero-based color index of this digit (0-8).
    #[must_use]
    pub const fn color_index(self) -> u8 {
        self as u8 - 1
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_round_trip() {
        for digit in Digit::ALL {
            assert_eq!(Digit::from_value(digit.value()), digit);
            assert_eq!(Digit::try_from_value(digit.value()), Some(digit));
        }
    }

    #[test]
    fn test_color_index_round_trip() {
        for digit in Digit::ALL {
            assert_eq!(digit.color_index(), digit.value() - 1);
            assert_eq!(Digit::from_color_index(digit.color_index()), digit);
        }
    }

    #[test]
    fn test_all_is_ascending() {
        assert_eq!(Digit::ALL.len(), 9);
        for (i, digit) in (1..).zip(Digit::ALL) {
            assert_eq!(digit.value(), i);
        }
    }

    #[test]
    fn test_display_and_conversion() {
        assert_eq!(format!("{}", Digit::D1), "1");
        assert_eq!(format!("{}", Digit::D9), "9");
        let value: u8 = Digit::D5.into();
        assert_eq!(value, 5);
    }

    #[test]
    fn test_try_from_value_rejects_out_of_range() {
        assert_eq!(Digit::try_from_value(0), None);
        assert_eq!(Digit::try_from_value(10), None);
        assert_eq!(Digit::try_from_value(255), None);
    }

    #[test]
    #[should_panic(expected = "Invalid digit value: 0")]
    fn test_from_value_zero_panics() {
        let _ = Digit::from_value(0);
    }

    #[test]
    #[should_panic(expected = "Color index must be 0-8, got 9")]
    fn test_from_color_index_nine_panics() {
        let _ = Digit::from_color_index(9);
    }
}

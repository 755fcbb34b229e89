//! A set of digits 1-9, backed by a 9-bit bitset.
//!
//! This is the greedy colorer's working set: the digits already used by a
//! cell's colored neighbors. [`DigitSet::smallest_missing`] implements the
//! "smallest color absent from the set" rule in a single bit operation.

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    ops::{BitAnd, BitOr, BitOrAssign},
};

use crate::digit::Digit;

const FULL_BITS: u16 = (1 << 9) - 1;

/// A set of [`Digit`]s.
///
/// Stored as a `u16` with bits 0-8 corresponding to digits 1-9 (bit index =
/// color index). Iteration yields digits in ascending order.
///
/// # Examples
///
/// ```
/// use tintoku_core::{Digit, DigitSet};
///
/// let mut used = DigitSet::new();
/// used.insert(Digit::D1);
/// used.insert(Digit::D2);
/// used.insert(Digit::D4);
///
/// // The smallest digit not in the set
/// assert_eq!(used.smallest_missing(), Some(Digit::D3));
///
/// assert_eq!(DigitSet::FULL.smallest_missing(), None);
/// ```
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all nine digits.
    pub const FULL: Self = Self { bits: FULL_BITS };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Inserts a digit into the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.bits |= 1 << digit.color_index();
    }

    /// Removes a digit from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.bits &= !(1 << digit.color_index());
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & (1 << digit.color_index()) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns `true` if the set contains all nine digits.
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.bits == FULL_BITS
    }

    /// Returns the smallest digit NOT contained in the set, or `None` if the
    /// set is full.
    ///
    /// This is the greedy coloring rule: with digits as colors, the smallest
    /// missing digit is the smallest available color.
    ///
    /// # Examples
    ///
    /// ```
    /// use tintoku_core::{Digit, DigitSet};
    ///
    /// assert_eq!(DigitSet::EMPTY.smallest_missing(), Some(Digit::D1));
    ///
    /// let used = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
    /// assert_eq!(used.smallest_missing(), Some(Digit::D4));
    /// ```
    #[must_use]
    pub fn smallest_missing(self) -> Option<Digit> {
        let missing = !self.bits & FULL_BITS;
        if missing == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = missing.trailing_zeros() as u8;
        Some(Digit::from_color_index(index))
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<T: IntoIterator<Item = Digit>>(iter: T) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Digit::from_color_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}

//! A set of board positions, backed by an 81-bit bitset.
//!
//! Bit `i` corresponds to the cell with row-major index `i`, so iteration
//! yields positions in the same row-major order as [`Position::all`]. This is
//! the representation used for graph adjacency, where idempotent insertion
//! (a simple graph, not a multigraph) comes for free.

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::position::{CELL_COUNT, Position};

const FULL_BITS: u128 = (1 << CELL_COUNT) - 1;

/// A set of cell [`Position`]s on the 9×9 board.
///
/// Stored as a `u128` with bits 0-80 corresponding to row-major cell indices.
/// All operations are O(1); iteration visits positions in ascending row-major
/// order.
///
/// # Examples
///
/// ```
/// use tintoku_core::{CellSet, Position};
///
/// let mut set = CellSet::new();
/// set.insert(Position::new(0, 0));
/// set.insert(Position::new(4, 4));
/// set.insert(Position::new(0, 0)); // duplicate insertion is a no-op
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Position::new(4, 4)));
///
/// let cells: Vec<_> = set.iter().collect();
/// assert_eq!(cells, vec![Position::new(0, 0), Position::new(4, 4)]);
/// ```
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellSet {
    bits: u128,
}

impl CellSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all 81 positions.
    pub const FULL: Self = Self { bits: FULL_BITS };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Inserts a position into the set.
    ///
    /// Inserting a position that is already present has no effect.
    pub const fn insert(&mut self, pos: Position) {
        self.bits |= 1 << pos.index();
    }

    /// Removes a position from the set.
    pub const fn remove(&mut self, pos: Position) {
        self.bits &= !(1 << pos.index());
    }

    /// Returns `true` if the set contains the position.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        self.bits & (1 << pos.index()) != 0
    }

    /// Returns the number of positions in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the positions in ascending row-major order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitAnd for CellSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitAndAssign for CellSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl BitOr for CellSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for CellSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl FromIterator<Position> for CellSet {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        let mut set = Self::new();
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl IntoIterator for CellSet {
    type Item = Position;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the positions of a [`CellSet`], in ascending row-major order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u128,
}

impl Iterator for Iter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(Position::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = CellSet::new();
        let pos = Position::new(3, 5);

        assert!(!set.contains(pos));
        set.insert(pos);
        assert!(set.contains(pos));
        assert_eq!(set.len(), 1);

        set.remove(pos);
        assert!(!set.contains(pos));
        assert!(set.is_empty());
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = CellSet::new();
        set.insert(Position::new(0, 0));
        set.insert(Position::new(0, 0));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_constants() {
        assert_eq!(CellSet::EMPTY.len(), 0);
        assert_eq!(CellSet::FULL.len(), 81);
        for pos in Position::all() {
            assert!(CellSet::FULL.contains(pos));
        }
    }

    #[test]
    fn test_iteration_is_row_major() {
        let set = CellSet::from_iter([
            Position::new(8, 8),
            Position::new(0, 1),
            Position::new(0, 0),
            Position::new(4, 4),
        ]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(
            collected,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(4, 4),
                Position::new(8, 8),
            ]
        );
    }

    #[test]
    fn test_bit_operations() {
        let a = CellSet::from_iter([Position::new(0, 0), Position::new(0, 1)]);
        let b = CellSet::from_iter([Position::new(0, 1), Position::new(0, 2)]);

        assert_eq!(
            a | b,
            CellSet::from_iter([
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2),
            ])
        );
        assert_eq!(a & b, CellSet::from_iter([Position::new(0, 1)]));
    }

    #[test]
    fn test_exact_size_iterator() {
        let set = CellSet::from_iter([Position::new(1, 1), Position::new(2, 2)]);
        let iter = set.iter();
        assert_eq!(iter.len(), 2);
    }

    proptest! {
        #[test]
        fn prop_from_iter_round_trip(indices in prop::collection::btree_set(0usize..81, 0..=81)) {
            let positions: Vec<_> = indices.iter().map(|&i| Position::from_index(i)).collect();
            let set: CellSet = positions.iter().copied().collect();

            prop_assert_eq!(set.len(), positions.len());
            let collected: Vec<_> = set.iter().collect();
            prop_assert_eq!(collected, positions);
        }

        #[test]
        fn prop_union_contains_both_operands(
            a in prop::collection::btree_set(0usize..81, 0..=20),
            b in prop::collection::btree_set(0usize..81, 0..=20),
        ) {
            let sa: CellSet = a.iter().map(|&i| Position::from_index(i)).collect();
            let sb: CellSet = b.iter().map(|&i| Position::from_index(i)).collect();
            let union = sa | sb;
            for &i in a.iter().chain(&b) {
                prop_assert!(union.contains(Position::from_index(i)));
            }
            prop_assert_eq!(union.len(), a.union(&b).count());
        }
    }
}

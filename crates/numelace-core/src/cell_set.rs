//! A compact set of board cells.
//!
//! [`CellSet`] stores membership for the 81 cells in a single `u128`. It is
//! `Copy`, so passing it by value hands the callee an independent snapshot;
//! backtracking searches rely on this instead of undoing shared state.
//!
//! # Examples
//!
//! ```
//! use numelace_core::{Cell, CellSet};
//!
//! let mut used = CellSet::EMPTY;
//! used.insert(Cell::new(10));
//!
//! let branch = used.with(Cell::new(11));
//! assert_eq!(branch.len(), 2);
//! assert_eq!(used.len(), 1); // the original is untouched
//! ```

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not},
};

use crate::Cell;

const MASK: u128 = (1_u128 << Cell::COUNT) - 1;

/// A set of cells, represented as an 81-bit mask.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellSet {
    bits: u128,
}

impl CellSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set of all 81 cells.
    pub const FULL: Self = Self { bits: MASK };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Inserts a cell. Returns `true` if it was not already present.
    pub fn insert(&mut self, cell: Cell) -> bool {
        let bit = 1_u128 << cell.index();
        let added = self.bits & bit == 0;
        self.bits |= bit;
        added
    }

    /// Removes a cell. Returns `true` if it was present.
    pub fn remove(&mut self, cell: Cell) -> bool {
        let bit = 1_u128 << cell.index();
        let present = self.bits & bit != 0;
        self.bits &= !bit;
        present
    }

    /// Returns a copy of this set with `cell` inserted.
    #[must_use]
    pub const fn with(self, cell: Cell) -> Self {
        Self {
            bits: self.bits | (1_u128 << cell.index()),
        }
    }

    /// Returns `true` if the set contains `cell`.
    #[must_use]
    #[inline]
    pub const fn contains(&self, cell: Cell) -> bool {
        self.bits & (1_u128 << cell.index()) != 0
    }

    /// Returns the number of cells in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns `true` if the two sets share at least one cell.
    #[must_use]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.bits & other.bits != 0
    }

    /// Returns the lowest-indexed cell, if any.
    #[must_use]
    pub fn first(&self) -> Option<Cell> {
        self.iter().next()
    }

    /// Iterates over the cells in ascending index order.
    #[must_use]
    pub fn iter(&self) -> CellSetIter {
        CellSetIter { bits: self.bits }
    }
}

impl Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Cell::index)).finish()
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

impl Not for CellSet {
    type Output = Self;

    fn not(self) -> Self {
        Self {
            bits: !self.bits & MASK,
        }
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Cell> for CellSet {
    fn extend<T: IntoIterator<Item = Cell>>(&mut self, iter: T) {
        for cell in iter {
            self.insert(cell);
        }
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = CellSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &CellSet {
    type Item = Cell;
    type IntoIter = CellSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the cells of a [`CellSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct CellSetIter {
    bits: u128,
}

impl Iterator for CellSetIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros();
        self.bits &= self.bits - 1;
        #[expect(clippy::cast_possible_truncation)]
        Some(Cell::new(index as u8))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for CellSetIter {}
impl ExactSizeIterator for CellSetIter {}

//! Filled numeral grids.
//!
//! A [`Grid`] holds one numeral (1-9) for every cell. Construction validates
//! the shape and the value range only; Sudoku uniqueness is the caller's
//! business and can be checked separately with [`Grid::is_sudoku_solution`].
//!
//! # Examples
//!
//! ```
//! use std::str::FromStr as _;
//!
//! use numelace_core::{Cell, Grid};
//!
//! let grid = Grid::from_str(
//!     "
//!     123 456 789
//!     456 789 123
//!     789 123 456
//!     234 567 891
//!     567 891 234
//!     891 234 567
//!     345 678 912
//!     678 912 345
//!     912 345 678
//! ",
//! )?;
//! assert_eq!(grid[Cell::new(10)], 5);
//! assert!(grid.is_sudoku_solution());
//! # Ok::<(), numelace_core::GridError>(())
//! ```

use std::{
    fmt::{self, Debug, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Cell, CellSet, House};

/// Errors produced when building a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The input did not contain exactly 81 values.
    #[display("grid must have 81 values, got {len}")]
    InvalidLength {
        /// Number of values found.
        len: usize,
    },
    /// A value was outside 1-9.
    #[display("invalid value {value} at index {index}")]
    InvalidValue {
        /// Position of the value in the input.
        index: usize,
        /// The rejected value.
        value: u8,
    },
    /// A character other than a digit 1-9 or whitespace was found.
    #[display("invalid character {ch:?} in grid")]
    InvalidCharacter {
        /// The rejected character.
        ch: char,
    },
}

/// A 9×9 grid of numerals, each in the range 1-9.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    values: [u8; 81],
}

impl Grid {
    /// Creates a grid from 81 row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidValue`] if any value is outside 1-9.
    pub fn new(values: [u8; 81]) -> Result<Self, GridError> {
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !(1..=9).contains(*v))
        {
            return Err(GridError::InvalidValue { index, value });
        }
        Ok(Self { values })
    }

    /// Creates a grid from a slice of row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidLength`] if the slice does not hold exactly
    /// 81 values, or [`GridError::InvalidValue`] for a value outside 1-9.
    pub fn from_slice(values: &[u8]) -> Result<Self, GridError> {
        let values = <[u8; 81]>::try_from(values)
            .map_err(|_| GridError::InvalidLength { len: values.len() })?;
        Self::new(values)
    }

    /// Creates a grid where every cell holds `fill`, except the listed cells.
    ///
    /// Useful for checking a constraint against a handful of digits.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidValue`] if `fill` or any listed value is
    /// outside 1-9.
    pub fn from_cells<I>(fill: u8, cells: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (Cell, u8)>,
    {
        let mut values = [fill; 81];
        for (cell, value) in cells {
            values[cell.index()] = value;
        }
        Self::new(values)
    }

    /// Returns the value at `cell`.
    #[must_use]
    #[inline]
    pub const fn value(&self, cell: Cell) -> u8 {
        self.values[cell.index()]
    }

    /// Returns all values in row-major order.
    #[must_use]
    pub const fn values(&self) -> &[u8; 81] {
        &self.values
    }

    /// Returns `true` if every row, column and box holds each numeral once.
    #[must_use]
    pub fn is_sudoku_solution(&self) -> bool {
        House::ALL.iter().all(|house| {
            let mut seen = 0_u16;
            for cell in house.cells() {
                seen |= 1_u16 << self.value(cell);
            }
            seen == 0b11_1111_1110
        })
    }

    /// Returns the cells holding `value`.
    #[must_use]
    pub fn cells_with(&self, value: u8) -> CellSet {
        Cell::ALL
            .into_iter()
            .filter(|&cell| self.value(cell) == value)
            .collect()
    }
}

impl Index<Cell> for Grid {
    type Output = u8;

    fn index(&self, cell: Cell) -> &u8 {
        &self.values[cell.index()]
    }
}

impl TryFrom<&[u8]> for Grid {
    type Error = GridError;

    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses 81 digits in row-major order. Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::with_capacity(81);
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            #[expect(clippy::cast_possible_truncation)]
            let value = ch
                .to_digit(10)
                .filter(|d| (1..=9).contains(d))
                .ok_or(GridError::InvalidCharacter { ch })? as u8;
            values.push(value);
        }
        Self::from_slice(&values)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.values.chunks(9).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, value) in chunk.iter().enumerate() {
                if col > 0 && col % 3 == 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(\n{self}\n)")
    }
}

//! Cell addressing and grid geometry.
//!
//! A [`Cell`] is one of the 81 positions of the board, stored as a row-major
//! index. All geometry (neighbours, direction steps, knight moves) is computed
//! with signed offsets and checked against the 9×9 bounds; a move that would
//! leave the board yields `None` rather than wrapping around.
//!
//! # Examples
//!
//! ```
//! use numelace_core::{Cell, Direction};
//!
//! let cell = Cell::from_row_col(4, 4)?;
//! assert_eq!(cell.index(), 40);
//! assert_eq!(cell.adjacent_neighbors().count(), 8);
//!
//! let corner = Cell::new(0);
//! assert_eq!(corner.step(Direction::North, 1), None);
//! assert_eq!(corner.step(Direction::SouthEast, 2), Some(Cell::new(20)));
//! # Ok::<(), numelace_core::GeometryError>(())
//! ```

use std::fmt::{self, Display};

/// Number of rows (and columns) of the board.
pub const SIZE: u8 = 9;

/// Returns `true` if `coord` is a valid row or column coordinate (0-8).
#[must_use]
#[inline]
pub const fn in_range(coord: i16) -> bool {
    coord >= 0 && coord < SIZE as i16
}

/// Errors produced when addressing cells outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeometryError {
    /// A linear cell index was not in the range 0-80.
    #[display("cell index out of range: {index}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
    },
    /// A row/column pair was not inside the 9×9 board.
    #[display("coordinate out of range: row {row}, column {col}")]
    CoordinateOutOfRange {
        /// The rejected row.
        row: i16,
        /// The rejected column.
        col: i16,
    },
}

/// One of the eight compass directions.
///
/// `dx` grows to the east (columns) and `dy` grows to the south (rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    North,
    /// Up and to the right.
    NorthEast,
    /// Towards column 8.
    East,
    /// Down and to the right.
    SouthEast,
    /// Towards row 8.
    South,
    /// Down and to the left.
    SouthWest,
    /// Towards column 0.
    West,
    /// Up and to the left.
    NorthWest,
}

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// The four orthogonal directions.
    pub const ORTHOGONALS: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The four diagonal directions.
    pub const DIAGONALS: [Self; 4] = [
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
        Self::NorthWest,
    ];

    /// Returns the `(dx, dy)` unit vector of this direction.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::North => (0, -1),
            Self::NorthEast => (1, -1),
            Self::East => (1, 0),
            Self::SouthEast => (1, 1),
            Self::South => (0, 1),
            Self::SouthWest => (-1, 1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, -1),
        }
    }

    /// Returns `true` for the four diagonal directions.
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        let (dx, dy) = self.delta();
        dx != 0 && dy != 0
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::South => Self::North,
            Self::SouthWest => Self::NorthEast,
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
        }
    }

    /// Returns the direction of a single king move from `from` to `to`.
    ///
    /// Returns `None` if the cells are equal or not adjacent.
    #[must_use]
    pub fn between(from: Cell, to: Cell) -> Option<Self> {
        let delta = from.delta(to);
        Self::ALL.into_iter().find(|dir| dir.delta() == delta)
    }

    /// Returns the angle of this direction in degrees, clockwise from east.
    ///
    /// This matches screen coordinates where y grows downwards.
    #[must_use]
    pub const fn angle_degrees(self) -> u16 {
        match self {
            Self::East => 0,
            Self::SouthEast => 45,
            Self::South => 90,
            Self::SouthWest => 135,
            Self::West => 180,
            Self::NorthWest => 225,
            Self::North => 270,
            Self::NorthEast => 315,
        }
    }
}

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
];

/// A cell of the 9×9 board, addressed by its row-major index (0-80).
///
/// `Cell` is a small `Copy` value with no identity beyond its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    index: u8,
}

impl Cell {
    /// Number of cells on the board.
    pub const COUNT: usize = 81;

    /// All 81 cells in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { index: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Creates a cell from a row-major index.
    ///
    /// Intended for literals; use [`Cell::try_new`] for untrusted input.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 81, "cell index must be 0-80");
        Self { index }
    }

    /// Creates a cell from a row-major index.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfRange`] if `index` is 81 or larger.
    pub fn try_new(index: usize) -> Result<Self, GeometryError> {
        u8::try_from(index)
            .ok()
            .filter(|&i| usize::from(i) < Self::COUNT)
            .map(|index| Self { index })
            .ok_or(GeometryError::IndexOutOfRange { index })
    }

    /// Creates a cell from a row and a column.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CoordinateOutOfRange`] if either coordinate is
    /// outside 0-8.
    pub fn from_row_col(row: i16, col: i16) -> Result<Self, GeometryError> {
        if !in_range(row) || !in_range(col) {
            return Err(GeometryError::CoordinateOutOfRange { row, col });
        }
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (row * 9 + col) as u8;
        Ok(Self { index })
    }

    /// Returns the row-major index (0-80).
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    /// Returns the row (0-8).
    #[must_use]
    #[inline]
    pub const fn row(self) -> u8 {
        self.index / SIZE
    }

    /// Returns the column (0-8).
    #[must_use]
    #[inline]
    pub const fn col(self) -> u8 {
        self.index % SIZE
    }

    /// Returns the index of the 3×3 box containing this cell (0-8, row-major).
    #[must_use]
    #[inline]
    pub const fn box_index(self) -> u8 {
        (self.row() / 3) * 3 + self.col() / 3
    }

    /// Returns the signed `(dx, dy)` offset from `self` to `other`.
    #[must_use]
    #[inline]
    #[expect(clippy::cast_possible_wrap)]
    pub const fn delta(self, other: Self) -> (i8, i8) {
        (
            other.col() as i8 - self.col() as i8,
            other.row() as i8 - self.row() as i8,
        )
    }

    /// Returns the cell shifted by `(dx, dy)`, or `None` if it leaves the board.
    #[must_use]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let row = i16::from(self.row()) + i16::from(dy);
        let col = i16::from(self.col()) + i16::from(dx);
        Self::from_row_col(row, col).ok()
    }

    /// Returns the cell `distance` steps away in `direction`, or `None` if any
    /// axis leaves the board.
    #[must_use]
    pub fn step(self, direction: Direction, distance: u8) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let distance = i8::try_from(distance).ok()?;
        self.offset(dx.checked_mul(distance)?, dy.checked_mul(distance)?)
    }

    /// Returns `true` if `other` is a king's move away from this cell.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let (dx, dy) = self.delta(other);
        (dx != 0 || dy != 0) && dx.abs() <= 1 && dy.abs() <= 1
    }

    /// Returns `true` if `other` shares an edge with this cell.
    #[must_use]
    pub const fn is_orthogonal_to(self, other: Self) -> bool {
        let (dx, dy) = self.delta(other);
        dx.abs() + dy.abs() == 1
    }

    /// Returns the up to four cells sharing an edge with this cell.
    pub fn orthogonal_neighbors(self) -> impl Iterator<Item = Self> {
        Direction::ORTHOGONALS
            .into_iter()
            .filter_map(move |dir| self.step(dir, 1))
    }

    /// Returns the up to eight cells a king's move away, clockwise from north.
    pub fn adjacent_neighbors(self) -> impl Iterator<Item = Self> {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(dir, 1))
    }

    /// Returns the up to eight cells a knight's move away.
    pub fn knight_moves(self) -> impl Iterator<Item = Self> {
        KNIGHT_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl TryFrom<usize> for Cell {
    type Error = GeometryError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::try_new(index)
    }
}

impl From<Cell> for usize {
    fn from(cell: Cell) -> usize {
        cell.index()
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row() + 1, self.col() + 1)
    }
}

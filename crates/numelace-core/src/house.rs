use crate::{Cell, CellSet};

/// A Sudoku house (row, column, or 3×3 box).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = [
        Self::Box { index: 0 },
        Self::Box { index: 1 },
        Self::Box { index: 2 },
        Self::Box { index: 3 },
        Self::Box { index: 4 },
        Self::Box { index: 5 },
        Self::Box { index: 6 },
        Self::Box { index: 7 },
        Self::Box { index: 8 },
    ];

    /// Array containing all houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8) into a board [`Cell`].
    ///
    /// Box cells are numbered left to right, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub const fn cell_at(self, i: u8) -> Cell {
        assert!(i < 9);
        match self {
            House::Row { y } => Cell::new(y * 9 + i),
            House::Column { x } => Cell::new(i * 9 + x),
            House::Box { index } => {
                let row = (index / 3) * 3 + i / 3;
                let col = (index % 3) * 3 + i % 3;
                Cell::new(row * 9 + col)
            }
        }
    }

    /// Returns the nine cells of this house in house order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..9).map(move |i| self.cell_at(i))
    }

    /// Returns the cells of this house as a set.
    #[must_use]
    pub fn cell_set(self) -> CellSet {
        self.cells().collect()
    }

    /// Returns `true` if the house contains `cell`.
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        match self {
            House::Row { y } => cell.row() == y,
            House::Column { x } => cell.col() == x,
            House::Box { index } => cell.box_index() == index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_cells() {
        let cells: Vec<_> = House::Box { index: 4 }.cells().map(Cell::index).collect();
        assert_eq!(cells, vec![30, 31, 32, 39, 40, 41, 48, 49, 50]);
    }

    #[test]
    fn test_every_cell_is_in_three_houses() {
        for cell in Cell::ALL {
            let count = House::ALL.iter().filter(|h| h.contains(cell)).count();
            assert_eq!(count, 3, "{cell}");
            for house in House::ALL.iter().filter(|h| h.contains(cell)) {
                assert!(house.cell_set().contains(cell));
            }
        }
    }
}

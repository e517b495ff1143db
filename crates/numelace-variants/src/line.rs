//! Validated cell paths shared by the line constraints.

use numelace_core::{Cell, CellSet, Grid};

use crate::{ConstraintError, shape::Point};

/// Minimum number of cells of a hand-built line.
pub const MIN_LINE_LEN: usize = 2;

/// An ordered path of distinct, king-adjacent cells that never crosses itself.
///
/// # Examples
///
/// ```
/// use numelace_core::Cell;
/// use numelace_variants::Line;
///
/// let line = Line::new([0, 10, 20].map(Cell::new).to_vec())?;
/// assert_eq!(line.first(), Cell::new(0));
/// assert_eq!(line.interior(), &[Cell::new(10)]);
///
/// // a line may not use both diagonals of a 2x2 block
/// assert!(Line::new([0, 1, 9, 10].map(Cell::new).to_vec()).is_ok());
/// assert!(Line::new([1, 9, 0, 10].map(Cell::new).to_vec()).is_err());
/// # Ok::<(), numelace_variants::ConstraintError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    cells: Vec<Cell>,
}

impl Line {
    /// Creates a line from its cells in order.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError`] if the line has fewer than
    /// [`MIN_LINE_LEN`] cells, repeats a cell, has a step that is not a
    /// king's move, or has a diagonal step crossing another one.
    pub fn new(cells: Vec<Cell>) -> Result<Self, ConstraintError> {
        if cells.len() < MIN_LINE_LEN {
            return Err(ConstraintError::TooShort {
                min: MIN_LINE_LEN,
                len: cells.len(),
            });
        }
        let mut seen = CellSet::new();
        for &cell in &cells {
            if !seen.insert(cell) {
                return Err(ConstraintError::RepeatedCell { cell });
            }
        }
        for pair in cells.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if !from.is_adjacent(to) {
                return Err(ConstraintError::Disconnected { from, to });
            }
            if crosses_diagonal(&cells, from, to) {
                return Err(ConstraintError::SelfCrossing { from, to });
            }
        }
        Ok(Self { cells })
    }

    /// Wraps cells produced by a search that already enforces the invariants.
    pub(crate) fn from_path(cells: Vec<Cell>) -> Self {
        debug_assert!(Self::new(cells.clone()).is_ok(), "invalid path {cells:?}");
        Self { cells }
    }

    /// Returns the cells in order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a line has at least [`MIN_LINE_LEN`] cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the first cell.
    #[must_use]
    pub fn first(&self) -> Cell {
        self.cells[0]
    }

    /// Returns the last cell.
    #[must_use]
    pub fn last(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Returns the cells between the two ends.
    #[must_use]
    pub fn interior(&self) -> &[Cell] {
        &self.cells[1..self.cells.len() - 1]
    }

    /// Returns the values along the line.
    pub fn values<'a>(&'a self, grid: &'a Grid) -> impl Iterator<Item = u8> + 'a {
        self.cells.iter().map(|&cell| grid[cell])
    }

    /// Returns `true` if the line passes through `cell`.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Returns the cells as a set.
    #[must_use]
    pub fn cell_set(&self) -> CellSet {
        self.cells.iter().copied().collect()
    }

    /// Returns the same line walked from the other end.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut cells = self.cells.clone();
        cells.reverse();
        Self { cells }
    }

    /// Returns the cell centres in order.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        self.cells.iter().copied().map(Point::center).collect()
    }
}

/// Returns `true` if the step `from -> to` is diagonal and crosses a diagonal
/// step already present in `path`.
///
/// A diagonal step `(x1, y1) -> (x2, y2)` crosses the path when the cells
/// `(x1, y2)` and `(x2, y1)` appear next to each other in it, in either order.
#[must_use]
pub fn crosses_diagonal(path: &[Cell], from: Cell, to: Cell) -> bool {
    let (dx, dy) = from.delta(to);
    if dx == 0 || dy == 0 {
        return false;
    }
    let (Some(a), Some(b)) = (from.offset(0, dy), from.offset(dx, 0)) else {
        return false;
    };
    path.windows(2)
        .any(|w| (w[0] == a && w[1] == b) || (w[0] == b && w[1] == a))
}

/// Returns `true` if any diagonal step of `path` crosses another one.
#[must_use]
pub fn crosses_itself(path: &[Cell]) -> bool {
    path.windows(2).any(|w| crosses_diagonal(path, w[0], w[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(indices: &[u8]) -> Vec<Cell> {
        indices.iter().copied().map(Cell::new).collect()
    }

    #[test]
    fn test_new_rejects_invalid_paths() {
        assert_eq!(
            Line::new(cells(&[4])),
            Err(ConstraintError::TooShort { min: 2, len: 1 })
        );
        assert_eq!(
            Line::new(cells(&[0, 1, 0])),
            Err(ConstraintError::RepeatedCell { cell: Cell::new(0) })
        );
        assert_eq!(
            Line::new(cells(&[0, 2])),
            Err(ConstraintError::Disconnected {
                from: Cell::new(0),
                to: Cell::new(2)
            })
        );
        // wrapping from column 8 to column 0 is not a step
        assert!(Line::new(cells(&[8, 9])).is_err());
    }

    #[test]
    fn test_crossing_detection() {
        // 1 -> 9 and 0 -> 10 cross in the middle of the 2x2 block
        let path = cells(&[1, 9]);
        assert!(crosses_diagonal(&path, Cell::new(0), Cell::new(10)));
        assert!(crosses_diagonal(&path, Cell::new(10), Cell::new(0)));
        assert!(!crosses_diagonal(&path, Cell::new(0), Cell::new(1)));

        // parallel diagonals do not cross
        let path = cells(&[0, 10]);
        assert!(!crosses_diagonal(&path, Cell::new(1), Cell::new(11)));

        assert!(crosses_itself(&cells(&[1, 9, 0, 10])));
        assert!(!crosses_itself(&cells(&[0, 10, 1, 11])));
        assert_eq!(
            Line::new(cells(&[1, 9, 0, 10])),
            Err(ConstraintError::SelfCrossing {
                from: Cell::new(1),
                to: Cell::new(9)
            })
        );
    }

    #[test]
    fn test_accessors() {
        let line = Line::new(cells(&[18, 10, 20, 12, 3])).unwrap();
        assert_eq!(line.len(), 5);
        assert!(!line.is_empty());
        assert_eq!(line.first(), Cell::new(18));
        assert_eq!(line.last(), Cell::new(3));
        assert_eq!(line.interior(), &cells(&[10, 20, 12])[..]);
        assert!(line.contains(Cell::new(20)));
        assert!(!line.contains(Cell::new(19)));
        assert_eq!(line.cell_set().len(), 5);
        assert_eq!(line.reversed().first(), Cell::new(3));
        assert_eq!(line.reversed().reversed(), line);
        assert_eq!(line.points()[0], Point::center(Cell::new(18)));
    }
}

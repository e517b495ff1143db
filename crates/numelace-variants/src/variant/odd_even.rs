use numelace_core::{Cell, Grid};

use crate::{
    Example, Primitive, Shape, Variant, VariantKind, example::cells, shape::CellMark,
};

/// A single cell whose digit must be odd, or even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OddEven {
    cell: Cell,
    odd: bool,
}

impl OddEven {
    /// Creates a parity constraint on `cell`.
    #[must_use]
    pub const fn new(cell: Cell, odd: bool) -> Self {
        Self { cell, odd }
    }

    /// Returns the constrained cell.
    #[must_use]
    pub const fn cell(&self) -> Cell {
        self.cell
    }

    /// Returns `true` if the digit must be odd.
    #[must_use]
    pub const fn is_odd(&self) -> bool {
        self.odd
    }

    /// Returns the parity constraint of every cell of `grid`.
    #[must_use]
    pub fn generate(grid: &Grid) -> Vec<Self> {
        Cell::ALL
            .into_iter()
            .map(|cell| Self::new(cell, grid[cell] % 2 == 1))
            .collect()
    }
}

impl Variant for OddEven {
    const KIND: VariantKind = VariantKind::OddEven;

    fn cells(&self) -> Vec<Cell> {
        vec![self.cell]
    }

    fn verify(&self, grid: &Grid) -> bool {
        (grid[self.cell] % 2 == 1) == self.odd
    }

    fn primitives(&self) -> Vec<Primitive> {
        vec![Primitive::Parity {
            cell: self.cell,
            odd: self.odd,
        }]
    }

    fn shape(&self) -> Shape {
        Shape::Mark {
            cell: self.cell,
            mark: if self.odd {
                CellMark::Circle
            } else {
                CellMark::Square
            },
        }
    }

    fn description(&self) -> String {
        format!(
            "The digit in this cell must be {}.",
            if self.odd { "odd" } else { "even" }
        )
    }

    fn example() -> Example {
        Example {
            constraints: vec![
                Self::new(Cell::new(11), true).into(),
                Self::new(Cell::new(20), false).into(),
            ],
            cells: cells(&[11, 20]),
            good: vec![3, 6],
            bad: vec![8, 1],
            reason: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_generate_covers_every_cell() {
        let grid = testing::solution_grid();
        let marks = OddEven::generate(&grid);
        assert_eq!(marks.len(), 81);
        assert!(marks.iter().all(|m| m.verify(&grid)));
        assert_eq!(marks.iter().filter(|m| m.is_odd()).count(), 45);
    }

    #[test]
    fn test_description_names_parity() {
        assert_eq!(
            OddEven::new(Cell::new(0), false).description(),
            "The digit in this cell must be even."
        );
    }
}

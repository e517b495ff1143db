use numelace_core::{Cell, Grid};

use crate::{
    Example, Primitive, Shape, Variant, VariantKind, example::cells, shape::CellMark,
};

/// A single cell whose digit does not repeat a king's move away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AntiKing {
    cell: Cell,
}

impl AntiKing {
    /// Creates an anti-king constraint on `cell`.
    #[must_use]
    pub const fn new(cell: Cell) -> Self {
        Self { cell }
    }

    /// Returns the constrained cell.
    #[must_use]
    pub const fn cell(&self) -> Cell {
        self.cell
    }

    /// Returns an anti-king constraint for every cell of `grid` whose digit
    /// differs from all its king-move neighbours.
    #[must_use]
    pub fn generate(grid: &Grid) -> Vec<Self> {
        Cell::ALL
            .into_iter()
            .map(Self::new)
            .filter(|c| c.verify(grid))
            .collect()
    }
}

impl Variant for AntiKing {
    const KIND: VariantKind = VariantKind::AntiKing;

    fn cells(&self) -> Vec<Cell> {
        vec![self.cell]
    }

    fn verify(&self, grid: &Grid) -> bool {
        self.cell
            .adjacent_neighbors()
            .all(|n| grid[n] != grid[self.cell])
    }

    fn primitives(&self) -> Vec<Primitive> {
        vec![Primitive::AntiKing { cell: self.cell }]
    }

    fn shape(&self) -> Shape {
        Shape::Mark {
            cell: self.cell,
            mark: CellMark::King,
        }
    }

    fn description(&self) -> String {
        "The same digit can't be a king's move away (orthogonally or diagonally adjacent) from this digit."
            .to_owned()
    }

    fn example() -> Example {
        Example {
            constraints: vec![Self::new(Cell::new(20)).into()],
            cells: cells(&[12, 20]),
            good: vec![8, 5],
            bad: vec![5, 5],
            reason: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_generate_skips_cells_with_equal_neighbours() {
        // a 4 diagonally next to the 4 in the corner
        let grid = testing::patched(&[(0, 4), (10, 4)]);
        let kings = AntiKing::generate(&grid);
        assert!(!kings.contains(&AntiKing::new(Cell::new(0))));
        assert!(!kings.contains(&AntiKing::new(Cell::new(10))));
        assert!(kings.iter().all(|k| k.verify(&grid)));
    }

    #[test]
    fn test_skipped_cells_have_a_repeat_nearby() {
        let grid = testing::solution_grid();
        let kings = AntiKing::generate(&grid);
        assert!(!kings.is_empty());
        for cell in Cell::ALL {
            let repeats = cell.adjacent_neighbors().any(|n| grid[n] == grid[cell]);
            assert_eq!(kings.contains(&AntiKing::new(cell)), !repeats, "{cell}");
        }
    }
}

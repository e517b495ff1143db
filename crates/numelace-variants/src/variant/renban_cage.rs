use numelace_core::{Cell, CellSet, Grid};

use crate::{
    ConstraintError, Example, Primitive, Shape, Variant, VariantKind, example::cells,
    primitive::all_distinct, shape::OutlineStyle,
};

/// Largest region turned into a renban cage by [`RenbanCage::generate`].
pub const MAX_RENBAN_LEN: usize = 7;

/// A cage of distinct digits forming a consecutive run, in any order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenbanCage {
    cells: Vec<Cell>,
}

impl RenbanCage {
    /// Creates a renban cage.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::TooShort`] for fewer than two cells and
    /// [`ConstraintError::RepeatedCell`] if a cell is listed twice.
    pub fn new(cells: Vec<Cell>) -> Result<Self, ConstraintError> {
        if cells.len() < 2 {
            return Err(ConstraintError::TooShort {
                min: 2,
                len: cells.len(),
            });
        }
        let mut seen = CellSet::new();
        for &cell in &cells {
            if !seen.insert(cell) {
                return Err(ConstraintError::RepeatedCell { cell });
            }
        }
        Ok(Self { cells })
    }

    /// Returns a cage for every region of 2 to [`MAX_RENBAN_LEN`] cells whose
    /// digits on `grid` form a consecutive run.
    #[must_use]
    pub fn generate(grid: &Grid, regions: &[CellSet]) -> Vec<Self> {
        regions
            .iter()
            .filter(|region| (2..=MAX_RENBAN_LEN).contains(&region.len()))
            .map(|region| Self {
                cells: region.iter().collect(),
            })
            .filter(|cage| cage.verify(grid))
            .collect()
    }
}

impl Variant for RenbanCage {
    const KIND: VariantKind = VariantKind::RenbanCage;

    fn cells(&self) -> Vec<Cell> {
        self.cells.clone()
    }

    fn verify(&self, grid: &Grid) -> bool {
        if !all_distinct(grid, &self.cells) {
            return false;
        }
        let (low, high) = self
            .cells
            .iter()
            .map(|&c| grid[c])
            .fold((u8::MAX, u8::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
        usize::from(high - low) + 1 == self.cells.len()
    }

    fn primitives(&self) -> Vec<Primitive> {
        vec![Primitive::ConsecutiveUnique(self.cells.clone())]
    }

    fn shape(&self) -> Shape {
        Shape::Outline {
            regions: vec![self.cells.clone()],
            style: OutlineStyle::Shaded,
            label: None,
        }
    }

    fn description(&self) -> String {
        "Digits within the cage must be different and form a consecutive set.".to_owned()
    }

    fn example() -> Example {
        let cage = cells(&[0, 1, 2, 3, 10, 12]);
        Example {
            constraints: vec![
                Self {
                    cells: cage.clone(),
                }
                .into(),
            ],
            cells: cage,
            good: vec![5, 3, 7, 4, 6, 2],
            bad: vec![5, 3, 7, 1, 6, 2],
            reason: Some("Digits 1\u{2013}3 and 5\u{2013}7 occur. The 4 is skipped."),
        }
    }
}

use numelace_core::{Cell, CellSet, Grid};

use crate::{
    ConstraintError, Example, Primitive, Shape, Variant, VariantKind, example::cells,
    primitive::all_distinct, shape::OutlineStyle,
};

/// Smallest and largest sums of `len` distinct numerals, if any exist.
fn sum_range(len: usize) -> Option<(u8, u8)> {
    let n = u8::try_from(len).ok().filter(|&n| n <= 9)?;
    let low = n * (n + 1) / 2;
    let high = 45 - (9 - n) * (10 - n) / 2;
    Some((low, high))
}

/// A cage of distinct digits, optionally with a sum clue.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KillerCage {
    cells: Vec<Cell>,
    sum: Option<u8>,
}

impl KillerCage {
    /// Creates a cage.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::TooShort`] for an empty cage,
    /// [`ConstraintError::RepeatedCell`] if a cell is listed twice, and
    /// [`ConstraintError::InvalidSum`] if no set of distinct numerals fills
    /// the cage with the given sum.
    pub fn new(cells: Vec<Cell>, sum: Option<u8>) -> Result<Self, ConstraintError> {
        if cells.is_empty() {
            return Err(ConstraintError::TooShort { min: 1, len: 0 });
        }
        let mut seen = CellSet::new();
        for &cell in &cells {
            if !seen.insert(cell) {
                return Err(ConstraintError::RepeatedCell { cell });
            }
        }
        if let Some(sum) = sum {
            let reachable = sum_range(cells.len()).is_some_and(|(low, high)| (low..=high).contains(&sum));
            if !reachable {
                return Err(ConstraintError::InvalidSum {
                    sum,
                    len: cells.len(),
                });
            }
        }
        Ok(Self { cells, sum })
    }

    /// Returns the sum clue, if any.
    #[must_use]
    pub const fn sum(&self) -> Option<u8> {
        self.sum
    }

    /// Returns two cages per region, one with its sum on `grid` and one
    /// without, for every region whose digits are distinct.
    #[must_use]
    pub fn generate(grid: &Grid, regions: &[CellSet]) -> Vec<Self> {
        regions
            .iter()
            .filter(|region| !region.is_empty())
            .map(|region| region.iter().collect::<Vec<_>>())
            .filter(|cells| all_distinct(grid, cells))
            .flat_map(|cells| {
                let total = cells.iter().map(|&c| grid[c]).sum();
                [
                    Self {
                        cells: cells.clone(),
                        sum: Some(total),
                    },
                    Self { cells, sum: None },
                ]
            })
            .collect()
    }
}

impl Variant for KillerCage {
    const KIND: VariantKind = VariantKind::KillerCage;

    fn cells(&self) -> Vec<Cell> {
        self.cells.clone()
    }

    fn verify(&self, grid: &Grid) -> bool {
        all_distinct(grid, &self.cells)
            && self.sum.is_none_or(|sum| {
                self.cells.iter().map(|&c| u32::from(grid[c])).sum::<u32>() == u32::from(sum)
            })
    }

    fn primitives(&self) -> Vec<Primitive> {
        vec![match self.sum {
            Some(sum) => Primitive::SumUnique {
                cells: self.cells.clone(),
                sum,
            },
            None => Primitive::Unique(self.cells.clone()),
        }]
    }

    fn shape(&self) -> Shape {
        Shape::Outline {
            regions: vec![self.cells.clone()],
            style: OutlineStyle::Dashed,
            label: self.sum.map(|sum| sum.to_string()),
        }
    }

    fn description(&self) -> String {
        match self.sum {
            Some(sum) => format!("Digits within the cage must be different and must add up to {sum}."),
            None => "Digits within the cage must be different.".to_owned(),
        }
    }

    fn example() -> Example {
        Example {
            constraints: vec![
                Self {
                    cells: cells(&[2, 3, 12]),
                    sum: None,
                }
                .into(),
                Self {
                    cells: cells(&[18, 19]),
                    sum: Some(10),
                }
                .into(),
            ],
            cells: cells(&[2, 3, 12, 18, 19]),
            good: vec![5, 3, 6, 2, 8],
            bad: vec![5, 3, 5, 2, 7],
            reason: Some("In the first cage, the 5 repeats. In the second cage, 2 + 7 is not 10."),
        }
    }
}

#[cfg(test)]
mod tests {
    use numelace_core::House;

    use super::*;
    use crate::testing;

    #[test]
    fn test_sum_range() {
        assert_eq!(sum_range(1), Some((1, 9)));
        assert_eq!(sum_range(2), Some((3, 17)));
        assert_eq!(sum_range(9), Some((45, 45)));
        assert_eq!(sum_range(10), None);
    }

    #[test]
    fn test_new_rejects_impossible_sums() {
        assert_eq!(
            KillerCage::new(cells(&[0, 1]), Some(18)),
            Err(ConstraintError::InvalidSum { sum: 18, len: 2 })
        );
        assert!(KillerCage::new(cells(&[0, 1]), Some(17)).is_ok());
        assert_eq!(
            KillerCage::new(vec![], None),
            Err(ConstraintError::TooShort { min: 1, len: 0 })
        );
    }

    #[test]
    fn test_verify_checks_the_cage_cells() {
        // the cage sits away from the start of the grid so a position-based
        // check would look at the wrong digits
        let cage = KillerCage::new(cells(&[40, 41]), Some(10)).unwrap();
        let grid = testing::grid_with(&[(0, 1), (1, 2), (40, 3), (41, 7)]);
        assert!(cage.verify(&grid));
        let grid = testing::grid_with(&[(0, 1), (1, 2), (40, 5), (41, 5)]);
        assert!(!cage.verify(&grid));
    }

    #[test]
    fn test_generate_box_cages() {
        let grid = testing::solution_grid();
        let regions = House::BOXES.map(House::cell_set);
        let cages = KillerCage::generate(&grid, &regions);
        assert_eq!(cages.len(), 18);
        assert!(cages.iter().all(|c| c.verify(&grid)));
        assert_eq!(cages[0].sum(), Some(45));
        assert_eq!(cages[1].sum(), None);
    }
}

use std::time::Instant;

use numelace_core::{Cell, CellSet, Grid};

use crate::{
    ConstraintError, Example, Primitive, Shape, Variant, VariantKind,
    example::cells,
    search::{Generated, MIN_REGION_LEN, RegionPairSearch},
    shape::OutlineStyle,
};

/// Two regions whose digits match cell for cell up to a constant addend.
///
/// `first[i]` is matched with `second[i]`. Discovered pairs are translations
/// of each other with both regions in ascending cell order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snowball {
    first: Vec<Cell>,
    second: Vec<Cell>,
}

impl Snowball {
    /// Creates a snowball from two matched regions.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError`] if the regions differ in size, hold fewer
    /// than [`MIN_REGION_LEN`] cells, repeat a cell or overlap.
    pub fn new(first: Vec<Cell>, second: Vec<Cell>) -> Result<Self, ConstraintError> {
        if first.len() != second.len() {
            return Err(ConstraintError::RegionSizeMismatch {
                first: first.len(),
                second: second.len(),
            });
        }
        if first.len() < MIN_REGION_LEN {
            return Err(ConstraintError::TooShort {
                min: MIN_REGION_LEN,
                len: first.len(),
            });
        }
        let mut seen = CellSet::new();
        for (i, &cell) in first.iter().chain(&second).enumerate() {
            if !seen.insert(cell) {
                return Err(if i >= first.len() && first.contains(&cell) {
                    ConstraintError::OverlappingRegions { cell }
                } else {
                    ConstraintError::RepeatedCell { cell }
                });
            }
        }
        Ok(Self { first, second })
    }

    fn from_sets(first: CellSet, second: CellSet) -> Self {
        Self {
            first: first.iter().collect(),
            second: second.iter().collect(),
        }
    }

    /// Returns the first region.
    #[must_use]
    pub fn first(&self) -> &[Cell] {
        &self.first
    }

    /// Returns the second region, in matching order.
    #[must_use]
    pub fn second(&self) -> &[Cell] {
        &self.second
    }

    /// Returns the number of cells in each region.
    #[must_use]
    pub fn region_len(&self) -> usize {
        self.first.len()
    }

    /// Returns the matched cell pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.first.iter().copied().zip(self.second.iter().copied())
    }

    /// Returns `second - first` if it is the same for every pair.
    #[must_use]
    pub fn addend(&self, grid: &Grid) -> Option<i16> {
        let mut offsets = self
            .pairs()
            .map(|(a, b)| i16::from(grid[b]) - i16::from(grid[a]));
        let addend = offsets.next()?;
        offsets.all(|o| o == addend).then_some(addend)
    }

    /// Finds every snowball satisfied by `grid`.
    #[must_use]
    pub fn generate(grid: &Grid) -> Vec<Self> {
        Self::generate_until(grid, None).items
    }

    /// Like [`Snowball::generate`], stopping at `deadline`.
    #[must_use]
    pub fn generate_until(grid: &Grid, deadline: Option<Instant>) -> Generated<Self> {
        RegionPairSearch::new(grid)
            .pairs_until(deadline)
            .map(|(first, second)| Self::from_sets(first, second))
    }
}

impl Variant for Snowball {
    const KIND: VariantKind = VariantKind::Snowball;

    fn cells(&self) -> Vec<Cell> {
        self.first.iter().chain(&self.second).copied().collect()
    }

    fn verify(&self, grid: &Grid) -> bool {
        self.addend(grid).is_some()
    }

    fn primitives(&self) -> Vec<Primitive> {
        vec![Primitive::OffsetClone {
            first: self.first.clone(),
            second: self.second.clone(),
        }]
    }

    fn shape(&self) -> Shape {
        Shape::Outline {
            regions: vec![self.first.clone(), self.second.clone()],
            style: OutlineStyle::Shaded,
            label: None,
        }
    }

    fn description(&self) -> String {
        "One of the regions must contain the same digits in the same places as the other, \
         plus or minus a consistent addend. For example, if one region contains 1, 4, 7, the \
         other might contain 3, 6, 9 in the same order. (The digits within one region need not \
         necessarily be different. The addend can be zero.)"
            .to_owned()
    }

    fn example() -> Example {
        Example {
            constraints: vec![
                Self {
                    first: cells(&[0, 1, 9]),
                    second: cells(&[11, 12, 20]),
                }
                .into(),
            ],
            cells: cells(&[0, 1, 9, 11, 12, 20]),
            good: vec![1, 4, 7, 3, 6, 9],
            bad: vec![1, 4, 7, 3, 5, 8],
            reason: Some("3 is 2 more than 1, but 5 and 8 are only 1 more than 4 and 7."),
        }
    }
}

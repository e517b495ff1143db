use std::time::Instant;

use numelace_core::{Cell, Grid};

use crate::{
    ConstraintError, Example, Line, Primitive, Shape, Variant, VariantKind,
    example::cells,
    search::{Generated, MirrorSearch},
    shape::LineEnd,
};

/// A line whose digits read the same from either end.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Palindrome {
    line: Line,
}

impl Palindrome {
    /// Creates a palindrome line.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError`] if the cells do not form a valid [`Line`].
    pub fn new(cells: Vec<Cell>) -> Result<Self, ConstraintError> {
        Line::new(cells).map(|line| Self { line })
    }

    /// Returns the line.
    #[must_use]
    pub const fn line(&self) -> &Line {
        &self.line
    }

    /// Returns the cell pairs that must hold equal digits, outermost first.
    #[must_use]
    pub fn mirrored_pairs(&self) -> Vec<(Cell, Cell)> {
        let cells = self.line.cells();
        cells
            .iter()
            .zip(cells.iter().rev())
            .take(cells.len() / 2)
            .map(|(&a, &b)| (a, b))
            .collect()
    }

    /// Finds every palindrome of 3 to 9 cells satisfied by `grid`.
    ///
    /// Each line is reported once, in the orientation that starts at the
    /// lower-indexed end.
    #[must_use]
    pub fn generate(grid: &Grid) -> Vec<Self> {
        Self::generate_until(grid, None).items
    }

    /// Like [`Palindrome::generate`], stopping at `deadline`.
    #[must_use]
    pub fn generate_until(grid: &Grid, deadline: Option<Instant>) -> Generated<Self> {
        MirrorSearch::new(grid)
            .paths_until(deadline)
            .map(|cells| Self {
                line: Line::from_path(cells),
            })
    }
}

impl Variant for Palindrome {
    const KIND: VariantKind = VariantKind::Palindrome;

    fn cells(&self) -> Vec<Cell> {
        self.line.cells().to_vec()
    }

    fn verify(&self, grid: &Grid) -> bool {
        self.mirrored_pairs()
            .into_iter()
            .all(|(a, b)| grid[a] == grid[b])
    }

    fn primitives(&self) -> Vec<Primitive> {
        let (first, second) = self.mirrored_pairs().into_iter().unzip();
        vec![Primitive::Mirror { first, second }]
    }

    fn shape(&self) -> Shape {
        Shape::line(self.line.cells(), LineEnd::Arrow, LineEnd::Arrow, 0.3)
    }

    fn description(&self) -> String {
        "The digits along the line must form a palindrome (same sequence of digits when read from either end).".to_owned()
    }

    fn example() -> Example {
        let line = cells(&[19, 20, 12, 3]);
        Example {
            constraints: vec![
                Self {
                    line: Line::from_path(line.clone()),
                }
                .into(),
            ],
            cells: line,
            good: vec![5, 2, 2, 5],
            bad: vec![5, 2, 2, 1],
            reason: Some("The first and last digit are different."),
        }
    }
}

use std::time::Instant;

use numelace_core::{Cell, Grid};

use crate::{
    ConstraintError, Example, Line, Primitive, Shape, Variant, VariantKind,
    example::cells,
    search::{Generated, PathRule, PathSearch},
    shape::LineEnd,
};

/// Minimum difference between neighbouring digits on a whisper line.
pub const WHISPER_MIN_DIFFERENCE: u8 = 5;

/// A line whose neighbouring digits differ by at least
/// [`WHISPER_MIN_DIFFERENCE`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GermanWhisper {
    line: Line,
}

impl GermanWhisper {
    /// Creates a whisper line.
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

    /// Finds every whisper line of 3 to 9 cells satisfied by `grid`.
    ///
    /// A line and its reverse are both reported.
    #[must_use]
    pub fn generate(grid: &Grid) -> Vec<Self> {
        Self::generate_until(grid, None).items
    }

    /// Like [`GermanWhisper::generate`], stopping at `deadline`.
    #[must_use]
    pub fn generate_until(grid: &Grid, deadline: Option<Instant>) -> Generated<Self> {
        PathSearch::new(grid, WhisperRule)
            .paths_until(deadline)
            .map(|cells| Self {
                line: Line::from_path(cells),
            })
    }
}

struct WhisperRule;

impl PathRule for WhisperRule {
    fn accepts(&self, grid: &Grid, path: &[Cell], next: Cell) -> bool {
        grid[path[path.len() - 1]].abs_diff(grid[next]) >= WHISPER_MIN_DIFFERENCE
    }
}

impl Variant for GermanWhisper {
    const KIND: VariantKind = VariantKind::GermanWhisper;

    fn cells(&self) -> Vec<Cell> {
        self.line.cells().to_vec()
    }

    fn verify(&self, grid: &Grid) -> bool {
        self.line
            .cells()
            .windows(2)
            .all(|w| grid[w[0]].abs_diff(grid[w[1]]) >= WHISPER_MIN_DIFFERENCE)
    }

    fn primitives(&self) -> Vec<Primitive> {
        self.line
            .cells()
            .windows(2)
            .map(|w| Primitive::MinDifference {
                a: w[0],
                b: w[1],
                min: WHISPER_MIN_DIFFERENCE,
            })
            .collect()
    }

    fn shape(&self) -> Shape {
        Shape::line(self.line.cells(), LineEnd::Plain, LineEnd::Plain, 0.3)
    }

    fn description(&self) -> String {
        "Adjacent digits along the line must have a difference of at least 5.".to_owned()
    }

    fn example() -> Example {
        let line = cells(&[18, 10, 20, 12, 3]);
        Example {
            constraints: vec![
                Self {
                    line: Line::from_path(line.clone()),
                }
                .into(),
            ],
            cells: line,
            good: vec![7, 1, 8, 2, 7],
            bad: vec![7, 3, 8, 2, 7],
            reason: Some("The first two digits (7 and 3) have a difference of only 4."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_verify_literal_line() {
        let whisper = GermanWhisper::new(cells(&[18, 10, 20, 12, 3])).unwrap();
        let good = testing::grid_with(&[(18, 7), (10, 1), (20, 8), (12, 2), (3, 7)]);
        let bad = testing::grid_with(&[(18, 7), (10, 3), (20, 8), (12, 2), (3, 7)]);
        assert!(whisper.verify(&good));
        assert!(!whisper.verify(&bad));
    }

    #[test]
    fn test_generated_instances_verify() {
        let grid = testing::solution_grid();
        let whispers = GermanWhisper::generate(&grid);
        assert!(!whispers.is_empty());
        for whisper in &whispers {
            assert!(whisper.verify(&grid));
            assert!((3..=9).contains(&whisper.line().len()));
            for w in whisper.line().cells().windows(2) {
                assert!(grid[w[0]].abs_diff(grid[w[1]]) >= 5);
            }
        }
        // the rule is symmetric, so every line appears in both directions
        let reversed = GermanWhisper {
            line: whispers[0].line().reversed(),
        };
        assert!(whispers.contains(&reversed));
    }
}

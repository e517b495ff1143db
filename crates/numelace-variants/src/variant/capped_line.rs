use std::time::Instant;

use numelace_core::{Cell, Grid};

use crate::{
    ConstraintError, Example, Line, Primitive, Shape, Variant, VariantKind,
    example::cells,
    search::{Generated, MIN_PATH_LEN, PathRule, PathSearch},
    shape::LineEnd,
};

/// A line whose interior digits lie strictly between the digits on its two
/// capped ends.
///
/// Discovered lines also turn by at most 45 degrees at each cell, keeping
/// them readable when drawn.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CappedLine {
    line: Line,
}

impl CappedLine {
    /// Creates a capped line.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::TooShort`] for fewer than three cells, or
    /// another [`ConstraintError`] if the cells do not form a valid [`Line`].
    pub fn new(cells: Vec<Cell>) -> Result<Self, ConstraintError> {
        if cells.len() < MIN_PATH_LEN {
            return Err(ConstraintError::TooShort {
                min: MIN_PATH_LEN,
                len: cells.len(),
            });
        }
        Line::new(cells).map(|line| Self { line })
    }

    /// Returns the line.
    #[must_use]
    pub const fn line(&self) -> &Line {
        &self.line
    }

    /// Returns the two capping cells.
    #[must_use]
    pub fn ends(&self) -> [Cell; 2] {
        [self.line.first(), self.line.last()]
    }

    /// Finds every capped line of 3 to 9 cells satisfied by `grid`.
    ///
    /// Lines are reported from the lower cap to the higher one.
    #[must_use]
    pub fn generate(grid: &Grid) -> Vec<Self> {
        Self::generate_until(grid, None).items
    }

    /// Like [`CappedLine::generate`], stopping at `deadline`.
    #[must_use]
    pub fn generate_until(grid: &Grid, deadline: Option<Instant>) -> Generated<Self> {
        PathSearch::new(grid, CappedRule)
            .paths_until(deadline)
            .map(|cells| Self {
                line: Line::from_path(cells),
            })
    }
}

/// Grows lines upwards from a low cap.
///
/// Every cell after the first must exceed the first; the line is reported
/// whenever its last cell exceeds everything before it.
struct CappedRule;

impl PathRule for CappedRule {
    fn accepts(&self, grid: &Grid, path: &[Cell], next: Cell) -> bool {
        grid[next] > grid[path[0]]
    }

    fn emits(&self, grid: &Grid, path: &[Cell]) -> bool {
        let (last, rest) = (path[path.len() - 1], &path[..path.len() - 1]);
        rest.iter().all(|&cell| grid[cell] < grid[last])
    }

    fn extends(&self, grid: &Grid, path: &[Cell]) -> bool {
        // nothing can exceed a 9 capping the line
        grid[path[path.len() - 1]] < 9
    }

    fn limits_turns(&self) -> bool {
        true
    }
}

impl Variant for CappedLine {
    const KIND: VariantKind = VariantKind::CappedLine;

    fn cells(&self) -> Vec<Cell> {
        self.line.cells().to_vec()
    }

    fn verify(&self, grid: &Grid) -> bool {
        let [a, b] = self.ends();
        let low = grid[a].min(grid[b]);
        let high = grid[a].max(grid[b]);
        self.line
            .interior()
            .iter()
            .all(|&cell| low < grid[cell] && grid[cell] < high)
    }

    fn primitives(&self) -> Vec<Primitive> {
        vec![Primitive::Between {
            ends: self.ends(),
            interior: self.line.interior().to_vec(),
        }]
    }

    fn shape(&self) -> Shape {
        Shape::line(self.line.cells(), LineEnd::Circle, LineEnd::Circle, 0.05)
    }

    fn description(&self) -> String {
        "The digits along the line must be numerically between the digits at the ends.".to_owned()
    }

    fn example() -> Example {
        let line = cells(&[9, 19, 20, 12, 3]);
        Example {
            constraints: vec![
                Self {
                    line: Line::from_path(line.clone()),
                }
                .into(),
            ],
            cells: line,
            good: vec![2, 5, 7, 3, 8],
            bad: vec![3, 5, 7, 2, 8],
            reason: Some("The 2 is not between 3 and 8."),
        }
    }
}

use std::time::Instant;

use numelace_core::{Cell, Grid};

use crate::{
    ConstraintError, Example, Line, Primitive, Shape, Variant, VariantKind,
    example::cells,
    search::{Generated, PathRule, PathSearch},
    shape::LineEnd,
};

/// A line whose digits strictly increase from the bulb (its first cell).
///
/// # Examples
///
/// ```
/// use numelace_core::{Cell, Grid};
/// use numelace_variants::{Thermometer, Variant as _};
///
/// let thermo = Thermometer::new([0, 1, 2].map(Cell::new).to_vec())?;
/// let grid = Grid::from_cells(9, [(Cell::new(0), 1), (Cell::new(1), 4), (Cell::new(2), 6)])?;
/// assert!(thermo.verify(&grid));
/// assert!(!thermo.reversed().verify(&grid));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Thermometer {
    line: Line,
}

impl Thermometer {
    /// Creates a thermometer with its bulb on the first cell.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError`] if the cells do not form a valid [`Line`].
    pub fn new(cells: Vec<Cell>) -> Result<Self, ConstraintError> {
        Line::new(cells).map(|line| Self { line })
    }

    /// Returns the line, bulb first.
    #[must_use]
    pub const fn line(&self) -> &Line {
        &self.line
    }

    /// Returns the bulb cell.
    #[must_use]
    pub fn bulb(&self) -> Cell {
        self.line.first()
    }

    /// Returns the thermometer with the bulb moved to the other end.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            line: self.line.reversed(),
        }
    }

    /// Finds every thermometer of 3 to 9 cells satisfied by `grid`.
    #[must_use]
    pub fn generate(grid: &Grid) -> Vec<Self> {
        Self::generate_until(grid, None).items
    }

    /// Like [`Thermometer::generate`], stopping at `deadline`.
    #[must_use]
    pub fn generate_until(grid: &Grid, deadline: Option<Instant>) -> Generated<Self> {
        PathSearch::new(grid, IncreasingRule)
            .paths_until(deadline)
            .map(|cells| Self {
                line: Line::from_path(cells),
            })
    }
}

struct IncreasingRule;

impl PathRule for IncreasingRule {
    fn accepts(&self, grid: &Grid, path: &[Cell], next: Cell) -> bool {
        grid[path[path.len() - 1]] < grid[next]
    }
}

impl Variant for Thermometer {
    const KIND: VariantKind = VariantKind::Thermometer;

    fn cells(&self) -> Vec<Cell> {
        self.line.cells().to_vec()
    }

    fn verify(&self, grid: &Grid) -> bool {
        self.line.cells().windows(2).all(|w| grid[w[0]] < grid[w[1]])
    }

    fn primitives(&self) -> Vec<Primitive> {
        vec![Primitive::StrictlyIncreasing(self.cells())]
    }

    fn shape(&self) -> Shape {
        Shape::line(self.line.cells(), LineEnd::Bulb, LineEnd::Plain, 0.3)
    }

    fn description(&self) -> String {
        "Digits must increase from the bulb.".to_owned()
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
            good: vec![2, 4, 7, 8, 9],
            bad: vec![2, 7, 4, 8, 9],
            reason: Some("4 is less than 7."),
        }
    }
}

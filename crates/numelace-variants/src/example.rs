//! Worked demonstrations of each constraint kind.

use numelace_core::{Cell, Grid, GridError};

use crate::Constraint;

/// A small demonstration of a rule: constraints placed on a few cells with one
/// assignment that satisfies them and one that breaks them.
///
/// Cells outside [`Example::cells`] are filled with the smallest numeral that
/// does not appear in the assignment, so they never interfere with the rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    /// Constraint instances shown in the demonstration.
    pub constraints: Vec<Constraint>,
    /// Cells that receive a value.
    pub cells: Vec<Cell>,
    /// Values satisfying every constraint, parallel to `cells`.
    pub good: Vec<u8>,
    /// Values breaking at least one constraint, parallel to `cells`.
    pub bad: Vec<u8>,
    /// Why the bad assignment fails, when it is not obvious.
    pub reason: Option<&'static str>,
}

impl Example {
    /// Returns the grid holding the satisfying assignment.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidValue`] if a value is outside 1-9 or the
    /// assignment uses all nine numerals, leaving nothing to fill with.
    pub fn good_grid(&self) -> Result<Grid, GridError> {
        self.grid(&self.good)
    }

    /// Returns the grid holding the breaking assignment.
    ///
    /// # Errors
    ///
    /// See [`Example::good_grid`].
    pub fn bad_grid(&self) -> Result<Grid, GridError> {
        self.grid(&self.bad)
    }

    /// Returns `true` if the good grid satisfies every constraint and the bad
    /// grid breaks at least one.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let (Ok(good), Ok(bad)) = (self.good_grid(), self.bad_grid()) else {
            return false;
        };
        self.constraints.iter().all(|c| c.verify(&good))
            && !self.constraints.iter().all(|c| c.verify(&bad))
    }

    fn grid(&self, values: &[u8]) -> Result<Grid, GridError> {
        let fill = (1..=9).find(|d| !values.contains(d)).unwrap_or(0);
        Grid::from_cells(fill, self.cells.iter().copied().zip(values.iter().copied()))
    }
}

pub(crate) fn cells(indices: &[u8]) -> Vec<Cell> {
    indices.iter().copied().map(Cell::new).collect()
}

//! Fixture grids shared by the unit tests.

use numelace_core::{Cell, Grid};
use proptest::prelude::*;

/// A well-known completed Sudoku.
pub(crate) const SOLUTION: &str = "
    534 678 912
    672 195 348
    198 342 567
    859 761 423
    426 853 791
    713 924 856
    961 537 284
    287 419 635
    345 286 179
";

pub(crate) fn solution_grid() -> Grid {
    SOLUTION.parse().unwrap()
}

/// A grid of nines with the listed `(cell index, value)` overrides.
pub(crate) fn grid_with(values: &[(u8, u8)]) -> Grid {
    Grid::from_cells(9, values.iter().map(|&(i, v)| (Cell::new(i), v))).unwrap()
}

/// The solution grid with the listed `(cell index, value)` overrides.
pub(crate) fn patched(values: &[(u8, u8)]) -> Grid {
    let mut raw = *solution_grid().values();
    for &(i, v) in values {
        raw[usize::from(i)] = v;
    }
    Grid::new(raw).unwrap()
}

/// Completed Sudokus obtained from [`SOLUTION`] by relabelling digits and
/// optionally transposing.
pub(crate) fn solution_grids() -> impl Strategy<Value = Grid> {
    (
        Just((1..=9).collect::<Vec<u8>>()).prop_shuffle(),
        any::<bool>(),
    )
        .prop_map(|(digits, transpose)| {
            let base = solution_grid();
            let values = std::array::from_fn(|i| {
                let source = if transpose { (i % 9) * 9 + i / 9 } else { i };
                let cell = Cell::try_new(source).unwrap();
                digits[usize::from(base[cell] - 1)]
            });
            Grid::new(values).unwrap()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_solutions() {
        assert!(solution_grid().is_sudoku_solution());
        assert!(!patched(&[(0, 1)]).is_sudoku_solution());
        assert_eq!(grid_with(&[(40, 1)])[Cell::new(40)], 1);
        assert_eq!(grid_with(&[(40, 1)])[Cell::new(41)], 9);
    }

    proptest! {
        #[test]
        fn prop_generated_grids_are_solutions(grid in solution_grids()) {
            prop_assert!(grid.is_sudoku_solution());
        }
    }
}

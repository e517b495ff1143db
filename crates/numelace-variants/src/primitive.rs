//! Declarative solver primitives.
//!
//! A constraint compiles to a list of [`Primitive`]s, the vocabulary an
//! external solving engine understands. This crate only produces the list; it
//! never runs a solver. [`Primitive::is_satisfied_by`] gives the reference
//! meaning of each primitive so compiled output can be checked against a grid.

use numelace_core::{Cell, Grid};

/// A single declarative rule over grid cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Values strictly increase along the cells.
    StrictlyIncreasing(Vec<Cell>),
    /// `first[i]` and `second[i]` hold equal values for every `i`.
    Mirror {
        /// Cells of one half.
        first: Vec<Cell>,
        /// Matching cells of the other half.
        second: Vec<Cell>,
    },
    /// The two cells differ by at least `min`.
    MinDifference {
        /// One cell.
        a: Cell,
        /// The other cell.
        b: Cell,
        /// Minimum absolute difference.
        min: u8,
    },
    /// Every interior cell lies strictly between the two end cells.
    Between {
        /// The two capping cells.
        ends: [Cell; 2],
        /// Cells that must lie between the caps.
        interior: Vec<Cell>,
    },
    /// `second[i] - first[i]` is the same for every `i`.
    OffsetClone {
        /// Cells of one region.
        first: Vec<Cell>,
        /// Matching cells of the other region.
        second: Vec<Cell>,
    },
    /// The cell holds an odd (or even) value.
    Parity {
        /// The constrained cell.
        cell: Cell,
        /// `true` for odd.
        odd: bool,
    },
    /// No king's-move neighbour holds the same value as the cell.
    AntiKing {
        /// The constrained cell.
        cell: Cell,
    },
    /// The cells hold pairwise distinct values.
    Unique(Vec<Cell>),
    /// The cells hold distinct values summing to `sum`.
    SumUnique {
        /// The constrained cells.
        cells: Vec<Cell>,
        /// Required total.
        sum: u8,
    },
    /// The cells hold distinct values forming a consecutive run.
    ConsecutiveUnique(Vec<Cell>),
}

impl Primitive {
    /// Returns `true` if `grid` satisfies this primitive.
    #[must_use]
    pub fn is_satisfied_by(&self, grid: &Grid) -> bool {
        match self {
            Self::StrictlyIncreasing(cells) => cells.windows(2).all(|w| grid[w[0]] < grid[w[1]]),
            Self::Mirror { first, second } => first
                .iter()
                .zip(second)
                .all(|(&a, &b)| grid[a] == grid[b]),
            Self::MinDifference { a, b, min } => grid[*a].abs_diff(grid[*b]) >= *min,
            Self::Between { ends, interior } => {
                let low = grid[ends[0]].min(grid[ends[1]]);
                let high = grid[ends[0]].max(grid[ends[1]]);
                interior.iter().all(|&c| low < grid[c] && grid[c] < high)
            }
            Self::OffsetClone { first, second } => {
                let mut offsets = first
                    .iter()
                    .zip(second)
                    .map(|(&a, &b)| i16::from(grid[b]) - i16::from(grid[a]));
                offsets
                    .next()
                    .is_none_or(|offset| offsets.all(|o| o == offset))
            }
            Self::Parity { cell, odd } => (grid[*cell] % 2 == 1) == *odd,
            Self::AntiKing { cell } => cell
                .adjacent_neighbors()
                .all(|n| grid[n] != grid[*cell]),
            Self::Unique(cells) => all_distinct(grid, cells),
            Self::SumUnique { cells, sum } => {
                all_distinct(grid, cells)
                    && cells.iter().map(|&c| u32::from(grid[c])).sum::<u32>() == u32::from(*sum)
            }
            Self::ConsecutiveUnique(cells) => {
                all_distinct(grid, cells) && {
                    let values = cells.iter().map(|&c| grid[c]);
                    let (min, max) = values
                        .clone()
                        .fold((u8::MAX, u8::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
                    cells.is_empty() || usize::from(max - min) + 1 == cells.len()
                }
            }
        }
    }
}

pub(crate) fn all_distinct(grid: &Grid, cells: &[Cell]) -> bool {
    let mut seen = 0_u16;
    for &cell in cells {
        let bit = 1_u16 << grid[cell];
        if seen & bit != 0 {
            return false;
        }
        seen |= bit;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(cells: &[(u8, u8)]) -> Grid {
        Grid::from_cells(1, cells.iter().map(|&(c, v)| (Cell::new(c), v))).unwrap()
    }

    #[test]
    fn test_between_is_strict() {
        let prim = Primitive::Between {
            ends: [Cell::new(0), Cell::new(2)],
            interior: vec![Cell::new(1)],
        };
        assert!(prim.is_satisfied_by(&grid(&[(0, 2), (1, 5), (2, 8)])));
        assert!(!prim.is_satisfied_by(&grid(&[(0, 2), (1, 2), (2, 8)])));
        assert!(!prim.is_satisfied_by(&grid(&[(0, 2), (1, 8), (2, 8)])));
        // caps may appear in either order
        assert!(prim.is_satisfied_by(&grid(&[(0, 8), (1, 5), (2, 2)])));
    }

    #[test]
    fn test_offset_clone_allows_any_constant() {
        let prim = Primitive::OffsetClone {
            first: vec![Cell::new(0), Cell::new(1)],
            second: vec![Cell::new(9), Cell::new(10)],
        };
        assert!(prim.is_satisfied_by(&grid(&[(0, 5), (1, 7), (9, 3), (10, 5)])));
        assert!(!prim.is_satisfied_by(&grid(&[(0, 5), (1, 7), (9, 3), (10, 6)])));
    }

    #[test]
    fn test_consecutive_unique() {
        let cells = vec![Cell::new(0), Cell::new(1), Cell::new(2)];
        let prim = Primitive::ConsecutiveUnique(cells);
        assert!(prim.is_satisfied_by(&grid(&[(0, 4), (1, 2), (2, 3)])));
        assert!(!prim.is_satisfied_by(&grid(&[(0, 4), (1, 2), (2, 5)])));
        assert!(!prim.is_satisfied_by(&grid(&[(0, 4), (1, 4), (2, 3)])));
    }
}

use std::{ops::ControlFlow, time::Instant};

use numelace_core::{Cell, CellSet, Grid};

use super::{Generated, run_seeds};

/// Smallest region a [`RegionPairSearch`] reports.
pub const MIN_REGION_LEN: usize = 2;

#[derive(Debug, Clone, Copy)]
struct Shift {
    dx: i8,
    dy: i8,
    addend: i16,
}

/// Search for pairs of translated regions whose values differ by a constant.
///
/// A seed pair `s1 < s2` fixes the translation `s2 - s1` and the addend
/// `value(s2) - value(s1)`. The first region then grows from `s1` one
/// orthogonal neighbour at a time; every added cell `c` brings its translate
/// `c + (dx, dy)` into the second region and must satisfy
/// `value(c) + addend == value(c + (dx, dy))`. The regions never share a cell.
///
/// The first region never contains a cell with a lower index than `s1`, and
/// once a candidate has been explored it is banned for its later siblings, so
/// every region is reported exactly once per seed pair. Regions are reported
/// as sets; pairing the two sets in ascending order matches each cell with
/// its translate.
#[derive(Debug, Clone, Copy)]
pub struct RegionPairSearch<'a> {
    grid: &'a Grid,
}

impl<'a> RegionPairSearch<'a> {
    /// Creates a search over `grid`.
    #[must_use]
    pub const fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Calls `on_pair` for every region pair grown from the seeds `s1` and
    /// `s2`, with `s1` in the first region.
    ///
    /// Nothing is reported unless `s1 < s2`.
    pub fn for_each_from<F>(&self, s1: Cell, s2: Cell, mut on_pair: F) -> ControlFlow<()>
    where
        F: FnMut(CellSet, CellSet) -> ControlFlow<()>,
    {
        if s1 >= s2 {
            return ControlFlow::Continue(());
        }
        let (dx, dy) = s1.delta(s2);
        let shift = Shift {
            dx,
            dy,
            addend: i16::from(self.grid[s2]) - i16::from(self.grid[s1]),
        };
        let banned: CellSet = Cell::ALL[..=s1.index()]
            .iter()
            .copied()
            .chain([s2])
            .collect();
        self.grow(
            CellSet::EMPTY.with(s1),
            CellSet::EMPTY.with(s2),
            banned,
            shift,
            &mut on_pair,
        )
    }

    /// Collects every region pair grown from the seeds `s1` and `s2`.
    #[must_use]
    pub fn pairs_from(&self, s1: Cell, s2: Cell) -> Vec<(CellSet, CellSet)> {
        let mut pairs = vec![];
        let _ = self.for_each_from(s1, s2, |first, second| {
            pairs.push((first, second));
            ControlFlow::Continue(())
        });
        pairs
    }

    /// Collects every region pair on the board.
    #[must_use]
    pub fn pairs(&self) -> Vec<(CellSet, CellSet)> {
        self.pairs_until(None).items
    }

    /// Collects region pairs seed pair by seed pair until `deadline` passes.
    #[must_use]
    pub fn pairs_until(&self, deadline: Option<Instant>) -> Generated<(CellSet, CellSet)> {
        let seeds: Vec<_> = Cell::ALL
            .into_iter()
            .flat_map(|s1| Cell::ALL[s1.index() + 1..].iter().map(move |&s2| (s1, s2)))
            .collect();
        run_seeds(seeds, deadline, |(s1, s2)| self.pairs_from(s1, s2))
    }

    fn grow<F>(
        &self,
        first: CellSet,
        second: CellSet,
        mut banned: CellSet,
        shift: Shift,
        on_pair: &mut F,
    ) -> ControlFlow<()>
    where
        F: FnMut(CellSet, CellSet) -> ControlFlow<()>,
    {
        let mut frontier = CellSet::new();
        for cell in first {
            frontier.extend(cell.orthogonal_neighbors());
        }
        for cell in frontier {
            if banned.contains(cell) || first.contains(cell) || second.contains(cell) {
                continue;
            }
            let Some(target) = cell.offset(shift.dx, shift.dy) else {
                continue;
            };
            if first.contains(target) || second.contains(target) {
                continue;
            }
            if i16::from(self.grid[cell]) + shift.addend != i16::from(self.grid[target]) {
                continue;
            }

            banned.insert(cell);
            let first = first.with(cell);
            let second = second.with(target);
            if first.len() >= MIN_REGION_LEN {
                on_pair(first, second)?;
            }
            self.grow(first, second, banned.with(target), shift, on_pair)?;
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::testing;

    #[test]
    fn test_pairs_share_translation_and_addend() {
        let grid = testing::solution_grid();
        let pairs = RegionPairSearch::new(&grid).pairs();
        assert!(!pairs.is_empty());
        for (first, second) in &pairs {
            assert_eq!(first.len(), second.len());
            assert!(first.len() >= MIN_REGION_LEN);
            assert!(!first.intersects(second));
            let matched: Vec<_> = first.iter().zip(second.iter()).collect();
            let (a0, b0) = matched[0];
            let delta = a0.delta(b0);
            let addend = i16::from(grid[b0]) - i16::from(grid[a0]);
            for &(a, b) in &matched {
                assert_eq!(a.delta(b), delta);
                assert_eq!(i16::from(grid[b]) - i16::from(grid[a]), addend);
            }
        }
        let unique: HashSet<_> = pairs.iter().collect();
        assert_eq!(unique.len(), pairs.len());
    }

    #[test]
    fn test_regions_stay_connected() {
        let grid = testing::solution_grid();
        for (first, _) in RegionPairSearch::new(&grid).pairs() {
            let start = first.first().unwrap();
            let mut reached = CellSet::EMPTY.with(start);
            let mut stack = vec![start];
            while let Some(cell) = stack.pop() {
                for n in cell.orthogonal_neighbors() {
                    if first.contains(n) && reached.insert(n) {
                        stack.push(n);
                    }
                }
            }
            assert_eq!(reached, first);
        }
    }

    #[test]
    fn test_seed_order_is_required() {
        let grid = testing::solution_grid();
        let search = RegionPairSearch::new(&grid);
        assert!(search.pairs_from(Cell::new(40), Cell::new(10)).is_empty());
        assert!(search.pairs_from(Cell::new(40), Cell::new(40)).is_empty());
    }

    #[test]
    fn test_simple_domino_pair() {
        // 1 2 in the corner and 4 5 two rows below: addend 3
        let grid = Grid::from_cells(
            9,
            [
                (Cell::new(0), 1),
                (Cell::new(1), 2),
                (Cell::new(18), 4),
                (Cell::new(19), 5),
            ],
        )
        .unwrap();
        let pairs = RegionPairSearch::new(&grid).pairs_from(Cell::new(0), Cell::new(18));
        let first: CellSet = [Cell::new(0), Cell::new(1)].into_iter().collect();
        let second: CellSet = [Cell::new(18), Cell::new(19)].into_iter().collect();
        assert!(pairs.contains(&(first, second)));
    }
}

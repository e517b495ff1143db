use std::{ops::ControlFlow, time::Instant};

use numelace_core::{Cell, CellSet, Grid};

use super::{Generated, MAX_PATH_LEN, MIN_PATH_LEN, run_seeds};
use crate::line::crosses_diagonal;

/// Per-variant rules steering a [`PathSearch`].
///
/// The search itself enforces the rules shared by every line: cells are
/// distinct, consecutive cells are a king's move apart and no diagonal step
/// crosses another diagonal step of the same path.
pub trait PathRule: Sync {
    /// Returns `true` if `next` may be appended to `path`.
    ///
    /// `path` holds at least the start cell.
    fn accepts(&self, grid: &Grid, path: &[Cell], next: Cell) -> bool;

    /// Returns `true` if `path` (already accepted, at least
    /// [`MIN_PATH_LEN`] cells) should be reported.
    fn emits(&self, _grid: &Grid, _path: &[Cell]) -> bool {
        true
    }

    /// Returns `true` if the search should try to grow `path` further.
    fn extends(&self, _grid: &Grid, _path: &[Cell]) -> bool {
        true
    }

    /// Returns `true` if consecutive steps may only turn by 45 degrees.
    ///
    /// See [`is_gentle_turn`].
    fn limits_turns(&self) -> bool {
        false
    }

    /// Longest path to build.
    fn max_len(&self) -> usize {
        MAX_PATH_LEN
    }
}

/// Returns `true` if the step `b -> c` turns at most 45 degrees from the step
/// `a -> b`.
///
/// With step vectors `s1 = b - a` and `s2 = c - b`, the change `s2 - s1` must
/// be at most one unit along a single axis.
#[must_use]
pub fn is_gentle_turn(a: Cell, b: Cell, c: Cell) -> bool {
    let (dx1, dy1) = a.delta(b);
    let (dx2, dy2) = b.delta(c);
    let (ddx, ddy) = (dx2 - dx1, dy2 - dy1);
    (ddx.abs() <= 1 && ddy == 0) || (ddy.abs() <= 1 && ddx == 0)
}

/// Exhaustive search for simple paths accepted by a [`PathRule`].
///
/// Starting from a single cell, the search appends one king-adjacent cell at a
/// time and reports every prefix of at least [`MIN_PATH_LEN`] cells that the
/// rule emits. Paths are reported in a deterministic order: start cells in
/// index order, neighbours clockwise from north.
///
/// # Examples
///
/// ```
/// use numelace_core::{Cell, Grid};
/// use numelace_variants::search::{PathRule, PathSearch};
///
/// struct Increasing;
///
/// impl PathRule for Increasing {
///     fn accepts(&self, grid: &Grid, path: &[Cell], next: Cell) -> bool {
///         grid[*path.last().unwrap()] < grid[next]
///     }
/// }
///
/// let grid = Grid::from_cells(9, [(Cell::new(0), 1), (Cell::new(1), 2), (Cell::new(2), 3)])?;
/// let paths = PathSearch::new(&grid, Increasing).paths_from(Cell::new(0));
/// assert!(paths.contains(&vec![Cell::new(0), Cell::new(1), Cell::new(2)]));
/// # Ok::<(), numelace_core::GridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PathSearch<'a, R> {
    grid: &'a Grid,
    rule: R,
}

impl<'a, R> PathSearch<'a, R>
where
    R: PathRule,
{
    /// Creates a search over `grid` steered by `rule`.
    #[must_use]
    pub const fn new(grid: &'a Grid, rule: R) -> Self {
        Self { grid, rule }
    }

    /// Calls `on_path` for every path starting at `start`.
    ///
    /// Returns [`ControlFlow::Break`] as soon as the callback does.
    pub fn for_each_from<F>(&self, start: Cell, mut on_path: F) -> ControlFlow<()>
    where
        F: FnMut(&[Cell]) -> ControlFlow<()>,
    {
        let mut path = Vec::with_capacity(self.rule.max_len());
        path.push(start);
        self.extend(&mut path, CellSet::EMPTY.with(start), &mut on_path)
    }

    /// Calls `on_path` for every path on the board.
    pub fn for_each<F>(&self, mut on_path: F) -> ControlFlow<()>
    where
        F: FnMut(&[Cell]) -> ControlFlow<()>,
    {
        for start in Cell::ALL {
            self.for_each_from(start, &mut on_path)?;
        }
        ControlFlow::Continue(())
    }

    /// Collects every path starting at `start`.
    #[must_use]
    pub fn paths_from(&self, start: Cell) -> Vec<Vec<Cell>> {
        let mut paths = vec![];
        let _ = self.for_each_from(start, |path| {
            paths.push(path.to_vec());
            ControlFlow::Continue(())
        });
        paths
    }

    /// Collects every path on the board.
    #[must_use]
    pub fn paths(&self) -> Vec<Vec<Cell>> {
        self.paths_until(None).items
    }

    /// Collects paths start cell by start cell until `deadline` passes.
    #[must_use]
    pub fn paths_until(&self, deadline: Option<Instant>) -> Generated<Vec<Cell>> {
        run_seeds(Cell::ALL.to_vec(), deadline, |start| self.paths_from(start))
    }

    fn extend<F>(&self, path: &mut Vec<Cell>, used: CellSet, on_path: &mut F) -> ControlFlow<()>
    where
        F: FnMut(&[Cell]) -> ControlFlow<()>,
    {
        if path.len() >= self.rule.max_len() || !self.rule.extends(self.grid, path) {
            return ControlFlow::Continue(());
        }
        let last = path[path.len() - 1];
        for next in last.adjacent_neighbors() {
            if used.contains(next) || crosses_diagonal(path, last, next) {
                continue;
            }
            if self.rule.limits_turns()
                && path.len() >= 2
                && !is_gentle_turn(path[path.len() - 2], last, next)
            {
                continue;
            }
            if !self.rule.accepts(self.grid, path, next) {
                continue;
            }

            path.push(next);
            let mut flow = ControlFlow::Continue(());
            if path.len() >= MIN_PATH_LEN && self.rule.emits(self.grid, path) {
                flow = on_path(path);
            }
            if flow.is_continue() {
                flow = self.extend(path, used.with(next), on_path);
            }
            path.pop();
            flow?;
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{line::crosses_itself, testing};

    struct Any;

    impl PathRule for Any {
        fn accepts(&self, _grid: &Grid, _path: &[Cell], _next: Cell) -> bool {
            true
        }

        fn max_len(&self) -> usize {
            3
        }
    }

    struct Gentle;

    impl PathRule for Gentle {
        fn accepts(&self, _grid: &Grid, _path: &[Cell], _next: Cell) -> bool {
            true
        }

        fn limits_turns(&self) -> bool {
            true
        }

        fn max_len(&self) -> usize {
            3
        }
    }

    #[test]
    fn test_gentle_turn() {
        let c = Cell::new;
        // straight on
        assert!(is_gentle_turn(c(0), c(1), c(2)));
        // east then south-east
        assert!(is_gentle_turn(c(0), c(1), c(11)));
        // east then south
        assert!(!is_gentle_turn(c(0), c(1), c(10)));
        // south-east then south
        assert!(is_gentle_turn(c(0), c(10), c(19)));
        // south-east then north-east
        assert!(!is_gentle_turn(c(9), c(19), c(11)));
    }

    #[test]
    fn test_corner_paths_of_three() {
        let grid = testing::solution_grid();
        let paths = PathSearch::new(&grid, Any).paths_from(Cell::new(0));
        // every emitted path has exactly three cells and is simple
        assert!(!paths.is_empty());
        for path in &paths {
            assert_eq!(path.len(), 3);
            assert_eq!(path.iter().copied().collect::<CellSet>().len(), 3);
            assert!(path.windows(2).all(|w| w[0].is_adjacent(w[1])));
            assert!(!crosses_itself(path));
        }
        // via 1, 10 and 9: 4, 7 and 4 free neighbours
        assert_eq!(paths.len(), 4 + 7 + 4);
    }

    #[test]
    fn test_crossing_steps_are_pruned() {
        struct Four;
        impl PathRule for Four {
            fn accepts(&self, _grid: &Grid, _path: &[Cell], _next: Cell) -> bool {
                true
            }
            fn max_len(&self) -> usize {
                4
            }
        }
        let grid = testing::solution_grid();
        let paths = PathSearch::new(&grid, Four).paths_from(Cell::new(1));
        let crossing = vec![Cell::new(1), Cell::new(9), Cell::new(0), Cell::new(10)];
        assert!(!paths.contains(&crossing));
        assert!(paths.contains(&vec![Cell::new(1), Cell::new(9), Cell::new(0)]));
        assert!(paths.iter().all(|p| !crosses_itself(p)));
    }

    #[test]
    fn test_turn_limit_prunes_right_angles() {
        let grid = testing::solution_grid();
        let paths = PathSearch::new(&grid, Gentle).paths_from(Cell::new(40));
        assert!(!paths.is_empty());
        assert!(paths.iter().all(|p| is_gentle_turn(p[0], p[1], p[2])));
        // 8 directions with 3 gentle continuations each
        assert_eq!(paths.len(), 24);
    }

    #[test]
    fn test_break_stops_search() {
        let grid = testing::solution_grid();
        let search = PathSearch::new(&grid, Any);
        let mut seen = 0;
        let flow = search.for_each(|_| {
            seen += 1;
            if seen == 5 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert!(flow.is_break());
        assert_eq!(seen, 5);
    }
}

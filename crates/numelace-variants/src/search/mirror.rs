use std::{collections::HashSet, ops::ControlFlow, time::Instant};

use numelace_core::{Cell, CellSet, Grid};

use super::{Generated, MIN_PATH_LEN, run_seeds};
use crate::line::{crosses_diagonal, crosses_itself};

/// Maximum number of cells in one half, centre included.
pub const MAX_HALF_LEN: usize = 5;

/// Search for paths reading the same values from both ends.
///
/// Two halves grow in lockstep from a shared centre cell. At every step both
/// halves gain a cell, the two new cells hold equal values, and neither half
/// may reuse a cell of the other or cross itself. The halves are then joined
/// into one path:
///
/// - if the halves' second cells are adjacent, the centre is dropped and the
///   path has even length;
/// - otherwise the centre stays in the middle and the path has odd length.
///
/// Each path is reported once per centre in the orientation where the first
/// cell has the lower index; joined paths that cross themselves are skipped.
#[derive(Debug, Clone, Copy)]
pub struct MirrorSearch<'a> {
    grid: &'a Grid,
}

impl<'a> MirrorSearch<'a> {
    /// Creates a search over `grid`.
    #[must_use]
    pub const fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Calls `on_path` for every mirrored path grown from `center`.
    pub fn for_each_from<F>(&self, center: Cell, mut on_path: F) -> ControlFlow<()>
    where
        F: FnMut(&[Cell]) -> ControlFlow<()>,
    {
        let mut first = Vec::with_capacity(MAX_HALF_LEN);
        let mut second = Vec::with_capacity(MAX_HALF_LEN);
        first.push(center);
        second.push(center);
        self.extend(
            &mut first,
            &mut second,
            CellSet::EMPTY.with(center),
            &mut on_path,
        )
    }

    /// Collects every mirrored path grown from `center`.
    #[must_use]
    pub fn paths_from(&self, center: Cell) -> Vec<Vec<Cell>> {
        let mut paths = vec![];
        let _ = self.for_each_from(center, |path| {
            paths.push(path.to_vec());
            ControlFlow::Continue(())
        });
        paths
    }

    /// Collects every distinct mirrored path on the board.
    #[must_use]
    pub fn paths(&self) -> Vec<Vec<Cell>> {
        self.paths_until(None).items
    }

    /// Collects distinct mirrored paths centre by centre until `deadline`
    /// passes.
    ///
    /// An even-length path can be grown from any cell next to both of its
    /// middle cells; only its first occurrence is kept.
    #[must_use]
    pub fn paths_until(&self, deadline: Option<Instant>) -> Generated<Vec<Cell>> {
        let mut generated = run_seeds(Cell::ALL.to_vec(), deadline, |center| {
            self.paths_from(center)
        });
        let mut seen = HashSet::new();
        generated.items.retain(|path| seen.insert(path.clone()));
        generated
    }

    fn extend<F>(
        &self,
        first: &mut Vec<Cell>,
        second: &mut Vec<Cell>,
        used: CellSet,
        on_path: &mut F,
    ) -> ControlFlow<()>
    where
        F: FnMut(&[Cell]) -> ControlFlow<()>,
    {
        if first.len() >= MAX_HALF_LEN {
            return ControlFlow::Continue(());
        }
        let last1 = first[first.len() - 1];
        let last2 = second[second.len() - 1];
        for next1 in last1.adjacent_neighbors() {
            if used.contains(next1) || crosses_diagonal(first, last1, next1) {
                continue;
            }
            for next2 in last2.adjacent_neighbors() {
                if next2 == next1
                    || used.contains(next2)
                    || self.grid[next2] != self.grid[next1]
                    || crosses_diagonal(second, last2, next2)
                {
                    continue;
                }

                first.push(next1);
                second.push(next2);
                let merged = merge_halves(first, second);
                let mut flow = ControlFlow::Continue(());
                if merged.len() >= MIN_PATH_LEN
                    && merged[0] < merged[merged.len() - 1]
                    && !crosses_itself(&merged)
                {
                    flow = on_path(&merged);
                }
                if flow.is_continue() {
                    flow = self.extend(first, second, used.with(next1).with(next2), on_path);
                }
                first.pop();
                second.pop();
                flow?;
            }
        }
        ControlFlow::Continue(())
    }
}

/// Joins two halves sharing their first (centre) cell into one path.
///
/// If the halves' second cells are adjacent the centre is dropped.
#[must_use]
fn merge_halves(first: &[Cell], second: &[Cell]) -> Vec<Cell> {
    let keep_center = !(first.len() > 1 && second.len() > 1 && first[1].is_adjacent(second[1]));
    let skip = usize::from(!keep_center);
    let mut merged = Vec::with_capacity(first.len() + second.len());
    merged.extend(first[skip..].iter().rev());
    merged.extend(&second[1..]);
    merged
}

//! Backtracking enumerators over a filled grid.
//!
//! Every enumerator reports candidates through a callback returning
//! [`ControlFlow`](std::ops::ControlFlow), so callers can stop a search early.
//! The collecting helpers (`*_until`) run one independent search per seed
//! (start cell or seed pair) and stop starting new seeds once a deadline has
//! passed. With the `parallel` feature the seeds run on the rayon pool;
//! results are gathered in seed order either way, so the output is identical
//! to a sequential run.

use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub use self::{
    mirror::{MAX_HALF_LEN, MirrorSearch},
    path::{PathRule, PathSearch, is_gentle_turn},
    region_pair::{MIN_REGION_LEN, RegionPairSearch},
};

mod mirror;
mod path;
mod region_pair;

/// Shortest path the path enumerators report.
pub const MIN_PATH_LEN: usize = 3;

/// Longest path the path enumerators build.
pub const MAX_PATH_LEN: usize = 9;

/// Output of a deadline-bounded search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated<T> {
    /// Items found, in deterministic order.
    pub items: Vec<T>,
    /// `true` if the deadline passed before every seed was searched.
    pub truncated: bool,
}

impl<T> Generated<T> {
    /// Applies `f` to every item.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Generated<U>
    where
        F: FnMut(T) -> U,
    {
        Generated {
            items: self.items.into_iter().map(f).collect(),
            truncated: self.truncated,
        }
    }
}

fn expired(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|deadline| Instant::now() >= deadline)
}

/// Runs `search` once per seed and concatenates the results in seed order.
///
/// Seeds started after `deadline` are skipped and the result is marked as
/// truncated.
pub(crate) fn run_seeds<S, T, F>(seeds: Vec<S>, deadline: Option<Instant>, search: F) -> Generated<T>
where
    S: Send,
    T: Send,
    F: Fn(S) -> Vec<T> + Sync + Send,
{
    let run = |seed: S| (!expired(deadline)).then(|| search(seed));

    #[cfg(feature = "parallel")]
    let per_seed: Vec<Option<Vec<T>>> = seeds.into_par_iter().map(run).collect();
    #[cfg(not(feature = "parallel"))]
    let per_seed: Vec<Option<Vec<T>>> = seeds.into_iter().map(run).collect();

    let truncated = per_seed.iter().any(Option::is_none);
    if truncated {
        log::trace!(
            "deadline passed after {} of {} seeds",
            per_seed.iter().filter(|s| s.is_some()).count(),
            per_seed.len()
        );
    }
    Generated {
        items: per_seed.into_iter().flatten().flatten().collect(),
        truncated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_seeds_preserves_seed_order() {
        let out = run_seeds((0..100).collect(), None, |seed: u32| vec![seed, seed]);
        assert!(!out.truncated);
        assert_eq!(out.items.len(), 200);
        assert!(out.items.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_run_seeds_honours_past_deadline() {
        let out = run_seeds((0..10).collect(), Some(Instant::now()), |seed: u32| vec![seed]);
        assert!(out.truncated);
        assert!(out.items.is_empty());
    }

    #[test]
    fn test_generated_map() {
        let out = Generated {
            items: vec![1, 2],
            truncated: true,
        }
        .map(|x| x * 10);
        assert_eq!(out.items, vec![10, 20]);
        assert!(out.truncated);
    }
}

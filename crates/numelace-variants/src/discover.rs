//! Running every generator over one grid.

use std::time::{Duration, Instant};

use log::{debug, warn};
use numelace_core::{CellSet, Grid, House};

use crate::{
    AntiKing, CappedLine, Constraint, GermanWhisper, KillerCage, OddEven, Palindrome,
    RenbanCage, Snowball, Thermometer, VariantError, VariantKind, search::Generated,
};

/// Settings for [`discover`].
///
/// The default enables every kind, uses the nine 3×3 boxes as cage regions and
/// sets no time limit.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use numelace_variants::{DiscoveryConfig, VariantKind};
///
/// let config = DiscoveryConfig::default()
///     .with_kinds([VariantKind::Thermometer, VariantKind::KillerCage])
///     .with_time_limit(Duration::from_secs(5));
/// assert_eq!(config.kinds(), [VariantKind::Thermometer, VariantKind::KillerCage]);
/// assert_eq!(config.cage_regions().len(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    kinds: Vec<VariantKind>,
    cage_regions: Vec<CellSet>,
    time_limit: Option<Duration>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            kinds: VariantKind::ALL.to_vec(),
            cage_regions: House::BOXES.map(House::cell_set).to_vec(),
            time_limit: None,
        }
    }
}

impl DiscoveryConfig {
    /// Restricts discovery to `kinds`.
    ///
    /// Kinds run in the order of [`VariantKind::ALL`]; duplicates are ignored.
    #[must_use]
    pub fn with_kinds<I>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = VariantKind>,
    {
        self.kinds = kinds.into_iter().collect();
        self.kinds.sort_unstable();
        self.kinds.dedup();
        self
    }

    /// Sets the regions turned into killer and renban cages.
    #[must_use]
    pub fn with_cage_regions<I>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = CellSet>,
    {
        self.cage_regions = regions.into_iter().collect();
        self
    }

    /// Stops starting new searches once `limit` has elapsed.
    ///
    /// The deadline is checked per start cell or seed pair, so a run may
    /// overshoot it by the time one seed takes.
    #[must_use]
    pub const fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Returns the enabled kinds, in running order.
    #[must_use]
    pub fn kinds(&self) -> &[VariantKind] {
        &self.kinds
    }

    /// Returns the cage regions.
    #[must_use]
    pub fn cage_regions(&self) -> &[CellSet] {
        &self.cage_regions
    }

    /// Returns the time limit, if any.
    #[must_use]
    pub const fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }
}

/// Result of [`discover`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Every instance found, grouped by kind in running order.
    pub constraints: Vec<Constraint>,
    /// Kinds whose search hit the time limit before finishing.
    pub truncated: Vec<VariantKind>,
}

impl Discovery {
    /// Returns `true` if no search was cut short.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.truncated.is_empty()
    }

    /// Returns the instances of `kind`.
    pub fn by_kind(&self, kind: VariantKind) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter().filter(move |c| c.kind() == kind)
    }

    /// Returns the number of instances of `kind`.
    #[must_use]
    pub fn count(&self, kind: VariantKind) -> usize {
        self.by_kind(kind).count()
    }
}

/// Finds every instance of the configured kinds that `grid` satisfies.
///
/// The result is deterministic for a fixed grid and configuration, unless the
/// time limit cuts a search short.
///
/// # Examples
///
/// ```
/// use numelace_core::Grid;
/// use numelace_variants::{DiscoveryConfig, VariantKind, discover};
///
/// let grid: Grid = "
///     534678912 672195348 198342567
///     859761423 426853791 713924856
///     961537284 287419635 345286179
/// "
/// .parse()?;
/// let config = DiscoveryConfig::default().with_kinds([VariantKind::OddEven]);
/// let found = discover(&grid, &config);
/// assert_eq!(found.count(VariantKind::OddEven), 81);
/// assert!(found.constraints.iter().all(|c| c.verify(&grid)));
/// # Ok::<(), numelace_core::GridError>(())
/// ```
#[must_use]
pub fn discover(grid: &Grid, config: &DiscoveryConfig) -> Discovery {
    let started = Instant::now();
    let deadline = config
        .time_limit
        .and_then(|limit| started.checked_add(limit));

    let mut discovery = Discovery::default();
    for &kind in &config.kinds {
        let kind_started = Instant::now();
        let generated = generate_kind(grid, kind, &config.cage_regions, deadline);
        debug!(
            "{kind}: {} instances in {:.2?}",
            generated.items.len(),
            kind_started.elapsed()
        );
        if generated.truncated {
            warn!("{kind}: time limit reached, results are incomplete");
            discovery.truncated.push(kind);
        }
        discovery.constraints.extend(generated.items);
    }
    debug!(
        "discovered {} instances in {:.2?}",
        discovery.constraints.len(),
        started.elapsed()
    );
    discovery
}

/// Parses `values` as a grid and runs [`discover`] on it.
///
/// # Errors
///
/// Returns [`VariantError::InvalidGrid`] if `values` is not 81 numerals in
/// the range 1-9.
pub fn discover_values(values: &[u8], config: &DiscoveryConfig) -> Result<Discovery, VariantError> {
    let grid = Grid::from_slice(values)?;
    Ok(discover(&grid, config))
}

fn generate_kind(
    grid: &Grid,
    kind: VariantKind,
    regions: &[CellSet],
    deadline: Option<Instant>,
) -> Generated<Constraint> {
    match kind {
        VariantKind::Thermometer => Thermometer::generate_until(grid, deadline).map(Into::into),
        VariantKind::Palindrome => Palindrome::generate_until(grid, deadline).map(Into::into),
        VariantKind::GermanWhisper => GermanWhisper::generate_until(grid, deadline).map(Into::into),
        VariantKind::CappedLine => CappedLine::generate_until(grid, deadline).map(Into::into),
        VariantKind::Snowball => Snowball::generate_until(grid, deadline).map(Into::into),
        VariantKind::OddEven => complete(OddEven::generate(grid)),
        VariantKind::AntiKing => complete(AntiKing::generate(grid)),
        VariantKind::KillerCage => complete(KillerCage::generate(grid, regions)),
        VariantKind::RenbanCage => complete(RenbanCage::generate(grid, regions)),
    }
}

fn complete<T>(items: Vec<T>) -> Generated<Constraint>
where
    T: Into<Constraint>,
{
    Generated {
        items: items.into_iter().map(Into::into).collect(),
        truncated: false,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{Primitive, Variant as _, line::crosses_itself, testing};

    #[test]
    fn test_default_config() {
        let config = DiscoveryConfig::default();
        assert_eq!(config.kinds(), VariantKind::ALL);
        assert_eq!(config.cage_regions().len(), 9);
        assert!(config.cage_regions().iter().all(|r| r.len() == 9));
        assert_eq!(config.time_limit(), None);
    }

    #[test]
    fn test_with_kinds_orders_and_dedups() {
        let config = DiscoveryConfig::default().with_kinds([
            VariantKind::RenbanCage,
            VariantKind::Thermometer,
            VariantKind::RenbanCage,
        ]);
        assert_eq!(
            config.kinds(),
            [VariantKind::Thermometer, VariantKind::RenbanCage]
        );
    }

    #[test]
    fn test_discover_groups_by_kind() {
        let grid = testing::solution_grid();
        let config = DiscoveryConfig::default().with_kinds([
            VariantKind::Thermometer,
            VariantKind::AntiKing,
            VariantKind::KillerCage,
        ]);
        let found = discover(&grid, &config);
        assert!(found.is_complete());
        assert_eq!(found.count(VariantKind::KillerCage), 18);
        assert_eq!(found.count(VariantKind::Palindrome), 0);
        assert_eq!(
            found.count(VariantKind::Thermometer),
            Thermometer::generate(&grid).len()
        );
        let kinds: Vec<_> = found.constraints.iter().map(Constraint::kind).collect();
        assert!(kinds.is_sorted());
        assert!(found.constraints.iter().all(|c| c.verify(&grid)));
    }

    #[test]
    fn test_zero_time_limit_truncates_searches_only() {
        let grid = testing::solution_grid();
        let config = DiscoveryConfig::default()
            .with_kinds([VariantKind::Snowball, VariantKind::OddEven])
            .with_time_limit(Duration::ZERO);
        let found = discover(&grid, &config);
        assert_eq!(found.truncated, vec![VariantKind::Snowball]);
        assert_eq!(found.count(VariantKind::OddEven), 81);
    }

    #[test]
    fn test_discover_is_deterministic() {
        let grid = testing::solution_grid();
        let config = DiscoveryConfig::default().with_kinds([
            VariantKind::Palindrome,
            VariantKind::GermanWhisper,
            VariantKind::Snowball,
        ]);
        assert_eq!(discover(&grid, &config), discover(&grid, &config));
    }

    #[test]
    fn test_discover_values_rejects_bad_grids() {
        let config = DiscoveryConfig::default();
        assert!(matches!(
            discover_values(&[1; 80], &config),
            Err(VariantError::InvalidGrid(_))
        ));
        assert!(matches!(
            discover_values(&[0; 81], &config),
            Err(VariantError::InvalidGrid(_))
        ));
        let found = discover_values(
            testing::solution_grid().values(),
            &DiscoveryConfig::default().with_kinds([VariantKind::OddEven]),
        )
        .unwrap();
        assert_eq!(found.constraints.len(), 81);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn prop_discovered_instances_hold(grid in testing::solution_grids()) {
            let found = discover(&grid, &DiscoveryConfig::default());
            prop_assert!(found.is_complete());
            for constraint in &found.constraints {
                prop_assert!(constraint.verify(&grid), "{constraint}");
                match constraint {
                    Constraint::Thermometer(t) => {
                        prop_assert!(!t.reversed().verify(&grid));
                        // any other order of the cells breaks the increase
                        let cells = t.line().cells();
                        for i in 0..cells.len() {
                            for j in i + 1..cells.len() {
                                let mut swapped = cells.to_vec();
                                swapped.swap(i, j);
                                prop_assert!(
                                    !Primitive::StrictlyIncreasing(swapped).is_satisfied_by(&grid)
                                );
                            }
                        }
                        prop_assert!(!crosses_itself(t.line().cells()));
                    }
                    Constraint::Palindrome(p) => {
                        let values: Vec<_> = p.line().values(&grid).collect();
                        prop_assert!(values.iter().eq(values.iter().rev()));
                        prop_assert!(!crosses_itself(p.line().cells()));
                    }
                    Constraint::GermanWhisper(w) => {
                        prop_assert!(!crosses_itself(w.line().cells()));
                    }
                    Constraint::CappedLine(c) => {
                        let [low, high] = c.ends().map(|cell| grid[cell]);
                        prop_assert!(low < high);
                        prop_assert!(
                            c.line()
                                .interior()
                                .iter()
                                .all(|&cell| low < grid[cell] && grid[cell] < high)
                        );
                        prop_assert!(!crosses_itself(c.line().cells()));
                    }
                    Constraint::Snowball(s) => {
                        prop_assert!(s.addend(&grid).is_some());
                    }
                    _ => {}
                }
            }
        }

        #[test]
        fn prop_primitives_agree_with_verify(
            source in testing::solution_grids(),
            target in testing::solution_grids(),
        ) {
            let config = DiscoveryConfig::default().with_kinds([
                VariantKind::Thermometer,
                VariantKind::GermanWhisper,
                VariantKind::CappedLine,
                VariantKind::OddEven,
                VariantKind::AntiKing,
                VariantKind::KillerCage,
                VariantKind::RenbanCage,
            ]);
            for constraint in discover(&source, &config).constraints {
                let compiled = constraint
                    .primitives()
                    .iter()
                    .all(|p| p.is_satisfied_by(&target));
                prop_assert_eq!(compiled, constraint.verify(&target), "{}", constraint);
            }
        }

        #[test]
        fn prop_generation_is_repeatable(grid in testing::solution_grids()) {
            prop_assert_eq!(Palindrome::generate(&grid), Palindrome::generate(&grid));
            prop_assert_eq!(Snowball::generate(&grid), Snowball::generate(&grid));
        }
    }
}

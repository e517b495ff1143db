//! Variant constraints over a completed number-place grid, and their discovery.
//!
//! Given one filled grid, this crate finds every instance of each supported
//! variant constraint the grid satisfies, and checks any other grid against a
//! concrete instance.
//!
//! # Overview
//!
//! - [`Variant`] / [`Constraint`]: the shared contract (verification, touched
//!   cells, clash test, solver [`Primitive`]s, drawable [`Shape`], rule text
//!   and a worked [`Example`]) and the closed set of all kinds.
//! - Line kinds: [`Thermometer`], [`Palindrome`], [`GermanWhisper`] and
//!   [`CappedLine`], discovered by the path searches in [`search`].
//! - [`Snowball`]: translated region pairs sharing a digit addend.
//! - Single-pass kinds: [`OddEven`], [`AntiKing`], [`KillerCage`] and
//!   [`RenbanCage`].
//! - [`discover`]: runs every enabled generator under a [`DiscoveryConfig`].
//!
//! # Examples
//!
//! ```
//! use numelace_core::Grid;
//! use numelace_variants::{DiscoveryConfig, VariantKind, discover};
//!
//! let grid: Grid = "
//!     534 678 912
//!     672 195 348
//!     198 342 567
//!     859 761 423
//!     426 853 791
//!     713 924 856
//!     961 537 284
//!     287 419 635
//!     345 286 179
//! "
//! .parse()?;
//!
//! let config = DiscoveryConfig::default()
//!     .with_kinds([VariantKind::Thermometer, VariantKind::GermanWhisper]);
//! let found = discover(&grid, &config);
//! assert!(found.count(VariantKind::Thermometer) > 0);
//! for constraint in &found.constraints {
//!     assert!(constraint.verify(&grid));
//! }
//! # Ok::<(), numelace_core::GridError>(())
//! ```
//!
//! # Features
//!
//! - `parallel` (default): searches run their start cells and seed pairs on
//!   the `rayon` thread pool. Output order does not depend on this feature.

pub use self::{
    constraint::{Constraint, Variant, VariantKind},
    discover::{Discovery, DiscoveryConfig, discover, discover_values},
    error::{ConstraintError, VariantError},
    example::Example,
    line::Line,
    primitive::Primitive,
    shape::{CellMark, LineEnd, OutlineStyle, Point, Shape},
    variant::*,
};

mod clash;
mod constraint;
mod discover;
mod error;
mod example;
pub mod line;
mod primitive;
pub mod search;
mod shape;
mod variant;

#[cfg(test)]
mod testing;

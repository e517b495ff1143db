use numelace_core::{Cell, GridError};

/// Errors produced when building a constraint by hand.
///
/// Constraints produced by the generators are valid by construction and never
/// go through these checks at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConstraintError {
    /// The constraint has fewer cells than it needs.
    #[display("constraint needs at least {min} cells, got {len}")]
    TooShort {
        /// Minimum number of cells.
        min: usize,
        /// Number of cells given.
        len: usize,
    },
    /// The same cell appears twice.
    #[display("cell {cell} appears more than once")]
    RepeatedCell {
        /// The repeated cell.
        cell: Cell,
    },
    /// Two consecutive line cells are not a king's move apart.
    #[display("line cells {from} and {to} are not adjacent")]
    Disconnected {
        /// Earlier cell.
        from: Cell,
        /// Following cell.
        to: Cell,
    },
    /// A diagonal step of a line crosses another diagonal step of the same line.
    #[display("line step {from} to {to} crosses the line")]
    SelfCrossing {
        /// Start of the crossing step.
        from: Cell,
        /// End of the crossing step.
        to: Cell,
    },
    /// The two regions of a pair have different sizes.
    #[display("region sizes differ: {first} and {second}")]
    RegionSizeMismatch {
        /// Size of the first region.
        first: usize,
        /// Size of the second region.
        second: usize,
    },
    /// The two regions of a pair share a cell.
    #[display("regions overlap at {cell}")]
    OverlappingRegions {
        /// A shared cell.
        cell: Cell,
    },
    /// A cage sum cannot be reached by distinct numerals.
    #[display("cage sum {sum} is impossible for {len} cells")]
    InvalidSum {
        /// The requested sum.
        sum: u8,
        /// Number of cells in the cage.
        len: usize,
    },
}

/// Errors surfaced by the discovery entry points.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum VariantError {
    /// The input grid is malformed; nothing can be discovered from it.
    #[display("invalid grid: {_0}")]
    InvalidGrid(#[from] GridError),
    /// A variant kind name was not recognised.
    #[display("unknown variant kind: {name:?}")]
    UnknownKind {
        /// The rejected name.
        name: String,
    },
}

//! Core data structures for number-place variant constraints.
//!
//! This crate provides the small, fixed-size building blocks shared by the
//! variant constraint crates: cell addressing and board geometry, a compact
//! cell set, validated numeral grids and Sudoku houses.
//!
//! # Overview
//!
//! - [`cell`]: [`Cell`], [`Direction`] and neighbourhood queries
//!   (orthogonal, king and knight moves). Off-board moves yield `None`.
//! - [`cell_set`]: [`CellSet`], an 81-bit `Copy` set used as search markers.
//! - [`grid`]: [`Grid`], 81 numerals in the range 1-9.
//! - [`House`]: rows, columns and boxes.
//!
//! # Examples
//!
//! ```
//! use numelace_core::{Cell, CellSet, Grid};
//!
//! let grid = Grid::from_cells(1, [(Cell::new(0), 9)])?;
//! let neighbors: CellSet = Cell::new(0).adjacent_neighbors().collect();
//! assert_eq!(neighbors.len(), 3);
//! assert!(neighbors.iter().all(|c| grid[c] < grid[Cell::new(0)]));
//! # Ok::<(), numelace_core::GridError>(())
//! ```

pub mod cell;
pub mod cell_set;
pub mod grid;
mod house;

pub use self::{
    cell::{Cell, Direction, GeometryError, in_range},
    cell_set::CellSet,
    grid::{Grid, GridError},
    house::House,
};

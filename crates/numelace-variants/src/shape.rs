//! Drawable geometry for constraints.
//!
//! A [`Shape`] is what a renderer needs to draw a constraint over the board:
//! cell-centre coordinates in drawing order plus decorations. Coordinates are
//! in cell units with the board's top-left corner at `(0, 0)`, so the centre
//! of the cell in row `r`, column `c` is `(c + 0.5, r + 0.5)`. Colours,
//! pixel sizes and output formats are left to the renderer.

use numelace_core::Cell;

/// A point in board coordinates (cell units).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate, growing to the right.
    pub x: f32,
    /// Vertical coordinate, growing downwards.
    pub y: f32,
}

impl Point {
    /// Returns the centre of `cell`.
    #[must_use]
    pub fn center(cell: Cell) -> Self {
        Self {
            x: f32::from(cell.col()) + 0.5,
            y: f32::from(cell.row()) + 0.5,
        }
    }
}

/// Decoration drawn at one end of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineEnd {
    /// The line simply stops.
    Plain,
    /// A filled disc, as on a thermometer bulb.
    Bulb,
    /// A hollow circle enclosing the end cell.
    Circle,
    /// An arrowhead pointing away from the line along its end step.
    Arrow,
}

/// How a region outline is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutlineStyle {
    /// A dashed border inset from the cell edges.
    Dashed,
    /// The region is shaded.
    Shaded,
}

/// A mark drawn inside a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellMark {
    /// A grey circle (odd digit).
    Circle,
    /// A grey square (even digit).
    Square,
    /// A chess king glyph.
    King,
}

/// Drawable representation of a constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A polyline through cell centres.
    Line {
        /// Cell centres in drawing order.
        points: Vec<Point>,
        /// Decoration at the first point.
        start: LineEnd,
        /// Decoration at the last point.
        end: LineEnd,
        /// Stroke width in cell units.
        width: f32,
    },
    /// One or more outlined regions.
    Outline {
        /// Cells of each region.
        regions: Vec<Vec<Cell>>,
        /// Border or fill style.
        style: OutlineStyle,
        /// Optional clue printed in the top-left cell of the first region.
        label: Option<String>,
    },
    /// A mark inside one cell.
    Mark {
        /// The marked cell.
        cell: Cell,
        /// What to draw.
        mark: CellMark,
    },
}

impl Shape {
    /// Builds a line shape through the centres of `cells`.
    #[must_use]
    pub fn line(cells: &[Cell], start: LineEnd, end: LineEnd, width: f32) -> Self {
        Self::Line {
            points: cells.iter().copied().map(Point::center).collect(),
            start,
            end,
            width,
        }
    }
}

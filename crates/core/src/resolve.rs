//! Selection range resolution.
//!
//! Turns a `Selection` plus an edge intent into the concrete per-cell work:
//! which cells, and which edges on each. All output is row-major so that
//! overlapping inputs always produce the same final state.

use std::fmt;
use std::str::FromStr;

use crate::border::{BorderSpec, Edge};
use crate::selection::{CellCoord, CellRange, Selection};

/// Edge operation offered by the context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderCommand {
    Edge(Edge),
    NoBorders,
}

impl BorderCommand {
    pub const ALL: [BorderCommand; 5] = [
        BorderCommand::Edge(Edge::Top),
        BorderCommand::Edge(Edge::Right),
        BorderCommand::Edge(Edge::Bottom),
        BorderCommand::Edge(Edge::Left),
        BorderCommand::NoBorders,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BorderCommand::Edge(edge) => edge.as_str(),
            BorderCommand::NoBorders => "no_borders",
        }
    }
}

impl fmt::Display for BorderCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BorderCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no_borders" | "noBorders" => Ok(BorderCommand::NoBorders),
            other => other.parse::<Edge>().map(BorderCommand::Edge),
        }
    }
}

/// One unit of work against a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellOp {
    /// Set or remove one edge, leaving the others as they are.
    SetEdge { row: usize, col: usize, edge: Edge },
    /// Remove every edge of the cell.
    ClearAll { row: usize, col: usize },
}

impl CellOp {
    pub fn coord(&self) -> CellCoord {
        match *self {
            CellOp::SetEdge { row, col, .. } | CellOp::ClearAll { row, col } => CellCoord::new(row, col),
        }
    }
}

/// Cells a declarative range entry touches, with the edges each receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeEdgeTarget {
    pub row: usize,
    pub col: usize,
    pub edges: Vec<Edge>,
}

/// Every cell covered by the selection, row-major, with no edge filtering.
pub fn covered_cells(selection: &Selection) -> Vec<CellCoord> {
    selection.cells().collect()
}

/// Expand a menu command over a selection.
///
/// A point gets the command as-is. On a rectangle a single edge only reaches
/// the cells along that side (`Top` hits every column of the first row),
/// while `NoBorders` clears every cell.
pub fn command_targets(selection: &Selection, command: BorderCommand) -> Vec<CellOp> {
    let range = match selection {
        Selection::Point(c) => {
            return vec![match command {
                BorderCommand::Edge(edge) => CellOp::SetEdge { row: c.row, col: c.col, edge },
                BorderCommand::NoBorders => CellOp::ClearAll { row: c.row, col: c.col },
            }];
        }
        Selection::Range(range) => *range,
    };

    match command {
        BorderCommand::NoBorders => range
            .cells()
            .map(|c| CellOp::ClearAll { row: c.row, col: c.col })
            .collect(),
        BorderCommand::Edge(edge) => edge_cells(&range, edge)
            .into_iter()
            .map(|c| CellOp::SetEdge { row: c.row, col: c.col, edge })
            .collect(),
    }
}

/// Cells that lie along one side of a rectangle.
pub fn edge_cells(range: &CellRange, edge: Edge) -> Vec<CellCoord> {
    match edge {
        Edge::Top => (range.start_col..=range.end_col)
            .map(|col| CellCoord::new(range.start_row, col))
            .collect(),
        Edge::Bottom => (range.start_col..=range.end_col)
            .map(|col| CellCoord::new(range.end_row, col))
            .collect(),
        Edge::Left => (range.start_row..=range.end_row)
            .map(|row| CellCoord::new(row, range.start_col))
            .collect(),
        Edge::Right => (range.start_row..=range.end_row)
            .map(|row| CellCoord::new(row, range.end_col))
            .collect(),
    }
}

/// Whether `(row, col)` sits on the given side of `range`.
pub fn on_boundary(range: &CellRange, row: usize, col: usize, edge: Edge) -> bool {
    match edge {
        Edge::Top => row == range.start_row,
        Edge::Bottom => row == range.end_row,
        Edge::Left => col == range.start_col,
        Edge::Right => col == range.end_col,
    }
}

/// Resolve a declarative range entry.
///
/// Each cell only receives the edges of `spec` that lie on the rectangle's
/// boundary. Interior cells, and boundary cells whose side is not in `spec`,
/// are left out entirely. Corner cells can pick up two edges.
pub fn range_boundary_targets(range: &CellRange, spec: &BorderSpec) -> Vec<RangeEdgeTarget> {
    range
        .cells()
        .filter_map(|c| {
            let edges: Vec<Edge> = spec
                .edges()
                .map(|(edge, _)| edge)
                .filter(|edge| on_boundary(range, c.row, c.col, *edge))
                .collect();
            if edges.is_empty() {
                None
            } else {
                Some(RangeEdgeTarget { row: c.row, col: c.col, edges })
            }
        })
        .collect()
}

//! Selection shapes accepted by border operations.
//!
//! Callers describe targets either as a single cell or as a rectangle, and
//! configuration may spell a rectangle as `{from, to}`. Everything is turned
//! into a `Selection` once at the boundary; downstream code only ever sees
//! normalized coordinates.

use serde::{Deserialize, Serialize};

/// A cell coordinate (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    pub row: usize,
    pub col: usize,
}

impl CellCoord {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for CellCoord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// A rectangular range of cells, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRange {
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
}

impl CellRange {
    /// Create a new range, automatically normalizing so start <= end.
    pub fn new(r1: usize, c1: usize, r2: usize, c2: usize) -> Self {
        Self {
            start_row: r1.min(r2),
            start_col: c1.min(c2),
            end_row: r1.max(r2),
            end_col: c1.max(c2),
        }
    }

    /// Create a single-cell range.
    pub fn single(row: usize, col: usize) -> Self {
        Self {
            start_row: row,
            start_col: col,
            end_row: row,
            end_col: col,
        }
    }

    pub fn from_coords(from: CellCoord, to: CellCoord) -> Self {
        Self::new(from.row, from.col, to.row, to.col)
    }

    /// Check if this range contains a cell.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.start_row && row <= self.end_row &&
        col >= self.start_col && col <= self.end_col
    }

    /// Number of cells in this range, saturating at `usize::MAX`.
    pub fn cell_count(&self) -> usize {
        let rows = (self.end_row - self.start_row).saturating_add(1);
        let cols = (self.end_col - self.start_col).saturating_add(1);
        rows.saturating_mul(cols)
    }

    /// Iterate over all cells in this range (row-major order).
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> {
        let start_row = self.start_row;
        let end_row = self.end_row;
        let start_col = self.start_col;
        let end_col = self.end_col;

        (start_row..=end_row).flat_map(move |r| {
            (start_col..=end_col).map(move |c| CellCoord::new(r, c))
        })
    }

    /// Check if this is a single cell.
    pub fn is_single(&self) -> bool {
        self.start_row == self.end_row && self.start_col == self.end_col
    }

    pub fn top_left(&self) -> CellCoord {
        CellCoord::new(self.start_row, self.start_col)
    }

    pub fn bottom_right(&self) -> CellCoord {
        CellCoord::new(self.end_row, self.end_col)
    }

    /// Clip the range to a grid of `rows` x `cols`.
    ///
    /// Returns `None` when the range lies entirely outside the grid.
    pub fn clamp(&self, rows: usize, cols: usize) -> Option<Self> {
        if rows == 0 || cols == 0 || self.start_row >= rows || self.start_col >= cols {
            return None;
        }
        Some(Self {
            start_row: self.start_row,
            start_col: self.start_col,
            end_row: self.end_row.min(rows - 1),
            end_col: self.end_col.min(cols - 1),
        })
    }
}

/// Range written as `{from, to}` in declarative configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSpec {
    pub from: CellCoord,
    pub to: CellCoord,
}

impl RangeSpec {
    pub fn to_range(&self) -> CellRange {
        CellRange::from_coords(self.from, self.to)
    }
}

/// Target of a border operation.
///
/// A zero-area rectangle is always a `Point`, whichever constructor built it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Point(CellCoord),
    Range(CellRange),
}

impl Selection {
    pub fn point(row: usize, col: usize) -> Self {
        Selection::Point(CellCoord::new(row, col))
    }

    /// Build a selection from two corners in any order.
    pub fn from_corners(start_row: usize, start_col: usize, end_row: usize, end_col: usize) -> Self {
        Self::from_range(CellRange::new(start_row, start_col, end_row, end_col))
    }

    pub fn from_range(range: CellRange) -> Self {
        if range.is_single() {
            Selection::Point(range.top_left())
        } else {
            Selection::Range(range)
        }
    }

    pub fn from_spec(spec: &RangeSpec) -> Self {
        Self::from_range(spec.to_range())
    }

    /// Bounding rectangle (a single-cell range for points).
    pub fn bounds(&self) -> CellRange {
        match self {
            Selection::Point(c) => CellRange::single(c.row, c.col),
            Selection::Range(r) => *r,
        }
    }

    pub fn is_point(&self) -> bool {
        matches!(self, Selection::Point(_))
    }

    /// All covered cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> {
        self.bounds().cells()
    }

    /// Clip to the grid; `None` when nothing of the selection is on the grid.
    pub fn clamp(&self, rows: usize, cols: usize) -> Option<Self> {
        self.bounds().clamp(rows, cols).map(Self::from_range)
    }
}

impl From<CellCoord> for Selection {
    fn from(coord: CellCoord) -> Self {
        Selection::Point(coord)
    }
}

impl From<CellRange> for Selection {
    fn from(range: CellRange) -> Self {
        Self::from_range(range)
    }
}

impl From<RangeSpec> for Selection {
    fn from(spec: RangeSpec) -> Self {
        Self::from_spec(&spec)
    }
}

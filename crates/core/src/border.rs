//! Border records and the builders that produce them.
//!
//! A `BorderRecord` holds the decoration state of one cell: four
//! `EdgeStyle`s plus the id that ties the record to its overlay entry.
//! Callers describe what they want with a `BorderSpec`, where every edge is
//! optional and every field inside an edge is optional.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::selection::CellCoord;

/// Line width used for a visible edge when the caller gives none.
pub const DEFAULT_BORDER_WIDTH: u32 = 1;

/// Line color used for a visible edge when the caller gives none.
pub const DEFAULT_BORDER_COLOR: &str = "#000";

/// One side of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    pub fn as_str(&self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
        }
    }

    /// Stable slot index (top, right, bottom, left).
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Edge::Top => 0,
            Edge::Right => 1,
            Edge::Bottom => 2,
            Edge::Left => 3,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Edge {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Edge::Top),
            "right" => Ok(Edge::Right),
            "bottom" => Ok(Edge::Bottom),
            "left" => Ok(Edge::Left),
            other => Err(format!("unknown edge: {other}")),
        }
    }
}

/// Visual state of one edge.
///
/// `width` and `color` only mean something while `hide` is false; an empty
/// edge carries neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeStyle {
    pub hide: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl EdgeStyle {
    /// An edge that renders no line.
    pub fn empty() -> Self {
        Self { hide: true, width: None, color: None }
    }

    /// A visible edge with the default width and color.
    pub fn custom_default() -> Self {
        Self {
            hide: false,
            width: Some(DEFAULT_BORDER_WIDTH),
            color: Some(DEFAULT_BORDER_COLOR.to_string()),
        }
    }

    /// Merge a partial style over `custom_default()`.
    pub fn from_spec(spec: &EdgeSpec) -> Self {
        let mut style = Self::custom_default();
        if let Some(hide) = spec.hide {
            style.hide = hide;
        }
        if let Some(width) = spec.width {
            style.width = Some(width.max(1));
        }
        if let Some(color) = &spec.color {
            style.color = Some(color.clone());
        }
        style
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.hide
    }
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self::empty()
    }
}

/// Caller-supplied partial edge style.
///
/// In configuration an edge may be written as an object, as `true`/`false`,
/// or as `null`; anything that is not an object means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EdgeSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl EdgeSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hide = Some(true);
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EdgeSpecRepr {
    Flag(bool),
    Style {
        #[serde(default)]
        hide: Option<bool>,
        #[serde(default)]
        width: Option<u32>,
        #[serde(default)]
        color: Option<String>,
    },
}

impl<'de> Deserialize<'de> for EdgeSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match EdgeSpecRepr::deserialize(deserializer)? {
            EdgeSpecRepr::Flag(_) => EdgeSpec::default(),
            EdgeSpecRepr::Style { hide, width, color } => EdgeSpec { hide, width, color },
        })
    }
}

/// A key that is present always yields `Some`, even when its value is null.
fn present_edge<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<EdgeSpec>, D::Error> {
    Ok(Some(Option::<EdgeSpec>::deserialize(deserializer)?.unwrap_or_default()))
}

/// Which edges to set, and how. Absent edges are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderSpec {
    #[serde(default, deserialize_with = "present_edge", skip_serializing_if = "Option::is_none")]
    pub top: Option<EdgeSpec>,
    #[serde(default, deserialize_with = "present_edge", skip_serializing_if = "Option::is_none")]
    pub right: Option<EdgeSpec>,
    #[serde(default, deserialize_with = "present_edge", skip_serializing_if = "Option::is_none")]
    pub bottom: Option<EdgeSpec>,
    #[serde(default, deserialize_with = "present_edge", skip_serializing_if = "Option::is_none")]
    pub left: Option<EdgeSpec>,
}

impl BorderSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// All four edges with default styling.
    pub fn all() -> Self {
        Self {
            top: Some(EdgeSpec::default()),
            right: Some(EdgeSpec::default()),
            bottom: Some(EdgeSpec::default()),
            left: Some(EdgeSpec::default()),
        }
    }

    pub fn with_edge(mut self, edge: Edge, spec: EdgeSpec) -> Self {
        *self.slot_mut(edge) = Some(spec);
        self
    }

    pub fn edge(&self, edge: Edge) -> Option<&EdgeSpec> {
        match edge {
            Edge::Top => self.top.as_ref(),
            Edge::Right => self.right.as_ref(),
            Edge::Bottom => self.bottom.as_ref(),
            Edge::Left => self.left.as_ref(),
        }
    }

    pub fn has_edge(&self, edge: Edge) -> bool {
        self.edge(edge).is_some()
    }

    /// True when no edge is mentioned at all.
    pub fn is_empty(&self) -> bool {
        Edge::ALL.iter().all(|e| !self.has_edge(*e))
    }

    /// Present edges in top, right, bottom, left order.
    pub fn edges(&self) -> impl Iterator<Item = (Edge, &EdgeSpec)> + '_ {
        Edge::ALL.into_iter().filter_map(move |e| self.edge(e).map(|s| (e, s)))
    }

    fn slot_mut(&mut self, edge: Edge) -> &mut Option<EdgeSpec> {
        match edge {
            Edge::Top => &mut self.top,
            Edge::Right => &mut self.right,
            Edge::Bottom => &mut self.bottom,
            Edge::Left => &mut self.left,
        }
    }
}

/// Id shared by a cell's border record and its overlay entry.
pub fn border_id(row: usize, col: usize) -> String {
    format!("border_row{row}col{col}")
}

/// Stored decoration state for one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderRecord {
    pub id: String,
    pub row: usize,
    pub col: usize,
    pub top: EdgeStyle,
    pub right: EdgeStyle,
    pub bottom: EdgeStyle,
    pub left: EdgeStyle,
}

impl BorderRecord {
    /// A record for `(row, col)` with every edge empty.
    pub fn empty(row: usize, col: usize) -> Self {
        Self {
            id: border_id(row, col),
            row,
            col,
            top: EdgeStyle::empty(),
            right: EdgeStyle::empty(),
            bottom: EdgeStyle::empty(),
            left: EdgeStyle::empty(),
        }
    }

    /// Apply `spec` on top of this record.
    ///
    /// Each edge present in `spec` becomes its partial style merged over the
    /// default visible style. Edges absent from `spec` keep their current value.
    pub fn extend(mut self, spec: &BorderSpec) -> Self {
        for (edge, edge_spec) in spec.edges() {
            self.set_edge(edge, EdgeStyle::from_spec(edge_spec));
        }
        self
    }

    pub fn coord(&self) -> CellCoord {
        CellCoord::new(self.row, self.col)
    }

    pub fn edge(&self, edge: Edge) -> &EdgeStyle {
        match edge {
            Edge::Top => &self.top,
            Edge::Right => &self.right,
            Edge::Bottom => &self.bottom,
            Edge::Left => &self.left,
        }
    }

    pub fn edge_mut(&mut self, edge: Edge) -> &mut EdgeStyle {
        match edge {
            Edge::Top => &mut self.top,
            Edge::Right => &mut self.right,
            Edge::Bottom => &mut self.bottom,
            Edge::Left => &mut self.left,
        }
    }

    pub fn set_edge(&mut self, edge: Edge, style: EdgeStyle) {
        *self.edge_mut(edge) = style;
    }

    /// Number of edges with `hide = true`.
    pub fn hidden_edge_count(&self) -> usize {
        Edge::ALL.iter().filter(|e| self.edge(**e).hide).count()
    }

    /// A fully hidden record must not be kept anywhere.
    pub fn is_fully_hidden(&self) -> bool {
        self.hidden_edge_count() == Edge::ALL.len()
    }

    pub fn visible_edges(&self) -> Vec<Edge> {
        Edge::ALL.into_iter().filter(|e| self.edge(*e).is_visible()).collect()
    }
}

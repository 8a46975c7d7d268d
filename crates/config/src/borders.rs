//! The `customBorders` setting.
//!
//! Either a plain flag (`true` turns the context-menu actions on) or a list
//! of declarative border entries applied once the grid has initialized.

use cellborders_core::{BorderSpec, CellRange, RangeSpec};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Value of the `customBorders` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomBordersSetting {
    Enabled(bool),
    Entries(Vec<BorderEntry>),
}

impl Default for CustomBordersSetting {
    fn default() -> Self {
        CustomBordersSetting::Enabled(false)
    }
}

impl CustomBordersSetting {
    /// `true` or any list (even an empty one) enables borders.
    pub fn is_enabled(&self) -> bool {
        match self {
            CustomBordersSetting::Enabled(flag) => *flag,
            CustomBordersSetting::Entries(_) => true,
        }
    }

    pub fn entries(&self) -> Option<&[BorderEntry]> {
        match self {
            CustomBordersSetting::Entries(entries) => Some(entries),
            CustomBordersSetting::Enabled(_) => None,
        }
    }

    /// Check that every entry names a target.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, entry) in self.entries().unwrap_or_default().iter().enumerate() {
            if let EntryTarget::Missing = entry.target() {
                return Err(ConfigError::InvalidEntry {
                    index,
                    reason: "entry needs either `range` or both `row` and `col`".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// One declarative border: a cell or a range, plus the edges to draw.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeSpec>,
    #[serde(flatten)]
    pub spec: BorderSpec,
}

/// Where a `BorderEntry` applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryTarget {
    Range(CellRange),
    Cell { row: usize, col: usize },
    Missing,
}

impl BorderEntry {
    pub fn cell(row: usize, col: usize, spec: BorderSpec) -> Self {
        Self { row: Some(row), col: Some(col), range: None, spec }
    }

    pub fn range(range: RangeSpec, spec: BorderSpec) -> Self {
        Self { row: None, col: None, range: Some(range), spec }
    }

    /// `range` wins over `row`/`col` when both are given.
    pub fn target(&self) -> EntryTarget {
        if let Some(range) = &self.range {
            return EntryTarget::Range(range.to_range());
        }
        match (self.row, self.col) {
            (Some(row), Some(col)) => EntryTarget::Cell { row, col },
            _ => EntryTarget::Missing,
        }
    }
}

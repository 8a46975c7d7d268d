//! The grid a border plugin is attached to.
//!
//! The grid owns its cell metadata, its overlay collection, its selection
//! and its settings. `CustomBorders` reads and mutates them through this
//! trait and never keeps references across calls.

use cellborders_config::CustomBordersSetting;
use cellborders_core::{BorderRecord, Selection};

use crate::overlay::OverlayCollection;

pub trait GridHost {
    /// Number of rows currently in the grid.
    fn count_rows(&self) -> usize;

    /// Number of columns currently in the grid.
    fn count_cols(&self) -> usize;

    /// The `borders` slot of a cell's metadata.
    fn cell_borders(&self, row: usize, col: usize) -> Option<&BorderRecord>;

    /// Every cell metadata `borders` slot, in no particular order.
    fn all_cell_borders(&self) -> Vec<&BorderRecord>;

    fn set_cell_borders(&mut self, row: usize, col: usize, record: BorderRecord);

    /// Drop the `borders` slot of a cell's metadata. No-op if absent.
    fn remove_cell_borders(&mut self, row: usize, col: usize);

    fn overlays(&self) -> &OverlayCollection;

    fn overlays_mut(&mut self) -> &mut OverlayCollection;

    /// Ask the renderer to repaint. Fire-and-forget.
    fn request_redraw(&mut self);

    /// Current user selection, one entry per selected region.
    fn selected_ranges(&self) -> Vec<Selection>;

    /// Whether the selection was made by clicking the corner header.
    fn is_selected_by_corner(&self) -> bool;

    fn custom_borders_setting(&self) -> &CustomBordersSetting;
}

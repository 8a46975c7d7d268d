//! In-memory grid host.
//!
//! `MemoryGrid` implements `GridHost` without any rendering:
//! - Cell metadata lives in a hash map keyed by (row, col)
//! - Redraw requests are counted, and each redraw attaches one visual
//!   helper to every live overlay entry that has none yet, the way a real
//!   renderer creates its per-pane border objects
//! - Selection, corner-selection flag and the `customBorders` setting are
//!   plain fields set by the test
//!
//! Use it to exercise the plugin without a GUI.

use cellborders_config::CustomBordersSetting;
use cellborders_core::{BorderRecord, Selection};
use rustc_hash::FxHashMap;

use crate::host::GridHost;
use crate::overlay::{InstanceBorder, OverlayCollection};

#[derive(Debug, Clone, Default)]
pub struct MemoryGrid {
    rows: usize,
    cols: usize,
    meta: FxHashMap<(usize, usize), BorderRecord>,
    overlays: OverlayCollection,
    redraws: usize,
    selection: Vec<Selection>,
    selected_by_corner: bool,
    setting: CustomBordersSetting,
}

impl MemoryGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, ..Default::default() }
    }

    pub fn with_setting(mut self, setting: CustomBordersSetting) -> Self {
        self.setting = setting;
        self
    }

    pub fn set_setting(&mut self, setting: CustomBordersSetting) {
        self.setting = setting;
    }

    pub fn select(&mut self, selection: Vec<Selection>) {
        self.selection = selection;
        self.selected_by_corner = false;
    }

    /// Select every cell through the corner header.
    pub fn select_all(&mut self) {
        self.selection = vec![Selection::from_corners(0, 0, self.rows.saturating_sub(1), self.cols.saturating_sub(1))];
        self.selected_by_corner = true;
    }

    pub fn redraw_count(&self) -> usize {
        self.redraws
    }

    /// Number of cells whose metadata has a `borders` slot.
    pub fn meta_len(&self) -> usize {
        self.meta.len()
    }
}

impl GridHost for MemoryGrid {
    fn count_rows(&self) -> usize {
        self.rows
    }

    fn count_cols(&self) -> usize {
        self.cols
    }

    fn cell_borders(&self, row: usize, col: usize) -> Option<&BorderRecord> {
        self.meta.get(&(row, col))
    }

    fn all_cell_borders(&self) -> Vec<&BorderRecord> {
        self.meta.values().collect()
    }

    fn set_cell_borders(&mut self, row: usize, col: usize, record: BorderRecord) {
        self.meta.insert((row, col), record);
    }

    fn remove_cell_borders(&mut self, row: usize, col: usize) {
        self.meta.remove(&(row, col));
    }

    fn overlays(&self) -> &OverlayCollection {
        &self.overlays
    }

    fn overlays_mut(&mut self) -> &mut OverlayCollection {
        &mut self.overlays
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
        for entry in self.overlays.iter_mut() {
            if !entry.is_cleared() && entry.instance_borders().is_empty() {
                let helper = InstanceBorder::from_record(&entry.settings);
                entry.attach_instance_border(helper);
            }
        }
    }

    fn selected_ranges(&self) -> Vec<Selection> {
        self.selection.clone()
    }

    fn is_selected_by_corner(&self) -> bool {
        self.selected_by_corner
    }

    fn custom_borders_setting(&self) -> &CustomBordersSetting {
        &self.setting
    }
}

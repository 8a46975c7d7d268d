//! Overlay bridge.
//!
//! The grid renders border lines through its highlight layer: an ordered
//! collection of overlay entries, each pairing a border record with a cell
//! range. The bridge mirrors the border store into that collection and asks
//! for redraws; it keeps no state of its own.
//!
//! Removal is two-phase. The matching entry is cleared first (its range is
//! nulled), then a separate sweep physically removes the first cleared entry
//! it finds and stops.

use cellborders_core::{BorderRecord, CellRange, Edge};

use crate::host::GridHost;

/// Per-pane visual helper the renderer attaches to an overlay entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstanceBorder {
    hidden: [bool; 4],
}

impl InstanceBorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Helper whose hidden flags match the record's edges.
    pub fn from_record(record: &BorderRecord) -> Self {
        let mut helper = Self::new();
        for edge in Edge::ALL {
            helper.hidden[edge.index()] = record.edge(edge).hide;
        }
        helper
    }

    pub fn toggle_hidden(&mut self, edge: Edge, hidden: bool) {
        self.hidden[edge.index()] = hidden;
    }

    pub fn is_hidden(&self, edge: Edge) -> bool {
        self.hidden[edge.index()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayEntry {
    /// Border record the entry renders; `settings.id` is the entry's key.
    pub settings: BorderRecord,
    range: Option<CellRange>,
    instance_borders: Vec<InstanceBorder>,
}

impl OverlayEntry {
    /// Entry covering the record's own cell.
    pub fn new(record: BorderRecord) -> Self {
        let range = CellRange::single(record.row, record.col);
        Self { settings: record, range: Some(range), instance_borders: Vec::new() }
    }

    pub fn id(&self) -> &str {
        &self.settings.id
    }

    pub fn range(&self) -> Option<&CellRange> {
        self.range.as_ref()
    }

    pub fn is_cleared(&self) -> bool {
        self.range.is_none()
    }

    /// Detach the entry from the grid. It stays in the collection until swept.
    pub fn clear(&mut self) {
        self.range = None;
        self.instance_borders.clear();
    }

    /// Overwrite the entry's edge settings; id and range are kept.
    ///
    /// Attached helpers are refreshed so they render the merged edges.
    pub fn merge_settings(&mut self, record: &BorderRecord) {
        self.settings.top = record.top.clone();
        self.settings.right = record.right.clone();
        self.settings.bottom = record.bottom.clone();
        self.settings.left = record.left.clone();
        for helper in &mut self.instance_borders {
            *helper = InstanceBorder::from_record(&self.settings);
        }
    }

    pub fn attach_instance_border(&mut self, helper: InstanceBorder) {
        self.instance_borders.push(helper);
    }

    pub fn instance_borders(&self) -> &[InstanceBorder] {
        &self.instance_borders
    }

    pub fn instance_borders_mut(&mut self) -> &mut [InstanceBorder] {
        &mut self.instance_borders
    }
}

/// The grid's ordered overlay collection.
#[derive(Debug, Clone, Default)]
pub struct OverlayCollection {
    entries: Vec<OverlayEntry>,
}

impl OverlayCollection {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn push(&mut self, entry: OverlayEntry) {
        self.entries.push(entry);
    }

    pub fn get(&self, id: &str) -> Option<&OverlayEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut OverlayEntry> {
        self.entries.iter_mut().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Physically remove the first cleared entry, if any.
    ///
    /// Stops after one removal; the index is found first and removed after,
    /// so the collection is never mutated mid-scan.
    pub fn sweep_cleared(&mut self) -> bool {
        match self.entries.iter().position(OverlayEntry::is_cleared) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &OverlayEntry> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut OverlayEntry> {
        self.entries.iter_mut()
    }

    /// Ids of entries that are still attached.
    pub fn live_ids(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| !e.is_cleared())
            .map(|e| e.id().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Push a record into the overlay collection.
///
/// A new id gets a fresh single-cell entry and a redraw. A known id has its
/// settings merged in place; redrawing is then left to the caller.
pub fn sync_record<H: GridHost + ?Sized>(host: &mut H, record: &BorderRecord) {
    if let Some(entry) = host.overlays_mut().get_mut(&record.id) {
        entry.merge_settings(record);
        return;
    }

    log::debug!("overlay: adding entry {}", record.id);
    host.overlays_mut().push(OverlayEntry::new(record.clone()));
    host.request_redraw();
}

/// Detach and sweep the entry for `id`, then redraw. Unknown ids only redraw.
pub fn remove_record<H: GridHost + ?Sized>(host: &mut H, id: &str) {
    let overlays = host.overlays_mut();
    if let Some(entry) = overlays.get_mut(id) {
        log::debug!("overlay: removing entry {}", id);
        entry.clear();
    }
    overlays.sweep_cleared();
    host.request_redraw();
}

/// Toggle one edge on every visual helper of the entry for `id`.
///
/// Returns false when no live entry has this id, in which case there was
/// nothing to toggle and the caller has to sync the record itself.
pub fn toggle_edge_visual_state<H: GridHost + ?Sized>(host: &mut H, id: &str, edge: Edge, hidden: bool) -> bool {
    match host.overlays_mut().get_mut(id) {
        Some(entry) if !entry.is_cleared() => {
            log::trace!("overlay: {} {} hidden={}", id, edge, hidden);
            for helper in entry.instance_borders_mut() {
                helper.toggle_hidden(edge, hidden);
            }
            true
        }
        _ => false,
    }
}

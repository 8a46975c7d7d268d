//! Custom borders plugin.
//!
//! `CustomBorders` is the public entry point. It owns the border store and
//! keeps three views of the same fact in step:
//! - the store itself (one record per bordered cell)
//! - the host's per-cell `borders` metadata
//! - the host's overlay collection, which renders the lines
//!
//! There is one instance per grid. Every call runs to completion
//! synchronously; cells are always visited row-major.

use cellborders_config::{BorderEntry, EntryTarget};
use cellborders_core::resolve::{self, BorderCommand, CellOp};
use cellborders_core::{border_id, BorderRecord, BorderSpec, CellRange, Edge, EdgeStyle, Selection};

use crate::hooks::{Hook, HookRegistry};
use crate::host::GridHost;
use crate::menu::{self, MenuEntry};
use crate::overlay;
use crate::store::{BorderStore, UpsertOutcome};

#[derive(Debug, Default)]
pub struct CustomBorders {
    store: BorderStore,
    hooks: HookRegistry,
    enabled: bool,
}

impl CustomBorders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the host's settings ask for this plugin.
    pub fn is_enabled_in<H: GridHost + ?Sized>(host: &H) -> bool {
        host.custom_borders_setting().is_enabled()
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn store(&self) -> &BorderStore {
        &self.store
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Register the context-menu hook and the one-shot init hook.
    pub fn enable_plugin(&mut self) {
        if self.enabled {
            return;
        }
        self.hooks.register(Hook::AfterContextMenuDefaultOptions);
        self.hooks.register_once(Hook::AfterInit);
        self.enabled = true;
        log::debug!("custom borders enabled");
    }

    /// Remove every border and unregister all hooks.
    pub fn disable_plugin<H: GridHost + ?Sized>(&mut self, host: &mut H) {
        self.clear_borders(host, None);
        self.hooks.clear();
        self.enabled = false;
        log::debug!("custom borders disabled");
    }

    /// Settings changed: start over and re-apply the configuration.
    pub fn update_plugin<H: GridHost + ?Sized>(&mut self, host: &mut H) {
        self.disable_plugin(host);
        self.enable_plugin();
        self.apply_configuration(host);
    }

    /// Host callback for `Hook::AfterContextMenuDefaultOptions`.
    pub fn on_after_context_menu_default_options<H: GridHost + ?Sized>(&mut self, host: &H, items: &mut Vec<MenuEntry>) {
        if !self.hooks.fire(Hook::AfterContextMenuDefaultOptions) {
            return;
        }
        if !Self::is_enabled_in(host) {
            return;
        }
        items.push(MenuEntry::Separator);
        items.push(menu::borders_submenu(host));
    }

    /// Host callback for `Hook::AfterInit`. Runs at most once per enable.
    pub fn on_after_init<H: GridHost + ?Sized>(&mut self, host: &mut H) {
        if !self.hooks.fire(Hook::AfterInit) {
            return;
        }
        self.apply_configuration(host);
    }

    /// Apply the declarative entries from the host's `customBorders` setting.
    pub fn apply_configuration<H: GridHost + ?Sized>(&mut self, host: &mut H) {
        let entries = match host.custom_borders_setting().entries() {
            Some(entries) => entries.to_vec(),
            None => return,
        };
        self.initialize_from_configuration(host, &entries);
    }

    /// Apply declarative border entries.
    ///
    /// An empty list resets tracked state: the store and the overlay entries
    /// go, per-cell metadata stays.
    pub fn initialize_from_configuration<H: GridHost + ?Sized>(&mut self, host: &mut H, entries: &[BorderEntry]) {
        if entries.is_empty() {
            for id in self.store.ids() {
                overlay::remove_record(host, &id);
            }
            self.store.clear();
            log::debug!("custom borders: empty configuration, tracked state reset");
            return;
        }

        for (index, entry) in entries.iter().enumerate() {
            match entry.target() {
                EntryTarget::Range(range) => self.apply_range_entry(host, &range, &entry.spec),
                EntryTarget::Cell { row, col } => self.apply_cell_entry(host, row, col, &entry.spec),
                EntryTarget::Missing => {
                    log::warn!("customBorders[{}] has neither range nor row/col; skipped", index);
                }
            }
        }
        log::debug!("custom borders: applied {} configuration entries", entries.len());
    }

    /// Declarative range entry: only boundary edges named in `spec` are set,
    /// interior cells are not touched.
    pub fn apply_range_entry<H: GridHost + ?Sized>(&mut self, host: &mut H, range: &CellRange, spec: &BorderSpec) {
        let Some(range) = range.clamp(host.count_rows(), host.count_cols()) else {
            return;
        };

        for target in resolve::range_boundary_targets(&range, spec) {
            let mut record = BorderRecord::empty(target.row, target.col);
            for edge in &target.edges {
                if let Some(edge_spec) = spec.edge(*edge) {
                    record.set_edge(*edge, EdgeStyle::from_spec(edge_spec));
                }
            }
            self.commit(host, record);
        }
    }

    /// Declarative single-cell entry. Edges the entry does not name keep
    /// whatever an earlier entry gave them.
    pub fn apply_cell_entry<H: GridHost + ?Sized>(&mut self, host: &mut H, row: usize, col: usize, spec: &BorderSpec) {
        if row >= host.count_rows() || col >= host.count_cols() {
            return;
        }
        let record = self
            .store
            .get(&border_id(row, col))
            .cloned()
            .unwrap_or_else(|| BorderRecord::empty(row, col))
            .extend(spec);
        self.commit(host, record);
    }

    // ── Public border API ────────────────────────────────────────────

    /// Replace the borders of every cell in `selections` with `spec`.
    ///
    /// Each targeted cell loses all four edges first, so edges missing from
    /// `spec` end up hidden. An empty `spec` just clears.
    pub fn set_borders<H: GridHost + ?Sized>(&mut self, host: &mut H, selections: &[Selection], spec: &BorderSpec) {
        let (rows, cols) = (host.count_rows(), host.count_cols());
        for selection in selections.iter().filter_map(|s| s.clamp(rows, cols)) {
            for cell in resolve::covered_cells(&selection) {
                self.remove_all_borders(host, cell.row, cell.col);
                if !spec.is_empty() {
                    self.commit(host, BorderRecord::empty(cell.row, cell.col).extend(spec));
                }
            }
        }
        host.request_redraw();
    }

    /// Stored records for each selection, concatenated.
    ///
    /// Lookup is per selection: a record covered by two overlapping
    /// selections is returned twice.
    pub fn get_borders(&self, selections: &[Selection]) -> Vec<BorderRecord> {
        selections
            .iter()
            .flat_map(|selection| self.store.query_range(selection.bounds()).cloned())
            .collect()
    }

    /// Every stored record, in store order.
    pub fn all_borders(&self) -> &[BorderRecord] {
        self.store.records()
    }

    /// With `None`, drop every border along with its overlay entry and
    /// metadata. With selections, clear exactly those cells.
    pub fn clear_borders<H: GridHost + ?Sized>(&mut self, host: &mut H, selections: Option<&[Selection]>) {
        if let Some(selections) = selections {
            self.set_borders(host, selections, &BorderSpec::default());
            return;
        }

        let records = self.store.drain();
        for record in &records {
            overlay::remove_record(host, &record.id);
            host.remove_cell_borders(record.row, record.col);
        }
        if !records.is_empty() {
            log::debug!("custom borders: cleared {} records", records.len());
        }
        host.request_redraw();
    }

    /// Context-menu edge action with merge semantics.
    ///
    /// Each targeted cell keeps its other edges; only the named edge is
    /// shown or hidden. `NoBorders` removes everything from the targets.
    pub fn apply_edge_from_menu<H: GridHost + ?Sized>(
        &mut self,
        host: &mut H,
        selections: &[Selection],
        command: BorderCommand,
        removing: bool,
    ) {
        let (rows, cols) = (host.count_rows(), host.count_cols());
        for selection in selections.iter().filter_map(|s| s.clamp(rows, cols)) {
            for op in resolve::command_targets(&selection, command) {
                match op {
                    CellOp::ClearAll { row, col } => self.remove_all_borders(host, row, col),
                    CellOp::SetEdge { row, col, edge } => self.set_edge(host, row, col, edge, removing),
                }
            }
        }
        host.request_redraw();
    }

    /// Run a context-menu item against the host's current selection.
    ///
    /// Edge items toggle: if any selected cell already shows that edge the
    /// edge is removed, otherwise it is added. Returns false for keys that
    /// are not border items.
    pub fn run_menu_action<H: GridHost + ?Sized>(&mut self, host: &mut H, key: &str) -> bool {
        let Some(command) = menu::command_for_key(key) else {
            return false;
        };
        let selection = host.selected_ranges();
        let removing = match command {
            BorderCommand::Edge(edge) => menu::selection_has_border(host, &selection, Some(edge)),
            BorderCommand::NoBorders => true,
        };
        self.apply_edge_from_menu(host, &selection, command, removing);
        true
    }

    // ── Per-cell steps ───────────────────────────────────────────────

    /// Drop the cell's record, overlay entry and metadata.
    fn remove_all_borders<H: GridHost + ?Sized>(&mut self, host: &mut H, row: usize, col: usize) {
        let id = border_id(row, col);
        if self.store.remove_by_id(&id).is_some() {
            log::debug!("custom borders: evicted {}", id);
        }
        overlay::remove_record(host, &id);
        host.remove_cell_borders(row, col);
    }

    /// Show or hide one edge, starting from the cell's metadata.
    fn set_edge<H: GridHost + ?Sized>(&mut self, host: &mut H, row: usize, col: usize, edge: Edge, removing: bool) {
        let mut record = host
            .cell_borders(row, col)
            .cloned()
            .unwrap_or_else(|| BorderRecord::empty(row, col));

        if removing {
            record.set_edge(edge, EdgeStyle::empty());
            if record.is_fully_hidden() {
                self.remove_all_borders(host, row, col);
                return;
            }
        } else {
            record.set_edge(edge, EdgeStyle::custom_default());
        }

        if !overlay::toggle_edge_visual_state(host, &record.id, edge, removing) {
            log::trace!("custom borders: no live overlay for {}, syncing", record.id);
        }
        self.insert_border(host, &record);
        host.set_cell_borders(row, col, record);
    }

    /// Store the record and mirror it into overlay and metadata.
    fn commit<H: GridHost + ?Sized>(&mut self, host: &mut H, record: BorderRecord) {
        let (row, col) = (record.row, record.col);
        if self.insert_border(host, &record).is_evicted() {
            host.remove_cell_borders(row, col);
        } else {
            host.set_cell_borders(row, col, record);
        }
    }

    /// Upsert into the store, then sync or remove the overlay entry.
    fn insert_border<H: GridHost + ?Sized>(&mut self, host: &mut H, record: &BorderRecord) -> UpsertOutcome {
        let outcome = self.store.upsert(record.clone());
        if outcome.is_evicted() {
            log::debug!("custom borders: evicted {}", record.id);
            overlay::remove_record(host, &record.id);
        } else {
            overlay::sync_record(host, record);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::MemoryGrid;
    use cellborders_config::CustomBordersSetting;
    use cellborders_core::{CellCoord, EdgeSpec, RangeSpec};

    /// Store, overlay and metadata agree on which cells have borders.
    fn assert_consistent(plugin: &CustomBorders, grid: &MemoryGrid) {
        let mut store_ids = plugin.store().ids();
        let mut overlay_ids = grid.overlays().live_ids();
        store_ids.sort();
        overlay_ids.sort();
        assert_eq!(store_ids, overlay_ids, "store and overlay diverged");
        assert!(plugin.all_borders().iter().all(|r| !r.is_fully_hidden()));
        for record in plugin.all_borders() {
            assert_eq!(grid.cell_borders(record.row, record.col), Some(record));
        }
    }

    fn top_left_spec() -> BorderSpec {
        BorderSpec::new()
            .with_edge(Edge::Top, EdgeSpec::new())
            .with_edge(Edge::Left, EdgeSpec::new())
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let mut grid = MemoryGrid::new(10, 10);
        let mut plugin = CustomBorders::new();
        let spec = BorderSpec::new()
            .with_edge(Edge::Top, EdgeSpec::new().width(2).color("red"))
            .with_edge(Edge::Bottom, EdgeSpec::new());

        plugin.set_borders(&mut grid, &[Selection::point(3, 4)], &spec);
        let found = plugin.get_borders(&[Selection::point(3, 4)]);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0], BorderRecord::empty(3, 4).extend(&spec));
        assert_eq!(found[0].top.width, Some(2));
        assert_eq!(found[0].bottom.color.as_deref(), Some("#000"));
        assert!(found[0].left.hide);
        assert_consistent(&plugin, &grid);
    }

    #[test]
    fn test_set_borders_replaces_existing_edges() {
        let mut grid = MemoryGrid::new(10, 10);
        let mut plugin = CustomBorders::new();
        let cell = [Selection::point(1, 1)];

        plugin.set_borders(&mut grid, &cell, &BorderSpec::all());
        plugin.set_borders(&mut grid, &cell, &BorderSpec::new().with_edge(Edge::Left, EdgeSpec::new()));

        let found = plugin.get_borders(&cell);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].visible_edges(), vec![Edge::Left]);
        assert_consistent(&plugin, &grid);
    }

    #[test]
    fn test_set_borders_on_range_covers_every_cell() {
        let mut grid = MemoryGrid::new(10, 10);
        let mut plugin = CustomBorders::new();
        plugin.set_borders(&mut grid, &[Selection::from_corners(0, 0, 1, 2)], &BorderSpec::all());

        assert_eq!(plugin.all_borders().len(), 6);
        assert_eq!(grid.meta_len(), 6);
        assert_consistent(&plugin, &grid);
    }

    #[test]
    fn test_set_borders_skips_cells_outside_grid() {
        let mut grid = MemoryGrid::new(3, 3);
        let mut plugin = CustomBorders::new();
        plugin.set_borders(&mut grid, &[Selection::from_corners(1, 1, 5, 5)], &BorderSpec::all());
        plugin.set_borders(&mut grid, &[Selection::point(7, 7)], &BorderSpec::all());

        assert_eq!(plugin.all_borders().len(), 4);
        assert!(plugin.all_borders().iter().all(|r| r.row < 3 && r.col < 3));
    }

    #[test]
    fn test_get_borders_overlapping_selections_duplicate() {
        let mut grid = MemoryGrid::new(10, 10);
        let mut plugin = CustomBorders::new();
        plugin.set_borders(&mut grid, &[Selection::point(2, 2)], &BorderSpec::all());

        let found = plugin.get_borders(&[Selection::point(2, 2), Selection::from_corners(1, 1, 3, 3)]);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0], found[1]);
    }

    #[test]
    fn test_get_borders_store_order_within_selection() {
        let mut grid = MemoryGrid::new(10, 10);
        let mut plugin = CustomBorders::new();
        plugin.set_borders(&mut grid, &[Selection::point(2, 2)], &BorderSpec::all());
        plugin.set_borders(&mut grid, &[Selection::point(0, 0)], &BorderSpec::all());

        let found = plugin.get_borders(&[Selection::from_corners(0, 0, 2, 2)]);
        let coords: Vec<_> = found.iter().map(|r| r.coord()).collect();
        assert_eq!(coords, vec![CellCoord::new(2, 2), CellCoord::new(0, 0)]);
    }

    #[test]
    fn test_clear_borders_full_reset_is_idempotent() {
        let mut grid = MemoryGrid::new(10, 10);
        let mut plugin = CustomBorders::new();
        plugin.set_borders(&mut grid, &[Selection::from_corners(0, 0, 2, 2)], &BorderSpec::all());

        plugin.clear_borders(&mut grid, None);
        assert!(plugin.all_borders().is_empty());
        assert!(grid.overlays().is_empty());
        assert_eq!(grid.meta_len(), 0);

        plugin.clear_borders(&mut grid, None);
        assert!(plugin.all_borders().is_empty());
        assert!(grid.overlays().is_empty());
        assert_eq!(grid.meta_len(), 0);
    }

    #[test]
    fn test_clear_borders_for_selection() {
        let mut grid = MemoryGrid::new(10, 10);
        let mut plugin = CustomBorders::new();
        plugin.set_borders(&mut grid, &[Selection::from_corners(0, 0, 0, 3)], &BorderSpec::all());

        plugin.clear_borders(&mut grid, Some(&[Selection::from_corners(0, 1, 0, 2)]));

        let remaining: Vec<_> = plugin.all_borders().iter().map(|r| r.col).collect();
        assert_eq!(remaining, vec![0, 3]);
        assert!(grid.cell_borders(0, 1).is_none());
        assert_consistent(&plugin, &grid);
    }

    #[test]
    fn test_menu_range_top_touches_top_row_only() {
        let mut grid = MemoryGrid::new(10, 10);
        let mut plugin = CustomBorders::new();
        let range = [Selection::from_corners(0, 0, 2, 2)];

        plugin.apply_edge_from_menu(&mut grid, &range, BorderCommand::Edge(Edge::Top), false);

        let coords: Vec<_> = plugin.all_borders().iter().map(|r| (r.row, r.col)).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2)]);
        assert!(plugin.all_borders().iter().all(|r| r.visible_edges() == vec![Edge::Top]));
        assert_consistent(&plugin, &grid);
    }

    #[test]
    fn test_menu_no_borders_clears_region() {
        let mut grid = MemoryGrid::new(10, 10);
        let mut plugin = CustomBorders::new();
        let range = [Selection::from_corners(0, 0, 2, 2)];
        plugin.set_borders(&mut grid, &range, &BorderSpec::all());
        plugin.set_borders(&mut grid, &[Selection::point(5, 5)], &BorderSpec::all());

        plugin.apply_edge_from_menu(&mut grid, &range, BorderCommand::NoBorders, true);

        assert!(plugin.get_borders(&range).is_empty());
        assert_eq!(plugin.all_borders().len(), 1);
        assert_consistent(&plugin, &grid);
    }

    #[test]
    fn test_menu_add_and_remove_edges_until_evicted() {
        let mut grid = MemoryGrid::new(10, 10);
        let mut plugin = CustomBorders::new();
        let cell = [Selection::point(1, 1)];

        plugin.apply_edge_from_menu(&mut grid, &cell, BorderCommand::Edge(Edge::Top), false);
        plugin.apply_edge_from_menu(&mut grid, &cell, BorderCommand::Edge(Edge::Right), false);
        let found = plugin.get_borders(&cell);
        assert_eq!(found[0].visible_edges(), vec![Edge::Top, Edge::Right]);
        assert_consistent(&plugin, &grid);

        plugin.apply_edge_from_menu(&mut grid, &cell, BorderCommand::Edge(Edge::Top), true);
        assert_eq!(grid.cell_borders(1, 1).map(|r| r.visible_edges()), Some(vec![Edge::Right]));
        assert_consistent(&plugin, &grid);

        plugin.apply_edge_from_menu(&mut grid, &cell, BorderCommand::Edge(Edge::Right), true);
        assert!(plugin.get_borders(&cell).is_empty());
        assert!(grid.cell_borders(1, 1).is_none());
        assert!(grid.overlays().is_empty());
    }

    #[test]
    fn test_menu_toggle_updates_visual_helpers() {
        let mut grid = MemoryGrid::new(10, 10);
        let mut plugin = CustomBorders::new();
        let cell = [Selection::point(4, 4)];
        let id = border_id(4, 4);

        plugin.apply_edge_from_menu(&mut grid, &cell, BorderCommand::Edge(Edge::Top), false);
        plugin.apply_edge_from_menu(&mut grid, &cell, BorderCommand::Edge(Edge::Left), false);

        let helper = &grid.overlays().get(&id).unwrap().instance_borders()[0];
        assert!(!helper.is_hidden(Edge::Top));
        assert!(!helper.is_hidden(Edge::Left));
        assert!(helper.is_hidden(Edge::Bottom));
    }

    #[test]
    fn test_menu_remove_on_bare_cell_is_noop() {
        let mut grid = MemoryGrid::new(10, 10);
        let mut plugin = CustomBorders::new();
        plugin.apply_edge_from_menu(&mut grid, &[Selection::point(0, 0)], BorderCommand::Edge(Edge::Bottom), true);

        assert!(plugin.all_borders().is_empty());
        assert_eq!(grid.meta_len(), 0);
    }

    #[test]
    fn test_run_menu_action_toggles() {
        let mut grid = MemoryGrid::new(10, 10);
        let mut plugin = CustomBorders::new();
        grid.select(vec![Selection::point(2, 2)]);

        assert!(plugin.run_menu_action(&mut grid, "borders:left"));
        assert_eq!(plugin.all_borders()[0].visible_edges(), vec![Edge::Left]);

        assert!(plugin.run_menu_action(&mut grid, "borders:left"));
        assert!(plugin.all_borders().is_empty());

        assert!(!plugin.run_menu_action(&mut grid, "paste"));
    }

    #[test]
    fn test_declarative_range_corner_edges() {
        let mut grid = MemoryGrid::new(10, 10);
        let mut plugin = CustomBorders::new();
        let entry = BorderEntry::range(
            RangeSpec { from: CellCoord::new(0, 0), to: CellCoord::new(2, 2) },
            top_left_spec(),
        );

        plugin.initialize_from_configuration(&mut grid, &[entry]);

        let edges_at = |row, col| plugin.get_borders(&[Selection::point(row, col)]).first().map(|r| r.visible_edges());
        assert_eq!(edges_at(0, 0), Some(vec![Edge::Top, Edge::Left]));
        assert_eq!(edges_at(0, 1), Some(vec![Edge::Top]));
        assert_eq!(edges_at(1, 0), Some(vec![Edge::Left]));
        assert_eq!(edges_at(1, 1), None);
        assert_eq!(edges_at(2, 2), None);
        assert_consistent(&plugin, &grid);
    }

    #[test]
    fn test_declarative_range_is_clamped() {
        let mut grid = MemoryGrid::new(2, 2);
        let mut plugin = CustomBorders::new();
        let entry = BorderEntry::range(
            RangeSpec { from: CellCoord::new(0, 0), to: CellCoord::new(9, 9) },
            BorderSpec::new().with_edge(Edge::Bottom, EdgeSpec::new()),
        );

        plugin.initialize_from_configuration(&mut grid, &[entry]);

        // Bottom of the clamped range is row 1
        let coords: Vec<_> = plugin.all_borders().iter().map(|r| (r.row, r.col)).collect();
        assert_eq!(coords, vec![(1, 0), (1, 1)]);
    }

    #[test]
    fn test_repeated_cell_entries_merge_edges() {
        let mut grid = MemoryGrid::new(10, 10);
        let mut plugin = CustomBorders::new();
        let entries = vec![
            BorderEntry::cell(0, 0, BorderSpec::new().with_edge(Edge::Top, EdgeSpec::new())),
            BorderEntry::cell(0, 0, BorderSpec::new().with_edge(Edge::Left, EdgeSpec::new())),
        ];

        plugin.initialize_from_configuration(&mut grid, &entries);

        let found = plugin.get_borders(&[Selection::point(0, 0)]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].visible_edges(), vec![Edge::Top, Edge::Left]);

        let helper = &grid.overlays().get(&border_id(0, 0)).unwrap().instance_borders()[0];
        assert!(!helper.is_hidden(Edge::Top));
        assert!(!helper.is_hidden(Edge::Left));
        assert!(helper.is_hidden(Edge::Right));
        assert_consistent(&plugin, &grid);
    }

    #[test]
    fn test_get_borders_select_all_on_large_grid() {
        let mut grid = MemoryGrid::new(100_000, 1_000);
        let mut plugin = CustomBorders::new();
        plugin.set_borders(&mut grid, &[Selection::point(50_000, 500)], &BorderSpec::all());

        let all = Selection::from_corners(0, 0, usize::MAX, usize::MAX);
        let found = plugin.get_borders(&[all, all]);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].coord(), CellCoord::new(50_000, 500));
    }

    #[test]
    fn test_declarative_cell_entry_does_not_clear_other_edges() {
        let mut grid = MemoryGrid::new(10, 10);
        let mut plugin = CustomBorders::new();
        let entries = vec![
            BorderEntry::cell(3, 3, BorderSpec::new().with_edge(Edge::Right, EdgeSpec::new().width(2))),
            BorderEntry { row: Some(4), ..Default::default() },
        ];

        plugin.initialize_from_configuration(&mut grid, &entries);

        assert_eq!(plugin.all_borders().len(), 1);
        assert_eq!(plugin.all_borders()[0].right.width, Some(2));
        assert_consistent(&plugin, &grid);
    }

    #[test]
    fn test_empty_configuration_resets_tracking_but_keeps_metadata() {
        let mut grid = MemoryGrid::new(10, 10);
        let mut plugin = CustomBorders::new();
        plugin.set_borders(&mut grid, &[Selection::point(0, 0)], &BorderSpec::all());

        plugin.initialize_from_configuration(&mut grid, &[]);

        assert!(plugin.all_borders().is_empty());
        assert!(grid.overlays().is_empty());
        assert_eq!(grid.meta_len(), 1);
    }

    #[test]
    fn test_lifecycle_hooks() {
        let setting = CustomBordersSetting::Entries(vec![BorderEntry::cell(1, 1, BorderSpec::all())]);
        let mut grid = MemoryGrid::new(10, 10).with_setting(setting);
        let mut plugin = CustomBorders::new();

        // Not enabled: hooks do nothing
        plugin.on_after_init(&mut grid);
        assert!(plugin.all_borders().is_empty());

        plugin.enable_plugin();
        plugin.on_after_init(&mut grid);
        assert_eq!(plugin.all_borders().len(), 1);

        // Init hook is one-shot
        plugin.clear_borders(&mut grid, None);
        plugin.on_after_init(&mut grid);
        assert!(plugin.all_borders().is_empty());

        let mut items = vec![MenuEntry::Item { key: "copy", label: "Copy", checked: false, disabled: false }];
        plugin.on_after_context_menu_default_options(&grid, &mut items);
        assert_eq!(items.len(), 3);
        assert_eq!(items[1], MenuEntry::Separator);
        assert_eq!(items[2].key(), Some(menu::BORDERS_KEY));
    }

    #[test]
    fn test_context_menu_skipped_when_setting_off() {
        let mut grid = MemoryGrid::new(10, 10);
        let mut plugin = CustomBorders::new();
        plugin.enable_plugin();

        let mut items = Vec::new();
        plugin.on_after_context_menu_default_options(&grid, &mut items);
        assert!(items.is_empty());

        grid.set_setting(CustomBordersSetting::Enabled(true));
        plugin.on_after_context_menu_default_options(&grid, &mut items);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_disable_clears_and_update_reapplies() {
        let setting = CustomBordersSetting::Entries(vec![BorderEntry::cell(0, 0, BorderSpec::all())]);
        let mut grid = MemoryGrid::new(10, 10).with_setting(setting);
        let mut plugin = CustomBorders::new();
        plugin.enable_plugin();
        plugin.on_after_init(&mut grid);
        plugin.set_borders(&mut grid, &[Selection::point(5, 5)], &BorderSpec::all());

        plugin.disable_plugin(&mut grid);
        assert!(!plugin.enabled());
        assert!(plugin.all_borders().is_empty());
        assert_eq!(grid.meta_len(), 0);

        plugin.update_plugin(&mut grid);
        assert!(plugin.enabled());
        let coords: Vec<_> = plugin.all_borders().iter().map(|r| r.coord()).collect();
        assert_eq!(coords, vec![CellCoord::new(0, 0)]);
        assert_consistent(&plugin, &grid);
    }
}

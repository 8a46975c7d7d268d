//! Context menu model for border actions.
//!
//! The host builds its context menu from a list of `MenuEntry` values; the
//! border plugin appends a separator and a `Borders` submenu with one item
//! per `BorderCommand`. Item keys are how the host reports a choice back.

use cellborders_core::{BorderCommand, Edge, Selection};

use crate::host::GridHost;

/// Key of the `Borders` submenu.
pub const BORDERS_KEY: &str = "borders";

/// Context menu entry descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Item { key: &'static str, label: &'static str, checked: bool, disabled: bool },
    Submenu { key: &'static str, label: &'static str, disabled: bool, items: Vec<MenuEntry> },
    Separator,
}

impl MenuEntry {
    pub fn key(&self) -> Option<&'static str> {
        match self {
            MenuEntry::Item { key, .. } | MenuEntry::Submenu { key, .. } => Some(*key),
            MenuEntry::Separator => None,
        }
    }
}

pub fn command_key(command: BorderCommand) -> &'static str {
    match command {
        BorderCommand::Edge(Edge::Top) => "borders:top",
        BorderCommand::Edge(Edge::Right) => "borders:right",
        BorderCommand::Edge(Edge::Bottom) => "borders:bottom",
        BorderCommand::Edge(Edge::Left) => "borders:left",
        BorderCommand::NoBorders => "borders:no_borders",
    }
}

pub fn command_label(command: BorderCommand) -> &'static str {
    match command {
        BorderCommand::Edge(Edge::Top) => "Top",
        BorderCommand::Edge(Edge::Right) => "Right",
        BorderCommand::Edge(Edge::Bottom) => "Bottom",
        BorderCommand::Edge(Edge::Left) => "Left",
        BorderCommand::NoBorders => "Remove border(s)",
    }
}

pub fn command_for_key(key: &str) -> Option<BorderCommand> {
    BorderCommand::ALL.into_iter().find(|c| command_key(*c) == key)
}

/// Whether any selected cell carries a border.
///
/// With `edge` set, only a visible edge on that side counts; otherwise any
/// `borders` metadata does. Walks the bordered cells, not the selection.
pub fn selection_has_border<H: GridHost + ?Sized>(host: &H, selections: &[Selection], edge: Option<Edge>) -> bool {
    let (rows, cols) = (host.count_rows(), host.count_cols());
    let bounds: Vec<_> = selections
        .iter()
        .filter_map(|s| s.clamp(rows, cols))
        .map(|s| s.bounds())
        .collect();
    if bounds.is_empty() {
        return false;
    }
    host.all_cell_borders().into_iter().any(|record| {
        bounds.iter().any(|b| b.contains(record.row, record.col))
            && edge.map_or(true, |edge| record.edge(edge).is_visible())
    })
}

/// Build the `Borders` submenu for the host's current selection.
pub fn borders_submenu<H: GridHost + ?Sized>(host: &H) -> MenuEntry {
    let selection = host.selected_ranges();
    let items = BorderCommand::ALL
        .into_iter()
        .map(|command| match command {
            BorderCommand::Edge(edge) => MenuEntry::Item {
                key: command_key(command),
                label: command_label(command),
                checked: selection_has_border(host, &selection, Some(edge)),
                disabled: false,
            },
            BorderCommand::NoBorders => MenuEntry::Item {
                key: command_key(command),
                label: command_label(command),
                checked: false,
                disabled: !selection_has_border(host, &selection, None),
            },
        })
        .collect();

    MenuEntry::Submenu {
        key: BORDERS_KEY,
        label: "Borders",
        disabled: host.is_selected_by_corner(),
        items,
    }
}

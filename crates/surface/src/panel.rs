use catalog::CatalogItem;
use engine::{EnabledTabs, Session, StratumOptions};
use model::{StratumId, StratumLayout, StratumTab, ViewMode};

/// Presentation-local overlay state for one panel (layer list, info
/// overlay). Never part of the workspace snapshot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PanelChrome {
    pub layers_panel_open: bool,
    pub info_panel_open: bool,
}

impl PanelChrome {
    pub fn toggle_layers_panel(&mut self) {
        self.layers_panel_open = !self.layers_panel_open;
    }

    pub fn toggle_info_panel(&mut self) {
        self.info_panel_open = !self.info_panel_open;
    }
}

/// Focus gesture: activate the panel and expand it to fill the workspace,
/// or shrink it back to the mode held before it was expanded.
///
/// Expansion switches to `Single` through the history-tracking view-mode
/// transition; shrinking restores `previous_view_mode`. This pairing is
/// what the engine's depth-1 history exists for.
pub fn focus(session: &mut Session, id: StratumId) {
    session.set_active_stratum(Some(id));
    let Some(stratum) = session.workspace().stratum(id) else {
        return;
    };

    if !stratum.is_expanded {
        if session.workspace().view_mode() != ViewMode::Single {
            session.set_view_mode(ViewMode::Single);
        }
        session.toggle_stratum_expanded(id);
    } else {
        if let Some(previous) = session.workspace().previous_view_mode()
            && previous != ViewMode::Single
        {
            session.set_view_mode(previous);
        }
        session.toggle_stratum_expanded(id);
    }
}

pub fn select_tab(session: &mut Session, id: StratumId, tab: StratumTab) {
    session.set_stratum_tab(id, tab);
}

pub fn set_layout(session: &mut Session, id: StratumId, layout: StratumLayout) {
    session.set_stratum_layout(id, layout);
}

pub fn remove(session: &mut Session, id: StratumId) {
    session.remove_stratum(id);
}

pub fn toggle_layer(session: &mut Session, id: StratumId, layer_id: &str) {
    session.toggle_layer(id, layer_id);
}

/// Maps a catalog item onto add-stratum options: title becomes the name,
/// the item's contents pick the enabled tabs.
pub fn stratum_options(item: &CatalogItem) -> StratumOptions {
    StratumOptions {
        name: Some(item.title.clone()),
        enabled_tabs: Some(EnabledTabs {
            map: item.has_content(StratumTab::Map),
            graphs: item.has_content(StratumTab::Graphs),
            index: item.has_content(StratumTab::Index),
        }),
        location: Some(item.location.clone()),
        description: Some(item.description.clone()),
    }
}

/// Adds a panel from a catalog item. Returns whether a panel was added;
/// callers grey out the affordance at the cap instead of handling a
/// rejection.
pub fn add_from_catalog(session: &mut Session, item: &CatalogItem) -> bool {
    if !session.workspace().can_add() {
        return false;
    }
    session.add_stratum(stratum_options(item));
    true
}

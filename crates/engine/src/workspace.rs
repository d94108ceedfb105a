use model::{
    GraphsTabState, IndexComponent, IndexTabState, Location, MapTabState, Stratum, StratumId,
    StratumLayout, StratumTab, StratumTabs, ViewMode, default_layers,
};
use serde::Serialize;

use crate::geocode::Geocoder;
use crate::options::{EnabledTabs, StratumOptions, StratumPatch};

/// Hard cap on the panel collection; the add transition degrades to a no-op
/// beyond it.
pub const MAX_STRATA: usize = 4;
/// The remove transition never drops the collection below this floor.
pub const MIN_STRATA: usize = 1;

/// Immutable workspace snapshot: the single source of truth for the panel
/// collection, the active-panel pointer, the view mode and its single-slot
/// history, and the location lock.
///
/// All fields are private. Every transition reads `self` and returns a
/// complete fresh snapshot, so no partial state is ever observable;
/// boundary conditions (panel cap, panel floor, unknown ids) return a
/// snapshot equal to the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workspace {
    strata: Vec<Stratum>,
    active_stratum_id: Option<StratumId>,
    view_mode: ViewMode,
    previous_view_mode: Option<ViewMode>,
    location_locked: bool,
    next_ordinal: u32,
}

/// View mode implied by the panel count. Applied only inside add/remove,
/// bypassing the view-mode history slot.
pub fn view_mode_for_count(count: usize) -> ViewMode {
    match count {
        0 | 1 => ViewMode::Single,
        2 | 3 => ViewMode::Columns,
        _ => ViewMode::Grid,
    }
}

impl Workspace {
    /// Session-initial workspace: one seeded assessment panel, single view,
    /// lock off.
    pub fn seeded() -> Self {
        let seed = seeded_stratum(StratumId(1));
        Self {
            active_stratum_id: Some(seed.id),
            strata: vec![seed],
            view_mode: ViewMode::Single,
            previous_view_mode: None,
            location_locked: false,
            next_ordinal: 2,
        }
    }

    pub fn strata(&self) -> &[Stratum] {
        &self.strata
    }

    pub fn stratum(&self, id: StratumId) -> Option<&Stratum> {
        self.strata.iter().find(|s| s.id == id)
    }

    pub fn active_stratum_id(&self) -> Option<StratumId> {
        self.active_stratum_id
    }

    pub fn active_stratum(&self) -> Option<&Stratum> {
        self.active_stratum_id.and_then(|id| self.stratum(id))
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn previous_view_mode(&self) -> Option<ViewMode> {
        self.previous_view_mode
    }

    pub fn location_locked(&self) -> bool {
        self.location_locked
    }

    /// Whether the add affordance should be live.
    pub fn can_add(&self) -> bool {
        self.strata.len() < MAX_STRATA
    }

    /// Whether the remove affordance should be live.
    pub fn can_remove(&self) -> bool {
        self.strata.len() > MIN_STRATA
    }

    /// Adds a panel built from the next ordinal, capped at `MAX_STRATA`.
    ///
    /// With the lock on and no explicit location, the new panel inherits
    /// the first panel's location; an explicit location wins over the lock.
    /// If the view mode before the add was `Single`, the new panel becomes
    /// the active one.
    pub fn add_stratum(&self, options: StratumOptions) -> Workspace {
        if self.strata.len() >= MAX_STRATA {
            return self.clone();
        }

        let mut next = self.clone();
        let ordinal = next.next_ordinal;
        next.next_ordinal += 1;

        let inherit_lock_location =
            next.location_locked && !next.strata.is_empty() && options.location.is_none();
        let mut stratum = build_stratum(StratumId(ordinal), ordinal, options);
        if inherit_lock_location {
            stratum.location = next.strata[0].location.clone();
        }

        let mode_before = next.view_mode;
        let new_id = stratum.id;
        next.strata.push(stratum);
        next.view_mode = view_mode_for_count(next.strata.len());
        if mode_before == ViewMode::Single {
            next.active_stratum_id = Some(new_id);
        }
        next
    }

    /// Removes a panel, floored at `MIN_STRATA`. Removing the active panel
    /// makes the first remaining panel active.
    pub fn remove_stratum(&self, id: StratumId) -> Workspace {
        if self.strata.len() <= MIN_STRATA || self.stratum(id).is_none() {
            return self.clone();
        }

        let mut next = self.clone();
        next.strata.retain(|s| s.id != id);
        next.view_mode = view_mode_for_count(next.strata.len());
        if next.active_stratum_id == Some(id) {
            next.active_stratum_id = next.strata.first().map(|s| s.id);
        }
        next
    }

    /// Direct assignment; membership is the caller's responsibility.
    pub fn set_active_stratum(&self, id: Option<StratumId>) -> Workspace {
        let mut next = self.clone();
        next.active_stratum_id = id;
        next
    }

    /// Merges the patch into the matching panel. When the lock is on and
    /// the patch carries a location, that location is applied to every
    /// panel, not just the target.
    pub fn update_stratum(&self, id: StratumId, patch: StratumPatch) -> Workspace {
        let mut next = self.clone();
        if next.location_locked
            && let Some(location) = &patch.location
        {
            for stratum in &mut next.strata {
                stratum.location = location.clone();
            }
        }
        if let Some(target) = next.strata.iter_mut().find(|s| s.id == id) {
            patch.apply(target);
        }
        next
    }

    pub fn set_stratum_tab(&self, id: StratumId, tab: StratumTab) -> Workspace {
        let mut next = self.clone();
        if let Some(target) = next.strata.iter_mut().find(|s| s.id == id) {
            // The active tab must always refer to an enabled tab; affordances
            // for disabled tabs are not rendered.
            debug_assert!(target.tabs.is_enabled(tab));
            target.active_tab = tab;
        }
        next
    }

    pub fn set_stratum_layout(&self, id: StratumId, layout: StratumLayout) -> Workspace {
        let mut next = self.clone();
        if let Some(target) = next.strata.iter_mut().find(|s| s.id == id) {
            target.layout = layout;
        }
        next
    }

    pub fn toggle_stratum_expanded(&self, id: StratumId) -> Workspace {
        let mut next = self.clone();
        if let Some(target) = next.strata.iter_mut().find(|s| s.id == id) {
            target.is_expanded = !target.is_expanded;
        }
        next
    }

    /// Assigns the mode, pushing the current mode into the depth-1 history
    /// slot when it actually changes.
    pub fn set_view_mode(&self, mode: ViewMode) -> Workspace {
        if mode == self.view_mode {
            return self.clone();
        }
        let mut next = self.clone();
        next.previous_view_mode = Some(next.view_mode);
        next.view_mode = mode;
        next
    }

    /// Flips layer visibility; a no-op when either id is unknown.
    pub fn toggle_layer(&self, stratum_id: StratumId, layer_id: &str) -> Workspace {
        let mut next = self.clone();
        if let Some(stratum) = next.strata.iter_mut().find(|s| s.id == stratum_id)
            && let Some(layer) = stratum.tabs.map.layers.iter_mut().find(|l| l.id == layer_id)
        {
            layer.visible = !layer.visible;
        }
        next
    }

    /// Engaging the lock with more than one panel first synchronizes every
    /// location to the active panel's (first panel when none is active),
    /// then flips the flag. Releasing it only flips the flag.
    pub fn toggle_location_lock(&self) -> Workspace {
        let mut next = self.clone();
        if !next.location_locked && next.strata.len() > 1 {
            let anchor = next
                .active_stratum()
                .or_else(|| next.strata.first())
                .map(|s| s.location.clone());
            if let Some(location) = anchor {
                for stratum in &mut next.strata {
                    stratum.location = location.clone();
                }
            }
        }
        next.location_locked = !next.location_locked;
        next
    }

    /// Unconditionally assigns the location to every panel.
    pub fn sync_location(&self, location: &Location) -> Workspace {
        let mut next = self.clone();
        for stratum in &mut next.strata {
            stratum.location = location.clone();
        }
        next
    }

    /// Resolves the query through the geocoding collaborator, then behaves
    /// exactly like a location update (inheriting the lock rule).
    pub fn search_location(
        &self,
        geocoder: &dyn Geocoder,
        query: &str,
        id: StratumId,
    ) -> Workspace {
        let location = geocoder.resolve(query);
        self.update_stratum(id, StratumPatch::location(location))
    }
}

fn build_stratum(id: StratumId, ordinal: u32, options: StratumOptions) -> Stratum {
    let enabled = options.enabled_tabs.unwrap_or_default();
    // A panel with no sub-views is unreachable from any affordance; fall
    // back to the full default set rather than violate the tab invariant.
    let enabled = if enabled.any() {
        enabled
    } else {
        EnabledTabs::default()
    };

    let tabs = StratumTabs {
        map: MapTabState {
            enabled: enabled.map,
            layers: default_layers(),
        },
        graphs: GraphsTabState {
            enabled: enabled.graphs,
        },
        index: IndexTabState {
            enabled: enabled.index,
            value: 72.0,
            description: options
                .description
                .unwrap_or_else(|| "Overall performance index based on multiple factors".to_string()),
            components: vec![
                IndexComponent::new("Environmental", 65.0, 0.3),
                IndexComponent::new("Economic", 78.0, 0.4),
                IndexComponent::new("Social", 70.0, 0.3),
            ],
        },
    };

    let active_tab = tabs
        .first_enabled()
        .unwrap_or(StratumTab::Map);

    Stratum {
        id,
        name: options
            .name
            .unwrap_or_else(|| format!("Stratum {ordinal}")),
        location: options.location.unwrap_or_else(Location::new_york),
        active_tab,
        layout: StratumLayout::Tabs,
        is_expanded: false,
        tabs,
    }
}

fn seeded_stratum(id: StratumId) -> Stratum {
    Stratum {
        id,
        name: "Climate Impact Assessment".to_string(),
        location: Location::seattle(),
        active_tab: StratumTab::Map,
        layout: StratumLayout::Tabs,
        is_expanded: false,
        tabs: StratumTabs {
            map: MapTabState {
                enabled: true,
                layers: default_layers(),
            },
            graphs: GraphsTabState { enabled: true },
            index: IndexTabState {
                enabled: true,
                value: 68.0,
                description: "Comprehensive assessment of climate change impacts on local \
                              ecosystems, with projections for future scenarios and adaptation \
                              strategies."
                    .to_string(),
                components: vec![
                    IndexComponent::new("Vulnerability", 72.0, 0.4),
                    IndexComponent::new("Adaptation", 65.0, 0.3),
                    IndexComponent::new("Mitigation", 67.0, 0.3),
                ],
            },
        },
    }
}

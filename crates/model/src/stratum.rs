use serde::{Deserialize, Serialize};

use crate::layer::MapLayer;
use crate::location::Location;

/// Stable panel identifier, assigned from a monotone ordinal and never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StratumId(pub u32);

impl std::fmt::Display for StratumId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stratum-{}", self.0)
    }
}

/// Workspace-level arrangement strategy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewMode {
    Single,
    Grid,
    Columns,
}

/// Which sub-view a panel currently shows when its layout is tab-switched.
///
/// Doubles as the catalog's content-kind vocabulary, so it is `Ord` for use
/// in ordered sets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StratumTab {
    Map,
    Graphs,
    Index,
}

/// Whether a panel's sub-views are tab-switched or simultaneously visible.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StratumLayout {
    Tabs,
    SideBySide,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapTabState {
    pub enabled: bool,
    pub layers: Vec<MapLayer>,
}

/// Chart data is derived from the stratum id (see `charts`), never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphsTabState {
    pub enabled: bool,
}

/// One weighted factor of the composite index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexComponent {
    pub name: String,
    /// Score in 0..=100.
    pub value: f64,
    /// Strictly positive; component weights of a stratum sum to 1.0.
    pub weight: f64,
}

impl IndexComponent {
    pub fn new(name: impl Into<String>, value: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            value,
            weight,
        }
    }
}

/// Composite-index sub-view. The score is computed outside this core; the
/// workspace only stores and displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexTabState {
    pub enabled: bool,
    /// Score in 0..=100.
    pub value: f64,
    pub description: String,
    pub components: Vec<IndexComponent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StratumTabs {
    pub map: MapTabState,
    pub graphs: GraphsTabState,
    pub index: IndexTabState,
}

impl StratumTabs {
    pub fn is_enabled(&self, tab: StratumTab) -> bool {
        match tab {
            StratumTab::Map => self.map.enabled,
            StratumTab::Graphs => self.graphs.enabled,
            StratumTab::Index => self.index.enabled,
        }
    }

    /// First enabled tab in Map, Graphs, Index order.
    pub fn first_enabled(&self) -> Option<StratumTab> {
        [StratumTab::Map, StratumTab::Graphs, StratumTab::Index]
            .into_iter()
            .find(|tab| self.is_enabled(*tab))
    }
}

/// One workspace panel.
///
/// Invariant: at least one tab is enabled, and `active_tab` always refers
/// to an enabled tab. The engine's transitions maintain both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stratum {
    pub id: StratumId,
    pub name: String,
    pub location: Location,
    pub active_tab: StratumTab,
    pub layout: StratumLayout,
    pub is_expanded: bool,
    pub tabs: StratumTabs,
}

impl Stratum {
    pub fn layer(&self, layer_id: &str) -> Option<&MapLayer> {
        self.tabs.map.layers.iter().find(|l| l.id == layer_id)
    }
}

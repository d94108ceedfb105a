use model::{Location, Stratum, StratumLayout, StratumTab};

/// Which sub-views a new panel starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnabledTabs {
    pub map: bool,
    pub graphs: bool,
    pub index: bool,
}

impl EnabledTabs {
    pub fn any(&self) -> bool {
        self.map || self.graphs || self.index
    }
}

impl Default for EnabledTabs {
    fn default() -> Self {
        Self {
            map: true,
            graphs: true,
            index: true,
        }
    }
}

/// Overrides for `add_stratum`; unset fields take the documented defaults.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StratumOptions {
    pub name: Option<String>,
    pub enabled_tabs: Option<EnabledTabs>,
    pub location: Option<Location>,
    pub description: Option<String>,
}

/// Partial update for `update_stratum`; `None` fields are left untouched.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StratumPatch {
    pub name: Option<String>,
    pub location: Option<Location>,
    pub active_tab: Option<StratumTab>,
    pub layout: Option<StratumLayout>,
    pub is_expanded: Option<bool>,
}

impl StratumPatch {
    pub fn location(location: Location) -> Self {
        Self {
            location: Some(location),
            ..Self::default()
        }
    }

    pub(crate) fn apply(&self, target: &mut Stratum) {
        if let Some(name) = &self.name {
            target.name = name.clone();
        }
        if let Some(location) = &self.location {
            target.location = location.clone();
        }
        if let Some(tab) = self.active_tab {
            target.active_tab = tab;
        }
        if let Some(layout) = self.layout {
            target.layout = layout;
        }
        if let Some(expanded) = self.is_expanded {
            target.is_expanded = expanded;
        }
    }
}

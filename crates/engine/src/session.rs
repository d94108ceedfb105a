use model::{Location, StratumId, StratumLayout, StratumTab, ViewMode};

use crate::events::{TransitionEvent, TransitionLog};
use crate::geocode::{Geocoder, HashGeocoder};
use crate::options::{StratumOptions, StratumPatch};
use crate::workspace::Workspace;

/// Controller owning the current workspace snapshot.
///
/// Each operation computes a fresh snapshot through the corresponding
/// `Workspace` transition, swaps it in as one unit, and records a
/// transition event. Operations are serialized by the hosting event loop;
/// the session assumes at most one in-flight transition.
#[derive(Debug)]
pub struct Session {
    workspace: Workspace,
    log: TransitionLog,
    geocoder: Box<dyn Geocoder>,
}

impl Session {
    /// Seeded session with the deterministic placeholder geocoder.
    pub fn seeded() -> Self {
        Self::with_geocoder(Box::new(HashGeocoder))
    }

    pub fn with_geocoder(geocoder: Box<dyn Geocoder>) -> Self {
        Self {
            workspace: Workspace::seeded(),
            log: TransitionLog::new(),
            geocoder,
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn events(&self) -> &[TransitionEvent] {
        self.log.events()
    }

    pub fn drain_events(&mut self) -> Vec<TransitionEvent> {
        self.log.drain()
    }

    pub fn add_stratum(&mut self, options: StratumOptions) {
        let next = self.workspace.add_stratum(options);
        let message = match next.strata().last() {
            Some(added) if next.strata().len() > self.workspace.strata().len() => {
                format!("{} added ({} total)", added.id, next.strata().len())
            }
            _ => "cap reached".to_string(),
        };
        self.commit("add_stratum", message, next);
    }

    pub fn remove_stratum(&mut self, id: StratumId) {
        let next = self.workspace.remove_stratum(id);
        self.commit("remove_stratum", format!("{id}"), next);
    }

    pub fn set_active_stratum(&mut self, id: Option<StratumId>) {
        let next = self.workspace.set_active_stratum(id);
        let message = match id {
            Some(id) => format!("{id}"),
            None => "none".to_string(),
        };
        self.commit("set_active_stratum", message, next);
    }

    pub fn update_stratum(&mut self, id: StratumId, patch: StratumPatch) {
        let next = self.workspace.update_stratum(id, patch);
        self.commit("update_stratum", format!("{id}"), next);
    }

    pub fn set_stratum_tab(&mut self, id: StratumId, tab: StratumTab) {
        let next = self.workspace.set_stratum_tab(id, tab);
        self.commit("set_stratum_tab", format!("{id} {tab:?}"), next);
    }

    pub fn set_stratum_layout(&mut self, id: StratumId, layout: StratumLayout) {
        let next = self.workspace.set_stratum_layout(id, layout);
        self.commit("set_stratum_layout", format!("{id} {layout:?}"), next);
    }

    pub fn toggle_stratum_expanded(&mut self, id: StratumId) {
        let next = self.workspace.toggle_stratum_expanded(id);
        self.commit("toggle_stratum_expanded", format!("{id}"), next);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        let next = self.workspace.set_view_mode(mode);
        self.commit("set_view_mode", format!("{mode:?}"), next);
    }

    pub fn toggle_layer(&mut self, stratum_id: StratumId, layer_id: &str) {
        let next = self.workspace.toggle_layer(stratum_id, layer_id);
        self.commit("toggle_layer", format!("{stratum_id} {layer_id}"), next);
    }

    pub fn toggle_location_lock(&mut self) {
        let next = self.workspace.toggle_location_lock();
        let message = if next.location_locked() { "on" } else { "off" };
        self.commit("toggle_location_lock", message, next);
    }

    pub fn sync_location(&mut self, location: &Location) {
        let next = self.workspace.sync_location(location);
        self.commit("sync_location", location.name.clone(), next);
    }

    pub fn search_location(&mut self, query: &str, id: StratumId) {
        let next = self.workspace.search_location(self.geocoder.as_ref(), query, id);
        self.commit("search_location", format!("{query:?} for {id}"), next);
    }

    fn commit(&mut self, kind: &'static str, message: impl Into<String>, next: Workspace) {
        self.workspace = next;
        self.log.emit(kind, message);
    }
}

/// Host-owned slot for the per-session engine state.
///
/// Touching the slot before `init` is a setup bug in the host, not a
/// runtime condition, and aborts at the call site.
#[derive(Debug, Default)]
pub struct SessionCell {
    inner: Option<Session>,
}

impl SessionCell {
    pub const fn empty() -> Self {
        Self { inner: None }
    }

    pub fn init(&mut self, session: Session) {
        self.inner = Some(session);
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.is_some()
    }

    pub fn get(&self) -> &Session {
        self.inner
            .as_ref()
            .expect("workspace session used before initialization")
    }

    pub fn get_mut(&mut self) -> &mut Session {
        self.inner
            .as_mut()
            .expect("workspace session used before initialization")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Session, SessionCell};
    use crate::options::StratumOptions;
    use model::ViewMode;

    #[test]
    fn operations_swap_snapshots_and_record_events() {
        let mut session = Session::seeded();
        session.add_stratum(StratumOptions::default());
        session.set_view_mode(ViewMode::Grid);
        assert_eq!(session.workspace().strata().len(), 2);
        assert_eq!(session.workspace().view_mode(), ViewMode::Grid);

        let kinds: Vec<&str> = session.events().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec!["add_stratum", "set_view_mode"]);
    }

    #[test]
    fn capped_add_still_records_the_attempt() {
        let mut session = Session::seeded();
        for _ in 0..4 {
            session.add_stratum(StratumOptions::default());
        }
        assert_eq!(session.workspace().strata().len(), 4);
        assert_eq!(session.events().last().unwrap().message, "cap reached");
    }

    #[test]
    fn search_location_is_deterministic_per_query() {
        let mut a = Session::seeded();
        let mut b = Session::seeded();
        let id = a.workspace().strata()[0].id;
        a.search_location("Lisbon", id);
        b.search_location("Lisbon", id);
        assert_eq!(a.workspace(), b.workspace());
    }

    #[test]
    fn cell_hands_out_the_session_once_initialized() {
        let mut cell = SessionCell::empty();
        assert!(!cell.is_initialized());
        cell.init(Session::seeded());
        assert_eq!(cell.get().workspace().strata().len(), 1);
        cell.get_mut().add_stratum(StratumOptions::default());
        assert_eq!(cell.get().workspace().strata().len(), 2);
    }

    #[test]
    #[should_panic(expected = "before initialization")]
    fn uninitialized_cell_access_is_fatal() {
        let cell = SessionCell::empty();
        let _ = cell.get();
    }
}

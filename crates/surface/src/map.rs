use engine::{Session, StratumPatch};
use model::{Location, LonLat, StratumId};

pub const MIN_ZOOM: u8 = 1;
pub const MAX_ZOOM: u8 = 20;
/// Degrees of location change per unit of drag distance.
pub const DRAG_DEGREES_PER_UNIT: f64 = 0.01;

/// Per-panel camera state. Presentation-local; never part of the
/// workspace snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapViewport {
    pub zoom: u8,
}

impl Default for MapViewport {
    fn default() -> Self {
        Self { zoom: 10 }
    }
}

impl MapViewport {
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1).max(MIN_ZOOM);
    }
}

/// Drag-to-pan gesture: nudges the panel's location by the drag delta.
///
/// Goes through `update_stratum`, so an engaged location lock propagates
/// the drag to every panel.
pub fn pan(session: &mut Session, id: StratumId, dx: f64, dy: f64) {
    let Some(stratum) = session.workspace().stratum(id) else {
        return;
    };
    let from = stratum.location.clone();
    let coordinates = LonLat::new(
        from.coordinates.lon - dx * DRAG_DEGREES_PER_UNIT,
        from.coordinates.lat + dy * DRAG_DEGREES_PER_UNIT,
    );
    session.update_stratum(
        id,
        StratumPatch::location(Location::new(from.name, coordinates)),
    );
}

/// Location search box: resolves through the session's geocoder.
pub fn search(session: &mut Session, query: &str, id: StratumId) {
    session.search_location(query, id);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use engine::{Session, StratumOptions};

    use super::{MAX_ZOOM, MIN_ZOOM, MapViewport, pan};

    #[test]
    fn zoom_clamps_at_both_ends() {
        let mut viewport = MapViewport::default();
        for _ in 0..40 {
            viewport.zoom_in();
        }
        assert_eq!(viewport.zoom, MAX_ZOOM);
        for _ in 0..40 {
            viewport.zoom_out();
        }
        assert_eq!(viewport.zoom, MIN_ZOOM);
    }

    #[test]
    fn pan_nudges_the_location_keeping_its_name() {
        let mut session = Session::seeded();
        let id = session.workspace().strata()[0].id;
        let before = session.workspace().strata()[0].location.clone();
        pan(&mut session, id, 100.0, -50.0);
        let after = &session.workspace().strata()[0].location;
        assert_eq!(after.name, before.name);
        assert_eq!(after.coordinates.lon, before.coordinates.lon - 1.0);
        assert_eq!(after.coordinates.lat, before.coordinates.lat - 0.5);
    }

    #[test]
    fn pan_under_lock_moves_every_panel() {
        let mut session = Session::seeded();
        session.add_stratum(StratumOptions::default());
        session.toggle_location_lock();
        let id = session.workspace().strata()[1].id;
        pan(&mut session, id, 10.0, 0.0);
        let strata = session.workspace().strata();
        assert_eq!(strata[0].location.coordinates, strata[1].location.coordinates);
    }

    #[test]
    fn pan_on_an_unknown_panel_is_a_no_op() {
        let mut session = Session::seeded();
        let before = session.workspace().clone();
        pan(&mut session, model::StratumId(42), 5.0, 5.0);
        assert_eq!(session.workspace(), &before);
    }
}

use engine::Workspace;
use model::{Stratum, StratumId, ViewMode};
use serde::Serialize;

/// Floor on any default cell allocation, as a fraction of its band. The
/// presentation layer reuses it as the interactive resize floor.
pub const MIN_CELL_FRACTION: f64 = 0.15;

/// One visible panel slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cell {
    pub stratum: StratumId,
    /// Fraction of the band's horizontal extent.
    pub fraction: f64,
}

/// One horizontal row of cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Band {
    /// Fraction of the workspace's vertical extent.
    pub fraction: f64,
    pub cells: Vec<Cell>,
}

/// The derived panel arrangement.
///
/// Cells follow `strata` sequence order, never re-sorted. Fractions along
/// each direction sum to at most 1.0; a shortfall is deliberately empty
/// space (the three-panel grid leaves its fourth slot blank).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Arrangement {
    pub bands: Vec<Band>,
}

impl Arrangement {
    pub fn cell_count(&self) -> usize {
        self.bands.iter().map(|b| b.cells.len()).sum()
    }

    /// Visible stratum ids in cell order.
    pub fn visible_ids(&self) -> Vec<StratumId> {
        self.bands
            .iter()
            .flat_map(|b| b.cells.iter().map(|c| c.stratum))
            .collect()
    }
}

/// Strata visible under the given mode: only the active one in `Single`
/// (first stratum as the deterministic fallback), everything otherwise.
pub fn visible_strata<'a>(
    view_mode: ViewMode,
    strata: &'a [Stratum],
    active: Option<StratumId>,
) -> Vec<&'a Stratum> {
    match view_mode {
        ViewMode::Single => {
            let focused = active
                .and_then(|id| strata.iter().find(|s| s.id == id))
                .or_else(|| strata.first());
            focused.into_iter().collect()
        }
        ViewMode::Grid | ViewMode::Columns => strata.iter().collect(),
    }
}

/// Pure derivation of the arrangement from workspace state. Called on
/// every render; no side effects, no caching.
pub fn derive(view_mode: ViewMode, strata: &[Stratum], active: Option<StratumId>) -> Arrangement {
    let visible = visible_strata(view_mode, strata, active);
    let ids: Vec<StratumId> = visible.iter().map(|s| s.id).collect();

    let bands = match (view_mode, ids.len()) {
        (_, 0) => Vec::new(),
        // One visible panel fills the workspace regardless of mode.
        (_, 1) => vec![band(1.0, &ids)],
        (ViewMode::Grid, 3) => vec![
            band(0.5, &ids[..2]),
            // Bottom band keeps the half-width cell; the other half stays
            // empty rather than redistributing.
            Band {
                fraction: 0.5,
                cells: vec![Cell {
                    stratum: ids[2],
                    fraction: 0.5,
                }],
            },
        ],
        (ViewMode::Grid, n) if n >= 4 => vec![band(0.5, &ids[..2]), band(0.5, &ids[2..])],
        // Columns at any count, and a two-panel grid, lay out one band.
        _ => vec![band(1.0, &ids)],
    };

    Arrangement { bands }
}

/// Convenience over a live workspace snapshot.
pub fn arrangement(workspace: &Workspace) -> Arrangement {
    derive(
        workspace.view_mode(),
        workspace.strata(),
        workspace.active_stratum_id(),
    )
}

fn band(fraction: f64, ids: &[StratumId]) -> Band {
    let share = equal_share(ids.len());
    Band {
        fraction,
        cells: ids
            .iter()
            .map(|id| Cell {
                stratum: *id,
                fraction: share,
            })
            .collect(),
    }
}

fn equal_share(count: usize) -> f64 {
    // Equal splits stay above the floor for every count the 4-panel cap
    // allows; the clamp guards the contract, not an expected case.
    (1.0 / count as f64).max(MIN_CELL_FRACTION)
}

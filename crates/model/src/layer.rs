use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    Point,
    Line,
    Polygon,
    Heatmap,
    Raster,
}

/// One toggleable map overlay, owned exclusively by its parent stratum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLayer {
    pub id: String,
    pub name: String,
    pub visible: bool,
    pub kind: LayerKind,
}

impl MapLayer {
    pub fn new(id: impl Into<String>, name: impl Into<String>, visible: bool, kind: LayerKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            visible,
            kind,
        }
    }
}

/// The layer set every new panel starts with. Only the base map is visible.
pub fn default_layers() -> Vec<MapLayer> {
    vec![
        MapLayer::new("base", "Base Map", true, LayerKind::Raster),
        MapLayer::new("population", "Population Density", false, LayerKind::Heatmap),
        MapLayer::new("roads", "Roads", false, LayerKind::Line),
        MapLayer::new("buildings", "Buildings", false, LayerKind::Polygon),
        MapLayer::new("poi", "Points of Interest", false, LayerKind::Point),
    ]
}

use serde::{Deserialize, Serialize};

/// Geographic coordinate pair in degrees, longitude first.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// Named geographic position shown in a panel's header and tracked by its map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub coordinates: LonLat,
}

impl Location {
    pub fn new(name: impl Into<String>, coordinates: LonLat) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }

    /// Default location for newly added panels.
    pub fn new_york() -> Self {
        Self::new("New York", LonLat::new(-74.006, 40.7128))
    }

    pub fn seattle() -> Self {
        Self::new("Seattle", LonLat::new(-122.3321, 47.6062))
    }
}

use model::{Location, LonLat};

/// External geocoding collaborator.
///
/// Resolution is synchronous relative to the calling transition; any
/// implementation returning a name/coordinates pair is acceptable.
pub trait Geocoder: std::fmt::Debug {
    fn resolve(&self, query: &str) -> Location;
}

/// Deterministic placeholder geocoder.
///
/// The resolved name is the query verbatim; coordinates are the default
/// location offset by up to five degrees on each axis, derived from a hash
/// of the query. Same query, same location, always.
#[derive(Debug, Default, Clone, Copy)]
pub struct HashGeocoder;

impl Geocoder for HashGeocoder {
    fn resolve(&self, query: &str) -> Location {
        let digest = blake3::hash(query.as_bytes());
        let bytes = digest.as_bytes();
        let lon_word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let lat_word = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        let base = Location::new_york().coordinates;
        Location::new(
            query,
            LonLat::new(
                base.lon + degree_offset(lon_word),
                base.lat + degree_offset(lat_word),
            ),
        )
    }
}

fn degree_offset(word: u32) -> f64 {
    // Maps the hash word into [-5.0, +5.0) with centidegree steps.
    f64::from(word % 1000) / 100.0 - 5.0
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Geocoder, HashGeocoder};
    use model::Location;

    #[test]
    fn resolution_is_deterministic() {
        let geocoder = HashGeocoder;
        assert_eq!(geocoder.resolve("Lisbon"), geocoder.resolve("Lisbon"));
    }

    #[test]
    fn name_is_the_query_and_offset_is_bounded() {
        let resolved = HashGeocoder.resolve("Lisbon");
        assert_eq!(resolved.name, "Lisbon");
        let base = Location::new_york().coordinates;
        assert!((resolved.coordinates.lon - base.lon).abs() <= 5.0);
        assert!((resolved.coordinates.lat - base.lat).abs() <= 5.0);
    }

    #[test]
    fn different_queries_resolve_differently() {
        assert_ne!(HashGeocoder.resolve("Lisbon"), HashGeocoder.resolve("Porto"));
    }
}

use std::collections::BTreeSet;

use model::{Location, LonLat, StratumTab};

use crate::item::CatalogItem;

fn item(
    id: u32,
    title: &str,
    institution: &str,
    description: &str,
    preview_count: usize,
    contents: &[StratumTab],
    tags: &[&str],
    location_name: &str,
    lon: f64,
    lat: f64,
) -> CatalogItem {
    CatalogItem {
        id,
        title: title.to_string(),
        institution: institution.to_string(),
        description: description.to_string(),
        previews: vec!["/placeholder.svg".to_string(); preview_count],
        contents: contents.iter().copied().collect(),
        tags: tags.iter().map(|t| t.to_string()).collect::<BTreeSet<_>>(),
        location: Location::new(location_name, LonLat::new(lon, lat)),
    }
}

/// The fixed item set the catalog is queried over.
pub fn builtin_items() -> Vec<CatalogItem> {
    use StratumTab::{Graphs, Index, Map};
    vec![
        item(
            1,
            "Urban Development Trends",
            "City Planning Institute",
            "Analysis of urban development patterns across major metropolitan areas, with focus \
             on sustainable growth and infrastructure planning.",
            2,
            &[Map, Graphs, Index],
            &["urban", "planning", "development", "sustainability"],
            "New York",
            -74.006,
            40.7128,
        ),
        item(
            2,
            "Climate Impact Assessment",
            "Environmental Research Center",
            "Comprehensive assessment of climate change impacts on local ecosystems, with \
             projections for future scenarios and adaptation strategies.",
            3,
            &[Map, Graphs, Index],
            &["climate", "environment", "research", "adaptation"],
            "Seattle",
            -122.3321,
            47.6062,
        ),
        item(
            3,
            "Transportation Network Analysis",
            "Urban Mobility Lab",
            "Analysis of public transportation networks and traffic patterns, identifying \
             bottlenecks and opportunities for optimization.",
            1,
            &[Map, Graphs],
            &["transportation", "mobility", "urban", "traffic"],
            "Chicago",
            -87.6298,
            41.8781,
        ),
        item(
            4,
            "Population Demographics Study",
            "Social Sciences Department",
            "Detailed demographic analysis examining population distribution, density, age \
             groups, and migration patterns across regions.",
            2,
            &[Map, Index],
            &["demographics", "population", "social", "migration"],
            "Los Angeles",
            -118.2437,
            34.0522,
        ),
        item(
            5,
            "Economic Development Indicators",
            "Economic Research Institute",
            "Economic indicators tracking across multiple dimensions including employment, \
             growth sectors, and investment patterns.",
            1,
            &[Graphs, Index],
            &["economy", "development", "finance", "indicators"],
            "Boston",
            -71.0589,
            42.3601,
        ),
        item(
            6,
            "Land Use Classification",
            "Geographic Information Systems Lab",
            "Detailed classification of land use patterns, zoning regulations, and development \
             opportunities in urban and suburban areas.",
            2,
            &[Map, Index],
            &["land use", "gis", "zoning", "classification"],
            "San Francisco",
            -122.4194,
            37.7749,
        ),
    ]
}

use std::collections::BTreeSet;

use model::{Location, StratumTab};
use serde::{Deserialize, Serialize};

/// One browsable entry in the catalog: a workspace definition some
/// institution published.
///
/// Immutable once constructed; the query engine only ever reads it. Ids
/// are assigned monotonically, so a higher id means a more recent entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub title: String,
    pub institution: String,
    pub description: String,
    /// Preview image references, presentation-layer only.
    pub previews: Vec<String>,
    /// Which sub-views a stratum built from this item enables.
    pub contents: BTreeSet<StratumTab>,
    pub tags: BTreeSet<String>,
    pub location: Location,
}

impl CatalogItem {
    pub fn has_content(&self, tab: StratumTab) -> bool {
        self.contents.contains(&tab)
    }
}

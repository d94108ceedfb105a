use std::collections::BTreeSet;

use model::StratumTab;
use serde::{Deserialize, Serialize};

use crate::item::CatalogItem;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentFilter {
    #[default]
    All,
    Only(StratumTab),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOption {
    /// Descending by id; ids are a monotone surrogate for recency.
    #[default]
    Newest,
    /// Ascending case-folded title comparison.
    Alphabetical,
    /// Title matches of the search text first, stable otherwise. A no-op
    /// for an empty search.
    Relevance,
}

/// Mutable filter state the catalog display is derived from.
///
/// Categories compose with AND; within the institution and tag categories
/// membership is OR. Empty selection sets pass everything.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CatalogQuery {
    pub search: String,
    pub content: ContentFilter,
    pub institutions: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub sort: SortOption,
}

/// Filters and sorts the item set. Pure and idempotent: re-running over
/// its own output with the same query yields the same output.
pub fn run(items: &[CatalogItem], query: &CatalogQuery) -> Vec<CatalogItem> {
    let needle = query.search.to_lowercase();
    let mut out: Vec<CatalogItem> = items
        .iter()
        .filter(|item| matches(item, query, &needle))
        .cloned()
        .collect();

    match query.sort {
        SortOption::Newest => out.sort_by(|a, b| b.id.cmp(&a.id)),
        SortOption::Alphabetical => {
            out.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
        SortOption::Relevance => {
            if !needle.is_empty() {
                // Stable sort: ties keep their prior relative order.
                out.sort_by_key(|item| !item.title.to_lowercase().contains(&needle));
            }
        }
    }
    out
}

fn matches(item: &CatalogItem, query: &CatalogQuery, needle: &str) -> bool {
    if !needle.is_empty() {
        let hit = item.title.to_lowercase().contains(needle)
            || item.institution.to_lowercase().contains(needle)
            || item.description.to_lowercase().contains(needle)
            || item.tags.iter().any(|t| t.to_lowercase().contains(needle));
        if !hit {
            return false;
        }
    }

    if let ContentFilter::Only(kind) = query.content
        && !item.has_content(kind)
    {
        return false;
    }

    if !query.institutions.is_empty() && !query.institutions.contains(&item.institution) {
        return false;
    }

    if !query.tags.is_empty() && !item.tags.iter().any(|t| query.tags.contains(t)) {
        return false;
    }

    true
}

/// Sorted unique institutions, for the filter menu.
pub fn institutions(items: &[CatalogItem]) -> Vec<String> {
    let set: BTreeSet<&String> = items.iter().map(|i| &i.institution).collect();
    set.into_iter().cloned().collect()
}

/// Sorted unique tags, for the filter menu.
pub fn tags(items: &[CatalogItem]) -> Vec<String> {
    let set: BTreeSet<&String> = items.iter().flat_map(|i| i.tags.iter()).collect();
    set.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use std::collections::BTreeSet;

    use model::{Location, LonLat, StratumTab};

    use super::{CatalogQuery, ContentFilter, SortOption, institutions, run, tags};
    use crate::builtin::builtin_items;
    use crate::item::CatalogItem;

    fn titled(id: u32, title: &str) -> CatalogItem {
        CatalogItem {
            id,
            title: title.to_string(),
            institution: String::new(),
            description: String::new(),
            previews: Vec::new(),
            contents: BTreeSet::new(),
            tags: BTreeSet::new(),
            location: Location::new("", LonLat::new(0.0, 0.0)),
        }
    }

    #[test]
    fn empty_query_with_newest_sort_yields_descending_ids() {
        let items = builtin_items();
        let out = run(&items, &CatalogQuery::default());
        let ids: Vec<u32> = out.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn search_matches_title_institution_description_and_tags() {
        let items = builtin_items();
        let search = |s: &str| {
            run(
                &items,
                &CatalogQuery {
                    search: s.to_string(),
                    ..CatalogQuery::default()
                },
            )
        };
        // Title.
        assert!(search("climate").iter().any(|i| i.id == 2));
        // Institution.
        assert!(search("mobility lab").iter().any(|i| i.id == 3));
        // Description.
        assert!(search("zoning regulations").iter().any(|i| i.id == 6));
        // Tag only.
        assert!(search("gis").iter().any(|i| i.id == 6));
        // Case-insensitive.
        assert_eq!(search("CLIMATE"), search("climate"));
    }

    #[test]
    fn content_filter_keeps_items_offering_that_view() {
        let items = builtin_items();
        let out = run(
            &items,
            &CatalogQuery {
                content: ContentFilter::Only(StratumTab::Graphs),
                ..CatalogQuery::default()
            },
        );
        assert!(out.iter().all(|i| i.has_content(StratumTab::Graphs)));
        assert!(!out.iter().any(|i| i.id == 4));
    }

    #[test]
    fn institution_and_tag_filters_compose_with_and() {
        let items = builtin_items();
        let out = run(
            &items,
            &CatalogQuery {
                institutions: ["Urban Mobility Lab".to_string()].into(),
                tags: ["urban".to_string()].into(),
                ..CatalogQuery::default()
            },
        );
        let ids: Vec<u32> = out.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn tag_filter_is_or_within_the_category() {
        let items = builtin_items();
        let out = run(
            &items,
            &CatalogQuery {
                tags: ["climate".to_string(), "gis".to_string()].into(),
                ..CatalogQuery::default()
            },
        );
        let ids: Vec<u32> = out.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![6, 2]);
    }

    #[test]
    fn alphabetical_sort_orders_titles_ascending() {
        let items = vec![titled(1, "Zebra"), titled(2, "Alpha"), titled(3, "Mango")];
        let out = run(
            &items,
            &CatalogQuery {
                sort: SortOption::Alphabetical,
                ..CatalogQuery::default()
            },
        );
        let names: Vec<&str> = out.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Mango", "Zebra"]);
    }

    #[test]
    fn relevance_sort_puts_title_matches_first() {
        let items = vec![
            titled(1, "Urban Development"),
            titled(2, "Climate Impact Assessment"),
        ];
        let out = run(
            &items,
            &CatalogQuery {
                search: "climate".to_string(),
                sort: SortOption::Relevance,
                ..CatalogQuery::default()
            },
        );
        assert_eq!(out[0].title, "Climate Impact Assessment");
    }

    #[test]
    fn relevance_with_empty_search_keeps_input_order() {
        let items = vec![titled(5, "B"), titled(1, "A"), titled(3, "C")];
        let out = run(
            &items,
            &CatalogQuery {
                sort: SortOption::Relevance,
                ..CatalogQuery::default()
            },
        );
        let ids: Vec<u32> = out.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![5, 1, 3]);
    }

    #[test]
    fn query_is_idempotent() {
        let items = builtin_items();
        for sort in [SortOption::Newest, SortOption::Alphabetical, SortOption::Relevance] {
            let query = CatalogQuery {
                search: "urban".to_string(),
                sort,
                ..CatalogQuery::default()
            };
            let once = run(&items, &query);
            let twice = run(&once, &query);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn filter_menus_list_sorted_unique_values() {
        let items = builtin_items();
        let institutions = institutions(&items);
        assert_eq!(institutions.len(), 6);
        assert!(institutions.windows(2).all(|w| w[0] < w[1]));

        let tags = tags(&items);
        assert!(tags.contains(&"urban".to_string()));
        assert!(tags.windows(2).all(|w| w[0] < w[1]));
        // "urban" appears on several items but only once here.
        assert_eq!(tags.iter().filter(|t| t.as_str() == "urban").count(), 1);
    }
}

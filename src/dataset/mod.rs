// Dataset module entry point
// Typed model of the cuisine document plus the query operations the API is
// built on. Lookup is case-insensitive, display is case-preserving.

mod error;
mod loader;
mod types;

pub use error::{DataError, DataResult};
pub use loader::load;
pub use types::{CuisineNode, Dataset, Hierarchy, Link};

impl Dataset {
    /// Top-level cuisine nodes.
    pub fn cuisines(&self) -> DataResult<&[CuisineNode]> {
        self.hierarchy
            .as_ref()
            .and_then(|h| h.children.as_deref())
            .ok_or(DataError::Structural(
                "missing 'hierarchy' or 'hierarchy.children'",
            ))
    }

    /// The full link table.
    pub fn links(&self) -> DataResult<&[Link]> {
        self.links
            .as_deref()
            .ok_or(DataError::Structural("missing 'links'"))
    }

    /// Names of the cuisines that carry one, lexicographically sorted.
    /// Nameless children are skipped; duplicate names are kept as-is.
    pub fn cuisine_names(&self) -> DataResult<Vec<String>> {
        let mut names: Vec<String> = self
            .cuisines()?
            .iter()
            .filter_map(|c| c.name.clone())
            .collect();
        names.sort();
        Ok(names)
    }

    /// First top-level node whose name matches case-insensitively.
    pub fn find_cuisine(&self, name: &str) -> DataResult<Option<&CuisineNode>> {
        let wanted = name.to_lowercase();
        Ok(self
            .cuisines()?
            .iter()
            .find(|c| c.name.as_ref().is_some_and(|n| n.to_lowercase() == wanted)))
    }

    /// Links tagged with the given cuisine, original relative order
    /// preserved. Links without a 'cuisine' field never match.
    pub fn links_for(&self, name: &str) -> DataResult<Vec<&Link>> {
        let wanted = name.to_lowercase();
        Ok(self
            .links()?
            .iter()
            .filter(|l| {
                l.cuisine
                    .as_ref()
                    .is_some_and(|c| c.to_lowercase() == wanted)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset(value: serde_json::Value) -> Dataset {
        serde_json::from_value(value).unwrap()
    }

    fn sample() -> Dataset {
        dataset(json!({
            "hierarchy": {
                "name": "cuisines",
                "children": [
                    {"name": "Thai", "children": [{"name": "herbs"}]},
                    {"name": "Mexican", "children": []},
                    {"children": [{"name": "orphan group"}]},
                    {"name": "Italian"}
                ]
            },
            "links": [
                {"cuisine": "Mexican", "source": "lime", "target": "chili"},
                {"cuisine": "mexican", "source": "corn", "target": "bean"},
                {"cuisine": "Italian", "source": "basil", "target": "tomato"},
                {"source": "untagged", "target": "edge"}
            ]
        }))
    }

    #[test]
    fn test_cuisine_names_sorted_and_skips_nameless() {
        let names = sample().cuisine_names().unwrap();
        assert_eq!(names, vec!["Italian", "Mexican", "Thai"]);
    }

    #[test]
    fn test_cuisine_names_keeps_duplicates() {
        let data = dataset(json!({
            "hierarchy": {"children": [{"name": "Thai"}, {"name": "Thai"}]},
            "links": []
        }));
        assert_eq!(data.cuisine_names().unwrap(), vec!["Thai", "Thai"]);
    }

    #[test]
    fn test_find_cuisine_is_case_insensitive() {
        let data = sample();
        let node = data.find_cuisine("tHaI").unwrap().unwrap();
        assert_eq!(node.name.as_deref(), Some("Thai"));
        assert!(data.find_cuisine("French").unwrap().is_none());
    }

    #[test]
    fn test_find_cuisine_first_match_wins() {
        let data = dataset(json!({
            "hierarchy": {"children": [
                {"name": "Thai", "children": [{"name": "first"}]},
                {"name": "THAI", "children": [{"name": "second"}]}
            ]},
            "links": []
        }));
        let node = data.find_cuisine("thai").unwrap().unwrap();
        assert_eq!(node.name.as_deref(), Some("Thai"));
    }

    #[test]
    fn test_links_for_filters_case_insensitively_in_order() {
        let data = sample();
        let links = data.links_for("Mexican").unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].extra.get("source"), Some(&json!("lime")));
        assert_eq!(links[1].extra.get("source"), Some(&json!("corn")));
    }

    #[test]
    fn test_links_for_excludes_untagged_links() {
        let data = sample();
        for name in ["Thai", "Mexican", "Italian"] {
            let links = data.links_for(name).unwrap();
            assert!(links.iter().all(|l| l.cuisine.is_some()));
        }
    }

    #[test]
    fn test_missing_hierarchy_is_structural() {
        let data = dataset(json!({"links": []}));
        match data.cuisines() {
            Err(DataError::Structural(msg)) => assert!(msg.contains("hierarchy")),
            other => panic!("expected Structural, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_children_is_structural() {
        let data = dataset(json!({"hierarchy": {"name": "cuisines"}, "links": []}));
        assert!(matches!(data.cuisines(), Err(DataError::Structural(_))));
    }

    #[test]
    fn test_missing_links_is_structural() {
        let data = dataset(json!({"hierarchy": {"children": []}}));
        match data.links() {
            Err(DataError::Structural(msg)) => assert!(msg.contains("links")),
            other => panic!("expected Structural, got {other:?}"),
        }
    }
}

// Dataset types module
// Typed view of the cuisine document. Known fields are modeled explicitly;
// everything else is kept in a flattened bag so responses round-trip fields
// the server does not interpret.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Root JSON document: a category hierarchy plus the links between items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy: Option<Hierarchy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The hierarchy root. Cuisines are its direct children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hierarchy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<CuisineNode>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A node in the hierarchy. At the top level a node is one cuisine; deeper
/// levels are its category sub-tree. An absent `children` stays absent on
/// output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuisineNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<CuisineNode>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An edge record tagged with the cuisine it belongs to. Source/target and
/// any other attributes ride along in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_round_trips_unknown_fields() {
        let raw = json!({
            "name": "Thai",
            "children": [],
            "color": "#ff7f0e",
            "weight": 3
        });
        let node: CuisineNode = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(node.name.as_deref(), Some("Thai"));
        assert_eq!(node.extra.get("color"), Some(&json!("#ff7f0e")));

        let back = serde_json::to_value(&node).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_absent_children_stays_absent() {
        let node: CuisineNode = serde_json::from_value(json!({"name": "Thai"})).unwrap();
        assert!(node.children.is_none());

        let back = serde_json::to_value(&node).unwrap();
        assert_eq!(back, json!({"name": "Thai"}));
    }

    #[test]
    fn test_link_keeps_endpoints() {
        let raw = json!({"cuisine": "Thai", "source": "A", "target": "B", "value": 2});
        let link: Link = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(link.cuisine.as_deref(), Some("Thai"));
        assert_eq!(serde_json::to_value(&link).unwrap(), raw);
    }

    #[test]
    fn test_dataset_with_missing_sections_still_parses() {
        let data: Dataset = serde_json::from_value(json!({"links": []})).unwrap();
        assert!(data.hierarchy.is_none());
        assert_eq!(data.links.as_deref(), Some(&[][..]));
    }
}

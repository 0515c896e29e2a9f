//! Wire models for the graph API responses.
//!
//! Pure data shapes, no behavior beyond small accessors. Unknown response
//! fields (e.g. the raw `end_node` object on relationship rows) are ignored
//! by deserialization.

use serde::{Deserialize, Serialize};

/// A node as returned by the bulk listing (`GET /api/nodes`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSummary {
    /// Node identity.
    pub id: i64,
    /// Category, used only for color selection.
    pub label: String,
    /// Display name, when the node has one.
    #[serde(default)]
    pub name: Option<String>,
}

/// A directed relationship row (`GET /api/relationships`).
///
/// Non-unique: multiple relationships may share an endpoint pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipRow {
    pub start_node_id: i64,
    pub relationship_type: String,
    pub end_node_id: i64,
}

/// Full node record from the detail endpoint (`GET /api/nodes/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDetail {
    pub id: i64,
    pub label: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub screen_name: Option<String>,
    #[serde(default)]
    pub sex: Option<i64>,
    #[serde(default)]
    pub city: Option<String>,
}

impl NodeDetail {
    /// Panel title: the node name, or `Node {id}` when absent.
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Node {}", self.id))
    }

    /// Non-null scalar attributes, excluding `id`, `label`, and `name`
    /// (identity, color key, and panel title respectively).
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::new();
        if let Some(screen_name) = &self.screen_name {
            attrs.push(("screen_name", screen_name.clone()));
        }
        if let Some(sex) = self.sex {
            attrs.push(("sex", sex.to_string()));
        }
        if let Some(city) = &self.city {
            attrs.push(("city", city.clone()));
        }
        attrs
    }
}

/// One connection of a node as reported by the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRelationship {
    #[serde(rename = "type")]
    pub rel_type: String,
    pub end_node_id: i64,
}

/// Detail response: the node plus its outgoing connections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeWithRelationships {
    pub node: NodeDetail,
    pub relationships: Vec<NodeRelationship>,
}

/// The startup snapshot handed to the visualizer.
#[derive(Debug, Clone, Default)]
pub struct GraphData {
    pub nodes: Vec<NodeSummary>,
    pub relationships: Vec<RelationshipRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_row_ignores_end_node_object() {
        let json = r#"{
            "start_node_id": 1,
            "relationship_type": "FRIEND",
            "end_node_id": 2,
            "end_node": {"identity": 2, "labels": ["User"]}
        }"#;
        let row: RelationshipRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.start_node_id, 1);
        assert_eq!(row.relationship_type, "FRIEND");
        assert_eq!(row.end_node_id, 2);
    }

    #[test]
    fn test_node_summary_without_name() {
        let node: NodeSummary = serde_json::from_str(r#"{"id": 7, "label": "Group"}"#).unwrap();
        assert_eq!(node.name, None);
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let node: NodeDetail = serde_json::from_str(r#"{"id": 42, "label": "User"}"#).unwrap();
        assert_eq!(node.display_name(), "Node 42");
    }

    #[test]
    fn test_attributes_exclude_id_label_and_name() {
        let node = NodeDetail {
            id: 1,
            label: "User".to_string(),
            name: Some("Alice".to_string()),
            screen_name: None,
            sex: None,
            city: Some("Rome".to_string()),
        };
        assert_eq!(node.attributes(), vec![("city", "Rome".to_string())]);
    }

    #[test]
    fn test_attributes_skip_nulls() {
        let json = r#"{"id": 1, "label": "User", "name": null, "screen_name": "al1ce", "sex": 1, "city": null}"#;
        let node: NodeDetail = serde_json::from_str(json).unwrap();
        assert_eq!(
            node.attributes(),
            vec![
                ("screen_name", "al1ce".to_string()),
                ("sex", "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_detail_response_shape() {
        let json = r#"{
            "node": {"id": 1, "label": "User", "name": "Alice"},
            "relationships": [{"type": "FRIEND", "end_node_id": 2}]
        }"#;
        let detail: NodeWithRelationships = serde_json::from_str(json).unwrap();
        assert_eq!(detail.node.id, 1);
        assert_eq!(detail.relationships.len(), 1);
        assert_eq!(detail.relationships[0].rel_type, "FRIEND");
    }
}

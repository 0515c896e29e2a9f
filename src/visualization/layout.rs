//! Deterministic sphere-surface graph layout.
//!
//! Nodes are distributed on a sphere with a golden-angle (Fibonacci) spiral,
//! then the whole set is translated so its centroid sits at the origin.
//! Edges reference nodes by index, so edge geometry always spans the
//! centered positions.

use bevy::color::Color;
use bevy::math::Vec3;
use std::collections::HashMap;

use super::constants::node_color_for_label;
use crate::models::GraphData;

/// Radius of the layout sphere.
const LAYOUT_RADIUS: f32 = 50.0;

/// A positioned node with the metadata read back during interaction.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    /// Node identity.
    pub id: i64,
    /// Category label.
    pub label: String,
    /// Display name, when present in the bulk listing.
    pub name: Option<String>,
    /// Position after centering.
    pub position: Vec3,
    /// Base color from the label palette.
    pub base_color: Color,
}

/// An edge between two resolved nodes.
#[derive(Debug, Clone)]
pub struct LayoutEdge {
    /// Source node index.
    pub from_idx: usize,
    /// Target node index.
    pub to_idx: usize,
    /// Source node id.
    pub start_id: i64,
    /// Target node id.
    pub end_id: i64,
    /// Relationship type.
    pub rel_type: String,
}

/// Graph layout with positioned nodes and resolved edges.
#[derive(Debug, Clone, Default)]
pub struct GraphLayout {
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
}

impl GraphLayout {
    /// Build the layout from a graph snapshot.
    ///
    /// Placement is order-dependent: the same input node order always yields
    /// the same layout. Relationships referencing ids absent from the node
    /// set are skipped, not an error.
    pub fn from_graph(graph: &GraphData) -> Self {
        let count = graph.nodes.len();

        let mut nodes: Vec<LayoutNode> = graph
            .nodes
            .iter()
            .enumerate()
            .map(|(i, node)| LayoutNode {
                id: node.id,
                label: node.label.clone(),
                name: node.name.clone(),
                position: sphere_position(i, count),
                base_color: node_color_for_label(&node.label),
            })
            .collect();

        // Recenter before any edge geometry exists, so edges and nodes agree.
        recenter(&mut nodes);

        let id_to_idx: HashMap<i64, usize> =
            nodes.iter().enumerate().map(|(i, n)| (n.id, i)).collect();

        let mut edges = Vec::new();
        for rel in &graph.relationships {
            match (
                id_to_idx.get(&rel.start_node_id),
                id_to_idx.get(&rel.end_node_id),
            ) {
                (Some(&from_idx), Some(&to_idx)) => {
                    edges.push(LayoutEdge {
                        from_idx,
                        to_idx,
                        start_id: rel.start_node_id,
                        end_id: rel.end_node_id,
                        rel_type: rel.relationship_type.clone(),
                    });
                }
                _ => {
                    tracing::debug!(
                        "Skipping relationship {} -> {}: unknown endpoint",
                        rel.start_node_id,
                        rel.end_node_id
                    );
                }
            }
        }

        Self { nodes, edges }
    }
}

/// Position node `i` of `count` on the layout sphere.
///
/// Golden-angle spiral: `y` runs from 1 to -1, each index advances the
/// azimuth by the golden angle. A single-node layout sits at the pole
/// (`y = 1`) rather than dividing by zero.
pub fn sphere_position(i: usize, count: usize) -> Vec3 {
    let golden_angle = std::f32::consts::PI * (3.0 - 5.0_f32.sqrt());

    let y = if count <= 1 {
        1.0
    } else {
        1.0 - (i as f32 / (count as f32 - 1.0)) * 2.0
    };
    // Clamp against float drift before the square root at the poles
    let radius_at_y = (1.0 - y * y).max(0.0).sqrt();
    let theta = golden_angle * i as f32;

    Vec3::new(radius_at_y * theta.cos(), y, radius_at_y * theta.sin()) * LAYOUT_RADIUS
}

/// Translate all nodes so their centroid sits at the origin.
fn recenter(nodes: &mut [LayoutNode]) {
    if nodes.is_empty() {
        return;
    }
    let centroid: Vec3 =
        nodes.iter().map(|n| n.position).sum::<Vec3>() / nodes.len() as f32;
    for node in nodes {
        node.position -= centroid;
    }
}

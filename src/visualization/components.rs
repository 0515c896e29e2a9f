//! ECS components for graph visualization.

use bevy::prelude::*;

/// Color capability for a visual element.
///
/// Hides how many surfaces back the element: callers set and read one color
/// through the material handle, and `restore` puts the recorded base color
/// back exactly (never recomputed).
#[derive(Debug, Clone)]
pub struct Paint {
    material: Handle<StandardMaterial>,
    base_color: Color,
}

impl Paint {
    pub fn new(material: Handle<StandardMaterial>, base_color: Color) -> Self {
        Self {
            material,
            base_color,
        }
    }

    /// The original color recorded at creation.
    pub fn base_color(&self) -> Color {
        self.base_color
    }

    pub fn set_color(&self, materials: &mut Assets<StandardMaterial>, color: Color) {
        if let Some(material) = materials.get_mut(&self.material) {
            material.base_color = color;
        }
    }

    pub fn current_color(&self, materials: &Assets<StandardMaterial>) -> Color {
        materials
            .get(&self.material)
            .map(|m| m.base_color)
            .unwrap_or(self.base_color)
    }

    /// Reset to the base color.
    pub fn restore(&self, materials: &mut Assets<StandardMaterial>) {
        self.set_color(materials, self.base_color);
    }
}

/// Sphere mesh representing one graph node.
#[derive(Component)]
pub struct NodeSphere {
    /// Node identity.
    pub id: i64,
    /// Category label.
    pub label: String,
    /// Color capability with the recorded base color.
    pub paint: Paint,
}

/// Line (thin cylinder) representing one relationship.
///
/// The endpoint ids enable membership tests during highlighting without
/// re-deriving geometry.
#[derive(Component)]
pub struct RelationshipLine {
    pub start_id: i64,
    pub end_id: i64,
    pub rel_type: String,
    pub paint: Paint,
}

impl RelationshipLine {
    /// Whether this line touches the given node.
    pub fn touches(&self, node_id: i64) -> bool {
        self.start_id == node_id || self.end_id == node_id
    }
}

/// Marker component for the info panel container.
#[derive(Component)]
pub struct InfoPanel;

/// Marker component for the info panel title text.
#[derive(Component)]
pub struct InfoPanelTitle;

/// Marker component for the info panel body text.
#[derive(Component)]
pub struct InfoPanelBody;

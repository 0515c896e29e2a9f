//! ECS resources for graph visualization state.
//!
//! All session state lives here rather than in module-level globals: the
//! plugin builds these on startup and Bevy tears them down with the app.

use bevy::prelude::*;
use std::collections::HashMap;
use tokio::sync::mpsc;

use super::constants::CAMERA_DISTANCE;
use super::layout::GraphLayout;
use crate::api::ApiClient;
use crate::error::AppError;
use crate::models::NodeWithRelationships;

// =============================================================================
// Camera State
// =============================================================================

/// Camera orbit state for 3D navigation.
#[derive(Resource)]
pub struct CameraOrbit {
    /// Horizontal rotation angle (radians).
    pub yaw: f32,
    /// Vertical rotation angle (radians).
    pub pitch: f32,
    /// Distance from target.
    pub distance: f32,
    /// Point the camera orbits around (the layout centroid, i.e. the origin).
    pub target: Vec3,
}

impl Default for CameraOrbit {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: CAMERA_DISTANCE,
            target: Vec3::ZERO,
        }
    }
}

// =============================================================================
// Selection State
// =============================================================================

/// The currently selected node.
pub struct SelectedNode {
    pub entity: Entity,
    pub node_id: i64,
}

/// At most one selected node, plus the edges currently highlighted for it.
///
/// Invariant: `highlighted` is exactly the set of line entities touching the
/// selected node's id, or empty when nothing is selected.
#[derive(Resource, Default)]
pub struct SelectionState {
    pub selected: Option<SelectedNode>,
    pub highlighted: Vec<Entity>,
}

// =============================================================================
// Graph Data
// =============================================================================

/// The layout consumed by scene setup.
#[derive(Resource)]
pub struct GraphLayoutRes(pub GraphLayout);

/// Bulk node-name map built at load time.
///
/// Connection targets in the info panel resolve names here, never via a
/// fresh lookup.
#[derive(Resource)]
pub struct NodeNames(pub HashMap<i64, String>);

// =============================================================================
// Detail Fetching
// =============================================================================

/// API client plus the runtime handle detail fetches are spawned on.
#[derive(Resource)]
pub struct ApiHandle {
    pub client: ApiClient,
    pub runtime: tokio::runtime::Handle,
}

/// A resolved detail fetch, tagged with the generation it was issued under.
pub struct DetailResponse {
    pub generation: u64,
    pub node_id: i64,
    pub result: Result<NodeWithRelationships, AppError>,
}

/// Channel carrying detail responses back onto the render thread, plus the
/// generation counter used to discard out-of-order responses.
#[derive(Resource)]
pub struct DetailChannel {
    pub sender: mpsc::UnboundedSender<DetailResponse>,
    pub receiver: mpsc::UnboundedReceiver<DetailResponse>,
    generation: u64,
}

impl DetailChannel {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            receiver,
            generation: 0,
        }
    }

    /// Issue a new request generation. Only responses carrying the latest
    /// generation are applied to the panel.
    pub fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// The most recently issued generation.
    pub fn current_generation(&self) -> u64 {
        self.generation
    }
}

impl Default for DetailChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generations_are_monotonic() {
        let mut channel = DetailChannel::new();
        let first = channel.next_generation();
        let second = channel.next_generation();
        assert!(second > first);
        assert_eq!(channel.current_generation(), second);
    }
}

//! Visualization plugin for Bevy.

use std::collections::HashMap;

use bevy::prelude::*;

use super::layout::GraphLayout;
use super::resources::{
    ApiHandle, CameraOrbit, DetailChannel, GraphLayoutRes, NodeNames, SelectionState,
};
use super::setup::setup_scene;
use super::systems;
use crate::api::ApiClient;

/// Plugin that adds the 3D graph visualization.
pub struct VisualizationPlugin {
    /// Pre-computed layout.
    pub layout: GraphLayout,
    /// Bulk node-name map for info panel lookups.
    pub names: HashMap<i64, String>,
    /// Graph API client for node-detail fetches.
    pub client: ApiClient,
    /// Runtime the detail fetches run on.
    pub runtime: tokio::runtime::Handle,
}

impl VisualizationPlugin {
    pub fn new(
        layout: GraphLayout,
        names: HashMap<i64, String>,
        client: ApiClient,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        Self {
            layout,
            names,
            client,
            runtime,
        }
    }
}

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraOrbit>()
            .insert_resource(SelectionState::default())
            .insert_resource(GraphLayoutRes(self.layout.clone()))
            .insert_resource(NodeNames(self.names.clone()))
            .insert_resource(ApiHandle {
                client: self.client.clone(),
                runtime: self.runtime.clone(),
            })
            .insert_resource(DetailChannel::new())
            .add_systems(Startup, setup_scene)
            .add_systems(
                Update,
                (
                    systems::camera_orbit_system,
                    systems::select_node_system,
                    systems::apply_detail_system,
                ),
            );
    }
}

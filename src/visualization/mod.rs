//! 3D Graph Visualization Module
//!
//! Renders the graph snapshot as spheres on a golden-angle spiral layout
//! using Bevy, with click selection, edge highlighting, and an info panel.
//!
//! ## Module Structure
//!
//! - `layout` - Deterministic sphere-surface placement
//! - `components` - ECS components for nodes, edges, panel markers
//! - `resources` - ECS resources for state (camera, selection, detail channel)
//! - `systems` - ECS systems (camera, interaction, UI)
//! - `setup` - Scene initialization
//! - `plugin` - Bevy plugin definition
//! - `constants` - Colors, sizes, and other constants

mod components;
mod constants;
mod layout;
mod plugin;
mod resources;
mod setup;
mod systems;

pub use layout::GraphLayout;
pub use plugin::VisualizationPlugin;

use std::collections::HashMap;

use bevy::prelude::*;

use crate::api::ApiClient;
use crate::models::GraphData;

/// Run the visualizer over a graph snapshot.
///
/// This spawns a Bevy window with the 3D graph visualization and blocks
/// until the window is closed. `runtime` is used to dispatch node-detail
/// fetches without stalling the render loop.
pub fn run_visualizer(graph: GraphData, client: ApiClient, runtime: tokio::runtime::Handle) {
    let layout = GraphLayout::from_graph(&graph);

    // Bulk name map for resolving connection targets in the info panel.
    let names: HashMap<i64, String> = graph
        .nodes
        .iter()
        .filter_map(|n| n.name.clone().map(|name| (n.id, name)))
        .collect();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Neoviz Graph Visualizer".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.1, 0.1, 0.12)))
        .add_plugins(VisualizationPlugin::new(layout, names, client, runtime))
        .run();
}

//! Scene setup for the graph visualization.

use bevy::prelude::*;
use bevy::ui::PositionType;

use crate::visualization::components::{
    InfoPanel, InfoPanelBody, InfoPanelTitle, NodeSphere, Paint, RelationshipLine,
};
use crate::visualization::constants::{COLOR_EDGE_DEFAULT, EDGE_RADIUS, NODE_RADIUS};
use crate::visualization::resources::{CameraOrbit, GraphLayoutRes};
use crate::visualization::systems::camera::calculate_camera_position;

/// Setup the scene with camera, lighting, graph geometry, and the info panel.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    layout: Res<GraphLayoutRes>,
    orbit: Res<CameraOrbit>,
) {
    // Camera, aimed at the recentered layout's origin
    let camera_pos = calculate_camera_position(&orbit);
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(camera_pos).looking_at(orbit.target, Vec3::Y),
    ));

    // Directional light
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(1.0, 1.0, 1.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
    });

    // One shared sphere mesh; one material per node so colors toggle
    // independently during selection.
    let sphere_mesh = meshes.add(Sphere::new(NODE_RADIUS).mesh().ico(4).unwrap());

    for node in &layout.0.nodes {
        let material = materials.add(StandardMaterial {
            base_color: node.base_color,
            ..default()
        });

        commands.spawn((
            Mesh3d(sphere_mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(node.position),
            NodeSphere {
                id: node.id,
                label: node.label.clone(),
                paint: Paint::new(material, node.base_color),
            },
        ));
    }

    // Relationship lines as thin cylinders between the centered endpoints.
    // One material per line so highlighting recolors only the incident set.
    let edge_mesh = meshes.add(Cylinder::new(EDGE_RADIUS, 1.0));

    for edge in &layout.0.edges {
        let from_pos = layout.0.nodes[edge.from_idx].position;
        let to_pos = layout.0.nodes[edge.to_idx].position;

        let midpoint = (from_pos + to_pos) / 2.0;
        let direction = to_pos - from_pos;
        let length = direction.length();

        if length > 0.01 {
            let rotation = Quat::from_rotation_arc(Vec3::Y, direction.normalize());
            let material = materials.add(StandardMaterial {
                base_color: COLOR_EDGE_DEFAULT,
                unlit: true,
                ..default()
            });

            commands.spawn((
                Mesh3d(edge_mesh.clone()),
                MeshMaterial3d(material.clone()),
                Transform::from_translation(midpoint)
                    .with_rotation(rotation)
                    .with_scale(Vec3::new(1.0, length, 1.0)),
                RelationshipLine {
                    start_id: edge.start_id,
                    end_id: edge.end_id,
                    rel_type: edge.rel_type.clone(),
                    paint: Paint::new(material, COLOR_EDGE_DEFAULT),
                },
            ));
        }
    }

    // Info panel on the right, hidden until a selection lands
    commands
        .spawn((
            bevy::ui::Node {
                position_type: PositionType::Absolute,
                right: Val::Px(10.0),
                top: Val::Px(10.0),
                width: Val::Px(280.0),
                min_height: Val::Px(100.0),
                padding: UiRect::all(Val::Px(12.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.15, 0.9)),
            BorderRadius::all(Val::Px(8.0)),
            Visibility::Hidden,
            InfoPanel,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Node Info"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                InfoPanelTitle,
            ));
            parent.spawn((
                Text::new("Click a node to see details"),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.7)),
                InfoPanelBody,
            ));
        });
}

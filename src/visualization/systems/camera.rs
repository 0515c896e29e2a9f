//! Camera orbit and zoom systems.

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

use crate::visualization::resources::CameraOrbit;

/// Calculate camera position from orbit parameters.
pub fn calculate_camera_position(orbit: &CameraOrbit) -> Vec3 {
    let x = orbit.distance * orbit.pitch.cos() * orbit.yaw.sin();
    let y = orbit.distance * orbit.pitch.sin();
    let z = orbit.distance * orbit.pitch.cos() * orbit.yaw.cos();
    orbit.target + Vec3::new(x, y, z)
}

/// Camera orbit control system.
///
/// Controls:
/// - Right-click drag: Orbit around the layout center
/// - Scroll wheel: Zoom
/// - R: Reset view
///
/// Left-click stays free for node selection.
pub fn camera_orbit_system(
    mut orbit: ResMut<CameraOrbit>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll: EventReader<MouseWheel>,
) {
    if mouse_button.pressed(MouseButton::Right) {
        for ev in mouse_motion.read() {
            orbit.yaw -= ev.delta.x * 0.01;
            orbit.pitch += ev.delta.y * 0.01;
            orbit.pitch = orbit.pitch.clamp(-1.5, 1.5);
        }
    }

    for ev in scroll.read() {
        orbit.distance -= ev.y * 2.0;
        orbit.distance = orbit.distance.clamp(10.0, 400.0);
    }

    if keyboard.just_pressed(KeyCode::KeyR) {
        *orbit = CameraOrbit::default();
    }

    if let Ok(mut transform) = camera_query.get_single_mut() {
        let pos = calculate_camera_position(&orbit);
        *transform = Transform::from_translation(pos).looking_at(orbit.target, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualization::constants::CAMERA_DISTANCE;

    #[test]
    fn test_default_orbit_sits_on_z_axis() {
        let pos = calculate_camera_position(&CameraOrbit::default());
        assert!((pos - Vec3::new(0.0, 0.0, CAMERA_DISTANCE)).length() < 1e-3);
    }

    #[test]
    fn test_orbit_keeps_distance_from_target() {
        let orbit = CameraOrbit {
            yaw: 1.2,
            pitch: -0.7,
            distance: 42.0,
            target: Vec3::new(1.0, 2.0, 3.0),
        };
        let pos = calculate_camera_position(&orbit);
        assert!(((pos - orbit.target).length() - 42.0).abs() < 1e-3);
    }
}

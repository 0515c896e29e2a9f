//! ECS systems for graph visualization.

pub mod camera;
pub mod interaction;
pub mod ui;

pub use camera::camera_orbit_system;
pub use interaction::select_node_system;
pub use ui::apply_detail_system;

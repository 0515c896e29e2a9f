//! Visual constants for the graph visualization.

use bevy::prelude::*;

// =============================================================================
// Node Colors by Label
// =============================================================================

/// User node color (DodgerBlue).
pub const COLOR_USER: Color = Color::srgb(0.118, 0.565, 1.0); // #1E90FF
/// Group node color (LimeGreen).
pub const COLOR_GROUP: Color = Color::srgb(0.196, 0.804, 0.196); // #32CD32
/// Label node color (Gold).
pub const COLOR_LABEL: Color = Color::srgb(1.0, 0.843, 0.0); // #FFD700
/// AnotherLabel node color (HotPink).
pub const COLOR_ANOTHER_LABEL: Color = Color::srgb(1.0, 0.412, 0.706); // #FF69B4
/// Default color for unmapped labels.
pub const COLOR_NODE_DEFAULT: Color = Color::WHITE;

// =============================================================================
// Edge Colors
// =============================================================================

/// Neutral edge color.
pub const COLOR_EDGE_DEFAULT: Color = Color::srgb(0.533, 0.533, 0.533); // #888888
/// Highlight color for edges touching the selected node.
pub const COLOR_EDGE_HIGHLIGHT: Color = Color::srgb(1.0, 0.0, 0.0);

// =============================================================================
// Sizing
// =============================================================================

/// Visual radius of a node sphere.
pub const NODE_RADIUS: f32 = 1.0;
/// Radius of the cylinders standing in for relationship lines.
pub const EDGE_RADIUS: f32 = 0.12;
/// Initial camera distance from the layout center.
pub const CAMERA_DISTANCE: f32 = 100.0;
/// Blend factor toward white for the selected node's color.
pub const HIGHLIGHT_BLEND: f32 = 0.3;

// =============================================================================
// Helpers
// =============================================================================

/// Get the base color for a node label.
pub fn node_color_for_label(label: &str) -> Color {
    match label {
        "User" => COLOR_USER,
        "Group" => COLOR_GROUP,
        "Label" => COLOR_LABEL,
        "AnotherLabel" => COLOR_ANOTHER_LABEL,
        _ => COLOR_NODE_DEFAULT,
    }
}

/// Linear blend of a color toward white in sRGB space.
pub fn lighten(color: Color, amount: f32) -> Color {
    let c = color.to_srgba();
    Color::srgb(
        c.red + (1.0 - c.red) * amount,
        c.green + (1.0 - c.green) * amount,
        c.blue + (1.0 - c.blue) * amount,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_label_gets_default_color() {
        assert_eq!(node_color_for_label("Person"), COLOR_NODE_DEFAULT);
        assert_eq!(node_color_for_label(""), COLOR_NODE_DEFAULT);
    }

    #[test]
    fn test_known_labels_have_distinct_colors() {
        let colors = [
            node_color_for_label("User"),
            node_color_for_label("Group"),
            node_color_for_label("Label"),
            node_color_for_label("AnotherLabel"),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    fn assert_color_close(a: Color, b: Color) {
        let (a, b) = (a.to_srgba(), b.to_srgba());
        assert!(
            (a.red - b.red).abs() < 1e-6
                && (a.green - b.green).abs() < 1e-6
                && (a.blue - b.blue).abs() < 1e-6,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_lighten_blends_toward_white() {
        let lightened = lighten(Color::srgb(0.2, 0.4, 0.6), 0.5);
        assert_color_close(lightened, Color::srgb(0.6, 0.7, 0.8));
    }

    #[test]
    fn test_lighten_full_blend_is_white() {
        assert_color_close(lighten(COLOR_USER, 1.0), Color::srgb(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_lighten_zero_blend_is_identity() {
        assert_color_close(lighten(COLOR_GROUP, 0.0), COLOR_GROUP);
    }
}

//! Click selection and edge highlighting.
//!
//! Selection is a state machine with states `{no selection, node selected}`
//! driven solely by click outcomes. Color changes apply on the same frame;
//! the previous node is always restored before a new highlight lands.

use bevy::prelude::*;

use crate::visualization::components::{InfoPanel, NodeSphere, RelationshipLine};
use crate::visualization::constants::{
    lighten, COLOR_EDGE_HIGHLIGHT, HIGHLIGHT_BLEND, NODE_RADIUS,
};
use crate::visualization::resources::{
    ApiHandle, DetailChannel, DetailResponse, SelectedNode, SelectionState,
};

/// Pick radius, slightly larger than the visual sphere for easier clicking.
const PICK_RADIUS: f32 = NODE_RADIUS * 1.5;

/// Transition of the selection state machine for one click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Re-click on the already-selected node: no state change.
    Unchanged,
    /// A node was hit that differs from the current selection.
    Selected {
        previous: Option<i64>,
        node_id: i64,
    },
    /// Empty click with a selection to clear.
    Cleared { previous: i64 },
    /// Empty click with nothing selected.
    Ignored,
}

/// Classify a click given the current selection and the hit node (if any).
pub fn click_transition(current: Option<i64>, hit: Option<i64>) -> ClickOutcome {
    match (current, hit) {
        (Some(cur), Some(hit)) if cur == hit => ClickOutcome::Unchanged,
        (current, Some(hit)) => ClickOutcome::Selected {
            previous: current,
            node_id: hit,
        },
        (Some(cur), None) => ClickOutcome::Cleared { previous: cur },
        (None, None) => ClickOutcome::Ignored,
    }
}

/// Find the nearest sphere intersected by the ray.
///
/// Returns the index of the candidate with the smallest ray parameter whose
/// perpendicular distance to the ray is within `hit_radius`. Candidates
/// behind the ray origin never match.
pub fn pick_node(
    ray_origin: Vec3,
    ray_dir: Vec3,
    positions: &[Vec3],
    hit_radius: f32,
) -> Option<usize> {
    let mut closest: Option<(usize, f32)> = None;

    for (idx, &pos) in positions.iter().enumerate() {
        let t = (pos - ray_origin).dot(ray_dir);
        if t <= 0.0 {
            continue;
        }
        let nearest_point = ray_origin + ray_dir * t;
        if (nearest_point - pos).length() > hit_radius {
            continue;
        }
        if closest.map_or(true, |(_, best)| t < best) {
            closest = Some((idx, t));
        }
    }

    closest.map(|(idx, _)| idx)
}

/// Handle left clicks: select the nearest hit node, highlight its edges,
/// and request its detail; clear everything on empty clicks.
#[allow(clippy::too_many_arguments)]
pub fn select_node_system(
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    node_query: Query<(Entity, &Transform, &NodeSphere)>,
    edge_query: Query<(Entity, &RelationshipLine)>,
    mut selection: ResMut<SelectionState>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut detail: ResMut<DetailChannel>,
    api: Res<ApiHandle>,
    mut panel_query: Query<&mut Visibility, With<InfoPanel>>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor_pos) else {
        return;
    };

    let candidates: Vec<(Entity, i64, Vec3)> = node_query
        .iter()
        .map(|(entity, transform, node)| (entity, node.id, transform.translation))
        .collect();
    let positions: Vec<Vec3> = candidates.iter().map(|(_, _, pos)| *pos).collect();

    let hit = pick_node(ray.origin, *ray.direction, &positions, PICK_RADIUS)
        .map(|idx| (candidates[idx].0, candidates[idx].1));

    let current = selection.selected.as_ref().map(|s| s.node_id);
    match click_transition(current, hit.map(|(_, id)| id)) {
        ClickOutcome::Unchanged => {}
        ClickOutcome::Ignored => {
            hide_panel(&mut panel_query);
        }
        ClickOutcome::Cleared { .. } => {
            hide_panel(&mut panel_query);
            clear_selection(&mut selection, &node_query, &edge_query, &mut materials);
        }
        ClickOutcome::Selected { .. } => {
            // Restore the previous node and its edges first, so nothing is
            // ever left lightened while deselected.
            clear_selection(&mut selection, &node_query, &edge_query, &mut materials);

            if let Some((entity, node_id)) = hit {
                if let Ok((_, _, node)) = node_query.get(entity) {
                    let highlight = lighten(node.paint.base_color(), HIGHLIGHT_BLEND);
                    node.paint.set_color(&mut materials, highlight);
                }
                for (edge_entity, line) in edge_query.iter() {
                    if line.touches(node_id) {
                        line.paint.set_color(&mut materials, COLOR_EDGE_HIGHLIGHT);
                        selection.highlighted.push(edge_entity);
                    }
                }
                selection.selected = Some(SelectedNode { entity, node_id });

                request_detail(&mut detail, &api, node_id);
            }
        }
    }
}

/// Restore the selected node's base color and reset all highlighted edges.
fn clear_selection(
    selection: &mut SelectionState,
    node_query: &Query<(Entity, &Transform, &NodeSphere)>,
    edge_query: &Query<(Entity, &RelationshipLine)>,
    materials: &mut Assets<StandardMaterial>,
) {
    if let Some(prev) = selection.selected.take() {
        if let Ok((_, _, node)) = node_query.get(prev.entity) {
            node.paint.restore(materials);
        }
    }
    for entity in selection.highlighted.drain(..) {
        if let Ok((_, line)) = edge_query.get(entity) {
            line.paint.restore(materials);
        }
    }
}

fn hide_panel(panel_query: &mut Query<&mut Visibility, With<InfoPanel>>) {
    if let Ok(mut visibility) = panel_query.get_single_mut() {
        *visibility = Visibility::Hidden;
    }
}

/// Spawn a detail fetch on the runtime. Fire-and-forget: in-flight requests
/// are never cancelled, but each carries a generation so stale responses
/// can be discarded on arrival.
fn request_detail(detail: &mut DetailChannel, api: &ApiHandle, node_id: i64) {
    let generation = detail.next_generation();
    let client = api.client.clone();
    let sender = detail.sender.clone();
    api.runtime.spawn(async move {
        let result = client.node_with_relationships(node_id).await;
        // Receiver dropping just means the window closed
        let _ = sender.send(DetailResponse {
            generation,
            node_id,
            result,
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualization::constants::{node_color_for_label, COLOR_EDGE_DEFAULT};
    use std::collections::{BTreeSet, HashMap};

    #[test]
    fn test_click_empty_with_no_selection_is_ignored() {
        assert_eq!(click_transition(None, None), ClickOutcome::Ignored);
    }

    #[test]
    fn test_click_node_selects_it() {
        assert_eq!(
            click_transition(None, Some(3)),
            ClickOutcome::Selected {
                previous: None,
                node_id: 3
            }
        );
    }

    #[test]
    fn test_click_other_node_reports_previous() {
        assert_eq!(
            click_transition(Some(1), Some(2)),
            ClickOutcome::Selected {
                previous: Some(1),
                node_id: 2
            }
        );
    }

    #[test]
    fn test_reclick_selected_node_is_noop() {
        assert_eq!(click_transition(Some(5), Some(5)), ClickOutcome::Unchanged);
    }

    #[test]
    fn test_click_empty_clears_selection() {
        assert_eq!(
            click_transition(Some(5), None),
            ClickOutcome::Cleared { previous: 5 }
        );
    }

    #[test]
    fn test_pick_node_chooses_nearest_along_ray() {
        let positions = [Vec3::new(0.0, 0.0, -20.0), Vec3::new(0.0, 0.0, -10.0)];
        let hit = pick_node(Vec3::ZERO, Vec3::NEG_Z, &positions, 1.5);
        assert_eq!(hit, Some(1));
    }

    #[test]
    fn test_pick_node_misses_off_axis_spheres() {
        let positions = [Vec3::new(5.0, 0.0, -10.0)];
        assert_eq!(pick_node(Vec3::ZERO, Vec3::NEG_Z, &positions, 1.5), None);
    }

    #[test]
    fn test_pick_node_ignores_spheres_behind_origin() {
        let positions = [Vec3::new(0.0, 0.0, 10.0)];
        assert_eq!(pick_node(Vec3::ZERO, Vec3::NEG_Z, &positions, 1.5), None);
    }

    /// Pure mirror of the selection effects: node colors keyed by id, the
    /// highlighted edge set derived from the same transitions the system
    /// applies.
    struct SelectionModel {
        selected: Option<i64>,
        colors: HashMap<i64, Color>,
        base: HashMap<i64, Color>,
        edges: Vec<(i64, i64)>,
        highlighted: BTreeSet<usize>,
    }

    impl SelectionModel {
        fn new(node_ids: &[i64], edges: &[(i64, i64)]) -> Self {
            let base: HashMap<i64, Color> = node_ids
                .iter()
                .map(|&id| (id, node_color_for_label("User")))
                .collect();
            Self {
                selected: None,
                colors: base.clone(),
                base,
                edges: edges.to_vec(),
                highlighted: BTreeSet::new(),
            }
        }

        fn click(&mut self, hit: Option<i64>) {
            match click_transition(self.selected, hit) {
                ClickOutcome::Unchanged | ClickOutcome::Ignored => {}
                ClickOutcome::Cleared { previous } => {
                    self.colors.insert(previous, self.base[&previous]);
                    self.highlighted.clear();
                    self.selected = None;
                }
                ClickOutcome::Selected { previous, node_id } => {
                    if let Some(previous) = previous {
                        self.colors.insert(previous, self.base[&previous]);
                    }
                    self.highlighted.clear();
                    self.colors
                        .insert(node_id, lighten(self.base[&node_id], HIGHLIGHT_BLEND));
                    for (idx, &(start, end)) in self.edges.iter().enumerate() {
                        if start == node_id || end == node_id {
                            self.highlighted.insert(idx);
                        }
                    }
                    self.selected = Some(node_id);
                }
            }
        }

        fn edge_color(&self, idx: usize) -> Color {
            if self.highlighted.contains(&idx) {
                COLOR_EDGE_HIGHLIGHT
            } else {
                COLOR_EDGE_DEFAULT
            }
        }
    }

    #[test]
    fn test_selection_exclusivity() {
        // Edges: 0 touches A(1), 1 touches B(2), 2 touches both
        let mut model = SelectionModel::new(&[1, 2, 3], &[(1, 3), (2, 3), (1, 2)]);
        model.click(Some(1));
        model.click(Some(2));

        assert_eq!(model.selected, Some(2));
        assert_eq!(model.colors[&1], model.base[&1]);
        assert_eq!(model.colors[&2], lighten(model.base[&2], HIGHLIGHT_BLEND));
        assert_eq!(model.highlighted, BTreeSet::from([1, 2]));
        assert_eq!(model.edge_color(0), COLOR_EDGE_DEFAULT);
        assert_eq!(model.edge_color(1), COLOR_EDGE_HIGHLIGHT);
    }

    #[test]
    fn test_deselection_restores_everything() {
        let mut model = SelectionModel::new(&[1, 2], &[(1, 2)]);
        model.click(Some(1));
        model.click(None);

        assert_eq!(model.selected, None);
        assert_eq!(model.colors[&1], model.base[&1]);
        assert!(model.highlighted.is_empty());
    }

    #[test]
    fn test_reselection_is_idempotent() {
        let mut model = SelectionModel::new(&[1, 2], &[(1, 2)]);
        model.click(Some(1));
        let color_before = model.colors[&1];
        let highlighted_before = model.highlighted.clone();

        model.click(Some(1));

        assert_eq!(model.selected, Some(1));
        assert_eq!(model.colors[&1], color_before);
        assert_eq!(model.highlighted, highlighted_before);
    }
}

//! Info panel updates from resolved detail fetches.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::models::NodeWithRelationships;
use crate::visualization::components::{InfoPanel, InfoPanelBody, InfoPanelTitle};
use crate::visualization::resources::{DetailChannel, DetailResponse, NodeNames, SelectionState};

/// Drain resolved detail fetches and render the newest one into the panel.
///
/// A response is applied only when it carries the latest request generation
/// and its node is still the selected one; anything else is stale and
/// dropped. A failed fetch hides the panel.
pub fn apply_detail_system(
    mut detail: ResMut<DetailChannel>,
    selection: Res<SelectionState>,
    names: Res<NodeNames>,
    mut panel_query: Query<&mut Visibility, With<InfoPanel>>,
    mut title_query: Query<&mut Text, (With<InfoPanelTitle>, Without<InfoPanelBody>)>,
    mut body_query: Query<&mut Text, (With<InfoPanelBody>, Without<InfoPanelTitle>)>,
) {
    while let Ok(response) = detail.receiver.try_recv() {
        let selected = selection.selected.as_ref().map(|s| s.node_id);
        if is_stale(&response, detail.current_generation(), selected) {
            tracing::debug!(
                "Discarding stale detail response for node {}",
                response.node_id
            );
            continue;
        }

        let Ok(mut visibility) = panel_query.get_single_mut() else {
            return;
        };

        match response.result {
            Ok(data) => {
                if let Ok(mut title) = title_query.get_single_mut() {
                    **title = data.node.display_name();
                }
                if let Ok(mut body) = body_query.get_single_mut() {
                    **body = panel_body(&data, &names.0);
                }
                *visibility = Visibility::Visible;
            }
            Err(err) => {
                tracing::error!(
                    "Detail fetch failed for node {}: {err}",
                    response.node_id
                );
                *visibility = Visibility::Hidden;
            }
        }
    }
}

/// Whether a resolved response must be dropped: it was issued under an
/// older generation, or its node is no longer the selected one.
fn is_stale(response: &DetailResponse, current_generation: u64, selected: Option<i64>) -> bool {
    response.generation != current_generation || selected != Some(response.node_id)
}

/// Assemble the panel body: attribute lines, then the connection list.
pub fn panel_body(detail: &NodeWithRelationships, names: &HashMap<i64, String>) -> String {
    let mut lines: Vec<String> = detail
        .node
        .attributes()
        .into_iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect();
    if lines.is_empty() {
        lines.push("No additional attributes.".to_string());
    }

    lines.push(String::new());
    if detail.relationships.is_empty() {
        lines.push("No relationships.".to_string());
    } else {
        lines.push("Connections:".to_string());
        for rel in &detail.relationships {
            let target = names
                .get(&rel.end_node_id)
                .map(String::as_str)
                .unwrap_or("unknown");
            lines.push(format!(
                "{} -> Node {} ({})",
                rel.rel_type, rel.end_node_id, target
            ));
        }
    }

    lines.join("\n")
}

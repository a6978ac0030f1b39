//! Zoom-relative layout of call-site boxes.

use serde::{Deserialize, Serialize};

use crate::model::FlameGraph;
use crate::view::state::NodeView;
use crate::view::text::fit_label;

/// Height of one label row in pixels, as generated.
pub const ROW_HEIGHT: f32 = 17.0;
/// Vertical gap kept below the zoomed row.
pub const ROW_GAP: f32 = 2.0;
/// Text baseline offset from the top of a box.
pub const TEXT_BASELINE: f32 = 12.0;
/// Text left inset from the edge of a box.
pub const TEXT_INSET: f32 = 4.0;

/// Real pixel size of the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Recompute every node's current box and visibility relative to the zoom
/// target, then re-fit all visible labels.
///
/// Reads only original geometry, the target and the viewport, never the
/// previous view state, so repeated invocation with the same inputs is
/// idempotent. With the root as target the scale factor is 1 and all nodes
/// render at native geometry.
pub fn relayout(graph: &FlameGraph, views: &mut [NodeView], target: usize, viewport: Viewport) {
    let Some(t) = graph.node_at(target) else {
        return;
    };
    let t_box = t.orig;
    let scale = viewport.width / t_box.width;
    let y_shift = viewport.height - t_box.y - ROW_HEIGHT - ROW_GAP;

    for (view, node) in views.iter_mut().zip(graph.nodes.values()) {
        // Rows below the target are ancestors or frames outside the zoomed
        // subtree.
        if node.orig.y > t_box.y {
            view.visible = false;
            continue;
        }
        view.visible = true;
        view.x = (node.orig.x - t_box.x) * scale;
        view.y = node.orig.y + y_shift;
        view.width = node.orig.width * scale;
        view.height = node.orig.height;
        view.text_x = view.x + TEXT_INSET;
        view.text_y = view.y + TEXT_BASELINE;
    }

    for (view, node) in views.iter_mut().zip(graph.nodes.values()) {
        if view.visible {
            view.label = fit_label(&node.title, view.width);
        }
    }
}

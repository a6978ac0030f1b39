//! Substring search highlighting.

use crate::model::FlameGraph;
use crate::view::state::NodeView;

/// Fill applied to call sites whose title matches the search term.
pub const SEARCH_HIGHLIGHT_FILL: &str = "rgb(230,100,230)";

/// Recolor every node whose title contains `term` (case-sensitive, literal
/// substring) and restore the original fill on all others. An empty term
/// clears all highlighting. Zoom and selection state are untouched.
pub fn apply_search(graph: &FlameGraph, views: &mut [NodeView], term: &str) {
    for (view, node) in views.iter_mut().zip(graph.nodes.values()) {
        if !term.is_empty() && node.title.contains(term) {
            view.fill = SEARCH_HIGHLIGHT_FILL.to_string();
        } else {
            view.fill = node.orig_fill.clone();
        }
    }
}

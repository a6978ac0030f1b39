//! Per-flamegraph view state and interaction entry points.

use serde::{Deserialize, Serialize};

use crate::model::{FlameGraph, split_title};
use crate::parser::percentage_of;

use super::keyboard::Key;
use super::layout::{Viewport, relayout};
use super::search::apply_search;
use super::zoom::ZoomHistory;

/// Mutable per-view state of one call site: the current box, text anchor,
/// fitted label, fill, and flags. Recomputed from the static table on every
/// zoom change; never an input to layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub text_x: f32,
    pub text_y: f32,
    /// Fitted display label (empty when the box is too narrow).
    pub label: String,
    /// Current fill color (search highlighting swaps this).
    pub fill: String,
    pub visible: bool,
    /// Selection highlight flag.
    pub highlighted: bool,
}

/// Info/percentage readout fields of one flamegraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readout {
    /// Method name of the selected call site.
    pub info_text: String,
    /// Sample percentage of the selected call site.
    pub percent_text: String,
}

impl Default for Readout {
    fn default() -> Self {
        Self {
            info_text: String::new(),
            // The generator's initial readout before any selection.
            percent_text: "100.00%".to_string(),
        }
    }
}

/// Interactive state of one rendered flamegraph.
///
/// Every view owns its zoom history and its selection, so several
/// flamegraphs on one page never interfere with each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlameView {
    pub graph: FlameGraph,
    /// Mutable view state, parallel to `graph.nodes` by index.
    pub views: Vec<NodeView>,
    pub viewport: Viewport,
    pub zoom: ZoomHistory,
    /// Index of the selected call site, if any.
    pub selected: Option<usize>,
    pub readout: Readout,
    /// Whether the zoom-out affordance is shown; true exactly while the
    /// zoom history is deeper than the root.
    pub zoom_out_visible: bool,
}

impl FlameView {
    /// Create a view over a parsed graph, with the viewport defaulting to
    /// the generated canvas size, and lay it out from the root.
    pub fn new(graph: FlameGraph) -> Self {
        let viewport = Viewport {
            width: graph.width,
            height: graph.height,
        };
        let views = graph
            .nodes
            .values()
            .map(|n| NodeView {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: n.orig.height,
                text_x: 0.0,
                text_y: 0.0,
                label: String::new(),
                fill: n.orig_fill.clone(),
                visible: true,
                highlighted: false,
            })
            .collect();
        let zoom = ZoomHistory::new(graph.root_index());
        let mut view = Self {
            graph,
            views,
            viewport,
            zoom,
            selected: None,
            readout: Readout::default(),
            zoom_out_visible: false,
        };
        view.relayout();
        view
    }

    /// Re-run layout from the current zoom target.
    pub fn relayout(&mut self) {
        relayout(&self.graph, &mut self.views, self.zoom.peek(), self.viewport);
    }

    /// Change the viewport to the real on-screen size and re-lay out.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.relayout();
    }

    /// Select a call site: move the highlight and update the readout.
    ///
    /// The percentage field keeps its previous value when the title carries
    /// no parseable percentage; the method-name field still updates.
    pub fn select(&mut self, index: usize) {
        let Some(node) = self.graph.node_at(index) else {
            return;
        };
        let (method, info) = split_title(&node.title);
        self.readout.info_text = method.to_string();
        match info.and_then(percentage_of) {
            Some(pct) => self.readout.percent_text = pct,
            None => tracing::trace!(title = %node.title, "no percentage in title"),
        }

        if let Some(prev) = self.selected.take() {
            if let Some(v) = self.views.get_mut(prev) {
                v.highlighted = false;
            }
        }
        self.selected = Some(index);
        self.views[index].highlighted = true;
    }

    /// Zoom into a call site: push it as the zoom target, re-lay out from
    /// it, select it, and reveal the zoom-out affordance.
    pub fn zoom_into(&mut self, index: usize) {
        if self.graph.node_at(index).is_none() {
            return;
        }
        self.zoom.push(index);
        self.relayout();
        self.select(index);
        self.zoom_out_visible = !self.zoom.at_root();
    }

    /// Zoom out one step: drop the current target (a no-op at the root),
    /// select the new target and re-lay out from it.
    pub fn unzoom(&mut self) {
        if let Some(sel) = self.selected {
            if let Some(v) = self.views.get_mut(sel) {
                v.highlighted = false;
            }
        }
        self.zoom.pop();
        let target = self.zoom.peek();
        self.select(target);
        self.zoom_out_visible = !self.zoom.at_root();
        self.relayout();
    }

    /// Highlight every call site whose title contains `term`; an empty term
    /// clears back to the original fills.
    pub fn search(&mut self, term: &str) {
        apply_search(&self.graph, &mut self.views, term);
    }

    /// Restore every call site's original fill.
    pub fn clear_search(&mut self) {
        apply_search(&self.graph, &mut self.views, "");
    }

    /// Handle a navigation key. Returns true when the key was consumed and
    /// the host should suppress its default behavior; without a selection
    /// every key is left untouched.
    pub fn handle_key(&mut self, key: Key) -> bool {
        let Some(selected) = self.selected else {
            return false;
        };
        match key {
            Key::Space => {
                self.zoom_into(selected);
                true
            }
            Key::Backspace => {
                self.unzoom();
                true
            }
            _ => {
                if let Some(direction) = key.direction() {
                    if let Some(target) = self.graph.neighbor(selected, direction) {
                        self.select(target);
                    }
                }
                true
            }
        }
    }

    /// Handle a raw typed character, consuming it only when it maps to a
    /// navigation key.
    pub fn handle_char(&mut self, c: char) -> bool {
        match Key::from_char(c) {
            Some(key) => self.handle_key(key),
            None => false,
        }
    }

    /// Id of the selected call site, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.graph.node_at(self.selected?).map(|n| n.id.as_str())
    }
}

//! Flamegraph SVG document parser.
//!
//! Loads the SVG documents written by simpleperf's inferno reporter into
//! strongly-typed Rust structures. A document may carry several flamegraphs
//! (one `<svg>` element each); every one becomes an independent
//! [`FlameGraph`].
//!
//! - [`helpers`] – nav tuple / percentage parsing

pub mod helpers;

// Re-export key helpers at the parser module level.
pub use helpers::{parse_nav, percentage_of};

use crate::model::{CallSite, FlameGraph, OrigBox};
use anyhow::{Context, Result, anyhow};
use camino::Utf8Path;
use indexmap::IndexMap;
use roxmltree::{Document, Node};

/// Parse every `<svg>` element in a document into a [`FlameGraph`].
pub fn parse_document(text: &str) -> Result<Vec<FlameGraph>> {
    let doc = Document::parse(text).context("Failed to parse SVG document")?;
    let mut graphs = Vec::new();
    for svg in doc.descendants().filter(|n| n.has_tag_name("svg")) {
        graphs.push(parse_svg(svg)?);
    }
    if graphs.is_empty() {
        return Err(anyhow!("No <svg> element in document"));
    }
    Ok(graphs)
}

/// Read and parse a flamegraph SVG file from the filesystem.
pub fn parse_file(path: impl AsRef<Utf8Path>) -> Result<Vec<FlameGraph>> {
    let path = path.as_ref();
    let text =
        std::fs::read_to_string(path).with_context(|| format!("Open {}", path))?;
    parse_document(&text).with_context(|| format!("Failed to parse {}", path))
}

fn parse_svg(svg: Node) -> Result<FlameGraph> {
    let root_id = svg
        .attribute("rootid")
        .ok_or_else(|| anyhow!("Missing rootid attribute on <svg>"))?
        .to_string();
    let width = float_attr(svg, "width").unwrap_or(0.0);
    let height = float_attr(svg, "height").unwrap_or(0.0);

    let mut nodes = IndexMap::new();
    for group in svg.descendants().filter(|n| n.has_tag_name("g")) {
        if let Some(site) = parse_callsite(group) {
            nodes.insert(site.id.clone(), site);
        }
    }
    if !nodes.contains_key(root_id.as_str()) {
        return Err(anyhow!("rootid {} does not name a call site", root_id));
    }
    tracing::debug!(nodes = nodes.len(), root = %root_id, "parsed flamegraph");
    Ok(FlameGraph {
        root_id,
        width,
        height,
        nodes,
    })
}

/// Parse one `<g>` call-site group. Groups without an id or a `<rect>`
/// child (control widgets, decorations) are skipped.
fn parse_callsite(group: Node) -> Option<CallSite> {
    let id = group.attribute("id")?.to_string();
    let rect = group.children().find(|n| n.has_tag_name("rect"))?;
    let title = group
        .children()
        .find(|n| n.has_tag_name("title"))
        .and_then(|n| n.text())
        .unwrap_or("")
        .trim()
        .to_string();

    // Original geometry lives in the o* attribute duplicates; fall back to
    // the live attributes for documents that never carried them.
    let orig = OrigBox {
        x: float_attr2(rect, "ox", "x"),
        y: float_attr2(rect, "oy", "y"),
        width: float_attr2(rect, "owidth", "width"),
        height: float_attr(rect, "height").unwrap_or(0.0),
    };
    let orig_fill = rect
        .attribute("ofill")
        .or_else(|| rect.attribute("fill"))
        .unwrap_or("")
        .to_string();
    let nav = group.attribute("nav").map(parse_nav).unwrap_or_default();

    Some(CallSite {
        id,
        title,
        orig,
        orig_fill,
        nav,
    })
}

fn float_attr(node: Node, name: &str) -> Option<f32> {
    node.attribute(name)?.trim().parse().ok()
}

fn float_attr2(node: Node, name: &str, fallback: &str) -> f32 {
    float_attr(node, name)
        .or_else(|| float_attr(node, fallback))
        .unwrap_or(0.0)
}

//! Print an ASCII tree of the call sites in a flamegraph SVG.
//!
//! Usage:
//!   cargo run --example tree -- <flamegraph.svg>

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use flameview::model::{CallSite, FlameGraph};
use flameview::parser::percentage_of;
use flameview::view::NAV_DOWN;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Print an ASCII tree of the call sites in a flamegraph SVG"
)]
struct Cli {
    /// Path to a flamegraph SVG document
    #[arg(value_name = "SVG_FILE")]
    svg_file: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let path = Utf8PathBuf::from(&cli.svg_file);
    for graph in flameview::parser::parse_file(&path)? {
        let root = graph.root_index();
        if let Some(node) = graph.node_at(root) {
            println!("{}", describe(node));
            print_children(&graph, node, "");
        }
    }
    Ok(())
}

fn describe(node: &CallSite) -> String {
    match node.info().and_then(percentage_of) {
        Some(pct) => format!("{} ({})", node.method_name(), pct),
        None => node.method_name().to_string(),
    }
}

fn print_children(graph: &FlameGraph, parent: &CallSite, prefix: &str) {
    // A child's downward nav link points back at its parent.
    let children: Vec<&CallSite> = graph
        .nodes
        .values()
        .filter(|n| n.nav.get(NAV_DOWN) == Some(parent.id.as_str()))
        .collect();

    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let branch = if last { "└─" } else { "├─" };
        println!("{}{} {}", prefix, branch, describe(child));
        let new_prefix = format!("{}{}", prefix, if last { "   " } else { "│  " });
        print_children(graph, child, &new_prefix);
    }
}

//! Walk a flamegraph interactively from stdin.
//!
//! Drives a [`FlameView`] with the same commands the rendered page reacts
//! to: `w`/`a`/`s`/`d` move the selection, `z` zooms into it, `b` zooms
//! back out, `/term` searches, an empty line quits. After every command the
//! readout and the selected box are printed.
//!
//! Usage:
//!   cargo run --example walk -- <flamegraph.svg>

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use flameview::view::{FlameView, Key};
use std::io::BufRead;

#[derive(Parser, Debug)]
#[command(author, version, about = "Walk a flamegraph interactively", long_about = None)]
struct Cli {
    /// Path to a flamegraph SVG document
    #[arg(value_name = "SVG_FILE")]
    svg_file: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let path = Utf8PathBuf::from(&cli.svg_file);
    let graphs = flameview::parser::parse_file(&path)?;
    let graph = graphs
        .into_iter()
        .next()
        .with_context(|| format!("No flamegraph in {}", path))?;

    let mut view = FlameView::new(graph);
    let root = view.graph.root_index();
    view.select(root);
    print_status(&view);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let cmd = line.trim();
        match cmd {
            "" => break,
            "z" => {
                view.handle_key(Key::Space);
            }
            "b" => {
                view.handle_key(Key::Backspace);
            }
            _ if cmd.starts_with('/') => view.search(&cmd[1..]),
            _ => {
                for c in cmd.chars() {
                    view.handle_char(c);
                }
            }
        }
        print_status(&view);
    }
    Ok(())
}

fn print_status(view: &FlameView) {
    let depth = view.zoom.depth();
    match view.selected {
        Some(index) => {
            let v = &view.views[index];
            println!(
                "[depth {}] {} {} x={:.1} w={:.1}",
                depth, view.readout.info_text, view.readout.percent_text, v.x, v.width
            );
        }
        None => println!("[depth {}] nothing selected", depth),
    }
}

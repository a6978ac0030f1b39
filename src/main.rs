use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use flameview::model::FlameDoc;

#[derive(Parser, Debug)]
#[command(author, version, about = "Parse flamegraph SVG documents to JSON", long_about = None)]
struct Cli {
    /// Flamegraph SVG document (as written by the inferno reporter)
    #[arg(value_name = "SVG_FILE")]
    svg_file: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let path = Utf8PathBuf::from(&cli.svg_file);
    let graphs = flameview::parser::parse_file(&path)?;
    let doc = FlameDoc { graphs };

    let json = serde_json::to_string_pretty(&doc)?;
    println!("{}", json);
    Ok(())
}

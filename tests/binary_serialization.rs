use anyhow::Result;
use flameview::model::FlameDoc;
use flameview::parser::parse_document;
use tempfile::NamedTempFile;

const SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="200" height="51" rootid="1">
<g id="1" class="n" nav="2,0,0,0">
  <title>main | /bin/app (100 samples: 100.00%)</title>
  <rect x="0.0" y="34.0" ox="0.0" oy="34.0" width="200.0" owidth="200.0" height="15.0" ofill="rgb(245,110,100)" fill="rgb(245,110,100)"/>
  <text x="2.0" y="46.0" font-size="12" font-family="Monospace"></text>
</g>
<g id="2" class="n" nav="0,0,1,0">
  <title>work | /bin/app (60 samples: 60.00%)</title>
  <rect x="0.0" y="17.0" ox="0.0" oy="17.0" width="120.0" owidth="120.0" height="15.0" ofill="rgb(245,173,100)" fill="rgb(245,173,100)"/>
  <text x="2.0" y="29.0" font-size="12" font-family="Monospace"></text>
</g>
</svg>"#;

#[test]
fn test_binary_serialization() -> Result<()> {
    let graphs = parse_document(SVG)?;
    let doc = FlameDoc { graphs };

    // Create a temporary file
    let temp_file = NamedTempFile::new()?;
    let temp_path = temp_file.path();

    // Save to binary
    doc.save_to_binary(temp_path)?;

    // Load from binary
    let loaded_doc = FlameDoc::load_from_binary(temp_path)?;

    // Verify content
    assert_eq!(loaded_doc.graphs.len(), 1);
    let g = &loaded_doc.graphs[0];
    assert_eq!(g.root_id, "1");
    assert_eq!(g.len(), 2);
    assert_eq!(g.nodes["1"].method_name(), "main");
    assert_eq!(g.nodes["1"].orig.width, 200.0);
    assert_eq!(g.nodes["1"].nav.get(0), Some("2"));
    assert_eq!(g.nodes["2"].nav.get(2), Some("1"));
    assert_eq!(g.nodes["2"].orig_fill, "rgb(245,173,100)");

    Ok(())
}

#[test]
fn test_rejects_wrong_magic() -> Result<()> {
    let temp_file = NamedTempFile::new()?;
    std::fs::write(temp_file.path(), b"NOTAGRAPH\x01\x00\x00\x00")?;
    assert!(FlameDoc::load_from_binary(temp_file.path()).is_err());
    Ok(())
}

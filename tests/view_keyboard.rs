use flameview::model::{CallSite, FlameGraph, NavLinks, OrigBox};
use flameview::view::{FlameView, Key};
use indexmap::IndexMap;

fn callsite(id: &str, title: &str, x: f32, y: f32, width: f32, nav: [&str; 4]) -> CallSite {
    CallSite {
        id: id.to_string(),
        title: title.to_string(),
        orig: OrigBox {
            x,
            y,
            width,
            height: 15.0,
        },
        orig_fill: format!("rgb(245,110,{id})"),
        nav: NavLinks(nav.map(|n| (n != "0").then(|| n.to_string()))),
    }
}

// Same shape the generator emits: nav = [up, left, down, right], "0" for
// no neighbor, the downward link pointing at the parent.
fn sample_graph() -> FlameGraph {
    let mut nodes = IndexMap::new();
    for site in [
        callsite("1", "main | /bin/app (100 samples: 100.00%)", 0.0, 51.0, 200.0, ["2", "0", "0", "0"]),
        callsite("2", "parse | /bin/app (60 samples: 60.00%)", 0.0, 34.0, 120.0, ["4", "0", "1", "3"]),
        callsite("4", "lex | /bin/app (30 samples: 30.00%)", 0.0, 17.0, 60.0, ["0", "0", "2", "0"]),
        callsite("3", "emit | /bin/app (40 samples: 40.00%)", 120.0, 34.0, 80.0, ["0", "2", "1", "0"]),
    ] {
        nodes.insert(site.id.clone(), site);
    }
    FlameGraph {
        root_id: "1".to_string(),
        width: 200.0,
        height: 68.0,
        nodes,
    }
}

#[test]
fn test_keys_ignored_without_selection() {
    let mut view = FlameView::new(sample_graph());
    assert!(!view.handle_key(Key::W));
    assert!(!view.handle_key(Key::Space));
    assert_eq!(view.selected, None);
    assert_eq!(view.zoom.depth(), 1);
}

#[test]
fn test_wasd_moves_selection() {
    let mut view = FlameView::new(sample_graph());

    // W follows the upward link.
    view.select(1); // parse
    assert!(view.handle_key(Key::W));
    assert_eq!(view.selected_id(), Some("4"));

    // S is the right sibling, D the downward (parent) link.
    view.select(1);
    assert!(view.handle_key(Key::S));
    assert_eq!(view.selected_id(), Some("3"));

    assert!(view.handle_key(Key::A));
    assert_eq!(view.selected_id(), Some("2"));

    assert!(view.handle_key(Key::D));
    assert_eq!(view.selected_id(), Some("1"));
}

#[test]
fn test_sentinel_direction_is_noop() {
    let mut view = FlameView::new(sample_graph());
    view.select(3); // emit: no right sibling

    // Consumed, but the selection stays put.
    assert!(view.handle_key(Key::S));
    assert_eq!(view.selected_id(), Some("3"));
}

#[test]
fn test_unknown_nav_target_is_noop() {
    let mut graph = sample_graph();
    graph.nodes["2"].nav = NavLinks([Some("99".to_string()), None, None, None]);
    let mut view = FlameView::new(graph);

    view.select(1);
    assert!(view.handle_key(Key::W));
    assert_eq!(view.selected_id(), Some("2"));
}

#[test]
fn test_space_zooms_into_selection() {
    let mut view = FlameView::new(sample_graph());
    view.select(1);

    assert!(view.handle_key(Key::Space));
    assert_eq!(view.zoom.depth(), 2);
    assert!(view.zoom_out_visible);
    assert_eq!(view.selected_id(), Some("2"));
    assert!(!view.views[0].visible);
}

#[test]
fn test_backspace_unzooms() {
    let mut view = FlameView::new(sample_graph());
    view.select(1);
    view.handle_key(Key::Space);

    assert!(view.handle_key(Key::Backspace));
    assert_eq!(view.zoom.depth(), 1);
    assert!(!view.zoom_out_visible);
    assert_eq!(view.selected_id(), Some("1"));
    assert!(view.views[0].visible);
}

#[test]
fn test_handle_char_maps_and_filters() {
    let mut view = FlameView::new(sample_graph());
    view.select(1);

    // Unmapped characters are not consumed and change nothing.
    assert!(!view.handle_char('x'));
    assert_eq!(view.selected_id(), Some("2"));

    // Case-insensitive mapping.
    assert!(view.handle_char('W'));
    assert_eq!(view.selected_id(), Some("4"));
}

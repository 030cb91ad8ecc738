use serde_json::json;
use sirenia::layers::{LayerEntry, LayeredGraph, Node, NodeKind, UniformSeparation};
use sirenia::{CoordAssignment, Error, Greedy};
use std::collections::BTreeMap;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn layers(spec: &[Vec<LayerEntry>]) -> LayeredGraph {
    LayeredGraph::from_child_indices(spec).unwrap()
}

fn x(g: &LayeredGraph, id: &str) -> f64 {
    g.x(g.node_by_id(id).unwrap()).unwrap()
}

fn run(g: &mut LayeredGraph) {
    Greedy::new()
        .assign(g, &UniformSeparation::default())
        .unwrap();
}

#[test]
fn greedy_square() {
    let mut g = layers(&[
        vec![LayerEntry::Real(vec![0, 1])],
        vec![LayerEntry::Real(vec![0]), LayerEntry::Real(vec![0])],
    ]);
    run(&mut g);

    assert_close(x(&g, "0,0"), 0.0);
    assert_close(x(&g, "1,0"), 0.0);
    assert_close(x(&g, "1,1"), 1.0);
    assert_close(x(&g, "2,0"), 0.5);
}

#[test]
fn greedy_triangle_with_dummy() {
    let mut g = layers(&[
        vec![LayerEntry::Real(vec![0, 1])],
        vec![LayerEntry::Real(vec![0]), LayerEntry::Dummy(0)],
    ]);
    run(&mut g);

    assert_close(x(&g, "0,0"), 0.0);
    assert_close(x(&g, "1,0"), 0.0);
    assert_close(x(&g, "1,1"), 1.0);
    assert_close(x(&g, "2,0"), 0.5);
}

#[test]
fn greedy_flat_disconnected_component() {
    let mut g = layers(&[
        vec![LayerEntry::Real(vec![]), LayerEntry::Real(vec![])],
        vec![LayerEntry::Real(vec![0])],
    ]);
    run(&mut g);

    assert_close(x(&g, "0,0"), 0.0);
    assert_close(x(&g, "0,1"), 1.0);
    // No parents: both stay at the seed value 0.
    assert_close(x(&g, "1,0"), 0.0);
    assert_close(x(&g, "2,0"), 0.0);
}

#[test]
fn greedy_equal_priorities_refine_left_to_right() {
    // Both leaves seed at 0. Anchoring the left one first pushes the right one to 1; the other
    // order would push the left one to -1 and move the root to 1 after scaling.
    let mut g = layers(&[vec![LayerEntry::Real(vec![0, 1])]]);
    run(&mut g);

    assert_close(x(&g, "0,0"), 0.0);
    assert_close(x(&g, "1,0"), 0.0);
    assert_close(x(&g, "1,1"), 1.0);
}

#[test]
fn greedy_higher_degree_anchors_first() {
    // "1,1" has a child, so it keeps its mean position and "1,0" is pushed left of it.
    let mut g = layers(&[
        vec![LayerEntry::Real(vec![0, 1])],
        vec![LayerEntry::Real(vec![]), LayerEntry::Real(vec![0])],
    ]);
    run(&mut g);

    assert_close(x(&g, "0,0"), 1.0);
    assert_close(x(&g, "1,0"), 0.0);
    assert_close(x(&g, "1,1"), 1.0);
    assert_close(x(&g, "2,0"), 1.0);
}

#[test]
fn greedy_dummy_nodes_yield_to_real_nodes() {
    let mut g = layers(&[
        vec![LayerEntry::Real(vec![0, 1])],
        vec![LayerEntry::Dummy(0), LayerEntry::Real(vec![0])],
    ]);
    run(&mut g);

    assert_close(x(&g, "0,0"), 1.0);
    assert_close(x(&g, "1,0"), 0.0);
    assert_close(x(&g, "1,1"), 1.0);
    assert_close(x(&g, "2,0"), 0.5);
}

#[test]
fn greedy_single_node_is_centered() {
    let mut g = layers(&[vec![LayerEntry::Real(vec![])]]);
    run(&mut g);
    assert_eq!(x(&g, "0,0"), 0.5);
}

#[test]
fn greedy_zero_separation_collapses_to_center() {
    let mut g = layers(&[
        vec![LayerEntry::Real(vec![0, 1])],
        vec![LayerEntry::Real(vec![0]), LayerEntry::Real(vec![0])],
    ]);
    Greedy::new().assign(&mut g, &UniformSeparation(0.0)).unwrap();

    for x in g.positions().values() {
        assert_eq!(*x, 0.5);
    }
    assert_eq!(g.positions().len(), 4);
}

#[test]
fn greedy_is_deterministic_and_ignores_previous_positions() {
    let spec = [
        vec![LayerEntry::Real(vec![0, 2]), LayerEntry::Real(vec![1, 2])],
        vec![
            LayerEntry::Dummy(1),
            LayerEntry::Real(vec![0]),
            LayerEntry::Real(vec![0, 1]),
        ],
    ];
    let mut first = layers(&spec);
    run(&mut first);

    let mut second = layers(&spec);
    let ids: Vec<_> = second.nodes().map(|(id, _)| id).collect();
    for (i, id) in ids.into_iter().enumerate() {
        second.set_x(id, 100.0 - i as f64 * 13.0).unwrap();
    }
    run(&mut second);
    run(&mut second);

    assert_eq!(first.positions(), second.positions());
}

#[test]
fn greedy_rejects_graph_without_layers() {
    let mut g = LayeredGraph::new();
    let err = Greedy::new()
        .assign(&mut g, &UniformSeparation::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "invalid layered graph: graph has no layers");
}

#[test]
fn greedy_rejects_empty_first_layer() {
    let mut g = LayeredGraph::new();
    g.add_layer();
    let bottom = g.add_layer();
    g.add_node(bottom, "a", NodeKind::Real).unwrap();

    let err = Greedy::new()
        .assign(&mut g, &UniformSeparation::default())
        .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidInput {
            message: "first layer is empty".to_string()
        }
    );
    assert_eq!(g.positions(), BTreeMap::new());
}

#[test]
fn greedy_empty_middle_layer_leaves_lower_nodes_unseeded() {
    let mut g = LayeredGraph::new();
    for _ in 0..3 {
        g.add_layer();
    }
    g.add_node(0, "a", NodeKind::Real).unwrap();
    g.add_node(0, "b", NodeKind::Real).unwrap();
    g.add_node(2, "c", NodeKind::Real).unwrap();
    run(&mut g);

    assert_close(x(&g, "a"), 0.0);
    assert_close(x(&g, "b"), 1.0);
    assert_close(x(&g, "c"), 0.0);
}

#[test]
fn greedy_rejects_bad_separation_without_touching_positions() {
    let mut g = layers(&[vec![LayerEntry::Real(vec![0, 1])]]);
    let ids: Vec<_> = g.nodes().map(|(id, _)| id).collect();
    for id in ids {
        g.set_x(id, 7.0).unwrap();
    }

    let negative = |_: &Node, _: &Node| -1.0;
    let err = Greedy::new().assign(&mut g, &negative).unwrap_err();
    assert_eq!(
        err.to_string(),
        "separation between 1,0 and 1,1 must be finite and non-negative, but was -1"
    );

    let nan = |_: &Node, right: &Node| if right.id() == "1,1" { f64::NAN } else { 1.0 };
    assert!(matches!(
        Greedy::new().assign(&mut g, &nan),
        Err(Error::InvalidSeparation { .. })
    ));

    assert!(g.positions().values().all(|x| *x == 7.0));
}

#[test]
fn greedy_rejects_first_layer_chain_past_f64_range() {
    let mut g = layers(&[vec![
        LayerEntry::Real(vec![]),
        LayerEntry::Real(vec![]),
        LayerEntry::Real(vec![]),
    ]]);
    let err = Greedy::new()
        .assign(&mut g, &UniformSeparation(1e308))
        .unwrap_err();

    assert_eq!(
        err,
        Error::Overflow {
            message: "position of 0,2 is inf".to_string()
        }
    );
    assert!(g.positions().is_empty());
}

#[test]
fn greedy_rejects_layout_wider_than_f64_range() {
    // The middle node anchors at 0 and pushes its neighbours to -1e308 and 1e308; each position
    // is finite but the span is not.
    let mut g = layers(&[
        vec![LayerEntry::Real(vec![0, 1, 2])],
        vec![
            LayerEntry::Real(vec![]),
            LayerEntry::Real(vec![0]),
            LayerEntry::Real(vec![]),
        ],
    ]);
    let err = Greedy::new()
        .assign(&mut g, &UniformSeparation(1e308))
        .unwrap_err();

    assert!(matches!(err, Error::Overflow { .. }));
    assert!(g.positions().is_empty());
}

#[test]
fn greedy_from_options_accepts_nothing() {
    assert_eq!(Greedy::from_options(&json!(null)), Ok(Greedy::new()));
    assert_eq!(Greedy::from_options(&json!({})), Ok(Greedy::new()));

    let err = Greedy::from_options(&json!({"vertical": [1, 0]})).unwrap_err();
    assert_eq!(
        err,
        Error::Configuration {
            operator: "greedy",
            options: vec!["vertical".to_string()],
        }
    );
    assert_eq!(
        err.to_string(),
        "greedy coordinate assignment takes no options, but got: vertical"
    );

    let err = Greedy::from_options(&json!({"curve": [1, 0], "component": 1})).unwrap_err();
    assert_eq!(
        err.to_string(),
        "greedy coordinate assignment takes no options, but got: component, curve"
    );

    let err = Greedy::from_options(&json!([null])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "greedy coordinate assignment takes no options, but got: [null]"
    );
}

#[test]
fn greedy_is_usable_as_a_trait_object() {
    let op: Box<dyn CoordAssignment> = Box::new(Greedy::new());
    assert_eq!(op.name(), "greedy");

    let mut g = layers(&[vec![LayerEntry::Real(vec![0])]]);
    op.assign(&mut g, &UniformSeparation::default()).unwrap();
    assert_eq!(x(&g, "0,0"), 0.5);
    assert_eq!(x(&g, "1,0"), 0.5);
}

#[test]
fn layout_uses_greedy() {
    let mut a = layers(&[
        vec![LayerEntry::Real(vec![0, 1])],
        vec![LayerEntry::Dummy(0), LayerEntry::Real(vec![0])],
    ]);
    let mut b = a.clone();
    sirenia::layout(&mut a, &UniformSeparation::default()).unwrap();
    run(&mut b);
    assert_eq!(a.positions(), b.positions());
}

#[test]
fn graph_errors_convert_into_layout_errors() {
    let mut g = LayeredGraph::new();
    let top = g.add_layer();
    g.add_node(top, "a", NodeKind::Real).unwrap();
    let err: Error = g.add_node(top, "a", NodeKind::Real).unwrap_err().into();
    assert_eq!(err.to_string(), "duplicate node id: a");
}

use stratum::builder::{Link, NodeLabel, build_layer_graph};
use stratum::graph::NodeIx;
use stratum::options::LayoutOptions;
use stratum::order::assign_order;
use stratum::position::position;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn position_spreads_a_layer_and_starts_at_zero() {
    let nodes = vec![
        NodeLabel::real(100.0, 100.0, 0),
        NodeLabel::real(100.0, 100.0, 0),
    ];
    let mut l = build_layer_graph(nodes, &[]);
    assign_order(&mut l.graph, &l.layers);

    let step = position(&mut l, &LayoutOptions::default());
    let a = &l.graph[NodeIx::new(0)];
    let b = &l.graph[NodeIx::new(1)];
    // 50 + 100 on each side separates the centers; the top edge lands on 0.
    assert!(approx(a.y, 50.0));
    assert!(approx(b.y, 350.0));
    assert!(approx(a.x, 0.0));
    // The 300 spread over one layer beats the 200 default gap.
    assert!(approx(step, 300.0 * 1.7));
}

#[test]
fn position_steps_layers_uniformly() {
    let nodes = vec![
        NodeLabel::real(100.0, 100.0, 0),
        NodeLabel::real(100.0, 100.0, 1),
        NodeLabel::real(100.0, 100.0, 2),
    ];
    let links = [
        Link {
            from: 0,
            to: 1,
            origin: 0,
        },
        Link {
            from: 1,
            to: 2,
            origin: 1,
        },
    ];
    let mut l = build_layer_graph(nodes, &links);
    assign_order(&mut l.graph, &l.layers);

    let options = LayoutOptions {
        node_horizontal_gap: Some(150.0),
        layer_spacing_factor: 2.0,
        ..Default::default()
    };
    let step = position(&mut l, &options);
    assert!(approx(step, 300.0));
    for i in 0..3 {
        let n = &l.graph[NodeIx::new(i)];
        assert!(approx(n.x, i as f64 * 300.0));
        assert!(approx(n.y, 50.0));
    }
}

#[test]
fn position_uses_a_selected_alignment() {
    // A feeds C and D; with the up-left run only, C lines up with A.
    let nodes = vec![
        NodeLabel::real(10.0, 10.0, 0),
        NodeLabel::real(10.0, 10.0, 1),
        NodeLabel::real(10.0, 10.0, 1),
    ];
    let links = [
        Link {
            from: 0,
            to: 1,
            origin: 0,
        },
        Link {
            from: 0,
            to: 2,
            origin: 1,
        },
    ];
    let mut l = build_layer_graph(nodes, &links);
    assign_order(&mut l.graph, &l.layers);

    let options = LayoutOptions {
        node_vertical_gap: 20.0,
        align: Some(stratum::Alignment::UpLeft),
        ..Default::default()
    };
    position(&mut l, &options);
    let a = l.graph[NodeIx::new(0)].y;
    let c = l.graph[NodeIx::new(1)].y;
    let d = l.graph[NodeIx::new(2)].y;
    assert!(approx(a, c));
    assert!(approx(d - c, 30.0));
}

use stratum::builder::{Layered, Link, NodeLabel, build_layer_graph};
use stratum::graph::NodeIx;
use stratum::order::init_order;

fn build(ranks: &[usize], links: &[(usize, usize)]) -> Layered {
    let nodes = ranks
        .iter()
        .map(|&r| NodeLabel::real(10.0, 10.0, r))
        .collect();
    let links: Vec<Link> = links
        .iter()
        .enumerate()
        .map(|(origin, &(from, to))| Link { from, to, origin })
        .collect();
    build_layer_graph(nodes, &links)
}

fn n(i: usize) -> NodeIx {
    NodeIx::new(i)
}

#[test]
fn init_order_visits_breadth_first_from_the_first_layer() {
    // A -> D, A -> C, B -> C: D is reached before C.
    let mut l = build(&[0, 0, 1, 1], &[(0, 3), (0, 2), (1, 2)]);
    init_order(&mut l);
    assert_eq!(l.layers, vec![vec![n(0), n(1)], vec![n(3), n(2)]]);
    assert_eq!(l.graph[n(3)].order, 0);
    assert_eq!(l.graph[n(2)].order, 1);
}

#[test]
fn init_order_appends_unreached_nodes_in_layer_order() {
    // Node 2 has a caller level of 1 but no incoming edge.
    let mut l = build(&[0, 1, 1, 2], &[(0, 1), (1, 3)]);
    init_order(&mut l);
    assert_eq!(l.layers[1], vec![n(1), n(2)]);
    assert_eq!(l.graph[n(2)].order, 1);
}

#[test]
fn init_order_follows_virtual_chains() {
    // A -> C spans two layers; B -> D is short.
    let mut l = build(&[0, 0, 2, 1], &[(0, 2), (1, 3)]);
    init_order(&mut l);
    let v = n(4);
    assert!(l.is_virtual(v));
    assert_eq!(l.layers[1], vec![v, n(3)]);
}

use stratum::builder::{Layered, Link, NodeLabel, build_layer_graph};
use stratum::graph::NodeIx;
use stratum::order::{assign_order, cross_count, transpose};

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
    let mut l = build_layer_graph(nodes, &links);
    assign_order(&mut l.graph, &l.layers);
    l
}

fn n(i: usize) -> NodeIx {
    NodeIx::new(i)
}

#[test]
fn transpose_swaps_a_crossing_pair() {
    let mut l = build(&[0, 0, 1, 1], &[(0, 3), (1, 2)]);
    assert_eq!(cross_count(&l.graph, &l.layers), 1);

    let rounds = transpose(&mut l, 10);
    assert_eq!(rounds, 2);
    assert_eq!(l.layers[0], vec![n(1), n(0)]);
    assert_eq!(l.layers[1], vec![n(2), n(3)]);
    assert_eq!(l.graph[n(1)].order, 0);
    assert_eq!(cross_count(&l.graph, &l.layers), 0);
}

#[test]
fn transpose_leaves_ties_alone() {
    // Swapping B and C neither adds nor removes crossings.
    let mut l = build(&[0, 1, 1, 2], &[(0, 1), (0, 2), (1, 3), (2, 3)]);
    let before = l.layers.clone();
    assert_eq!(transpose(&mut l, 10), 1);
    assert_eq!(l.layers, before);
}

#[test]
fn transpose_stops_after_max_rounds() {
    let mut l = build(&[0, 0, 1, 1], &[(0, 3), (1, 2)]);
    assert_eq!(transpose(&mut l, 1), 1);
    assert_eq!(transpose(&mut l, 0), 0);
}

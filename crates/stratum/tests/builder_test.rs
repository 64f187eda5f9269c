use stratum::builder::{Layered, Link, NodeLabel, build_layer_graph};
use stratum::graph::{EdgeIx, NodeIx};

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
fn build_places_nodes_in_their_layers() {
    let l = build(&[0, 1, 1, 2], &[(0, 1), (0, 2), (1, 3), (2, 3)]);
    assert_eq!(l.layers, vec![vec![n(0)], vec![n(1), n(2)], vec![n(3)]]);
    assert_eq!(l.real_count, 4);
    assert_eq!(l.virtual_count(), 0);
    assert_eq!(l.graph.edge_count(), 4);
}

#[test]
fn normalize_inserts_one_virtual_node_per_skipped_layer() {
    let l = build(&[0, 1, 2], &[(0, 1), (1, 2), (0, 2)]);
    assert_eq!(l.virtual_count(), 1);
    assert_eq!(l.layers, vec![vec![n(0)], vec![n(1), n(3)], vec![n(2)]]);

    let v = n(3);
    assert!(l.is_virtual(v));
    assert_eq!(l.graph[v].rank, 1);
    assert_eq!(l.graph.in_degree(v), 1);
    assert_eq!(l.graph.out_degree(v), 1);

    // The target's in-list keeps its slots: B first, then the chain.
    assert_eq!(l.graph.predecessors(n(2)).collect::<Vec<_>>(), vec![n(1), v]);
    assert_eq!(l.graph.successors(n(0)).collect::<Vec<_>>(), vec![n(1), v]);
}

#[test]
fn normalize_builds_a_chain_for_long_edges() {
    let l = build(&[0, 3], &[(0, 1)]);
    assert_eq!(l.virtual_count(), 2);
    assert_eq!(l.layers[1], vec![n(2)]);
    assert_eq!(l.layers[2], vec![n(3)]);
    assert_eq!(l.graph.successors(n(0)).collect::<Vec<_>>(), vec![n(2)]);
    assert_eq!(l.graph.successors(n(2)).collect::<Vec<_>>(), vec![n(3)]);
    assert_eq!(l.graph.successors(n(3)).collect::<Vec<_>>(), vec![n(1)]);
    for e in l.graph.edge_indices() {
        let (v, w) = l.graph.endpoints(e);
        assert_eq!(l.graph[v].rank + 1, l.graph[w].rank);
        assert_eq!(l.graph.edge(e).origin, 0);
    }
}

#[test]
fn backward_edges_are_laid_out_reversed() {
    let l = build(&[1, 0], &[(0, 1)]);
    let e = EdgeIx::new(0);
    assert_eq!(l.graph.endpoints(e), (n(1), n(0)));
    assert!(l.graph.edge(e).reversed);
    assert!(l.flat_links.is_empty());
}

#[test]
fn same_layer_edges_and_self_loops_are_flat() {
    let l = build(&[0, 0], &[(0, 1), (1, 1)]);
    assert_eq!(l.graph.edge_count(), 0);
    assert_eq!(l.flat_links.len(), 2);
    assert_eq!(l.flat_links[0].from, n(0));
    assert_eq!(l.flat_links[0].to, n(1));
    assert_eq!(l.flat_links[1].origin, 1);
}

#[test]
fn empty_input_builds_nothing() {
    let l = build(&[], &[]);
    assert!(l.layers.is_empty());
    assert_eq!(l.node_count(), 0);
}

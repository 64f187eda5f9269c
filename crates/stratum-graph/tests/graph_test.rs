use stratum_graph::{Graph, Interner, NodeIx};

fn path(g: &mut Graph<&'static str, ()>, labels: &[&'static str]) -> Vec<NodeIx> {
    let ids: Vec<NodeIx> = labels.iter().map(|l| g.add_node(*l)).collect();
    for w in ids.windows(2) {
        g.add_edge(w[0], w[1], ());
    }
    ids
}

#[test]
fn add_node_hands_out_dense_indices() {
    let mut g: Graph<&str, ()> = Graph::new();
    let a = g.add_node("a");
    let b = g.add_node("b");
    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(g.node_count(), 2);
    assert_eq!(g[a], "a");
}

#[test]
fn parallel_edges_and_self_loops_are_kept() {
    let mut g: Graph<(), u8> = Graph::new();
    let a = g.add_node(());
    let b = g.add_node(());
    g.add_edge(a, b, 1);
    g.add_edge(a, b, 2);
    g.add_edge(b, b, 3);

    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.successors(a).collect::<Vec<_>>(), vec![b, b]);
    assert_eq!(g.predecessors(b).collect::<Vec<_>>(), vec![a, a, b]);
    assert_eq!(g.in_degree(b), 3);
    assert_eq!(g.out_degree(b), 1);
}

#[test]
fn split_edge_preserves_adjacency_slots() {
    let mut g: Graph<&str, ()> = Graph::new();
    let ids = path(&mut g, &["a", "b"]);
    let (a, b) = (ids[0], ids[1]);
    let c = g.add_node("c");
    g.add_edge(c, b, ());
    let first = g.out_edges(a)[0];

    let (x, tail) = g.split_edge(first, "x", ());

    assert_eq!(g.out_edges(a), &[first]);
    assert_eq!(g.target(first), x);
    assert_eq!(g.endpoints(tail), (x, b));
    // `b` still lists the split edge first, ahead of `c -> b`.
    assert_eq!(g.predecessors(b).collect::<Vec<_>>(), vec![x, c]);
    assert_eq!(g.predecessors(x).collect::<Vec<_>>(), vec![a]);
    assert_eq!(g.successors(x).collect::<Vec<_>>(), vec![b]);
}

#[test]
fn split_edge_twice_builds_a_chain() {
    let mut g: Graph<&str, ()> = Graph::new();
    let ids = path(&mut g, &["a", "d"]);
    let e = g.out_edges(ids[0])[0];
    let (x1, tail) = g.split_edge(e, "x1", ());
    let (x2, _) = g.split_edge(tail, "x2", ());

    assert_eq!(g.successors(ids[0]).collect::<Vec<_>>(), vec![x1]);
    assert_eq!(g.successors(x1).collect::<Vec<_>>(), vec![x2]);
    assert_eq!(g.successors(x2).collect::<Vec<_>>(), vec![ids[1]]);
    assert_eq!(g.in_degree(ids[1]), 1);
}

#[test]
fn interner_assigns_first_insertion_order() {
    let mut keys: Interner<String> = Interner::new();
    assert_eq!(keys.intern("b".to_string()), (0, true));
    assert_eq!(keys.intern("a".to_string()), (1, true));
    assert_eq!(keys.intern("b".to_string()), (0, false));
    assert_eq!(keys.get("a"), Some(1));
    assert_eq!(keys.get("z"), None);
    assert_eq!(keys.keys(), &["b".to_string(), "a".to_string()]);
    assert_eq!(keys.key(1).map(String::as_str), Some("a"));
}

use stratum_graph::alg::{bfs, longest_path_levels, topological_order};
use stratum_graph::{Graph, NodeIx};

fn graph(n: usize, edges: &[(usize, usize)]) -> (Graph<(), ()>, Vec<NodeIx>) {
    let mut g: Graph<(), ()> = Graph::new();
    let ids: Vec<NodeIx> = (0..n).map(|_| g.add_node(())).collect();
    for &(v, w) in edges {
        g.add_edge(ids[v], ids[w], ());
    }
    (g, ids)
}

#[test]
fn levels_are_zero_without_edges() {
    let (g, _) = graph(4, &[]);
    assert_eq!(longest_path_levels(&g), vec![0, 0, 0, 0]);
}

#[test]
fn levels_follow_the_longest_path() {
    // 0 -> 1 -> 2 -> 3 and a shortcut 0 -> 3.
    let (g, _) = graph(4, &[(0, 1), (1, 2), (2, 3), (0, 3)]);
    assert_eq!(longest_path_levels(&g), vec![0, 1, 2, 3]);
}

#[test]
fn parallel_edges_count_towards_in_degree() {
    let (g, _) = graph(3, &[(0, 1), (0, 1), (1, 2)]);
    assert_eq!(longest_path_levels(&g), vec![0, 1, 2]);
}

#[test]
fn cycle_members_keep_their_last_proposal() {
    // r -> a, a <-> b, b -> c: `a` is raised once by `r` but never released.
    let (g, _) = graph(4, &[(0, 1), (1, 2), (2, 1), (2, 3)]);
    assert_eq!(longest_path_levels(&g), vec![0, 1, 0, 0]);
}

#[test]
fn self_loop_never_becomes_ready() {
    let (g, _) = graph(2, &[(0, 0), (0, 1)]);
    assert_eq!(longest_path_levels(&g), vec![0, 0]);
}

#[test]
fn topological_order_appends_cycle_members() {
    let (g, ids) = graph(4, &[(1, 2), (2, 1), (0, 3)]);
    assert_eq!(topological_order(&g), vec![ids[0], ids[3], ids[1], ids[2]]);
}

#[test]
fn bfs_visits_in_adjacency_order() {
    let (g, ids) = graph(5, &[(0, 2), (0, 1), (1, 3), (2, 4)]);
    assert_eq!(bfs(&g, [ids[0]]), vec![ids[0], ids[2], ids[1], ids[4], ids[3]]);
}

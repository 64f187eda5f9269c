//! Helper algorithms over [`Graph`].

use crate::{Graph, NodeIx};
use std::collections::VecDeque;

/// Longest-path leveling in Kahn order.
///
/// Every node starts at level 0. Sources (in-degree 0, counted per edge so parallel edges count
/// twice) are dequeued in index order; each outgoing edge `u -> v` raises `v` to at least
/// `level(u) + 1` and releases one unit of `v`'s in-degree. A node is enqueued when its in-degree
/// reaches zero. Nodes on a cycle (or behind one) never become ready and keep whatever level
/// they were last raised to, which is 0 if nothing ever reached them.
pub fn longest_path_levels<N, E>(g: &Graph<N, E>) -> Vec<usize> {
    let n = g.node_count();
    let mut remaining: Vec<usize> = g.node_indices().map(|v| g.in_degree(v)).collect();
    let mut levels: Vec<usize> = vec![0; n];

    let mut queue: VecDeque<NodeIx> = g
        .node_indices()
        .filter(|v| remaining[v.index()] == 0)
        .collect();

    while let Some(u) = queue.pop_front() {
        let next_level = levels[u.index()] + 1;
        for w in g.successors(u) {
            let slot = &mut levels[w.index()];
            *slot = (*slot).max(next_level);

            let deg = &mut remaining[w.index()];
            *deg = deg.saturating_sub(1);
            if *deg == 0 {
                queue.push_back(w);
            }
        }
    }

    levels
}

/// Kahn topological order. Nodes that sit on a cycle are appended afterwards in index order,
/// so the result always lists every node exactly once.
pub fn topological_order<N, E>(g: &Graph<N, E>) -> Vec<NodeIx> {
    let mut remaining: Vec<usize> = g.node_indices().map(|v| g.in_degree(v)).collect();
    let mut queue: VecDeque<NodeIx> = g
        .node_indices()
        .filter(|v| remaining[v.index()] == 0)
        .collect();
    let mut seen = vec![false; g.node_count()];
    let mut out: Vec<NodeIx> = Vec::with_capacity(g.node_count());

    while let Some(u) = queue.pop_front() {
        seen[u.index()] = true;
        out.push(u);
        for w in g.successors(u) {
            let deg = &mut remaining[w.index()];
            *deg = deg.saturating_sub(1);
            if *deg == 0 && !seen[w.index()] {
                queue.push_back(w);
            }
        }
    }

    if out.len() < g.node_count() {
        out.extend(g.node_indices().filter(|v| !seen[v.index()]));
    }
    out
}

/// Breadth-first visit order starting from `roots` (in the given order), following out-edges
/// in adjacency order. Each reachable node appears once.
pub fn bfs<N, E>(g: &Graph<N, E>, roots: impl IntoIterator<Item = NodeIx>) -> Vec<NodeIx> {
    let mut seen = vec![false; g.node_count()];
    let mut queue: VecDeque<NodeIx> = VecDeque::new();
    let mut out: Vec<NodeIx> = Vec::new();

    for r in roots {
        if !seen[r.index()] {
            seen[r.index()] = true;
            queue.push_back(r);
        }
    }

    while let Some(u) = queue.pop_front() {
        out.push(u);
        for w in g.successors(u) {
            if !seen[w.index()] {
                seen[w.index()] = true;
                queue.push_back(w);
            }
        }
    }

    out
}

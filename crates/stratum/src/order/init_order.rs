use super::assign_order;
use crate::builder::Layered;
use stratum_graph::NodeIx;
use stratum_graph::alg::bfs;

/// Breadth-first initial order.
///
/// The traversal starts from every node of layer 0 (in layer order) and follows out-edges in
/// adjacency order; each node is appended to its layer when first visited. Nodes the traversal
/// never reaches are appended afterwards in their current layer order.
pub fn init_order(layered: &mut Layered) {
    let g = &layered.graph;
    let roots: Vec<NodeIx> = layered.layers.first().cloned().unwrap_or_default();

    let mut next: Vec<Vec<NodeIx>> = vec![Vec::new(); layered.layers.len()];
    let mut placed = vec![false; g.node_count()];
    for v in bfs(g, roots) {
        placed[v.index()] = true;
        next[g[v].rank].push(v);
    }
    for (layer, out) in layered.layers.iter().zip(next.iter_mut()) {
        out.extend(layer.iter().copied().filter(|v| !placed[v.index()]));
    }

    layered.layers = next;
    assign_order(&mut layered.graph, &layered.layers);
}

use crate::builder::LayerGraph;
use stratum_graph::NodeIx;

/// Total crossings over every pair of adjacent layers.
///
/// Positions are read from each node's `order` field, so the layering must have been written
/// back with [`super::assign_order`] first.
pub fn cross_count(g: &LayerGraph, layering: &[Vec<NodeIx>]) -> usize {
    let mut cc: usize = 0;
    for i in 1..layering.len() {
        cc += two_layer_cross_count(g, &layering[i - 1], &layering[i]);
    }
    cc
}

/// Crossings between `north` and the layer right below it.
///
/// Edge endpoints in the south layer are listed north node by north node (each run sorted by
/// south position); the number of inversions in that sequence is the number of crossings.
/// Inversions are counted with an accumulator tree over south positions.
pub fn two_layer_cross_count(g: &LayerGraph, north: &[NodeIx], south: &[NodeIx]) -> usize {
    if south.is_empty() || north.is_empty() {
        return 0;
    }
    let south_rank = g[south[0]].rank;

    let mut south_entries: Vec<usize> = Vec::new();
    let mut run: Vec<usize> = Vec::new();
    for &v in north {
        run.clear();
        run.extend(
            g.successors(v)
                .filter(|&w| g[w].rank == south_rank)
                .map(|w| g[w].order),
        );
        run.sort_unstable();
        south_entries.extend_from_slice(&run);
    }

    let mut first_index: usize = 1;
    while first_index < south.len() {
        first_index <<= 1;
    }
    let tree_size = 2 * first_index - 1;
    first_index -= 1;
    let mut tree: Vec<usize> = vec![0; tree_size];

    let mut cc: usize = 0;
    for pos in south_entries {
        let mut index = pos + first_index;
        tree[index] += 1;
        let mut weight_sum: usize = 0;
        while index > 0 {
            if index % 2 == 1 {
                weight_sum += tree[index + 1];
            }
            index = (index - 1) >> 1;
            tree[index] += 1;
        }
        cc += weight_sum;
    }

    cc
}

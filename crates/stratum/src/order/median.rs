use super::Relationship;
use crate::builder::Layered;
use stratum_graph::NodeIx;

/// Median of sorted neighbour positions, `None` when there are no neighbours.
///
/// Odd counts take the middle value and two neighbours take their midpoint. For larger even
/// counts the two central values are interpolated, each weighted by the spread of positions on
/// the opposite side:
///
/// `(p[m-1] * right + p[m] * left) / (left + right)`
///
/// with `left = p[m-1] - p[0]` and `right = p[last] - p[m]`.
pub fn weighted_median(positions: &[usize]) -> Option<f64> {
    let n = positions.len();
    if n == 0 {
        return None;
    }
    let m = n / 2;
    if n % 2 == 1 {
        return Some(positions[m] as f64);
    }
    let lo = positions[m - 1] as f64;
    let hi = positions[m] as f64;
    if n == 2 {
        return Some((lo + hi) / 2.0);
    }

    let left = lo - positions[0] as f64;
    let right = positions[n - 1] as f64 - hi;
    if left + right == 0.0 {
        return Some((lo + hi) / 2.0);
    }
    Some((lo * right + hi * left) / (left + right))
}

/// Reorders layer `rank` by the weighted median of each node's neighbour positions in the
/// adjacent layer named by `relationship`.
///
/// Nodes with a median are stably sorted among themselves; nodes without neighbours keep their
/// slot. Returns `true` if the layer order changed.
pub fn median_sweep_layer(layered: &mut Layered, rank: usize, relationship: Relationship) -> bool {
    let g = &layered.graph;
    let layer = &layered.layers[rank];

    let mut positions: Vec<usize> = Vec::new();
    let mut medians: Vec<Option<f64>> = Vec::with_capacity(layer.len());
    for &v in layer {
        positions.clear();
        match relationship {
            Relationship::InEdges => positions.extend(g.predecessors(v).map(|u| g[u].order)),
            Relationship::OutEdges => positions.extend(g.successors(v).map(|w| g[w].order)),
        }
        positions.sort_unstable();
        medians.push(weighted_median(&positions));
    }

    let mut movable: Vec<(f64, NodeIx)> = layer
        .iter()
        .zip(&medians)
        .filter_map(|(&v, m)| m.map(|m| (m, v)))
        .collect();
    movable.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut sorted = movable.into_iter().map(|(_, v)| v);
    let next: Vec<NodeIx> = layer
        .iter()
        .zip(&medians)
        .map(|(&v, m)| match m {
            Some(_) => sorted.next().unwrap_or(v),
            None => v,
        })
        .collect();

    if next == *layer {
        return false;
    }
    for (i, &v) in next.iter().enumerate() {
        layered.graph[v].order = i;
    }
    layered.layers[rank] = next;
    true
}

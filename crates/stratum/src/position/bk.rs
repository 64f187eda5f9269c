//! Brandes & Köpf (BK) cross-axis coordinate assignment.
//!
//! Four alignment runs (upstream/downstream × start/end of layer) each group nodes into vertical
//! blocks and compact the blocks against each other. The runs are then shifted onto the
//! narrowest one and balanced into a single coordinate per node.
//!
//! All per-node state lives in arrays indexed by the layer graph's dense node index.

use crate::builder::LayerGraph;
use crate::options::Alignment as Run;
use rustc_hash::FxHashMap as HashMap;
use stratum_graph::alg::topological_order;
use stratum_graph::{EdgeIx, Graph, NodeIx};

/// Node pairs whose connecting segment may not be used for alignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conflicts {
    /// Sorted partners per lower-indexed endpoint.
    by_node: Vec<Vec<NodeIx>>,
}

impl Conflicts {
    pub fn new(node_count: usize) -> Self {
        Self {
            by_node: vec![Vec::new(); node_count],
        }
    }

    pub fn add(&mut self, v: NodeIx, w: NodeIx) {
        let (v, w) = if v <= w { (v, w) } else { (w, v) };
        if v.index() >= self.by_node.len() {
            self.by_node.resize(v.index() + 1, Vec::new());
        }
        let slot = &mut self.by_node[v.index()];
        if let Err(at) = slot.binary_search(&w) {
            slot.insert(at, w);
        }
    }

    pub fn contains(&self, v: NodeIx, w: NodeIx) -> bool {
        let (v, w) = if v <= w { (v, w) } else { (w, v) };
        self.by_node
            .get(v.index())
            .is_some_and(|slot| slot.binary_search(&w).is_ok())
    }

    pub fn merge(&mut self, other: &Conflicts) {
        for (v, ws) in other.by_node.iter().enumerate() {
            for &w in ws {
                self.add(NodeIx::new(v), w);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.by_node.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_node.iter().all(Vec::is_empty)
    }
}

/// For a virtual `v`, its virtual predecessor: the upper end of an inner segment.
fn other_inner_segment_node(g: &LayerGraph, v: NodeIx) -> Option<NodeIx> {
    if !g[v].dummy {
        return None;
    }
    g.predecessors(v).find(|&u| g[u].dummy)
}

/// Type-1 conflicts: a non-inner segment crossing an inner segment.
///
/// Each layer is cut at the lower ends of inner segments. Within a cut, a segment whose upper end
/// lies outside `[k0, k1]` (the upper ends of the inner segments bounding the cut) crosses one of
/// them and is marked.
pub fn find_type1_conflicts(g: &LayerGraph, layering: &[Vec<NodeIx>]) -> Conflicts {
    let mut conflicts = Conflicts::new(g.node_count());

    for i in 1..layering.len() {
        let prev_layer_len = layering[i - 1].len();
        let layer = &layering[i];
        let Some(last) = layer.len().checked_sub(1) else {
            continue;
        };

        let mut k0: usize = 0;
        let mut scan_pos: usize = 0;

        for (idx, &v) in layer.iter().enumerate() {
            let w = other_inner_segment_node(g, v);
            let k1 = w.map(|w| g[w].order).unwrap_or(prev_layer_len);

            if w.is_some() || idx == last {
                for &scan_node in &layer[scan_pos..=idx] {
                    let scan_dummy = g[scan_node].dummy;
                    for u in g.predecessors(scan_node) {
                        let u_pos = g[u].order;
                        if (u_pos < k0 || k1 < u_pos) && !(g[u].dummy && scan_dummy) {
                            conflicts.add(u, scan_node);
                        }
                    }
                }
                scan_pos = idx + 1;
                k0 = k1;
            }
        }
    }

    conflicts
}

/// Type-2 conflicts: inner segments crossing each other.
///
/// Scanning a layer in order, the upper ends of inner segments should not move left. An inner
/// segment whose upper end lies left of the rightmost one seen so far crosses it; the later
/// segment is marked and the earlier one keeps its alignment.
pub fn find_type2_conflicts(g: &LayerGraph, layering: &[Vec<NodeIx>]) -> Conflicts {
    let mut conflicts = Conflicts::new(g.node_count());

    for layer in layering.iter().skip(1) {
        let mut max_north: Option<usize> = None;
        for &v in layer {
            let Some(u) = other_inner_segment_node(g, v) else {
                continue;
            };
            let u_pos = g[u].order;
            match max_north {
                Some(max) if u_pos < max => conflicts.add(u, v),
                _ => max_north = Some(u_pos),
            }
        }
    }

    conflicts
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// Block root of every node.
    pub root: Vec<NodeIx>,
    /// Next node down the block; the last node points back at the root.
    pub align: Vec<NodeIx>,
}

/// Groups nodes into vertical blocks by aligning each node with the median of its `neighbors`
/// in the previously visited layer.
///
/// `layering` must already be arranged for the run: layers reversed for downstream runs, each
/// layer reversed for end-of-layer runs. A candidate is skipped when the pair conflicts, when the
/// node is already aligned, or when the link would cross the last one made in the layer.
pub fn vertical_alignment<F, I>(
    node_count: usize,
    layering: &[Vec<NodeIx>],
    conflicts: &Conflicts,
    neighbors: F,
) -> Alignment
where
    F: Fn(NodeIx) -> I,
    I: Iterator<Item = NodeIx>,
{
    let mut root: Vec<NodeIx> = (0..node_count).map(NodeIx::new).collect();
    let mut align: Vec<NodeIx> = root.clone();
    let mut pos: Vec<usize> = vec![0; node_count];

    for layer in layering {
        for (order, &v) in layer.iter().enumerate() {
            pos[v.index()] = order;
        }
    }

    let mut ws: Vec<NodeIx> = Vec::new();
    for layer in layering {
        let mut prev_idx: Option<usize> = None;
        for &v in layer {
            ws.clear();
            ws.extend(neighbors(v));
            if ws.is_empty() {
                continue;
            }
            ws.sort_by_key(|w| pos[w.index()]);

            let mp = (ws.len() - 1) as f64 / 2.0;
            let lo = mp.floor() as usize;
            let hi = mp.ceil() as usize;

            for &w in &ws[lo..=hi] {
                let w_pos = pos[w.index()];
                if align[v.index()] == v
                    && prev_idx.is_none_or(|p| p < w_pos)
                    && !conflicts.contains(v, w)
                {
                    align[w.index()] = v;
                    let w_root = root[w.index()];
                    align[v.index()] = w_root;
                    root[v.index()] = w_root;
                    prev_idx = Some(w_pos);
                }
            }
        }
    }

    Alignment { root, align }
}

/// Minimum center distance between layer neighbours `v` and `w` along the cross axis.
///
/// Real nodes pad themselves with half of `gap`, virtual nodes with an eighth of it.
pub fn sep(g: &LayerGraph, v: NodeIx, w: NodeIx, gap: f64) -> f64 {
    let half = |n: NodeIx| {
        let label = &g[n];
        let own_gap = if label.dummy { gap / 4.0 } else { gap };
        label.height / 2.0 + own_gap / 2.0
    };
    half(v) + half(w)
}

/// Block graph: one node per block root, an edge from each block to the next block in any
/// layer, weighted by the largest separation required between them.
fn build_block_graph(
    g: &LayerGraph,
    layering: &[Vec<NodeIx>],
    root: &[NodeIx],
    gap: f64,
) -> Graph<(), f64> {
    let mut block_g: Graph<(), f64> = Graph::with_capacity(g.node_count(), 0);
    for _ in 0..g.node_count() {
        block_g.add_node(());
    }

    let mut seen: HashMap<(NodeIx, NodeIx), EdgeIx> = HashMap::default();
    for layer in layering {
        for pair in layer.windows(2) {
            let (u, v) = (pair[0], pair[1]);
            let (u_root, v_root) = (root[u.index()], root[v.index()]);
            let s = sep(g, u, v, gap);
            match seen.get(&(u_root, v_root)) {
                Some(&e) => {
                    let prev = block_g.edge_mut(e);
                    *prev = (*prev).max(s);
                }
                None => {
                    let e = block_g.add_edge(u_root, v_root, s);
                    seen.insert((u_root, v_root), e);
                }
            }
        }
    }
    block_g
}

/// Places blocks as close to the start of their layers as separation allows, then pulls each
/// block towards its successors where slack permits. Returns one coordinate per node.
pub fn horizontal_compaction(
    g: &LayerGraph,
    layering: &[Vec<NodeIx>],
    root: &[NodeIx],
    gap: f64,
) -> Vec<f64> {
    let block_g = build_block_graph(g, layering, root, gap);
    let topo = topological_order(&block_g);
    let mut xs: Vec<f64> = vec![0.0; block_g.node_count()];

    for &v in &topo {
        let mut best: f64 = 0.0;
        for &e in block_g.in_edges(v) {
            let u = block_g.source(e);
            best = best.max(xs[u.index()] + *block_g.edge(e));
        }
        xs[v.index()] = best;
    }

    // shift
    for &v in topo.iter().rev() {
        let mut min: f64 = f64::INFINITY;
        for &e in block_g.out_edges(v) {
            let w = block_g.target(e);
            min = min.min(xs[w.index()] - *block_g.edge(e));
        }
        if min.is_finite() {
            xs[v.index()] = xs[v.index()].max(min);
        }
    }

    root.iter().map(|r| xs[r.index()]).collect()
}

/// Span of one run's coordinates, measured over node extents.
fn extent(g: &LayerGraph, xs: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for (i, &x) in xs.iter().enumerate() {
        let half = g[NodeIx::new(i)].height / 2.0;
        min = min.min(x - half);
        max = max.max(x + half);
    }
    (min, max)
}

/// Index of the run with the smallest span. Ties go to the earliest run in [`Run::ALL`].
pub fn find_smallest_width_alignment(g: &LayerGraph, xss: &[Vec<f64>; 4]) -> usize {
    let mut best_width = f64::INFINITY;
    let mut best = 0;
    for run in Run::ALL {
        let (min, max) = extent(g, &xss[run.index()]);
        let width = max - min;
        if width < best_width {
            best_width = width;
            best = run.index();
        }
    }
    best
}

/// Shifts every run so its start (left runs) or end (right runs) matches `align_to`.
pub fn align_coordinates(xss: &mut [Vec<f64>; 4], align_to: usize) {
    let fold = |xs: &[f64]| {
        xs.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        })
    };
    let (to_min, to_max) = fold(&xss[align_to]);

    for run in Run::ALL {
        let xs = &mut xss[run.index()];
        let (min, max) = fold(&xs[..]);
        let delta = if run.is_left() {
            to_min - min
        } else {
            to_max - max
        };
        if delta != 0.0 && delta.is_finite() {
            for x in xs.iter_mut() {
                *x += delta;
            }
        }
    }
}

/// Final coordinate per node: the selected run's value, or the mean of the two middle values.
pub fn balance(xss: &[Vec<f64>; 4], align: Option<Run>) -> Vec<f64> {
    if let Some(run) = align {
        return xss[run.index()].clone();
    }

    let n = xss[0].len();
    (0..n)
        .map(|i| {
            let mut vals = [xss[0][i], xss[1][i], xss[2][i], xss[3][i]];
            vals.sort_by(f64::total_cmp);
            (vals[1] + vals[2]) / 2.0
        })
        .collect()
}

/// Runs all four alignments and returns balanced cross-axis centers, one per node.
///
/// Expects `order` fields to match `layering`.
pub fn position_y(
    g: &LayerGraph,
    layering: &[Vec<NodeIx>],
    gap: f64,
    align: Option<Run>,
) -> Vec<f64> {
    let node_count = g.node_count();
    let mut conflicts = find_type1_conflicts(g, layering);
    conflicts.merge(&find_type2_conflicts(g, layering));
    tracing::trace!(conflicts = conflicts.len(), "bk conflicts");

    let mut xss: [Vec<f64>; 4] = Default::default();
    for run in Run::ALL {
        let mut adjusted: Vec<Vec<NodeIx>> = if run.is_up() {
            layering.to_vec()
        } else {
            layering.iter().rev().cloned().collect()
        };
        if !run.is_left() {
            for layer in &mut adjusted {
                layer.reverse();
            }
        }

        let alignment = if run.is_up() {
            vertical_alignment(node_count, &adjusted, &conflicts, |v| g.predecessors(v))
        } else {
            vertical_alignment(node_count, &adjusted, &conflicts, |v| g.successors(v))
        };

        let mut xs = horizontal_compaction(g, &adjusted, &alignment.root, gap);
        if !run.is_left() {
            for x in &mut xs {
                *x = -*x;
            }
        }
        xss[run.index()] = xs;
    }

    let smallest = find_smallest_width_alignment(g, &xss);
    align_coordinates(&mut xss, smallest);
    balance(&xss, align)
}

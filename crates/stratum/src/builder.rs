//! Graph builder: leveled nodes and edges into a layered adjacency graph.
//!
//! Long edges are normalized by inserting virtual nodes so that, afterwards, every edge joins
//! layer `i` to layer `i + 1`. Ordering and positioning then only ever look at adjacent layers.

use stratum_graph::{EdgeIx, Graph, NodeIx};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeLabel {
    pub width: f64,
    pub height: f64,
    pub rank: usize,
    /// Position within the layer, kept in sync with [`Layered::layers`] by the ordering phase.
    pub order: usize,
    /// Virtual nodes break long edges into single-layer hops. They have zero size.
    pub dummy: bool,
    pub x: f64,
    pub y: f64,
}

impl NodeLabel {
    pub fn real(width: f64, height: f64, rank: usize) -> Self {
        Self {
            width,
            height,
            rank,
            ..Default::default()
        }
    }

    fn virtual_at(rank: usize) -> Self {
        Self {
            rank,
            dummy: true,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeLabel {
    /// Index of the input edge this hop belongs to.
    pub origin: usize,
    /// The hop runs against the input edge's direction (its target sits on a lower level).
    pub reversed: bool,
}

pub type LayerGraph = Graph<NodeLabel, EdgeLabel>;

/// An input edge between two resolved nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub origin: usize,
}

/// An input edge whose endpoints share a layer. It takes no part in ordering or positioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatLink {
    pub from: NodeIx,
    pub to: NodeIx,
    pub origin: usize,
}

#[derive(Debug, Clone)]
pub struct Layered {
    pub graph: LayerGraph,
    /// `layers[i]` lists the nodes of layer `i`. Before ordering this is insertion order.
    pub layers: Vec<Vec<NodeIx>>,
    pub flat_links: Vec<FlatLink>,
    /// Nodes `0..real_count` are caller nodes; everything after is virtual.
    pub real_count: usize,
}

impl Layered {
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn virtual_count(&self) -> usize {
        self.graph.node_count() - self.real_count
    }

    pub fn is_virtual(&self, v: NodeIx) -> bool {
        self.graph[v].dummy
    }

    pub fn layer_of(&self, v: NodeIx) -> &[NodeIx] {
        &self.layers[self.graph[v].rank]
    }
}

/// Builds the layered graph. `nodes[i]` becomes internal node `i`; `links` reference those
/// indices. Links are added in the given order, which fixes adjacency order downstream.
pub fn build_layer_graph(nodes: Vec<NodeLabel>, links: &[Link]) -> Layered {
    let real_count = nodes.len();
    let layer_count = nodes.iter().map(|n| n.rank + 1).max().unwrap_or(0);

    let mut graph: LayerGraph = Graph::with_capacity(real_count, links.len());
    let mut layers: Vec<Vec<NodeIx>> = vec![Vec::new(); layer_count];
    for label in nodes {
        let rank = label.rank;
        let v = graph.add_node(label);
        layers[rank].push(v);
    }

    let mut flat_links: Vec<FlatLink> = Vec::new();
    for link in links {
        let v = NodeIx::new(link.from);
        let w = NodeIx::new(link.to);
        let (v_rank, w_rank) = (graph[v].rank, graph[w].rank);

        if v_rank == w_rank {
            flat_links.push(FlatLink {
                from: v,
                to: w,
                origin: link.origin,
            });
        } else if v_rank < w_rank {
            graph.add_edge(
                v,
                w,
                EdgeLabel {
                    origin: link.origin,
                    reversed: false,
                },
            );
        } else {
            graph.add_edge(
                w,
                v,
                EdgeLabel {
                    origin: link.origin,
                    reversed: true,
                },
            );
        }
    }

    let mut layered = Layered {
        graph,
        layers,
        flat_links,
        real_count,
    };
    normalize(&mut layered);
    layered
}

/// Inserts virtual nodes so every edge spans exactly one layer.
///
/// Layers are processed first to last. For `u` in layer `i`, an out-edge to `w` outside layer
/// `i + 1` is split: `u -> v` keeps the original slot, `v -> w` replaces `u` in `w`'s in-list,
/// and `v` joins layer `i + 1`. Because `v` is then visited with layer `i + 1`, a long edge grows
/// one virtual node per intermediate layer.
pub fn normalize(layered: &mut Layered) {
    let g = &mut layered.graph;
    for i in 0..layered.layers.len() {
        let mut j = 0;
        while j < layered.layers[i].len() {
            let u = layered.layers[i][j];
            let out: Vec<EdgeIx> = g.out_edges(u).to_vec();
            for e in out {
                let w = g.target(e);
                if g[w].rank == i + 1 {
                    continue;
                }
                let label = *g.edge(e);
                let (v, _) = g.split_edge(e, NodeLabel::virtual_at(i + 1), label);
                layered.layers[i + 1].push(v);
            }
            j += 1;
        }
    }
}

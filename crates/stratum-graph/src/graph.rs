//! Arena-backed directed multigraph.
//!
//! Unlike a key-addressed graph, lookups here are plain vector indexing: node and edge ids are
//! handed out densely by [`Graph::add_node`] / [`Graph::add_edge`] and never reused. Nothing is
//! ever removed; layout phases only grow the graph (virtual nodes) or rewire edges in place.

mod entries;
mod index;

use entries::{EdgeEntry, NodeEntry};
pub use index::{EdgeIx, NodeIx};

#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    nodes: Vec<NodeEntry<N>>,
    edges: Vec<EdgeEntry<E>>,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Graph<N, E> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn add_node(&mut self, label: N) -> NodeIx {
        let ix = NodeIx::new(self.nodes.len());
        self.nodes.push(NodeEntry {
            label,
            in_edges: Vec::new(),
            out_edges: Vec::new(),
        });
        ix
    }

    /// Adds a directed edge `v -> w`. Parallel edges and self-loops are kept as separate entries.
    pub fn add_edge(&mut self, v: NodeIx, w: NodeIx, label: E) -> EdgeIx {
        let e = EdgeIx::new(self.edges.len());
        self.edges.push(EdgeEntry { v, w, label });
        self.nodes[v.index()].out_edges.push(e);
        self.nodes[w.index()].in_edges.push(e);
        e
    }

    pub fn node(&self, v: NodeIx) -> &N {
        &self.nodes[v.index()].label
    }

    pub fn node_mut(&mut self, v: NodeIx) -> &mut N {
        &mut self.nodes[v.index()].label
    }

    pub fn try_node(&self, v: NodeIx) -> Option<&N> {
        self.nodes.get(v.index()).map(|n| &n.label)
    }

    pub fn edge(&self, e: EdgeIx) -> &E {
        &self.edges[e.index()].label
    }

    pub fn edge_mut(&mut self, e: EdgeIx) -> &mut E {
        &mut self.edges[e.index()].label
    }

    /// Returns `(source, target)` of `e`.
    pub fn endpoints(&self, e: EdgeIx) -> (NodeIx, NodeIx) {
        let entry = &self.edges[e.index()];
        (entry.v, entry.w)
    }

    pub fn source(&self, e: EdgeIx) -> NodeIx {
        self.edges[e.index()].v
    }

    pub fn target(&self, e: EdgeIx) -> NodeIx {
        self.edges[e.index()].w
    }

    pub fn node_indices(&self) -> impl DoubleEndedIterator<Item = NodeIx> + ExactSizeIterator {
        (0..self.nodes.len()).map(NodeIx::new)
    }

    pub fn edge_indices(&self) -> impl DoubleEndedIterator<Item = EdgeIx> + ExactSizeIterator {
        (0..self.edges.len()).map(EdgeIx::new)
    }

    pub fn out_edges(&self, v: NodeIx) -> &[EdgeIx] {
        &self.nodes[v.index()].out_edges
    }

    pub fn in_edges(&self, v: NodeIx) -> &[EdgeIx] {
        &self.nodes[v.index()].in_edges
    }

    pub fn out_degree(&self, v: NodeIx) -> usize {
        self.nodes[v.index()].out_edges.len()
    }

    pub fn in_degree(&self, v: NodeIx) -> usize {
        self.nodes[v.index()].in_edges.len()
    }

    /// Targets of `v`'s outgoing edges, in adjacency order (one entry per parallel edge).
    pub fn successors(&self, v: NodeIx) -> impl Iterator<Item = NodeIx> + '_ {
        self.nodes[v.index()]
            .out_edges
            .iter()
            .map(move |&e| self.edges[e.index()].w)
    }

    /// Sources of `v`'s incoming edges, in adjacency order (one entry per parallel edge).
    pub fn predecessors(&self, v: NodeIx) -> impl Iterator<Item = NodeIx> + '_ {
        self.nodes[v.index()]
            .in_edges
            .iter()
            .map(move |&e| self.edges[e.index()].v)
    }

    pub fn first_successor(&self, v: NodeIx) -> Option<NodeIx> {
        self.successors(v).next()
    }

    pub fn first_predecessor(&self, v: NodeIx) -> Option<NodeIx> {
        self.predecessors(v).next()
    }

    /// Splits `e = v -> w` by inserting a fresh node `x` between its endpoints.
    ///
    /// `v` keeps `e` at the same slot of its out-list, now pointing at `x`. A new edge
    /// `x -> w` takes over the slot `e` occupied in `w`'s in-list, so adjacency order on both
    /// sides is unchanged. Returns the new node and the new edge.
    pub fn split_edge(&mut self, e: EdgeIx, node: N, edge: E) -> (NodeIx, EdgeIx) {
        let w = self.edges[e.index()].w;
        let x = self.add_node(node);

        self.edges[e.index()].w = x;
        self.nodes[x.index()].in_edges.push(e);

        let tail = EdgeIx::new(self.edges.len());
        self.edges.push(EdgeEntry {
            v: x,
            w,
            label: edge,
        });
        self.nodes[x.index()].out_edges.push(tail);

        let slots = &mut self.nodes[w.index()].in_edges;
        if let Some(slot) = slots.iter_mut().find(|slot| **slot == e) {
            *slot = tail;
        } else {
            slots.push(tail);
        }

        (x, tail)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeIx, &N)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(ix, n)| (NodeIx::new(ix), &n.label))
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeIx, NodeIx, NodeIx, &E)> {
        self.edges
            .iter()
            .enumerate()
            .map(|(ix, e)| (EdgeIx::new(ix), e.v, e.w, &e.label))
    }
}

impl<N, E> std::ops::Index<NodeIx> for Graph<N, E> {
    type Output = N;

    fn index(&self, v: NodeIx) -> &N {
        self.node(v)
    }
}

impl<N, E> std::ops::IndexMut<NodeIx> for Graph<N, E> {
    fn index_mut(&mut self, v: NodeIx) -> &mut N {
        self.node_mut(v)
    }
}

impl<N, E> std::ops::Index<EdgeIx> for Graph<N, E> {
    type Output = E;

    fn index(&self, e: EdgeIx) -> &E {
        self.edge(e)
    }
}

//! Result extraction: virtual-node chains back into caller edges.
//!
//! Each input edge is emitted in input order. A chain whose nodes all share one cross-axis
//! coordinate becomes a single straight edge; otherwise its first and last virtual nodes are
//! kept as bend points and the edge is split into segments through them.

use crate::builder::Layered;
use crate::model::{Arrows, Edge, LayoutEdge, LayoutNode, LayoutResult, NodeKey};
use stratum_graph::NodeIx;

const STRAIGHT_EPSILON: f64 = 1e-9;

/// One input edge as laid out: its real endpoints in layout direction and the virtual nodes
/// between them.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Chain {
    start: NodeIx,
    end: NodeIx,
    virtuals: Vec<NodeIx>,
    reversed: bool,
}

fn collect_chains(layered: &Layered, edge_count: usize) -> Vec<Option<Chain>> {
    let g = &layered.graph;
    let mut chains: Vec<Option<Chain>> = vec![None; edge_count];

    for i in 0..layered.real_count {
        let start = NodeIx::new(i);
        for &e in g.out_edges(start) {
            let label = *g.edge(e);
            let mut virtuals = Vec::new();
            let mut cur = g.target(e);
            while g[cur].dummy {
                virtuals.push(cur);
                match g.first_successor(cur) {
                    Some(next) => cur = next,
                    None => break,
                }
            }
            if let Some(slot) = chains.get_mut(label.origin) {
                *slot = Some(Chain {
                    start,
                    end: cur,
                    virtuals,
                    reversed: label.reversed,
                });
            }
        }
    }

    for link in &layered.flat_links {
        if let Some(slot) = chains.get_mut(link.origin) {
            *slot = Some(Chain {
                start: link.from,
                end: link.to,
                virtuals: Vec::new(),
                reversed: false,
            });
        }
    }

    chains
}

fn is_straight(layered: &Layered, chain: &Chain) -> bool {
    let g = &layered.graph;
    let y0 = g[chain.start].y;
    chain
        .virtuals
        .iter()
        .chain(std::iter::once(&chain.end))
        .all(|&v| (g[v].y - y0).abs() <= STRAIGHT_EPSILON)
}

/// Builds the caller-facing result.
///
/// `ids[i]` names internal node `i` for `i < layered.real_count`; `edges` is the full input edge
/// list, indexed by each internal edge's `origin`. Input edges with no chain (dropped for unknown
/// endpoints) produce nothing. Bend numbers follow emission order.
pub fn extract<Id: Clone>(layered: &Layered, ids: &[Id], edges: &[Edge<Id>]) -> LayoutResult<Id> {
    let g = &layered.graph;
    let key_of = |v: NodeIx| NodeKey::Real(ids[v.index()].clone());

    let mut nodes: Vec<LayoutNode<Id>> = (0..layered.real_count)
        .map(|i| {
            let label = &g[NodeIx::new(i)];
            LayoutNode {
                key: NodeKey::Real(ids[i].clone()),
                level: label.rank,
                x: label.x,
                y: label.y,
                width: label.width,
                height: label.height,
            }
        })
        .collect();

    let mut out: Vec<LayoutEdge<Id>> = Vec::with_capacity(edges.len());
    let mut next_bend: usize = 0;

    for (origin, chain) in collect_chains(layered, edges.len()).into_iter().enumerate() {
        let Some(chain) = chain else {
            continue;
        };
        let arrows = edges[origin].arrows;
        let (from, to) = if chain.reversed {
            (chain.end, chain.start)
        } else {
            (chain.start, chain.end)
        };

        if chain.virtuals.is_empty() || is_straight(layered, &chain) {
            out.push(LayoutEdge {
                from: key_of(from),
                to: key_of(to),
                arrows,
                edge: origin,
            });
            continue;
        }

        let mut kept: Vec<NodeIx> = match chain.virtuals.as_slice() {
            [only] => vec![*only],
            [first, .., last] => vec![*first, *last],
            [] => Vec::new(),
        };
        if chain.reversed {
            kept.reverse();
        }

        let mut bend_keys: Vec<NodeKey<Id>> = Vec::with_capacity(kept.len());
        for v in kept {
            let label = &g[v];
            let key = NodeKey::Bend(next_bend);
            next_bend += 1;
            nodes.push(LayoutNode {
                key: key.clone(),
                level: label.rank,
                x: label.x,
                y: label.y,
                width: 0.0,
                height: 0.0,
            });
            bend_keys.push(key);
        }

        let base = arrows.unwrap_or_default();
        let mut hops: Vec<NodeKey<Id>> = Vec::with_capacity(bend_keys.len() + 2);
        hops.push(key_of(from));
        hops.extend(bend_keys);
        hops.push(key_of(to));

        let last = hops.len() - 2;
        for (i, pair) in hops.windows(2).enumerate() {
            let arrows = if i == 0 {
                base.entry()
            } else if i == last {
                base.exit()
            } else {
                Arrows::hidden()
            };
            out.push(LayoutEdge {
                from: pair[0].clone(),
                to: pair[1].clone(),
                arrows: Some(arrows),
                edge: origin,
            });
        }
    }

    tracing::debug!(segments = out.len(), bends = next_bend, "extracted");

    LayoutResult {
        nodes,
        edges: out,
        layer_count: layered.layers.len(),
        crossings: 0,
    }
}

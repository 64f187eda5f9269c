//! Deterministic layered graph layout.
//!
//! The pipeline runs leveling, graph building (with virtual nodes for long edges), crossing
//! reduction, Brandes & Köpf coordinate assignment and chain extraction. Layers run along `x`;
//! nodes within a layer are spread along `y`.

#![forbid(unsafe_code)]

pub use stratum_graph as graph;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod builder;
pub mod error;
pub mod extract;
pub mod level;
pub mod model;
pub mod options;
pub mod order;
pub mod position;

pub use error::{Error, Result};
pub use level::{Levels, assign_levels, assign_levels_with_overrides};
pub use model::{Arrows, Edge, LayoutEdge, LayoutNode, LayoutResult, Node, NodeKey, Point};
pub use options::{Alignment, LayoutOptions};

use builder::{Link, NodeLabel, build_layer_graph};
use std::hash::Hash;
use stratum_graph::alg::longest_path_levels;
use stratum_graph::{Graph, Interner, NodeIx};

fn node_size(value: Option<f64>, default: f64, index: usize, dimension: &'static str) -> Result<f64> {
    match value {
        None => Ok(default),
        Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Some(v) => Err(Error::InvalidNodeSize {
            index,
            dimension,
            value: v,
        }),
    }
}

/// Lays out `nodes` and `edges`.
///
/// Repeated node ids keep their first occurrence. Edges naming an unknown id are dropped.
/// Identical inputs always produce identical output.
pub fn layout<Id>(
    nodes: &[Node<Id>],
    edges: &[Edge<Id>],
    options: &LayoutOptions,
) -> Result<LayoutResult<Id>>
where
    Id: Clone + Eq + Hash,
{
    options.validate()?;
    let _span = tracing::debug_span!("layout", nodes = nodes.len(), edges = edges.len()).entered();

    let mut keys: Interner<Id> = Interner::with_capacity(nodes.len());
    let mut labels: Vec<NodeLabel> = Vec::with_capacity(nodes.len());
    let mut supplied: Vec<Option<usize>> = Vec::with_capacity(nodes.len());
    for (index, node) in nodes.iter().enumerate() {
        let (_, fresh) = keys.intern(node.id.clone());
        if !fresh {
            continue;
        }
        let width = node_size(node.width, options.default_node_width, index, "width")?;
        let height = node_size(node.height, options.default_node_height, index, "height")?;
        labels.push(NodeLabel::real(width, height, 0));
        supplied.push(node.level);
    }
    if labels.is_empty() {
        return Ok(LayoutResult::default());
    }

    let links: Vec<Link> = edges
        .iter()
        .enumerate()
        .filter_map(|(origin, edge)| {
            Some(Link {
                from: keys.get(&edge.from)?,
                to: keys.get(&edge.to)?,
                origin,
            })
        })
        .collect();
    if links.len() < edges.len() {
        tracing::debug!(dropped = edges.len() - links.len(), "edges with unknown endpoints");
    }

    let levels = {
        let _span = tracing::debug_span!("level").entered();
        let mut g: Graph<(), ()> = Graph::with_capacity(labels.len(), links.len());
        for _ in 0..labels.len() {
            g.add_node(());
        }
        for link in &links {
            g.add_edge(NodeIx::new(link.from), NodeIx::new(link.to), ());
        }
        level::resolve_levels(&supplied, &longest_path_levels(&g))
    };
    for (label, level) in labels.iter_mut().zip(levels) {
        label.rank = level;
    }

    let mut layered = {
        let _span = tracing::debug_span!("build").entered();
        let layered = build_layer_graph(labels, &links);
        tracing::debug!(
            layers = layered.layers.len(),
            virtual_nodes = layered.virtual_count(),
            flat = layered.flat_links.len(),
            "layer graph built"
        );
        layered
    };

    let stats = {
        let _span = tracing::debug_span!("order").entered();
        let enormous = options.is_enormous(layered.real_count, links.len());
        let stats = order::order(&mut layered, !enormous);
        tracing::debug!(
            sweeps = stats.sweeps,
            initial = stats.initial_crossings,
            crossings = stats.crossings,
            transposed = stats.transposed,
            "ordered"
        );
        stats
    };

    {
        let _span = tracing::debug_span!("position").entered();
        position::position(&mut layered, options);
    }

    let _span = tracing::debug_span!("extract").entered();
    let mut result = extract::extract(&layered, keys.keys(), edges);
    result.crossings = stats.crossings;
    Ok(result)
}

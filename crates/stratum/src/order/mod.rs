//! Node ordering / crossing reduction.
//!
//! Starts from a breadth-first order, then alternates median sweeps (previous layer on even
//! sweeps, next layer on odd ones) with local transposition, keeping the best order seen.

mod cross_count;
pub use cross_count::{cross_count, two_layer_cross_count};

mod init_order;
pub use init_order::init_order;

mod median;
pub use median::{median_sweep_layer, weighted_median};

mod transpose;
pub use transpose::transpose;

mod ordering;
pub use ordering::{MAX_SWEEPS, MAX_TRANSPOSE_ROUNDS, OrderStats, SWEEP_PATIENCE, order};

use crate::builder::LayerGraph;
use stratum_graph::NodeIx;

/// Which neighbouring layer a node is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    /// Predecessors, in the previous layer.
    InEdges,
    /// Successors, in the next layer.
    OutEdges,
}

/// Writes each node's position within its layer into its `order` field.
pub fn assign_order(g: &mut LayerGraph, layers: &[Vec<NodeIx>]) {
    for layer in layers {
        for (i, &v) in layer.iter().enumerate() {
            g[v].order = i;
        }
    }
}

use super::{Relationship, assign_order, cross_count, init_order, median_sweep_layer, transpose};
use crate::builder::Layered;
use stratum_graph::NodeIx;

/// Upper bound on median sweeps.
pub const MAX_SWEEPS: usize = 24;
/// Consecutive sweeps without a new best order before giving up.
pub const SWEEP_PATIENCE: usize = 4;
/// Upper bound on transpose rounds after each sweep.
pub const MAX_TRANSPOSE_ROUNDS: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderStats {
    /// Crossings of the breadth-first starting order.
    pub initial_crossings: usize,
    /// Crossings of the order that was kept.
    pub crossings: usize,
    pub sweeps: usize,
    /// Whether transposition ran (it is skipped for enormous graphs).
    pub transposed: bool,
}

/// Orders every layer to reduce crossings and writes the result back into `layered`.
///
/// The breadth-first order is the first candidate. Each sweep replaces the current order, and it
/// becomes the new best only if it has strictly fewer crossings, so the kept order never has more
/// crossings than the starting one and ties go to the earliest order found.
pub fn order(layered: &mut Layered, transpose_enabled: bool) -> OrderStats {
    init_order(layered);

    let initial = cross_count(&layered.graph, &layered.layers);
    let mut stats = OrderStats {
        initial_crossings: initial,
        crossings: initial,
        sweeps: 0,
        transposed: transpose_enabled,
    };
    if layered.layers.len() < 2 || initial == 0 {
        return stats;
    }

    let mut best: Vec<Vec<NodeIx>> = layered.layers.clone();
    let mut best_cc = initial;
    let mut stale: usize = 0;
    let layer_count = layered.layers.len();

    for sweep in 0..MAX_SWEEPS {
        stats.sweeps = sweep + 1;
        if sweep % 2 == 0 {
            for rank in 1..layer_count {
                median_sweep_layer(layered, rank, Relationship::InEdges);
            }
        } else {
            for rank in (0..layer_count - 1).rev() {
                median_sweep_layer(layered, rank, Relationship::OutEdges);
            }
        }
        if transpose_enabled {
            transpose(layered, MAX_TRANSPOSE_ROUNDS);
        }

        let cc = cross_count(&layered.graph, &layered.layers);
        tracing::trace!(sweep, crossings = cc, best = best_cc, "order sweep");
        if cc < best_cc {
            best_cc = cc;
            best.clone_from(&layered.layers);
            stale = 0;
        } else {
            stale += 1;
        }

        if best_cc == 0 || stale >= SWEEP_PATIENCE {
            break;
        }
    }

    layered.layers = best;
    assign_order(&mut layered.graph, &layered.layers);
    stats.crossings = best_cc;
    stats
}

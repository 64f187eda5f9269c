//! Coordinate assignment.
//!
//! The cross axis (`y`) comes from the four-run BK scheme in [`bk`]. The layering axis (`x`) is a
//! uniform step per layer derived from the cross-axis extent.

use crate::builder::Layered;
use crate::options::LayoutOptions;
use stratum_graph::NodeIx;

pub mod bk;

/// Writes `x`/`y` centers into every node label and returns the layer step used.
pub fn position(layered: &mut Layered, options: &LayoutOptions) -> f64 {
    let ys = bk::position_y(
        &layered.graph,
        &layered.layers,
        options.node_vertical_gap,
        options.align,
    );

    let g = &mut layered.graph;
    let mut top = f64::INFINITY;
    for (i, &y) in ys.iter().enumerate() {
        let half = g.node(NodeIx::new(i)).height / 2.0;
        top = top.min(y - half);
    }
    if !top.is_finite() {
        top = 0.0;
    }

    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for (i, &y) in ys.iter().enumerate() {
        let y = y - top;
        min_y = min_y.min(y);
        max_y = max_y.max(y);
        g.node_mut(NodeIx::new(i)).y = y;
    }

    let layer_count = layered.layers.len().max(1) as f64;
    let spread = if max_y >= min_y { max_y - min_y } else { 0.0 };
    let step = options.horizontal_gap().max(spread / layer_count) * options.layer_spacing_factor;

    for (rank, layer) in layered.layers.iter().enumerate() {
        for &v in layer {
            g.node_mut(v).x = rank as f64 * step;
        }
    }

    tracing::debug!(step, extent = spread, "positioned");
    step
}

//! Maps a [`LayoutResult`] onto caller blocks and connections.

use crate::error::{Error, Result};
use crate::index::ConnectionIndex;
use crate::model::{Block, BlockPosition, CanvasLayout, Route};
use rustc_hash::FxHashMap as HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use stratum::{LayoutEdge, LayoutResult, NodeKey, Point};

fn unknown<B: Debug>(id: &B) -> Error {
    Error::UnknownBlock {
        id: format!("{id:?}"),
    }
}

/// Converts node centers into block top-left corners and each laid out edge into a route.
///
/// Block sizes come from `blocks`, not from the layout result. A route runs from the middle of
/// the source block's right edge, through any bend points, to the middle of the target block's
/// left edge. Its id is taken from `index`; edges whose pair has no id left are skipped.
pub fn convert<B, C>(
    result: &LayoutResult<B>,
    blocks: &[Block<B>],
    index: &mut ConnectionIndex<B, C>,
) -> Result<CanvasLayout<B, C>>
where
    B: Clone + Eq + Hash + Debug,
    C: Clone,
{
    let mut sizes: HashMap<&B, &Block<B>> = HashMap::default();
    for block in blocks {
        sizes.entry(&block.id).or_insert(block);
    }
    let centers: HashMap<&NodeKey<B>, Point> =
        result.nodes.iter().map(|n| (&n.key, n.center())).collect();

    let mut positions: Vec<BlockPosition<B>> = Vec::with_capacity(result.nodes.len());
    for node in &result.nodes {
        let NodeKey::Real(id) = &node.key else {
            continue;
        };
        let block = sizes.get(id).ok_or_else(|| unknown(id))?;
        positions.push(BlockPosition {
            id: id.clone(),
            x: node.x - block.width / 2.0,
            y: node.y - block.height / 2.0,
        });
    }

    let mut routes: Vec<Route<C>> = Vec::new();
    for segments in result.edges.chunk_by(|a, b| a.edge == b.edge) {
        let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
            continue;
        };
        let (Some(source), Some(target)) = (first.from.real(), last.to.real()) else {
            continue;
        };

        let Some(id) = index.take(source, target) else {
            tracing::debug!(edge = first.edge, "no connection id for laid out edge");
            continue;
        };

        let anchor = |id: &B, side: f64| -> Result<Point> {
            let block = sizes.get(id).ok_or_else(|| unknown(id))?;
            let c = centers
                .get(&NodeKey::Real(id.clone()))
                .copied()
                .ok_or_else(|| unknown(id))?;
            Ok(Point {
                x: c.x + side * block.width / 2.0,
                y: c.y,
            })
        };

        let mut points = Vec::with_capacity(segments.len() + 1);
        points.push(anchor(source, 1.0)?);
        points.extend(bends(segments).filter_map(|k| centers.get(k).copied()));
        points.push(anchor(target, -1.0)?);
        routes.push(Route { id, points });
    }

    Ok(CanvasLayout {
        blocks: positions,
        routes,
        generation: 0,
    })
}

/// Bend points along one edge's segments, in order.
fn bends<B>(segments: &[LayoutEdge<B>]) -> impl Iterator<Item = &NodeKey<B>> {
    segments.iter().skip(1).map(|s| &s.from)
}

use serde::{Deserialize, Serialize};
use stratum::Point;

/// A caller block. `width`/`height` are used both for layout and for edge anchors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block<B> {
    pub id: B,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<usize>,
}

impl<B> Block<B> {
    pub fn new(id: B, width: f64, height: f64) -> Self {
        Self {
            id,
            width,
            height,
            level: None,
        }
    }

    pub fn with_level(mut self, level: usize) -> Self {
        self.level = Some(level);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<B, C> {
    pub id: C,
    pub source: B,
    pub target: B,
}

impl<B, C> Connection<B, C> {
    pub fn new(id: C, source: B, target: B) -> Self {
        Self { id, source, target }
    }
}

/// Top-left corner of a laid out block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockPosition<B> {
    pub id: B,
    pub x: f64,
    pub y: f64,
}

/// Polyline for one connection: source anchor, bend points, target anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route<C> {
    pub id: C,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasLayout<B, C> {
    pub blocks: Vec<BlockPosition<B>>,
    pub routes: Vec<Route<C>>,
    /// Set by [`crate::LayoutDriver`]; 0 for layouts built directly.
    pub generation: u64,
}

impl<B: PartialEq, C: PartialEq> CanvasLayout<B, C> {
    pub fn block(&self, id: &B) -> Option<&BlockPosition<B>> {
        self.blocks.iter().find(|b| &b.id == id)
    }

    pub fn route(&self, id: &C) -> Option<&Route<C>> {
        self.routes.iter().find(|r| &r.id == id)
    }
}

//! Caller-facing input and output types.
//!
//! Inputs are plain node/edge lists keyed by an opaque caller id. Outputs mirror them: one
//! [`LayoutNode`] per distinct input node (plus any bend points kept from long edges) and one or
//! more [`LayoutEdge`] segments per input edge.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node<Id> {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl<Id> Node<Id> {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            level: None,
            width: None,
            height: None,
        }
    }

    pub fn with_level(mut self, level: usize) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

/// Which ends of an edge draw a direction marker. `None` leaves the choice to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrows {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<bool>,
}

impl Arrows {
    /// Arrows for a segment that leaves the true source but ends on a bend point.
    pub fn entry(self) -> Self {
        Self {
            from: self.from,
            to: Some(false),
        }
    }

    /// Arrows for a segment that starts on a bend point and reaches the true target.
    pub fn exit(self) -> Self {
        Self {
            from: Some(false),
            to: self.to,
        }
    }

    pub fn hidden() -> Self {
        Self {
            from: Some(false),
            to: Some(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge<Id> {
    pub from: Id,
    pub to: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrows: Option<Arrows>,
}

impl<Id> Edge<Id> {
    pub fn new(from: Id, to: Id) -> Self {
        Self {
            from,
            to,
            arrows: None,
        }
    }

    pub fn with_arrows(mut self, arrows: Arrows) -> Self {
        self.arrows = Some(arrows);
        self
    }
}

/// Identity of an output node: a caller node, or a bend point kept from a long edge.
///
/// Bend numbers are dense and follow the order in which edges were supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKey<Id> {
    Real(Id),
    Bend(usize),
}

impl<Id> NodeKey<Id> {
    pub fn real(&self) -> Option<&Id> {
        match self {
            NodeKey::Real(id) => Some(id),
            NodeKey::Bend(_) => None,
        }
    }

    pub fn is_bend(&self) -> bool {
        matches!(self, NodeKey::Bend(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A positioned node. `x`/`y` are the node center; `x` runs along the layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutNode<Id> {
    pub key: NodeKey<Id>,
    pub level: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl<Id> LayoutNode<Id> {
    pub fn center(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }
}

/// One drawn segment. `edge` is the index of the input edge the segment belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutEdge<Id> {
    pub from: NodeKey<Id>,
    pub to: NodeKey<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrows: Option<Arrows>,
    pub edge: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult<Id> {
    pub nodes: Vec<LayoutNode<Id>>,
    pub edges: Vec<LayoutEdge<Id>>,
    pub layer_count: usize,
    /// Crossings between adjacent layers in the chosen ordering.
    pub crossings: usize,
}

impl<Id> Default for LayoutResult<Id> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            layer_count: 0,
            crossings: 0,
        }
    }
}

impl<Id: PartialEq> LayoutResult<Id> {
    pub fn node(&self, id: &Id) -> Option<&LayoutNode<Id>> {
        self.nodes.iter().find(|n| n.key.real() == Some(id))
    }

    pub fn bend(&self, n: usize) -> Option<&LayoutNode<Id>> {
        self.nodes.iter().find(|node| node.key == NodeKey::Bend(n))
    }
}

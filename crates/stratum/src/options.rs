//! Layout configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NODE_WIDTH: f64 = 100.0;
pub const DEFAULT_NODE_HEIGHT: f64 = 100.0;
pub const DEFAULT_NODE_VERTICAL_GAP: f64 = 200.0;
pub const DEFAULT_LAYER_SPACING_FACTOR: f64 = 1.7;
pub const DEFAULT_ENORMOUS_GRAPH_NODE_THRESHOLD: usize = 700;
pub const DEFAULT_ENORMOUS_GRAPH_EDGE_THRESHOLD: usize = 3000;

/// One of the four alignment runs of coordinate assignment.
///
/// `Up*` aligns each node with its upstream (previous layer) neighbours, `Down*` with its
/// downstream ones; `*Left`/`*Right` compacts towards the start or the end of each layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    #[serde(rename = "ul")]
    UpLeft,
    #[serde(rename = "ur")]
    UpRight,
    #[serde(rename = "dl")]
    DownLeft,
    #[serde(rename = "dr")]
    DownRight,
}

impl Alignment {
    /// Fixed evaluation order; also the tie-break order when picking the narrowest run.
    pub const ALL: [Alignment; 4] = [
        Alignment::UpLeft,
        Alignment::UpRight,
        Alignment::DownLeft,
        Alignment::DownRight,
    ];

    pub fn index(self) -> usize {
        match self {
            Alignment::UpLeft => 0,
            Alignment::UpRight => 1,
            Alignment::DownLeft => 2,
            Alignment::DownRight => 3,
        }
    }

    pub fn is_up(self) -> bool {
        matches!(self, Alignment::UpLeft | Alignment::UpRight)
    }

    pub fn is_left(self) -> bool {
        matches!(self, Alignment::UpLeft | Alignment::DownLeft)
    }
}

impl std::str::FromStr for Alignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ul" => Ok(Self::UpLeft),
            "ur" => Ok(Self::UpRight),
            "dl" => Ok(Self::DownLeft),
            "dr" => Ok(Self::DownRight),
            _ => Err(Error::InvalidAlignment {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutOptions {
    /// Minimum distance between layers. Defaults to twice `default_node_width`.
    pub node_horizontal_gap: Option<f64>,
    pub node_vertical_gap: f64,
    pub default_node_width: f64,
    pub default_node_height: f64,
    pub layer_spacing_factor: f64,
    pub enormous_graph_node_threshold: usize,
    pub enormous_graph_edge_threshold: usize,
    /// Use a single alignment run instead of balancing all four.
    pub align: Option<Alignment>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            node_horizontal_gap: None,
            node_vertical_gap: DEFAULT_NODE_VERTICAL_GAP,
            default_node_width: DEFAULT_NODE_WIDTH,
            default_node_height: DEFAULT_NODE_HEIGHT,
            layer_spacing_factor: DEFAULT_LAYER_SPACING_FACTOR,
            enormous_graph_node_threshold: DEFAULT_ENORMOUS_GRAPH_NODE_THRESHOLD,
            enormous_graph_edge_threshold: DEFAULT_ENORMOUS_GRAPH_EDGE_THRESHOLD,
            align: None,
        }
    }
}

impl LayoutOptions {
    pub fn horizontal_gap(&self) -> f64 {
        self.node_horizontal_gap
            .unwrap_or(2.0 * self.default_node_width)
    }

    /// Graphs above either threshold skip the transpose refinement during ordering.
    pub fn is_enormous(&self, nodes: usize, edges: usize) -> bool {
        nodes > self.enormous_graph_node_threshold || edges > self.enormous_graph_edge_threshold
    }

    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("nodeHorizontalGap", self.horizontal_gap()),
            ("nodeVerticalGap", self.node_vertical_gap),
            ("defaultNodeWidth", self.default_node_width),
            ("defaultNodeHeight", self.default_node_height),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::InvalidOption { name, value });
            }
        }

        let factor = self.layer_spacing_factor;
        if !(factor.is_finite() && factor > 0.0) {
            return Err(Error::InvalidOption {
                name: "layerSpacingFactor",
                value: factor,
            });
        }
        Ok(())
    }
}

use crate::convert::convert;
use crate::error::{Error, Result};
use crate::index::ConnectionIndex;
use crate::levels::compute_levels;
use crate::model::{Block, CanvasLayout, Connection};
use std::any::Any;
use std::fmt::Debug;
use std::hash::Hash;
use std::panic::{AssertUnwindSafe, catch_unwind};
use stratum::{Edge, LayoutOptions, Node};

/// Runs level derivation, layout and conversion in one go.
pub fn arrange<B, C>(
    blocks: &[Block<B>],
    connections: &[Connection<B, C>],
    options: &LayoutOptions,
) -> Result<CanvasLayout<B, C>>
where
    B: Clone + Eq + Hash + Debug,
    C: Clone,
{
    let levels = compute_levels(blocks, connections);
    let nodes: Vec<Node<B>> = blocks
        .iter()
        .map(|b| Node {
            id: b.id.clone(),
            level: levels.get(&b.id).copied(),
            width: Some(b.width),
            height: Some(b.height),
        })
        .collect();
    let edges: Vec<Edge<B>> = connections
        .iter()
        .map(|c| Edge::new(c.source.clone(), c.target.clone()))
        .collect();

    let result = stratum::layout(&nodes, &edges, options)?;
    let mut index = ConnectionIndex::new(connections);
    convert(&result, blocks, &mut index)
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Keeps the last good layout of a changing block diagram.
///
/// A failed relayout (an error or a panic inside the engine) leaves the previous layout in place,
/// so a caller can keep drawing it.
#[derive(Debug, Clone)]
pub struct LayoutDriver<B, C> {
    options: LayoutOptions,
    current: Option<CanvasLayout<B, C>>,
    generation: u64,
}

impl<B, C> Default for LayoutDriver<B, C> {
    fn default() -> Self {
        Self::new(LayoutOptions::default())
    }
}

impl<B, C> LayoutDriver<B, C> {
    pub fn new(options: LayoutOptions) -> Self {
        Self {
            options,
            current: None,
            generation: 0,
        }
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: LayoutOptions) {
        self.options = options;
    }

    pub fn current(&self) -> Option<&CanvasLayout<B, C>> {
        self.current.as_ref()
    }

    /// Number of successful relayouts so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<B, C> LayoutDriver<B, C>
where
    B: Clone + Eq + Hash + Debug,
    C: Clone,
{
    pub fn relayout_sync(
        &mut self,
        blocks: &[Block<B>],
        connections: &[Connection<B, C>],
    ) -> Result<&CanvasLayout<B, C>> {
        let options = &self.options;
        let outcome = catch_unwind(AssertUnwindSafe(|| arrange(blocks, connections, options)));

        let mut layout = match outcome {
            Ok(Ok(layout)) => layout,
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "relayout failed; keeping previous layout");
                return Err(err);
            }
            Err(payload) => {
                let message = panic_message(payload);
                tracing::warn!(%message, "relayout panicked; keeping previous layout");
                return Err(Error::Internal { message });
            }
        };

        self.generation += 1;
        layout.generation = self.generation;
        tracing::debug!(
            generation = self.generation,
            blocks = layout.blocks.len(),
            routes = layout.routes.len(),
            "relayout"
        );
        Ok(&*self.current.insert(layout))
    }

    pub async fn relayout(
        &mut self,
        blocks: &[Block<B>],
        connections: &[Connection<B, C>],
    ) -> Result<&CanvasLayout<B, C>> {
        self.relayout_sync(blocks, connections)
    }
}

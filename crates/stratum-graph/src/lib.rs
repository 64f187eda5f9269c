#![forbid(unsafe_code)]

//! Graph container APIs used by `stratum`.
//!
//! Nodes and edges live in flat arenas and are addressed by dense indices assigned at insertion
//! time. Adjacency lists keep insertion order (parallel edges and self-loops included), so every
//! traversal over this graph is deterministic without relying on hash iteration order.

mod graph;
mod interner;

pub mod alg;

pub use graph::{EdgeIx, Graph, NodeIx};
pub use interner::Interner;

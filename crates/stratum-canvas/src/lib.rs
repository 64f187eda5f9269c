//! Block diagram front end for the `stratum` layout engine.
//!
//! Callers describe their canvas as sized [`Block`]s and [`Connection`]s with their own id
//! types. This crate derives missing levels, runs the layout, and maps the result back onto
//! block corners and connection routes.

#![forbid(unsafe_code)]

mod convert;
mod driver;
mod error;
mod index;
mod levels;
pub mod model;

pub use convert::convert;
pub use driver::{LayoutDriver, arrange};
pub use error::{Error, Result};
pub use index::ConnectionIndex;
pub use levels::compute_levels;
pub use model::{Block, BlockPosition, CanvasLayout, Connection, Route};

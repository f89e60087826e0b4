//! Chaos-game point generation.
//!
//! The chaos game builds an approximation of the Sierpinski gasket by
//! repeatedly moving a running point halfway toward a randomly chosen vertex
//! of a fixed triangle. The full point sequence is materialized once and
//! handed to the renderer as an immutable buffer.

mod generator;
mod triangle;

pub use generator::{ChaosGame, UniformPicker, VertexPicker};
pub use triangle::Triangle;

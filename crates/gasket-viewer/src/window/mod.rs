//! Platform window + event loop driving the viewer.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};

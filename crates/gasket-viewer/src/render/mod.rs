//! Point-cloud rendering.
//!
//! The generated points are already in NDC (the default triangle spans
//! [-1, 1] on both axes), so the vertex stage is a pass-through and the
//! whole cloud draws in a single `PointList` pass.

mod ctx;
mod points;

pub use ctx::{RenderCtx, RenderTarget};
pub use points::PointCloudRenderer;

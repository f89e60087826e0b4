//! GPU device + surface management.
//!
//! Responsible for:
//! - creating the wgpu Adapter/Device/Queue for one window
//! - configuring the Surface (swapchain) and tracking resizes
//! - acquiring frames and submitting recorded commands

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};

//! Sierpinski gasket viewer.
//!
//! Generates the chaos-game point cloud once at startup, then hands the
//! immutable buffer to the render loop, which draws it as GPU points every
//! frame.

mod config;
mod device;
mod logging;
mod render;
mod window;

use std::time::Instant;

use anyhow::Result;
use gasket_core::chaos::{ChaosGame, UniformPicker};
use winit::dpi::LogicalSize;

use crate::config::ViewerConfig;
use crate::device::GpuInit;
use crate::window::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    logging::init_logging(None);

    let config = ViewerConfig::default();

    let game = ChaosGame::new(config.triangle, config.point_count)
        .with_seed_point(config.seed_point);

    let started = Instant::now();
    let points = game.generate(&mut UniformPicker::from_entropy());
    log::info!(
        "generated {} chaos-game points in {:.2?}",
        points.len(),
        started.elapsed()
    );

    Runtime::run(
        RuntimeConfig {
            title: config.title,
            initial_size: LogicalSize::new(config.window_size.0, config.window_size.1),
            clear_color: config.clear_color,
        },
        GpuInit::default(),
        points,
    )
}

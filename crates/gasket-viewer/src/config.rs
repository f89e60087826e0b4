use gasket_core::chaos::{ChaosGame, Triangle};
use gasket_core::math::Vec2;

/// Top-level viewer configuration.
///
/// Everything the run needs is carried explicitly — no ambient globals. The
/// defaults reproduce the original gasket demo: an 800×600 window, 20 000
/// points over the NDC-spanning triangle, seed (0.25, 0.50), white clear.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,
    pub window_size: (f64, f64),
    pub point_count: usize,
    pub triangle: Triangle,
    pub seed_point: Vec2,
    pub clear_color: wgpu::Color,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Sierpinski Gasket".to_string(),
            window_size: (800.0, 600.0),
            point_count: ChaosGame::DEFAULT_POINT_COUNT,
            triangle: Triangle::default(),
            seed_point: ChaosGame::DEFAULT_SEED_POINT,
            clear_color: wgpu::Color::WHITE,
        }
    }
}

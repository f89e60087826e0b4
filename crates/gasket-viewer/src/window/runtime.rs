use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use gasket_core::math::Vec2;

use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::render::{PointCloudRenderer, RenderCtx, RenderTarget};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub clear_color: wgpu::Color,
}

/// Entry point for the render loop.
pub struct Runtime;

impl Runtime {
    /// Runs the event loop until the window is closed.
    ///
    /// `points` is the finished chaos-game buffer: uploaded to the GPU once,
    /// never mutated or regenerated during the run.
    pub fn run(config: RuntimeConfig, gpu_init: GpuInit, points: Vec<Vec2>) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = ViewerState::new(config, gpu_init, points);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct ViewerState {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    points: Vec<Vec2>,

    renderer: PointCloudRenderer,
    entry: Option<WindowEntry>,
    exit_requested: bool,
}

impl ViewerState {
    fn new(config: RuntimeConfig, gpu_init: GpuInit, points: Vec<Vec2>) -> Self {
        Self {
            config,
            gpu_init,
            points,
            renderer: PointCloudRenderer::new(),
            entry: None,
            exit_requested: false,
        }
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        // Setup failures past this point are unrecoverable by design; abort
        // instead of retrying.
        let entry = WindowEntryBuilder {
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init)).expect("GPU initialization failed")
            },
        }
        .build();

        self.entry = Some(entry);
        Ok(())
    }

    fn draw_frame(&mut self) {
        let (renderer, points, clear) = (
            &mut self.renderer,
            self.points.as_slice(),
            self.config.clear_color,
        );

        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        // Track fatal surface errors without mutating `self` in the closure.
        let mut fatal = false;

        entry.with_mut(|fields| {
            let gpu = fields.gpu;

            let mut frame = match gpu.begin_frame() {
                Ok(frame) => frame,
                Err(err) => {
                    if gpu.handle_surface_error(err) == SurfaceErrorAction::Fatal {
                        fatal = true;
                    }
                    return;
                }
            };

            let ctx = RenderCtx::new(gpu.device(), gpu.surface_format());

            // RenderTarget borrows the encoder; dropped before submit()
            // takes the frame.
            {
                let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
                renderer.render(&ctx, &mut target, clear, points);
            }

            fields.window.pre_present_notify();
            gpu.submit(frame);
        });

        if fatal {
            log::error!("unrecoverable surface error; exiting");
            self.exit_requested = true;
        }
    }
}

impl ApplicationHandler for ViewerState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            log::error!("failed to create window: {e:#}");
            self.exit_requested = true;
            event_loop.exit();
            return;
        }

        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // The cloud is static, but redrawing on every wake keeps the surface
        // correct across compositor-driven invalidations.
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.entry = None;
                self.exit_requested = true;
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::RedrawRequested => {
                self.draw_frame();
                if self.exit_requested {
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }
}

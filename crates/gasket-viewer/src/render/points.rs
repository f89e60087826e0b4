use gasket_core::math::{self, Vec2};
use wgpu::util::DeviceExt;

use super::{RenderCtx, RenderTarget};

/// Draws the immutable chaos-game point cloud.
///
/// The vertex buffer is uploaded exactly once from the generated points; the
/// pipeline is rebuilt only if the surface format changes.
#[derive(Default)]
pub struct PointCloudRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    vbo: Option<wgpu::Buffer>,
    point_count: u32,
}

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

impl PointCloudRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the target and draws every point in one pass.
    ///
    /// An empty point buffer still clears, producing a blank frame.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        clear: wgpu::Color,
        points: &[Vec2],
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_vertex_buffer(ctx, points);

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("gasket point pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        let (Some(pipeline), Some(vbo)) = (self.pipeline.as_ref(), self.vbo.as_ref()) else {
            return;
        };

        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..self.point_count, 0..1);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("gasket point shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/points.wgsl").into()),
        });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("gasket point pipeline layout"),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("gasket point pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vec2>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &POSITION_ATTRS,
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::PointList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
    }

    fn ensure_vertex_buffer(&mut self, ctx: &RenderCtx<'_>, points: &[Vec2]) {
        if self.vbo.is_some() || points.is_empty() {
            return;
        }

        // One-shot upload; the cloud never changes after generation. The
        // component view flattens `&[Vec2]` without copying.
        self.vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("gasket point vbo"),
            contents: bytemuck::cast_slice(math::as_components(points)),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.point_count = points.len() as u32;
    }
}

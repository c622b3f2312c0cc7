use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::Viewport;
use crate::paint::{BlendMode, ColorStop, Paint};
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawList, FillCmd};

use super::common::{
    blend_state, viewport_ubo_min_binding_size, QuadVertex, ViewportUniform, QUAD_INDICES,
    QUAD_VERTICES,
};

/// Stops the fill shader evaluates per gradient.
pub const MAX_GRADIENT_STOPS: usize = 4;

const KIND_SOLID: u32 = 0;
const KIND_RADIAL: u32 = 1;

/// Fill renderer for solid and radial-gradient rects.
///
/// Geometry is provided as logical pixels, converted to NDC in the vertex shader using viewport.
/// One pipeline per [`BlendMode`]; consecutive fills sharing a mode are drawn
/// in a single instanced call, and paint order across modes is preserved.
#[derive(Default)]
pub struct FillRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    normal_pipeline: Option<wgpu::RenderPipeline>,
    screen_pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    quad_vbo: Option<wgpu::Buffer>,
    quad_ibo: Option<wgpu::Buffer>,

    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,

    instances: Vec<FillInstance>,
    modes: Vec<BlendMode>,

    warned_many_stops: bool,
}

impl FillRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the fills contained in `draw_list` into `target`, back to front.
    ///
    /// Empty rects, rects outside the viewport, and invalid gradients are skipped.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        if !ctx.viewport.is_valid() {
            return;
        }

        self.instances.clear();
        self.modes.clear();
        for cmd in draw_list.fills_in_paint_order() {
            let Some(inst) = FillInstance::from_cmd(cmd, ctx.viewport, &mut self.warned_many_stops)
            else {
                continue;
            };
            self.instances.push(inst);
            self.modes.push(cmd.blend);
        }

        if self.instances.is_empty() {
            return;
        }

        self.ensure_pipelines(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_bindings(ctx);

        // Mutating methods must happen before borrowing pipeline/buffers immutably.
        self.write_viewport_uniform(ctx);
        self.ensure_instance_capacity(ctx, self.instances.len());

        let Some(instance_vbo) = self.instance_vbo.as_ref() else { return };
        ctx.queue
            .write_buffer(instance_vbo, 0, bytemuck::cast_slice(&self.instances));

        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(quad_vbo) = self.quad_vbo.as_ref() else { return };
        let Some(quad_ibo) = self.quad_ibo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("fluidmesh fill pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad_vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);

        for (mode, range) in blend_runs(&self.modes) {
            let pipeline = match mode {
                BlendMode::Normal => self.normal_pipeline.as_ref(),
                BlendMode::Screen => self.screen_pipeline.as_ref(),
            };
            let Some(pipeline) = pipeline else { continue };
            rpass.set_pipeline(pipeline);
            rpass.draw_indexed(0..6, 0, range);
        }
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format)
            && self.normal_pipeline.is_some()
            && self.screen_pipeline.is_some()
        {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("fluidmesh fill shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/fill.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("fluidmesh fill bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(viewport_ubo_min_binding_size()),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("fluidmesh fill pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let build = |label: &'static str, mode: BlendMode| {
            ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),

                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[QuadVertex::layout(), FillInstance::layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(blend_state(mode)),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
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
            })
        };

        self.normal_pipeline = Some(build("fluidmesh fill pipeline (normal)", BlendMode::Normal));
        self.screen_pipeline = Some(build("fluidmesh fill pipeline (screen)", BlendMode::Screen));
        self.pipeline_format = Some(ctx.surface_format);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.viewport_ubo = None;

        log::debug!("fill pipelines built for {:?}", ctx.surface_format);
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("fluidmesh fill viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("fluidmesh fill bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_some() && self.quad_ibo.is_some() {
            return;
        }

        self.quad_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("fluidmesh fill quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.quad_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("fluidmesh fill quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }

    fn write_viewport_uniform(&mut self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        let u = ViewportUniform {
            viewport: [ctx.viewport.width.max(1.0), ctx.viewport.height.max(1.0)],
            _pad: [0.0; 2],
        };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }

    fn ensure_instance_capacity(&mut self, ctx: &RenderCtx<'_>, required_instances: usize) {
        if required_instances <= self.instance_capacity && self.instance_vbo.is_some() {
            return;
        }

        let new_cap = required_instances.next_power_of_two().max(16);
        let new_size = (new_cap * std::mem::size_of::<FillInstance>()) as u64;

        self.instance_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("fluidmesh fill instance vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.instance_capacity = new_cap;
    }
}

/// Splits paint-ordered blend modes into maximal runs of equal mode.
fn blend_runs(modes: &[BlendMode]) -> Vec<(BlendMode, Range<u32>)> {
    let mut runs: Vec<(BlendMode, Range<u32>)> = Vec::new();
    for (i, &mode) in modes.iter().enumerate() {
        let i = i as u32;
        if let Some((m, range)) = runs.last_mut() {
            if *m == mode {
                range.end = i + 1;
                continue;
            }
        }
        runs.push((mode, i..i + 1));
    }
    runs
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct FillInstance {
    /// origin.xy, size.xy (logical px)
    rect: [f32; 4],
    /// center.xy, radius, unused
    gradient: [f32; 4],
    /// stop offsets
    stop_t: [f32; 4],
    /// premultiplied stop colors
    color0: [f32; 4],
    color1: [f32; 4],
    color2: [f32; 4],
    color3: [f32; 4],
    /// kind, stop count, unused, unused
    info: [u32; 4],
}

impl FillInstance {
    const ATTRS: [wgpu::VertexAttribute; 8] = wgpu::vertex_attr_array![
        1 => Float32x4, // rect
        2 => Float32x4, // gradient
        3 => Float32x4, // stop_t
        4 => Float32x4, // color0
        5 => Float32x4, // color1
        6 => Float32x4, // color2
        7 => Float32x4, // color3
        8 => Uint32x4   // info
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<FillInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    /// Packs a fill for the GPU, clipped to the viewport.
    ///
    /// Gradients with more than [`MAX_GRADIENT_STOPS`] stops keep the first
    /// three and the last one (one-time debug message).
    fn from_cmd(cmd: &FillCmd, viewport: Viewport, warned_many_stops: &mut bool) -> Option<Self> {
        let rect = cmd.rect.normalized().intersect(viewport.bounds())?;

        let mut inst = FillInstance {
            rect: [rect.origin.x, rect.origin.y, rect.size.x, rect.size.y],
            ..Zeroable::zeroed()
        };

        match &cmd.paint {
            Paint::Solid(c) => {
                inst.color0 = c.to_array();
                inst.info = [KIND_SOLID, 1, 0, 0];
            }
            Paint::RadialGradient(g) => {
                if !g.is_valid() {
                    return None;
                }

                let picked: Vec<ColorStop> = if g.stops.len() > MAX_GRADIENT_STOPS {
                    if !*warned_many_stops {
                        log::debug!(
                            "radial gradient with {} stops; shader keeps {MAX_GRADIENT_STOPS}",
                            g.stops.len()
                        );
                        *warned_many_stops = true;
                    }
                    let mut v = g.stops[..MAX_GRADIENT_STOPS - 1].to_vec();
                    v.extend(g.stops.last().copied());
                    v
                } else {
                    g.stops.clone()
                };

                let mut colors = [[0.0f32; 4]; MAX_GRADIENT_STOPS];
                for (i, stop) in picked.iter().enumerate() {
                    inst.stop_t[i] = stop.t;
                    colors[i] = stop.color.to_array();
                }
                [inst.color0, inst.color1, inst.color2, inst.color3] = colors;

                inst.gradient = [g.center.x, g.center.y, g.radius, 0.0];
                inst.info = [KIND_RADIAL, picked.len() as u32, 0, 0];
            }
        }

        Some(inst)
    }
}

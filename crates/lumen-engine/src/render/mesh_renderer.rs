use std::collections::HashMap;
use std::num::NonZeroU64;

use crate::device::DEPTH_FORMAT;
use crate::geometry::{Geometry, Topology};
use crate::scene::{DrawList, Material};
use crate::transform::Projection;

use super::mesh::{accepted_draws, primitive_topology, GpuMesh, Rejection, VertexKind};
use super::texture::{SceneTexture, TextureImage};
use super::uniform::{pack_uniforms, uniform_stride, DrawUniform};
use super::{RenderCtx, RenderTarget};

/// Draws a scene's meshes with per-draw model-view matrices.
///
/// GPU resources are created lazily on the first `render` call:
/// - one pipeline per (vertex kind, topology) pair, depth-tested with `LessEqual`
/// - one vertex (+ index) buffer per mesh, uploaded once
/// - one uniform buffer holding every draw's matrices at dynamic offsets
/// - the scene texture with a bind group per sampling mode
pub struct MeshRenderer {
    geometry: Vec<Geometry>,
    kinds: Vec<VertexKind>,
    texture_image: Option<TextureImage>,
    projection: Projection,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipelines: HashMap<(VertexKind, Topology), wgpu::RenderPipeline>,
    uniform_bgl: Option<wgpu::BindGroupLayout>,
    texture_bgl: Option<wgpu::BindGroupLayout>,

    meshes: Vec<GpuMesh>,
    texture: Option<SceneTexture>,

    uniform_buffer: Option<wgpu::Buffer>,
    uniform_bind_group: Option<wgpu::BindGroup>,
    uniform_capacity: usize,
    uniform_stride: u64,

    warned_rejection: bool,
}

impl MeshRenderer {
    /// `geometry[i]` is drawn for `MeshId(i)`. `texture` is used by textured materials.
    pub fn new(geometry: Vec<Geometry>, texture: Option<TextureImage>) -> Self {
        for g in &geometry {
            debug_assert!(g.indices_in_bounds(), "mesh {} has out-of-range indices", g.label);
        }
        let kinds = geometry.iter().map(|g| VertexKind::of(&g.vertices)).collect();
        Self {
            geometry,
            kinds,
            texture_image: texture,
            projection: Projection::default(),
            pipeline_format: None,
            pipelines: HashMap::new(),
            uniform_bgl: None,
            texture_bgl: None,
            meshes: Vec::new(),
            texture: None,
            uniform_buffer: None,
            uniform_bind_group: None,
            uniform_capacity: 0,
            uniform_stride: 0,
            warned_rejection: false,
        }
    }

    /// Renders `draw_list` into `target` in recording order.
    ///
    /// Draws naming an unknown mesh, or a material the mesh cannot take, are
    /// skipped (one-time warning).
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, draw_list: &DrawList) {
        let (draws, rejection) = accepted_draws(&self.kinds, draw_list);
        if let Some((index, reason)) = rejection {
            if !self.warned_rejection {
                let why = match reason {
                    Rejection::UnknownMesh => "unknown mesh",
                    Rejection::MaterialMismatch => "material does not match vertex layout",
                };
                log::warn!("MeshRenderer: draw #{index} skipped ({why})");
                self.warned_rejection = true;
            }
        }
        if draws.is_empty() {
            return;
        }

        self.ensure_pipelines(ctx);
        self.ensure_meshes(ctx);
        let needs_texture = draws.iter().any(|d| matches!(d.material, Material::Texture(_)));
        if needs_texture {
            self.ensure_texture(ctx);
        }
        self.ensure_uniform_capacity(ctx, draws.len());

        let projection = self.projection.matrix(ctx.viewport);
        let uniforms: Vec<DrawUniform> = draws
            .iter()
            .map(|d| DrawUniform::new(projection, d.model_view))
            .collect();

        let Some(uniform_buffer) = self.uniform_buffer.as_ref() else { return };
        let Some(uniform_bind_group) = self.uniform_bind_group.as_ref() else { return };
        ctx.queue
            .write_buffer(uniform_buffer, 0, &pack_uniforms(&uniforms, self.uniform_stride));

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("lumen mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        for (i, draw) in draws.iter().enumerate() {
            let mesh = &self.meshes[draw.mesh.0];
            let Some(pipeline) = self.pipelines.get(&(mesh.kind, mesh.topology)) else {
                continue;
            };

            if let Material::Texture(mode) = draw.material {
                let Some(texture) = self.texture.as_ref() else { continue };
                rpass.set_bind_group(1, texture.bind_group(mode), &[]);
            }

            let offset = (i as u64 * self.uniform_stride) as u32;
            rpass.set_pipeline(pipeline);
            rpass.set_bind_group(0, uniform_bind_group, &[offset]);
            rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));

            match &mesh.index_buffer {
                Some(ibo) => {
                    rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint16);
                    rpass.draw_indexed(0..mesh.element_count, 0, 0..1);
                }
                None => rpass.draw(0..mesh.element_count, 0..1),
            }
        }
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && !self.pipelines.is_empty() {
            return;
        }

        let uniform_bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("lumen draw uniform bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: NonZeroU64::new(DrawUniform::SIZE),
                },
                count: None,
            }],
        });
        let texture_bgl = SceneTexture::bind_group_layout(ctx.device);

        let color_shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lumen color shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/color.wgsl").into()),
        });
        let textured_shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lumen textured shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/textured.wgsl").into()),
        });

        let color_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("lumen color pipeline layout"),
            bind_group_layouts: &[&uniform_bgl],
            immediate_size: 0,
        });
        let textured_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("lumen textured pipeline layout"),
            bind_group_layouts: &[&uniform_bgl, &texture_bgl],
            immediate_size: 0,
        });

        let mut pipelines = HashMap::new();
        for kind in [VertexKind::Color, VertexKind::Textured] {
            let (shader, layout) = match kind {
                VertexKind::Color => (&color_shader, &color_layout),
                VertexKind::Textured => (&textured_shader, &textured_layout),
            };
            for topology in [Topology::TriangleList, Topology::TriangleStrip] {
                let pipeline = create_pipeline(ctx, shader, layout, kind, topology);
                pipelines.insert((kind, topology), pipeline);
            }
        }

        self.pipeline_format = Some(ctx.surface_format);
        self.pipelines = pipelines;
        self.uniform_bgl = Some(uniform_bgl);
        self.texture_bgl = Some(texture_bgl);

        // Bind groups were made against the previous layouts.
        self.texture = None;
        self.uniform_bind_group = None;
        self.uniform_buffer = None;
        self.uniform_capacity = 0;
    }

    fn ensure_meshes(&mut self, ctx: &RenderCtx<'_>) {
        if self.meshes.len() == self.geometry.len() {
            return;
        }
        self.meshes = self
            .geometry
            .iter()
            .map(|g| GpuMesh::upload(ctx.device, g))
            .collect();
        log::debug!("uploaded {} meshes", self.meshes.len());
    }

    fn ensure_texture(&mut self, ctx: &RenderCtx<'_>) {
        if self.texture.is_some() {
            return;
        }
        let Some(layout) = self.texture_bgl.as_ref() else { return };
        let fallback;
        let image = match self.texture_image.as_ref() {
            Some(img) => img,
            None => {
                fallback = TextureImage::checkerboard(256, 8);
                &fallback
            }
        };
        self.texture = Some(SceneTexture::upload(
            ctx.device,
            ctx.queue,
            layout,
            image,
            ctx.surface_format.is_srgb(),
        ));
    }

    fn ensure_uniform_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.uniform_capacity && self.uniform_bind_group.is_some() {
            return;
        }
        let Some(layout) = self.uniform_bgl.as_ref() else { return };

        let alignment = ctx.device.limits().min_uniform_buffer_offset_alignment;
        let stride = uniform_stride(alignment);
        let capacity = required.next_power_of_two().max(16);

        let buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("lumen draw uniforms"),
            size: capacity as u64 * stride,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("lumen draw uniform bind group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: NonZeroU64::new(DrawUniform::SIZE),
                }),
            }],
        });

        self.uniform_buffer = Some(buffer);
        self.uniform_bind_group = Some(bind_group);
        self.uniform_capacity = capacity;
        self.uniform_stride = stride;
    }
}

fn create_pipeline(
    ctx: &RenderCtx<'_>,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    kind: VertexKind,
    topology: Topology,
) -> wgpu::RenderPipeline {
    let strip_index_format = match topology {
        Topology::TriangleStrip => Some(wgpu::IndexFormat::Uint16),
        Topology::TriangleList => None,
    };

    ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(&format!("lumen {kind:?} {topology:?} pipeline")),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[kind.layout()],
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: primitive_topology(topology),
            strip_index_format,
            front_face: wgpu::FrontFace::Ccw,
            // Pyramid and square are seen from both sides.
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

//! wgpu sink for [`DrawList`]s.
//!
//! Three pipelines share one uniform bind group: instanced phong spheres
//! (globe and markers), instanced annuli generated from the vertex index
//! (region rings, heat discs) and a plain line list (wireframe and arcs).
//! Spheres write depth; discs and lines only test against it.

use wgpu::util::DeviceExt;

use super::dynamic_buffer::TypedBuffer;
use super::mesh::{unit_sphere, MeshVertex};
use super::pipeline_helpers::{create_pipeline, uniform_buffer, PipelineSpec};
use super::render_context::{RenderContext, RenderContextError};
use super::texture::DepthTarget;
use crate::render::{
    DiscInstance, DrawList, FrameSink, FrameUniform, LineVertex, SphereInstance,
};

/// Vertices generated per disc instance (64 segments, two triangles each).
const DISC_VERTICES: u32 = 64 * 6;

struct SphereMesh {
    segments: u32,
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
}

impl SphereMesh {
    fn new(device: &wgpu::Device, segments: u32) -> Self {
        let (vertices, indices) = unit_sphere(segments);
        Self {
            segments,
            vertices: device.create_buffer_init(
                &wgpu::util::BufferInitDescriptor {
                    label: Some("Sphere Mesh Vertices"),
                    contents: bytemuck::cast_slice(&vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                },
            ),
            indices: device.create_buffer_init(
                &wgpu::util::BufferInitDescriptor {
                    label: Some("Sphere Mesh Indices"),
                    contents: bytemuck::cast_slice(&indices),
                    usage: wgpu::BufferUsages::INDEX,
                },
            ),
            index_count: indices.len() as u32,
        }
    }
}

/// Draws a [`DrawList`] into a window surface.
pub struct GlobeRenderer {
    context: RenderContext,
    depth: DepthTarget,
    frame_uniform: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    sphere_pipeline: wgpu::RenderPipeline,
    disc_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    mesh: SphereMesh,
    spheres: TypedBuffer<SphereInstance>,
    discs: TypedBuffer<DiscInstance>,
    lines: TypedBuffer<LineVertex>,
    frames: u64,
}

impl GlobeRenderer {
    /// Create a renderer for a window surface.
    ///
    /// # Errors
    ///
    /// Returns [`RenderContextError`] if GPU initialization fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
    ) -> Result<Self, RenderContextError> {
        let context = RenderContext::new(window, size).await?;
        Ok(Self::from_context(context))
    }

    /// Build pipelines and buffers on an existing context.
    #[must_use]
    pub fn from_context(context: RenderContext) -> Self {
        let device = &context.device;
        let (width, height) = context.size();

        let frame_uniform =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Frame Uniform"),
                contents: bytemuck::bytes_of(&FrameUniform::default()),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let uniform_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Frame Uniform Layout"),
                entries: &[uniform_buffer(0)],
            });
        let uniform_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Frame Uniform Bind Group"),
                layout: &uniform_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: frame_uniform.as_entire_binding(),
                }],
            });
        let layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Globe Pipeline Layout"),
                bind_group_layouts: &[&uniform_layout],
                push_constant_ranges: &[],
            });

        let shader =
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Globe Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("shaders/globe.wgsl").into(),
                ),
            });
        let format = context.format();

        let mesh_attrs = wgpu::vertex_attr_array![0 => Float32x3];
        let sphere_attrs = wgpu::vertex_attr_array![
            1 => Float32x4, 2 => Float32x4, 3 => Float32x4
        ];
        let sphere_pipeline = create_pipeline(
            device,
            &shader,
            format,
            &layout,
            &PipelineSpec {
                label: "Sphere",
                vs_entry: "vs_sphere",
                fs_entry: "fs_sphere",
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: size_of::<MeshVertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &mesh_attrs,
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: size_of::<SphereInstance>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &sphere_attrs,
                    },
                ],
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                depth_write: true,
            },
        );

        let disc_attrs = wgpu::vertex_attr_array![
            0 => Float32x4, 1 => Float32x4, 2 => Float32x4
        ];
        let disc_pipeline = create_pipeline(
            device,
            &shader,
            format,
            &layout,
            &PipelineSpec {
                label: "Disc",
                vs_entry: "vs_disc",
                fs_entry: "fs_flat",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: size_of::<DiscInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &disc_attrs,
                }],
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                depth_write: false,
            },
        );

        let line_attrs =
            wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4];
        let line_pipeline = create_pipeline(
            device,
            &shader,
            format,
            &layout,
            &PipelineSpec {
                label: "Line",
                vs_entry: "vs_line",
                fs_entry: "fs_flat",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: size_of::<LineVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &line_attrs,
                }],
                topology: wgpu::PrimitiveTopology::LineList,
                cull_mode: None,
                depth_write: false,
            },
        );

        let instance = wgpu::BufferUsages::VERTEX;
        Self {
            depth: DepthTarget::new(device, width, height),
            mesh: SphereMesh::new(device, 64),
            spheres: TypedBuffer::with_capacity(
                device,
                "Sphere Instances",
                64,
                instance,
            ),
            discs: TypedBuffer::with_capacity(
                device,
                "Disc Instances",
                64,
                instance,
            ),
            lines: TypedBuffer::with_capacity(
                device,
                "Line Vertices",
                4096,
                instance,
            ),
            frame_uniform,
            uniform_bind_group,
            sphere_pipeline,
            disc_pipeline,
            line_pipeline,
            frames: 0,
            context,
        }
    }

    /// Resize the surface and depth buffer.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.context.resize(width, height) {
            self.depth = DepthTarget::new(&self.context.device, width, height);
        }
    }

    /// Frames successfully presented.
    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames
    }

    /// Upload and draw one frame.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] when no swapchain texture could be
    /// acquired.
    pub fn render(&mut self, list: &DrawList) -> Result<(), wgpu::SurfaceError> {
        let device = &self.context.device;
        let queue = &self.context.queue;

        let segments = list.globe_segments.max(3);
        if segments != self.mesh.segments {
            self.mesh = SphereMesh::new(device, segments);
        }
        queue.write_buffer(
            &self.frame_uniform,
            0,
            bytemuck::bytes_of(&list.uniform),
        );
        let _ = self.spheres.write(device, queue, &list.spheres);
        let _ = self.discs.write(device, queue, &list.discs);
        let _ = self.lines.write(device, queue, &list.lines);

        let mut frame = self.context.begin_frame()?;
        {
            let [r, g, b, a] = list.clear_color;
            let mut pass =
                frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Globe Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &frame.view,
                            resolve_target: None,
                            depth_slice: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color {
                                    r: f64::from(r),
                                    g: f64::from(g),
                                    b: f64::from(b),
                                    a: f64::from(a),
                                }),
                                store: wgpu::StoreOp::Store,
                            },
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: &self.depth.view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    ..Default::default()
                });
            pass.set_bind_group(0, &self.uniform_bind_group, &[]);

            if !self.spheres.is_empty() {
                pass.set_pipeline(&self.sphere_pipeline);
                pass.set_vertex_buffer(0, self.mesh.vertices.slice(..));
                pass.set_vertex_buffer(1, self.spheres.buffer().slice(..));
                pass.set_index_buffer(
                    self.mesh.indices.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                pass.draw_indexed(
                    0..self.mesh.index_count,
                    0,
                    0..self.spheres.count(),
                );
            }
            if !self.discs.is_empty() {
                pass.set_pipeline(&self.disc_pipeline);
                pass.set_vertex_buffer(0, self.discs.buffer().slice(..));
                pass.draw(0..DISC_VERTICES, 0..self.discs.count());
            }
            if !self.lines.is_empty() {
                pass.set_pipeline(&self.line_pipeline);
                pass.set_vertex_buffer(0, self.lines.buffer().slice(..));
                pass.draw(0..self.lines.count(), 0..1);
            }
        }
        self.context.present(frame);
        self.frames += 1;
        Ok(())
    }
}

impl FrameSink for GlobeRenderer {
    fn draw(&mut self, frame: &DrawList) {
        match self.render(frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("surface lost, reconfiguring");
                self.context.reconfigure();
            }
            Err(e) => log::warn!("frame skipped: {e}"),
        }
    }
}

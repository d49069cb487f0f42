use glam::Vec3;

use crate::camera::Camera;
use crate::scene::{Lighting, Material};
use crate::util::color::with_alpha;

/// Per-frame uniform: camera and lights.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub eye: [f32; 3],
    /// Ambient light intensity.
    pub ambient: f32,
    /// Point lights: xyz position, w intensity.
    pub lights: [[f32; 4]; 2],
}

impl Default for FrameUniform {
    fn default() -> Self {
        Self {
            view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
            eye: [0.0, 0.0, 5.0],
            ambient: 0.5,
            lights: [[0.0; 4]; 2],
        }
    }
}

impl FrameUniform {
    /// Uniform for a camera and light setup.
    #[must_use]
    pub fn new(camera: &Camera, lighting: &Lighting) -> Self {
        Self {
            view_proj: camera.build_matrix().to_cols_array_2d(),
            eye: camera.eye.to_array(),
            ambient: lighting.ambient,
            lights: lighting
                .points
                .map(|light| light.position.extend(light.intensity).to_array()),
        }
    }
}

/// One instanced sphere.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereInstance {
    /// World-space center.
    pub center: [f32; 3],
    /// Radius.
    pub radius: f32,
    /// RGBA.
    pub color: [f32; 4],
    /// Emissive fraction.
    pub emissive: f32,
    /// 1.0 when lit, 0.0 when unlit.
    pub lit: f32,
    pub(crate) _pad: [f32; 2],
}

impl SphereInstance {
    /// Instance from a center, radius and material.
    #[must_use]
    pub fn new(center: Vec3, radius: f32, material: &Material) -> Self {
        Self {
            center: center.to_array(),
            radius,
            color: with_alpha(material.color, material.opacity),
            emissive: material.emissive,
            lit: if material.lit { 1.0 } else { 0.0 },
            _pad: [0.0; 2],
        }
    }
}

/// One instanced flat annulus; a disc has `inner == 0`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DiscInstance {
    /// World-space center.
    pub center: [f32; 3],
    /// Inner radius.
    pub inner: f32,
    /// Unit normal.
    pub normal: [f32; 3],
    /// Outer radius.
    pub outer: f32,
    /// RGBA.
    pub color: [f32; 4],
}

impl DiscInstance {
    /// Instance from placement, radii and material.
    #[must_use]
    pub fn new(
        center: Vec3,
        normal: Vec3,
        inner: f32,
        outer: f32,
        material: &Material,
    ) -> Self {
        Self {
            center: center.to_array(),
            inner,
            normal: normal.to_array(),
            outer,
            color: with_alpha(material.color, material.opacity),
        }
    }
}

/// One line-list vertex.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    /// World-space position.
    pub position: [f32; 3],
    pub(crate) _pad: f32,
    /// RGBA.
    pub color: [f32; 4],
}

impl LineVertex {
    /// Vertex at a position.
    #[must_use]
    pub fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            _pad: 0.0,
            color,
        }
    }
}

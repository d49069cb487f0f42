//! Flat, GPU-ready description of one frame.
//!
//! [`build_draw_list`] flattens the scene and camera into instance and
//! vertex arrays with every group rotation already applied. A
//! [`FrameSink`] consumes the list; the wgpu renderer is one sink, a test
//! recorder is another.

mod instances;
mod wireframe;

pub use instances::{DiscInstance, FrameUniform, LineVertex, SphereInstance};
pub use wireframe::wireframe_lines;

use crate::camera::OrbitCamera;
use crate::scene::{GlobeScene, Material, Primitive, Shape};
use crate::util::color::with_alpha;

/// Receives one draw per frame.
pub trait FrameSink {
    /// Draw a complete frame.
    fn draw(&mut self, frame: &DrawList);
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    /// Background color.
    pub clear_color: [f32; 4],
    /// Camera and light uniforms.
    pub uniform: FrameUniform,
    /// Tessellation requested for the globe sphere.
    pub globe_segments: u32,
    /// Sphere instances; the globe is always first.
    pub spheres: Vec<SphereInstance>,
    /// Disc and ring instances.
    pub discs: Vec<DiscInstance>,
    /// Line list vertices (pairs).
    pub lines: Vec<LineVertex>,
    /// Scene generation the list was built from.
    pub generation: u64,
}

impl DrawList {
    /// Total drawable items, counting each line segment once.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.spheres.len() + self.discs.len() + self.lines.len() / 2
    }
}

/// Flatten the scene as seen by `camera`.
#[must_use]
pub fn build_draw_list(scene: &GlobeScene, camera: &OrbitCamera) -> DrawList {
    let base = scene.base();
    let globe_rotation = base.rotation.quat();
    let mut list = DrawList {
        clear_color: with_alpha(scene.background(), 1.0),
        uniform: FrameUniform::new(&camera.camera, scene.lights()),
        globe_segments: base.segments,
        generation: scene.generation(),
        ..DrawList::default()
    };

    list.spheres.push(SphereInstance::new(
        glam::Vec3::ZERO,
        base.radius,
        &base.material,
    ));
    list.lines.extend(wireframe_lines(
        base.wireframe_radius,
        base.wireframe_segments,
        globe_rotation,
        &base.wireframe_material,
    ));

    for layer in scene.layers() {
        let rotation = layer.rotation().quat();
        for prim in layer.primitives() {
            push_primitive(&mut list, &prim.shape.rotated(rotation), prim);
        }
    }
    list
}

fn push_primitive(list: &mut DrawList, shape: &Shape, prim: &Primitive) {
    let material: &Material = &prim.material;
    match shape {
        Shape::Sphere { center, radius } => {
            list.spheres.push(SphereInstance::new(*center, *radius, material));
        }
        Shape::Ring {
            center,
            normal,
            inner,
            outer,
        } => list
            .discs
            .push(DiscInstance::new(*center, *normal, *inner, *outer, material)),
        Shape::Disc {
            center,
            normal,
            radius,
        } => list
            .discs
            .push(DiscInstance::new(*center, *normal, 0.0, *radius, material)),
        Shape::Polyline { points } => {
            let color = with_alpha(material.color, material.opacity);
            for pair in points.windows(2) {
                list.lines.push(LineVertex::new(pair[0], color));
                list.lines.push(LineVertex::new(pair[1], color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::project;
    use crate::options::{CameraOptions, Options};
    use crate::scene::{GlobeRotation, SceneState};
    use crate::topology::{LinkSample, Node, Provider};

    fn scene_with_arc() -> GlobeScene {
        let options = Options::default();
        let mut scene = GlobeScene::new(&options);
        let state = SceneState {
            nodes: vec![
                Node::new("A", "Alpha", 0.0, 0.0, Provider::Aws, "r"),
                Node::new("B", "Beta", 0.0, 90.0, Provider::Gcp, "r"),
            ],
            links: vec![LinkSample::new("A", "B", 40.0, 0)],
            ..SceneState::default()
        };
        let _ = scene.sync(&state, &options);
        scene
    }

    #[test]
    fn globe_is_first_sphere_then_markers() {
        let scene = scene_with_arc();
        let camera = OrbitCamera::new(&CameraOptions::default(), 800, 600);
        let list = build_draw_list(&scene, &camera);
        assert_eq!(list.spheres.len(), 3);
        assert_eq!(list.spheres[0].radius, 2.0);
        assert_eq!(list.globe_segments, 64);
        assert!(list.discs.is_empty());
        assert_eq!(list.clear_color[3], 1.0);
    }

    #[test]
    fn arc_becomes_fifty_segments() {
        let scene = scene_with_arc();
        let camera = OrbitCamera::new(&CameraOptions::default(), 800, 600);
        let list = build_draw_list(&scene, &camera);
        let wire = wireframe_lines(2.01, 32, glam::Quat::IDENTITY, &scene.base().wireframe_material).len();
        assert_eq!(list.lines.len() - wire, 100);
    }

    #[test]
    fn rotation_is_applied_to_instances() {
        let mut scene = scene_with_arc();
        scene.set_rotation(GlobeRotation {
            pitch: 0.0,
            yaw: std::f32::consts::FRAC_PI_2,
        });
        let camera = OrbitCamera::new(&CameraOptions::default(), 800, 600);
        let list = build_draw_list(&scene, &camera);
        // A sits at +X; a quarter turn about Y moves it to -Z.
        let a = glam::Vec3::from(list.spheres[1].center);
        let expected = glam::Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)
            * project(0.0, 0.0, 2.05);
        assert!((a - expected).length() < 1e-5);
        assert!((a - glam::Vec3::new(0.0, 0.0, -2.05)).length() < 1e-4);
    }
}

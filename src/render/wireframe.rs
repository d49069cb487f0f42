use std::f32::consts::{PI, TAU};

use glam::{Quat, Vec3};

use super::instances::LineVertex;
use crate::scene::Material;
use crate::util::color::with_alpha;

/// Parallels and meridians of a sphere as a line list, rotated.
///
/// `segments` meridians run pole to pole in `segments` steps and
/// `segments - 1` parallels ring the sphere in `segments` steps.
#[must_use]
pub fn wireframe_lines(
    radius: f32,
    segments: u32,
    rotation: Quat,
    material: &Material,
) -> Vec<LineVertex> {
    let n = segments.max(3);
    let color = with_alpha(material.color, material.opacity);
    let point = |ring: u32, step: u32| {
        let phi = PI * ring as f32 / n as f32;
        let theta = TAU * step as f32 / n as f32;
        rotation
            * Vec3::new(
                -radius * phi.sin() * theta.cos(),
                radius * phi.cos(),
                radius * phi.sin() * theta.sin(),
            )
    };

    let mut out = Vec::with_capacity((n * n * 4) as usize);
    for step in 0..n {
        for ring in 0..n {
            out.push(LineVertex::new(point(ring, step), color));
            out.push(LineVertex::new(point(ring + 1, step), color));
        }
    }
    for ring in 1..n {
        for step in 0..n {
            out.push(LineVertex::new(point(ring, step), color));
            out.push(LineVertex::new(point(ring, step + 1), color));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_lie_on_sphere() {
        let material = Material::basic([0.2, 0.5, 1.0], 0.15);
        let lines = wireframe_lines(2.01, 32, Quat::from_rotation_y(0.7), &material);
        assert_eq!(lines.len(), 2 * (32 * 32 + 31 * 32));
        for v in &lines {
            assert!((Vec3::from(v.position).length() - 2.01).abs() < 1e-4);
            assert_eq!(v.color[3], 0.15);
        }
    }

    #[test]
    fn tiny_segment_counts_are_clamped() {
        let material = Material::basic([1.0; 3], 1.0);
        let lines = wireframe_lines(1.0, 0, Quat::IDENTITY, &material);
        assert_eq!(lines.len(), 2 * (3 * 3 + 2 * 3));
    }
}

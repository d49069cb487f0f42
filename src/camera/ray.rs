use glam::{Vec2, Vec3};

use super::core::Camera;

/// A half-line used for click picking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point in world space.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Ray from the near plane through the far plane at an NDC position.
    #[must_use]
    pub fn from_ndc(camera: &Camera, ndc: Vec2) -> Self {
        let inv = camera.build_matrix().inverse();
        let near = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Self {
            origin: near,
            direction: (far - near).normalize_or(Vec3::NEG_Z),
        }
    }

    /// Nearest non-negative hit distance against a sphere.
    #[must_use]
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sqrt_disc = disc.sqrt();
        let t_near = -b - sqrt_disc;
        if t_near >= 0.0 {
            return Some(t_near);
        }
        let t_far = -b + sqrt_disc;
        (t_far >= 0.0).then_some(t_far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray_along_neg_z() -> Ray {
        Ray {
            origin: Vec3::new(0.0, 0.0, 5.0),
            direction: Vec3::NEG_Z,
        }
    }

    #[test]
    fn hits_sphere_in_front() {
        let t = ray_along_neg_z()
            .intersect_sphere(Vec3::ZERO, 1.0)
            .unwrap();
        assert!((t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn misses_offset_sphere() {
        let hit = ray_along_neg_z().intersect_sphere(Vec3::new(3.0, 0.0, 0.0), 1.0);
        assert!(hit.is_none());
    }

    #[test]
    fn ignores_sphere_behind_origin() {
        let hit = ray_along_neg_z().intersect_sphere(Vec3::new(0.0, 0.0, 10.0), 1.0);
        assert!(hit.is_none());
    }

    #[test]
    fn center_ndc_ray_points_at_target() {
        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.5,
            fovy: 50.0,
            znear: 0.1,
            zfar: 1000.0,
        };
        let ray = Ray::from_ndc(&camera, Vec2::ZERO);
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-4);
        assert!((ray.origin.z - 4.9).abs() < 1e-3);
    }
}

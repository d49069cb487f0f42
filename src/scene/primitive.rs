use glam::{Quat, Vec3};

/// Geometry of one drawable item, in un-rotated globe space.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Solid sphere.
    Sphere {
        /// Center.
        center: Vec3,
        /// Radius.
        radius: f32,
    },
    /// Flat annulus.
    Ring {
        /// Center.
        center: Vec3,
        /// Unit normal.
        normal: Vec3,
        /// Inner radius.
        inner: f32,
        /// Outer radius.
        outer: f32,
    },
    /// Flat filled circle.
    Disc {
        /// Center.
        center: Vec3,
        /// Unit normal.
        normal: Vec3,
        /// Radius.
        radius: f32,
    },
    /// Connected line strip.
    Polyline {
        /// Points in order.
        points: Vec<Vec3>,
    },
}

impl Shape {
    /// A ring or disc lying flat on the globe surface, facing the center.
    #[must_use]
    pub fn surface_disc(center: Vec3, radius: f32) -> Self {
        Self::Disc {
            center,
            normal: surface_normal(center),
            radius,
        }
    }

    /// A surface ring around `center`.
    #[must_use]
    pub fn surface_ring(center: Vec3, inner: f32, outer: f32) -> Self {
        Self::Ring {
            center,
            normal: surface_normal(center),
            inner,
            outer,
        }
    }

    /// Same shape rotated about the globe center.
    #[must_use]
    pub fn rotated(&self, rotation: Quat) -> Self {
        match self {
            Self::Sphere { center, radius } => Self::Sphere {
                center: rotation * *center,
                radius: *radius,
            },
            Self::Ring {
                center,
                normal,
                inner,
                outer,
            } => Self::Ring {
                center: rotation * *center,
                normal: rotation * *normal,
                inner: *inner,
                outer: *outer,
            },
            Self::Disc {
                center,
                normal,
                radius,
            } => Self::Disc {
                center: rotation * *center,
                normal: rotation * *normal,
                radius: *radius,
            },
            Self::Polyline { points } => Self::Polyline {
                points: points.iter().map(|p| rotation * *p).collect(),
            },
        }
    }
}

fn surface_normal(center: Vec3) -> Vec3 {
    center.normalize_or(Vec3::Z)
}

/// Surface appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Linear RGB.
    pub color: [f32; 3],
    /// Alpha.
    pub opacity: f32,
    /// Self-illumination as a fraction of `color`.
    pub emissive: f32,
    /// Whether scene lights affect the surface.
    pub lit: bool,
}

impl Material {
    /// Unlit material.
    #[must_use]
    pub const fn basic(color: [f32; 3], opacity: f32) -> Self {
        Self {
            color,
            opacity,
            emissive: 0.0,
            lit: false,
        }
    }

    /// Lit material with an emissive term.
    #[must_use]
    pub const fn phong(color: [f32; 3], opacity: f32, emissive: f32) -> Self {
        Self {
            color,
            opacity,
            emissive,
            lit: true,
        }
    }
}

/// A shape, its material and, for pickable items, the node it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    /// Geometry.
    pub shape: Shape,
    /// Appearance.
    pub material: Material,
    /// Node id reported when the item is clicked.
    pub pick_id: Option<String>,
}

impl Primitive {
    /// Non-pickable primitive.
    #[must_use]
    pub fn new(shape: Shape, material: Material) -> Self {
        Self {
            shape,
            material,
            pick_id: None,
        }
    }

    /// Primitive that reports `id` when clicked.
    #[must_use]
    pub fn pickable(shape: Shape, material: Material, id: impl Into<String>) -> Self {
        Self {
            shape,
            material,
            pick_id: Some(id.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn surface_disc_faces_center() {
        let Shape::Disc { normal, .. } = Shape::surface_disc(Vec3::new(0.0, 3.0, 0.0), 0.1)
        else {
            unreachable!()
        };
        assert!((normal - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn rotation_moves_centers_and_normals() {
        let ring = Shape::surface_ring(Vec3::new(2.0, 0.0, 0.0), 0.1, 0.12);
        let rotated = ring.rotated(Quat::from_rotation_y(FRAC_PI_2));
        let Shape::Ring { center, normal, .. } = rotated else {
            unreachable!()
        };
        assert!((center - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-5);
        assert!((normal - Vec3::NEG_Z).length() < 1e-5);
    }
}

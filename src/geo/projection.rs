use glam::Vec3;

/// Project geographic degrees onto a sphere of `radius` centered at the
/// origin.
///
/// Latitude is measured from the +Y pole and longitude is offset by 180°,
/// so `(0, 0)` lands on +X and `(0, 90)` on -Z. Every layer goes through
/// this function, which keeps a node's marker, arc endpoint and heat disc
/// coincident for equal radii.
#[must_use]
pub fn project(lat: f32, lng: f32, radius: f32) -> Vec3 {
    let phi = (90.0 - lat).to_radians();
    let theta = (lng + 180.0).to_radians();

    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();

    Vec3::new(
        -(radius * sin_phi * cos_theta),
        radius * cos_phi,
        radius * sin_phi * sin_theta,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn points_lie_on_the_sphere() {
        for lat in [-90.0, -45.5, 0.0, 12.3, 60.0, 90.0] {
            for lng in [-180.0, -122.4, 0.0, 4.9, 139.65, 180.0] {
                for radius in [0.5, 2.0, 2.15] {
                    let p = project(lat, lng, radius);
                    assert!(
                        (p.length() - radius).abs() < EPS,
                        "({lat}, {lng}) at r={radius} gave |p|={}",
                        p.length()
                    );
                }
            }
        }
    }

    #[test]
    fn reference_points() {
        let origin = project(0.0, 0.0, 2.0);
        assert!((origin - Vec3::new(2.0, 0.0, 0.0)).length() < EPS);

        let east = project(0.0, 90.0, 2.0);
        assert!((east - Vec3::new(0.0, 0.0, -2.0)).length() < EPS);

        let north = project(90.0, 0.0, 2.0);
        assert!((north - Vec3::new(0.0, 2.0, 0.0)).length() < EPS);
    }

    #[test]
    fn radius_scales_linearly() {
        let a = project(35.6762, 139.6503, 2.0);
        let b = project(35.6762, 139.6503, 2.05);
        assert!((a.normalize() - b.normalize()).length() < EPS);
        assert!((b.length() / a.length() - 2.05 / 2.0).abs() < EPS);
    }
}

use glam::Vec3;

/// Squared length below which the endpoint average is treated as zero.
const DEGENERATE_EPS: f32 = 1e-12;

/// Quadratic Bézier between two surface points that bows away from the
/// globe center.
///
/// The control point is the normalized average of the endpoints pushed out
/// to `bulge_radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCurve {
    from: Vec3,
    control: Vec3,
    to: Vec3,
}

impl ArcCurve {
    /// Build the arc from `from` to `to` with its midpoint at
    /// `bulge_radius` from the origin.
    ///
    /// When the endpoint average has no direction (zero endpoints or
    /// antipodal points) the control point falls back to an axis
    /// perpendicular to `from`, or +Y when `from` is itself zero.
    #[must_use]
    pub fn new(from: Vec3, to: Vec3, bulge_radius: f32) -> Self {
        let average = (from + to) * 0.5;
        let direction = if average.length_squared() > DEGENERATE_EPS {
            average.normalize()
        } else {
            fallback_axis(from)
        };

        Self {
            from,
            control: direction * bulge_radius,
            to,
        }
    }

    /// Start point.
    #[must_use]
    pub fn start(&self) -> Vec3 {
        self.from
    }

    /// Bulged control point.
    #[must_use]
    pub fn control(&self) -> Vec3 {
        self.control
    }

    /// End point.
    #[must_use]
    pub fn end(&self) -> Vec3 {
        self.to
    }

    /// Evaluate the curve at `t`, clamped to [0, 1].
    ///
    /// `point_at(0.0)` is exactly `from` and `point_at(1.0)` exactly `to`.
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        let omt = 1.0 - t;
        self.from * (omt * omt)
            + self.control * (2.0 * omt * t)
            + self.to * (t * t)
    }

    /// `segments + 1` evenly spaced points from `from` to `to`.
    ///
    /// The returned iterator is `Clone`, so a sampling can be replayed.
    /// Zero segments yields just the start point.
    #[must_use]
    pub fn sample(&self, segments: usize) -> ArcSamples {
        ArcSamples {
            curve: *self,
            segments,
            next: 0,
        }
    }
}

fn fallback_axis(from: Vec3) -> Vec3 {
    from.try_normalize()
        .map_or(Vec3::Y, |dir| dir.any_orthonormal_vector())
}

/// Iterator over the evenly spaced points of an [`ArcCurve`].
#[derive(Debug, Clone)]
pub struct ArcSamples {
    curve: ArcCurve,
    segments: usize,
    next: usize,
}

impl Iterator for ArcSamples {
    type Item = Vec3;

    fn next(&mut self) -> Option<Vec3> {
        if self.next > self.segments {
            return None;
        }
        let i = self.next;
        self.next += 1;

        if self.segments == 0 {
            return Some(self.curve.from);
        }
        if i == self.segments {
            return Some(self.curve.to);
        }
        Some(self.curve.point_at(i as f32 / self.segments as f32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.segments + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ArcSamples {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::project;

    const EPS: f32 = 1e-5;

    #[test]
    fn endpoints_are_exact() {
        let pairs = [
            (project(35.6762, 139.6503, 2.05), project(40.7128, -74.006, 2.05)),
            (project(0.0, 0.0, 2.05), project(0.0, 90.0, 2.05)),
            (Vec3::new(1.0, 2.0, 3.0), Vec3::new(-3.0, 0.5, 2.0)),
        ];
        for (from, to) in pairs {
            let arc = ArcCurve::new(from, to, 2.3);
            assert_eq!(arc.point_at(0.0), from);
            assert_eq!(arc.point_at(1.0), to);
        }
    }

    #[test]
    fn midpoint_bows_outward() {
        let from = project(0.0, 0.0, 2.05);
        let to = project(0.0, 90.0, 2.05);
        let arc = ArcCurve::new(from, to, 2.3);

        assert!((arc.control().length() - 2.3).abs() < EPS);
        // The mid-curve point sits further out than the chord midpoint.
        let chord_mid = (from + to) * 0.5;
        assert!(arc.point_at(0.5).length() > chord_mid.length());
    }

    #[test]
    fn parameter_is_clamped() {
        let arc = ArcCurve::new(Vec3::X, Vec3::Z, 1.5);
        assert_eq!(arc.point_at(-0.5), Vec3::X);
        assert_eq!(arc.point_at(7.0), Vec3::Z);
    }

    #[test]
    fn identical_endpoints_collapse_to_bulged_point() {
        let p = project(51.5, -0.12, 2.05);
        let arc = ArcCurve::new(p, p, 2.5);
        assert!((arc.control() - p.normalize() * 2.5).length() < EPS);
        assert_eq!(arc.point_at(0.0), p);
        assert_eq!(arc.point_at(1.0), p);
    }

    #[test]
    fn antipodal_endpoints_use_stable_axis() {
        let from = Vec3::new(2.0, 0.0, 0.0);
        let arc = ArcCurve::new(from, -from, 2.5);
        let control = arc.control();
        assert!(control.is_finite());
        assert!((control.length() - 2.5).abs() < EPS);
        assert!(control.dot(from).abs() < EPS);

        let zero = ArcCurve::new(Vec3::ZERO, Vec3::ZERO, 3.0);
        assert_eq!(zero.control(), Vec3::Y * 3.0);
    }

    #[test]
    fn sample_yields_segments_plus_one_ordered_points() {
        let from = project(0.0, 0.0, 2.05);
        let to = project(0.0, 90.0, 2.05);
        let arc = ArcCurve::new(from, to, 2.3);

        let samples = arc.sample(50);
        assert_eq!(samples.len(), 51);
        let points: Vec<Vec3> = samples.clone().collect();
        assert_eq!(points.len(), 51);
        assert_eq!(points[0], from);
        assert_eq!(points[50], to);
        assert!((points[25] - arc.point_at(0.5)).length() < EPS);

        // Restartable: the clone replays the same sequence.
        let replay: Vec<Vec3> = samples.collect();
        assert_eq!(points, replay);
    }

    #[test]
    fn zero_segments_yields_start_only() {
        let arc = ArcCurve::new(Vec3::X, Vec3::Y, 2.0);
        let points: Vec<Vec3> = arc.sample(0).collect();
        assert_eq!(points, vec![Vec3::X]);
    }
}

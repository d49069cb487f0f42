use glam::{Vec2, Vec3};

use super::core::Camera;
use super::ray::Ray;
use crate::options::CameraOptions;

/// Camera parked on +Z at a clamped distance from the globe center.
///
/// The globe itself carries the rotation, so the controller only tracks
/// zoom and the viewport.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    distance: f32,
    min_distance: f32,
    max_distance: f32,
    viewport: Vec2,
    /// The camera as of the last change.
    pub camera: Camera,
}

impl OrbitCamera {
    /// Camera at the configured initial distance for a viewport in
    /// physical pixels.
    #[must_use]
    pub fn new(options: &CameraOptions, width: u32, height: u32) -> Self {
        let min_distance = options.min_distance.min(options.max_distance);
        let max_distance = options.max_distance.max(options.min_distance);
        let distance = options.distance.clamp(min_distance, max_distance);
        let viewport = viewport_size(width, height);
        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: viewport.x / viewport.y,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };
        Self {
            distance,
            min_distance,
            max_distance,
            viewport,
            camera,
        }
    }

    /// Current distance from the globe center.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Viewport size in physical pixels.
    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Move the camera by `delta` along +Z, clamped to the allowed range.
    pub fn zoom(&mut self, delta: f32) {
        self.set_distance(self.distance + delta);
    }

    /// Place the camera at an absolute distance, clamped.
    pub fn set_distance(&mut self, distance: f32) {
        if distance.is_nan() {
            return;
        }
        self.distance = distance.clamp(self.min_distance, self.max_distance);
        self.camera.eye = Vec3::new(0.0, 0.0, self.distance);
    }

    /// Apply new projection parameters and zoom limits. The current
    /// distance is kept, re-clamped to the new range.
    pub fn reconfigure(&mut self, options: &CameraOptions) {
        self.min_distance = options.min_distance.min(options.max_distance);
        self.max_distance = options.max_distance.max(options.min_distance);
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
        self.set_distance(self.distance);
    }

    /// Track a new viewport size. Zero extents are treated as one pixel.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = viewport_size(width, height);
        self.camera.aspect = self.viewport.x / self.viewport.y;
    }

    /// Pixel position to normalized device coordinates (+Y up).
    #[must_use]
    pub fn to_ndc(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            (x / self.viewport.x) * 2.0 - 1.0,
            -(y / self.viewport.y) * 2.0 + 1.0,
        )
    }

    /// Picking ray through a pixel position.
    #[must_use]
    pub fn ray_through(&self, x: f32, y: f32) -> Ray {
        Ray::from_ndc(&self.camera, self.to_ndc(x, y))
    }

    /// Pixel position of a world-space point, or `None` when it lies
    /// behind the camera.
    #[must_use]
    pub fn project_to_screen(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.camera.build_matrix() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
        ))
    }
}

fn viewport_size(width: u32, height: u32) -> Vec2 {
    Vec2::new(width.max(1) as f32, height.max(1) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orbit() -> OrbitCamera {
        OrbitCamera::new(&CameraOptions::default(), 800, 600)
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = orbit();
        cam.zoom(100.0);
        assert_eq!(cam.distance(), 10.0);
        cam.zoom(-100.0);
        assert_eq!(cam.distance(), 3.0);
        cam.zoom(1.5);
        assert!((cam.distance() - 4.5).abs() < 1e-6);
        assert_eq!(cam.camera.eye, Vec3::new(0.0, 0.0, cam.distance()));
    }

    #[test]
    fn nan_zoom_is_ignored() {
        let mut cam = orbit();
        cam.zoom(f32::NAN);
        assert_eq!(cam.distance(), 5.0);
    }

    #[test]
    fn center_pixel_maps_to_ndc_origin() {
        let cam = orbit();
        let ndc = cam.to_ndc(400.0, 300.0);
        assert!(ndc.length() < 1e-6);
        assert_eq!(cam.to_ndc(0.0, 0.0), Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn screen_projection_inverts_ndc() {
        let cam = orbit();
        let p = cam.project_to_screen(Vec3::ZERO).unwrap();
        assert!((p - Vec2::new(400.0, 300.0)).length() < 1e-3);
        assert!(cam.project_to_screen(Vec3::new(0.0, 0.0, 20.0)).is_none());
    }

    #[test]
    fn reconfigure_widens_and_reclamps_range() {
        let mut cam = orbit();
        let mut options = CameraOptions {
            max_distance: 20.0,
            fovy: 60.0,
            ..CameraOptions::default()
        };
        cam.reconfigure(&options);
        cam.zoom(100.0);
        assert_eq!(cam.distance(), 20.0);
        assert_eq!(cam.camera.fovy, 60.0);

        options.max_distance = 8.0;
        cam.reconfigure(&options);
        assert_eq!(cam.distance(), 8.0);
        assert_eq!(cam.camera.eye, Vec3::new(0.0, 0.0, 8.0));
    }

    #[test]
    fn resize_updates_aspect() {
        let mut cam = orbit();
        cam.resize(1000, 500);
        assert_eq!(cam.camera.aspect, 2.0);
        cam.resize(0, 0);
        assert_eq!(cam.camera.aspect, 1.0);
    }
}

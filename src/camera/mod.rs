//! Camera system for viewing the globe.
//!
//! A single perspective camera sits on the +Z axis looking at the globe
//! center. Only its distance and aspect change at runtime; the globe
//! rotates instead of the camera orbiting.

/// Distance-clamped camera controller.
pub mod controller;
/// Core camera struct and projection math.
pub mod core;
/// Picking rays and ray/sphere intersection.
pub mod ray;

pub use self::controller::OrbitCamera;
pub use self::core::Camera;
pub use self::ray::Ray;

//! Shared utilities: hex color conversion and frame timing.

pub mod color;
/// Smoothed FPS and clamped frame deltas.
pub mod frame_timing;

//! Geographic projection and curved paths on the globe.
//!
//! [`project`] maps latitude/longitude onto a sphere; [`ArcCurve`] builds
//! the outward-bulged quadratic Bézier used by both connection arcs and
//! data-flow particles.

mod arc;
mod projection;

pub use arc::{ArcCurve, ArcSamples};
pub use projection::project;

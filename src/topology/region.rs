use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Provider;

/// A cloud-region overlay drawn as a flat disc by the regions layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CloudRegion {
    /// Hosting provider (drives the disc color).
    pub provider: Provider,
    /// Display name.
    pub name: String,
    /// Latitude in degrees.
    pub lat: f32,
    /// Longitude in degrees.
    pub lng: f32,
    /// Overlay size; the disc radius is this times the geometry scale.
    pub radius: f32,
}

impl CloudRegion {
    /// Convenience constructor.
    #[must_use]
    pub fn new(
        provider: Provider,
        name: impl Into<String>,
        lat: f32,
        lng: f32,
        radius: f32,
    ) -> Self {
        Self {
            provider,
            name: name.into(),
            lat,
            lng,
            radius,
        }
    }
}

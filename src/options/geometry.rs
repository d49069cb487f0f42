use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Radii and sizes of every primitive on the globe.
///
/// Radii are distances from the globe center; sizes are primitive extents.
pub struct GeometryOptions {
    /// Base globe radius.
    #[schemars(skip)]
    pub globe_radius: f32,
    /// Latitude/longitude segments of the base globe mesh.
    #[schemars(skip)]
    pub globe_segments: u32,
    /// Wireframe overlay radius.
    #[schemars(skip)]
    pub wireframe_radius: f32,
    /// Latitude/longitude segments of the wireframe overlay.
    #[schemars(title = "Wireframe Segments", range(min = 8, max = 64))]
    pub wireframe_segments: u32,
    /// Radius at which markers sit.
    #[schemars(skip)]
    pub marker_elevation: f32,
    /// Marker sphere radius.
    #[schemars(title = "Marker Size", range(min = 0.01, max = 0.2), extend("step" = 0.01))]
    pub marker_size: f32,
    /// Marker sphere radius for the selected node.
    #[schemars(title = "Selected Marker Size", range(min = 0.01, max = 0.3), extend("step" = 0.01))]
    pub selected_marker_size: f32,
    /// Inner radius of the selection ring.
    #[schemars(skip)]
    pub ring_inner: f32,
    /// Outer radius of the selection ring.
    #[schemars(skip)]
    pub ring_outer: f32,
    /// Radius of connection arc endpoints.
    #[schemars(skip)]
    pub connection_elevation: f32,
    /// Radius of the connection arc midpoint.
    #[schemars(title = "Arc Height", range(min = 2.05, max = 4.0), extend("step" = 0.05))]
    pub connection_bulge: f32,
    /// Polyline segments per connection arc.
    #[schemars(title = "Arc Segments", range(min = 4, max = 128))]
    pub arc_segments: u32,
    /// Radius at which region discs sit.
    #[schemars(skip)]
    pub region_elevation: f32,
    /// Disc radius per unit of region radius.
    #[schemars(skip)]
    pub region_scale: f32,
    /// Radius at which heatmap discs sit.
    #[schemars(skip)]
    pub heatmap_elevation: f32,
    /// Heatmap disc radius.
    #[schemars(title = "Heat Spot Size", range(min = 0.05, max = 0.5), extend("step" = 0.01))]
    pub heatmap_size: f32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            globe_radius: 2.0,
            globe_segments: 64,
            wireframe_radius: 2.01,
            wireframe_segments: 32,
            marker_elevation: 2.05,
            marker_size: 0.05,
            selected_marker_size: 0.08,
            ring_inner: 0.1,
            ring_outer: 0.12,
            connection_elevation: 2.05,
            connection_bulge: 2.3,
            arc_segments: 50,
            region_elevation: 2.02,
            region_scale: 0.01,
            heatmap_elevation: 2.015,
            heatmap_size: 0.15,
        }
    }
}

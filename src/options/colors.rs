use serde::{Deserialize, Serialize};

use super::display::Theme;
use crate::topology::{LatencyThresholds, LatencyTier, Provider};
use crate::util::color::rgb;

/// Color palette and material opacities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// RGB for AWS markers and regions.
    pub provider_aws: [f32; 3],
    /// RGB for GCP markers and regions.
    pub provider_gcp: [f32; 3],
    /// RGB for Azure markers and regions.
    pub provider_azure: [f32; 3],
    /// RGB for any other provider.
    pub provider_other: [f32; 3],
    /// RGB for latencies below the warning threshold.
    pub latency_good: [f32; 3],
    /// RGB for latencies between the warning and critical thresholds.
    pub latency_warning: [f32; 3],
    /// RGB for latencies at or above the critical threshold.
    pub latency_critical: [f32; 3],
    /// Tier boundaries.
    pub latency_thresholds: LatencyThresholds,
    /// Background in the dark theme.
    pub background_dark: [f32; 3],
    /// Background in the light theme.
    pub background_light: [f32; 3],
    /// Globe tint in the dark theme.
    pub globe_dark: [f32; 3],
    /// Globe tint in the light theme.
    pub globe_light: [f32; 3],
    /// Base globe opacity.
    pub globe_opacity: f32,
    /// Wireframe overlay color.
    pub wireframe: [f32; 3],
    /// Wireframe overlay opacity.
    pub wireframe_opacity: f32,
    /// Selection ring color.
    pub ring: [f32; 3],
    /// Selection ring opacity.
    pub ring_opacity: f32,
    /// Emissive intensity of the selected marker.
    pub selected_emissive: f32,
    /// Emissive intensity of unselected markers.
    pub marker_emissive: f32,
    /// Connection arc opacity.
    pub connection_opacity: f32,
    /// Region disc opacity.
    pub region_opacity: f32,
    /// Heatmap disc opacity at zero latency.
    pub heatmap_opacity: f32,
    /// Latency at which a heat spot fades out completely.
    pub heatmap_latency_span: f32,
    /// Latency assumed for nodes without a live measurement.
    pub heatmap_default_latency: f32,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            provider_aws: rgb(0xff9900),
            provider_gcp: rgb(0x4285f4),
            provider_azure: rgb(0x0078d4),
            provider_other: rgb(0x6b7280),
            latency_good: rgb(0x10b981),
            latency_warning: rgb(0xf59e0b),
            latency_critical: rgb(0xef4444),
            latency_thresholds: LatencyThresholds::default(),
            background_dark: rgb(0x0f172a),
            background_light: rgb(0x1e293b),
            globe_dark: rgb(0x1e293b),
            globe_light: rgb(0x2d3748),
            globe_opacity: 0.9,
            wireframe: rgb(0x3b82f6),
            wireframe_opacity: 0.15,
            ring: rgb(0xffffff),
            ring_opacity: 0.5,
            selected_emissive: 1.0,
            marker_emissive: 0.5,
            connection_opacity: 0.6,
            region_opacity: 0.3,
            heatmap_opacity: 0.4,
            heatmap_latency_span: 200.0,
            heatmap_default_latency: 75.0,
        }
    }
}

impl ColorOptions {
    /// Marker/region color for a provider.
    #[must_use]
    pub fn provider_color(&self, provider: Provider) -> [f32; 3] {
        match provider {
            Provider::Aws => self.provider_aws,
            Provider::Gcp => self.provider_gcp,
            Provider::Azure => self.provider_azure,
            Provider::Other => self.provider_other,
        }
    }

    /// Latency tier under the configured thresholds.
    #[must_use]
    pub fn latency_tier(&self, latency_ms: f32) -> LatencyTier {
        self.latency_thresholds.tier(latency_ms)
    }

    /// Arc/heat color for a latency.
    #[must_use]
    pub fn latency_color(&self, latency_ms: f32) -> [f32; 3] {
        match self.latency_tier(latency_ms) {
            LatencyTier::Good => self.latency_good,
            LatencyTier::Warning => self.latency_warning,
            LatencyTier::Critical => self.latency_critical,
        }
    }

    /// Heat spot opacity: full at zero latency, gone at the span.
    #[must_use]
    pub fn heat_opacity(&self, latency_ms: f32) -> f32 {
        let intensity = (1.0 - latency_ms / self.heatmap_latency_span).max(0.0);
        self.heatmap_opacity * intensity
    }

    /// Clear color for a theme.
    #[must_use]
    pub fn background(&self, theme: Theme) -> [f32; 3] {
        match theme {
            Theme::Dark => self.background_dark,
            Theme::Light => self.background_light,
        }
    }

    /// Globe material tint for a theme.
    #[must_use]
    pub fn globe_tint(&self, theme: Theme) -> [f32; 3] {
        match theme {
            Theme::Dark => self.globe_dark,
            Theme::Light => self.globe_light,
        }
    }
}

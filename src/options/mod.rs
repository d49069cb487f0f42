//! Centralized globe options with TOML preset support.
//!
//! All tweakable settings (camera, geometry, colors, particles, display
//! toggles, region overlays, keybindings) are consolidated here. Options
//! serialize to/from TOML so a viewer can load named presets from a
//! directory.

mod camera;
mod colors;
mod display;
mod geometry;
mod keybindings;
mod particles;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use display::{DisplayOptions, Overlay, Theme};
pub use geometry::GeometryOptions;
pub use keybindings::KeybindingOptions;
pub use particles::ParticleOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GlobeError;
use crate::topology::{catalog, CloudRegion};

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[particles]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Layer toggles, theme and auto-rotation.
    pub display: DisplayOptions,
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Radii and sizes of every primitive.
    pub geometry: GeometryOptions,
    /// Color palette options.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Data-flow particle parameters.
    pub particles: ParticleOptions,
    /// Cloud-region overlays drawn by the regions layer.
    #[schemars(skip)]
    pub regions: Vec<CloudRegion>,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            display: DisplayOptions::default(),
            camera: CameraOptions::default(),
            geometry: GeometryOptions::default(),
            colors: ColorOptions::default(),
            particles: ParticleOptions::default(),
            regions: catalog::default_regions(),
            keybindings: KeybindingOptions::default(),
        }
    }
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GlobeError::Io`] if the file cannot be read, or
    /// [`GlobeError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, GlobeError> {
        let content = std::fs::read_to_string(path).map_err(GlobeError::Io)?;
        let mut opts: Self = toml::from_str(&content)
            .map_err(|e| GlobeError::OptionsParse(e.to_string()))?;
        opts.keybindings.warn_conflicts();
        log::info!("loaded options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`GlobeError::OptionsParse`] if serialization fails, or
    /// [`GlobeError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), GlobeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GlobeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GlobeError::Io)?;
        }
        std::fs::write(path, content).map_err(GlobeError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{LatencyTier, Provider};

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[particles]
max_particles = 30

[display]
show_heatmap = true
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.particles.max_particles, 30);
        assert!(opts.display.show_heatmap);
        // Everything else should be default
        assert_eq!(opts.particles.spawn_interval_ms, 1000);
        assert!(opts.display.show_connections);
        assert_eq!(opts.camera.min_distance, 3.0);
        assert_eq!(opts.regions.len(), 4);
    }

    #[test]
    fn keybinding_lookup() {
        use crate::input::KeyAction;
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyH"),
            Some(KeyAction::ToggleHeatmap)
        );
        assert_eq!(opts.keybindings.lookup("KeyQ"), Some(KeyAction::ResetView));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn load_applies_keybinding_table() {
        let dir = std::env::temp_dir().join("netglobe-options-load");
        let path = dir.join("swapped.toml");
        let toml_str = r#"
[keybindings.bindings]
toggle_particles = "KeyX"
"#;
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, toml_str).unwrap();
        let opts = Options::load(&path).unwrap();
        assert_eq!(
            opts.keybindings.lookup("KeyX"),
            Some(crate::input::KeyAction::ToggleParticles)
        );
        assert!(Options::list_presets(&dir).contains(&"swapped".to_owned()));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir().join("netglobe-options-bad");
        let path = dir.join("bad.toml");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "[camera\nfovy = ").unwrap();
        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, GlobeError::OptionsParse(_)));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn palette_lookup() {
        let colors = ColorOptions::default();
        assert_eq!(
            colors.provider_color(Provider::Aws),
            crate::util::color::rgb(0xff9900)
        );
        assert_eq!(colors.latency_tier(49.99), LatencyTier::Good);
        assert_eq!(colors.latency_tier(50.0), LatencyTier::Warning);
        assert_eq!(colors.latency_tier(149.99), LatencyTier::Warning);
        assert_eq!(colors.latency_tier(150.0), LatencyTier::Critical);
        assert_ne!(
            colors.background(Theme::Dark),
            colors.background(Theme::Light)
        );
    }

    #[test]
    fn heat_opacity_fades_with_latency() {
        let colors = ColorOptions::default();
        assert!((colors.heat_opacity(0.0) - 0.4).abs() < 1e-6);
        assert!((colors.heat_opacity(100.0) - 0.2).abs() < 1e-6);
        assert_eq!(colors.heat_opacity(200.0), 0.0);
        assert_eq!(colors.heat_opacity(500.0), 0.0);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed sections should be present
        assert!(props.contains_key("display"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("geometry"));
        assert!(props.contains_key("particles"));

        // Skipped sections should be absent
        assert!(!props.contains_key("colors"));
        assert!(!props.contains_key("keybindings"));
        assert!(!props.contains_key("regions"));

        // Camera should have exposed fields but not skipped ones
        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("znear").is_none());
    }
}

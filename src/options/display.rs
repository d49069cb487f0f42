use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color theme. Affects the background and globe tint only.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Dark slate background.
    #[default]
    Dark,
    /// Lighter slate background.
    Light,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// One of the toggleable overlay layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    /// Latency arcs between link endpoints.
    Connections,
    /// Cloud-region discs.
    Regions,
    /// Per-node latency heat spots.
    Heatmap,
    /// Data-flow particles.
    Particles,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
/// Layer visibility toggles, theme and idle rotation.
pub struct DisplayOptions {
    /// Whether latency arcs are drawn.
    #[schemars(title = "Show Connections")]
    pub show_connections: bool,
    /// Whether cloud-region discs are drawn.
    #[schemars(title = "Show Regions")]
    pub show_regions: bool,
    /// Whether the latency heatmap is drawn.
    #[schemars(title = "Show Heatmap")]
    pub show_heatmap: bool,
    /// Whether data-flow particles are simulated and drawn.
    #[schemars(title = "Show Data Flow")]
    pub show_particles: bool,
    /// Color theme.
    #[schemars(title = "Theme")]
    pub theme: Theme,
    /// Whether the globe spins on its own while not being dragged.
    #[schemars(title = "Auto-Rotate")]
    pub auto_rotate: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_connections: true,
            show_regions: false,
            show_heatmap: false,
            show_particles: false,
            theme: Theme::Dark,
            auto_rotate: true,
        }
    }
}

impl DisplayOptions {
    /// Whether an overlay is currently shown.
    #[must_use]
    pub fn is_shown(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::Connections => self.show_connections,
            Overlay::Regions => self.show_regions,
            Overlay::Heatmap => self.show_heatmap,
            Overlay::Particles => self.show_particles,
        }
    }

    /// Show or hide an overlay.
    pub fn set_shown(&mut self, overlay: Overlay, shown: bool) {
        let flag = match overlay {
            Overlay::Connections => &mut self.show_connections,
            Overlay::Regions => &mut self.show_regions,
            Overlay::Heatmap => &mut self.show_heatmap,
            Overlay::Particles => &mut self.show_particles,
        };
        *flag = shown;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlays_toggle_independently() {
        let mut display = DisplayOptions::default();
        assert!(display.is_shown(Overlay::Connections));
        assert!(!display.is_shown(Overlay::Heatmap));
        display.set_shown(Overlay::Heatmap, true);
        display.set_shown(Overlay::Connections, false);
        assert!(display.is_shown(Overlay::Heatmap));
        assert!(!display.is_shown(Overlay::Connections));
        assert!(!display.is_shown(Overlay::Particles));
    }

    #[test]
    fn theme_toggles_back_and_forth() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}

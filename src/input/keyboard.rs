use serde::{Deserialize, Serialize};

/// Engine-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_heatmap = "KeyH"
/// reset_view = "KeyQ"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Show or hide latency arcs.
    ToggleConnections,
    /// Show or hide cloud-region discs.
    ToggleRegions,
    /// Show or hide the latency heatmap.
    ToggleHeatmap,
    /// Start or stop the data-flow simulation.
    ToggleParticles,
    /// Switch between the dark and light theme.
    ToggleTheme,
    /// Pause or resume idle rotation.
    ToggleAutoRotate,
    /// Restore the initial rotation and camera distance.
    ResetView,
}

impl KeyAction {
    /// Every action, in the order they are listed in help text.
    pub const ALL: [Self; 7] = [
        Self::ToggleConnections,
        Self::ToggleRegions,
        Self::ToggleHeatmap,
        Self::ToggleParticles,
        Self::ToggleTheme,
        Self::ToggleAutoRotate,
        Self::ResetView,
    ];
}

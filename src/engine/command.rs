//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a
//! pointer gesture or a programmatic call, is represented as a
//! `GlobeCommand`. Consumers construct commands and pass them to
//! [`GlobeEngine::execute`](super::GlobeEngine::execute).

use crate::input::KeyAction;
use crate::options::Overlay;

/// A discrete or parameterized operation the engine can perform.
///
/// ```ignore
/// engine.execute(GlobeCommand::ToggleOverlay(Overlay::Heatmap));
/// engine.execute(GlobeCommand::Zoom { delta: 1.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlobeCommand {
    // ── Rotation & camera ───────────────────────────────────────────
    /// Add to the globe rotation (radians).
    RotateGlobe {
        /// Rotation about X.
        delta_pitch: f32,
        /// Rotation about Y.
        delta_yaw: f32,
    },

    /// Move the camera along +Z (positive = farther).
    Zoom {
        /// Distance change.
        delta: f32,
    },

    /// Restore the initial rotation and camera distance.
    ResetView,

    /// Pause or resume idle rotation.
    ToggleAutoRotate,

    // ── Selection ───────────────────────────────────────────────────
    /// Ray-pick markers through a pixel position.
    Pick {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },

    // ── Display ─────────────────────────────────────────────────────
    /// Show or hide one overlay layer.
    ToggleOverlay(Overlay),

    /// Switch between the dark and light theme.
    ToggleTheme,
}

impl From<KeyAction> for GlobeCommand {
    fn from(action: KeyAction) -> Self {
        match action {
            KeyAction::ToggleConnections => Self::ToggleOverlay(Overlay::Connections),
            KeyAction::ToggleRegions => Self::ToggleOverlay(Overlay::Regions),
            KeyAction::ToggleHeatmap => Self::ToggleOverlay(Overlay::Heatmap),
            KeyAction::ToggleParticles => Self::ToggleOverlay(Overlay::Particles),
            KeyAction::ToggleTheme => Self::ToggleTheme,
            KeyAction::ToggleAutoRotate => Self::ToggleAutoRotate,
            KeyAction::ResetView => Self::ResetView,
        }
    }
}

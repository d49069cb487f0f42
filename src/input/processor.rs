//! Converts raw pointer events into engine commands.
//!
//! The `InteractionController` owns the drag state machine and the
//! key-binding map. It is the only thing that sits between raw window
//! events and the engine's [`execute`](crate::GlobeEngine::execute) method.

use glam::Vec2;

use super::event::InputEvent;
use crate::engine::command::GlobeCommand;
use crate::options::{CameraOptions, KeybindingOptions};

/// Pointer drag state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No button held.
    #[default]
    Idle,
    /// Button held; `last` is the previous pointer position.
    Dragging {
        /// Anchor for the next move delta.
        last: Vec2,
    },
}

/// Converts raw pointer events into [`GlobeCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = controller.handle_event(event) {
///     engine.execute(cmd);
/// }
///
/// if let Some(cmd) = controller.handle_key_press("KeyH") {
///     engine.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InteractionController {
    state: DragState,
    rotate_speed: f32,
    zoom_speed: f32,
    key_bindings: KeybindingOptions,
}

impl InteractionController {
    /// Create a controller with the given speeds and key bindings.
    #[must_use]
    pub fn new(camera: &CameraOptions, key_bindings: KeybindingOptions) -> Self {
        Self {
            state: DragState::Idle,
            rotate_speed: camera.rotate_speed,
            zoom_speed: camera.zoom_speed,
            key_bindings,
        }
    }

    /// Current drag state.
    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace speeds and bindings after an options change. A drag in
    /// progress is kept.
    pub fn reconfigure(
        &mut self,
        camera: &CameraOptions,
        key_bindings: KeybindingOptions,
    ) {
        self.rotate_speed = camera.rotate_speed;
        self.zoom_speed = camera.zoom_speed;
        self.key_bindings = key_bindings;
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<GlobeCommand> {
        self.key_bindings.lookup(key).map(GlobeCommand::from)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<GlobeCommand> {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.state = DragState::Dragging {
                    last: Vec2::new(x, y),
                };
                None
            }
            InputEvent::PointerMove { x, y } => self.handle_move(Vec2::new(x, y)),
            InputEvent::PointerUp => {
                self.state = DragState::Idle;
                None
            }
            InputEvent::Wheel { delta_y } => Some(GlobeCommand::Zoom {
                delta: delta_y * self.zoom_speed,
            }),
            InputEvent::Click { x, y } => Some(GlobeCommand::Pick { x, y }),
        }
    }

    fn handle_move(&mut self, pos: Vec2) -> Option<GlobeCommand> {
        let DragState::Dragging { last } = self.state else {
            return None;
        };
        self.state = DragState::Dragging { last: pos };
        let delta = (pos - last) * self.rotate_speed;
        Some(GlobeCommand::RotateGlobe {
            delta_pitch: delta.y,
            delta_yaw: delta.x,
        })
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(&CameraOptions::default(), KeybindingOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Overlay;

    #[test]
    fn move_without_press_does_nothing() {
        let mut ctl = InteractionController::default();
        assert_eq!(
            ctl.handle_event(InputEvent::PointerMove { x: 10.0, y: 10.0 }),
            None
        );
        assert_eq!(ctl.state(), DragState::Idle);
    }

    #[test]
    fn drag_rotates_by_scaled_delta() {
        let mut ctl = InteractionController::default();
        assert_eq!(
            ctl.handle_event(InputEvent::PointerDown { x: 100.0, y: 100.0 }),
            None
        );
        assert!(ctl.is_dragging());

        let cmd = ctl.handle_event(InputEvent::PointerMove { x: 110.0, y: 96.0 });
        assert!(matches!(
            cmd,
            Some(GlobeCommand::RotateGlobe { delta_pitch, delta_yaw })
                if (delta_yaw - 0.05).abs() < 1e-6
                    && (delta_pitch + 0.02).abs() < 1e-6
        ));
        assert_eq!(
            ctl.state(),
            DragState::Dragging {
                last: Vec2::new(110.0, 96.0)
            }
        );
    }

    #[test]
    fn release_returns_to_idle() {
        let mut ctl = InteractionController::default();
        let _ = ctl.handle_event(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        let _ = ctl.handle_event(InputEvent::PointerUp);
        assert_eq!(ctl.state(), DragState::Idle);
        assert_eq!(
            ctl.handle_event(InputEvent::PointerMove { x: 5.0, y: 5.0 }),
            None
        );
    }

    #[test]
    fn wheel_keeps_drag_state() {
        let mut ctl = InteractionController::default();
        let _ = ctl.handle_event(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        let cmd = ctl.handle_event(InputEvent::Wheel { delta_y: 100.0 });
        assert!(matches!(
            cmd,
            Some(GlobeCommand::Zoom { delta }) if (delta - 1.0).abs() < 1e-6
        ));
        assert!(ctl.is_dragging());
    }

    #[test]
    fn click_requests_pick() {
        let mut ctl = InteractionController::default();
        assert_eq!(
            ctl.handle_event(InputEvent::Click { x: 3.0, y: 4.0 }),
            Some(GlobeCommand::Pick { x: 3.0, y: 4.0 })
        );
    }

    #[test]
    fn key_press_maps_through_bindings() {
        let ctl = InteractionController::default();
        assert_eq!(
            ctl.handle_key_press("KeyP"),
            Some(GlobeCommand::ToggleOverlay(Overlay::Particles))
        );
        assert_eq!(ctl.handle_key_press("KeyT"), Some(GlobeCommand::ToggleTheme));
        assert_eq!(ctl.handle_key_press("F13"), None);
    }
}

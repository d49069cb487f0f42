//! Input and command dispatch for GlobeEngine

use super::command::GlobeCommand;
use super::GlobeEngine;
use crate::input::InputEvent;
use crate::options::Overlay;
use crate::scene::GlobeRotation;

impl GlobeEngine {
    /// Process a platform-agnostic pointer event.
    ///
    /// Returns `true` if the event produced a command.
    ///
    /// ```ignore
    /// engine.handle_input(InputEvent::PointerDown { x, y });
    /// engine.handle_input(InputEvent::Wheel { delta_y: 120.0 });
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match self.controller.handle_event(event) {
            Some(cmd) => {
                self.execute(cmd);
                true
            }
            None => false,
        }
    }

    /// Dispatch a key string (winit `KeyCode` debug format, e.g. `"KeyH"`)
    /// through the bindings. Returns `true` if it was bound.
    pub fn handle_key_press(&mut self, key: &str) -> bool {
        match self.controller.handle_key_press(key) {
            Some(cmd) => {
                self.execute(cmd);
                true
            }
            None => false,
        }
    }

    /// Execute one command.
    pub fn execute(&mut self, cmd: GlobeCommand) {
        match cmd {
            GlobeCommand::RotateGlobe {
                delta_pitch,
                delta_yaw,
            } => {
                self.frame.rotation.pitch += delta_pitch;
                self.frame.rotation.yaw += delta_yaw;
                self.scene.set_rotation(self.frame.rotation);
            }
            GlobeCommand::Zoom { delta } => self.camera.zoom(delta),
            GlobeCommand::ResetView => {
                self.frame.rotation = GlobeRotation::default();
                self.scene.set_rotation(self.frame.rotation);
                self.camera.set_distance(self.options.camera.distance);
            }
            GlobeCommand::ToggleAutoRotate => {
                let on = !self.options.display.auto_rotate;
                self.set_auto_rotate(on);
            }
            GlobeCommand::Pick { x, y } => self.pick(x, y),
            GlobeCommand::ToggleOverlay(overlay) => self.toggle_overlay(overlay),
            GlobeCommand::ToggleTheme => {
                let theme = self.options.display.theme.toggled();
                self.set_theme(theme);
            }
        }
    }

    /// Track a new viewport size; click positions map through it.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    /// Toggle one overlay.
    pub fn toggle_overlay(&mut self, overlay: Overlay) {
        let shown = !self.options.display.is_shown(overlay);
        self.set_overlay(overlay, shown);
    }

    fn pick(&mut self, x: f32, y: f32) {
        let ray = self.camera.ray_through(x, y);
        let Some(id) = self.scene.pick(&ray).map(str::to_owned) else {
            log::trace!("click at ({x}, {y}) hit nothing");
            return;
        };
        log::debug!("picked node {id}");
        if let Some(callback) = self.on_select.as_mut() {
            callback(&id);
        }
    }
}

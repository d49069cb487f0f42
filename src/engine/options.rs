//! Options methods for GlobeEngine

use std::path::Path;

use super::GlobeEngine;
use crate::error::GlobeError;
use crate::options::Options;

impl GlobeEngine {
    /// Replace options and apply all changes to subsystems.
    pub fn set_options(&mut self, new: Options) {
        let particles_changed = new.particles != self.options.particles
            || new.display.show_particles != self.options.display.show_particles;
        self.options = new;
        self.apply_options();
        if particles_changed && self.is_mounted() {
            self.apply_particle_toggle();
        }
    }

    /// Push current option values to the camera, input controller,
    /// simulation and base globe, then rebuild every layer group.
    fn apply_options(&mut self) {
        let co = &self.options.camera;
        self.camera.reconfigure(co);
        self.controller
            .reconfigure(co, self.options.keybindings.clone());
        self.simulation.set_options(self.options.particles.clone());
        self.scene.set_base(&self.options);
        self.scene.invalidate();
        self.resync();
    }

    /// Load options from a TOML preset and apply them.
    ///
    /// # Errors
    ///
    /// Returns the [`Options::load`] error; current options are kept.
    pub fn load_preset(&mut self, path: &Path) -> Result<(), GlobeError> {
        let options = Options::load(path)?;
        self.set_options(options);
        Ok(())
    }
}

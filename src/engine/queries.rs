//! Read-only queries for GlobeEngine

use glam::Vec2;

use super::frame::{FrameReport, FrameState};
use super::render_loop::FrameLoop;
use super::GlobeEngine;
use crate::camera::OrbitCamera;
use crate::geo::project;
use crate::input::InteractionController;
use crate::options::Options;
use crate::render::{build_draw_list, DrawList};
use crate::scene::{GlobeRotation, GlobeScene, SceneState};
use crate::simulation::ParticleSimulation;
use crate::topology::find_node;

impl GlobeEngine {
    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Host state as last set.
    #[must_use]
    pub fn state(&self) -> &SceneState {
        &self.state
    }

    /// The scene.
    #[must_use]
    pub fn scene(&self) -> &GlobeScene {
        &self.scene
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// The pointer controller.
    #[must_use]
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// The particle simulation.
    #[must_use]
    pub fn simulation(&self) -> &ParticleSimulation {
        &self.simulation
    }

    /// Explicit per-frame state.
    #[must_use]
    pub fn frame_state(&self) -> &FrameState {
        &self.frame
    }

    /// The frame loop handle.
    #[must_use]
    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }

    /// Counters from the most recent tick.
    #[must_use]
    pub fn last_frame_report(&self) -> FrameReport {
        self.last_report
    }

    /// Shared globe rotation.
    #[must_use]
    pub fn rotation(&self) -> GlobeRotation {
        self.frame.rotation
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// Draw list for the current state, without advancing time.
    #[must_use]
    pub fn draw_list(&self) -> DrawList {
        build_draw_list(&self.scene, &self.camera)
    }

    /// Pixel position of a node's marker under the current rotation, or
    /// `None` for an unknown node or one behind the camera.
    #[must_use]
    pub fn screen_position(&self, node_id: &str) -> Option<Vec2> {
        let node = find_node(&self.state.nodes, node_id)?;
        let local = project(node.lat, node.lng, self.options.geometry.marker_elevation);
        self.camera
            .project_to_screen(self.frame.rotation.quat() * local)
    }
}

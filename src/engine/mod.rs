//! The globe engine: owns every piece of per-frame state and drives the
//! frame loop.
//!
//! Host state flows in through setters (see `scene_sync.rs`), pointer
//! input through [`GlobeEngine::handle_input`], and every
//! [`GlobeEngine::tick`] issues exactly one draw to a
//! [`FrameSink`](crate::render::FrameSink).

/// Command vocabulary.
pub mod command;
/// Explicit per-frame state and the frame step.
pub mod frame;
mod input;
mod options;
mod queries;
/// Frame loop handle.
pub mod render_loop;
mod scene_sync;

use std::time::Duration;

pub use command::GlobeCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;

use self::frame::{step_frame, FrameParts, FrameReport, FrameState};
use self::render_loop::FrameLoop;
use crate::camera::OrbitCamera;
use crate::input::InteractionController;
use crate::options::Options;
use crate::render::FrameSink;
use crate::scene::{GlobeScene, SceneState};
use crate::simulation::ParticleSimulation;

/// Callback invoked with the node id of a clicked marker.
pub type SelectCallback = Box<dyn FnMut(&str)>;

/// Headless engine for the interactive globe.
///
/// # Usage
///
/// ```ignore
/// let mut engine = GlobeEngine::new(Options::default(), 1280, 720);
/// engine.on_select(|id| println!("selected {id}"));
/// engine.set_nodes(topology::catalog::default_exchanges());
/// engine.mount();
///
/// // Once per display frame:
/// engine.tick(dt, &mut renderer);
///
/// // On unmount:
/// engine.teardown();
/// ```
pub struct GlobeEngine {
    options: Options,
    state: SceneState,
    scene: GlobeScene,
    camera: OrbitCamera,
    controller: InteractionController,
    simulation: ParticleSimulation,
    frame: FrameState,
    frame_loop: FrameLoop,
    rng: StdRng,
    on_select: Option<SelectCallback>,
    last_report: FrameReport,
}

impl GlobeEngine {
    /// Engine for a viewport in physical pixels. Nothing draws until
    /// [`mount`](Self::mount).
    #[must_use]
    pub fn new(options: Options, width: u32, height: u32) -> Self {
        Self::with_rng(options, width, height, StdRng::from_rng(&mut rand::rng()))
    }

    /// Like [`new`](Self::new) with deterministic particle spawns.
    #[must_use]
    pub fn with_seed(options: Options, width: u32, height: u32, seed: u64) -> Self {
        Self::with_rng(options, width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(options: Options, width: u32, height: u32, rng: StdRng) -> Self {
        let scene = GlobeScene::new(&options);
        let camera = OrbitCamera::new(&options.camera, width, height);
        let controller =
            InteractionController::new(&options.camera, options.keybindings.clone());
        let simulation = ParticleSimulation::new(options.particles.clone());
        Self {
            options,
            state: SceneState::default(),
            scene,
            camera,
            controller,
            simulation,
            frame: FrameState::default(),
            frame_loop: FrameLoop::default(),
            rng,
            on_select: None,
            last_report: FrameReport::default(),
        }
    }

    /// Register the selection callback, replacing any previous one.
    pub fn on_select(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_select = Some(Box::new(callback));
    }

    /// Build every layer group and start the frame loop.
    pub fn mount(&mut self) {
        if self.scene.is_torn_down() {
            log::warn!("mount after teardown ignored");
            return;
        }
        self.resync();
        self.apply_particle_toggle();
        self.frame_loop.start();
        log::info!("globe mounted with {} nodes", self.state.nodes.len());
    }

    /// Cancel the frame loop and timers, then release every resource.
    /// Idempotent.
    pub fn teardown(&mut self) {
        self.frame_loop.cancel();
        self.simulation.disable();
        self.scene.teardown();
        self.on_select = None;
    }

    /// Whether the frame loop is running.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.frame_loop.is_running()
    }

    /// Advance by `dt` and draw exactly once. Returns `false` without
    /// drawing when the loop is not running.
    pub fn tick(&mut self, dt: Duration, sink: &mut dyn FrameSink) -> bool {
        if !self.frame_loop.is_running() {
            return false;
        }
        let parts = FrameParts {
            scene: &mut self.scene,
            simulation: &mut self.simulation,
            nodes: &self.state.nodes,
            camera: &self.camera,
            options: &self.options,
            rng: &mut self.rng,
        };
        self.last_report = step_frame(
            &mut self.frame,
            dt,
            self.controller.is_dragging(),
            parts,
            sink,
        );
        self.frame_loop.count_frame();
        true
    }

    fn resync(&mut self) {
        let _ = self.scene.sync(&self.state, &self.options);
    }
}

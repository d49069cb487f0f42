//! One frame of the render loop with its state passed in explicitly.

use std::time::Duration;

use rand::Rng;

use crate::camera::OrbitCamera;
use crate::options::Options;
use crate::render::{build_draw_list, FrameSink};
use crate::scene::{GlobeRotation, GlobeScene};
use crate::simulation::ParticleSimulation;
use crate::topology::Node;

/// Per-frame mutable state owned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameState {
    /// Shared globe rotation.
    pub rotation: GlobeRotation,
    /// Monotonic clock advanced by every tick; timers are deadlines on it.
    pub clock: Duration,
}

/// Borrowed subsystems a frame touches.
pub struct FrameParts<'a, R: Rng + ?Sized> {
    /// Scene to rotate, update and draw.
    pub scene: &'a mut GlobeScene,
    /// Particle simulation to advance.
    pub simulation: &'a mut ParticleSimulation,
    /// Active nodes for spawning and particle paths.
    pub nodes: &'a [Node],
    /// Camera for the draw list.
    pub camera: &'a OrbitCamera,
    /// Current options.
    pub options: &'a Options,
    /// Randomness for particle spawns.
    pub rng: &'a mut R,
}

/// What one frame did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Particles spawned by timers this frame.
    pub spawned: usize,
    /// Particles retired this frame.
    pub retired: usize,
}

/// Run one frame: idle rotation, then particle timers and motion, then
/// exactly one draw.
pub fn step_frame<R: Rng + ?Sized>(
    frame: &mut FrameState,
    dt: Duration,
    dragging: bool,
    parts: FrameParts<'_, R>,
    sink: &mut dyn FrameSink,
) -> FrameReport {
    frame.clock += dt;

    if !dragging && parts.options.display.auto_rotate {
        frame.rotation.yaw += parts.options.camera.auto_rotate_speed;
    }
    parts.scene.set_rotation(frame.rotation);

    let spawned = parts
        .simulation
        .advance_timers(frame.clock, parts.nodes, parts.rng);
    let retired = parts.simulation.step();
    let visuals = parts.simulation.visuals(parts.nodes);
    parts.scene.sync_particles(&visuals, parts.options);

    let list = build_draw_list(parts.scene, parts.camera);
    log::trace!(
        "frame at {:?}: {} items, {} particles",
        frame.clock,
        list.item_count(),
        parts.simulation.len()
    );
    sink.draw(&list);

    FrameReport { spawned, retired }
}

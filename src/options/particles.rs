use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::color::rgb;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Data Flow", inline)]
#[serde(default)]
/// Data-flow particle spawning, motion and appearance.
pub struct ParticleOptions {
    /// Maximum number of live particles.
    #[schemars(title = "Max Particles", range(min = 1, max = 100))]
    pub max_particles: usize,
    /// Particles spawned when the layer is enabled.
    #[schemars(skip)]
    pub burst_count: u32,
    /// Delay between burst spawns in milliseconds.
    #[schemars(skip)]
    pub burst_stagger_ms: u64,
    /// Period of the recurring spawn timer in milliseconds.
    #[schemars(title = "Spawn Interval (ms)", range(min = 100, max = 10000))]
    pub spawn_interval_ms: u64,
    /// Progress added per frame.
    #[schemars(title = "Speed", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub speed: f32,
    /// Progress after which the particle fades out.
    #[schemars(skip)]
    pub fade_start: f32,
    /// Radius of the particle path endpoints.
    #[schemars(skip)]
    pub elevation: f32,
    /// Radius of the particle path midpoint.
    #[schemars(skip)]
    pub bulge: f32,
    /// Particle sphere radius before pulsing.
    #[schemars(title = "Particle Size", range(min = 0.01, max = 0.3), extend("step" = 0.01))]
    pub size: f32,
    /// Particle color.
    #[schemars(skip)]
    pub color: [f32; 3],
    /// Lower bound of the random volume payload.
    #[schemars(skip)]
    pub min_volume: f32,
    /// Upper bound (exclusive) of the random volume payload.
    #[schemars(skip)]
    pub max_volume: f32,
}

impl Default for ParticleOptions {
    fn default() -> Self {
        Self {
            max_particles: 15,
            burst_count: 5,
            burst_stagger_ms: 500,
            spawn_interval_ms: 1000,
            speed: 0.01,
            fade_start: 0.9,
            elevation: 2.15,
            bulge: 2.5,
            size: 0.1,
            color: rgb(0x00ff00),
            min_volume: 500.0,
            max_volume: 1500.0,
        }
    }
}

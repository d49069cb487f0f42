use std::f32::consts::TAU;

use glam::Vec3;

/// Opacity falls off at this rate once the fade starts.
const FADE_RATE: f32 = 10.0;

/// One traveling data packet between two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Unique for the lifetime of the simulation.
    pub id: u64,
    /// Source node id.
    pub from_id: String,
    /// Destination node id. Never equals `from_id`.
    pub to_id: String,
    /// Fraction of the path traveled, in `[0, 1]`.
    pub progress: f32,
    /// Progress added per frame.
    pub speed: f32,
    /// Opaque payload carried for the host.
    pub volume: f32,
}

impl Particle {
    /// Whether the particle has arrived and is due for removal.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Advance one frame. Progress never decreases and stops at 1.
    pub fn advance(&mut self) {
        self.progress = (self.progress + self.speed.max(0.0)).min(1.0);
    }

    /// Pulse factor applied to the particle radius.
    #[must_use]
    pub fn scale(&self) -> f32 {
        1.0 + (self.progress * TAU).sin() * 0.5
    }

    /// Opaque until `fade_start`, then `(1 - progress) * 10`.
    #[must_use]
    pub fn opacity(&self, fade_start: f32) -> f32 {
        if self.progress < fade_start {
            1.0
        } else {
            (1.0 - self.progress) * FADE_RATE
        }
    }
}

/// Where and how a particle is drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleVisual {
    /// Id of the particle this visual belongs to.
    pub id: u64,
    /// Position along the arc, in un-rotated globe space.
    pub position: Vec3,
    /// Pulse factor.
    pub scale: f32,
    /// Alpha.
    pub opacity: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(progress: f32) -> Particle {
        Particle {
            id: 1,
            from_id: "a".into(),
            to_id: "b".into(),
            progress,
            speed: 0.3,
            volume: 700.0,
        }
    }

    #[test]
    fn advance_caps_at_one() {
        let mut p = particle(0.0);
        let mut last = p.progress;
        for _ in 0..10 {
            p.advance();
            assert!(p.progress >= last);
            assert!(p.progress <= 1.0);
            last = p.progress;
        }
        assert!(p.is_complete());
    }

    #[test]
    fn pulse_peaks_at_quarter() {
        assert!((particle(0.0).scale() - 1.0).abs() < 1e-6);
        assert!((particle(0.25).scale() - 1.5).abs() < 1e-6);
        assert!((particle(0.75).scale() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn fade_is_literal_after_start() {
        assert_eq!(particle(0.5).opacity(0.9), 1.0);
        assert!((particle(0.95).opacity(0.9) - 0.5).abs() < 1e-5);
        assert_eq!(particle(1.0).opacity(0.9), 0.0);
        // With a later fade start the formula still uses the fixed rate.
        assert!((particle(0.97).opacity(0.95) - 0.3).abs() < 1e-5);
    }
}

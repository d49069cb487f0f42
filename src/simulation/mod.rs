//! Data-flow particles: a bounded set of short-lived packets that spawn
//! on timers, travel along bulged arcs between random node pairs and
//! retire after arrival.

mod particle;
mod schedule;

use std::time::Duration;

use rand::Rng;

pub use self::particle::{Particle, ParticleVisual};
pub use self::schedule::SpawnSchedule;
use crate::geo::{project, ArcCurve};
use crate::options::ParticleOptions;
use crate::topology::{find_node, Node};

/// Owns the live particles and their spawn timers.
#[derive(Debug, Clone)]
pub struct ParticleSimulation {
    particles: Vec<Particle>,
    schedule: SpawnSchedule,
    next_id: u64,
    options: ParticleOptions,
}

impl ParticleSimulation {
    /// Create an idle simulation.
    #[must_use]
    pub fn new(options: ParticleOptions) -> Self {
        Self {
            particles: Vec::new(),
            schedule: SpawnSchedule::default(),
            next_id: 0,
            options,
        }
    }

    /// Current parameters.
    #[must_use]
    pub fn options(&self) -> &ParticleOptions {
        &self.options
    }

    /// Replace the parameters. Live particles keep their speed.
    pub fn set_options(&mut self, options: ParticleOptions) {
        self.options = options;
    }

    /// Live particles in spawn order.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether no particles are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Whether spawn timers are armed.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.schedule.is_active()
    }

    /// Arm the burst and the recurring timer from `now`. Particles already
    /// in flight are dropped.
    pub fn enable(&mut self, now: Duration) {
        self.clear();
        self.schedule.start(
            now,
            self.options.burst_count,
            Duration::from_millis(self.options.burst_stagger_ms),
            Duration::from_millis(self.options.spawn_interval_ms),
        );
        log::debug!("data flow enabled, {} burst spawns", self.options.burst_count);
    }

    /// Cancel every timer and drop every particle. Idempotent.
    pub fn disable(&mut self) {
        if self.schedule.is_active() || !self.particles.is_empty() {
            log::debug!("data flow disabled, dropping {} particles", self.particles.len());
        }
        self.schedule.cancel();
        self.clear();
    }

    fn clear(&mut self) {
        self.particles.clear();
    }

    /// Fire every spawn deadline up to `now`. Returns how many particles
    /// were created; fires past the cap or with fewer than two nodes are
    /// skipped.
    pub fn advance_timers<R: Rng + ?Sized>(
        &mut self,
        now: Duration,
        nodes: &[Node],
        rng: &mut R,
    ) -> usize {
        let due = self.schedule.fire_due(now);
        (0..due).filter(|_| self.spawn(nodes, rng)).count()
    }

    /// Spawn one particle between a random pair of distinct nodes.
    /// Returns `false` when at the cap or with fewer than two nodes.
    pub fn spawn<R: Rng + ?Sized>(&mut self, nodes: &[Node], rng: &mut R) -> bool {
        if nodes.len() < 2 {
            log::trace!("particle spawn skipped: {} nodes", nodes.len());
            return false;
        }
        if self.particles.len() >= self.options.max_particles {
            log::trace!("particle spawn skipped: at cap");
            return false;
        }
        let from = rng.random_range(0..nodes.len());
        let mut to = rng.random_range(0..nodes.len() - 1);
        if to >= from {
            to += 1;
        }
        let volume = if self.options.max_volume > self.options.min_volume {
            rng.random_range(self.options.min_volume..self.options.max_volume)
        } else {
            self.options.min_volume
        };
        let particle = Particle {
            id: self.next_id,
            from_id: nodes[from].id.clone(),
            to_id: nodes[to].id.clone(),
            progress: 0.0,
            speed: self.options.speed,
            volume,
        };
        log::debug!(
            "particle {} spawned {} -> {}",
            particle.id,
            particle.from_id,
            particle.to_id
        );
        self.next_id += 1;
        self.particles.push(particle);
        true
    }

    /// One frame of motion: particles that arrived on the previous frame
    /// are retired, the rest advance. Returns the retired count.
    pub fn step(&mut self) -> usize {
        let before = self.particles.len();
        self.particles.retain(|p| !p.is_complete());
        let retired = before - self.particles.len();
        if retired > 0 {
            log::debug!("{retired} particles retired");
        }
        for particle in &mut self.particles {
            particle.advance();
        }
        retired
    }

    /// Position, pulse and alpha of every particle whose endpoints still
    /// resolve in `nodes`.
    #[must_use]
    pub fn visuals(&self, nodes: &[Node]) -> Vec<ParticleVisual> {
        self.particles
            .iter()
            .filter_map(|p| {
                let from = find_node(nodes, &p.from_id)?;
                let to = find_node(nodes, &p.to_id)?;
                let arc = ArcCurve::new(
                    project(from.lat, from.lng, self.options.elevation),
                    project(to.lat, to.lng, self.options.elevation),
                    self.options.bulge,
                );
                Some(ParticleVisual {
                    id: p.id,
                    position: arc.point_at(p.progress),
                    scale: p.scale(),
                    opacity: p.opacity(self.options.fade_start),
                })
            })
            .collect()
    }
}

impl Default for ParticleSimulation {
    fn default() -> Self {
        Self::new(ParticleOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::topology::{catalog, Provider};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn two_nodes() -> Vec<Node> {
        vec![
            Node::new("a", "A", 0.0, 0.0, Provider::Aws, "r"),
            Node::new("b", "B", 0.0, 90.0, Provider::Gcp, "r"),
        ]
    }

    #[test]
    fn burst_spawns_first_particle_immediately() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut sim = ParticleSimulation::default();
        sim.enable(ms(0));
        assert_eq!(sim.advance_timers(ms(0), &two_nodes(), &mut rng), 1);
        assert_eq!(sim.advance_timers(ms(499), &two_nodes(), &mut rng), 0);
        assert_eq!(sim.advance_timers(ms(500), &two_nodes(), &mut rng), 1);
    }

    #[test]
    fn spawn_picks_distinct_endpoints() {
        let mut rng = StdRng::seed_from_u64(11);
        let nodes = catalog::default_exchanges();
        let mut sim = ParticleSimulation::new(ParticleOptions {
            max_particles: 200,
            ..ParticleOptions::default()
        });
        for _ in 0..200 {
            assert!(sim.spawn(&nodes, &mut rng));
        }
        for p in sim.particles() {
            assert_ne!(p.from_id, p.to_id);
            assert!((500.0..1500.0).contains(&p.volume));
            assert_eq!(p.progress, 0.0);
        }
    }

    #[test]
    fn no_spawn_with_fewer_than_two_nodes() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut sim = ParticleSimulation::default();
        sim.enable(ms(0));
        let one = vec![Node::new("a", "A", 0.0, 0.0, Provider::Aws, "r")];
        assert_eq!(sim.advance_timers(ms(10_000), &one, &mut rng), 0);
        assert_eq!(sim.advance_timers(ms(20_000), &[], &mut rng), 0);
        assert!(sim.is_empty());
    }

    #[test]
    fn cap_is_never_exceeded() {
        let mut rng = StdRng::seed_from_u64(3);
        let nodes = catalog::default_exchanges();
        let mut sim = ParticleSimulation::new(ParticleOptions {
            speed: 0.0,
            ..ParticleOptions::default()
        });
        sim.enable(ms(0));
        for frame in 0..2_000u64 {
            let _ = sim.advance_timers(ms(frame * 16), &nodes, &mut rng);
            let _ = sim.step();
            assert!(sim.len() <= 15);
        }
        assert_eq!(sim.len(), 15);
    }

    #[test]
    fn progress_is_monotonic_and_retires_one_frame_after_arrival() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut sim = ParticleSimulation::new(ParticleOptions {
            speed: 0.25,
            ..ParticleOptions::default()
        });
        assert!(sim.spawn(&two_nodes(), &mut rng));

        let mut last = 0.0;
        for _ in 0..4 {
            assert_eq!(sim.step(), 0);
            let p = &sim.particles()[0];
            assert!(p.progress >= last);
            last = p.progress;
        }
        // Arrived; still drawn, fully faded.
        assert_eq!(sim.particles()[0].progress, 1.0);
        let visuals = sim.visuals(&two_nodes());
        assert_eq!(visuals.len(), 1);
        assert_eq!(visuals[0].opacity, 0.0);

        assert_eq!(sim.step(), 1);
        assert!(sim.is_empty());
    }

    #[test]
    fn disable_clears_particles_and_timers() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut sim = ParticleSimulation::default();
        sim.enable(ms(0));
        let _ = sim.advance_timers(ms(1_200), &two_nodes(), &mut rng);
        assert!(!sim.is_empty());

        sim.disable();
        sim.disable();
        assert!(sim.is_empty());
        assert!(!sim.is_enabled());
        assert_eq!(sim.advance_timers(ms(60_000), &two_nodes(), &mut rng), 0);
    }

    #[test]
    fn visuals_follow_arc_endpoints() {
        let mut rng = StdRng::seed_from_u64(2);
        let nodes = two_nodes();
        let mut sim = ParticleSimulation::default();
        assert!(sim.spawn(&nodes, &mut rng));
        let p = sim.particles()[0].clone();
        let from = find_node(&nodes, &p.from_id).unwrap();

        let v = sim.visuals(&nodes)[0];
        let start = project(from.lat, from.lng, 2.15);
        assert!((v.position - start).length() < 1e-5);
        assert_eq!(v.scale, 1.0);
        assert_eq!(v.opacity, 1.0);
    }

    #[test]
    fn visuals_skip_unresolved_nodes() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut sim = ParticleSimulation::default();
        assert!(sim.spawn(&two_nodes(), &mut rng));
        assert!(sim.visuals(&two_nodes()[..1]).is_empty());
        // Motion continues even while the visual is skipped.
        let _ = sim.step();
        assert!(sim.particles()[0].progress > 0.0);
    }
}

use std::collections::VecDeque;
use std::time::Duration;

/// Shortest allowed period of the recurring timer.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Spawn deadlines against a monotonic clock: a one-shot burst followed
/// by a recurring interval.
#[derive(Debug, Clone, Default)]
pub struct SpawnSchedule {
    burst: VecDeque<Duration>,
    next_tick: Option<Duration>,
    interval: Duration,
}

impl SpawnSchedule {
    /// Schedule `burst_count` spawns `stagger` apart starting at `now`,
    /// and a recurring spawn every `interval` starting one period later.
    /// Any previous schedule is replaced.
    pub fn start(
        &mut self,
        now: Duration,
        burst_count: u32,
        stagger: Duration,
        interval: Duration,
    ) {
        self.burst = (0..burst_count).map(|i| now + stagger * i).collect();
        self.interval = interval.max(MIN_INTERVAL);
        self.next_tick = Some(now + self.interval);
    }

    /// Drop every pending deadline. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        self.burst.clear();
        self.next_tick = None;
    }

    /// Whether the recurring timer is armed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Number of burst spawns still pending.
    #[must_use]
    pub fn pending_burst(&self) -> usize {
        self.burst.len()
    }

    /// Consume every deadline at or before `now` and return how many
    /// spawns fired. Interval deadlines missed during a long frame all
    /// fire.
    pub fn fire_due(&mut self, now: Duration) -> usize {
        let mut fired = 0;
        while self.burst.front().is_some_and(|&at| at <= now) {
            let _ = self.burst.pop_front();
            fired += 1;
        }
        if let Some(mut next) = self.next_tick {
            while next <= now {
                fired += 1;
                next += self.interval;
            }
            self.next_tick = Some(next);
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn started() -> SpawnSchedule {
        let mut s = SpawnSchedule::default();
        s.start(ms(0), 5, ms(500), ms(1000));
        s
    }

    #[test]
    fn burst_fires_first_spawn_immediately() {
        let mut s = started();
        assert_eq!(s.fire_due(ms(0)), 1);
        assert_eq!(s.pending_burst(), 4);
    }

    #[test]
    fn burst_and_interval_interleave() {
        let mut s = started();
        // 0, 500 from the burst
        assert_eq!(s.fire_due(ms(999)), 2);
        // 1000 from both the burst and the interval
        assert_eq!(s.fire_due(ms(1000)), 2);
        // 1500, 2000 burst; 2000 interval
        assert_eq!(s.fire_due(ms(2000)), 3);
        assert_eq!(s.pending_burst(), 0);
        assert_eq!(s.fire_due(ms(2999)), 0);
        assert_eq!(s.fire_due(ms(3000)), 1);
    }

    #[test]
    fn long_frame_catches_up() {
        let mut s = SpawnSchedule::default();
        s.start(ms(0), 0, ms(500), ms(1000));
        assert_eq!(s.fire_due(ms(3500)), 3);
        assert_eq!(s.fire_due(ms(3999)), 0);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut s = started();
        s.cancel();
        s.cancel();
        assert!(!s.is_active());
        assert_eq!(s.fire_due(ms(10_000)), 0);
    }

    #[test]
    fn zero_interval_is_clamped() {
        let mut s = SpawnSchedule::default();
        s.start(ms(0), 0, ms(0), Duration::ZERO);
        assert_eq!(s.fire_due(ms(5)), 5);
    }
}

//! Synthetic latency source for the demo viewer.
//!
//! Real deployments measure latency elsewhere and push it in through
//! [`GlobeEngine::set_live_latencies`](crate::GlobeEngine::set_live_latencies)
//! and [`GlobeEngine::set_links`](crate::GlobeEngine::set_links). The
//! synthetic feed produces plausible values on the same cadence so the
//! viewer has something to show.

use std::time::Duration;

use rand::Rng;

use crate::topology::{LinkSample, LiveLatencies, Node};

/// Latency assumed for a link endpoint with no live measurement.
const DEFAULT_ENDPOINT_MS: f32 = 50.0;

/// New data produced by one poll.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedUpdate {
    /// Fresh live latencies, if a live refresh was due.
    pub live: Option<LiveLatencies>,
    /// Fresh link samples, if a link refresh was due.
    pub links: Option<Vec<LinkSample>>,
}

impl FeedUpdate {
    /// Whether the poll produced nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_none() && self.links.is_none()
    }
}

/// A source of live latencies and link samples, polled once per frame.
pub trait LatencyFeed {
    /// Produce whatever is due at monotonic time `now`. `wall_ms` stamps
    /// new link samples.
    fn poll(&mut self, now: Duration, wall_ms: u64, nodes: &[Node]) -> FeedUpdate;
}

/// Refresh cadence and sample count for [`SyntheticFeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSchedule {
    /// Period of live latency refreshes.
    pub live_every: Duration,
    /// Period of link sample refreshes.
    pub links_every: Duration,
    /// Link samples generated per refresh.
    pub link_count: usize,
}

impl Default for FeedSchedule {
    fn default() -> Self {
        Self {
            live_every: Duration::from_secs(10),
            links_every: Duration::from_secs(8),
            link_count: 6,
        }
    }
}

/// Random live latencies in `[50, 150]` ms and random links whose latency
/// is the mean of their endpoints.
///
/// Both refresh immediately on the first poll. Links are also regenerated
/// whenever the live latencies change.
#[derive(Debug, Clone)]
pub struct SyntheticFeed<R> {
    rng: R,
    schedule: FeedSchedule,
    next_live: Duration,
    next_links: Duration,
    live: LiveLatencies,
}

impl<R: Rng> SyntheticFeed<R> {
    /// Feed with the default cadence.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self::with_schedule(rng, FeedSchedule::default())
    }

    /// Feed with a custom cadence.
    #[must_use]
    pub fn with_schedule(rng: R, schedule: FeedSchedule) -> Self {
        Self {
            rng,
            schedule,
            next_live: Duration::ZERO,
            next_links: Duration::ZERO,
            live: LiveLatencies::new(),
        }
    }

    /// Latest live latencies.
    #[must_use]
    pub fn live(&self) -> &LiveLatencies {
        &self.live
    }

    fn refresh_live(&mut self, nodes: &[Node]) -> LiveLatencies {
        let live: LiveLatencies = nodes
            .iter()
            .map(|node| {
                let ms = (50.0 + self.rng.random::<f32>() * 100.0).round();
                (node.id.as_str(), ms)
            })
            .collect();
        self.live = live.clone();
        live
    }

    fn refresh_links(&mut self, nodes: &[Node], wall_ms: u64) -> Vec<LinkSample> {
        let n = nodes.len();
        if n < 2 {
            return Vec::new();
        }
        (0..self.schedule.link_count)
            .map(|_| {
                let from = self.rng.random_range(0..n);
                let to = (from + 1 + self.rng.random_range(0..n - 1)) % n;
                let a = self.live.get_or(&nodes[from].id, DEFAULT_ENDPOINT_MS);
                let b = self.live.get_or(&nodes[to].id, DEFAULT_ENDPOINT_MS);
                LinkSample::new(
                    nodes[from].id.clone(),
                    nodes[to].id.clone(),
                    ((a + b) / 2.0).round(),
                    wall_ms,
                )
            })
            .collect()
    }
}

impl<R: Rng> LatencyFeed for SyntheticFeed<R> {
    fn poll(&mut self, now: Duration, wall_ms: u64, nodes: &[Node]) -> FeedUpdate {
        let mut update = FeedUpdate::default();
        if now >= self.next_live {
            update.live = Some(self.refresh_live(nodes));
            self.next_live = now + self.schedule.live_every;
            log::debug!("synthetic feed: live latencies for {} nodes", nodes.len());
        }
        if update.live.is_some() || now >= self.next_links {
            update.links = Some(self.refresh_links(nodes, wall_ms));
            self.next_links = now + self.schedule.links_every;
        }
        update
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::topology::catalog;

    fn feed() -> SyntheticFeed<StdRng> {
        SyntheticFeed::new(StdRng::seed_from_u64(99))
    }

    #[test]
    fn first_poll_produces_both() {
        let nodes = catalog::default_exchanges();
        let mut feed = feed();
        let update = feed.poll(Duration::ZERO, 1_000, &nodes);
        let live = update.live.unwrap();
        assert_eq!(live.len(), nodes.len());
        for node in &nodes {
            let ms = live.get(&node.id).unwrap();
            assert!((50.0..=150.0).contains(&ms));
            assert_eq!(ms, ms.round());
        }
        let links = update.links.unwrap();
        assert_eq!(links.len(), 6);
        for link in &links {
            assert_ne!(link.from_id, link.to_id);
            assert_eq!(link.timestamp_ms, 1_000);
            let a = live.get(&link.from_id).unwrap();
            let b = live.get(&link.to_id).unwrap();
            assert_eq!(link.latency_ms, ((a + b) / 2.0).round());
        }
    }

    #[test]
    fn cadence_follows_schedule() {
        let nodes = catalog::default_exchanges();
        let mut feed = feed();
        let _ = feed.poll(Duration::ZERO, 0, &nodes);
        assert!(feed.poll(Duration::from_secs(7), 0, &nodes).is_empty());

        let at_8 = feed.poll(Duration::from_secs(8), 0, &nodes);
        assert!(at_8.live.is_none());
        assert!(at_8.links.is_some());

        let at_10 = feed.poll(Duration::from_secs(10), 0, &nodes);
        assert!(at_10.live.is_some());
        assert!(at_10.links.is_some());
    }

    #[test]
    fn too_few_nodes_gives_no_links() {
        let nodes = catalog::default_exchanges();
        let mut feed = feed();
        let update = feed.poll(Duration::ZERO, 0, &nodes[..1]);
        assert_eq!(update.links, Some(Vec::new()));
        assert_eq!(update.live.map(|l| l.len()), Some(1));
    }

    #[test]
    fn missing_live_defaults_to_fifty() {
        let nodes = catalog::default_exchanges();
        let mut feed = feed();
        let links = feed.refresh_links(&nodes, 0);
        assert!(links.iter().all(|l| l.latency_ms == 50.0));
    }
}

use rustc_hash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Latency bucket used for arc and heatmap coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LatencyTier {
    /// Below the warning threshold.
    Good,
    /// At or above the warning threshold, below critical.
    Warning,
    /// At or above the critical threshold.
    Critical,
}

impl LatencyTier {
    /// Classify with the default 50 ms / 150 ms thresholds.
    #[must_use]
    pub fn of(latency_ms: f32) -> Self {
        LatencyThresholds::default().tier(latency_ms)
    }
}

/// Inclusive lower bounds of the warning and critical tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LatencyThresholds {
    /// Latencies at or above this are at least [`LatencyTier::Warning`].
    pub warning_ms: f32,
    /// Latencies at or above this are [`LatencyTier::Critical`].
    pub critical_ms: f32,
}

impl Default for LatencyThresholds {
    fn default() -> Self {
        Self {
            warning_ms: 50.0,
            critical_ms: 150.0,
        }
    }
}

impl LatencyThresholds {
    /// Bucket a latency. NaN falls through to critical.
    #[must_use]
    pub fn tier(&self, latency_ms: f32) -> LatencyTier {
        if latency_ms < self.warning_ms {
            LatencyTier::Good
        } else if latency_ms < self.critical_ms {
            LatencyTier::Warning
        } else {
            LatencyTier::Critical
        }
    }
}

/// Live per-node latency keyed by lower-cased node id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveLatencies {
    by_id: FxHashMap<String, f32>,
}

impl LiveLatencies {
    /// Empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a latency. The id is lower-cased.
    pub fn insert(&mut self, id: &str, latency_ms: f32) {
        let _ = self.by_id.insert(id.to_lowercase(), latency_ms);
    }

    /// Latency for `id` (case-insensitive), if known.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<f32> {
        self.by_id.get(&id.to_lowercase()).copied()
    }

    /// Latency for `id`, or `default_ms` when unknown.
    #[must_use]
    pub fn get_or(&self, id: &str, default_ms: f32) -> f32 {
        self.get(id).unwrap_or(default_ms)
    }

    /// Number of nodes with a measurement.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether no node has a measurement.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, f32)> for LiveLatencies {
    fn from_iter<I: IntoIterator<Item = (S, f32)>>(iter: I) -> Self {
        let mut live = Self::new();
        for (id, ms) in iter {
            live.insert(id.as_ref(), ms);
        }
        live
    }
}

use serde::{Deserialize, Serialize};

/// One observed latency measurement between two nodes.
///
/// Samples are neither symmetric nor deduplicated; several samples may
/// reference the same pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkSample {
    /// Source node id.
    pub from_id: String,
    /// Destination node id.
    pub to_id: String,
    /// Latency in milliseconds (non-negative).
    pub latency_ms: f32,
    /// Capture time in milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
}

impl LinkSample {
    /// Convenience constructor.
    #[must_use]
    pub fn new(
        from_id: impl Into<String>,
        to_id: impl Into<String>,
        latency_ms: f32,
        timestamp_ms: u64,
    ) -> Self {
        Self {
            from_id: from_id.into(),
            to_id: to_id.into(),
            latency_ms,
            timestamp_ms,
        }
    }
}

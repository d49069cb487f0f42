//! Host-supplied data: nodes, link samples, live latencies and the
//! cloud-region overlays drawn by the regions layer.

pub mod catalog;
mod latency;
mod link;
mod node;
mod region;

pub use latency::{LatencyThresholds, LatencyTier, LiveLatencies};
pub use link::LinkSample;
pub use node::{find_node, Node, Provider};
pub use region::CloudRegion;

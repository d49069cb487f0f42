//! Built-in exchange and cloud-region sets used by the viewer and as
//! option defaults.

use super::{CloudRegion, Node, Provider};

/// The default exchange set.
#[must_use]
pub fn default_exchanges() -> Vec<Node> {
    vec![
        Node::new("binance", "Binance", 35.6762, 139.6503, Provider::Aws, "ap-northeast-1"),
        Node::new("okx", "OKX", 22.3193, 114.1694, Provider::Aws, "ap-east-1"),
        Node::new("deribit", "Deribit", 52.3676, 4.9041, Provider::Gcp, "europe-west4"),
        Node::new("bybit", "Bybit", 1.3521, 103.8198, Provider::Aws, "ap-southeast-1"),
        Node::new("coinbase", "Coinbase", 37.7749, -122.4194, Provider::Gcp, "us-west1"),
        Node::new("kraken", "Kraken", 51.5074, -0.1278, Provider::Azure, "uk-south"),
        Node::new("huobi", "Huobi", 39.9042, 116.4074, Provider::Aws, "cn-north-1"),
        Node::new("bitfinex", "Bitfinex", 40.7128, -74.006, Provider::Azure, "us-east"),
    ]
}

/// The default cloud-region overlays.
#[must_use]
pub fn default_regions() -> Vec<CloudRegion> {
    vec![
        CloudRegion::new(Provider::Aws, "US East", 38.0, -78.0, 15.0),
        CloudRegion::new(Provider::Aws, "Asia Pacific", 25.0, 120.0, 20.0),
        CloudRegion::new(Provider::Gcp, "Europe West", 50.0, 8.0, 15.0),
        CloudRegion::new(Provider::Azure, "North America", 40.0, -95.0, 18.0),
    ]
}

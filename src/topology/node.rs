use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Cloud provider hosting a node or region.
///
/// Serializes as the provider's display tag (`"AWS"`, `"GCP"`, `"Azure"`);
/// any unknown tag deserializes to [`Provider::Other`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
pub enum Provider {
    /// Amazon Web Services.
    #[serde(rename = "AWS")]
    Aws,
    /// Google Cloud Platform.
    #[serde(rename = "GCP")]
    Gcp,
    /// Microsoft Azure.
    Azure,
    /// Anything else.
    #[default]
    #[serde(other)]
    Other,
}

impl Provider {
    /// Parse a provider tag. Unknown tags map to [`Provider::Other`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "AWS" => Self::Aws,
            "GCP" => Self::Gcp,
            "Azure" => Self::Azure,
            _ => Self::Other,
        }
    }

    /// Display tag.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Aws => "AWS",
            Self::Gcp => "GCP",
            Self::Azure => "Azure",
            Self::Other => "Other",
        }
    }
}

/// A geographic point of interest (an exchange) rendered as a marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Node {
    /// Identifier, unique within the active node set.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Latitude in degrees.
    pub lat: f32,
    /// Longitude in degrees.
    pub lng: f32,
    /// Hosting provider.
    pub provider: Provider,
    /// Provider region label (e.g. `ap-northeast-1`).
    pub region: String,
}

impl Node {
    /// Convenience constructor.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        lat: f32,
        lng: f32,
        provider: Provider,
        region: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lat,
            lng,
            provider,
            region: region.into(),
        }
    }
}

/// Look up a node by id.
#[must_use]
pub fn find_node<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Node> {
    nodes.iter().find(|n| n.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_tags_round_trip() {
        for provider in [Provider::Aws, Provider::Gcp, Provider::Azure] {
            assert_eq!(Provider::from_tag(provider.tag()), provider);
        }
        assert_eq!(Provider::from_tag("Oracle"), Provider::Other);
    }

    #[test]
    fn unknown_provider_deserializes_to_other() {
        let node: Node = serde_json::from_str(
            r#"{"id":"x","name":"X","lat":1.0,"lng":2.0,
                "provider":"Hetzner","region":"fsn1"}"#,
        )
        .unwrap();
        assert_eq!(node.provider, Provider::Other);

        let aws: Provider = serde_json::from_str(r#""AWS""#).unwrap();
        assert_eq!(aws, Provider::Aws);
    }

    #[test]
    fn find_node_by_id() {
        let nodes = vec![
            Node::new("a", "A", 0.0, 0.0, Provider::Aws, "r"),
            Node::new("b", "B", 0.0, 90.0, Provider::Gcp, "r"),
        ];
        assert_eq!(find_node(&nodes, "b").map(|n| n.lng), Some(90.0));
        assert!(find_node(&nodes, "c").is_none());
    }
}

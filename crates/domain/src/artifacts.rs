//! Artifact records.
//!
//! These are both the stored record shapes and the request body shapes: the
//! transport layer deserializes request bodies directly into them, so serde
//! enforces the required/optional field contract before the store is touched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A recorded pair of input/output data for one analysis step.
///
/// Both mappings are required; their values are arbitrary JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub inputs: Map<String, Value>,
    pub outputs: Map<String, Value>,
}

/// A recorded reference to a visualization artifact plus descriptive metadata.
///
/// `plot_url` is required (and must be non-empty per the transport validation
/// contract); everything else defaults to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    pub plot_url: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

/// A query and the response derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub query: String,
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_optional_fields_default_to_empty() {
        let plot: Plot =
            serde_json::from_str(r#"{"plot_url": "http://example.com/p.png"}"#).expect("valid");
        assert_eq!(plot.plot_url, "http://example.com/p.png");
        assert_eq!(plot.caption, "");
        assert_eq!(plot.description, "");
        assert!(plot.metadata.is_empty());
    }

    #[test]
    fn plot_without_url_is_rejected() {
        let result: Result<Plot, _> = serde_json::from_str(r#"{"caption": "hi"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn snapshot_requires_both_mappings() {
        let result: Result<Snapshot, _> = serde_json::from_str(r#"{"inputs": {}}"#);
        assert!(result.is_err());

        let snapshot: Snapshot =
            serde_json::from_str(r#"{"inputs": {"a": 1}, "outputs": {}}"#).expect("valid");
        assert_eq!(snapshot.inputs["a"], 1);
        assert!(snapshot.outputs.is_empty());
    }

    #[test]
    fn snapshot_values_may_be_arbitrary_json() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{"inputs": {"nested": {"x": [1, 2, null]}}, "outputs": {"flag": true}}"#,
        )
        .expect("valid");
        assert!(snapshot.inputs["nested"]["x"].is_array());
        assert_eq!(snapshot.outputs["flag"], true);
    }
}

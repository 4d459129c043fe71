//! Chart endpoint response model.
//!
//! The endpoint answers every well-formed request with `200 OK` and a JSON
//! body; business failures travel inside the body as `{"error": "..."}`.
//! A payload carrying an `error` key is a soft failure even if other keys
//! are present, so the error variant is tried first when decoding.

use crate::error::{ReportError, Result};
use serde::Deserialize;
use serde_json::Value;

/// Business failure reported by the endpoint (e.g. invalid date range).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Successful chart data payload.
///
/// `data` is chart-kind-specific and forwarded verbatim to the widget
/// descriptor; only `order` is interpreted here (series stacking for the
/// cumulative flow diagram).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SuccessResponse {
    pub data: Value,
    /// Workflow-state series order for stacked charts.
    #[serde(default)]
    pub order: Option<Vec<String>>,
    /// All list names on the board, for refreshing selector choices.
    #[serde(default)]
    pub all_lists: Option<Vec<String>>,
    /// Server-rendered stats fragment shown under the control chart.
    #[serde(default)]
    pub html: Option<String>,
}

/// Union of the two response shapes.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ChartResponse {
    Error(ErrorResponse),
    Success(SuccessResponse),
}

impl ChartResponse {
    /// Decode a response body.
    pub fn from_json_str(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| ReportError::Decode(e.to_string()))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ChartResponse::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_payload_decodes_as_soft_failure() {
        let response = ChartResponse::from_json_str(r#"{"error": "bad range"}"#).unwrap();
        match response {
            ChartResponse::Error(e) => assert_eq!(e.error, "bad range"),
            ChartResponse::Success(_) => panic!("error payload decoded as success"),
        }
    }

    #[test]
    fn error_key_wins_over_data() {
        // a payload with both keys is still a soft failure
        let body = r#"{"error": "no cards in range", "data": []}"#;
        let response = ChartResponse::from_json_str(body).unwrap();
        assert!(response.is_error());
    }

    #[test]
    fn success_payload_keeps_data_verbatim() {
        let body = r#"{"data": {"done": 5, "not_done": 3, "date": "2024-01-01", "ideal": 8}}"#;
        let response = ChartResponse::from_json_str(body).unwrap();
        match response {
            ChartResponse::Success(s) => {
                assert_eq!(
                    s.data,
                    json!({"done": 5, "not_done": 3, "date": "2024-01-01", "ideal": 8})
                );
                assert_eq!(s.order, None);
                assert_eq!(s.html, None);
            }
            ChartResponse::Error(_) => panic!("success payload decoded as error"),
        }
    }

    #[test]
    fn success_payload_carries_order_and_lists() {
        let body = r#"{"data": [], "order": ["b", "a"], "all_lists": ["a", "b", "c"]}"#;
        match ChartResponse::from_json_str(body).unwrap() {
            ChartResponse::Success(s) => {
                assert_eq!(s.order.unwrap(), vec!["b", "a"]);
                assert_eq!(s.all_lists.unwrap(), vec!["a", "b", "c"]);
            }
            ChartResponse::Error(_) => panic!("unexpected error variant"),
        }
    }

    #[test]
    fn control_chart_stats_fragment_is_optional_extra() {
        let body = r#"{"data": [], "html": "<table></table>"}"#;
        match ChartResponse::from_json_str(body).unwrap() {
            ChartResponse::Success(s) => assert_eq!(s.html.as_deref(), Some("<table></table>")),
            ChartResponse::Error(_) => panic!("unexpected error variant"),
        }
    }

    #[test]
    fn body_without_data_or_error_fails_to_decode() {
        let err = ChartResponse::from_json_str(r#"{"rows": []}"#).unwrap_err();
        assert!(matches!(err, ReportError::Decode(_)));
    }

    #[test]
    fn non_json_body_fails_to_decode() {
        assert!(ChartResponse::from_json_str("<html>502</html>").is_err());
    }
}

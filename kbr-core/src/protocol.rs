//! The load/reload protocol driven by a chart page.
//!
//! One `LoadProtocol` instance exists per page and owns its chart state:
//! whether a widget has been rendered, which series it currently shows,
//! and the newest request ticket. The transport
//! layer calls [`LoadProtocol::begin`] before issuing a request and feeds
//! the decoded response to [`LoadProtocol::complete`], which classifies the
//! outcome and, on success, produces the widget descriptor to apply.
//!
//! The first successful completion renders; every later one reloads in
//! place, retiring the previously shown series. Responses superseded by a
//! newer ticket are dropped without touching anything, so a double submit
//! resolves last-issued-wins.

use crate::chart_kind::ChartKind;
use crate::descriptor;
use crate::error::Result;
use crate::response::ChartResponse;
use crate::sequence::RequestSequence;
use serde_json::Value;

/// What the transport layer should do with a completed load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStep {
    /// First success: configure a fresh widget from the descriptor.
    Render {
        descriptor: Value,
        /// Server-rendered stats fragment (control chart).
        stats_html: Option<String>,
        /// Board list names for seeding selector choices.
        all_lists: Option<Vec<String>>,
    },
    /// Subsequent success: update the existing widget in place.
    Reload {
        descriptor: Value,
        stats_html: Option<String>,
    },
    /// Soft failure: surface the message, leave the widget untouched.
    ShowError(String),
    /// Superseded by a newer request; drop silently.
    Stale,
}

/// Per-page load state: render-vs-reload, shown series, request tickets.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadProtocol {
    kind: ChartKind,
    shown_series: Vec<String>,
    rendered: bool,
    sequence: RequestSequence,
}

impl LoadProtocol {
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            shown_series: Vec::new(),
            rendered: false,
            sequence: RequestSequence::new(),
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    /// Whether a widget has been rendered yet.
    pub fn has_rendered(&self) -> bool {
        self.rendered
    }

    /// Series names currently on the widget.
    pub fn shown_series(&self) -> &[String] {
        &self.shown_series
    }

    /// Take the ticket for a request about to be issued.
    pub fn begin(&mut self) -> u64 {
        self.sequence.issue()
    }

    /// Classify a completed load and produce the step to apply.
    pub fn complete(&mut self, ticket: u64, response: &ChartResponse) -> Result<LoadStep> {
        if !self.sequence.is_current(ticket) {
            return Ok(LoadStep::Stale);
        }
        let success = match response {
            ChartResponse::Error(e) => return Ok(LoadStep::ShowError(e.error.clone())),
            ChartResponse::Success(s) => s,
        };

        let keys = descriptor::value_keys(self.kind, success)?;
        if self.rendered {
            let block = descriptor::reload_descriptor(self.kind, success, &self.shown_series)?;
            self.shown_series = keys;
            Ok(LoadStep::Reload {
                descriptor: block,
                stats_html: success.html.clone(),
            })
        } else {
            let config = descriptor::render_descriptor(self.kind, success)?;
            self.shown_series = keys;
            self.rendered = true;
            Ok(LoadStep::Render {
                descriptor: config,
                stats_html: success.html.clone(),
                all_lists: success.all_lists.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn success_body(body: &str) -> ChartResponse {
        ChartResponse::from_json_str(body).unwrap()
    }

    #[test]
    fn first_success_renders_then_reloads() {
        let mut protocol = LoadProtocol::new(ChartKind::Burndown);
        let response = success_body(r#"{"data": [{"date": "2024-01-01", "done": 1}]}"#);

        let ticket = protocol.begin();
        let step = protocol.complete(ticket, &response).unwrap();
        assert!(matches!(step, LoadStep::Render { .. }));
        assert!(protocol.has_rendered());

        let ticket = protocol.begin();
        let step = protocol.complete(ticket, &response).unwrap();
        match step {
            LoadStep::Reload { descriptor, .. } => {
                assert_eq!(
                    descriptor["unload"],
                    json!(["done", "not_done", "date", "ideal"])
                );
            }
            other => panic!("expected reload, got {:?}", other),
        }
    }

    #[test]
    fn business_error_never_touches_the_widget() {
        let mut protocol = LoadProtocol::new(ChartKind::Control);
        let before = protocol.clone();

        let ticket = protocol.begin();
        let step = protocol
            .complete(ticket, &success_body(r#"{"error": "bad range"}"#))
            .unwrap();

        assert_eq!(step, LoadStep::ShowError("bad range".to_string()));
        assert!(!protocol.has_rendered(), "error must not count as a render");
        assert_eq!(
            protocol.shown_series(),
            before.shown_series(),
            "error must leave shown series alone"
        );
    }

    #[test]
    fn error_after_render_leaves_prior_chart_state() {
        let mut protocol = LoadProtocol::new(ChartKind::Velocity);
        let ticket = protocol.begin();
        protocol
            .complete(ticket, &success_body(r#"{"data": []}"#))
            .unwrap();
        let shown_before = protocol.shown_series().to_vec();

        let ticket = protocol.begin();
        let step = protocol
            .complete(ticket, &success_body(r#"{"error": "no cards in range"}"#))
            .unwrap();
        assert_eq!(step, LoadStep::ShowError("no cards in range".to_string()));
        assert_eq!(protocol.shown_series(), shown_before);
        assert!(protocol.has_rendered());
    }

    #[test]
    fn superseded_response_is_dropped() {
        let mut protocol = LoadProtocol::new(ChartKind::ListHistory);
        let first = protocol.begin();
        let second = protocol.begin();

        // the older request resolves after the newer one was issued
        let step = protocol
            .complete(first, &success_body(r#"{"data": []}"#))
            .unwrap();
        assert_eq!(step, LoadStep::Stale);
        assert!(!protocol.has_rendered(), "stale response must not render");

        let step = protocol
            .complete(second, &success_body(r#"{"data": []}"#))
            .unwrap();
        assert!(matches!(step, LoadStep::Render { .. }));
    }

    #[test]
    fn cumulative_flow_reload_retires_previous_order() {
        let mut protocol = LoadProtocol::new(ChartKind::CumulativeFlow);

        let ticket = protocol.begin();
        protocol
            .complete(
                ticket,
                &success_body(r#"{"data": [], "order": ["New", "Done"]}"#),
            )
            .unwrap();
        assert_eq!(protocol.shown_series(), ["New", "Done"]);

        let ticket = protocol.begin();
        let step = protocol
            .complete(
                ticket,
                &success_body(r#"{"data": [], "order": ["New", "Doing", "Done"]}"#),
            )
            .unwrap();
        match step {
            LoadStep::Reload { descriptor, .. } => {
                assert_eq!(descriptor["unload"], json!(["New", "Done"]));
                assert_eq!(descriptor["keys"]["value"], json!(["New", "Doing", "Done"]));
            }
            other => panic!("expected reload, got {:?}", other),
        }
        assert_eq!(protocol.shown_series(), ["New", "Doing", "Done"]);
    }

    #[test]
    fn render_passes_stats_fragment_and_list_names_through() {
        let mut protocol = LoadProtocol::new(ChartKind::Control);
        let ticket = protocol.begin();
        let step = protocol
            .complete(
                ticket,
                &success_body(
                    r#"{"data": [], "html": "<table></table>", "all_lists": ["New", "Done"]}"#,
                ),
            )
            .unwrap();
        match step {
            LoadStep::Render {
                stats_html,
                all_lists,
                ..
            } => {
                assert_eq!(stats_html.as_deref(), Some("<table></table>"));
                assert_eq!(all_lists.unwrap(), vec!["New", "Done"]);
            }
            other => panic!("expected render, got {:?}", other),
        }
    }
}

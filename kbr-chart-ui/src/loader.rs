//! Chart data transport and the render/reload driver.
//!
//! [`fetch_chart_data`] performs the browser fetch and decodes the JSON
//! body into the response union. Everything after the transport (stale
//! detection, error-vs-success classification, render-vs-reload) lives in
//! [`kbr_core::LoadProtocol`]. [`ChartLoader`] glues the two together and
//! applies the resulting step to the widget through the JS bridge.
//!
//! Requests abort after [`REQUEST_TIMEOUT_MS`] so a hung endpoint surfaces
//! as a failure instead of leaving the page loading forever.

use crate::js_bridge;
use kbr_core::protocol::{LoadProtocol, LoadStep};
use kbr_core::{ChartKind, ChartResponse, LoadMethod, ReportError};
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Request, RequestInit, Response};

/// Abort deadline for chart data requests.
pub const REQUEST_TIMEOUT_MS: i32 = 20_000;

fn network_err(context: &str, value: JsValue) -> ReportError {
    ReportError::Network(format!("{}: {:?}", context, value))
}

/// POST body content type for serialized form state.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Fetch chart data from the endpoint and decode the response union.
///
/// `body` must be `None` for GET loads and the URL-encoded form
/// serialization for POST loads. Transport failures, aborts and non-JSON
/// bodies all come back as errors; business failures come back as
/// `ChartResponse::Error`.
pub async fn fetch_chart_data(
    url: &str,
    method: LoadMethod,
    body: Option<&str>,
) -> kbr_core::Result<ChartResponse> {
    let window =
        web_sys::window().ok_or_else(|| ReportError::Network("no window object".to_string()))?;

    let controller =
        AbortController::new().map_err(|e| network_err("abort controller", e))?;
    let opts = RequestInit::new();
    opts.set_method(method.as_str());
    opts.set_signal(Some(&controller.signal()));
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| network_err("request construction", e))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| network_err("accept header", e))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", FORM_CONTENT_TYPE)
            .map_err(|e| network_err("content-type header", e))?;
    }

    // Abort the fetch if the endpoint hangs. The closure must outlive the
    // fetch await; the timer is cleared once a response arrives.
    let abort = Closure::once(move || controller.abort());
    let timeout_handle = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            abort.as_ref().unchecked_ref(),
            REQUEST_TIMEOUT_MS,
        )
        .map_err(|e| network_err("timeout setup", e))?;

    let fetched = JsFuture::from(window.fetch_with_request(&request)).await;
    window.clear_timeout_with_handle(timeout_handle);
    drop(abort);

    let response: Response = fetched
        .map_err(|e| network_err("fetch", e))?
        .dyn_into()
        .map_err(|e| network_err("response object", e))?;

    let text = JsFuture::from(
        response
            .text()
            .map_err(|e| network_err("response body", e))?,
    )
    .await
    .map_err(|e| network_err("response body", e))?;
    let body = text
        .as_string()
        .ok_or_else(|| ReportError::Network("response body is not text".to_string()))?;

    ChartResponse::from_json_str(&body)
}

/// Result of applying a completed load, for the page to reflect in its UI.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Widget rendered or reloaded; the error panel should clear.
    Applied {
        stats_html: Option<String>,
        all_lists: Option<Vec<String>>,
    },
    /// Soft failure to surface in the error panel.
    Failed(String),
    /// Superseded response; nothing to reflect.
    Stale,
}

/// Owns the page's widget handle bookkeeping and applies load steps to it.
pub struct ChartLoader {
    protocol: LoadProtocol,
    endpoint: String,
    container_id: String,
}

impl ChartLoader {
    pub fn new(kind: ChartKind, endpoint: String, container_id: String) -> Self {
        Self {
            protocol: LoadProtocol::new(kind),
            endpoint,
            container_id,
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.protocol.kind()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Take the ticket for a request about to be issued.
    pub fn begin(&mut self) -> u64 {
        self.protocol.begin()
    }

    /// Classify the response for `ticket` and drive the widget accordingly.
    pub fn complete(
        &mut self,
        ticket: u64,
        response: &ChartResponse,
    ) -> kbr_core::Result<LoadOutcome> {
        match self.protocol.complete(ticket, response)? {
            LoadStep::Render {
                descriptor,
                stats_html,
                all_lists,
            } => {
                info!("rendering {} chart", self.kind());
                js_bridge::render_chart(&self.container_id, &descriptor.to_string());
                Ok(LoadOutcome::Applied {
                    stats_html,
                    all_lists,
                })
            }
            LoadStep::Reload {
                descriptor,
                stats_html,
            } => {
                info!("reloading {} chart", self.kind());
                js_bridge::reload_chart(&self.container_id, &descriptor.to_string());
                Ok(LoadOutcome::Applied {
                    stats_html,
                    all_lists: None,
                })
            }
            LoadStep::ShowError(message) => Ok(LoadOutcome::Failed(message)),
            LoadStep::Stale => {
                warn!("dropping superseded chart response (ticket {})", ticket);
                Ok(LoadOutcome::Stale)
            }
        }
    }
}

//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use kbr_core::{ReportFilters, TimeUnit, WorkflowColumns};

/// Shared application state for a board report chart page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether a load is in flight
    pub loading: Signal<bool>,
    /// Message for the inline error panel, if any
    pub error_msg: Signal<Option<String>>,
    /// The growing workflow-state column sequence
    pub columns: Signal<WorkflowColumns>,
    /// Range start filter value
    pub from_dt: Signal<String>,
    /// Range end filter value
    pub to_dt: Signal<String>,
    /// Sampling interval multiplier
    pub count: Signal<f64>,
    /// Sampling interval unit
    pub time_type: Signal<TimeUnit>,
    /// Server-rendered stats fragment shown under the control chart
    pub stats_html: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            columns: Signal::new(WorkflowColumns::new(Vec::new())),
            from_dt: Signal::new(String::new()),
            to_dt: Signal::new(String::new()),
            count: Signal::new(1.0),
            time_type: Signal::new(TimeUnit::Days),
            stats_html: Signal::new(None),
        }
    }

    /// Snapshot the filter controls for a request.
    pub fn filters(&self) -> ReportFilters {
        ReportFilters {
            from_dt: (self.from_dt)(),
            to_dt: (self.to_dt)(),
            count: (self.count)(),
            time_type: (self.time_type)(),
        }
    }
}

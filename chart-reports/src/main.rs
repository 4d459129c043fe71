//! Board report chart page.
//!
//! One WASM app serves every report chart kind. The server template mounts
//! it with data attributes naming the kind and its data endpoint; the app
//! performs the initial load, configures the charting widget through the
//! JS bridge and reloads it in place when the user resubmits the settings
//! form.

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn, Level};
use kbr_chart_ui::components::{
    ChartContainer, ChartHeader, DateRangePicker, DeltaSelector, ErrorDisplay, LoadingSpinner,
    StatsPanel, WorkflowPicker,
};
use kbr_chart_ui::js_bridge;
use kbr_chart_ui::loader::{self, ChartLoader, LoadOutcome};
use kbr_chart_ui::state::AppState;
use kbr_core::{ChartRequest, LoadMethod, ReportFilters, WorkflowColumns};

mod page_config;
use page_config::PageConfig;

/// DOM id for the chart container div.
const CHART_CONTAINER_ID: &str = "report-chart";

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting board report chart application");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(page_config::ROOT_ELEMENT_ID))
        .launch(App);
}

/// Issue one load against the endpoint and apply the outcome to the page.
fn run_load(
    mut state: AppState,
    mut loader: Signal<Option<ChartLoader>>,
    url: String,
    method: LoadMethod,
    body: Option<String>,
) {
    let Some(ticket) = loader.write().as_mut().map(ChartLoader::begin) else {
        return;
    };
    spawn(async move {
        state.loading.set(true);
        let result = loader::fetch_chart_data(&url, method, body.as_deref()).await;
        state.loading.set(false);

        let outcome = result.and_then(|response| match loader.write().as_mut() {
            Some(l) => l.complete(ticket, &response),
            None => Ok(LoadOutcome::Stale),
        });
        match outcome {
            Ok(LoadOutcome::Applied {
                stats_html,
                all_lists,
            }) => {
                state.error_msg.set(None);
                if let Some(html) = stats_html {
                    state.stats_html.set(Some(html));
                }
                if let Some(lists) = all_lists {
                    state.columns.write().adopt_choices(lists);
                }
            }
            Ok(LoadOutcome::Failed(message)) => {
                state.error_msg.set(Some(message));
            }
            Ok(LoadOutcome::Stale) => {}
            Err(e) => {
                warn!("chart data load failed: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load chart data: {}", e)));
            }
        }
    });
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut loader = use_signal(|| None::<ChartLoader>);
    let config = use_hook(|| PageConfig::from_document().map_err(|e| e.to_string()));

    // ─── Effect: seed state from the page config and start the initial load ───
    // No reactive reads here, so this runs once on mount.
    {
        let config = config.clone();
        use_effect(move || {
            let cfg = match &config {
                Ok(cfg) => cfg.clone(),
                Err(e) => {
                    warn!("page configuration rejected: {}", e);
                    state.error_msg.set(Some(e.clone()));
                    state.loading.set(false);
                    return;
                }
            };
            info!("initializing {} chart page", cfg.kind);

            let initial: Vec<&str> = cfg.initial_states.iter().map(String::as_str).collect();
            let columns = WorkflowColumns::with_initial(cfg.states.clone(), &initial);
            let filters = ReportFilters {
                from_dt: cfg.from_dt.clone(),
                to_dt: cfg.to_dt.clone(),
                ..ReportFilters::default()
            };

            let body = match cfg.initial_load {
                LoadMethod::Get => None,
                LoadMethod::Post => {
                    let request = ChartRequest::from_form(
                        &filters,
                        cfg.kind.has_workflow_form().then_some(&columns),
                    );
                    Some(request.to_form_body())
                }
            };

            state.columns.set(columns);
            state.from_dt.set(cfg.from_dt.clone());
            state.to_dt.set(cfg.to_dt.clone());
            loader.set(Some(ChartLoader::new(
                cfg.kind,
                cfg.data_url.clone(),
                CHART_CONTAINER_ID.to_string(),
            )));
            js_bridge::init_charts();

            run_load(state, loader, cfg.data_url, cfg.initial_load, body);
        });
    }

    // Submit posts the current form serialization and reloads in place.
    let on_submit = move |_: ()| {
        let Some((kind, url)) = loader
            .read()
            .as_ref()
            .map(|l| (l.kind(), l.endpoint().to_string()))
        else {
            return;
        };
        let filters = state.filters();
        if let Err(e) = filters.validate() {
            state.error_msg.set(Some(e.to_string()));
            return;
        }
        let columns = state.columns.read().clone();
        let request =
            ChartRequest::from_form(&filters, kind.has_workflow_form().then_some(&columns));
        run_load(
            state,
            loader,
            url,
            LoadMethod::Post,
            Some(request.to_form_body()),
        );
    };

    let kind = loader.read().as_ref().map(|l| l.kind());

    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if let Some(kind) = kind {
                ChartHeader {
                    title: kind.title().to_string(),
                    description: kind.description().to_string(),
                }

                ChartContainer {
                    id: CHART_CONTAINER_ID.to_string(),
                    loading: *state.loading.read(),
                }

                if let Some(html) = state.stats_html.read().as_ref() {
                    StatsPanel { html: html.clone() }
                }

                ChartSettings {
                    has_workflow: kind.has_workflow_form(),
                    loading: *state.loading.read(),
                    on_submit,
                }
            }
        }
    }
}

/// The settings form below the chart: workflow columns, filters, submit.
#[component]
fn ChartSettings(has_workflow: bool, loading: bool, on_submit: EventHandler<()>) -> Element {
    rsx! {
        div {
            id: "chart-settings",
            style: "margin-top: 12px; padding-top: 8px; border-top: 1px solid #e0e0e0;",
            if has_workflow {
                WorkflowPicker {}
            }
            DateRangePicker {}
            DeltaSelector {}
            if loading {
                LoadingSpinner {}
            } else {
                input {
                    r#type: "submit",
                    id: "submit-button",
                    value: "Regenerate",
                    onclick: move |_| on_submit.call(()),
                }
            }
        }
    }
}

//! Date range picker with start and end inputs.

use crate::state::AppState;
use dioxus::prelude::*;

/// Date range inputs for the chart filters.
///
/// Values accept `YYYY-MM-DD` or `YYYY-MM-DD HH:MM`.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let from = (state.from_dt)();
    let to = (state.to_dt)();

    let on_from_change = move |evt: Event<FormData>| {
        state.from_dt.set(evt.value());
    };

    let on_to_change = move |evt: Event<FormData>| {
        state.to_dt.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "From: "
                input {
                    r#type: "text",
                    name: "from_dt",
                    placeholder: "YYYY-MM-DD",
                    value: "{from}",
                    onchange: on_from_change,
                }
            }
            label {
                style: "font-weight: bold;",
                "To: "
                input {
                    r#type: "text",
                    name: "to_dt",
                    placeholder: "YYYY-MM-DD",
                    value: "{to}",
                    onchange: on_to_change,
                }
            }
        }
    }
}

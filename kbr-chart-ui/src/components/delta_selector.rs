//! Sampling interval controls: count plus time unit.

use crate::state::AppState;
use dioxus::prelude::*;
use kbr_core::TimeUnit;

/// Interval controls ("every 1 day", "every 6 hours", ...).
#[component]
pub fn DeltaSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current_count = (state.count)();
    let current_unit = (state.time_type)();

    let on_count_change = move |evt: Event<FormData>| {
        if let Ok(count) = evt.value().parse::<f64>() {
            state.count.set(count);
        }
    };

    let on_unit_change = move |evt: Event<FormData>| {
        if let Ok(unit) = TimeUnit::from_code(&evt.value()) {
            state.time_type.set(unit);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "Every: "
                input {
                    r#type: "number",
                    name: "count",
                    value: "{current_count}",
                    min: "0",
                    step: "any",
                    style: "width: 60px;",
                    onchange: on_count_change,
                }
            }
            select {
                name: "time_type",
                onchange: on_unit_change,
                for unit in TimeUnit::ALL {
                    option {
                        value: unit.code(),
                        selected: current_unit == unit,
                        {unit.label()}
                    }
                }
            }
        }
    }
}

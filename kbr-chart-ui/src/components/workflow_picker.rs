//! The growing row of workflow-state selectors.
//!
//! Selectors are re-rendered from the `WorkflowColumns` sequence, so ids
//! and names always reflect current positions, and the hidden count field
//! tracks the column count. Filling the rightmost selector grows the
//! sequence by one; the change handler is the same for every column.

use crate::state::AppState;
use dioxus::prelude::*;
use kbr_core::workflow::{WorkflowColumns, TOTAL_FORMS_FIELD};
use log::warn;

/// One selector per workflow column, plus the hidden total-count field.
#[component]
pub fn WorkflowPicker() -> Element {
    let mut state = use_context::<AppState>();
    let columns = state.columns.read().clone();
    let choices = columns.choices().to_vec();
    let total = columns.total_forms();

    rsx! {
        div {
            id: "chart-workflow",
            style: "display: flex; gap: 12px; margin: 8px 0; align-items: flex-end;",
            for (index, slot) in columns.slots().iter().cloned().enumerate() {
                div {
                    class: "chart-settings-state-column",
                    label {
                        r#for: WorkflowColumns::selector_id(index),
                        style: "display: block; font-size: 12px; color: #555;",
                        "State {index + 1}"
                    }
                    select {
                        id: WorkflowColumns::selector_id(index),
                        name: WorkflowColumns::selector_name(index),
                        onchange: move |evt: Event<FormData>| {
                            if let Err(e) = state.columns.write().set_selection(index, &evt.value()) {
                                warn!("workflow selection rejected: {}", e);
                            }
                        },
                        option { value: "", selected: slot.is_pending(), "---------" }
                        for choice in choices.iter() {
                            option {
                                value: "{choice}",
                                selected: slot.selection() == Some(choice.as_str()),
                                "{choice}"
                            }
                        }
                    }
                }
            }
            input {
                r#type: "hidden",
                id: "id_form-TOTAL_FORMS",
                name: TOTAL_FORMS_FIELD,
                value: "{total}",
            }
        }
    }
}

//! The growing workflow-state column sequence.
//!
//! A chart form lets the user describe an ordered pipeline of workflow
//! states to compare (e.g. `New → In Progress → Complete`). The form starts
//! with one empty selector; whenever the last selector receives a value a
//! fresh empty one is appended, so there is always exactly one growth point
//! at the end. The server-side form framework consumes the columns as a
//! numbered field set plus a hidden total-count field.
//!
//! The sequence is the source of truth: the UI re-renders its selectors
//! from this list, and field names/ids are regenerated from positions
//! rather than patched. Columns are never removed; the sequence only grows
//! for the lifetime of the page.

use crate::error::{ReportError, Result};
use log::debug;

/// Hidden form field carrying the current column count.
pub const TOTAL_FORMS_FIELD: &str = "form-TOTAL_FORMS";

/// Outcome of applying a selection to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// An interior column changed; the sequence shape is unchanged.
    Updated,
    /// The last column was filled and a new empty column was appended.
    Grew,
}

/// One selector slot, holding at most one workflow-state name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSlot {
    selection: Option<String>,
}

impl ColumnSlot {
    fn pending() -> Self {
        Self { selection: None }
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.selection.is_none()
    }
}

/// The ordered, append-only sequence of workflow-state selectors.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowColumns {
    slots: Vec<ColumnSlot>,
    /// Selectable state names, fixed for the page's lifetime.
    choices: Vec<String>,
}

impl WorkflowColumns {
    /// Start with the single empty growth slot.
    pub fn new(choices: Vec<String>) -> Self {
        Self {
            slots: vec![ColumnSlot::pending()],
            choices,
        }
    }

    /// Prefill columns from an initial workflow, keeping the trailing
    /// empty slot. States not present in `choices` are skipped.
    pub fn with_initial(choices: Vec<String>, initial: &[&str]) -> Self {
        let mut columns = Self::new(choices);
        for state in initial {
            if columns.choices.iter().any(|c| c == state) {
                let last = columns.len() - 1;
                // each fill grows the sequence, so the last slot stays open
                let _ = columns.set_selection(last, state);
            }
        }
        columns
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        // there is always at least the growth slot
        false
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Seed the selectable states when the page configuration carried none
    /// and the first response brought the board's list names. Existing
    /// choices are kept; selections are never touched.
    pub fn adopt_choices(&mut self, choices: Vec<String>) {
        if self.choices.is_empty() {
            self.choices = choices;
        }
    }

    pub fn slots(&self) -> &[ColumnSlot] {
        &self.slots
    }

    pub fn selection(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(|s| s.selection())
    }

    /// The selected states in pipeline order, skipping pending slots.
    pub fn selected_states(&self) -> Vec<&str> {
        self.slots.iter().filter_map(|s| s.selection()).collect()
    }

    /// Value for the hidden total-count field.
    pub fn total_forms(&self) -> usize {
        self.slots.len()
    }

    /// Form field name for the selector at `index`.
    pub fn selector_name(index: usize) -> String {
        format!("form-{}-state", index)
    }

    /// DOM id for the selector at `index`.
    pub fn selector_id(index: usize) -> String {
        format!("id_form-{}-state", index)
    }

    /// Apply a selection-changed event to the column at `index`.
    ///
    /// An empty `value` clears the column. Filling the last column appends
    /// a fresh pending column, which is the only structural transition:
    /// afterwards the last column is pending again and `total_forms()`
    /// reflects the new count.
    pub fn set_selection(&mut self, index: usize, value: &str) -> Result<SelectionOutcome> {
        let count = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ReportError::ColumnOutOfRange(index))?;

        if value.is_empty() {
            slot.selection = None;
            return Ok(SelectionOutcome::Updated);
        }
        slot.selection = Some(value.to_string());

        if index + 1 == count {
            self.slots.push(ColumnSlot::pending());
            debug!("workflow column {} filled, now {} columns", index, count + 1);
            return Ok(SelectionOutcome::Grew);
        }
        Ok(SelectionOutcome::Updated)
    }

    /// The numbered selector fields plus the hidden count field, in form
    /// order. Pending slots serialize as empty values.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields: Vec<(String, String)> = self
            .slots
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                (
                    Self::selector_name(i),
                    slot.selection().unwrap_or("").to_string(),
                )
            })
            .collect();
        fields.push((TOTAL_FORMS_FIELD.to_string(), self.total_forms().to_string()));
        fields
    }
}

//! Per-page configuration read from the mount element.
//!
//! The server template renders the mount div with `data-*` attributes that
//! say which chart kind the page shows, where its data endpoint lives, how
//! the initial load is made and which workflow states are selectable.
//! Configuration problems abort initialization; there is no fallback kind.

use kbr_core::{ChartKind, LoadMethod, ReportError, Result};
use web_sys::Element;

/// DOM id of the element the app mounts into.
pub const ROOT_ELEMENT_ID: &str = "chart-reports-root";

/// Page settings for one report chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// Which report this page renders.
    pub kind: ChartKind,
    /// Chart data endpoint.
    pub data_url: String,
    /// How the first load is made (`get` = parameterless, `post` = with
    /// the serialized form).
    pub initial_load: LoadMethod,
    /// Selectable workflow states. May be empty; the first response's
    /// list names fill in then.
    pub states: Vec<String>,
    /// Workflow states preselected in the form.
    pub initial_states: Vec<String>,
    /// Initial range start value.
    pub from_dt: String,
    /// Initial range end value.
    pub to_dt: String,
}

impl PageConfig {
    /// Read the configuration from the document's mount element.
    pub fn from_document() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ReportError::Config("no document available".to_string()))?;
        let root = document.get_element_by_id(ROOT_ELEMENT_ID).ok_or_else(|| {
            ReportError::Config(format!("missing mount element #{}", ROOT_ELEMENT_ID))
        })?;
        Self::from_element(&root)
    }

    fn from_element(root: &Element) -> Result<Self> {
        let kind: ChartKind = required_attribute(root, "data-chart-kind")?.parse()?;
        let data_url = required_attribute(root, "data-chart-data-url")?;
        let initial_load = match root.get_attribute("data-initial-load").as_deref() {
            None | Some("post") => LoadMethod::Post,
            Some("get") => LoadMethod::Get,
            Some(other) => {
                return Err(ReportError::Config(format!(
                    "unknown initial load method: {:?}",
                    other
                )))
            }
        };

        Ok(Self {
            kind,
            data_url,
            initial_load,
            states: list_attribute(root, "data-states"),
            initial_states: list_attribute(root, "data-initial-states"),
            from_dt: root.get_attribute("data-from-dt").unwrap_or_default(),
            to_dt: root.get_attribute("data-to-dt").unwrap_or_default(),
        })
    }
}

fn required_attribute(root: &Element, name: &str) -> Result<String> {
    root.get_attribute(name)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ReportError::Config(format!("missing {} attribute", name)))
}

/// Comma-separated attribute value as a trimmed list.
fn list_attribute(root: &Element, name: &str) -> Vec<String> {
    root.get_attribute(name)
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

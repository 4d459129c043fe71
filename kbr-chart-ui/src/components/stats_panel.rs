//! Server-rendered stats fragment shown under the control chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StatsPanelProps {
    /// Pre-rendered HTML fragment from the chart data response.
    pub html: String,
}

/// Injects the stats table the endpoint renders alongside control chart
/// data. The fragment comes from our own server, not from user input.
#[component]
pub fn StatsPanel(props: StatsPanelProps) -> Element {
    rsx! {
        div {
            style: "margin-top: 12px;",
            dangerous_inner_html: "{props.html}",
        }
    }
}

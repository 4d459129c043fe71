//! Reusable Dioxus RSX components for board report chart pages.

mod chart_container;
mod chart_header;
mod date_range_picker;
mod delta_selector;
mod error_display;
mod loading_spinner;
mod stats_panel;
mod workflow_picker;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use date_range_picker::DateRangePicker;
pub use delta_selector::DeltaSelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use stats_panel::StatsPanel;
pub use workflow_picker::WorkflowPicker;

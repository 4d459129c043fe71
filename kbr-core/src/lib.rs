//! Core logic for kanban board report charts.
//!
//! This crate holds everything about the report pages that does not touch
//! the DOM or the network, so it all tests natively:
//! - the fixed set of chart kinds and their widget descriptors
//! - the chart endpoint request/response model
//! - the growing workflow-state column sequence
//! - filter validation and the request sequence guard
//!
//! The WASM layer (`kbr-chart-ui`, `chart-reports`) consumes these types
//! and supplies the fetch transport and the Dioxus components.

pub mod chart_kind;
pub mod descriptor;
pub mod error;
pub mod filters;
pub mod protocol;
pub mod request;
pub mod response;
pub mod sequence;
pub mod workflow;

pub use chart_kind::ChartKind;
pub use error::{ReportError, Result};
pub use filters::{ReportFilters, TimeUnit};
pub use protocol::{LoadProtocol, LoadStep};
pub use request::{ChartRequest, LoadMethod};
pub use response::{ChartResponse, ErrorResponse, SuccessResponse};
pub use sequence::RequestSequence;
pub use workflow::{SelectionOutcome, WorkflowColumns};

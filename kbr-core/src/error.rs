/// Error types for the report chart core
use thiserror::Error;

/// Main error type for report chart operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// Transport-level failure (fetch rejected, aborted, or timed out)
    #[error("Network request failed: {0}")]
    Network(String),

    /// Response body could not be decoded as a chart response
    #[error("Failed to decode chart response: {0}")]
    Decode(String),

    /// Page configuration is missing or names an unknown chart kind
    #[error("Invalid page configuration: {0}")]
    Config(String),

    /// Filter field failed validation
    #[error("Invalid filter value: {0}")]
    InvalidFilter(String),

    /// Workflow column index out of range
    #[error("No workflow column at index {0}")]
    ColumnOutOfRange(usize),
}

/// Type alias for Results using ReportError
pub type Result<T> = std::result::Result<T, ReportError>;

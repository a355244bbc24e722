//! Error types for plan generation.

/// Result type for plan generation operations
pub type PlannerResult<T> = Result<T, PlannerError>;

/// Error type for plan generation operations
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// The plan window is invalid: the exam date is not strictly after the
    /// start date, so no study day exists.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

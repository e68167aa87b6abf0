/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// The engine recognises exactly two failure kinds. Everything else
/// (zero income, deductions exceeding gross, empty transaction or payment
/// lists) is a valid state that resolves to a zero or empty result.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Non-finite or malformed numeric input; nothing is computed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed or missing tax regime; refused at load time, before any
    /// computation runs
    #[error("Configuration error: {0}")]
    Configuration(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AppError::InvalidInput(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }
}

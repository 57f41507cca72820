//! Error types for u-bandslot.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type alias for placement operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop a placement run before it starts.
///
/// Unplaced bands and optimizer budget expiry are outcomes, not errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The registry or slot enumeration failed validation.
    #[error("Invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Validation errors carried by [`Error::InvalidInput`].
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Error::InvalidInput(errors) => errors,
            Error::InvalidConfig(_) => &[],
        }
    }
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Error::InvalidInput(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

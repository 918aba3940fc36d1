use thiserror::Error;

use crate::validation::FieldId;

/// Application-level error type.
/// Rejected field input never surfaces here; the validator recovers from it
/// by re-prompting. Everything in this enum ends an entry or the whole run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Resume generation cancelled by user.")]
    Cancelled,

    #[error("No messages registered for field '{}'", .0.key())]
    MissingFieldMessages(FieldId),

    #[error("Sample data error: {0}")]
    SampleData(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Cancellation bypasses every recovery point and goes straight to the
    /// top-level handler.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, AppError::Cancelled)
    }
}

pub type AppResult<T> = Result<T, AppError>;

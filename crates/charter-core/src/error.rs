use thiserror::Error;

/// Local validation failures raised by the analytics services.
///
/// Neither variant is retryable: both point at malformed trip data or caller input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid date `{value}`: {reason}")]
    InvalidDate { value: String, reason: String },
    #[error("Invalid filter {field} `{value}`: {reason}")]
    InvalidCriteria {
        field: &'static str,
        value: String,
        reason: String,
    },
}

pub type CoreResult<T> = Result<T, CoreError>;

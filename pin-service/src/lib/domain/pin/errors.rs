use thiserror::Error;

/// Error for PinId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PinIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for pin field validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PinFieldError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} too long: maximum {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Error for list query parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PinQueryError {
    #[error("Invalid order_by field '{0}'. Must be one of: title, date_created, author")]
    InvalidOrderField(String),

    #[error("Invalid order_dir '{0}'. Must be 'asc' or 'desc'")]
    InvalidOrderDirection(String),
}

/// Top-level error for all pin-related operations
#[derive(Debug, Clone, Error)]
pub enum PinError {
    #[error("Invalid pin ID: {0}")]
    InvalidPinId(#[from] PinIdError),

    #[error("Invalid pin: {0}")]
    InvalidField(#[from] PinFieldError),

    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] PinQueryError),

    #[error("Pin not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

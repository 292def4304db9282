use thiserror::Error;

/// Error type for password hasher configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Invalid iteration count: {0}")]
    InvalidIterations(u32),
}

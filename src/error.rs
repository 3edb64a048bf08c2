//! Adapter errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Syslog error: {0}")]
    Syslog(#[from] syslog::Error),
}

pub type AdapterResult<T> = Result<T, AdapterError>;

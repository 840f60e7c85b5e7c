//! Observability utilities for logging
//!
//! Provides centralized logging setup for both units

pub mod logging;

pub use logging::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("Logging setup error: {0}")]
    Logging(String),

    #[error("Unknown log format: {0}")]
    UnknownFormat(String),
}

pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

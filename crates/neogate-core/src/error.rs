//! Centralized error types for neogate.

use thiserror::Error;

/// Structural validation failures for node-creation requests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("label must not be empty")]
    EmptyLabel,

    #[error("label '{0}' must start with an ASCII letter")]
    BadLabelStart(String),

    #[error("label '{0}' may only contain ASCII letters, digits, and underscores")]
    UnsafeLabel(String),
}

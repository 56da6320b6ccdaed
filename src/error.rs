//! Unified error types for nav.
//!
//! Every failure raised while resolving the runtime configuration is a
//! [`NavError`]. Registry construction problems are reported separately as
//! [`RegistryError`] because they happen once, before any argument is read.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for configuration resolution.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NavError {
    /// Config file could not be opened or read
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON document or non-numeric switch argument
    #[error("Failed to decode {context}")]
    Decode {
        context: String,
        #[source]
        source: DecodeErrorKind,
    },

    /// Argument decoded fine but lies outside the accepted range
    #[error("Invalid value for {switch}: {message}")]
    Validation { switch: String, message: String },

    /// An argument-taking switch was the last token
    #[error("Missing argument for switch {switch}")]
    MissingArgument { switch: String },

    /// One or more mandatory switches never appeared
    #[error("Missing required switch(es): {}", .switches.join(", "))]
    MissingRequiredSwitch { switches: Vec<String> },
}

/// Specific decode error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DecodeErrorKind {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("'{value}' is not a number: {source}")]
    NotANumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Errors raised while building the switch catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistryError {
    #[error("Switch {token} is already registered (id {existing_id})")]
    DuplicateSwitch { token: String, existing_id: usize },

    #[error("Switch {token} argument flag {declared} contradicts its action")]
    ArgumentMismatch { token: String, declared: bool },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for nav operations
pub type Result<T> = std::result::Result<T, NavError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl NavError {
    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a decode error with context
    pub fn decode(context: impl Into<String>, source: DecodeErrorKind) -> Self {
        Self::Decode {
            context: context.into(),
            source,
        }
    }

    /// Create a validation error for a switch argument
    pub fn validation(switch: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            switch: switch.into(),
            message: message.into(),
        }
    }

    /// Create a missing-argument error
    pub fn missing_argument(switch: impl Into<String>) -> Self {
        Self::MissingArgument {
            switch: switch.into(),
        }
    }

    /// Short machine-friendly category name, used in log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io",
            Self::Decode { .. } => "decode",
            Self::Validation { .. } => "validation",
            Self::MissingArgument { .. } => "missing_argument",
            Self::MissingRequiredSwitch { .. } => "missing_required_switch",
        }
    }
}

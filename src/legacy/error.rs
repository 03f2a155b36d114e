//! Error types for the legacy bridge.

use thiserror::Error;

/// The request skeleton is unusable. Only raised at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("request skeleton has no '{0}' placeholder")]
    MissingPlaceholder(&'static str),

    #[error("request skeleton has {count} '{placeholder}' placeholders, expected one")]
    RepeatedPlaceholder {
        placeholder: &'static str,
        count: usize,
    },
}

/// Why a legacy round trip produced no country.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Connection, DNS, timeout or body read failure.
    #[error("legacy service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("legacy response is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("legacy response could not be parsed: {0}")]
    Parse(#[from] quick_xml::DeError),
}

impl BridgeError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            BridgeError::Transport(_) => "transport",
            BridgeError::Encoding(_) | BridgeError::Parse(_) => "parse",
        }
    }
}

/// Result type for legacy bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

// ── Core error types ──
//
// User-facing errors from folio-core. Consumers never see raw status codes
// or JSON parse failures: the `From<folio_api::Error>` impl routes every
// transport-layer error through the central translator and keeps the
// technical detail alongside for verbose output.

use thiserror::Error;

/// Unified error type for the core crate.
///
/// `Display` is always the human-readable message a view would show in
/// place of its content.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("{message}")]
    ConnectionFailed { message: String, detail: String },

    #[error("{message}")]
    Timeout { message: String, timeout_secs: u64 },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{message}")]
    NotFound { message: String, path: Option<String> },

    #[error("{message}")]
    InvalidPayload { message: String, detail: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("{message}")]
    Api {
        message: String,
        /// HTTP status code, if the server answered.
        status: Option<u16>,
        detail: String,
    },

    // ── Caller errors ────────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Replace the generic not-found message with a resource-specific one.
    ///
    /// Other variants pass through unchanged.
    pub fn on_not_found(self, message: impl FnOnce() -> String) -> Self {
        match self {
            Self::NotFound { path, .. } => Self::NotFound {
                message: message(),
                path,
            },
            other => other,
        }
    }

    /// Technical detail behind the user message, when there is any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::ConnectionFailed { detail, .. }
            | Self::InvalidPayload { detail, .. }
            | Self::Api { detail, .. } => Some(detail),
            Self::NotFound { path, .. } => path.as_deref(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<folio_api::Error> for CoreError {
    fn from(err: folio_api::Error) -> Self {
        let message = err.user_message().to_owned();
        match err {
            folio_api::Error::Timeout { timeout_secs } => CoreError::Timeout {
                message,
                timeout_secs,
            },
            folio_api::Error::Status { status: 404, path, .. } => CoreError::NotFound {
                message,
                path: Some(path),
            },
            folio_api::Error::Status { status, path, body } => CoreError::Api {
                message,
                status: Some(status),
                detail: format!("HTTP {status} from {path}: {body}"),
            },
            folio_api::Error::Deserialization { message: detail, .. } => {
                CoreError::InvalidPayload { message, detail }
            }
            folio_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            folio_api::Error::InvalidBaseUrl(url) => CoreError::Config {
                message: format!("Invalid API base URL: {url}"),
            },
            folio_api::Error::MissingParameter(name) => CoreError::Validation {
                message: format!("{name} is required"),
            },
            ref e @ folio_api::Error::Transport(_) if e.is_no_response() => {
                CoreError::ConnectionFailed {
                    message,
                    detail: e.to_string(),
                }
            }
            other => CoreError::Api {
                message,
                status: other.status(),
                detail: other.to_string(),
            },
        }
    }
}

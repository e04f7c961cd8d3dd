use thiserror::Error;

/// Top-level error type for the `folio-api` crate.
///
/// Covers every failure mode of the REST client: transport, HTTP status,
/// payload decoding, and request construction. `folio-core` maps these into
/// user-facing diagnostics; [`Error::user_message`] is the central translator
/// every view falls back on.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Request timed out before a response arrived.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// TLS or client-builder failure.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Request construction ────────────────────────────────────────
    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The configured API origin cannot carry path segments (e.g. `mailto:`).
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// A required path parameter was empty.
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    // ── HTTP ────────────────────────────────────────────────────────
    /// Server answered with a non-2xx status.
    #[error("HTTP {status} from {path}")]
    Status {
        status: u16,
        path: String,
        /// First bytes of the response body, for debugging.
        body: String,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

const MSG_BAD_REQUEST: &str = "Bad request. Please check your input.";
const MSG_UNAUTHORIZED: &str = "Unauthorized. Please log in.";
const MSG_FORBIDDEN: &str = "Forbidden. You don't have permission to access this resource.";
const MSG_NOT_FOUND: &str = "Resource not found.";
const MSG_SERVER: &str = "Internal server error. Please try again later.";
const MSG_NO_RESPONSE: &str = "No response received from server. Please check your connection.";
const MSG_GENERIC: &str = "An error occurred. Please try again.";

impl Error {
    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if the request never got a response (connect failure,
    /// timeout, dropped connection).
    pub fn is_no_response(&self) -> bool {
        match self {
            Self::Timeout { .. } => true,
            Self::Transport(e) => {
                e.status().is_none() && (e.is_connect() || e.is_timeout() || e.is_request())
            }
            _ => false,
        }
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Status { status, .. } => *status >= 500,
            _ => self.is_no_response(),
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Translate into the single human-readable message shown in place of
    /// a section's content.
    pub fn user_message(&self) -> &'static str {
        if self.is_no_response() {
            return MSG_NO_RESPONSE;
        }
        match self.status() {
            Some(400) => MSG_BAD_REQUEST,
            Some(401) => MSG_UNAUTHORIZED,
            Some(403) => MSG_FORBIDDEN,
            Some(404) => MSG_NOT_FOUND,
            Some(500) => MSG_SERVER,
            _ => MSG_GENERIC,
        }
    }
}

//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use folio_config::ConfigError;
use folio_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(folio::connection_failed),
        help(
            "Check that the portfolio backend is running and reachable.\n\
             Set the origin with --api-url or a profile (folio config init).\n\
             Detail: {detail}"
        )
    )]
    ConnectionFailed { message: String, detail: String },

    #[error("{message}")]
    #[diagnostic(
        code(folio::timeout),
        help("Request gave up after {seconds}s. Increase it with --timeout.")
    )]
    Timeout { message: String, seconds: u64 },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(folio::not_found), help("Requested: {path}"))]
    NotFound { message: String, path: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(folio::api_error), help("{detail}"))]
    Api { message: String, detail: String },

    #[error("{message}")]
    #[diagnostic(
        code(folio::invalid_payload),
        help("The backend answered with data in an unexpected shape.\nDetail: {detail}")
    )]
    InvalidPayload { message: String, detail: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(folio::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(folio::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: folio config init --name {name}"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Profile '{name}' already exists in {path}")]
    #[diagnostic(
        code(folio::profile_exists),
        help("Pass --force to replace it.")
    )]
    ProfileExists { name: String, path: String },

    #[error("{0}")]
    #[diagnostic(code(folio::config))]
    Config(String),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Validation { .. } | Self::ProfileNotFound { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { message, detail } => {
                CliError::ConnectionFailed { message, detail }
            }
            CoreError::Timeout {
                message,
                timeout_secs,
            } => CliError::Timeout {
                message,
                seconds: timeout_secs,
            },
            CoreError::NotFound { message, path } => CliError::NotFound {
                message,
                path: path.unwrap_or_else(|| "(unknown)".into()),
            },
            CoreError::InvalidPayload { message, detail } => {
                CliError::InvalidPayload { message, detail }
            }
            CoreError::Api {
                message, detail, ..
            } => CliError::Api { message, detail },
            CoreError::Validation { message } => CliError::Validation {
                field: "input".into(),
                reason: message,
            },
            CoreError::Config { message } => CliError::Config(message),
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::UnknownProfile { name } => CliError::ProfileNotFound {
                name,
                available: "(none)".into(),
            },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config(other.to_string()),
        }
    }
}

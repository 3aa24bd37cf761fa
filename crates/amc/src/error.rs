//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use amc_config::ConfigError;
use amc_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CONFIG: i32 = 3;
    pub const REJECTED: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not connect to {url}: {reason}")]
    #[diagnostic(
        code(amc::connection_failed),
        help(
            "Check that the service is running and reachable.\n\
             Service URLs are set in the [services] section: amc config show"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("TLS setup failed: {reason}")]
    #[diagnostic(
        code(amc::tls_error),
        help("Set services.ca_cert to your CA bundle, or services.insecure = true for lab setups.")
    )]
    TlsError { reason: String },

    // ── Service responses ────────────────────────────────────────────

    #[error("Request rejected: {message}")]
    #[diagnostic(code(amc::rejected))]
    Rejected { message: String },

    #[error("Service error: {message}")]
    #[diagnostic(code(amc::api_error))]
    Api { message: String },

    #[error("Unexpected response from service: {message}")]
    #[diagnostic(
        code(amc::bad_response),
        help("The service and this binary may disagree on the API version.")
    )]
    BadResponse { message: String },

    #[error("{failed} of {total} actions could not be delivered")]
    #[diagnostic(
        code(amc::dispatch_incomplete),
        help("Undelivered actions are generated again on the next pass. Run with -v for details.")
    )]
    DispatchIncomplete { failed: usize, total: usize },

    // ── Timeout ──────────────────────────────────────────────────────

    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(amc::timeout),
        help("Raise services.timeout_secs or controller.send_timeout_secs.")
    )]
    Timeout { seconds: u64 },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(amc::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Configuration file already exists at {path}")]
    #[diagnostic(
        code(amc::config_exists),
        help("Use --force to overwrite it.")
    )]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(code(amc::config))]
    Config(Box<figment::Error>),

    #[error("Failed to write configuration: {0}")]
    #[diagnostic(code(amc::config_write))]
    ConfigWrite(String),

    // ── IO / Serialization ────────────────────────────────────────────

    #[error("Cannot read {path}")]
    #[diagnostic(code(amc::read_failed))]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid state snapshot: {0}")]
    #[diagnostic(
        code(amc::json),
        help("Expected the JSON served by the active mode service: {{\"activeModeConfigs\": [...]}}")
    )]
    Json(#[from] serde_json::Error),

    #[error("Failed to render output: {0}")]
    #[diagnostic(code(amc::render))]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::TlsError { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Rejected { .. } => exit_code::REJECTED,
            Self::Validation { .. } => exit_code::USAGE,
            Self::Config(_) | Self::ConfigExists { .. } | Self::ConfigWrite(_) => {
                exit_code::CONFIG
            }
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            // TLS failures carry no URL
            CoreError::ConnectionFailed { url, reason } => {
                if url.is_empty() {
                    CliError::TlsError { reason }
                } else {
                    CliError::ConnectionFailed { url, reason }
                }
            }
            CoreError::Timeout { timeout_secs } => CliError::Timeout {
                seconds: timeout_secs,
            },
            CoreError::Rejected { message } => CliError::Rejected { message },
            CoreError::Api { message, status } => CliError::Api {
                message: match status {
                    Some(code) => format!("HTTP {code}: {message}"),
                    None => message,
                },
            },
            CoreError::Serialization { message } => CliError::BadResponse { message },
            CoreError::Config { message } => CliError::Validation {
                field: "services".into(),
                reason: message,
            },
        }
    }
}

impl From<amc_api::Error> for CliError {
    fn from(err: amc_api::Error) -> Self {
        CoreError::from(err).into()
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Figment(e) => CliError::Config(e),
            ConfigError::Serialization(e) => CliError::ConfigWrite(e.to_string()),
            ConfigError::Io(e) => CliError::Io(e),
        }
    }
}

//! JSON output envelope for CLI commands.
//!
//! Commands invoked with `--json` print exactly one envelope on stdout,
//! designed for Unix piping and tool integration: a status, a
//! machine-readable result code, the process exit code, and either a
//! data payload or error details.

use serde::{Deserialize, Serialize};

use crate::calculator::CalculatorError;
use crate::io::ExitCode;

/// Operation outcome status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Operation succeeded
    Success,
    /// Operation failed
    Error,
}

/// Machine-readable result codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultCode {
    Ok,
    DivisionByZero,
    InvalidOperation,
    /// Schema-reserved: no command emits it today. `init` and `config`
    /// are text-only and report failures through
    /// [`ExitCode::ConfigError`] on stderr.
    ConfigError,
}

impl ResultCode {
    /// Convert to string for serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::InvalidOperation => "INVALID_OPERATION",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl From<&CalculatorError> for ResultCode {
    fn from(err: &CalculatorError) -> Self {
        match err {
            CalculatorError::DivisionByZero => Self::DivisionByZero,
            CalculatorError::InvalidOperation { .. } => Self::InvalidOperation,
        }
    }
}

/// Error details with recovery suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub suggestions: Vec<String>,
}

/// JSON output envelope.
///
/// All CLI commands output this structure when `--json` is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    /// Operation outcome
    pub status: Status,

    /// Machine-readable result code
    pub code: ResultCode,

    /// Unix exit code (0-255)
    pub exit_code: u8,

    /// Human-readable message
    pub message: String,

    /// Result payload (absent on error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Error details (absent on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
}

impl<T: Serialize> Envelope<T> {
    /// Successful result with a payload.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: Status::Success,
            code: ResultCode::Ok,
            exit_code: ExitCode::Success.into(),
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }

    /// Failed operation, coded from the calculator error.
    pub fn operation_error(err: &CalculatorError) -> Self {
        Self {
            status: Status::Error,
            code: ResultCode::from(err),
            exit_code: ExitCode::OperationError.into(),
            message: err.to_string(),
            data: None,
            error: None,
        }
    }

    /// Attach a recovery suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.error
            .get_or_insert_with(|| ErrorDetails {
                suggestions: Vec::new(),
            })
            .suggestions
            .push(suggestion.into());
        self
    }

    /// Serialize to a single JSON line.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

//! Input/Output handling for CLI and tool integration.
//!
//! This module provides:
//! - Unified output formatting (text, JSON)
//! - Consistent error handling and exit codes

pub mod envelope;
pub mod exit_code;
pub mod format;

pub use envelope::{Envelope, ErrorDetails, ResultCode, Status};
pub use exit_code::ExitCode;
pub use format::OutputFormat;

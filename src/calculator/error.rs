//! Error types for calculator operations.

use thiserror::Error;

/// Errors raised by calculator operations.
///
/// Each error is raised synchronously at the point of violation and
/// surfaces directly to the caller. Failed operations never touch the
/// history.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("cannot divide by zero")]
    DivisionByZero,

    #[error("invalid {operation}: {reason}")]
    InvalidOperation {
        operation: &'static str,
        reason: &'static str,
    },
}

pub type CalcResult<T> = Result<T, CalculatorError>;

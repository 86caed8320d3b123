//! The calculator service: six arithmetic operations plus a history log.
//!
//! Operations are synchronous, deterministic pure functions of their
//! inputs. The only side effects are one history append and one log
//! emission per successful call. Fallible operations (`divide`,
//! `power`, `square_root`) return their error without touching the
//! history.

pub mod error;
pub mod history;

pub use error::{CalcResult, CalculatorError};
pub use history::{History, OperationKind, OperationRecord, Operands, RecordId};

use tracing::{error, info};

/// Stateful calculator owning an ordered history of completed
/// operations.
///
/// Created at program start, dropped at process exit; nothing persists
/// across runs. The instance is process-local and single-threaded:
/// operations take `&mut self` and there is no internal locking, so
/// sharing one across threads requires external synchronization.
///
/// # Examples
///
/// ```
/// use reckon::Calculator;
///
/// let mut calc = Calculator::new();
/// assert_eq!(calc.add(5.0, 3.0), 8.0);
/// assert_eq!(calc.divide(15.0, 3.0).unwrap(), 5.0);
/// assert_eq!(calc.history().len(), 2);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Calculator {
    history: History,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the operation history, in call order.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Add two numbers.
    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        let result = a + b;
        info!("addition: {a} + {b} = {result}");
        self.history
            .append(OperationKind::Add, Operands::Binary(a, b), result);
        result
    }

    /// Subtract `b` from `a`.
    pub fn subtract(&mut self, a: f64, b: f64) -> f64 {
        let result = a - b;
        info!("subtraction: {a} - {b} = {result}");
        self.history
            .append(OperationKind::Subtract, Operands::Binary(a, b), result);
        result
    }

    /// Multiply two numbers.
    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        let result = a * b;
        info!("multiplication: {a} * {b} = {result}");
        self.history
            .append(OperationKind::Multiply, Operands::Binary(a, b), result);
        result
    }

    /// Divide `a` by `b`.
    ///
    /// Fails with [`CalculatorError::DivisionByZero`] when `b` is zero
    /// (positive or negative), without recording anything.
    pub fn divide(&mut self, a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            error!("division by zero attempted");
            return Err(CalculatorError::DivisionByZero);
        }
        let result = a / b;
        info!("division: {a} / {b} = {result}");
        self.history
            .append(OperationKind::Divide, Operands::Binary(a, b), result);
        Ok(result)
    }

    /// Raise `base` to `exponent`.
    ///
    /// Negative and fractional exponents follow real-number semantics.
    /// Two domain violations fail with
    /// [`CalculatorError::InvalidOperation`]: a negative base with a
    /// fractional exponent (no real result), and a zero base with a
    /// negative exponent. Both checks apply to finite inputs only;
    /// non-finite bases and exponents carry straight through to
    /// [`f64::powf`].
    pub fn power(&mut self, base: f64, exponent: f64) -> CalcResult<f64> {
        if base.is_finite() && base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
            error!("power of negative base with fractional exponent attempted");
            return Err(CalculatorError::InvalidOperation {
                operation: "power",
                reason: "negative base with a fractional exponent has no real result",
            });
        }
        if base == 0.0 && exponent.is_finite() && exponent < 0.0 {
            error!("zero raised to a negative power attempted");
            return Err(CalculatorError::InvalidOperation {
                operation: "power",
                reason: "zero cannot be raised to a negative power",
            });
        }
        let result = base.powf(exponent);
        info!("power: {base} ^ {exponent} = {result}");
        self.history
            .append(OperationKind::Power, Operands::Binary(base, exponent), result);
        Ok(result)
    }

    /// Take the square root of `value`.
    ///
    /// Fails with [`CalculatorError::InvalidOperation`] when `value` is
    /// negative.
    pub fn square_root(&mut self, value: f64) -> CalcResult<f64> {
        if value < 0.0 {
            error!("square root of negative number attempted");
            return Err(CalculatorError::InvalidOperation {
                operation: "square_root",
                reason: "cannot take the square root of a negative number",
            });
        }
        let result = value.sqrt();
        info!("square root: √{value} = {result}");
        self.history
            .append(OperationKind::SquareRoot, Operands::Unary(value), result);
        Ok(result)
    }
}

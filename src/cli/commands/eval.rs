//! Eval command - run a single operation and print the result.

use crate::calculator::{Calculator, CalculatorError};
use crate::cli::args::EvalOp;
use crate::config::Settings;
use crate::display::format_value;
use crate::io::{Envelope, ExitCode, OutputFormat};

/// Run the eval command.
///
/// Text output prints the bare result on stdout, suitable for piping.
/// JSON output prints one envelope line carrying the full history
/// record. Operation errors exit non-zero.
pub fn run(op: EvalOp, settings: &Settings) -> ExitCode {
    let mut calc = Calculator::new();

    let (result, json) = match op {
        EvalOp::Add { a, b, json } => (Ok(calc.add(a, b)), json),
        EvalOp::Subtract { a, b, json } => (Ok(calc.subtract(a, b)), json),
        EvalOp::Multiply { a, b, json } => (Ok(calc.multiply(a, b)), json),
        EvalOp::Divide { a, b, json } => (calc.divide(a, b), json),
        EvalOp::Power {
            base,
            exponent,
            json,
        } => (calc.power(base, exponent), json),
        EvalOp::Sqrt { value, json } => (calc.square_root(value), json),
    };
    let format = OutputFormat::from_json_flag(json);

    match result {
        Ok(value) => {
            if format.is_json() {
                let record = calc
                    .history()
                    .latest()
                    .expect("successful operation was recorded")
                    .clone();
                let envelope = Envelope::success(record.to_string(), record);
                println!("{}", envelope.to_json().expect("envelope serialization"));
            } else {
                println!("{}", format_value(value, settings.display.precision));
            }
            ExitCode::Success
        }
        Err(e) => {
            if format.is_json() {
                let envelope: Envelope =
                    Envelope::operation_error(&e).with_suggestion(suggestion_for(&e));
                println!("{}", envelope.to_json().expect("envelope serialization"));
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::OperationError
        }
    }
}

fn suggestion_for(err: &CalculatorError) -> &'static str {
    match err {
        CalculatorError::DivisionByZero => "check the divisor before dividing",
        CalculatorError::InvalidOperation {
            operation: "power", ..
        } => "keep negative bases to integer exponents and zero bases to non-negative ones",
        CalculatorError::InvalidOperation { .. } => {
            "square roots are only defined for non-negative numbers"
        }
    }
}

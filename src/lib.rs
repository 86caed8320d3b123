pub mod calculator;
pub mod cli;
pub mod config;
pub mod display;
pub mod io;
pub mod logging;

pub use calculator::{
    CalcResult, Calculator, CalculatorError, History, OperationKind, OperationRecord, Operands,
    RecordId,
};
pub use config::Settings;

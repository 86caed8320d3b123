//! Demo command - the fixed demonstration sequence.
//!
//! Runs the six showcase operations, prints each result, then renders
//! the recorded history as a table. Any propagated operation error is
//! fatal for the run.

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL};
use owo_colors::OwoColorize;

use crate::calculator::{CalcResult, Calculator};
use crate::config::Settings;
use crate::display::{Theme, format_value};
use crate::io::ExitCode;

/// Run the demo command.
pub fn run(settings: &Settings) -> ExitCode {
    let use_color = settings.display.color && !Theme::should_disable_colors();
    if use_color {
        println!("{}", "Calculator Demo".cyan().bold());
    } else {
        println!("Calculator Demo");
    }
    println!("===============");

    let mut calc = Calculator::new();
    if let Err(e) = run_sequence(&mut calc, settings) {
        eprintln!("Error: {e}");
        return ExitCode::OperationError;
    }

    println!();
    print_history(&calc, settings);
    ExitCode::Success
}

fn run_sequence(calc: &mut Calculator, settings: &Settings) -> CalcResult<()> {
    let precision = settings.display.precision;

    println!("5 + 3 = {}", format_value(calc.add(5.0, 3.0), precision));
    println!(
        "10 - 4 = {}",
        format_value(calc.subtract(10.0, 4.0), precision)
    );
    println!(
        "6 * 7 = {}",
        format_value(calc.multiply(6.0, 7.0), precision)
    );
    println!(
        "15 / 3 = {}",
        format_value(calc.divide(15.0, 3.0)?, precision)
    );
    println!("2 ^ 8 = {}", format_value(calc.power(2.0, 8.0)?, precision));
    println!(
        "√25 = {}",
        format_value(calc.square_root(25.0)?, precision)
    );

    Ok(())
}

fn print_history(calc: &Calculator, settings: &Settings) {
    let history = calc.history();
    let limit = settings.history.table_limit;
    let skip = if limit > 0 && history.len() > limit {
        history.len() - limit
    } else {
        0
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["#", "operation", "expression", "result", "recorded"]);
    if let Some(column) = table.column_mut(3) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    let precision = settings.display.precision;
    for record in history.iter().skip(skip) {
        table.add_row(vec![
            Cell::new(record.id),
            Cell::new(record.kind),
            Cell::new(record.expression()),
            Cell::new(format_value(record.result, precision)),
            Cell::new(
                record
                    .timestamp
                    .with_timezone(&chrono::Local)
                    .format("%H:%M:%S"),
            ),
        ]);
    }

    println!("History ({} operations recorded)", history.len());
    println!("{table}");
}

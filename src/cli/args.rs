//! CLI argument parsing using clap.
//!
//! Contains the Cli struct, Commands enum, and the operation
//! subcommands.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Arithmetic calculator with operation history
#[derive(Parser)]
#[command(
    name = "reckon",
    version = env!("CARGO_PKG_VERSION"),
    about = "Arithmetic calculator with operation history",
    long_about = "Run arithmetic operations and inspect the recorded history.\n\
                  Invoked without a command, runs the demonstration sequence.",
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the demonstration sequence
    #[command(about = "Run the demonstration sequence and show the recorded history")]
    Demo,

    /// Evaluate a single operation
    #[command(about = "Evaluate one arithmetic operation and print the result")]
    Eval {
        #[command(subcommand)]
        op: EvalOp,
    },

    /// Initialize project
    #[command(about = "Set up .reckon directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration
    #[command(about = "Display active settings")]
    Config,
}

/// Operations available to `reckon eval`
#[derive(Subcommand)]
pub enum EvalOp {
    /// Add two numbers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,

        /// Output result as JSON envelope
        #[arg(long)]
        json: bool,
    },

    /// Subtract the second number from the first
    Subtract {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,

        /// Output result as JSON envelope
        #[arg(long)]
        json: bool,
    },

    /// Multiply two numbers
    Multiply {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,

        /// Output result as JSON envelope
        #[arg(long)]
        json: bool,
    },

    /// Divide the first number by the second
    Divide {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,

        /// Output result as JSON envelope
        #[arg(long)]
        json: bool,
    },

    /// Raise a base to an exponent
    Power {
        #[arg(allow_negative_numbers = true)]
        base: f64,
        #[arg(allow_negative_numbers = true)]
        exponent: f64,

        /// Output result as JSON envelope
        #[arg(long)]
        json: bool,
    },

    /// Take the square root of a number
    #[command(alias = "square-root")]
    Sqrt {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Output result as JSON envelope
        #[arg(long)]
        json: bool,
    },
}

use clap::Parser;

use reckon::cli::{Cli, Commands, commands};
use reckon::config::Settings;
use reckon::logging;

fn main() {
    let cli = Cli::parse();

    // Bare invocation runs the demonstration sequence
    let command = cli.command.unwrap_or(Commands::Demo);

    // For non-init commands, surface a broken settings file early
    if !matches!(command, Commands::Init { .. }) {
        if let Err(warning) = Settings::check_init() {
            eprintln!("Warning: {warning}");
            eprintln!("Using default configuration for now.");
        }
    }

    // Load configuration
    let config = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        Settings::default()
    });

    // Debug mode raises the default level; RUST_LOG still takes
    // precedence inside init
    let mut log_config = config.logging.clone();
    if config.debug {
        log_config.default = "debug".to_string();
    }
    logging::init_with_config(&log_config);

    let exit_code = match command {
        Commands::Demo => commands::demo::run(&config),
        Commands::Eval { op } => commands::eval::run(op, &config),
        Commands::Init { force } => commands::init::run_init(force),
        Commands::Config => commands::init::run_config(&config),
    };

    exit_code.exit();
}

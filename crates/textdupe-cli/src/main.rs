mod commands;
mod logging;
mod progress;

use std::process;

use clap::Parser;
use colored::*;
use commands::Cli;
use dotenv::dotenv;
use progress::CliReporter;
use textdupe_core::{AppConfig, CompareEngine};
use tracing::{error, info};

fn main() {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = Cli::parse();

    let mut config = match textdupe_core::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };
    apply_cli_overrides(&mut config, &args);

    if args.verbose {
        if args.keep_whitespace {
            eprintln!("Not ignoring whitespaces");
        }
        if args.no_recursive {
            eprintln!("Don't perform recursive search");
        }
    }

    if let Err(err) = run_compare(&config, args.verbose) {
        error!("Error: {}", err);
        process::exit(1);
    }
}

fn apply_cli_overrides(config: &mut AppConfig, args: &Cli) {
    config.paths = args.paths.clone();
    if args.keep_whitespace {
        config.strip_whitespace = false;
    }
    if args.no_recursive {
        config.recursive = false;
    }
}

fn run_compare(config: &AppConfig, verbose: bool) -> anyhow::Result<()> {
    let engine = CompareEngine::new(config.clone());
    let reporter = CliReporter::new(verbose);
    let outcome = engine.run(&reporter)?;

    // The ranked report is the program's output proper; it alone goes
    // to stdout.
    for line in &outcome.report_lines {
        println!("{line}");
    }

    info!(
        "Scan: {}, Compare: {}",
        format!("{:.2}s", outcome.scan_duration.as_secs_f64()).green(),
        format!("{:.2}s", outcome.compare_duration.as_secs_f64()).green(),
    );
    info!(
        "{} files, {} pairs compared",
        format!("{}", outcome.files_scanned).cyan(),
        format!("{}", outcome.pairs_compared).cyan(),
    );

    Ok(())
}

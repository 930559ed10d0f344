use clap::Parser;
use folder_hash::args::Args;
use folder_hash::config::RunConfig;
use folder_hash::{app, logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::setup_logging(args.verbose);

    let config = match RunConfig::try_from(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if config.review {
        return match presentation::write_review(&mut std::io::stdout().lock(), &args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Output Error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_invalid_root() => {
            eprintln!("That isn't a directory. Try again");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!(error = %e, "run aborted");
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

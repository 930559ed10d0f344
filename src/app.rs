// src/app.rs
use crate::config::RunConfig;
use crate::error::Result;
use crate::output::ReportSink;
use crate::presentation;
use folder_hash_engine::{Config, EngineError, Report};
use std::io::{self, Write};
use std::time::Instant;
use tracing::info;

/// Run one invocation end to end: core pipeline, report, summary.
///
/// The root is checked before anything touches the output destination, so an
/// invalid folder never creates or truncates the report file.
///
/// # Errors
/// Returns any engine, output or stdout error.
pub fn run(config: &RunConfig) -> Result<()> {
    run_with(config, folder_hash_engine::run)
}

fn run_with<F>(config: &RunConfig, build_report: F) -> Result<()>
where
    F: FnOnce(&Config) -> folder_hash_engine::Result<Report>,
{
    let started = Instant::now();

    let root = &config.engine.root;
    if !root.is_dir() {
        return Err(EngineError::InvalidRoot { path: root.clone() }.into());
    }

    info!(
        root = %root.display(),
        threads = config.engine.threads,
        mode = ?config.engine.mode,
        "starting"
    );

    let report = build_report(&config.engine)?;
    let sink = ReportSink::from_output(config.output.as_deref());
    sink.write(&report)?;
    info!(lines = report.len(), "report written");

    let mut stdout = io::stdout().lock();
    presentation::write_summary(&mut stdout, &sink, started.elapsed())?;
    stdout.flush()?;
    Ok(())
}

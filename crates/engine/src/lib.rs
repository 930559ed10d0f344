// crates/engine/src/lib.rs
pub mod aggregate;
pub mod config;
pub mod digest;
pub mod distributor;
pub mod error;
pub mod filesystem;
pub mod path;
pub mod pool;
pub mod report;

pub use crate::config::{Config, ConfigBuilder, ConfigBuilderError, Mode};
pub use crate::error::{EngineError, Result};
pub use crate::path::FilePath;
pub use crate::report::Report;

use crate::aggregate::AggregatedReport;
use std::path::Path;
use tracing::info;

/// Run the enumerate / distribute / digest / aggregate pipeline.
///
/// In [`Mode::List`] the distributor and workers are skipped entirely. Either
/// way the caller gets a complete report or an error, never a partial one.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRoot`] when the root is missing, and any walk,
/// pool or file access error raised along the way. A single unreadable file
/// aborts the whole run.
pub fn run(config: &Config) -> Result<Report> {
    let files = filesystem::enumerate(&config.root)?;

    match config.mode {
        Mode::List => Ok(Report::listing(&config.root, files)),
        Mode::Digest => digest_files(&config.root, files, config.threads),
    }
}

/// Hash an already enumerated file list with `threads` workers.
///
/// # Errors
///
/// Returns the first worker's [`EngineError::FileAccess`] if any file cannot be
/// read, or a pool / config error if the workers cannot be set up.
pub fn digest_files(root: &Path, files: Vec<FilePath>, threads: usize) -> Result<Report> {
    let total = files.len();
    let partitions = distributor::partition(files, threads)?;
    let results = pool::run_workers(&partitions)?;
    let aggregated = AggregatedReport::merge(results)?;

    info!(
        files = total,
        workers = partitions.len(),
        "digests aggregated"
    );
    Ok(Report::digests(root, &aggregated))
}

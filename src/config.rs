// src/config.rs
use crate::args::Args;
use crate::error::Result;
pub use folder_hash_engine::{Config, ConfigBuilder, Mode};
use std::path::PathBuf;

/// Everything one invocation needs after argument parsing.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub engine: Config,
    /// `None` writes the report to stdout.
    pub output: Option<PathBuf>,
    /// Print the options instead of running.
    pub review: bool,
}

impl TryFrom<&Args> for RunConfig {
    type Error = crate::error::AppError;

    fn try_from(args: &Args) -> Result<Self> {
        let mode = if args.md5 { Mode::Digest } else { Mode::List };

        let engine = ConfigBuilder::default()
            .root(args.folder.clone())
            .threads(resolve_threads(args.threads))
            .mode(mode)
            .build()?;

        Ok(Self {
            engine,
            output: args.output.clone(),
            review: args.review_options,
        })
    }
}

/// An explicit positive count wins; `0` or nothing means one worker per logical core.
#[must_use]
pub fn resolve_threads(requested: Option<usize>) -> usize {
    match requested {
        Some(n) if n > 0 => n,
        _ => num_cpus::get().max(1),
    }
}

// src/args.rs
use crate::parsers;
use clap::{Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "folder_hash",
    version,
    about = "Lists every file under a folder, optionally with its MD5, using a fixed worker pool"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Number of threads to use in calculations. 0 or unset = number of cores
    /// (`-r` shows the raw value, so unset prints as 0)
    #[arg(
        short = 't',
        long = "threads",
        allow_negative_numbers = true,
        value_parser = parsers::parse_thread_count,
        help_heading = "Execution"
    )]
    pub threads: Option<usize>,

    /// Root folder for calculations
    #[arg(short = 'f', long = "folder", value_hint = ValueHint::DirPath, help_heading = "Input")]
    pub folder: PathBuf,

    /// File to write the report. If unspecified, it prints to console
    #[arg(short = 'o', long = "output", value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Perform MD5 analysis
    #[arg(short = 'm', long = "md5", help_heading = "Execution")]
    pub md5: bool,

    /// Review the options set without running anything
    #[arg(short = 'r', long = "review-options", help_heading = "Output")]
    pub review_options: bool,

    /// Log diagnostics to stderr at debug level (RUST_LOG overrides)
    #[arg(short = 'v', long = "verbose", help_heading = "Output")]
    pub verbose: bool,
}

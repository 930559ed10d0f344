// src/error.rs
use folder_hash_engine::ConfigBuilderError;
use folder_hash_engine::EngineError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigBuilderError),

    #[error("Failed to write report to '{path}': {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True when the run never started because the folder is missing.
    #[must_use]
    pub fn is_invalid_root(&self) -> bool {
        matches!(self, Self::Engine(EngineError::InvalidRoot { .. }))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

use derive_builder::Builder;
use std::path::PathBuf;

/// Terminal state of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Sorted relative paths, no hashing.
    #[default]
    List,
    /// Relative paths with their MD5 digest.
    Digest,
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    /// Root folder; its literal string is stripped from every reported path.
    pub root: PathBuf,
    /// Number of digest workers. Already resolved, never zero.
    #[builder(default = "1")]
    pub threads: usize,
    #[builder(default)]
    pub mode: Mode,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.threads == Some(0) {
            return Err("worker count must be at least 1".to_string());
        }
        Ok(())
    }
}

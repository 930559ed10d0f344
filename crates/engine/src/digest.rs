use crate::distributor::WorkPartition;
use crate::error::{EngineError, Result};
use crate::path::FilePath;
use md5::{Digest, Md5};
use std::fmt;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// 128-bit MD5 of a file's full contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct FileDigest(pub u128);

impl FileDigest {
    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(u128::from_be_bytes(bytes))
    }
}

impl fmt::Display for FileDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

/// Hash one file, reading it start to end in a single pass.
///
/// # Errors
/// Returns [`EngineError::FileAccess`] if the file cannot be opened or read.
pub fn digest_file(path: &Path) -> Result<FileDigest> {
    let access = |source: std::io::Error| EngineError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(access)?;
    let mut hasher = Md5::new();
    std::io::copy(&mut file, &mut hasher).map_err(access)?;

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&hasher.finalize());
    Ok(FileDigest::from_bytes(bytes))
}

/// Path/digest pairs produced by one worker, in partition order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigestResult {
    worker: usize,
    entries: Vec<(FilePath, FileDigest)>,
}

impl DigestResult {
    #[must_use]
    pub fn new(worker: usize) -> Self {
        Self {
            worker,
            entries: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_entries(worker: usize, entries: Vec<(FilePath, FileDigest)>) -> Self {
        Self { worker, entries }
    }

    #[must_use]
    pub fn worker(&self) -> usize {
        self.worker
    }

    #[must_use]
    pub fn entries(&self) -> &[(FilePath, FileDigest)] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<(FilePath, FileDigest)> {
        self.entries
    }
}

/// Hashes every file of one partition. Stops at the first unreadable file.
pub struct DigestWorker<'a> {
    partition: &'a WorkPartition,
}

impl<'a> DigestWorker<'a> {
    #[must_use]
    pub fn new(partition: &'a WorkPartition) -> Self {
        Self { partition }
    }

    /// # Errors
    /// Returns the [`EngineError::FileAccess`] of the first file that could not be read;
    /// digests computed before it are discarded.
    pub fn run(&self) -> Result<DigestResult> {
        let worker = self.partition.index();
        debug!(worker, files = self.partition.len(), "digest worker started");

        let mut result = DigestResult::new(worker);
        result.entries.reserve(self.partition.len());
        for file in self.partition.files() {
            let digest = digest_file(file.as_path())?;
            result.entries.push((file.clone(), digest));
        }

        debug!(worker, files = result.len(), "digest worker finished");
        Ok(result)
    }
}

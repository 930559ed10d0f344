use crate::error::{EngineError, Result};
use crate::path::FilePath;

/// Files assigned to one digest worker, in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkPartition {
    index: usize,
    files: Vec<FilePath>,
}

impl WorkPartition {
    /// Index of the worker that owns this partition.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn files(&self) -> &[FilePath] {
        &self.files
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Round-robin split of `files` into exactly `workers` partitions.
///
/// Partition `k` receives every file at index `i` with `i % workers == k`.
/// File size plays no part, so one large file can leave its worker running
/// long after the others are idle.
///
/// # Errors
/// Returns [`EngineError::Config`] when `workers` is zero.
pub fn partition(files: Vec<FilePath>, workers: usize) -> Result<Vec<WorkPartition>> {
    if workers == 0 {
        return Err(EngineError::Config(
            "worker count must be at least 1".to_string(),
        ));
    }

    let per_worker = files.len().div_ceil(workers);
    let mut partitions: Vec<WorkPartition> = (0..workers)
        .map(|index| WorkPartition {
            index,
            files: Vec::with_capacity(per_worker),
        })
        .collect();

    for (i, file) in files.into_iter().enumerate() {
        partitions[i % workers].files.push(file);
    }

    Ok(partitions)
}

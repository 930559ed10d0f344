use crate::digest::{DigestResult, FileDigest};
use crate::error::{EngineError, Result};
use crate::path::FilePath;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Every worker's digests merged into one map ordered by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedReport {
    entries: BTreeMap<FilePath, FileDigest>,
}

impl AggregatedReport {
    /// Merge finished worker results.
    ///
    /// # Errors
    /// Returns [`EngineError::DuplicateEntry`] if two results carry the same path.
    pub fn merge<I>(results: I) -> Result<Self>
    where
        I: IntoIterator<Item = DigestResult>,
    {
        let mut entries = BTreeMap::new();
        for result in results {
            for (path, digest) in result.into_entries() {
                match entries.entry(path) {
                    Entry::Occupied(slot) => {
                        return Err(EngineError::DuplicateEntry {
                            path: slot.key().as_path().to_path_buf(),
                        });
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(digest);
                    }
                }
            }
        }
        Ok(Self { entries })
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
    pub fn get(&self, path: &FilePath) -> Option<&FileDigest> {
        self.entries.get(path)
    }

    /// Entries in ascending path order.
    pub fn iter(&self) -> impl Iterator<Item = (&FilePath, &FileDigest)> {
        self.entries.iter()
    }
}

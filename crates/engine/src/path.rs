use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};

/// Location of one enumerated file; the join key between pipeline stages.
///
/// Ordering is lexicographic over the raw path bytes, so `a.txt` sorts
/// before `a/b` the same way the rendered report lines do.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilePath(PathBuf);

impl FilePath {
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }

    /// Removes the literal `root` string from the front of this path.
    ///
    /// The separator after the root is kept unless `root` itself ends with one,
    /// so `data` + `data/a.txt` gives `/a.txt` while `data/` gives `a.txt`.
    #[must_use]
    pub fn strip_root(&self, root: &Path) -> String {
        let full = self.0.to_string_lossy();
        let root = root.to_string_lossy();
        full.strip_prefix(root.as_ref())
            .unwrap_or(full.as_ref())
            .to_owned()
    }
}

impl From<PathBuf> for FilePath {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&str> for FilePath {
    fn from(path: &str) -> Self {
        Self(PathBuf::from(path))
    }
}

impl Ord for FilePath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.as_os_str().cmp(other.0.as_os_str())
    }
}

impl PartialOrd for FilePath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

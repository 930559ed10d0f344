use crate::aggregate::AggregatedReport;
use crate::config::Mode;
use crate::path::FilePath;
use std::io::{self, Write};
use std::path::Path;

/// Final report lines, ascending by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    mode: Mode,
    lines: Vec<String>,
}

impl Report {
    /// Listing mode: sort by full path, strip the root, one path per line.
    #[must_use]
    pub fn listing(root: &Path, mut files: Vec<FilePath>) -> Self {
        files.sort();
        let lines = files.iter().map(|file| file.strip_root(root)).collect();
        Self {
            mode: Mode::List,
            lines,
        }
    }

    /// Hashing mode: `relative_path -> digest` per aggregated entry.
    #[must_use]
    pub fn digests(root: &Path, aggregated: &AggregatedReport) -> Self {
        let lines = aggregated
            .iter()
            .map(|(file, digest)| format!("{} -> {digest}", file.strip_root(root)))
            .collect();
        Self {
            mode: Mode::Digest,
            lines,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Write every line followed by `\n`.
    ///
    /// # Errors
    /// Propagates the writer's I/O error.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(writer, "{line}")?;
        }
        Ok(())
    }
}

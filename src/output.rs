// src/output.rs
use crate::error::{AppError, Result};
use folder_hash_engine::Report;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where a finished report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSink {
    Console,
    File(PathBuf),
}

impl ReportSink {
    #[must_use]
    pub fn from_output(output: Option<&Path>) -> Self {
        output.map_or(Self::Console, |path| Self::File(path.to_path_buf()))
    }

    /// Write the whole report.
    ///
    /// File output replaces the destination in one rename, so it is either the
    /// previous content or the complete new report.
    ///
    /// # Errors
    /// Returns [`AppError::Output`] if the destination cannot be written, or
    /// [`AppError::Io`] if stdout is closed.
    pub fn write(&self, report: &Report) -> Result<()> {
        match self {
            Self::Console => {
                let mut out = BufWriter::new(io::stdout().lock());
                report.write_to(&mut out)?;
                out.flush()?;
            }
            Self::File(path) => {
                let mut buf = Vec::new();
                report.write_to(&mut buf)?;
                atomic_write(path, &buf).map_err(|source| AppError::Output {
                    path: path.clone(),
                    source,
                })?;
            }
        }
        Ok(())
    }
}

/// Atomically write `data` to `path` via a temp file and rename.
///
/// # Errors
/// Propagates any create/write/rename failure; the temp file is removed on error.
pub fn atomic_write(path: &Path, data: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        Some(_) => PathBuf::from("."),
        None => return Err(io::Error::other("path has no parent")),
    };

    // PID + nanos keeps concurrent runs from sharing a temp name.
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

    let written = write_and_sync(&tmp, data).and_then(|()| fs::rename(&tmp, path));
    if written.is_err() {
        let _ = fs::remove_file(&tmp);
        return written;
    }

    #[cfg(unix)]
    {
        if let Ok(dir) = File::open(&parent) {
            let _ = dir.sync_all();
        }
    }

    Ok(())
}

fn write_and_sync(tmp: &Path, data: &[u8]) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(tmp)?);
    w.write_all(data)?;
    w.flush()?;
    w.get_ref().sync_all()
}

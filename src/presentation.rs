// src/presentation.rs
use crate::args::Args;
use crate::output::ReportSink;
use std::io::{self, Write};
use std::time::Duration;

/// Print the parsed options as-is, one per line.
///
/// # Errors
/// Propagates the writer's I/O error.
pub fn write_review<W: Write>(w: &mut W, args: &Args) -> io::Result<()> {
    writeln!(w, "Threads:    {}", args.threads.unwrap_or(0))?;
    writeln!(w, "Folder:     {}", args.folder.display())?;
    writeln!(
        w,
        "OutputFile: {}",
        args.output
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    )?;
    writeln!(w, "Md5:        {}", args.md5)?;
    writeln!(w, "Review:     {}", args.review_options)?;
    Ok(())
}

/// Trailer printed after a successful run.
///
/// # Errors
/// Propagates the writer's I/O error.
pub fn write_summary<W: Write>(w: &mut W, sink: &ReportSink, elapsed: Duration) -> io::Result<()> {
    if let ReportSink::File(path) = sink {
        writeln!(w, "Written to {}", path.display())?;
    }
    writeln!(w, "Process took {}ms", elapsed.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn render_review(argv: &[&str]) -> String {
        let args = Args::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        write_review(&mut out, &args).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn review_shows_raw_options() {
        let text = render_review(&["folder_hash", "-f", "data", "-t", "3", "-o", "out.txt", "-m", "-r"]);
        assert_eq!(
            text,
            "Threads:    3\nFolder:     data\nOutputFile: out.txt\nMd5:        true\nReview:     true\n"
        );
    }

    #[test]
    fn review_unset_values_are_zero_and_empty() {
        let text = render_review(&["folder_hash", "-f", "data", "-r"]);
        assert!(text.starts_with("Threads:    0\n"));
        assert!(text.contains("OutputFile: \n"));
        assert!(text.contains("Md5:        false\n"));
    }

    #[test]
    fn console_summary_has_only_timing() {
        let mut out = Vec::new();
        write_summary(&mut out, &ReportSink::Console, Duration::from_millis(42)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Process took 42ms\n");
    }

    #[test]
    fn file_summary_names_destination() {
        let mut out = Vec::new();
        let sink = ReportSink::File(PathBuf::from("report.txt"));
        write_summary(&mut out, &sink, Duration::from_millis(7)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Written to report.txt\nProcess took 7ms\n"
        );
    }
}

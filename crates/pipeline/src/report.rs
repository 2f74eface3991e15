use pathmark_core::{FileRole, PathmarkError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Destination for report lines (diagnostics and the path report).
pub trait Report {
    fn line(&mut self, text: &str) -> Result<()>;

    fn lines<I, S>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        Self: Sized,
    {
        for text in lines {
            self.line(text.as_ref())?;
        }
        Ok(())
    }
}

/// In-memory report, mostly for tests.
impl Report for Vec<String> {
    fn line(&mut self, text: &str) -> Result<()> {
        self.push(text.to_string());
        Ok(())
    }
}

/// Append-only report file.
///
/// Each line opens the file in append mode, writes, and closes it again. The
/// file is never truncated here; clearing it between runs is up to the caller.
#[derive(Debug, Clone)]
pub struct ReportSink {
    path: PathBuf,
}

impl ReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Report for ReportSink {
    fn line(&mut self, text: &str) -> Result<()> {
        let sink_error = |source| PathmarkError::Sink {
            role: FileRole::Report,
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(sink_error)?;
        writeln!(file, "{}", text).map_err(sink_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_sink_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run_py_out.txt");
        fs::write(&path, "earlier run\n").unwrap();

        let mut sink = ReportSink::new(&path);
        sink.lines(["first", "second"]).unwrap();
        sink.line("").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "earlier run\nfirst\nsecond\n\n");
    }

    #[test]
    fn test_sink_unwritable() {
        let dir = TempDir::new().unwrap();
        let mut sink = ReportSink::new(dir.path().join("missing").join("report.txt"));
        assert!(matches!(
            sink.line("x"),
            Err(PathmarkError::Sink {
                role: FileRole::Report,
                ..
            })
        ));
    }
}

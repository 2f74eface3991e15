//! Fatal conditions of a run.
//!
//! Recoverable anomalies (undeclared nodes, unresolved path tokens, missing
//! edges) never surface here; they are report lines or log events.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PathmarkError>;

/// Which file an I/O failure concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Network,
    Declarations,
    Paths,
    Report,
    Subset,
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileRole::Network => "network description",
            FileRole::Declarations => "source/target declarations",
            FileRole::Paths => "path artifact",
            FileRole::Report => "report",
            FileRole::Subset => "reduced network",
        };
        f.write_str(name)
    }
}

/// Why a network description line was rejected
#[derive(Debug, Error)]
pub enum FormatIssue {
    #[error("{section} field \"{field}\" before any \"id\"")]
    FieldBeforeRecord { section: &'static str, field: String },

    #[error("\"{field}\" is not a valid number: '{value}'")]
    BadNumber { field: String, value: String },

    #[error("\"{field}\" is neither true nor false: '{value}'")]
    BadBool { field: String, value: String },
}

#[derive(Debug, Error)]
pub enum PathmarkError {
    #[error("could not open {role} file {}: {source}", path.display())]
    Open {
        role: FileRole,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed reading {role} file {}: {source}", path.display())]
    Read {
        role: FileRole,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("bad network format on line {line}: {issue}")]
    NetworkFormat { line: usize, issue: FormatIssue },

    #[error("bad line {line} in {}: '{content}'", path.display())]
    Declaration {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("bad line {line} in {}", path.display())]
    PathLine { path: PathBuf, line: usize },

    #[error("unable to open {}: {source}", path.display())]
    PathsUnavailable {
        path: PathBuf,
        /// Whether any declared source or target was found in the network
        endpoints_found: bool,
        #[source]
        source: io::Error,
    },

    #[error("could not write {role} file {}: {source}", path.display())]
    Sink {
        role: FileRole,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PathmarkError {
    /// Fixed explanation lines this failure leaves in the report.
    pub fn report_lines(&self) -> Vec<String> {
        let file_name = |path: &PathBuf| {
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        };

        match self {
            PathmarkError::Open {
                role: FileRole::Declarations,
                path,
                ..
            } => vec![format!("Unable to open '{}', please report this.", file_name(path))],
            PathmarkError::Read {
                role: FileRole::Declarations,
                path,
                ..
            }
            | PathmarkError::Declaration { path, .. } => {
                vec![format!("Unable to read '{}', please report this.", file_name(path))]
            }
            PathmarkError::Open {
                role: FileRole::Network,
                ..
            } => vec!["Unable to open the network file.".to_string()],
            PathmarkError::Read {
                role: FileRole::Network,
                ..
            }
            | PathmarkError::NetworkFormat { .. } => {
                vec!["Unable to read the network file (bad format).".to_string()]
            }
            PathmarkError::Open {
                role: FileRole::Paths,
                ..
            }
            | PathmarkError::Read {
                role: FileRole::Paths,
                ..
            }
            | PathmarkError::PathLine { .. } => {
                vec!["Path analysis was not completed successfully.".to_string()]
            }
            PathmarkError::PathsUnavailable {
                endpoints_found: true,
                ..
            } => vec![
                "Path analysis was not completed successfully. Possibly there were".to_string(),
                "no paths between the specified source(s) and target(s).".to_string(),
            ],
            PathmarkError::PathsUnavailable { .. } => {
                vec!["Path analysis was not completed successfully.".to_string()]
            }
            PathmarkError::Open {
                role: FileRole::Subset,
                ..
            }
            | PathmarkError::Read {
                role: FileRole::Subset,
                ..
            }
            | PathmarkError::Sink {
                role: FileRole::Subset,
                ..
            } => vec!["Unable to open the sub-network file to write.".to_string()],
            // The report itself is what failed; nothing can be written to it.
            PathmarkError::Open {
                role: FileRole::Report,
                ..
            }
            | PathmarkError::Read {
                role: FileRole::Report,
                ..
            }
            | PathmarkError::Sink { .. } => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn io_err() -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, "missing")
    }

    #[test]
    fn test_declaration_lines_name_the_file() {
        let err = PathmarkError::Open {
            role: FileRole::Declarations,
            path: PathBuf::from("/tmp/run/in.txt"),
            source: io_err(),
        };
        assert_eq!(err.report_lines(), vec!["Unable to open 'in.txt', please report this."]);
    }

    #[test]
    fn test_paths_unavailable_depends_on_endpoints() {
        let found = PathmarkError::PathsUnavailable {
            path: PathBuf::from("k.txt"),
            endpoints_found: true,
            source: io_err(),
        };
        assert_eq!(found.report_lines().len(), 2);

        let none = PathmarkError::PathsUnavailable {
            path: PathBuf::from("k.txt"),
            endpoints_found: false,
            source: io_err(),
        };
        assert_eq!(
            none.report_lines(),
            vec!["Path analysis was not completed successfully."]
        );
    }

    #[test]
    fn test_format_issue_message() {
        let err = PathmarkError::NetworkFormat {
            line: 12,
            issue: FormatIssue::BadBool {
                field: "selected".to_string(),
                value: "maybe".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "bad network format on line 12: \"selected\" is neither true nor false: 'maybe'"
        );
        assert_eq!(
            err.report_lines(),
            vec!["Unable to read the network file (bad format)."]
        );
    }

    #[test]
    fn test_open_lines_follow_role() {
        let open = |role| PathmarkError::Open {
            role,
            path: PathBuf::from("/tmp/run/file"),
            source: io_err(),
        };
        assert_eq!(
            open(FileRole::Network).report_lines(),
            vec!["Unable to open the network file."]
        );
        assert_eq!(
            open(FileRole::Paths).report_lines(),
            vec!["Path analysis was not completed successfully."]
        );
        assert_eq!(
            open(FileRole::Subset).report_lines(),
            vec!["Unable to open the sub-network file to write."]
        );
        assert!(open(FileRole::Report).report_lines().is_empty());
    }

    #[test]
    fn test_network_read_failure_is_bad_format() {
        let err = PathmarkError::Read {
            role: FileRole::Network,
            path: PathBuf::from("net.cyjs"),
            source: io_err(),
        };
        assert_eq!(
            err.report_lines(),
            vec!["Unable to read the network file (bad format)."]
        );
    }

    #[test]
    fn test_report_sink_failure_writes_nothing() {
        let err = PathmarkError::Sink {
            role: FileRole::Report,
            path: PathBuf::from("run_py_out.txt"),
            source: io_err(),
        };
        assert!(err.report_lines().is_empty());
    }
}

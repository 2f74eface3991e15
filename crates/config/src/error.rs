//! Error types for configuration loading and validation

pub mod format;

use crate::loader::ConfigFormat;
use std::path::PathBuf;
use thiserror::Error;

pub use format::ErrorFormatter;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Everything that can go wrong between locating a config file and accepting its values
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config file at {path}")]
    NotFound { path: PathBuf },

    #[error("cannot tell the format of {path}; use one of .toml, .yml, .yaml, .json")]
    UnknownFormat { path: PathBuf },

    /// Syntax or type error, with an excerpt around the offending line
    #[error("invalid {format} config{location}: {message}\n{context}")]
    Parse {
        format: ConfigFormat,
        location: String,
        message: String,
        context: String,
    },

    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{value}' is not a valid {field}\n  Valid options: {options}\n  Hint: {hint}")]
    InvalidEnum {
        field: String,
        value: String,
        options: String,
        hint: String,
    },

    #[error("{field} must be greater than {min}, got {value}")]
    TooSmall {
        field: String,
        value: usize,
        min: usize,
    },

    #[error("environment variable {var}: {message}")]
    Env { var: String, message: String },

    #[error("{field}: {message}")]
    Invalid { field: String, message: String },
}

impl ConfigError {
    pub fn invalid_enum(
        field: impl Into<String>,
        value: impl Into<String>,
        options: &[&str],
    ) -> Self {
        let value = value.into();
        Self::InvalidEnum {
            field: field.into(),
            hint: Self::suggest_option(&value, options),
            options: options.join(", "),
            value,
        }
    }

    /// Build a [`ConfigError::Parse`], excerpting `content` around `line` when known.
    pub(crate) fn parse(
        format: ConfigFormat,
        message: impl Into<String>,
        content: &str,
        path: Option<&str>,
        line: Option<usize>,
        column: Option<usize>,
    ) -> Self {
        Self::Parse {
            format,
            location: path.map(|p| format!(" in {}", p)).unwrap_or_default(),
            message: message.into(),
            context: line
                .map(|line_num| excerpt(content, line_num, column))
                .unwrap_or_default(),
        }
    }

    fn suggest_option(input: &str, options: &[&str]) -> String {
        let input_lower = input.to_lowercase();
        let closest = options
            .iter()
            .min_by_key(|opt| Self::distance(&input_lower, &opt.to_lowercase()));

        match closest {
            Some(opt) if Self::distance(&input_lower, &opt.to_lowercase()) <= 3 => {
                format!("Did you mean '{}'?", opt)
            }
            _ => "Check the value in your config file or environment".to_string(),
        }
    }

    /// Levenshtein distance between two short option strings
    fn distance(a: &str, b: &str) -> usize {
        let b_chars: Vec<char> = b.chars().collect();
        let mut prev_row: Vec<usize> = (0..=b_chars.len()).collect();

        for (i, a_char) in a.chars().enumerate() {
            let mut curr_row = vec![i + 1];
            for (j, b_char) in b_chars.iter().enumerate() {
                let cost = usize::from(a_char != *b_char);
                let best = (curr_row[j] + 1)
                    .min(prev_row[j + 1] + 1)
                    .min(prev_row[j] + cost);
                curr_row.push(best);
            }
            prev_row = curr_row;
        }

        *prev_row.last().unwrap_or(&0)
    }
}

/// Render the lines around `line_num` (1-based), marking the offending one
fn excerpt(content: &str, line_num: usize, column: Option<usize>) -> String {
    let lines: Vec<&str> = content.lines().collect();
    if line_num == 0 || line_num > lines.len() {
        return String::new();
    }

    let start = line_num.saturating_sub(2);
    let end = (line_num + 1).min(lines.len());

    lines[start..end]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let num = start + i + 1;
            if num != line_num {
                return format!("  {:3} | {}", num, line);
            }
            let mut marked = format!("→ {:3} | {}", num, line);
            if let Some(col) = column.filter(|c| *c > 0) {
                marked.push_str(&format!("\n      {}^", " ".repeat(col - 1)));
            }
            marked
        })
        .collect::<Vec<_>>()
        .join("\n")
}

//! Path artifact loading.
//!
//! Lines look like `<k> <length> A|B|C`: two leading fields, then a
//! pipe-separated run of node names.

use crate::declarations::EndpointTally;
use pathmark_config::{PathsConfig, RecordOrder};
use pathmark_core::text::{bounded, lossy_lines};
use pathmark_core::{FileRole, Path, PathmarkError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path as FilePath;
use tracing::{debug, error, info, warn};

const TOKEN_SEPARATOR: char = '|';

/// A path line without two leading fields and a non-empty remainder
#[derive(Debug, PartialEq, Eq)]
pub struct MalformedLine;

/// Skip one whitespace-delimited field; the field must be followed by more text.
fn skip_field(text: &str) -> Option<&str> {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(end) if end > 0 => Some(&text[end..]),
        _ => None,
    }
}

/// Parse one path line.
///
/// `Ok(None)` means the remainder held only separators, which is skipped
/// rather than rejected.
pub fn parse_path_line(
    line: &str,
    config: &PathsConfig,
) -> std::result::Result<Option<Path>, MalformedLine> {
    let remainder = skip_field(line)
        .and_then(skip_field)
        .map(str::trim)
        .filter(|rest| !rest.is_empty())
        .ok_or(MalformedLine)?;

    let tokens = remainder
        .split(TOKEN_SEPARATOR)
        .filter(|token| !token.is_empty())
        .take(config.max_tokens)
        .map(|token| bounded(token, config.token_len));

    Ok(Path::new(tokens))
}

pub fn read_paths<R: BufRead>(
    reader: R,
    origin: &FilePath,
    config: &PathsConfig,
) -> Result<Vec<Path>> {
    let mut paths = Vec::new();

    for (index, line) in lossy_lines(reader).enumerate() {
        let line_num = index + 1;
        let line = line.map_err(|source| PathmarkError::Read {
            role: FileRole::Paths,
            path: origin.to_path_buf(),
            source,
        })?;

        if line.starts_with('#') {
            continue;
        }

        match parse_path_line(&line, config) {
            Ok(Some(path)) => paths.push(path),
            Ok(None) => debug!("line {}: no node names, skipped", line_num),
            Err(MalformedLine) => {
                error!("bad line {} in '{}': {}", line_num, origin.display(), line);
                return Err(PathmarkError::PathLine {
                    path: origin.to_path_buf(),
                    line: line_num,
                });
            }
        }
    }

    Ok(paths)
}

/// Load the detected paths written for this run.
///
/// When the file cannot be opened, the error records whether any declared
/// endpoint was found so the diagnostic can hint at "no paths".
pub fn load_paths(
    path: &FilePath,
    config: &PathsConfig,
    order: RecordOrder,
    tally: &EndpointTally,
) -> Result<Vec<Path>> {
    let file = File::open(path).map_err(|source| PathmarkError::PathsUnavailable {
        path: path.to_path_buf(),
        endpoints_found: tally.any_found(),
        source,
    })?;

    let mut paths = read_paths(BufReader::new(file), path, config)?;
    if order == RecordOrder::Reversed {
        paths.reverse();
    }

    if paths.is_empty() {
        warn!("'{}' holds no paths", path.display());
    }
    info!("loaded {} paths from '{}'", paths.len(), path.display());
    Ok(paths)
}

//! Source/target declarations.
//!
//! Each line names a node and its role. Names missing from the network are
//! reported and skipped; a line that is not exactly `name role` aborts the run.

use crate::report::Report;
use pathmark_core::text::lossy_lines;
use pathmark_core::{FileRole, PathmarkError, RecordStore, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

const SOURCE_PREFIX: &str = "source";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Source,
    Target,
}

impl Role {
    /// Anything starting with "source" is a source; every other token is a target.
    pub fn from_token(token: &str) -> Self {
        if token.starts_with(SOURCE_PREFIX) {
            Role::Source
        } else {
            Role::Target
        }
    }
}

/// Declared endpoints that were found in the network, plus the names that were not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointTally {
    pub sources: usize,
    pub targets: usize,
    pub missing: Vec<String>,
}

impl EndpointTally {
    pub fn any_found(&self) -> bool {
        self.sources + self.targets > 0
    }

    pub fn summary(&self) -> String {
        format!(
            "{} source {} and {} target {} were specified and found.",
            self.sources,
            noun(self.sources),
            self.targets,
            noun(self.targets)
        )
    }

    fn record(&mut self, role: Role) {
        match role {
            Role::Source => self.sources += 1,
            Role::Target => self.targets += 1,
        }
    }
}

fn noun(count: usize) -> &'static str {
    if count == 1 {
        "node"
    } else {
        "nodes"
    }
}

pub fn missing_line(name: &str) -> String {
    format!("Node {} was not found in the network.", name)
}

/// Check every declaration from `reader` against the store.
///
/// One line per missing node and the closing tally go to `report`.
pub fn check_declarations<R, P>(
    reader: R,
    origin: &Path,
    store: &RecordStore,
    report: &mut P,
) -> Result<EndpointTally>
where
    R: BufRead,
    P: Report,
{
    let mut tally = EndpointTally::default();

    for (index, line) in lossy_lines(reader).enumerate() {
        let line_num = index + 1;
        let line = line.map_err(|source| PathmarkError::Read {
            role: FileRole::Declarations,
            path: origin.to_path_buf(),
            source,
        })?;

        if line.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [name, role] = tokens.as_slice() else {
            return Err(PathmarkError::Declaration {
                path: origin.to_path_buf(),
                line: line_num,
                content: line.trim_end().to_string(),
            });
        };

        if store.node_by_name(name).is_none() {
            warn!("declared node '{}' is not in the network", name);
            report.line(&missing_line(name))?;
            tally.missing.push(name.to_string());
            continue;
        }

        let role = Role::from_token(role);
        debug!("line {}: {} is a {:?}", line_num, name, role);
        tally.record(role);
    }

    report.line(&tally.summary())?;
    Ok(tally)
}

/// Open the declaration file and check it.
pub fn load_declarations<P: Report>(
    path: &Path,
    store: &RecordStore,
    report: &mut P,
) -> Result<EndpointTally> {
    let file = File::open(path).map_err(|source| PathmarkError::Open {
        role: FileRole::Declarations,
        path: path.to_path_buf(),
        source,
    })?;

    let tally = check_declarations(BufReader::new(file), path, store, report)?;
    info!(
        "sources={} targets={} missing={}",
        tally.sources,
        tally.targets,
        tally.missing.len()
    );
    Ok(tally)
}

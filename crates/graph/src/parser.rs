//! Line-oriented reader for the cytoscape.js network description.
//!
//! The file is JSON, but only one attribute per line is ever expected, so each
//! line is read as `"key" : value[,]` and dispatched on its key. Anything that
//! is not a recognised key inside the `"nodes"` or `"edges"` section is ignored.

use pathmark_config::{NetworkConfig, RecordOrder};
use pathmark_core::text::{bounded, lossy_lines};
use pathmark_core::{Edge, FileRole, FormatIssue, Node, PathmarkError, RecordStore, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Nodes,
    Edges,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeField {
    SharedName,
    ExcludedFromPaths,
    Name,
    InPath,
    FoldChange,
    Suid,
    Layer,
    Prize,
    Selected,
    X,
    Y,
}

/// Key that opens a new node or edge record
const RECORD_KEY: &str = "id";

const NODE_FIELDS: &[(&str, NodeField)] = &[
    ("shared_name", NodeField::SharedName),
    ("isExcludedFromPaths", NodeField::ExcludedFromPaths),
    ("name", NodeField::Name),
    ("isInPath", NodeField::InPath),
    ("FoldChange", NodeField::FoldChange),
    ("SUID", NodeField::Suid),
    ("Layer", NodeField::Layer),
    ("Prize", NodeField::Prize),
    ("selected", NodeField::Selected),
    ("x", NodeField::X),
    ("y", NodeField::Y),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeField {
    Source,
    Target,
    SharedName,
    SharedInteraction,
    Name,
    Interaction,
    InPath,
    Suid,
    Time,
    Selected,
}

const EDGE_FIELDS: &[(&str, EdgeField)] = &[
    ("source", EdgeField::Source),
    ("target", EdgeField::Target),
    ("shared_name", EdgeField::SharedName),
    ("sh_interaction", EdgeField::SharedInteraction),
    ("name", EdgeField::Name),
    ("interaction", EdgeField::Interaction),
    ("isInPath", EdgeField::InPath),
    ("SUID", EdgeField::Suid),
    ("Time", EdgeField::Time),
    ("selected", EdgeField::Selected),
];

fn lookup<F: Copy>(table: &[(&str, F)], key: &str) -> Option<F> {
    table.iter().find(|(name, _)| *name == key).map(|(_, f)| *f)
}

/// A `"key" : value` line with the value's trailing comma removed.
#[derive(Debug, PartialEq, Eq)]
struct KeyedLine<'a> {
    key: &'a str,
    value: &'a str,
}

fn split_keyed(trimmed: &str) -> Option<KeyedLine<'_>> {
    let rest = trimmed.strip_prefix('"')?;
    let (key, after) = rest.split_once('"')?;
    let after = after.trim_start();
    let value = after.strip_prefix(':').unwrap_or(after).trim();
    let value = value.strip_suffix(',').unwrap_or(value).trim_end();
    Some(KeyedLine { key, value })
}

fn unquote(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}

fn text_value(value: &str, max_chars: usize) -> String {
    let raw = match value.strip_prefix('"') {
        Some(inner) => inner.split('"').next().unwrap_or_default(),
        None => value,
    };
    bounded(raw, max_chars)
}

fn int_value(key: &str, value: &str) -> std::result::Result<i64, FormatIssue> {
    unquote(value)
        .trim()
        .parse()
        .map_err(|_| FormatIssue::BadNumber {
            field: key.to_string(),
            value: value.to_string(),
        })
}

fn float_value(key: &str, value: &str) -> std::result::Result<f64, FormatIssue> {
    unquote(value)
        .trim()
        .parse()
        .map_err(|_| FormatIssue::BadNumber {
            field: key.to_string(),
            value: value.to_string(),
        })
}

fn bool_value(key: &str, value: &str) -> std::result::Result<bool, FormatIssue> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(FormatIssue::BadBool {
            field: key.to_string(),
            value: value.to_string(),
        }),
    }
}

struct NetworkParser<'a> {
    config: &'a NetworkConfig,
    section: Section,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl<'a> NetworkParser<'a> {
    fn new(config: &'a NetworkConfig) -> Self {
        Self {
            config,
            section: Section::None,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    fn line(&mut self, line: &str) -> std::result::Result<(), FormatIssue> {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(());
        }

        let Some(KeyedLine { key, value }) = split_keyed(trimmed) else {
            return Ok(());
        };

        match key {
            "nodes" => self.section = Section::Nodes,
            "edges" => self.section = Section::Edges,
            _ => match self.section {
                Section::None => {}
                Section::Nodes if key == RECORD_KEY => {
                    self.nodes.push(Node::new(int_value(key, value)?));
                }
                Section::Edges if key == RECORD_KEY => {
                    self.edges.push(Edge::new(int_value(key, value)?));
                }
                Section::Nodes => {
                    if let Some(field) = lookup(NODE_FIELDS, key) {
                        self.node_field(field, key, value)?;
                    }
                }
                Section::Edges => {
                    if let Some(field) = lookup(EDGE_FIELDS, key) {
                        self.edge_field(field, key, value)?;
                    }
                }
            },
        }

        Ok(())
    }

    fn node_field(
        &mut self,
        field: NodeField,
        key: &str,
        value: &str,
    ) -> std::result::Result<(), FormatIssue> {
        let max = self.config.node_label_len;
        let node = self
            .nodes
            .last_mut()
            .ok_or_else(|| FormatIssue::FieldBeforeRecord {
                section: "node",
                field: key.to_string(),
            })?;

        match field {
            NodeField::SharedName => node.shared_name = text_value(value, max),
            NodeField::ExcludedFromPaths => node.excluded_from_paths = bool_value(key, value)?,
            NodeField::Name => node.name = text_value(value, max),
            NodeField::InPath => node.in_path = bool_value(key, value)?,
            NodeField::FoldChange => node.fold_change = float_value(key, value)?,
            NodeField::Suid => node.suid = int_value(key, value)?,
            NodeField::Layer => node.layer = text_value(value, max),
            NodeField::Prize => node.prize = int_value(key, value)?,
            NodeField::Selected => node.selected = bool_value(key, value)?,
            NodeField::X => node.position.x = float_value(key, value)?,
            NodeField::Y => node.position.y = float_value(key, value)?,
        }

        Ok(())
    }

    fn edge_field(
        &mut self,
        field: EdgeField,
        key: &str,
        value: &str,
    ) -> std::result::Result<(), FormatIssue> {
        let max = self.config.edge_label_len;
        let edge = self
            .edges
            .last_mut()
            .ok_or_else(|| FormatIssue::FieldBeforeRecord {
                section: "edge",
                field: key.to_string(),
            })?;

        match field {
            EdgeField::Source => edge.source = int_value(key, value)?,
            EdgeField::Target => edge.target = int_value(key, value)?,
            EdgeField::SharedName => edge.shared_name = text_value(value, max),
            EdgeField::SharedInteraction => edge.shared_interaction = text_value(value, max),
            EdgeField::Name => edge.name = text_value(value, max),
            EdgeField::Interaction => edge.interaction = text_value(value, max),
            EdgeField::InPath => edge.in_path = bool_value(key, value)?,
            EdgeField::Suid => edge.suid = int_value(key, value)?,
            EdgeField::Time => edge.time = text_value(value, max),
            EdgeField::Selected => edge.selected = bool_value(key, value)?,
        }

        Ok(())
    }

    fn finish(mut self) -> RecordStore {
        let distinct: HashSet<_> = self.nodes.iter().map(|n| n.id).collect();
        if distinct.len() != self.nodes.len() {
            warn!(
                "network has {} node records but only {} distinct ids",
                self.nodes.len(),
                distinct.len()
            );
        }

        if self.config.order == RecordOrder::Reversed {
            self.nodes.reverse();
            self.edges.reverse();
        }

        RecordStore::new(self.nodes, self.edges)
    }
}

/// Read a network description into a [`RecordStore`].
///
/// Fails on the first malformed attribute; nothing is returned in that case.
/// Bytes that are not UTF-8 are replaced rather than rejected. `origin` only
/// names the source in errors.
pub fn parse_network<R: BufRead>(
    reader: R,
    origin: &Path,
    config: &NetworkConfig,
) -> Result<RecordStore> {
    let mut parser = NetworkParser::new(config);

    for (idx, line) in lossy_lines(reader).enumerate() {
        let line_num = idx + 1;
        let line = line.map_err(|source| PathmarkError::Read {
            role: FileRole::Network,
            path: origin.to_path_buf(),
            source,
        })?;

        parser.line(&line).map_err(|issue| {
            debug!("rejected network line {}: '{}'", line_num, line);
            PathmarkError::NetworkFormat {
                line: line_num,
                issue,
            }
        })?;
    }

    Ok(parser.finish())
}

/// Open and parse the network description at `path`.
pub fn load_network(path: &Path, config: &NetworkConfig) -> Result<RecordStore> {
    let file = File::open(path).map_err(|source| PathmarkError::Open {
        role: FileRole::Network,
        path: path.to_path_buf(),
        source,
    })?;

    let store = parse_network(BufReader::new(file), path, config)?;
    info!(
        "loaded '{}'; num_nodes={} num_edges={}",
        path.display(),
        store.nodes().len(),
        store.edges().len()
    );
    Ok(store)
}

//! Network description parsing settings

use serde::{Deserialize, Serialize};

/// Order in which loaded records and paths are kept
///
/// Lookups resolve to the first match in this order, so it also decides
/// which record wins when names or edge endpoints are duplicated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordOrder {
    /// Order of appearance in the input files
    #[default]
    File,
    /// Last-parsed first, as the legacy post-processor produced
    Reversed,
}

impl RecordOrder {
    pub const OPTIONS: &'static [&'static str] = &["file", "reversed"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "file" => Some(RecordOrder::File),
            "reversed" | "legacy" => Some(RecordOrder::Reversed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecordOrder::File => "file",
            RecordOrder::Reversed => "reversed",
        }
    }
}

/// Limits applied while reading the network description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Maximum characters kept for node text fields
    #[serde(default = "default_node_label_len")]
    pub node_label_len: usize,

    /// Maximum characters kept for edge text fields
    #[serde(default = "default_edge_label_len")]
    pub edge_label_len: usize,

    /// Record and path ordering
    #[serde(default)]
    pub order: RecordOrder,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            node_label_len: default_node_label_len(),
            edge_label_len: default_edge_label_len(),
            order: RecordOrder::default(),
        }
    }
}

impl crate::validation::Validate for NetworkConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::validation::validate_positive;

        validate_positive("network.node_label_len", self.node_label_len, 0)?;
        validate_positive("network.edge_label_len", self.edge_label_len, 0)?;

        Ok(())
    }
}

fn default_node_label_len() -> usize {
    15
}

fn default_edge_label_len() -> usize {
    47
}

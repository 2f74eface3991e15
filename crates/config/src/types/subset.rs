//! Preamble written at the top of the reduced network description
//!
//! The input header is never parsed; these values regenerate it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsetConfig {
    #[serde(default = "default_format_version")]
    pub format_version: String,

    #[serde(default = "default_generated_by")]
    pub generated_by: String,

    #[serde(default = "default_target_version")]
    pub target_cytoscapejs_version: String,

    /// Network `shared_name` and `name`
    #[serde(default = "default_network_name")]
    pub network_name: String,

    #[serde(default = "default_network_suid")]
    pub network_suid: i64,
}

impl Default for SubsetConfig {
    fn default() -> Self {
        Self {
            format_version: default_format_version(),
            generated_by: default_generated_by(),
            target_cytoscapejs_version: default_target_version(),
            network_name: default_network_name(),
            network_suid: default_network_suid(),
        }
    }
}

impl crate::validation::Validate for SubsetConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::validation::validate_non_empty;

        validate_non_empty("subset.format_version", &self.format_version)?;
        validate_non_empty("subset.network_name", &self.network_name)?;

        Ok(())
    }
}

fn default_format_version() -> String {
    "1.0".to_string()
}

fn default_generated_by() -> String {
    "cytoscape-3.7.2".to_string()
}

fn default_target_version() -> String {
    "~2.1".to_string()
}

fn default_network_name() -> String {
    "my_time1_all_edge.txt".to_string()
}

fn default_network_suid() -> i64 {
    81000
}

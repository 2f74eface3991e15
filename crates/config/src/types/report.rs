//! Path report layout

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Width of the name and category columns
    #[serde(default = "default_column_width")]
    pub column_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            column_width: default_column_width(),
        }
    }
}

impl crate::validation::Validate for ReportConfig {
    fn validate(&self) -> crate::error::Result<()> {
        crate::validation::validate_positive("report.column_width", self.column_width, 0)
    }
}

fn default_column_width() -> usize {
    15
}

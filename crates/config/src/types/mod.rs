//! Configuration type definitions
//!
//! Each type is self-contained with validation and defaults matching the
//! file conventions of the path-analysis toolchain.

pub mod files;
pub mod network;
pub mod paths;
pub mod report;
pub mod subset;

pub use files::FilesConfig;
pub use network::{NetworkConfig, RecordOrder};
pub use paths::PathsConfig;
pub use report::ReportConfig;
pub use subset::SubsetConfig;

use serde::{Deserialize, Serialize};

/// Main configuration struct aggregating all settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Fixed input/output file names
    #[serde(default)]
    pub files: FilesConfig,

    /// Network description parsing
    #[serde(default)]
    pub network: NetworkConfig,

    /// Path artifact parsing
    #[serde(default)]
    pub paths: PathsConfig,

    /// Path report layout
    #[serde(default)]
    pub report: ReportConfig,

    /// Reduced network preamble
    #[serde(default)]
    pub subset: SubsetConfig,
}

impl crate::validation::Validate for Config {
    fn validate(&self) -> crate::error::Result<()> {
        self.files.validate()?;
        self.network.validate()?;
        self.paths.validate()?;
        self.report.validate()?;
        self.subset.validate()?;

        Ok(())
    }
}

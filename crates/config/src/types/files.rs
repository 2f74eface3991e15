//! Input and output file naming

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Placeholder substituted with the path-limit token in `paths_template`
pub const LIMIT_PLACEHOLDER: &str = "{k}";

/// File names used by a run, relative to the working directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilesConfig {
    /// Two-column source/target declaration file
    #[serde(default = "default_declarations")]
    pub declarations: PathBuf,

    /// Append-only text report shared by diagnostics and the path report
    #[serde(default = "default_report")]
    pub report: PathBuf,

    /// Reduced network description, overwritten each run
    #[serde(default = "default_subset")]
    pub subset: PathBuf,

    /// Path artifact name; `{k}` is replaced with the path-limit token
    #[serde(default = "default_paths_template")]
    pub paths_template: String,
}

impl FilesConfig {
    /// Path artifact file name for the given path-limit token
    pub fn paths_file(&self, limit: &str) -> PathBuf {
        PathBuf::from(self.paths_template.replace(LIMIT_PLACEHOLDER, limit))
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            declarations: default_declarations(),
            report: default_report(),
            subset: default_subset(),
            paths_template: default_paths_template(),
        }
    }
}

impl crate::validation::Validate for FilesConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::validation::validate_non_empty;

        validate_non_empty("files.declarations", &self.declarations.to_string_lossy())?;
        validate_non_empty("files.report", &self.report.to_string_lossy())?;
        validate_non_empty("files.subset", &self.subset.to_string_lossy())?;
        validate_non_empty("files.paths_template", &self.paths_template)?;

        Ok(())
    }
}

fn default_declarations() -> PathBuf {
    PathBuf::from("in.txt")
}

fn default_report() -> PathBuf {
    PathBuf::from("run_py_out.txt")
}

fn default_subset() -> PathBuf {
    PathBuf::from("run_py_out.cyjs")
}

fn default_paths_template() -> String {
    LIMIT_PLACEHOLDER.to_string()
}

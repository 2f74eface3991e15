//! JSON config files

use crate::{error::ConfigError, loader::ConfigFormat, Config, Result};

pub fn parse(content: &str) -> Result<Config> {
    parse_with_path(content, None)
}

/// `path` only labels error messages
pub fn parse_with_path(content: &str, path: Option<&str>) -> Result<Config> {
    serde_json::from_str(content).map_err(|err| {
        ConfigError::parse(
            ConfigFormat::Json,
            err.to_string(),
            content,
            path,
            Some(err.line()),
            Some(err.column()),
        )
    })
}

//! TOML config files

use crate::{error::ConfigError, loader::ConfigFormat, Config, Result};

pub fn parse(content: &str) -> Result<Config> {
    parse_with_path(content, None)
}

/// `path` only labels error messages
pub fn parse_with_path(content: &str, path: Option<&str>) -> Result<Config> {
    ::toml::from_str(content).map_err(|err: ::toml::de::Error| {
        // toml reports byte spans; the excerpt wants a line number
        let line = err
            .span()
            .map(|span| content[..span.start].matches('\n').count() + 1);
        ConfigError::parse(ConfigFormat::Toml, err.message(), content, path, line, None)
    })
}

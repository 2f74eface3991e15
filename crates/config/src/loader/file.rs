//! Reading a single config file

use crate::{error::ConfigError, loader::ConfigFormat, Config, Result, Validate};
use serde_json::Value;
use std::fs;
use std::path::Path;

fn read(path: &Path) -> Result<(ConfigFormat, String)> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnknownFormat {
        path: path.to_path_buf(),
    })?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((format, content))
}

/// Read, parse and validate one config file; the format follows the extension.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let (format, content) = read(path)?;

    let config = format.parse(&content, path.to_str())?;
    config.validate()?;
    Ok(config)
}

/// The keys one config file sets, for layering.
///
/// The file is type-checked as a whole first so syntax and type errors carry
/// an excerpt; range checks wait until every layer is merged.
pub fn load_layer<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let (format, content) = read(path)?;

    format.parse(&content, path.to_str())?;
    format.parse_layer(&content, path.to_str())
}

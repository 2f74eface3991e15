//! Locating, reading and layering config sources

pub mod env;
pub mod file;
pub mod formats;
pub mod merge;

use crate::{error::ConfigError, Config, Result, Validate};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};

/// Config file syntax, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yml" | "yaml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn parse(self, content: &str, path: Option<&str>) -> Result<Config> {
        match self {
            Self::Yaml => formats::yaml::parse_with_path(content, path),
            Self::Toml => formats::toml::parse_with_path(content, path),
            Self::Json => formats::json::parse_with_path(content, path),
        }
    }

    /// The keys `content` actually sets, untyped. Call after [`ConfigFormat::parse`]
    /// has accepted the same content.
    pub fn parse_layer(self, content: &str, path: Option<&str>) -> Result<Value> {
        let layer = match self {
            Self::Yaml => serde_yaml::from_str::<Value>(content).map_err(|err| err.to_string()),
            Self::Toml => ::toml::from_str::<Value>(content).map_err(|err| err.to_string()),
            Self::Json => serde_json::from_str::<Value>(content).map_err(|err| err.to_string()),
        };
        layer.map_err(|message| ConfigError::parse(self, message, content, path, None, None))
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
            Self::Json => "JSON",
        })
    }
}

/// One layer of a run's configuration
#[derive(Debug, Clone)]
pub enum ConfigSource {
    File(PathBuf),
    /// `PATHMARK_<SECTION>_<FIELD>` variables
    Environment,
    Explicit(Config),
}

impl ConfigSource {
    /// The keys this layer sets; `None` when it contributes nothing.
    ///
    /// An explicit [`Config`] is complete, so it sets every key.
    fn overlay(self) -> Result<Option<Value>> {
        match self {
            ConfigSource::File(path) => file::load_layer(&path).map(Some),
            ConfigSource::Environment => env::from_env(),
            ConfigSource::Explicit(config) => merge::to_layer(&config).map(Some),
        }
    }
}

/// Stacks config layers over the defaults; a later layer wins for every key
/// it sets.
///
/// ```no_run
/// use pathmark_config::loader::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .with_file(".pathmark.toml")
///     .with_env()
///     .build()?;
/// # Ok::<(), pathmark_config::error::ConfigError>(())
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    layers: Vec<ConfigSource>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn layer(mut self, source: ConfigSource) -> Self {
        self.layers.push(source);
        self
    }

    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.layer(ConfigSource::File(path.as_ref().to_path_buf()))
    }

    pub fn with_env(self) -> Self {
        self.layer(ConfigSource::Environment)
    }

    pub fn with_config(self, config: Config) -> Self {
        self.layer(ConfigSource::Explicit(config))
    }

    /// Merge every layer in order, then validate the result once.
    pub fn build(self) -> Result<Config> {
        let mut merged = merge::to_layer(&Config::default())?;
        for source in self.layers {
            if let Some(overlay) = source.overlay()? {
                merge::merge_value(&mut merged, overlay);
            }
        }

        let config = merge::resolve(merged)?;
        config.validate()?;
        Ok(config)
    }
}

/// File names searched by [`Config::load`], in order
pub const DEFAULT_PATHS: &[&str] = &[
    ".pathmark.toml",
    ".pathmark.yml",
    ".pathmark.yaml",
    ".pathmark.json",
];

impl Config {
    /// Load configuration from default locations
    ///
    /// Uses the first of [`DEFAULT_PATHS`] that exists in the working
    /// directory, falling back to defaults, then applies environment
    /// variable overlays.
    pub fn load() -> Result<Self> {
        Self::load_from_dir(Path::new("."))
    }

    /// Same as [`Config::load`] but searching `dir` instead of the working directory
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let mut builder = ConfigBuilder::new();

        if let Some(path) = DEFAULT_PATHS
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
        {
            builder = builder.with_file(path);
        }

        builder.with_env().build()
    }

    /// `path` replaces the default search; environment overlays still apply.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        ConfigBuilder::new().with_file(path).with_env().build()
    }
}

//! Run configuration for pathmark
//!
//! This crate provides a validated configuration system with support for:
//! - Multiple formats (YAML, TOML, JSON)
//! - Config validation with helpful error messages
//! - Config merging (file + environment)
//! - Type-safe configuration structs
//!
//! # Example
//!
//! ```no_run
//! use pathmark_config::Config;
//!
//! // Load from default location (.pathmark.{toml,yml,yaml,json})
//! let config = Config::load()?;
//!
//! // Or load from specific file
//! let config = Config::from_file("path/to/config.toml")?;
//!
//! let report = &config.files.report;
//! let label_len = config.network.node_label_len;
//! # Ok::<(), pathmark_config::ConfigError>(())
//! ```

pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

// Re-export main types for convenience
pub use error::{ConfigError, ErrorFormatter, Result};
pub use loader::ConfigBuilder;
pub use types::*;

/// Trait for config validation
pub use validation::Validate;

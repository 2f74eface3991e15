//! Range and presence checks run after every config layer is merged

use crate::error::{ConfigError, Result};

/// Checks that serde cannot express, such as non-zero lengths.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// `value` must be strictly greater than `min`
pub fn validate_positive(field: impl Into<String>, value: usize, min: usize) -> Result<()> {
    if value <= min {
        return Err(ConfigError::TooSmall {
            field: field.into(),
            value,
            min,
        });
    }
    Ok(())
}

/// File names and templates must contain something besides whitespace
pub fn validate_non_empty(field: impl Into<String>, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid {
            field: field.into(),
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}

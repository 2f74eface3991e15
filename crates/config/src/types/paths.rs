//! Path artifact parsing settings

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Maximum characters kept for a node-name token
    #[serde(default = "default_token_len")]
    pub token_len: usize,

    /// Maximum tokens read from one path line; the rest are ignored
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            token_len: default_token_len(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl crate::validation::Validate for PathsConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::validation::validate_positive;

        validate_positive("paths.token_len", self.token_len, 0)?;
        validate_positive("paths.max_tokens", self.max_tokens, 0)?;

        Ok(())
    }
}

fn default_token_len() -> usize {
    15
}

fn default_max_tokens() -> usize {
    100
}

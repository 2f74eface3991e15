//! YAML config files

use crate::{error::ConfigError, loader::ConfigFormat, Config, Result};

pub fn parse(content: &str) -> Result<Config> {
    parse_with_path(content, None)
}

/// `path` only labels error messages
pub fn parse_with_path(content: &str, path: Option<&str>) -> Result<Config> {
    serde_yaml::from_str(content).map_err(|err| {
        let line = err.location().map(|loc| loc.line());
        ConfigError::parse(ConfigFormat::Yaml, err.to_string(), content, path, line, None)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordOrder;

    #[test]
    fn test_parse_minimal_yaml() {
        let yaml = r#"
network:
  order: reversed
  edge_label_len: 32
"#;
        let config = parse(yaml).unwrap();
        assert_eq!(config.network.order, RecordOrder::Reversed);
        assert_eq!(config.network.edge_label_len, 32);
        assert_eq!(config.network.node_label_len, 15);
    }

    #[test]
    fn test_parse_empty_yaml() {
        let config = parse("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_invalid_order_fails() {
        let yaml = r#"
network:
  order: sideways
"#;
        assert!(parse(yaml).is_err());
    }
}

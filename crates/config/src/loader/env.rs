//! Environment variable configuration overlay
//!
//! Supports environment variables in the format:
//! `PATHMARK_<section>_<field>=value`
//!
//! Examples:
//! - `PATHMARK_FILES_REPORT=report.txt`
//! - `PATHMARK_NETWORK_ORDER=reversed`
//! - `PATHMARK_PATHS_MAX_TOKENS=50`

use crate::{error::ConfigError, RecordOrder, Result};
use serde_json::{Map, Value};
use std::env;

const PREFIX: &str = "PATHMARK_";

/// Overlay built from the process environment
pub fn from_env() -> Result<Option<Value>> {
    from_vars(env::vars())
}

/// Build an overlay from `(key, value)` pairs; keys without the prefix are ignored
///
/// The overlay holds only the settings the variables name.
pub fn from_vars<I>(vars: I) -> Result<Option<Value>>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut sections: Map<String, Value> = Map::new();

    for (key, raw) in vars.into_iter().filter(|(k, _)| k.starts_with(PREFIX)) {
        let (section, field) = split_key(&key)?;
        let value = field_value(&section, &field, raw.as_str())?;

        if let Value::Object(fields) = sections
            .entry(section)
            .or_insert_with(|| Value::Object(Map::new()))
        {
            fields.insert(field, value);
        }
    }

    Ok((!sections.is_empty()).then_some(Value::Object(sections)))
}

fn split_key(key: &str) -> Result<(String, String)> {
    let stripped = key.strip_prefix(PREFIX).unwrap_or(key);
    match stripped.split_once('_') {
        Some((section, field)) => Ok((section.to_lowercase(), field.to_lowercase())),
        None => Err(ConfigError::Env {
            var: key.to_string(),
            message: "Expected format: PATHMARK_<section>_<field>".to_string(),
        }),
    }
}

fn var_name(section: &str, field: &str) -> String {
    format!("{}{}_{}", PREFIX, section.to_uppercase(), field.to_uppercase())
}

fn parse_number<T: std::str::FromStr + Into<Value>>(
    section: &str,
    field: &str,
    raw: &str,
) -> Result<Value> {
    raw.parse::<T>()
        .map(Into::into)
        .map_err(|_| ConfigError::Env {
            var: var_name(section, field),
            message: format!("Invalid integer: {}", raw),
        })
}

/// Typed value for one setting; unknown sections and fields are errors.
fn field_value(section: &str, field: &str, raw: &str) -> Result<Value> {
    match (section, field) {
        ("files", "declarations" | "report" | "subset" | "paths_template")
        | (
            "subset",
            "format_version" | "generated_by" | "target_cytoscapejs_version" | "network_name",
        ) => Ok(Value::from(raw)),
        ("network", "node_label_len" | "edge_label_len")
        | ("paths", "token_len" | "max_tokens")
        | ("report", "column_width") => parse_number::<usize>(section, field, raw),
        ("subset", "network_suid") => parse_number::<i64>(section, field, raw),
        ("network", "order") => RecordOrder::from_name(raw)
            .map(|order| Value::from(order.as_str()))
            .ok_or_else(|| ConfigError::invalid_enum("network.order", raw, RecordOrder::OPTIONS)),
        ("files" | "network" | "paths" | "report" | "subset", _) => Err(ConfigError::Env {
            var: var_name(section, field),
            message: format!("Unknown field: {}", field),
        }),
        _ => Err(ConfigError::Env {
            var: var_name(section, field),
            message: format!("Unknown section: {}", section),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::merge;
    use crate::Config;
    use serde_json::json;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_no_prefixed_vars() {
        let overlay = from_vars(vars(&[("HOME", "/root"), ("PATH", "/bin")])).unwrap();
        assert!(overlay.is_none());
    }

    #[test]
    fn test_multi_word_fields() {
        let overlay = from_vars(vars(&[
            ("PATHMARK_PATHS_MAX_TOKENS", "12"),
            ("PATHMARK_FILES_PATHS_TEMPLATE", "out_{k}.txt"),
            ("PATHMARK_NETWORK_ORDER", "Legacy"),
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(
            overlay,
            json!({
                "paths": {"max_tokens": 12},
                "files": {"paths_template": "out_{k}.txt"},
                "network": {"order": "reversed"}
            })
        );
    }

    #[test]
    fn test_env_resets_file_value_to_default() {
        let mut value = merge::to_layer(&Config::default()).unwrap();
        merge::merge_value(&mut value, json!({"network": {"order": "reversed"}}));

        let overlay = from_vars(vars(&[("PATHMARK_NETWORK_ORDER", "file")]))
            .unwrap()
            .unwrap();
        merge::merge_value(&mut value, overlay);

        let config = merge::resolve(value).unwrap();
        assert_eq!(config.network.order, RecordOrder::File);
    }

    #[test]
    fn test_bad_integer() {
        let err = from_vars(vars(&[("PATHMARK_REPORT_COLUMN_WIDTH", "wide")])).unwrap_err();
        assert!(matches!(err, ConfigError::Env { .. }));
    }

    #[test]
    fn test_unknown_section() {
        assert!(from_vars(vars(&[("PATHMARK_SEARCH_MODE", "x")])).is_err());
    }

    #[test]
    fn test_unknown_field() {
        assert!(from_vars(vars(&[("PATHMARK_REPORT_WIDTH", "3")])).is_err());
    }
}

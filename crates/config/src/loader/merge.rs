//! Layer merging
//!
//! Each layer is a value tree holding only the keys that layer sets, so a
//! later layer can set any value, including one equal to the built-in default.

use crate::{error::ConfigError, Config, Result};
use serde_json::Value;

/// Every key of `config`, as a layer.
pub fn to_layer(config: &Config) -> Result<Value> {
    serde_json::to_value(config).map_err(|err| ConfigError::Invalid {
        field: "config".to_string(),
        message: err.to_string(),
    })
}

/// Copy every key set in `overlay` into `base`; tables merge key by key.
///
/// `null` never overrides: no setting accepts it.
pub fn merge_value(base: &mut Value, overlay: Value) {
    match overlay {
        Value::Null => {}
        Value::Object(entries) => match base {
            Value::Object(base_entries) => {
                for (key, value) in entries {
                    merge_value(base_entries.entry(key).or_insert(Value::Null), value);
                }
            }
            _ => *base = Value::Object(entries),
        },
        other => *base = other,
    }
}

/// Turn the merged tree back into a typed [`Config`].
pub fn resolve(merged: Value) -> Result<Config> {
    serde_json::from_value(merged).map_err(|err| ConfigError::Invalid {
        field: "config".to_string(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordOrder;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn merged(layers: Vec<Value>) -> Config {
        let mut value = to_layer(&Config::default()).unwrap();
        for layer in layers {
            merge_value(&mut value, layer);
        }
        resolve(value).unwrap()
    }

    #[test]
    fn test_overlay_sets_only_its_keys() {
        let config = merged(vec![
            json!({"paths": {"max_tokens": 10}, "report": {"column_width": 20}}),
            json!({"paths": {"max_tokens": 30}}),
        ]);
        assert_eq!(config.paths.max_tokens, 30);
        assert_eq!(config.paths.token_len, 15);
        assert_eq!(config.report.column_width, 20);
    }

    #[test]
    fn test_later_layer_restores_default() {
        let config = merged(vec![
            json!({"network": {"order": "reversed"}, "report": {"column_width": 20}}),
            json!({"network": {"order": "file"}, "report": {"column_width": 15}}),
        ]);
        assert_eq!(config.network.order, RecordOrder::File);
        assert_eq!(config.report.column_width, 15);
    }

    #[test]
    fn test_null_is_ignored() {
        let config = merged(vec![
            json!({"network": {"order": "reversed"}}),
            Value::Null,
            json!({"network": null}),
        ]);
        assert_eq!(config.network.order, RecordOrder::Reversed);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let mut value = to_layer(&Config::default()).unwrap();
        merge_value(&mut value, json!({"report": {"column_width": "wide"}}));
        assert!(matches!(resolve(value), Err(ConfigError::Invalid { .. })));
    }
}

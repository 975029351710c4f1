use super::{OutputFormat, TypenamePolicy};
use crate::error::{Error, ErrorType, Result};
use serde::Deserialize;

/// The options a host passes to [`plugin`](super::plugin).
///
/// Deserializes from the host's camelCase configuration, e.g.
/// `{ "output": "object", "typenamePolicy": "all" }`. Missing options fall back to their defaults
/// and unknown keys are ignored.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginConfig {
    pub output: OutputFormat,
    pub typename_policy: TypenamePolicy,
}

impl PluginConfig {
    /// Reads a configuration from a JSON value, where `null` stands for the default configuration.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        if value.is_null() {
            return Ok(PluginConfig::default());
        }
        let input = value.to_string();
        serde_json::from_value(value).map_err(|err| {
            Error::new_with_context(err.to_string(), input, Some(ErrorType::Config))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults() {
        let config = PluginConfig::default();
        assert_eq!(config.output, OutputFormat::JsonLines);
        assert_eq!(config.typename_policy, TypenamePolicy::ExceptRoot);
        assert_eq!(PluginConfig::from_json(json!(null)).unwrap(), config);
        assert_eq!(PluginConfig::from_json(json!({})).unwrap(), config);
    }

    #[test]
    fn reads_camel_case_options() {
        let config = PluginConfig::from_json(json!({
            "output": "object",
            "typenamePolicy": "all",
            "addTypenameToRoot": true,
        }))
        .unwrap();
        assert_eq!(
            config,
            PluginConfig {
                output: OutputFormat::Object,
                typename_policy: TypenamePolicy::All,
            }
        );
    }

    #[test]
    fn rejects_unknown_values() {
        let err = PluginConfig::from_json(json!({ "output": "yaml" })).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Config);
        assert!(err.message().contains("unknown variant `yaml`"));
        assert!(err.print(true).ends_with(r#"{"output":"yaml"}"#));

        let err = PluginConfig::from_json(json!("object")).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Config);
    }
}

//! Settings resolution for the Thread Name Prefix plugin.
//!
//! The host hands the plugin its raw JSON config object. Everything under the
//! plugin's namespace key is validated against an enumerated schema and
//! resolved once, at load time, into a typed [`PrefixSettings`] record.
//! Setting-level problems are warnings, never errors: an unrecognized key or
//! a bad value keeps the default and processing continues.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::warn;

use crate::{domain::GuildId, errors::Error, Result};

/// Plugin namespace key inside the host's config object.
pub const NAMESPACE: &str = "tnp";

/// Recognized setting names under the namespace.
pub const RECOGNIZED_SETTINGS: &[&str] = &["prefix", "scheduledClosePrefix"];

const TRUTHY_VALUES: &[&str] = &["on", "1", "true"];
const FALSY_VALUES: &[&str] = &["off", "0", "false", "null"];

/// A single resolved setting override.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingValue {
    Text(String),
    Toggle(bool),
}

/// Typed settings record, resolved once at plugin initialization and
/// immutable thereafter. Unset or invalid values resolve to `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefixSettings {
    /// Prefix applied to newly created thread channels.
    pub prefix: Option<String>,
    /// Prefix swapped in while a thread's scheduled closure is pending.
    pub scheduled_close_prefix: Option<String>,
}

impl PrefixSettings {
    /// One-time engage check: the plugin is active iff a non-empty creation
    /// prefix is configured. Checked at startup, never re-checked per event.
    pub fn is_engaged(&self) -> bool {
        self.prefix.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// Resolve the plugin's settings from the host's raw config object.
///
/// An absent namespace yields the all-default record. Never fails.
pub fn resolve_settings(raw_config: &Value) -> PrefixSettings {
    let overrides = resolve_overrides(raw_config);

    let text = |name: &str| match overrides.get(name) {
        Some(SettingValue::Text(s)) => Some(s.clone()),
        _ => None,
    };

    PrefixSettings {
        prefix: text("prefix"),
        scheduled_close_prefix: text("scheduledClosePrefix"),
    }
}

/// Validate each namespace entry against the schema.
///
/// Settings whose name contains `enabled` (case-insensitive) are coerced
/// through [`parse_custom_boolean`]; everything else must be a JSON string.
fn resolve_overrides(raw_config: &Value) -> BTreeMap<&'static str, SettingValue> {
    let mut resolved = BTreeMap::new();

    let Some(entries) = raw_config.get(NAMESPACE).and_then(Value::as_object) else {
        return resolved;
    };

    for (name, value) in entries {
        let Some(key) = RECOGNIZED_SETTINGS.iter().find(|&&k| k == name.as_str()) else {
            warn!("setting {name} is not a valid setting");
            continue;
        };

        if name.to_lowercase().contains("enabled") {
            match parse_custom_boolean(value) {
                Some(flag) => {
                    resolved.insert(*key, SettingValue::Toggle(flag));
                }
                None => warn!("value {value} is not a valid truthy or falsy value"),
            }
            continue;
        }

        match value {
            Value::String(s) => {
                resolved.insert(*key, SettingValue::Text(s.clone()));
            }
            Value::Null => {}
            other => warn!("value {other} for setting {name} is not a string"),
        }
    }

    resolved
}

/// Parse the plugin's boolean spelling vocabulary.
///
/// Native booleans pass through unchanged. Otherwise the value's string form
/// must match one of the truthy or falsy spellings exactly (case-sensitive);
/// anything else yields `None`.
pub fn parse_custom_boolean(value: &Value) -> Option<bool> {
    let form = match value {
        Value::Bool(flag) => return Some(*flag),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        _ => return None,
    };

    if TRUTHY_VALUES.contains(&form.as_str()) {
        return Some(true);
    }
    if FALSY_VALUES.contains(&form.as_str()) {
        return Some(false);
    }

    None
}

/// The inbox guild id from the host's root config.
///
/// Accepts both string and numeric spellings of the snowflake. Missing or
/// malformed ids are a config error: an engaged plugin cannot do anything
/// useful without its inbox guild.
pub fn inbox_server_id(raw_config: &Value) -> Result<GuildId> {
    let value = raw_config
        .get("inboxServerId")
        .ok_or_else(|| Error::Config("inboxServerId is not set".to_string()))?;

    let id = match value {
        Value::String(s) => s.trim().parse::<u64>().ok(),
        Value::Number(n) => n.as_u64(),
        _ => None,
    };

    id.map(GuildId)
        .ok_or_else(|| Error::Config(format!("inboxServerId is not a valid guild id: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn boolean_vocabulary_is_exact() {
        for spelling in ["on", "1", "true"] {
            assert_eq!(parse_custom_boolean(&json!(spelling)), Some(true));
        }
        for spelling in ["off", "0", "false", "null"] {
            assert_eq!(parse_custom_boolean(&json!(spelling)), Some(false));
        }

        // Case-sensitive, no trimming, no extra spellings.
        for spelling in ["On", "TRUE", "yes", "no", "", " on", "2"] {
            assert_eq!(parse_custom_boolean(&json!(spelling)), None);
        }
    }

    #[test]
    fn boolean_passthrough_and_string_forms() {
        assert_eq!(parse_custom_boolean(&json!(true)), Some(true));
        assert_eq!(parse_custom_boolean(&json!(false)), Some(false));
        assert_eq!(parse_custom_boolean(&json!(1)), Some(true));
        assert_eq!(parse_custom_boolean(&json!(0)), Some(false));
        assert_eq!(parse_custom_boolean(&Value::Null), Some(false));
        assert_eq!(parse_custom_boolean(&json!([])), None);
        assert_eq!(parse_custom_boolean(&json!(1.5)), None);
    }

    #[test]
    fn resolves_recognized_settings() {
        let settings = resolve_settings(&json!({ "tnp": { "prefix": "X" } }));
        assert_eq!(settings.prefix.as_deref(), Some("X"));
        assert_eq!(settings.scheduled_close_prefix, None);
    }

    #[test]
    fn unknown_setting_is_skipped() {
        let settings = resolve_settings(&json!({ "tnp": { "bogus": "X" } }));
        assert_eq!(settings, PrefixSettings::default());
    }

    #[test]
    fn invalid_value_kind_keeps_default() {
        let settings = resolve_settings(&json!({ "tnp": { "prefix": 42 } }));
        assert_eq!(settings.prefix, None);

        let settings = resolve_settings(&json!({ "tnp": { "prefix": null } }));
        assert_eq!(settings.prefix, None);
    }

    #[test]
    fn absent_namespace_yields_defaults() {
        assert_eq!(resolve_settings(&json!({})), PrefixSettings::default());
        assert_eq!(
            resolve_settings(&json!({ "other": { "prefix": "X" } })),
            PrefixSettings::default()
        );
    }

    #[test]
    fn engage_check_requires_non_empty_prefix() {
        let disengaged = PrefixSettings::default();
        assert!(!disengaged.is_engaged());

        let empty = PrefixSettings {
            prefix: Some(String::new()),
            ..Default::default()
        };
        assert!(!empty.is_engaged());

        let engaged = PrefixSettings {
            prefix: Some("T-".to_string()),
            ..Default::default()
        };
        assert!(engaged.is_engaged());
    }

    #[test]
    fn inbox_server_id_accepts_string_and_number() {
        let id = inbox_server_id(&json!({ "inboxServerId": "123456789" })).unwrap();
        assert_eq!(id, GuildId(123456789));

        let id = inbox_server_id(&json!({ "inboxServerId": 42 })).unwrap();
        assert_eq!(id, GuildId(42));
    }

    #[test]
    fn inbox_server_id_rejects_missing_or_malformed() {
        assert!(inbox_server_id(&json!({})).is_err());
        assert!(inbox_server_id(&json!({ "inboxServerId": "not-a-number" })).is_err());
        assert!(inbox_server_id(&json!({ "inboxServerId": true })).is_err());
    }
}

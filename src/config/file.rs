//! Configuration file loading.
//!
//! A config file is a JSON document whose keys mirror [`NavConfig`]'s
//! serialized field names. Any subset of keys may be present: the document is
//! decoded into a [`ConfigOverlay`] of optional fields and only the fields it
//! actually carries are written onto the working configuration.
//!
//! Keys match case-insensitively, against either the serialized name or its
//! snake_case alias. When several members resolve to the same field the last
//! one in the document wins.

use super::types::{DisplayMode, NavConfig};
use crate::error::{NavError, Result};
use schemars::JsonSchema;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

// ============================================================================
// Overlay Document
// ============================================================================

/// Partial configuration read from a config file.
///
/// Unknown keys are ignored. A key set to `null` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct ConfigOverlay {
    #[serde(rename = "DBUrl")]
    pub db_host: Option<String>,
    #[serde(rename = "DBPort")]
    pub db_port: Option<u16>,
    #[serde(rename = "DBUser")]
    pub db_user: Option<String>,
    #[serde(rename = "DBPassword")]
    pub db_password: Option<String>,
    #[serde(rename = "DBTargetDB")]
    pub db_target_db: Option<String>,
    #[serde(rename = "Symbol")]
    pub symbol: Option<String>,
    #[serde(rename = "Instance")]
    pub instance: Option<i64>,
    #[serde(rename = "Mode")]
    pub mode: Option<DisplayMode>,
    #[serde(rename = "Jout")]
    pub output_format: Option<String>,
    #[serde(rename = "MaxDepth")]
    pub max_depth: Option<u32>,
    #[serde(rename = "ExcludedBefore")]
    pub excluded_before: Option<Vec<String>>,
    #[serde(rename = "ExcludedAfter")]
    pub excluded_after: Option<Vec<String>>,
    #[serde(rename = "TargetSubsys")]
    pub target_subsys: Option<Vec<String>>,
}

/// Config file keys: serialized name and snake_case alias.
const FILE_KEYS: &[(&str, &str)] = &[
    ("DBUrl", "db_host"),
    ("DBPort", "db_port"),
    ("DBUser", "db_user"),
    ("DBPassword", "db_password"),
    ("DBTargetDB", "db_target_db"),
    ("Symbol", "symbol"),
    ("Instance", "instance"),
    ("Mode", "mode"),
    ("Jout", "output_format"),
    ("MaxDepth", "max_depth"),
    ("ExcludedBefore", "excluded_before"),
    ("ExcludedAfter", "excluded_after"),
    ("TargetSubsys", "target_subsys"),
];

/// Serialized field name a document key refers to, if any.
fn canonical_key(key: &str) -> Option<&'static str> {
    for &(name, alias) in FILE_KEYS {
        if key.eq_ignore_ascii_case(name) || key.eq_ignore_ascii_case(alias) {
            return Some(name);
        }
    }
    None
}

/// Top-level members of a config document, in document order.
///
/// Duplicated keys are all kept; a `null` document has no members.
struct Members(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for Members {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MembersVisitor;

        impl<'de> Visitor<'de> for MembersVisitor {
            type Value = Members;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<Members, E> {
                Ok(Members(Vec::new()))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Members, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut members = Vec::new();
                while let Some(member) = map.next_entry::<String, Value>()? {
                    members.push(member);
                }
                Ok(Members(members))
            }
        }

        deserializer.deserialize_any(MembersVisitor)
    }
}

/// Move `value` into `slot` when present, recording the key name.
fn set<T>(slot: &mut T, value: Option<T>, key: &'static str, applied: &mut Vec<&'static str>) {
    if let Some(value) = value {
        *slot = value;
        applied.push(key);
    }
}

impl ConfigOverlay {
    /// Decode an overlay from a JSON string.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        Self::from_slice(content.as_bytes())
    }

    /// Decode an overlay from raw file bytes.
    ///
    /// Invalid UTF-8 is reported like any other malformed document.
    pub fn from_slice(content: &[u8]) -> serde_json::Result<Self> {
        let Members(members) = serde_json::from_slice(content)?;

        let mut fields = Map::new();
        for (key, value) in members {
            if value.is_null() {
                continue;
            }
            match canonical_key(&key) {
                Some(name) => {
                    fields.insert(name.to_string(), value);
                }
                None => tracing::trace!(key = %key, "ignoring unknown config file key"),
            }
        }
        serde_json::from_value(Value::Object(fields))
    }

    /// Write every present field onto `config`, leaving the rest untouched.
    ///
    /// Returns the config file keys that were applied, in field order.
    pub fn apply_to(self, config: &mut NavConfig) -> Vec<&'static str> {
        let mut applied = Vec::new();
        let fields = &mut applied;
        set(&mut config.db_host, self.db_host, "DBUrl", fields);
        set(&mut config.db_port, self.db_port, "DBPort", fields);
        set(&mut config.db_user, self.db_user, "DBUser", fields);
        set(
            &mut config.db_password,
            self.db_password,
            "DBPassword",
            fields,
        );
        set(
            &mut config.db_target_db,
            self.db_target_db,
            "DBTargetDB",
            fields,
        );
        set(&mut config.symbol, self.symbol, "Symbol", fields);
        set(&mut config.instance, self.instance, "Instance", fields);
        set(&mut config.mode, self.mode, "Mode", fields);
        set(
            &mut config.output_format,
            self.output_format,
            "Jout",
            fields,
        );
        set(&mut config.max_depth, self.max_depth, "MaxDepth", fields);
        set(
            &mut config.excluded_before,
            self.excluded_before,
            "ExcludedBefore",
            fields,
        );
        set(
            &mut config.excluded_after,
            self.excluded_after,
            "ExcludedAfter",
            fields,
        );
        set(
            &mut config.target_subsys,
            self.target_subsys,
            "TargetSubsys",
            fields,
        );
        applied
    }

    /// Whether the document carried no recognised key at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Read and decode a config file.
///
/// The file handle lives only for the read; it is closed before decoding
/// starts and on every error path.
pub fn load_config_file(path: &Path) -> Result<ConfigOverlay> {
    let content = {
        let mut file = File::open(path).map_err(|e| NavError::io(path, e))?;
        let mut content = Vec::new();
        file.read_to_end(&mut content)
            .map_err(|e| NavError::io(path, e))?;
        content
    };

    ConfigOverlay::from_slice(&content).map_err(|e| {
        NavError::decode(format!("config file {}", path.display()), e.into())
    })
}

/// Load `path` and overlay it onto `config`.
pub fn overlay_config_file(path: &Path, config: &mut NavConfig) -> Result<()> {
    let overlay = load_config_file(path)?;
    if overlay.is_empty() {
        tracing::debug!(path = %path.display(), "config file sets no known field");
        return Ok(());
    }
    let applied = overlay.apply_to(config);
    tracing::debug!(path = %path.display(), fields = ?applied, "applied config file");
    Ok(())
}

// ============================================================================
// Example Config and Schema Generation
// ============================================================================

/// Generate an example config file holding every default value.
#[must_use]
pub fn generate_example_config() -> String {
    serde_json::to_string_pretty(&NavConfig::default()).unwrap_or_default()
}

/// JSON Schema describing the config file format.
#[must_use]
pub fn config_schema() -> String {
    let schema = schemars::schema_for!(ConfigOverlay);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeErrorKind;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("nav.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_single_field_overlay_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, r#"{"DBUser": "kernel"}"#);

        let mut config = NavConfig::default();
        overlay_config_file(&path, &mut config).unwrap();

        let expected = NavConfig {
            db_user: "kernel".to_string(),
            ..NavConfig::default()
        };
        assert_eq!(config, expected);
    }

    #[test]
    fn test_overlay_does_not_reset_earlier_values() {
        let mut config = NavConfig {
            symbol: "vfs_read".to_string(),
            max_depth: 7,
            ..NavConfig::default()
        };
        let overlay = ConfigOverlay::from_json(r#"{"Instance": 3}"#).unwrap();
        let applied = overlay.apply_to(&mut config);

        assert_eq!(applied, vec!["Instance"]);
        assert_eq!(config.symbol, "vfs_read");
        assert_eq!(config.max_depth, 7);
        assert_eq!(config.instance, 3);
    }

    #[test]
    fn test_full_overlay() {
        let json = r#"{
            "DBUrl": "db.local",
            "DBPort": 6543,
            "DBUser": "u",
            "DBPassword": "pw",
            "DBTargetDB": "kernel_6_1",
            "Symbol": "start_kernel",
            "Instance": 12,
            "Mode": 3,
            "Jout": "JsonOutputPlain",
            "MaxDepth": 4,
            "ExcludedBefore": ["rcu"],
            "ExcludedAfter": ["mm", "sched"],
            "TargetSubsys": ["net"]
        }"#;
        let mut config = NavConfig::default();
        let overlay = ConfigOverlay::from_json(json).unwrap();
        let applied = overlay.apply_to(&mut config);

        assert_eq!(applied.len(), 13);
        assert_eq!(config.db_host, "db.local");
        assert_eq!(config.db_port, 6543);
        assert_eq!(config.mode, DisplayMode::Targeted);
        assert_eq!(config.excluded_after, vec!["mm", "sched"]);
        assert_eq!(config.target_subsys, vec!["net"]);
    }

    #[test]
    fn test_snake_case_aliases_and_unknown_keys() {
        let json = r#"{"db_host": "h", "max_depth": 2, "Colour": "blue"}"#;
        let overlay = ConfigOverlay::from_json(json).unwrap();
        assert_eq!(overlay.db_host.as_deref(), Some("h"));
        assert_eq!(overlay.max_depth, Some(2));
    }

    #[test]
    fn test_keys_match_case_insensitively() {
        let json = r#"{"maxDepth": 6, "dburl": "db.lower", "SYMBOL": "s", "Db_Port": 7}"#;
        let overlay = ConfigOverlay::from_json(json).unwrap();
        assert_eq!(overlay.max_depth, Some(6));
        assert_eq!(overlay.db_host.as_deref(), Some("db.lower"));
        assert_eq!(overlay.symbol.as_deref(), Some("s"));
        assert_eq!(overlay.db_port, Some(7));
    }

    #[test]
    fn test_last_member_for_a_field_wins() {
        let json = r#"{"DBUrl": "a", "db_host": "b"}"#;
        let overlay = ConfigOverlay::from_json(json).unwrap();
        assert_eq!(overlay.db_host.as_deref(), Some("b"));

        let json = r#"{"db_host": "b", "DBUrl": "a"}"#;
        let overlay = ConfigOverlay::from_json(json).unwrap();
        assert_eq!(overlay.db_host.as_deref(), Some("a"));

        let json = r#"{"Mode": 0, "mode": 2, "MODE": 3}"#;
        let overlay = ConfigOverlay::from_json(json).unwrap();
        assert_eq!(overlay.mode, Some(DisplayMode::Targeted));
    }

    #[test]
    fn test_null_member_keeps_earlier_duplicate() {
        let json = r#"{"Symbol": "a", "symbol": null}"#;
        let overlay = ConfigOverlay::from_json(json).unwrap();
        assert_eq!(overlay.symbol.as_deref(), Some("a"));
    }

    #[test]
    fn test_null_document_is_empty_overlay() {
        assert!(ConfigOverlay::from_json("null").unwrap().is_empty());
    }

    #[test]
    fn test_non_object_document_is_rejected() {
        assert!(ConfigOverlay::from_json(r#"["DBUrl"]"#).is_err());
    }

    #[test]
    fn test_null_is_absent() {
        let mut config = NavConfig::default();
        let applied = ConfigOverlay::from_json(r#"{"Symbol": null}"#)
            .unwrap()
            .apply_to(&mut config);
        assert!(applied.is_empty());
        assert_eq!(config, NavConfig::default());
    }

    #[test]
    fn test_empty_document_changes_nothing() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "{}");
        let mut config = NavConfig::default();
        overlay_config_file(&path, &mut config).unwrap();
        assert_eq!(config, NavConfig::default());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_config_file(Path::new("/nonexistent/nav.json"));
        assert!(matches!(result, Err(NavError::Io { .. })));
    }

    #[test]
    fn test_directory_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_config_file(tmp.path());
        assert!(matches!(
            result,
            Err(NavError::Io { ref path, .. }) if path == tmp.path()
        ));
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nav.json");
        let bytes = [b'{', 0xFF, b'}'];
        std::fs::write(&path, bytes).unwrap();
        let result = load_config_file(&path);
        assert!(matches!(
            result,
            Err(NavError::Decode {
                source: DecodeErrorKind::InvalidJson(_),
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_utf8_inside_string_is_decode_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nav.json");
        std::fs::write(&path, b"{\"Symbol\": \"\xFF\"}").unwrap();
        let result = load_config_file(&path);
        assert!(matches!(result, Err(NavError::Decode { .. })));
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, r#"{"Symbol": "#);
        let result = load_config_file(&path);
        assert!(matches!(
            result,
            Err(NavError::Decode {
                source: DecodeErrorKind::InvalidJson(_),
                ..
            })
        ));
    }

    #[test]
    fn test_out_of_range_mode_in_file_is_decode_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, r#"{"Mode": 42}"#);
        assert!(matches!(load_config_file(&path), Err(NavError::Decode { .. })));
    }

    #[test]
    fn test_example_config_round_trips_through_overlay() {
        let example = generate_example_config();
        assert!(example.contains("\"DBUrl\""));

        let mut config = NavConfig {
            symbol: "something".to_string(),
            ..NavConfig::default()
        };
        let overlay = ConfigOverlay::from_json(&example).unwrap();
        overlay.apply_to(&mut config);
        assert_eq!(config, NavConfig::default());
    }

    #[test]
    fn test_config_schema_lists_file_keys() {
        let schema = config_schema();
        assert!(schema.contains("\"MaxDepth\""));
        assert!(schema.contains("\"TargetSubsys\""));
        assert!(schema.contains("DisplayMode"));
    }
}

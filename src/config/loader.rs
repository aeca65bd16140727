//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::schema::{fold_version, Config, FIELD_NAMES};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load a JSON configuration file and normalize its version keys.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read(path)?;
    parse_config(&content)
}

/// Async variant of [`load_config`] for callers already on a Tokio runtime.
pub async fn load_config_async(path: &Path) -> Result<Config, ConfigError> {
    let content = tokio::fs::read(path).await?;
    parse_config(&content)
}

/// Parse raw JSON bytes into a normalized [`Config`].
///
/// Top-level field names match case-insensitively, a repeated key keeps its
/// last value, and a `null` document yields the default config.
pub fn parse_config(bytes: &[u8]) -> Result<Config, ConfigError> {
    let document: Value = serde_json::from_slice(bytes)?;
    let mut config = if document.is_null() {
        Config::default()
    } else {
        let fields: Map<String, Value> = serde_json::from_value(document)?;
        serde_json::from_value(Value::Object(fold_field_names(fields)))?
    };
    normalize_versions(&mut config);
    Ok(config)
}

/// Rename top-level keys to their canonical field names.
///
/// An exact match wins; otherwise the first key (in sorted order) that
/// matches ignoring ASCII case is taken. Unknown keys are dropped.
fn fold_field_names(mut fields: Map<String, Value>) -> Map<String, Value> {
    let mut folded = Map::new();
    for name in FIELD_NAMES {
        let key = if fields.contains_key(name) {
            Some(name.to_string())
        } else {
            fields.keys().find(|k| k.eq_ignore_ascii_case(name)).cloned()
        };
        if let Some(value) = key.and_then(|k| fields.remove(&k)) {
            folded.insert(name.to_string(), value);
        }
    }
    folded
}

/// Parse a JSON string into a normalized [`Config`].
pub fn parse_config_str(content: &str) -> Result<Config, ConfigError> {
    parse_config(content.as_bytes())
}

/// Insert the lowercase form of every version key, keeping the originals.
///
/// When two keys differ only by case, the one visited last wins; map
/// iteration order decides which.
pub fn normalize_versions(config: &mut Config) {
    let keys: Vec<String> = config.versions.keys().cloned().collect();
    for key in keys {
        let lower = fold_version(&key);
        if let Some(prefixes) = config.versions.get(&key).cloned() {
            config.versions.insert(lower, prefixes);
        }
    }
}

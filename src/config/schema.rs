//! Configuration schema definitions.
//!
//! Field names follow the on-disk JSON document; unknown fields are ignored
//! and every field has a default so partial documents still load. An
//! explicit `null` is read the same as a missing value.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Top-level field names, as written by [`Config`]'s serializer.
pub const FIELD_NAMES: [&str; 5] = ["port", "versions", "not_found_error", "fallback_rule", "scheme"];

/// Path prefix (e.g. `/users`) to backend hostname.
pub type PrefixMap = HashMap<String, String>;

/// Static gateway configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Port the gateway listens on.
    #[serde(deserialize_with = "null_as_default")]
    pub port: String,

    /// API version (e.g. `v1`) to path prefix to backend hostname.
    ///
    /// After loading, the lowercase form of every version key is present
    /// alongside the original key.
    #[serde(deserialize_with = "deserialize_versions")]
    pub versions: HashMap<String, PrefixMap>,

    /// Body returned verbatim for unmapped routes.
    #[serde(rename = "not_found_error")]
    pub not_found_response: Value,

    /// Fallback URL, commonly the API documentation page.
    #[serde(deserialize_with = "null_as_default")]
    pub fallback_rule: String,

    /// URL scheme used when proxying to backends (`http` or `https`).
    #[serde(deserialize_with = "null_as_default")]
    pub scheme: String,
}

/// Lowercase a version key one char at a time, without context-dependent
/// rules such as final sigma.
pub fn fold_version(name: &str) -> String {
    name.chars().flat_map(char::to_lowercase).collect()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// null at any level of the versions tree becomes an empty map or string
fn deserialize_versions<'de, D>(deserializer: D) -> Result<HashMap<String, PrefixMap>, D::Error>
where
    D: Deserializer<'de>,
{
    type Raw = HashMap<String, Option<HashMap<String, Option<String>>>>;

    let raw: Raw = null_as_default(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(version, prefixes)| {
            let prefixes: PrefixMap = prefixes
                .unwrap_or_default()
                .into_iter()
                .map(|(prefix, host)| (prefix, host.unwrap_or_default()))
                .collect();
            (version, prefixes)
        })
        .collect())
}

impl Config {
    /// Prefix map for a version, compared case-insensitively.
    pub fn version(&self, name: &str) -> Option<&PrefixMap> {
        self.versions.get(&fold_version(name))
    }

    /// Backend hostname for `version` and an exact `path_prefix`.
    pub fn backend(&self, version: &str, path_prefix: &str) -> Option<&str> {
        self.version(version)
            .and_then(|prefixes| prefixes.get(path_prefix))
            .map(String::as_str)
    }

    /// Whether a non-blank fallback rule is configured.
    pub fn has_fallback(&self) -> bool {
        !self.fallback_rule.trim().is_empty()
    }
}

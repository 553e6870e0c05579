//! API base URL resolution.
//!
//! Sources are applied in order, each later one overriding the earlier:
//!
//! 1. the [`DEFAULT_API_URL`] literal,
//! 2. `REACT_APP_API_URL` captured from the build environment,
//! 3. `REACT_APP_API_URL` in the runtime-injected config object.
//!
//! The runtime object lets a deployment repoint an already-built front-end
//! without rebuilding it. It is loaded by the host and passed in explicitly;
//! nothing here reads ambient globals. The result is resolved once at startup
//! and never validated as a URL.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Key looked up in both the build environment and the runtime object.
pub const API_URL_KEY: &str = "REACT_APP_API_URL";

/// Value of `REACT_APP_API_URL` when this crate was compiled.
pub const BUILD_TIME_API_URL: Option<&str> = option_env!("REACT_APP_API_URL");

/// Runtime-injected configuration object: a flat map of string keys to
/// string values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeEnv {
    values: BTreeMap<String, String>,
}

impl RuntimeEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Parse a JSON object. Entries whose value is not a string are skipped.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let object: Map<String, Value> = serde_json::from_str(raw)?;
        let values = object
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect();
        Ok(Self { values })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// Configuration the application runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub api_url: String,
}

impl RuntimeConfig {
    /// Resolve against the value baked in at build time.
    pub fn resolve(runtime: Option<&RuntimeEnv>) -> Self {
        resolve_api_url(BUILD_TIME_API_URL, runtime)
    }
}

/// Apply the three sources in precedence order.
///
/// An empty build-time value counts as unset. A runtime key that is present
/// always wins, even when empty.
pub fn resolve_api_url(build_time: Option<&str>, runtime: Option<&RuntimeEnv>) -> RuntimeConfig {
    let mut api_url = DEFAULT_API_URL;
    let mut source = "default";

    if let Some(value) = build_time.filter(|v| !v.is_empty()) {
        api_url = value;
        source = "build environment";
    }

    if let Some(value) = runtime.and_then(|env| env.get(API_URL_KEY)) {
        api_url = value;
        source = "runtime config";
    }

    debug!(api_url, source, "resolved API base URL");
    RuntimeConfig {
        api_url: api_url.to_string(),
    }
}

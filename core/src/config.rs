//! Method-name configuration for the binder.
//!
//! Overrides can be built in code or loaded from YAML or JSON:
//!
//! ```yaml
//! get: fetch
//! delete: remove
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};


pub const DEFAULT_GET: &str = "deepGet";
pub const DEFAULT_SET: &str = "deepSet";
pub const DEFAULT_HAS: &str = "deepHas";
pub const DEFAULT_DELETE: &str = "deepDelete";


/// Caller-supplied names for the four operations. Any name left unset falls
/// back to its default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NameOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<String>,
}

impl NameOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(mut self, name: impl Into<String>) -> Self {
        self.get = Some(name.into());
        self
    }

    pub fn set(mut self, name: impl Into<String>) -> Self {
        self.set = Some(name.into());
        self
    }

    pub fn has(mut self, name: impl Into<String>) -> Self {
        self.has = Some(name.into());
        self
    }

    pub fn delete(mut self, name: impl Into<String>) -> Self {
        self.delete = Some(name.into());
        self
    }

    /// Fill in defaults. An empty-string override counts as unset.
    pub fn resolve(&self) -> MethodNames {
        MethodNames {
            get: pick(&self.get, DEFAULT_GET),
            set: pick(&self.set, DEFAULT_SET),
            has: pick(&self.has, DEFAULT_HAS),
            delete: pick(&self.delete, DEFAULT_DELETE),
        }
    }

    /// Parse overrides from a YAML string. An empty document means no
    /// overrides.
    pub fn from_yaml_str(content: &str) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| format!("invalid name overrides: {}", e))
    }

    /// Parse overrides from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| format!("invalid name overrides: {}", e))
    }

    /// Load overrides from a file. `.json` files are read as JSON, anything
    /// else as YAML.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
        let parsed = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_yaml_str(&content),
        };
        parsed.map_err(|e| format!("{}: {}", path.display(), e))
    }
}


/// The resolved, externally visible method names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodNames {
    pub get: String,
    pub set: String,
    pub has: String,
    pub delete: String,
}

impl Default for MethodNames {
    fn default() -> Self {
        NameOverrides::default().resolve()
    }
}


fn pick(name: &Option<String>, default: &str) -> String {
    match name {
        Some(n) if !n.is_empty() => n.clone(),
        _ => default.to_string(),
    }
}

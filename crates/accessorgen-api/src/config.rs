use crate::errors::GeneratorError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

/// Default gap after every PHPDoc tag
pub const DEFAULT_SPACES: usize = 2;

/// Largest gap accepted from settings
pub const MAX_SPACES: usize = 64;

/// A read-only store of named user settings
///
/// Hosts expose their settings section through this trait; values are plain
/// JSON so any settings format can be adapted.
pub trait SettingsSource {
    /// Look up a setting by key
    fn get(&self, key: &str) -> Option<Value>;
}

impl SettingsSource for serde_json::Map<String, Value> {
    fn get(&self, key: &str) -> Option<Value> {
        serde_json::Map::get(self, key).cloned()
    }
}

impl SettingsSource for HashMap<String, Value> {
    fn get(&self, key: &str) -> Option<Value> {
        HashMap::get(self, key).cloned()
    }
}

impl SettingsSource for Value {
    fn get(&self, key: &str) -> Option<Value> {
        self.as_object().and_then(|map| map.get(key)).cloned()
    }
}

/// Configuration for accessor generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Spaces after the `@return` tag
    pub spaces_after_return: usize,

    /// Spaces after the `@param` tag
    pub spaces_after_param: usize,

    /// Spaces between the parameter type and variable in the `@param` line
    pub spaces_after_param_var: usize,

    /// Move the cursor above the class-closing line after inserting
    pub redirect: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            spaces_after_return: DEFAULT_SPACES,
            spaces_after_param: DEFAULT_SPACES,
            spaces_after_param_var: DEFAULT_SPACES,
            redirect: true,
        }
    }
}

impl GeneratorConfig {
    /// Settings key for [`GeneratorConfig::spaces_after_return`]
    pub const SPACES_AFTER_RETURN: &'static str = "spacesAfterReturn";
    /// Settings key for [`GeneratorConfig::spaces_after_param`]
    pub const SPACES_AFTER_PARAM: &'static str = "spacesAfterParam";
    /// Settings key for [`GeneratorConfig::spaces_after_param_var`]
    pub const SPACES_AFTER_PARAM_VAR: &'static str = "spacesAfterParamVar";
    /// Settings key for [`GeneratorConfig::redirect`]
    pub const REDIRECT: &'static str = "redirect";

    /// Read every recognised key from a settings source
    ///
    /// Missing keys take their default. Values of the wrong shape (negative
    /// numbers, strings, gaps above [`MAX_SPACES`]) are logged and replaced by
    /// the default as well.
    pub fn from_settings(source: &dyn SettingsSource) -> Self {
        let defaults = Self::default();
        Self {
            spaces_after_return: read_count(
                source,
                Self::SPACES_AFTER_RETURN,
                defaults.spaces_after_return,
            ),
            spaces_after_param: read_count(
                source,
                Self::SPACES_AFTER_PARAM,
                defaults.spaces_after_param,
            ),
            spaces_after_param_var: read_count(
                source,
                Self::SPACES_AFTER_PARAM_VAR,
                defaults.spaces_after_param_var,
            ),
            redirect: read_flag(source, Self::REDIRECT, defaults.redirect),
        }
    }

    /// Parse a JSON settings object
    pub fn from_json(json: &str) -> Result<Self, GeneratorError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| GeneratorError::InvalidConfig(e.to_string()))?;
        if !value.is_object() {
            return Err(GeneratorError::InvalidConfig(
                "settings must be a JSON object".to_string(),
            ));
        }
        Ok(Self::from_settings(&value))
    }

    /// Set the gap after `@return`
    pub fn with_spaces_after_return(mut self, spaces: usize) -> Self {
        self.spaces_after_return = spaces;
        self
    }

    /// Set the gap after `@param`
    pub fn with_spaces_after_param(mut self, spaces: usize) -> Self {
        self.spaces_after_param = spaces;
        self
    }

    /// Set the gap between the `@param` type and variable
    pub fn with_spaces_after_param_var(mut self, spaces: usize) -> Self {
        self.spaces_after_param_var = spaces;
        self
    }

    /// Enable or disable the cursor redirect
    pub fn with_redirect(mut self, redirect: bool) -> Self {
        self.redirect = redirect;
        self
    }
}

/// A run of `count` spaces
pub fn spaces(count: usize) -> String {
    " ".repeat(count)
}

fn read_count(source: &dyn SettingsSource, key: &str, default: usize) -> usize {
    match source.get(key) {
        None | Some(Value::Null) => default,
        Some(value) => match value.as_u64().and_then(|count| usize::try_from(count).ok()) {
            Some(count) if count <= MAX_SPACES => count,
            _ => {
                warn!(
                    key,
                    %value,
                    max = MAX_SPACES,
                    "ignoring setting, expected an integer in range"
                );
                default
            }
        },
    }
}

fn read_flag(source: &dyn SettingsSource, key: &str, default: bool) -> bool {
    match source.get(key) {
        None | Some(Value::Null) => default,
        Some(Value::Bool(flag)) => flag,
        Some(value) => {
            warn!(key, %value, "ignoring setting, expected a boolean");
            default
        }
    }
}

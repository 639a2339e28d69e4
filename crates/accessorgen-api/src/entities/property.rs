use serde::{Deserialize, Serialize};

/// Represents a class property declaration
///
/// Only what the source actually declared is stored. Rendering decides the
/// fallback text for anything left unknown, so the same value can feed both
/// the getter and the setter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Property {
    /// Property name, without the `$` sigil
    pub name: String,

    /// Declared type hint usable in a signature (if any)
    pub type_hint: Option<String>,

    /// Type used in documentation (if known)
    #[serde(rename = "type")]
    pub doc_type: Option<String>,

    /// Documentation text (if any)
    pub description: Option<String>,

    /// Leading whitespace of the declaration line
    pub indentation: String,
}

impl Property {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_hint: None,
            doc_type: None,
            description: None,
            indentation: String::new(),
        }
    }

    pub fn with_type_hint(mut self, type_hint: impl Into<String>) -> Self {
        self.type_hint = Some(type_hint.into());
        self
    }

    pub fn with_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = Some(doc_type.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_indentation(mut self, indentation: impl Into<String>) -> Self {
        self.indentation = indentation.into();
        self
    }

    /// Name of the generated getter, e.g. `getAge`
    pub fn getter_name(&self) -> String {
        format!("get{}", capitalize(&self.name))
    }

    /// Name of the generated setter, e.g. `setAge`
    pub fn setter_name(&self) -> String {
        format!("set{}", capitalize(&self.name))
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

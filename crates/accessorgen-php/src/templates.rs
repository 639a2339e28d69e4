//! Getter and setter templates
//!
//! Templates are plain text with `{{marker}}` slots filled by literal
//! replacement. Tag spacing is applied afterwards by matching the tag
//! keywords themselves, then every non-empty line is re-indented to the
//! property's indentation.

use accessorgen_api::{spaces, GeneratorConfig, Property};

/// Documentation type used when the property's type is unknown
pub const FALLBACK_TYPE: &str = "mixed";

const NAME: &str = "{{name}}";
const TYPE: &str = "{{type}}";
const TYPE_HINT: &str = "{{typeHint}}";
const DESCRIPTION: &str = "{{description}}";
const GETTER_NAME: &str = "{{getterName}}";
const SETTER_NAME: &str = "{{setterName}}";

const PARAM_TAG: &str = " * @param ";
const RETURN_TAG: &str = " * @return ";

pub const GETTER_TEMPLATE: &str = r#"/**
 * {{description}}
 *
 * @return {{type}}
 */
public function {{getterName}}()
{
    return $this->{{name}};
}

"#;

pub const SETTER_TEMPLATE: &str = r#"/**
 * {{description}}
 *
 * @param {{type}} ${{name}}
 *
 * @return self
 */
public function {{setterName}}({{typeHint}}${{name}})
{
    $this->{{name}} = ${{name}};

    return $this;
}

"#;

/// Kind of accessor to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accessor {
    Getter,
    Setter,
}

impl Accessor {
    pub fn render(self, property: &Property, config: &GeneratorConfig) -> String {
        match self {
            Accessor::Getter => render_getter(property, config),
            Accessor::Setter => render_setter(property, config),
        }
    }
}

/// Render the getter for a property
pub fn render_getter(property: &Property, config: &GeneratorConfig) -> String {
    let doc_type = property.doc_type.as_deref().unwrap_or(FALLBACK_TYPE);
    let description = property
        .description
        .clone()
        .unwrap_or_else(|| format!("Get the value of {}", property.name));

    let filled = GETTER_TEMPLATE
        .replacen(TYPE, doc_type, 1)
        .replacen(GETTER_NAME, &property.getter_name(), 1)
        .replacen(NAME, &property.name, 1)
        .replacen(RETURN_TAG, &tag(RETURN_TAG, config.spaces_after_return), 1)
        .replacen(DESCRIPTION, &description, 1);

    indent(&filled, &property.indentation)
}

/// Render the setter for a property
pub fn render_setter(property: &Property, config: &GeneratorConfig) -> String {
    let doc_type = property.doc_type.as_deref().unwrap_or(FALLBACK_TYPE);
    let description = property
        .description
        .clone()
        .unwrap_or_else(|| format!("Set the value of {}", property.name));
    let type_hint = property
        .type_hint
        .as_deref()
        .map(|hint| format!("{hint} "))
        .unwrap_or_default();

    let filled = SETTER_TEMPLATE
        .replacen(SETTER_NAME, &property.setter_name(), 1)
        .replacen(TYPE_HINT, &type_hint, 1)
        .replacen(
            &format!("{TYPE} "),
            &format!("{doc_type}{}", spaces(config.spaces_after_param_var)),
            1,
        )
        .replace(NAME, &property.name)
        .replacen(PARAM_TAG, &tag(PARAM_TAG, config.spaces_after_param), 1)
        .replacen(RETURN_TAG, &tag(RETURN_TAG, config.spaces_after_return), 1)
        .replacen(DESCRIPTION, &description, 1);

    indent(&filled, &property.indentation)
}

/// `" * @return "` with its single trailing space widened to `count` spaces
fn tag(keyword: &str, count: usize) -> String {
    format!("{}{}", keyword.trim_end_matches(' '), spaces(count))
}

/// Prefix every non-empty line with `indentation`
fn indent(text: &str, indentation: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{indentation}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

//! Property declaration parsing for PHP source lines

use accessorgen_api::{GeneratorError, Property};
use tracing::debug;

use crate::docblock::DocBlock;

/// Modifier keywords that may precede a property declaration
pub const MODIFIERS: &[&str] = &["public", "private", "protected", "static", "var", "readonly"];

/// Types that won't be recognised as valid type hints
pub const PSEUDO_TYPES: &[&str] = &["mixed", "number", "callback", "object", "void"];

/// Keywords that can start a statement ending in a variable but never declare a type
const STATEMENT_KEYWORDS: &[&str] = &[
    "return", "echo", "print", "global", "unset", "yield", "throw", "new", "clone", "case",
    "else", "use", "function", "fn", "const", "include", "require", "include_once",
    "require_once", "as", "and", "or", "xor", "instanceof", "goto", "continue", "break",
];

/// A property declaration recognised on a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// Leading spaces and tabs
    pub indentation: &'a str,

    /// Modifier keywords, in source order
    pub modifiers: Vec<&'a str>,

    /// Explicit type token (may be a pseudo-type)
    pub type_hint: Option<&'a str>,

    /// Name without the `$` sigil
    pub name: &'a str,

    /// Raw default value expression, without the trailing `;`
    pub default_value: Option<&'a str>,
}

/// Locates and parses property declarations
pub struct PropertyParser;

impl PropertyParser {
    /// Parse the property declared at or above `cursor_line`
    ///
    /// Lines are scanned upward from the cursor; the first declaration-shaped
    /// line wins. A cursor past the end of the document is treated as being on
    /// the last line.
    ///
    /// # Errors
    /// Returns [`GeneratorError::PropertyNotFound`] when no declaration is found
    /// before the top of the document.
    pub fn from_position<S: AsRef<str>>(
        lines: &[S],
        cursor_line: usize,
    ) -> Result<Property, GeneratorError> {
        let not_found = GeneratorError::PropertyNotFound { line: cursor_line };
        let last = lines.len().checked_sub(1).ok_or_else(|| not_found.clone())?;
        let start = cursor_line.min(last);

        for index in (0..=start).rev() {
            if let Some(declaration) = scan_declaration(lines[index].as_ref()) {
                let docblock = DocBlock::above(lines, index);
                let property = Self::build(&declaration, docblock.as_ref());
                debug!(
                    line = index,
                    name = %property.name,
                    doc_type = ?property.doc_type,
                    "found property declaration"
                );
                return Ok(property);
            }
        }

        Err(not_found)
    }

    /// Parse a single line, ignoring any surrounding docblock
    pub fn from_line(line: &str) -> Option<Property> {
        scan_declaration(line).map(|declaration| Self::build(&declaration, None))
    }

    fn build(declaration: &Declaration<'_>, docblock: Option<&DocBlock>) -> Property {
        let mut property =
            Property::new(declaration.name).with_indentation(declaration.indentation);

        let (pseudo_hint, real_hint) = match declaration.type_hint {
            Some(hint) if is_pseudo_type(hint) => (Some(hint), None),
            hint => (None, hint),
        };
        let inferred = declaration.default_value.and_then(infer_default_type);

        property.type_hint = real_hint.map(String::from);
        property.doc_type = docblock
            .and_then(|doc| doc.var_type.clone())
            .or_else(|| real_hint.map(String::from))
            .or_else(|| inferred.map(String::from))
            .or_else(|| pseudo_hint.map(String::from));
        property.description = docblock.and_then(DocBlock::summary);

        property
    }
}

/// Whether a type token is documentation-only
pub fn is_pseudo_type(type_hint: &str) -> bool {
    let bare = type_hint.strip_prefix('?').unwrap_or(type_hint);
    PSEUDO_TYPES.iter().any(|pseudo| pseudo.eq_ignore_ascii_case(bare))
}

/// Recognise a property declaration on one line
///
/// The line is scanned token by token: modifiers, an optional type, the
/// `$name`, then an optional `= default`.
pub fn scan_declaration(line: &str) -> Option<Declaration<'_>> {
    let body = line.trim_start_matches([' ', '\t']);
    let indentation = &line[..line.len() - body.len()];
    let mut scanner = Scanner::new(body);

    let mut modifiers = Vec::new();
    let mut type_hint = None;

    loop {
        scanner.skip_whitespace();
        if scanner.eat('$') {
            break;
        }

        let token = scanner.take_while(is_type_char);
        if token.is_empty() || !scanner.peek().is_some_and(char::is_whitespace) {
            return None;
        }

        if is_modifier(token) {
            if type_hint.is_some() {
                return None;
            }
            modifiers.push(token);
        } else if type_hint.is_none() && is_type_token(token) {
            type_hint = Some(token);
        } else {
            return None;
        }
    }

    let name = scanner.take_identifier();
    if name.is_empty() {
        return None;
    }

    scanner.skip_whitespace();
    let rest = scanner.rest();
    let default_value = if rest.is_empty() || rest.starts_with([';', ',', ')']) {
        None
    } else if rest.starts_with('=') && !rest.starts_with("==") && !rest.starts_with("=>") {
        Some(trim_terminator(&rest[1..]))
    } else {
        return None;
    };

    Some(Declaration {
        indentation,
        modifiers,
        type_hint,
        name,
        default_value,
    })
}

/// Best-effort documentation type of a default value expression
///
/// Returns `None` for `null` and for anything that is not a recognisable
/// literal.
pub fn infer_default_type(value: &str) -> Option<&'static str> {
    let value = trim_terminator(value);

    if value.starts_with(['\'', '"']) || value.starts_with("<<<") {
        return Some("string");
    }
    if value.starts_with('[') || starts_with_array_call(value) {
        return Some("array");
    }

    let end = value
        .find(|c: char| c.is_whitespace() || matches!(c, ';' | ',' | ')'))
        .unwrap_or(value.len());
    let (word, remainder) = value.split_at(end);
    let remainder = remainder.trim_start();
    if !(remainder.is_empty()
        || remainder.starts_with([';', ',', ')', '#'])
        || remainder.starts_with("//")
        || remainder.starts_with("/*"))
    {
        return None;
    }

    if word.eq_ignore_ascii_case("true") || word.eq_ignore_ascii_case("false") {
        Some("bool")
    } else if word.eq_ignore_ascii_case("null") {
        None
    } else {
        classify_number(word)
    }
}

fn classify_number(word: &str) -> Option<&'static str> {
    let unsigned = word.strip_prefix(['-', '+']).unwrap_or(word);
    let lower = unsigned.to_ascii_lowercase();

    let radix_digits = [("0x", 16), ("0b", 2), ("0o", 8)]
        .into_iter()
        .find_map(|(prefix, radix)| lower.strip_prefix(prefix).map(|digits| (digits, radix)));
    if let Some((digits, radix)) = radix_digits {
        let valid = !digits.is_empty()
            && digits.chars().all(|c| c == '_' || c.is_digit(radix))
            && digits.chars().any(|c| c != '_');
        return valid.then_some("int");
    }

    if !lower.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    if lower.chars().all(|c| c.is_ascii_digit() || c == '_') {
        return Some("int");
    }

    let float_shaped = lower
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | '+' | '-' | '_'));
    let digits: String = lower.chars().filter(|&c| c != '_').collect();
    (float_shaped && digits.parse::<f64>().is_ok()).then_some("float")
}

fn starts_with_array_call(value: &str) -> bool {
    value
        .get(..5)
        .is_some_and(|head| head.eq_ignore_ascii_case("array"))
        && value[5..].trim_start().starts_with('(')
}

fn trim_terminator(value: &str) -> &str {
    let value = value.trim();
    value
        .strip_suffix([';', ','])
        .map(str::trim_end)
        .unwrap_or(value)
}

fn is_modifier(token: &str) -> bool {
    MODIFIERS.iter().any(|m| m.eq_ignore_ascii_case(token))
}

fn is_type_token(token: &str) -> bool {
    !token.starts_with(|c: char| c.is_ascii_digit())
        && !STATEMENT_KEYWORDS
            .iter()
            .any(|keyword| keyword.eq_ignore_ascii_case(token))
}

fn is_type_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '\\' | '?' | '|' | '&') || !c.is_ascii()
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || !c.is_ascii()
}

/// Cursor over the body of a line
struct Scanner<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.position..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.position += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        self.take_while(char::is_whitespace);
    }

    fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let end = rest.find(|c: char| !predicate(c)).unwrap_or(rest.len());
        self.position += end;
        &rest[..end]
    }

    fn take_identifier(&mut self) -> &'a str {
        if self.peek().is_some_and(|c| c.is_ascii_digit()) {
            return "";
        }
        self.take_while(is_identifier_char)
    }
}

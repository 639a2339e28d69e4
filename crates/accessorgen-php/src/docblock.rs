//! PHPDoc blocks preceding a property declaration

/// The parts of a docblock relevant to accessor generation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocBlock {
    /// Free text before the first tag, lines joined by single spaces
    pub description: Option<String>,

    /// Type named by the `@var` tag
    pub var_type: Option<String>,

    /// Text following the `@var` type (and optional variable name)
    pub var_description: Option<String>,
}

impl DocBlock {
    /// Read the docblock ending on the line directly above `declaration_line`
    ///
    /// Attribute lines (`#[...]`) between the block and the declaration are
    /// skipped. Plain `/* */` comments are not docblocks.
    pub fn above<S: AsRef<str>>(lines: &[S], declaration_line: usize) -> Option<DocBlock> {
        let mut end = declaration_line.min(lines.len());
        while end > 0 && lines[end - 1].as_ref().trim_start().starts_with("#[") {
            end -= 1;
        }

        let closing = end.checked_sub(1)?;
        if !lines[closing].as_ref().trim_end().ends_with("*/") {
            return None;
        }

        for start in (0..=closing).rev() {
            let line = lines[start].as_ref().trim_start();
            if line.starts_with("/*") {
                if !line.starts_with("/**") {
                    return None;
                }
                let block: Vec<&str> = lines[start..=closing]
                    .iter()
                    .map(|line| line.as_ref())
                    .collect();
                return Some(Self::parse(&block));
            }
        }

        None
    }

    /// Parse the lines of a docblock, from the `/**` line to the `*/` line
    pub fn parse(lines: &[&str]) -> DocBlock {
        let mut doc = DocBlock::default();
        let mut text = Vec::new();
        let mut in_tags = false;

        for line in lines {
            let content = strip_decoration(line);

            if let Some(tag) = content.strip_prefix('@') {
                in_tags = true;
                let (name, body) = tag.split_once(char::is_whitespace).unwrap_or((tag, ""));
                if name == "var" && doc.var_type.is_none() {
                    let (var_type, rest) = split_type(body.trim_start());
                    if !var_type.is_empty() {
                        doc.var_type = Some(var_type.to_string());
                    }
                    let rest: Vec<&str> = rest
                        .split_whitespace()
                        .skip_while(|word| word.starts_with('$'))
                        .collect();
                    if !rest.is_empty() {
                        doc.var_description = Some(rest.join(" "));
                    }
                }
            } else if !in_tags && !content.is_empty() {
                text.push(content);
            }
        }

        if !text.is_empty() {
            doc.description = Some(text.join(" "));
        }
        doc
    }

    /// Description to use for the accessors: free text first, then the `@var` text
    pub fn summary(&self) -> Option<String> {
        self.description
            .clone()
            .or_else(|| self.var_description.clone())
    }
}

/// Split a type expression off the front of `text`
///
/// Whitespace only ends the type outside `<>`, `{}`, `()` and `[]`, so
/// `array<string, int>` and `array{id: int}` stay whole.
fn split_type(text: &str) -> (&str, &str) {
    let mut depth = 0usize;
    for (offset, c) in text.char_indices() {
        match c {
            '<' | '{' | '(' | '[' => depth += 1,
            '>' | '}' | ')' | ']' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                return (&text[..offset], text[offset..].trim_start());
            }
            _ => {}
        }
    }
    (text, "")
}

fn strip_decoration(line: &str) -> &str {
    let line = line.trim();
    let line = line.strip_prefix("/**").unwrap_or(line);
    let line = line.trim_end();
    let line = line.strip_suffix("*/").unwrap_or(line).trim();
    line.strip_prefix('*').unwrap_or(line).trim()
}

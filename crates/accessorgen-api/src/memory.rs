//! In-memory editor host
//!
//! Backs tests, demos and benchmarks with a plain vector of lines.

use crate::traits::{Editor, MessageKind, Position};

/// An [`Editor`] holding its document in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryEditor {
    language_id: String,
    lines: Vec<String>,
    selections: Vec<Position>,
    rejection: Option<String>,
    messages: Vec<(MessageKind, String)>,
    revealed_line: Option<usize>,
}

impl InMemoryEditor {
    /// Create an editor for `text`; a trailing newline yields a final empty line
    pub fn new(language_id: impl Into<String>, text: &str) -> Self {
        Self {
            language_id: language_id.into(),
            lines: split_lines(text),
            ..Default::default()
        }
    }

    pub fn with_selections(mut self, selections: Vec<Position>) -> Self {
        self.selections = selections;
        self
    }

    /// Make every subsequent edit fail with `reason`
    pub fn with_rejected_edits(mut self, reason: impl Into<String>) -> Self {
        self.rejection = Some(reason.into());
        self
    }

    /// Current document text
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Messages shown so far, oldest first
    pub fn messages(&self) -> &[(MessageKind, String)] {
        &self.messages
    }

    /// Messages of one kind, oldest first
    pub fn messages_of(&self, kind: MessageKind) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, message)| message.as_str())
            .collect()
    }

    /// Line the cursor was last moved to
    pub fn revealed_line(&self) -> Option<usize> {
        self.revealed_line
    }
}

impl Editor for InMemoryEditor {
    fn language_id(&self) -> &str {
        &self.language_id
    }

    fn lines(&self) -> Vec<String> {
        self.lines.clone()
    }

    fn selections(&self) -> Vec<Position> {
        self.selections.clone()
    }

    fn insert(&mut self, at: Position, text: &str) -> Result<(), String> {
        if let Some(reason) = &self.rejection {
            return Err(reason.clone());
        }

        let line = self
            .lines
            .get(at.line)
            .ok_or_else(|| format!("line {} is out of range", at.line))?;
        let column = if at.column == line.chars().count() {
            line.len()
        } else {
            line.char_indices()
                .nth(at.column)
                .map(|(offset, _)| offset)
                .ok_or_else(|| format!("column {} is out of range", at.column))?
        };

        let offset = self.lines[..at.line]
            .iter()
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column;
        let mut document = self.text();
        document.insert_str(offset, text);
        self.lines = split_lines(&document);
        Ok(())
    }

    fn reveal_line(&mut self, line: usize) {
        self.revealed_line = Some(line);
    }

    fn show_message(&mut self, kind: MessageKind, message: &str) {
        self.messages.push((kind, message.to_string()));
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_trailing_empty_line() {
        let editor = InMemoryEditor::new("php", "a\r\nb\n");
        assert_eq!(editor.lines(), vec!["a", "b", ""]);
    }

    #[test]
    fn test_insert_at_line_start() {
        let mut editor = InMemoryEditor::new("php", "class A\n{\n}");
        editor.insert(Position::new(2, 0), "    // x\n").unwrap();
        assert_eq!(editor.text(), "class A\n{\n    // x\n}");
    }

    #[test]
    fn test_insert_mid_line_with_multibyte_chars() {
        let mut editor = InMemoryEditor::new("php", "é$a");
        editor.insert(Position::new(0, 1), "x").unwrap();
        assert_eq!(editor.text(), "éx$a");

        editor.insert(Position::new(0, 4), "!").unwrap();
        assert_eq!(editor.text(), "éx$a!");
    }

    #[test]
    fn test_insert_out_of_range() {
        let mut editor = InMemoryEditor::new("php", "a");
        assert!(editor.insert(Position::new(3, 0), "x").is_err());
        assert!(editor.insert(Position::new(0, 5), "x").is_err());
    }

    #[test]
    fn test_rejected_edits() {
        let mut editor = InMemoryEditor::new("php", "}").with_rejected_edits("read-only");
        assert_eq!(
            editor.insert(Position::new(0, 0), "x"),
            Err("read-only".to_string())
        );
        assert_eq!(editor.text(), "}");
    }

    #[test]
    fn test_messages_and_reveal() {
        let mut editor = InMemoryEditor::new("php", "");
        editor.show_message(MessageKind::Error, "bad");
        editor.show_message(MessageKind::Info, "good");
        editor.reveal_line(4);

        assert_eq!(editor.messages_of(MessageKind::Error), vec!["bad"]);
        assert_eq!(editor.messages_of(MessageKind::Info), vec!["good"]);
        assert_eq!(editor.revealed_line(), Some(4));
    }
}

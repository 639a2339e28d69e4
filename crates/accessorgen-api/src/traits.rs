use serde::{Deserialize, Serialize};
use std::fmt;

/// A zero-based line/column position in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based line index
    pub line: usize,

    /// Zero-based column (character offset)
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Class of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Error,
    Info,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Error => "error",
            MessageKind::Info => "info",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The host editor, as seen by a generator invocation
///
/// Every operation receives the editor explicitly; nothing is read from
/// global state. Implementations are expected to apply [`Editor::insert`]
/// atomically.
///
/// # Example
/// ```rust
/// use accessorgen_api::{Editor, InMemoryEditor, MessageKind, Position};
///
/// let mut editor = InMemoryEditor::new("php", "<?php\n}\n");
/// editor.insert(Position::new(1, 0), "// generated\n").unwrap();
/// editor.show_message(MessageKind::Info, "done");
///
/// assert_eq!(editor.lines()[1], "// generated");
/// assert_eq!(editor.messages().len(), 1);
/// ```
pub trait Editor {
    /// Language identifier of the active document (lowercase, e.g. "php")
    fn language_id(&self) -> &str;

    /// Full text of the active document, one entry per line
    fn lines(&self) -> Vec<String>;

    /// Active positions of the current selections, in any order
    fn selections(&self) -> Vec<Position>;

    /// Insert text at a position
    ///
    /// # Errors
    /// Returns the host's reason when the edit is rejected.
    fn insert(&mut self, at: Position, text: &str) -> Result<(), String>;

    /// Move the cursor to a line and bring it into view
    fn reveal_line(&mut self, line: usize);

    /// Display a message to the user
    fn show_message(&mut self, kind: MessageKind, message: &str);
}

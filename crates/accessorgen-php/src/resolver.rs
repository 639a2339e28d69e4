//! Editor commands: parse every selection, render, insert once

use accessorgen_api::{
    Editor, GeneratorConfig, GeneratorError, GeneratorResult, MessageKind, Position,
    SettingsSource,
};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::parser::PropertyParser;
use crate::templates::Accessor;

/// Prefix identifying this tool in user-facing messages
pub const MESSAGE_PREFIX: &str = "phpGettersSetters";

// Icon markers such as `$(alert)  ` are stripped from messages
static RE_CODICON: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\(.+?\)\s\s").unwrap());

/// Commands exposed to the host editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    InsertGetter,
    InsertSetter,
    InsertGetterAndSetter,
}

impl Command {
    pub const ALL: [Command; 3] = [
        Command::InsertGetter,
        Command::InsertSetter,
        Command::InsertGetterAndSetter,
    ];

    /// Identifier the host registers the command under
    pub fn id(&self) -> &'static str {
        match self {
            Command::InsertGetter => "phpGettersSetters.insertGetter",
            Command::InsertSetter => "phpGettersSetters.insertSetter",
            Command::InsertGetterAndSetter => "phpGettersSetters.insertGetterAndSetter",
        }
    }

    /// Accessors generated per property, in output order
    pub fn accessors(&self) -> &'static [Accessor] {
        match self {
            Command::InsertGetter => &[Accessor::Getter],
            Command::InsertSetter => &[Accessor::Setter],
            Command::InsertGetterAndSetter => &[Accessor::Getter, Accessor::Setter],
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A command id the host does not know
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown command: {0}")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix(MESSAGE_PREFIX).and_then(|rest| rest.strip_prefix('.'));
        let name = name.unwrap_or(s);
        Command::ALL
            .into_iter()
            .find(|command| command.id().ends_with(&format!(".{name}")))
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// Generates accessors into a PHP document
#[derive(Debug, Clone)]
pub struct Resolver {
    config: GeneratorConfig,
}

impl Resolver {
    /// Language id of documents the resolver applies to
    pub const LANGUAGE_ID: &'static str = "php";

    /// Create a resolver for the editor's active document
    ///
    /// # Errors
    /// Returns [`GeneratorError::NotApplicableDocument`] when the document is not PHP.
    pub fn new(editor: &dyn Editor, config: GeneratorConfig) -> GeneratorResult<Self> {
        let language = editor.language_id();
        if language != Self::LANGUAGE_ID {
            return Err(GeneratorError::NotApplicableDocument {
                language: language.to_string(),
            });
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn insert_getter(&self, editor: &mut dyn Editor) -> GeneratorResult<()> {
        self.run(Command::InsertGetter, editor)
    }

    pub fn insert_setter(&self, editor: &mut dyn Editor) -> GeneratorResult<()> {
        self.run(Command::InsertSetter, editor)
    }

    pub fn insert_getter_and_setter(&self, editor: &mut dyn Editor) -> GeneratorResult<()> {
        self.run(Command::InsertGetterAndSetter, editor)
    }

    /// Run a command over every selection and insert the result
    ///
    /// Selections without a property are reported and skipped. Any error
    /// returned has already been shown to the user.
    #[instrument(skip_all, fields(command = command.id()))]
    pub fn run(&self, command: Command, editor: &mut dyn Editor) -> GeneratorResult<()> {
        let content = self.render(command, editor);
        let result = self.insert(&content, editor);
        if let Err(error) = &result {
            report_error(editor, error);
        }
        result
    }

    /// Render the accessors for every selection, in the order the host lists them
    pub fn render(&self, command: Command, editor: &mut dyn Editor) -> String {
        let lines = editor.lines();
        let mut content = String::new();

        for selection in editor.selections() {
            match PropertyParser::from_position(&lines, selection.line) {
                Ok(property) => {
                    for accessor in command.accessors() {
                        content.push_str(&accessor.render(&property, &self.config));
                    }
                }
                Err(error) => {
                    warn!(line = selection.line, %error, "skipping selection");
                    report_error(editor, &error);
                }
            }
        }

        content
    }

    fn insert(&self, content: &str, editor: &mut dyn Editor) -> GeneratorResult<()> {
        if content.is_empty() {
            return Err(GeneratorError::MissingTemplate);
        }

        let line =
            closing_class_line(&editor.lines()).ok_or(GeneratorError::InsertionPointNotFound)?;
        editor
            .insert(Position::new(line, 0), content)
            .map_err(GeneratorError::edit_failed)?;
        debug!(line, bytes = content.len(), "inserted accessors");

        if self.config.redirect {
            if let Some(closing) = closing_class_line(&editor.lines()) {
                editor.reveal_line(closing.saturating_sub(1));
            }
        }

        Ok(())
    }
}

/// Run a command end to end: read settings, check the document, generate
///
/// Every failure is shown to the user before it is returned.
pub fn execute(
    command: Command,
    editor: &mut dyn Editor,
    settings: &dyn SettingsSource,
) -> GeneratorResult<()> {
    let config = GeneratorConfig::from_settings(settings);
    let resolver = match Resolver::new(&*editor, config) {
        Ok(resolver) => resolver,
        Err(error) => {
            report_error(editor, &error);
            return Err(error);
        }
    };
    resolver.run(command, editor)
}

/// Last line whose trimmed text starts with a closing brace
pub fn closing_class_line<S: AsRef<str>>(lines: &[S]) -> Option<usize> {
    lines
        .iter()
        .rposition(|line| line.as_ref().trim().starts_with('}'))
}

/// Prefix a message with the tool name and message class
pub fn format_message(kind: MessageKind, message: &str) -> String {
    format!("{MESSAGE_PREFIX} {kind}: {}", RE_CODICON.replace(message, ""))
}

fn report_error(editor: &mut dyn Editor, error: &GeneratorError) {
    editor.show_message(
        MessageKind::Error,
        &format_message(MessageKind::Error, &error.to_string()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use accessorgen_api::InMemoryEditor;

    const SOURCE: &str = "<?php\n\nclass User\n{\n    private $age = 18;\n}\n";

    #[test]
    fn test_command_ids() {
        assert_eq!(Command::InsertGetter.id(), "phpGettersSetters.insertGetter");
        assert_eq!(
            Command::InsertGetterAndSetter.to_string(),
            "phpGettersSetters.insertGetterAndSetter"
        );
    }

    #[test]
    fn test_command_from_str() {
        assert_eq!(
            "phpGettersSetters.insertSetter".parse::<Command>(),
            Ok(Command::InsertSetter)
        );
        assert_eq!("insertGetter".parse::<Command>(), Ok(Command::InsertGetter));
        assert_eq!(
            "insertGetterAndSetter".parse::<Command>(),
            Ok(Command::InsertGetterAndSetter)
        );
        assert_eq!(
            "deleteGetter".parse::<Command>(),
            Err(UnknownCommand("deleteGetter".to_string()))
        );
    }

    #[test]
    fn test_command_accessors() {
        assert_eq!(Command::InsertGetter.accessors(), &[Accessor::Getter]);
        assert_eq!(
            Command::InsertGetterAndSetter.accessors(),
            &[Accessor::Getter, Accessor::Setter]
        );
    }

    #[test]
    fn test_closing_class_line() {
        let lines = ["class A", "{", "    }", "}", ""];
        assert_eq!(closing_class_line(&lines), Some(3));

        let lines = ["<?php", "$x = 1;"];
        assert_eq!(closing_class_line(&lines), None);
    }

    #[test]
    fn test_format_message() {
        assert_eq!(
            format_message(MessageKind::Error, "Missing template to render."),
            "phpGettersSetters error: Missing template to render."
        );
        assert_eq!(
            format_message(MessageKind::Info, "$(check)  Done"),
            "phpGettersSetters info: Done"
        );
    }

    #[test]
    fn test_new_rejects_other_languages() {
        let editor = InMemoryEditor::new("javascript", "class A {}");
        let result = Resolver::new(&editor, GeneratorConfig::default());

        assert!(matches!(
            result,
            Err(GeneratorError::NotApplicableDocument { language }) if language == "javascript"
        ));
    }

    #[test]
    fn test_run_inserts_before_closing_brace() {
        let mut editor =
            InMemoryEditor::new("php", SOURCE).with_selections(vec![Position::new(4, 14)]);
        let resolver = Resolver::new(&editor, GeneratorConfig::default()).unwrap();

        resolver.insert_getter(&mut editor).unwrap();

        let lines = editor.lines();
        assert_eq!(lines[5], "    /**");
        assert_eq!(lines[14], "");
        assert_eq!(lines[15], "}");
        assert_eq!(editor.revealed_line(), Some(14));
        assert!(editor.messages().is_empty());
    }

    #[test]
    fn test_run_without_redirect() {
        let mut editor =
            InMemoryEditor::new("php", SOURCE).with_selections(vec![Position::new(4, 0)]);
        let config = GeneratorConfig::default().with_redirect(false);
        let resolver = Resolver::new(&editor, config).unwrap();

        resolver.insert_setter(&mut editor).unwrap();

        assert!(editor.text().contains("public function setAge($age)"));
        assert_eq!(editor.revealed_line(), None);
    }

    #[test]
    fn test_run_reports_missing_template() {
        let mut editor =
            InMemoryEditor::new("php", SOURCE).with_selections(vec![Position::new(1, 0)]);
        let resolver = Resolver::new(&editor, GeneratorConfig::default()).unwrap();

        let result = resolver.insert_getter(&mut editor);

        assert_eq!(result, Err(GeneratorError::MissingTemplate));
        assert_eq!(
            editor.messages_of(MessageKind::Error),
            vec![
                "phpGettersSetters error: No property found. Please select a property to use this extension.",
                "phpGettersSetters error: Missing template to render.",
            ]
        );
        assert_eq!(editor.text(), SOURCE);
    }

    #[test]
    fn test_run_without_closing_brace() {
        let mut editor = InMemoryEditor::new("php", "<?php\nprivate $age;\n")
            .with_selections(vec![Position::new(1, 0)]);
        let resolver = Resolver::new(&editor, GeneratorConfig::default()).unwrap();

        assert_eq!(
            resolver.insert_getter(&mut editor),
            Err(GeneratorError::InsertionPointNotFound)
        );
        assert_eq!(
            editor.messages_of(MessageKind::Error),
            vec!["phpGettersSetters error: Unable to detect insert line for template."]
        );
    }

    #[test]
    fn test_run_reports_rejected_edit() {
        let mut editor = InMemoryEditor::new("php", SOURCE)
            .with_selections(vec![Position::new(4, 0)])
            .with_rejected_edits("document changed");
        let resolver = Resolver::new(&editor, GeneratorConfig::default()).unwrap();

        let result = resolver.insert_getter_and_setter(&mut editor);

        assert_eq!(result, Err(GeneratorError::edit_failed("document changed")));
        assert_eq!(
            editor.messages_of(MessageKind::Error),
            vec!["phpGettersSetters error: Error generating functions: document changed"]
        );
        assert_eq!(editor.revealed_line(), None);
    }

    #[test]
    fn test_execute_reports_wrong_language() {
        let mut editor = InMemoryEditor::new("plaintext", SOURCE)
            .with_selections(vec![Position::new(4, 0)]);
        let settings = serde_json::Map::new();

        let result = execute(Command::InsertGetter, &mut editor, &settings);

        assert!(matches!(
            result,
            Err(GeneratorError::NotApplicableDocument { .. })
        ));
        assert_eq!(
            editor.messages_of(MessageKind::Error),
            vec!["phpGettersSetters error: Not a PHP file."]
        );
    }
}

//! # accessorgen-php
//!
//! PHP getter/setter generator - turns a property declaration into documented accessors.
//!
//! ## Features
//!
//! - Locate the property declaration at or above each cursor
//! - Recover name, type hint, doc type and description (including a preceding docblock)
//! - Render getter and setter stubs honouring the configured PHPDoc tag spacing
//! - Insert everything before the closing brace of the class, one edit per invocation
//!
//! ## Quick Start
//!
//! ```rust
//! use accessorgen_php::{Command, Resolver};
//! use accessorgen_api::{GeneratorConfig, InMemoryEditor, Position};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut editor = InMemoryEditor::new("php", "<?php\nclass User\n{\n    private $age = 18;\n}\n")
//!     .with_selections(vec![Position::new(3, 14)]);
//!
//! let resolver = Resolver::new(&editor, GeneratorConfig::default())?;
//! resolver.run(Command::InsertGetter, &mut editor)?;
//!
//! assert!(editor.text().contains("public function getAge()"));
//! # Ok(())
//! # }
//! ```

mod docblock;
mod parser;
mod resolver;
mod templates;

// Re-export API types for convenience
pub use accessorgen_api::{
    Editor, GeneratorConfig, GeneratorError, GeneratorResult, MessageKind, Position, Property,
    SettingsSource,
};

pub use docblock::DocBlock;
pub use parser::{
    infer_default_type, is_pseudo_type, scan_declaration, Declaration, PropertyParser, MODIFIERS,
    PSEUDO_TYPES,
};
pub use resolver::{
    closing_class_line, execute, format_message, Command, Resolver, UnknownCommand, MESSAGE_PREFIX,
};
pub use templates::{
    render_getter, render_setter, Accessor, FALLBACK_TYPE, GETTER_TEMPLATE, SETTER_TEMPLATE,
};

//! accessorgen API
//!
//! Shared types for building accessor generators on top of an editor host.
//!
//! This crate provides the foundation the language crates build on. It defines:
//!
//! - **Editor trait**: The boundary to the host editor (document, selections, edits, messages)
//! - **Property entity**: A parsed property declaration, without any rendering fallbacks
//! - **Configuration**: The recognised user settings and how they are read
//! - **Error handling**: Every user-facing failure of a generator invocation
//!
//! # Example
//!
//! ```rust
//! use accessorgen_api::{Editor, InMemoryEditor, Position};
//!
//! let editor = InMemoryEditor::new("php", "<?php\nclass User\n{\n    private $age;\n}\n")
//!     .with_selections(vec![Position::new(3, 14)]);
//!
//! assert_eq!(editor.language_id(), "php");
//! assert_eq!(editor.lines()[3], "    private $age;");
//! ```

pub mod config;
pub mod entities;
pub mod errors;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use config::{spaces, GeneratorConfig, SettingsSource, MAX_SPACES};
pub use entities::Property;
pub use errors::{GeneratorError, GeneratorResult};
pub use memory::InMemoryEditor;
pub use traits::{Editor, MessageKind, Position};

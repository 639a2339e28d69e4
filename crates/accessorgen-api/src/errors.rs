use thiserror::Error;

/// Errors that can occur while generating accessors
///
/// The display text of every variant is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// The active document is not a PHP source
    #[error("Not a PHP file.")]
    NotApplicableDocument {
        /// Language id reported by the host
        language: String,
    },

    /// No property declaration at or above the selection
    #[error("No property found. Please select a property to use this extension.")]
    PropertyNotFound {
        /// Line the upward scan started from
        line: usize,
    },

    /// Nothing was rendered for the invocation
    #[error("Missing template to render.")]
    MissingTemplate,

    /// No class-closing line to insert before
    #[error("Unable to detect insert line for template.")]
    InsertionPointNotFound,

    /// The host rejected the edit
    #[error("Error generating functions: {reason}")]
    EditApplicationFailed {
        /// Reason reported by the host
        reason: String,
    },

    /// Settings could not be read
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GeneratorError {
    /// Create an EditApplicationFailed error from the host's reason
    pub fn edit_failed(reason: impl Into<String>) -> Self {
        GeneratorError::EditApplicationFailed {
            reason: reason.into(),
        }
    }
}

/// Result type for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

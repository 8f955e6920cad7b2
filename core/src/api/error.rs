//! Public error types for the kata API.
//!
//! Script errors are wrapped together with the script source so callers can
//! render them against the text that produced them.

use std::fmt;

use crate::script::{ScriptError, Span};

/// Public error type for all kata operations.
#[derive(Debug)]
pub enum Error {
    /// The script could not be read (missing file, unreadable stdin).
    Input(String),

    /// The script was rejected or failed while running.
    Script {
        error: ScriptError,
        source: String,
        filename: Option<String>,
    },

    /// The outputs could not be encoded.
    Encode(serde_json::Error),
}

impl Error {
    /// Set the filename for this error.
    pub fn with_filename(self, filename: impl Into<String>) -> Self {
        match self {
            Error::Script { error, source, .. } => Error::Script {
                error,
                source,
                filename: Some(filename.into()),
            },
            other => other,
        }
    }

    /// Set the filename if provided, otherwise return self unchanged.
    pub fn with_filename_opt(self, filename: Option<&str>) -> Self {
        match filename {
            Some(f) => self.with_filename(f),
            None => self,
        }
    }

    /// Get the filename associated with this error, if any.
    pub fn filename(&self) -> Option<&str> {
        match self {
            Error::Script { filename, .. } => filename.as_deref(),
            _ => None,
        }
    }

    /// Builds the diagnostic for a script error; other errors have none.
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        match self {
            Error::Script { error, .. } => Some(error.to_diagnostic()),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Input(msg) => write!(f, "{}", msg),
            Error::Script { error, .. } => write!(f, "{}", error),
            Error::Encode(err) => write!(f, "Failed to encode outputs: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Input(_) => None,
            Error::Script { error, .. } => std::error::Error::source(error),
            Error::Encode(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Encode(err)
    }
}

/// A script error message with its source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the problem, when it is known.
    pub span: Option<Span>,

    /// Text attached to the highlighted span.
    pub label: String,

    /// Help messages suggesting how to fix the issue.
    pub help: Vec<String>,

    /// Error code (e.g., "S004") for documentation lookup.
    pub code: Option<String>,
}

impl ScriptError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        let message = self.to_string();
        let (label, help) = match self {
            ScriptError::Json { source, .. } => (source.to_string(), vec![]),
            ScriptError::NotATokenList => (
                message.clone(),
                vec![r#"a script looks like ["command", 1, "command", 2]"#.to_string()],
            ),
            ScriptError::InvalidToken { .. } => (
                "not a string or a 64-bit integer".to_string(),
                vec![],
            ),
            ScriptError::UnknownCommand { known, .. } => (
                "unknown command".to_string(),
                vec![format!("expected one of: {}", known.join(", "))],
            ),
            ScriptError::UnexpectedArgument { .. } => (
                "this argument does not belong to any command".to_string(),
                vec![],
            ),
            ScriptError::MissingArgument { command, .. } => (
                format!("`{command}` needs another integer here"),
                vec![],
            ),
            ScriptError::InvalidArgument { .. } => (
                "indices start at 0".to_string(),
                vec![],
            ),
            ScriptError::MissingConstructor { constructor, .. } => (
                "expected the constructor here".to_string(),
                vec![format!("begin the script with `{constructor}`")],
            ),
            ScriptError::MisplacedConstructor { .. } => (
                "the structure already exists".to_string(),
                vec![],
            ),
            ScriptError::Step { source, .. } => (source.to_string(), vec![]),
        };

        Diagnostic {
            message,
            span: self.span().cloned(),
            label,
            help,
            code: Some(self.code().to_string()),
        }
    }

    /// Stable code identifying the kind of error.
    pub fn code(&self) -> &'static str {
        match self {
            ScriptError::Json { .. } => "S001",
            ScriptError::NotATokenList => "S002",
            ScriptError::InvalidToken { .. } => "S003",
            ScriptError::UnknownCommand { .. } => "S004",
            ScriptError::UnexpectedArgument { .. } => "S005",
            ScriptError::MissingArgument { .. } => "S006",
            ScriptError::InvalidArgument { .. } => "S007",
            ScriptError::MissingConstructor { .. } => "S008",
            ScriptError::MisplacedConstructor { .. } => "S009",
            ScriptError::Step { .. } => "R001",
        }
    }
}

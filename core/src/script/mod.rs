//! Operation scripts.
//!
//! A script is a flat JSON array where each string names a command and the
//! integers that follow it are the command's arguments:
//!
//! ```json
//! ["Array", 1, "pushback", 1, "getCapacity", "pushback", 2, "getCapacity"]
//! ```
//!
//! Running a script records one [`Output`] per command. The outputs of the
//! script above are `[null, null, 1, null, 2]`.

pub mod array;
pub mod list;
mod token;

use core::fmt;
use core::ops::Range;

use kata_dyn_array::ArrayError;
use serde::Serialize;

pub use array::{ArrayOp, run_array};
pub use list::{ListOp, run_list};
pub use token::{Token, TokenKind, tokenize};

/// Byte range of a token or command in the script source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span(pub Range<usize>);

impl Span {
    /// Smallest span covering both `self` and `other`.
    pub fn join(&self, other: &Span) -> Span {
        Span(self.0.start.min(other.0.start)..self.0.end.max(other.0.end))
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span(range)
    }
}

/// The value a single command produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Null,
    Int(i64),
    Bool(bool),
    List(Vec<i64>),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Null => write!(f, "null"),
            Output::Int(n) => write!(f, "{n}"),
            Output::Bool(b) => write!(f, "{b}"),
            Output::List(values) => {
                write!(f, "[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// One executed command and what it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The command as written, e.g. `set(1, 3)`.
    pub op: String,
    pub output: Output,
}

/// The result of running a script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    pub steps: Vec<Step>,
}

impl Trace {
    pub(crate) fn record(&mut self, op: impl fmt::Display, output: Output) {
        self.steps.push(Step {
            op: op.to_string(),
            output,
        });
    }

    pub fn outputs(&self) -> Vec<&Output> {
        self.steps.iter().map(|step| &step.output).collect()
    }

    /// Encodes the outputs as a JSON array.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        let outputs = self.outputs();
        if pretty {
            serde_json::to_string_pretty(&outputs)
        } else {
            serde_json::to_string(&outputs)
        }
    }
}

/// Errors found while reading or running a script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("invalid JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
        span: Option<Span>,
    },

    #[error("a script must be a JSON array of command names and integers")]
    NotATokenList,

    #[error("expected a command name or an integer")]
    InvalidToken { span: Span },

    #[error("unknown command `{name}`")]
    UnknownCommand {
        name: String,
        known: &'static [&'static str],
        span: Span,
    },

    #[error("unexpected argument `{value}`")]
    UnexpectedArgument { value: i64, span: Span },

    #[error("`{command}` is missing an integer argument")]
    MissingArgument { command: &'static str, span: Span },

    #[error("`{command}` argument {value} must not be negative")]
    InvalidArgument {
        command: &'static str,
        value: i64,
        span: Span,
    },

    #[error("the script must start with `{constructor}`")]
    MissingConstructor {
        constructor: &'static str,
        span: Option<Span>,
    },

    #[error("`{constructor}` may only appear as the first command")]
    MisplacedConstructor {
        constructor: &'static str,
        span: Span,
    },

    #[error("step {step} `{op}` failed")]
    Step {
        step: usize,
        op: String,
        span: Span,
        #[source]
        source: ArrayError,
    },
}

impl ScriptError {
    /// Location in the script source that the error refers to, if known.
    pub fn span(&self) -> Option<&Span> {
        match self {
            ScriptError::Json { span, .. } | ScriptError::MissingConstructor { span, .. } => {
                span.as_ref()
            }
            ScriptError::NotATokenList => None,
            ScriptError::InvalidToken { span }
            | ScriptError::UnknownCommand { span, .. }
            | ScriptError::UnexpectedArgument { span, .. }
            | ScriptError::MissingArgument { span, .. }
            | ScriptError::InvalidArgument { span, .. }
            | ScriptError::MisplacedConstructor { span, .. }
            | ScriptError::Step { span, .. } => Some(span),
        }
    }
}

/// A decoded command together with the source it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub op: T,
    pub span: Span,
}

/// Walks a token list, pulling out commands and their integer arguments.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Next command name, or `None` at the end of the script.
    pub(crate) fn command(&mut self) -> Result<Option<(&'a str, Span)>, ScriptError> {
        let Some(token) = self.tokens.get(self.pos) else {
            return Ok(None);
        };
        self.pos += 1;
        match &token.kind {
            TokenKind::Name(name) => Ok(Some((name.as_str(), token.span.clone()))),
            TokenKind::Int(value) => Err(ScriptError::UnexpectedArgument {
                value: *value,
                span: token.span.clone(),
            }),
        }
    }

    /// Next integer argument of `command`, widening `span` to cover it.
    pub(crate) fn int(
        &mut self,
        command: &'static str,
        span: &mut Span,
    ) -> Result<i64, ScriptError> {
        match self.tokens.get(self.pos) {
            Some(Token {
                kind: TokenKind::Int(value),
                span: arg_span,
            }) => {
                self.pos += 1;
                *span = span.join(arg_span);
                Ok(*value)
            }
            _ => Err(ScriptError::MissingArgument {
                command,
                span: span.clone(),
            }),
        }
    }

    /// Next argument of `command`, which must fit in a `usize`.
    pub(crate) fn index(
        &mut self,
        command: &'static str,
        span: &mut Span,
    ) -> Result<usize, ScriptError> {
        let value = self.int(command, span)?;
        usize::try_from(value).map_err(|_| ScriptError::InvalidArgument {
            command,
            value,
            span: span.clone(),
        })
    }
}

/// Formats `name(arg, ...)`, or just `name` with no arguments.
pub(crate) fn write_call(f: &mut fmt::Formatter<'_>, name: &str, args: &[i64]) -> fmt::Result {
    write!(f, "{name}")?;
    if args.is_empty() {
        return Ok(());
    }
    write!(f, "(")?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{arg}")?;
    }
    write!(f, ")")
}

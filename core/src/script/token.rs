use serde::Deserialize;
use serde_json::value::RawValue;

use super::{ScriptError, Span};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Name(String),
    Int(i64),
}

/// A script element and where it sits in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawToken {
    Name(String),
    Int(i64),
}

/// Splits a JSON script into tokens, keeping the byte span of each element.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ScriptError> {
    let elements: Vec<&RawValue> = serde_json::from_str(source).map_err(|err| {
        if err.is_data() {
            ScriptError::NotATokenList
        } else {
            let span = error_offset(source, err.line(), err.column()).map(|at| Span(at..at));
            ScriptError::Json { source: err, span }
        }
    })?;

    elements
        .into_iter()
        .map(|raw| {
            let text = raw.get();
            let start = text.as_ptr() as usize - source.as_ptr() as usize;
            let span = Span(start..start + text.len());
            let kind = match serde_json::from_str::<RawToken>(text) {
                Ok(RawToken::Name(name)) => TokenKind::Name(name),
                Ok(RawToken::Int(value)) => TokenKind::Int(value),
                Err(_) => return Err(ScriptError::InvalidToken { span }),
            };
            Ok(Token { kind, span })
        })
        .collect()
}

/// Byte offset of a 1-based line and column reported by `serde_json`.
fn error_offset(source: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(source.len()))
}

//! Scripts over [`LinkedList`].

use core::fmt;

use kata_linked_list::LinkedList;

use super::{Cursor, Output, ScriptError, Spanned, Token, Trace, tokenize, write_call};

const CONSTRUCTOR: &str = "LinkedList";

/// Command names accepted in linked-list scripts.
pub const COMMANDS: &[&str] = &[
    "LinkedList",
    "get",
    "insertHead",
    "insertTail",
    "remove",
    "getValues",
];

/// Rendered by `get` when the index is past the end of the list.
pub const NOT_FOUND: i64 = -1;

/// A command of a linked-list script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOp {
    New,
    Get(usize),
    InsertHead(i64),
    InsertTail(i64),
    Remove(usize),
    GetValues,
}

impl fmt::Display for ListOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ListOp::New => write_call(f, CONSTRUCTOR, &[]),
            ListOp::Get(i) => write_call(f, "get", &[i as i64]),
            ListOp::InsertHead(n) => write_call(f, "insertHead", &[n]),
            ListOp::InsertTail(n) => write_call(f, "insertTail", &[n]),
            ListOp::Remove(i) => write_call(f, "remove", &[i as i64]),
            ListOp::GetValues => write_call(f, "getValues", &[]),
        }
    }
}

impl ListOp {
    /// Decodes a token list into linked-list commands.
    pub fn decode(tokens: &[Token]) -> Result<Vec<Spanned<ListOp>>, ScriptError> {
        let mut cursor = Cursor::new(tokens);
        let mut ops = Vec::new();
        while let Some((name, mut span)) = cursor.command()? {
            let op = match name {
                "LinkedList" => ListOp::New,
                "get" => ListOp::Get(cursor.index("get", &mut span)?),
                "insertHead" => ListOp::InsertHead(cursor.int("insertHead", &mut span)?),
                "insertTail" => ListOp::InsertTail(cursor.int("insertTail", &mut span)?),
                "remove" => ListOp::Remove(cursor.index("remove", &mut span)?),
                "getValues" => ListOp::GetValues,
                _ => {
                    return Err(ScriptError::UnknownCommand {
                        name: name.to_string(),
                        known: COMMANDS,
                        span,
                    });
                }
            };
            ops.push(Spanned { op, span });
        }
        Ok(ops)
    }
}

/// Parses and runs a linked-list script.
///
/// A leading `LinkedList` command is optional. Commands never fail at run
/// time: `get` past the end yields `-1` and `remove` past the end yields
/// `false`.
pub fn run_list(source: &str) -> Result<Trace, ScriptError> {
    let tokens = tokenize(source)?;
    let ops = ListOp::decode(&tokens)?;
    execute(&ops)
}

fn execute(ops: &[Spanned<ListOp>]) -> Result<Trace, ScriptError> {
    let mut list = LinkedList::new();
    let mut trace = Trace::default();

    for (i, Spanned { op, span }) in ops.iter().enumerate() {
        tracing::debug!(step = i + 1, op = %op, "running list step");
        let output = match *op {
            ListOp::New if i == 0 => Output::Null,
            ListOp::New => {
                return Err(ScriptError::MisplacedConstructor {
                    constructor: CONSTRUCTOR,
                    span: span.clone(),
                });
            }
            ListOp::Get(index) => Output::Int(list.get(index).copied().unwrap_or(NOT_FOUND)),
            ListOp::InsertHead(value) => {
                list.insert_head(value);
                Output::Null
            }
            ListOp::InsertTail(value) => {
                list.insert_tail(value);
                Output::Null
            }
            ListOp::Remove(index) => Output::Bool(list.remove(index).is_some()),
            ListOp::GetValues => Output::List(list.values()),
        };
        trace.record(op, output);
    }

    Ok(trace)
}

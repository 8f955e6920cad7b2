//! Scripts over [`DynArray`].

use core::fmt;

use kata_dyn_array::{ArrayError, DynArray};

use super::{Cursor, Output, ScriptError, Span, Spanned, Trace, Token, tokenize, write_call};

const CONSTRUCTOR: &str = "Array";

/// Command names accepted in array scripts.
pub const COMMANDS: &[&str] = &[
    "Array",
    "getSize",
    "getCapacity",
    "get",
    "set",
    "pushback",
    "popback",
    "resize",
];

/// Largest buffer a script may ask for, directly or by growing.
pub const MAX_CAPACITY: usize = 1 << 20;

/// A command of an array script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayOp {
    /// `Array capacity`
    New(i64),
    /// `getSize`
    GetSize,
    /// `getCapacity`
    GetCapacity,
    /// `get i`
    Get(usize),
    /// `set i n`
    Set(usize, i64),
    /// `pushback n`
    PushBack(i64),
    /// `popback`
    PopBack,
    /// `resize`
    Resize,
}

impl fmt::Display for ArrayOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ArrayOp::New(capacity) => write_call(f, CONSTRUCTOR, &[capacity]),
            ArrayOp::GetSize => write_call(f, "getSize", &[]),
            ArrayOp::GetCapacity => write_call(f, "getCapacity", &[]),
            ArrayOp::Get(i) => write_call(f, "get", &[i as i64]),
            ArrayOp::Set(i, n) => write_call(f, "set", &[i as i64, n]),
            ArrayOp::PushBack(n) => write_call(f, "pushback", &[n]),
            ArrayOp::PopBack => write_call(f, "popback", &[]),
            ArrayOp::Resize => write_call(f, "resize", &[]),
        }
    }
}

impl ArrayOp {
    /// Decodes a token list into array commands.
    pub fn decode(tokens: &[Token]) -> Result<Vec<Spanned<ArrayOp>>, ScriptError> {
        let mut cursor = Cursor::new(tokens);
        let mut ops = Vec::new();
        while let Some((name, mut span)) = cursor.command()? {
            let op = match name {
                "Array" => ArrayOp::New(cursor.int(CONSTRUCTOR, &mut span)?),
                "getSize" => ArrayOp::GetSize,
                "getCapacity" => ArrayOp::GetCapacity,
                "get" => ArrayOp::Get(cursor.index("get", &mut span)?),
                "set" => {
                    let i = cursor.index("set", &mut span)?;
                    ArrayOp::Set(i, cursor.int("set", &mut span)?)
                }
                "pushback" => ArrayOp::PushBack(cursor.int("pushback", &mut span)?),
                "popback" => ArrayOp::PopBack,
                "resize" => ArrayOp::Resize,
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

/// Parses and runs an array script, returning one output per command.
///
/// # Example
///
/// ```
/// use kata_core::script::run_array;
///
/// let trace = run_array(r#"["Array", 1, "getSize", "getCapacity"]"#).unwrap();
/// assert_eq!(trace.to_json(false).unwrap(), "[null,0,1]");
/// ```
pub fn run_array(source: &str) -> Result<Trace, ScriptError> {
    let tokens = tokenize(source)?;
    let ops = ArrayOp::decode(&tokens)?;
    execute(&ops)
}

fn execute(ops: &[Spanned<ArrayOp>]) -> Result<Trace, ScriptError> {
    let Some((
        Spanned {
            op: ArrayOp::New(capacity),
            span: new_span,
        },
        rest,
    )) = ops.split_first()
    else {
        return Err(ScriptError::MissingConstructor {
            constructor: CONSTRUCTOR,
            span: ops.first().map(|spanned| spanned.span.clone()),
        });
    };

    let fail = |step: usize, op: &ArrayOp, span: &Span, source: ArrayError| ScriptError::Step {
        step,
        op: op.to_string(),
        span: span.clone(),
        source,
    };

    let new_op = ArrayOp::New(*capacity);
    let mut array = usize::try_from(*capacity)
        .map_err(|_| ArrayError::InvalidCapacity)
        .and_then(within_limit)
        .and_then(DynArray::new)
        .map_err(|err| fail(1, &new_op, new_span, err))?;

    let mut trace = Trace::default();
    trace.record(new_op, Output::Null);

    for (i, Spanned { op, span }) in rest.iter().enumerate() {
        let step = i + 2;
        tracing::debug!(step, op = %op, "running array step");
        let output = match *op {
            ArrayOp::New(_) => {
                return Err(ScriptError::MisplacedConstructor {
                    constructor: CONSTRUCTOR,
                    span: span.clone(),
                });
            }
            ArrayOp::GetSize => Output::Int(array.len() as i64),
            ArrayOp::GetCapacity => Output::Int(array.capacity() as i64),
            ArrayOp::Get(index) => array
                .get(index)
                .map(|&value| Output::Int(value))
                .map_err(|err| fail(step, op, span, err))?,
            ArrayOp::Set(index, value) => {
                array
                    .set(index, value)
                    .map_err(|err| fail(step, op, span, err))?;
                Output::Null
            }
            ArrayOp::PushBack(value) => {
                if array.len() == array.capacity() {
                    grown(&array).map_err(|err| fail(step, op, span, err))?;
                }
                array
                    .push_back(value)
                    .map_err(|err| fail(step, op, span, err))?;
                Output::Null
            }
            ArrayOp::PopBack => array
                .pop_back()
                .map(Output::Int)
                .map_err(|err| fail(step, op, span, err))?,
            ArrayOp::Resize => {
                grown(&array)
                    .and_then(|_| array.resize())
                    .map_err(|err| fail(step, op, span, err))?;
                Output::Null
            }
        };
        trace.record(op, output);
    }

    Ok(trace)
}

fn within_limit(capacity: usize) -> Result<usize, ArrayError> {
    if capacity > MAX_CAPACITY {
        return Err(ArrayError::CapacityOverflow {
            requested: capacity,
        });
    }
    Ok(capacity)
}

/// Capacity after the next doubling, if it stays within [`MAX_CAPACITY`].
fn grown(array: &DynArray<i64>) -> Result<usize, ArrayError> {
    within_limit(array.capacity().saturating_mul(2))
}

//! Public API for running kata scripts.
//!
//! # Example
//!
//! ```
//! use kata_core::api::{ScriptKind, run_script};
//!
//! let trace = run_script(ScriptKind::Array, r#"["Array", 1, "pushback", 1, "getCapacity"]"#)
//!     .unwrap();
//! assert_eq!(trace.to_json(false).unwrap(), "[null,null,1]");
//! ```

pub mod error;

pub use error::{Diagnostic, Error};

use crate::script::{self, Trace};

/// Which data structure a script drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    Array,
    List,
}

impl ScriptKind {
    /// Command names accepted by scripts of this kind.
    pub fn commands(self) -> &'static [&'static str] {
        match self {
            ScriptKind::Array => script::array::COMMANDS,
            ScriptKind::List => script::list::COMMANDS,
        }
    }
}

/// Runs a script, keeping the source attached to any error.
pub fn run_script(kind: ScriptKind, source: &str) -> Result<Trace, Error> {
    let result = match kind {
        ScriptKind::Array => script::run_array(source),
        ScriptKind::List => script::run_list(source),
    };
    result.map_err(|error| Error::Script {
        error,
        source: source.to_string(),
        filename: None,
    })
}

/// The demonstration scripts replayed by `kata demo`.
pub mod demos {
    /// Grows an array from capacity 1, then reads, overwrites and pops.
    pub const ARRAY: &str = r#"["Array", 1, "getSize", "getCapacity", "pushback", 1, "getSize", "getCapacity", "pushback", 2, "getSize", "getCapacity", "get", 1, "set", 1, 3, "get", 1, "popback", "getSize", "getCapacity"]"#;

    /// Builds `[1, 2, 3]`, then removes the head and the tail.
    pub const LIST: &str = r#"["LinkedList", "insertHead", 1, "insertTail", 2, "insertTail", 3, "getValues", "remove", 0, "getValues", "remove", 1, "getValues"]"#;
}

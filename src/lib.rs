//! kata - classic data-structure and algorithm exercises
//!
//! # Overview
//!
//! The workspace implements three small, self-contained exercises:
//!
//! - [`DynArray`]: a resizable array over a fixed buffer that doubles when full
//! - [`LinkedList`]: a singly linked list whose nodes live in an arena
//! - [`is_prime`]: trial-division primality testing
//!
//! The data structures can also be driven by operation scripts, flat JSON
//! arrays of command names and integer arguments.
//!
//! # Quick Start
//!
//! ```
//! use kata::{DynArray, ScriptKind, run_script};
//!
//! let mut array = DynArray::new(1).unwrap();
//! array.push_back(1).unwrap();
//! array.push_back(2).unwrap();
//! assert_eq!(array.capacity(), 2);
//! assert_eq!(array.pop_back(), Ok(2));
//!
//! let trace = run_script(ScriptKind::Array, r#"["Array", 1, "getSize", "getCapacity"]"#).unwrap();
//! assert_eq!(trace.to_json(false).unwrap(), "[null,0,1]");
//! ```
//!
//! # Errors
//!
//! Script errors carry the byte span of the offending command. Use
//! [`render_error_to`] to print them against the script source:
//!
//! ```
//! use kata::{RenderConfig, ScriptKind, render_error_to, run_script};
//!
//! let err = run_script(ScriptKind::Array, r#"["Array", 1, "popback"]"#).unwrap_err();
//! let mut buf = Vec::new();
//! let config = RenderConfig { color: false, ..Default::default() };
//! render_error_to(&err, &mut buf, &config).unwrap();
//! assert!(String::from_utf8_lossy(&buf).contains("cannot pop from an empty array"));
//! ```

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

// Re-export public API from kata_core
pub use kata_core::api::{Diagnostic, Error, ScriptKind, demos, run_script};
pub use kata_core::prime::{Primality, is_prime};
pub use kata_core::script::{self, Output, ScriptError, Step, Trace};

// Re-export the data structures
pub use kata_dyn_array::{ArrayError, DynArray, Precondition};
pub use kata_linked_list::{LinkedList, NodeId};

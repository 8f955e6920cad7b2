//! Core of the kata exercises: primality testing and the operation-script
//! runners that drive the data structures in `kata-dyn-array` and
//! `kata-linked-list`.

pub mod api;
pub mod prime;
pub mod script;

pub use kata_dyn_array::{ArrayError, DynArray, Precondition};
pub use kata_linked_list::LinkedList;

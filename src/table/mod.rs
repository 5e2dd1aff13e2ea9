//! The transition table.
//!
//! A table is an ordered list of `(state, event, handler)` rows, built once
//! and read-only afterwards. Lookup is a linear scan in declaration order and
//! the first matching row wins; integrators may rely on that to shadow rows.

mod definition;
mod transition;

pub use definition::Definition;
pub use transition::{Handler, Transition};

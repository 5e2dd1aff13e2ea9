//! Core symbol types.
//!
//! This module contains the vocabulary every machine is written in:
//! - The `Symbol` trait for state and event domains
//! - The `Code` encoding the engine dispatches on
//!
//! Nothing in this module allocates or has side effects.

mod code;
mod symbol;

pub use code::Code;
pub use symbol::Symbol;

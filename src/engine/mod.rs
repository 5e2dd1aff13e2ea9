//! The dispatch engine.
//!
//! A [`Machine`] pairs a shared [`Definition`](crate::table::Definition) with
//! one current-state cell and advances it one event at a time through
//! [`Machine::step`]. Stepping is synchronous and allocation-free: it scans
//! the table, runs at most one handler, and reports a [`DispatchError`] for
//! every outcome other than success.
//!
//! # Outcomes
//!
//! | Result                          | [`Status`] | State cell |
//! |---------------------------------|------------|------------|
//! | `Ok(next)`                      | `0`        | `next`     |
//! | `Err(InvalidState)`             | `-1`       | unchanged  |
//! | `Err(InvalidEvent)`             | `-2`       | unchanged  |
//! | `Err(NoTransition)`             | `-3`       | unchanged  |
//! | `Err(NullHandler)`              | `-4`       | unchanged  |

mod error;
mod machine;

pub use error::{DispatchError, Status};
pub use machine::Machine;

//! Builder API for machine construction.
//!
//! Definitions are only produced here, after a validation pass that checks
//! the machine name, both symbol domains, and (optionally) duplicate keys.

pub mod error;
pub mod machine;
pub mod macros;
pub mod validate;

pub use error::{BuildError, TableViolation};
pub use machine::MachineBuilder;

use crate::core::{Code, Symbol};

/// Handler that ignores its payloads and moves to `state`.
///
/// # Example
///
/// ```
/// use fsm_table::builder::{goto, MachineBuilder};
/// use fsm_table::symbol_enum;
///
/// symbol_enum! {
///     enum Gate { Closed, Open }
/// }
///
/// symbol_enum! {
///     enum Signal { Raise, Lower }
/// }
///
/// let mut gate = MachineBuilder::<Gate, Signal>::new("gate")
///     .on(Gate::Closed, Signal::Raise, goto(Gate::Open))
///     .on(Gate::Open, Signal::Lower, goto(Gate::Closed))
///     .build()
///     .unwrap();
///
/// gate.fire(Signal::Raise).unwrap();
/// assert!(gate.is_in(Gate::Open));
/// ```
pub fn goto<S, I, O>(state: S) -> impl Fn(&I, &mut O) -> Code<S> + Send + Sync + 'static
where
    S: Symbol,
    I: 'static,
    O: 'static,
{
    let code = Code::from(state);
    move |_, _| code
}

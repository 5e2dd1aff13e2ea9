//! fsm-table: a data-driven finite state machine dispatch engine
//!
//! A machine is declared as two symbol domains (states and events) and an
//! ordered transition table of `(state, event, handler)` rows. It is then
//! driven one event at a time with [`Machine::step`]. The engine validates the
//! event and the current state, picks the first matching row, runs its
//! handler, and commits whatever state the handler returns.
//!
//! # Core Concepts
//!
//! - **Symbols**: states and events are fieldless enums implementing `Symbol`
//! - **Codes**: the 8-bit encoding the engine dispatches on, able to carry
//!   out-of-range values so they can be detected
//! - **Definitions**: immutable, validated transition tables
//! - **Machines**: a definition plus one current-state cell
//!
//! The engine does no I/O, schedules nothing, and does not allocate while
//! dispatching. Handlers own all side effects.
//!
//! # Example
//!
//! ```rust
//! use fsm_table::builder::MachineBuilder;
//! use fsm_table::engine::{DispatchError, Status};
//! use fsm_table::symbol_enum;
//!
//! symbol_enum! {
//!     enum Led { On, Off, Blink }
//! }
//!
//! symbol_enum! {
//!     enum LedEvent { TurnOn, TurnOff, SetToggle, Tick }
//! }
//!
//! let mut led = MachineBuilder::<Led, LedEvent, (), bool>::new("led")
//!     .on(Led::On, LedEvent::TurnOff, |_, lit| {
//!         *lit = false;
//!         Led::Off.into()
//!     })
//!     .on(Led::Off, LedEvent::SetToggle, |_, _| Led::Blink.into())
//!     .on(Led::Blink, LedEvent::Tick, |_, lit| {
//!         *lit = !*lit;
//!         Led::Blink.into()
//!     })
//!     .build()
//!     .unwrap();
//!
//! let mut lit = true;
//! led.step(LedEvent::TurnOff, &(), &mut lit).unwrap();
//! led.step(LedEvent::SetToggle, &(), &mut lit).unwrap();
//! led.step(LedEvent::Tick, &(), &mut lit).unwrap();
//! assert!(led.is_in(Led::Blink));
//! assert!(lit);
//!
//! let result = led.step(LedEvent::TurnOff, &(), &mut lit);
//! assert_eq!(Status::of(&result), Status::NoTransition);
//! assert!(matches!(result, Err(DispatchError::NoTransition { .. })));
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod engine;
pub mod table;

// Re-export commonly used types
pub use builder::{goto, BuildError, MachineBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use core::{Code, Symbol};
pub use engine::{DispatchError, Machine, Status};
pub use table::{Definition, Handler, Transition};

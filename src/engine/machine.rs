//! Machine instances and the dispatch step.

use crate::core::{Code, Symbol};
use crate::engine::error::DispatchError;
use crate::table::Definition;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// A live machine: a shared definition plus one current-state cell.
///
/// Instances start in the first declared state. The state cell only changes
/// when [`step`](Machine::step) invokes a handler; every failed step leaves it
/// exactly as it was.
pub struct Machine<S: Symbol, E: Symbol, I = (), O = ()> {
    definition: Arc<Definition<S, E, I, O>>,
    current: Code<S>,
}

impl<S: Symbol, E: Symbol, I, O> Machine<S, E, I, O> {
    /// Create an instance of `definition` in its initial state.
    pub fn new(definition: Arc<Definition<S, E, I, O>>) -> Self {
        Self::with_state(definition, Code::initial())
    }

    pub(crate) fn with_state(definition: Arc<Definition<S, E, I, O>>, current: Code<S>) -> Self {
        Self {
            definition,
            current,
        }
    }

    pub fn name(&self) -> &'static str {
        self.definition.name()
    }

    pub fn definition(&self) -> &Arc<Definition<S, E, I, O>> {
        &self.definition
    }

    /// Raw current-state code, possibly out of range.
    pub fn current_state(&self) -> Code<S> {
        self.current
    }

    /// Decoded current state, `None` if the cell holds an undeclared code.
    pub fn state(&self) -> Option<S> {
        self.current.decode()
    }

    pub fn is_in(&self, state: S) -> bool {
        self.current == state
    }

    /// Dispatch one event.
    ///
    /// Checks run in a fixed order:
    /// 1. the event must be declared, else [`DispatchError::InvalidEvent`];
    /// 2. the current state must be declared, else [`DispatchError::InvalidState`];
    /// 3. the first row for `(current, event)` is selected, else
    ///    [`DispatchError::NoTransition`];
    /// 4. the row must have a handler, else [`DispatchError::NullHandler`].
    ///
    /// The handler then runs with `input` and `output`, and whatever code it
    /// returns becomes the current state without a range check. A bad code
    /// surfaces as `InvalidState` on the next step.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsm_table::builder::MachineBuilder;
    /// use fsm_table::engine::DispatchError;
    /// use fsm_table::symbol_enum;
    ///
    /// symbol_enum! {
    ///     enum Heater { Off, On }
    /// }
    ///
    /// symbol_enum! {
    ///     enum Command { Enable, Disable }
    /// }
    ///
    /// let mut heater = MachineBuilder::<Heater, Command, i32, Vec<i32>>::new("heater")
    ///     .on(Heater::Off, Command::Enable, |setpoint, log| {
    ///         log.push(*setpoint);
    ///         Heater::On.into()
    ///     })
    ///     .build()
    ///     .unwrap();
    ///
    /// let mut log = Vec::new();
    /// let next = heater.step(Command::Enable, &21, &mut log).unwrap();
    /// assert_eq!(next, Heater::On);
    /// assert_eq!(log, vec![21]);
    ///
    /// let result = heater.step(Command::Enable, &21, &mut log);
    /// assert!(matches!(result, Err(DispatchError::NoTransition { .. })));
    /// assert!(heater.is_in(Heater::On));
    /// ```
    pub fn step(
        &mut self,
        event: impl Into<Code<E>>,
        input: &I,
        output: &mut O,
    ) -> Result<Code<S>, DispatchError> {
        let event = event.into();
        let machine = self.definition.name();

        if !event.is_valid() {
            warn!(machine, event = event.raw(), "rejected undeclared event");
            return Err(DispatchError::InvalidEvent {
                machine,
                code: event.raw(),
                count: E::COUNT,
            });
        }

        if !self.current.is_valid() {
            warn!(machine, state = self.current.raw(), "current state is undeclared");
            return Err(DispatchError::InvalidState {
                machine,
                code: self.current.raw(),
                count: S::COUNT,
            });
        }

        let Some(transition) = self.definition.lookup(self.current, event) else {
            debug!(
                machine,
                state = self.current.name(),
                event = event.name(),
                "no transition"
            );
            return Err(DispatchError::NoTransition {
                machine,
                state: self.current.name(),
                event: event.name(),
            });
        };

        let Some(handler) = transition.handler.as_ref() else {
            warn!(
                machine,
                state = self.current.name(),
                event = event.name(),
                "transition has no handler"
            );
            return Err(DispatchError::NullHandler {
                machine,
                state: self.current.name(),
                event: event.name(),
            });
        };

        let from = self.current;
        self.current = handler(input, output);
        trace!(
            machine,
            from = from.name(),
            event = event.name(),
            to = %self.current,
            "transitioned"
        );

        Ok(self.current)
    }
}

impl<S: Symbol, E: Symbol> Machine<S, E, (), ()> {
    /// Dispatch an event on a machine without payloads.
    pub fn fire(&mut self, event: impl Into<Code<E>>) -> Result<Code<S>, DispatchError> {
        self.step(event, &(), &mut ())
    }
}

impl<S: Symbol, E: Symbol, I, O> std::fmt::Debug for Machine<S, E, I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Machine")
            .field("name", &self.definition.name())
            .field("current", &self.current)
            .finish()
    }
}

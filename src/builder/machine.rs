//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::builder::validate::validate_table;
use crate::core::{Code, Symbol};
use crate::engine::Machine;
use crate::table::{Definition, Transition};
use std::sync::Arc;
use stillwater::validation::Validation;
use tracing::debug;

/// Builder for constructing machines with a fluent API.
///
/// Rows are kept in the order they are added. The initial state is always
/// the first declared state of `S`.
pub struct MachineBuilder<S: Symbol, E: Symbol, I = (), O = ()> {
    name: &'static str,
    transitions: Vec<Transition<S, E, I, O>>,
    deny_shadowing: bool,
}

impl<S: Symbol, E: Symbol, I, O> MachineBuilder<S, E, I, O> {
    /// Create a builder for the machine called `name`.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            transitions: Vec::new(),
            deny_shadowing: false,
        }
    }

    /// Add a row wired to `handler`.
    pub fn on<F>(mut self, state: S, event: E, handler: F) -> Self
    where
        F: Fn(&I, &mut O) -> Code<S> + Send + Sync + 'static,
    {
        self.transitions.push(Transition::new(state, event, handler));
        self
    }

    /// Add a row that declares a transition without wiring a handler.
    pub fn declare(mut self, state: S, event: E) -> Self {
        self.transitions.push(Transition::unwired(state, event));
        self
    }

    /// Add a pre-built row.
    pub fn add_transition(mut self, transition: Transition<S, E, I, O>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple rows at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S, E, I, O>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Reject duplicate `(state, event)` keys instead of letting the first
    /// row shadow the rest.
    pub fn deny_shadowing(mut self) -> Self {
        self.deny_shadowing = true;
        self
    }

    /// Validate and build a shareable definition.
    pub fn build_definition(self) -> Result<Definition<S, E, I, O>, BuildError> {
        match validate_table(self.name, &self.transitions, self.deny_shadowing) {
            Validation::Success(()) => {
                debug!(
                    machine = self.name,
                    rows = self.transitions.len(),
                    states = S::COUNT,
                    events = E::COUNT,
                    "built transition table"
                );
                Ok(Definition::new(self.name, self.transitions))
            }
            Validation::Failure(violations) => Err(BuildError::InvalidTable {
                machine: self.name,
                violations,
            }),
        }
    }

    /// Validate and build a machine in its initial state.
    pub fn build(self) -> Result<Machine<S, E, I, O>, BuildError> {
        let definition = self.build_definition()?;
        Ok(Machine::new(Arc::new(definition)))
    }
}

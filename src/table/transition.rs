//! Transition records binding a (state, event) key to a handler.

use crate::core::{Code, Symbol};
use std::fmt;
use std::sync::Arc;

/// Handler invoked on a matched transition.
///
/// Receives the caller's input payload and output payload and returns the
/// next state. The returned code is committed as-is; see
/// [`Machine::step`](crate::engine::Machine::step).
pub type Handler<S, I, O> = Arc<dyn Fn(&I, &mut O) -> Code<S> + Send + Sync>;

/// A single row of the transition table.
///
/// A row with no handler declares that the transition exists but has not
/// been wired; dispatching it reports
/// [`DispatchError::NullHandler`](crate::engine::DispatchError::NullHandler).
pub struct Transition<S: Symbol, E: Symbol, I, O> {
    pub state: S,
    pub event: E,
    pub handler: Option<Handler<S, I, O>>,
}

impl<S: Symbol, E: Symbol, I, O> Transition<S, E, I, O> {
    /// Row wired to a handler.
    pub fn new<F>(state: S, event: E, handler: F) -> Self
    where
        F: Fn(&I, &mut O) -> Code<S> + Send + Sync + 'static,
    {
        Self {
            state,
            event,
            handler: Some(Arc::new(handler)),
        }
    }

    /// Row declared without a handler.
    pub fn unwired(state: S, event: E) -> Self {
        Self {
            state,
            event,
            handler: None,
        }
    }

    /// Whether this row's key is `(state, event)`.
    pub fn matches(&self, state: Code<S>, event: Code<E>) -> bool {
        state == self.state && event == self.event
    }

    pub fn is_wired(&self) -> bool {
        self.handler.is_some()
    }
}

impl<S: Symbol, E: Symbol, I, O> Clone for Transition<S, E, I, O> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            event: self.event,
            handler: self.handler.as_ref().map(Arc::clone),
        }
    }
}

impl<S: Symbol, E: Symbol, I, O> fmt::Debug for Transition<S, E, I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("state", &self.state)
            .field("event", &self.event)
            .field("wired", &self.is_wired())
            .finish()
    }
}

//! Immutable machine definitions.

use crate::core::{Code, Symbol};
use crate::table::transition::Transition;

/// The static part of a named machine: its name and its transition table.
///
/// Definitions are produced by [`MachineBuilder`](crate::builder::MachineBuilder)
/// and never change afterwards. Rows are kept in declaration order; when
/// two rows share a `(state, event)` key the earlier one wins.
pub struct Definition<S: Symbol, E: Symbol, I = (), O = ()> {
    name: &'static str,
    transitions: Box<[Transition<S, E, I, O>]>,
}

impl<S: Symbol, E: Symbol, I, O> Definition<S, E, I, O> {
    pub(crate) fn new(name: &'static str, transitions: Vec<Transition<S, E, I, O>>) -> Self {
        Self {
            name,
            transitions: transitions.into_boxed_slice(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All rows, in declaration order.
    pub fn transitions(&self) -> &[Transition<S, E, I, O>] {
        &self.transitions
    }

    /// First row whose key is `(state, event)`, scanning in declaration order.
    pub fn lookup(&self, state: Code<S>, event: Code<E>) -> Option<&Transition<S, E, I, O>> {
        self.transitions.iter().find(|t| t.matches(state, event))
    }

    /// Events that have a row for `state`, in declaration order.
    ///
    /// Shadowed rows are skipped so each event appears once.
    pub fn events_from(&self, state: S) -> Vec<E> {
        let mut events: Vec<E> = Vec::new();
        for transition in self.transitions.iter().filter(|t| t.state == state) {
            if !events.contains(&transition.event) {
                events.push(transition.event);
            }
        }
        events
    }
}

impl<S: Symbol, E: Symbol, I, O> std::fmt::Debug for Definition<S, E, I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Definition")
            .field("name", &self.name)
            .field("transitions", &self.transitions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol_enum;

    symbol_enum! {
        enum TestState {
            Idle,
            Busy,
        }
    }

    symbol_enum! {
        enum TestEvent {
            Begin,
            Finish,
            Ping,
        }
    }

    fn definition() -> Definition<TestState, TestEvent> {
        Definition::new(
            "test",
            vec![
                Transition::new(TestState::Idle, TestEvent::Begin, |_, _| {
                    TestState::Busy.into()
                }),
                Transition::new(TestState::Busy, TestEvent::Finish, |_, _| {
                    TestState::Idle.into()
                }),
                Transition::new(TestState::Idle, TestEvent::Begin, |_, _| {
                    TestState::Idle.into()
                }),
                Transition::unwired(TestState::Busy, TestEvent::Ping),
            ],
        )
    }

    #[test]
    fn lookup_finds_first_match() {
        let definition = definition();
        let row = definition
            .lookup(TestState::Idle.into(), TestEvent::Begin.into())
            .unwrap();

        let handler = row.handler.as_ref().unwrap();
        assert_eq!(handler(&(), &mut ()), TestState::Busy);
    }

    #[test]
    fn lookup_misses_undeclared_key() {
        let definition = definition();
        assert!(definition
            .lookup(TestState::Idle.into(), TestEvent::Finish.into())
            .is_none());
    }

    #[test]
    fn lookup_returns_unwired_rows() {
        let definition = definition();
        let row = definition
            .lookup(TestState::Busy.into(), TestEvent::Ping.into())
            .unwrap();
        assert!(!row.is_wired());
    }

    #[test]
    fn events_from_skips_shadowed_rows() {
        let definition = definition();
        assert_eq!(definition.events_from(TestState::Idle), vec![TestEvent::Begin]);
        assert_eq!(
            definition.events_from(TestState::Busy),
            vec![TestEvent::Finish, TestEvent::Ping]
        );
    }

    #[test]
    fn empty_table_has_no_rows() {
        let definition: Definition<TestState, TestEvent> =
            Definition::new("empty", Vec::new());
        assert!(definition.transitions().is_empty());
        assert!(definition
            .lookup(TestState::Idle.into(), TestEvent::Begin.into())
            .is_none());
    }
}

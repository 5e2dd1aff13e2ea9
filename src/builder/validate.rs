//! Build-time validation of machine definitions.
//!
//! Every check runs and every violation is reported, instead of stopping at
//! the first defect, so a misconfigured table can be fixed in one pass.

use crate::builder::error::TableViolation;
use crate::core::Symbol;
use crate::table::Transition;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

type Check = Validation<(), NonEmptyVec<TableViolation>>;

/// Largest domain whose sentinel still fits in a `u8`.
pub const MAX_DOMAIN_SIZE: usize = u8::MAX as usize;

/// Validate a table, accumulating ALL violations.
///
/// Duplicate `(state, event)` keys are only violations when
/// `deny_shadowing` is set; otherwise they are logged and the first row wins
/// at dispatch time.
pub fn validate_table<S: Symbol, E: Symbol, I, O>(
    name: &'static str,
    transitions: &[Transition<S, E, I, O>],
    deny_shadowing: bool,
) -> Check {
    let mut checks: Vec<Check> = vec![
        check_name(name),
        check_domain::<S>("state"),
        check_domain::<E>("event"),
    ];

    for violation in shadowed_rows(transitions) {
        if deny_shadowing {
            checks.push(Validation::fail(violation));
        } else {
            debug!(machine = name, %violation, "shadowed transition");
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

fn check_name(name: &str) -> Check {
    if name.trim().is_empty() {
        Validation::fail(TableViolation::EmptyName)
    } else {
        Validation::success(())
    }
}

/// Check that a symbol domain is non-empty, encodable, and that its
/// `index`/`from_index` pair agrees with `COUNT`.
pub fn check_domain<T: Symbol>(domain: &'static str) -> Check {
    match domain_violation::<T>(domain) {
        Some(violation) => Validation::fail(violation),
        None => Validation::success(()),
    }
}

fn domain_violation<T: Symbol>(domain: &'static str) -> Option<TableViolation> {
    if T::COUNT == 0 {
        return Some(TableViolation::EmptyDomain { domain });
    }

    if T::COUNT > MAX_DOMAIN_SIZE {
        return Some(TableViolation::DomainTooLarge {
            domain,
            count: T::COUNT,
            max: MAX_DOMAIN_SIZE,
        });
    }

    // COUNT <= u8::MAX here, so every index and the sentinel fit.
    (0..=T::COUNT)
        .find(|&index| {
            let decoded = T::from_index(index as u8);
            if index == T::COUNT {
                decoded.is_some()
            } else {
                decoded.map(Symbol::index) != Some(index as u8)
            }
        })
        .map(|index| TableViolation::InconsistentDomain { domain, index })
}

fn shadowed_rows<S: Symbol, E: Symbol, I, O>(
    transitions: &[Transition<S, E, I, O>],
) -> Vec<TableViolation> {
    transitions
        .iter()
        .enumerate()
        .filter_map(|(duplicate, row)| {
            transitions[..duplicate]
                .iter()
                .position(|earlier| earlier.state == row.state && earlier.event == row.event)
                .map(|first| TableViolation::ShadowedTransition {
                    state: row.state.name(),
                    event: row.event.name(),
                    first,
                    duplicate,
                })
        })
        .collect()
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
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    struct Empty;

    impl Symbol for Empty {
        const COUNT: usize = 0;

        fn index(self) -> u8 {
            0
        }

        fn from_index(_index: u8) -> Option<Self> {
            None
        }

        fn name(self) -> &'static str {
            "Empty"
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    struct Huge;

    impl Symbol for Huge {
        const COUNT: usize = 300;

        fn index(self) -> u8 {
            0
        }

        fn from_index(index: u8) -> Option<Self> {
            (index == 0).then_some(Huge)
        }

        fn name(self) -> &'static str {
            "Huge"
        }
    }

    /// Claims three values but only decodes two.
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    enum Miscounted {
        A,
        B,
    }

    impl Symbol for Miscounted {
        const COUNT: usize = 3;

        fn index(self) -> u8 {
            self as u8
        }

        fn from_index(index: u8) -> Option<Self> {
            match index {
                0 => Some(Self::A),
                1 => Some(Self::B),
                _ => None,
            }
        }

        fn name(self) -> &'static str {
            match self {
                Self::A => "A",
                Self::B => "B",
            }
        }
    }

    fn rows() -> Vec<Transition<TestState, TestEvent, (), ()>> {
        vec![
            Transition::new(TestState::Idle, TestEvent::Begin, |_, _| {
                TestState::Busy.into()
            }),
            Transition::new(TestState::Busy, TestEvent::Finish, |_, _| {
                TestState::Idle.into()
            }),
            Transition::unwired(TestState::Idle, TestEvent::Begin),
        ]
    }

    #[test]
    fn well_formed_table_passes() {
        let result = validate_table("test", &rows()[..2], true);
        assert!(result.is_success());
    }

    #[test]
    fn shadowing_is_allowed_by_default() {
        let result = validate_table("test", &rows(), false);
        assert!(result.is_success());
    }

    #[test]
    fn shadowing_is_reported_when_denied() {
        let result = validate_table("test", &rows(), true);

        match result {
            Validation::Failure(violations) => {
                assert_eq!(violations.len(), 1);
                assert!(violations.iter().any(|v| *v
                    == TableViolation::ShadowedTransition {
                        state: "Idle",
                        event: "Begin",
                        first: 0,
                        duplicate: 2,
                    }));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let rows: Vec<Transition<Empty, Huge, (), ()>> = Vec::new();
        let result = validate_table("", &rows, true);

        match result {
            Validation::Failure(violations) => {
                assert_eq!(violations.len(), 3);
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, TableViolation::EmptyName)));
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, TableViolation::EmptyDomain { domain: "state" })));
                assert!(violations.iter().any(|v| matches!(
                    v,
                    TableViolation::DomainTooLarge {
                        domain: "event",
                        count: 300,
                        ..
                    }
                )));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn miscounted_domain_is_inconsistent() {
        let result = check_domain::<Miscounted>("state");

        match result {
            Validation::Failure(violations) => {
                assert!(violations.iter().any(|v| *v
                    == TableViolation::InconsistentDomain {
                        domain: "state",
                        index: 2,
                    }));
            }
            Validation::Success(_) => panic!("Expected failure, got success"),
        }
    }

    #[test]
    fn macro_domains_are_consistent() {
        assert!(check_domain::<TestState>("state").is_success());
        assert!(check_domain::<TestEvent>("event").is_success());
    }
}

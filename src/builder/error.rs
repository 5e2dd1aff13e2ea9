//! Build errors for machine definitions.

use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single defect found while validating a machine definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableViolation {
    #[error("machine name is empty")]
    EmptyName,

    #[error("{domain} domain declares no values")]
    EmptyDomain { domain: &'static str },

    #[error("{domain} domain has {count} values; at most {max} fit an 8-bit code with its sentinel")]
    DomainTooLarge {
        domain: &'static str,
        count: usize,
        max: usize,
    },

    #[error("{domain} domain does not round-trip at index {index}")]
    InconsistentDomain { domain: &'static str, index: usize },

    #[error("row {duplicate} ({state}, {event}) is shadowed by row {first}")]
    ShadowedTransition {
        state: &'static str,
        event: &'static str,
        first: usize,
        duplicate: usize,
    },
}

/// Errors that can occur when building a machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("transition table for '{machine}' is invalid ({} violation(s))", .violations.len())]
    InvalidTable {
        machine: &'static str,
        violations: NonEmptyVec<TableViolation>,
    },
}

//! Dispatch errors and legacy status codes.

use thiserror::Error;

/// Why a step did not advance the machine.
///
/// Every variant leaves the current state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("machine '{machine}': event code {code} is outside the {count} declared events")]
    InvalidEvent {
        machine: &'static str,
        code: u8,
        count: usize,
    },

    #[error("machine '{machine}': current state code {code} is outside the {count} declared states")]
    InvalidState {
        machine: &'static str,
        code: u8,
        count: usize,
    },

    #[error("machine '{machine}': no transition for event '{event}' in state '{state}'")]
    NoTransition {
        machine: &'static str,
        state: &'static str,
        event: &'static str,
    },

    #[error("machine '{machine}': transition for event '{event}' in state '{state}' has no handler")]
    NullHandler {
        machine: &'static str,
        state: &'static str,
        event: &'static str,
    },
}

impl DispatchError {
    pub fn status(&self) -> Status {
        match self {
            Self::InvalidEvent { .. } => Status::InvalidEvent,
            Self::InvalidState { .. } => Status::InvalidState,
            Self::NoTransition { .. } => Status::NoTransition,
            Self::NullHandler { .. } => Status::NullHandler,
        }
    }
}

/// Numeric outcome of a step, for integrators that report C-style codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Status {
    Ok = 0,
    InvalidState = -1,
    InvalidEvent = -2,
    NoTransition = -3,
    NullHandler = -4,
}

impl Status {
    /// Status of a step result.
    pub fn of<T>(result: &Result<T, DispatchError>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(error) => error.status(),
        }
    }

    pub fn code(self) -> i8 {
        self as i8
    }

    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

impl From<Status> for i8 {
    fn from(status: Status) -> Self {
        status.code()
    }
}

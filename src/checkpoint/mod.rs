//! Checkpoint and resume functionality for machine instances.
//!
//! A checkpoint captures the one piece of mutable state an instance has, its
//! current-state cell, together with enough metadata to refuse a mismatched
//! resume. Handlers are not serializable; a checkpoint is always resumed
//! against a definition built by the integrator.

use crate::core::{Code, Symbol};
use crate::engine::Machine;
use crate::table::Definition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a machine instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Name of the machine the snapshot was taken from
    pub machine: String,

    /// Raw current-state code
    pub state: u8,

    /// Name of the current state, if the code was in range
    pub state_name: Option<String>,
}

impl Checkpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}

impl<S: Symbol, E: Symbol, I, O> Machine<S, E, I, O> {
    /// Snapshot the instance's current state.
    pub fn checkpoint(&self) -> Checkpoint {
        let current = self.current_state();
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            machine: self.name().to_string(),
            state: current.raw(),
            state_name: current.decode().map(|s| s.name().to_string()),
        }
    }

    /// Create a new instance of `definition` from a checkpoint.
    ///
    /// Rejects checkpoints of another format version, checkpoints taken from
    /// a differently named machine, and state codes outside the declared
    /// states.
    pub fn resume(
        definition: Arc<Definition<S, E, I, O>>,
        checkpoint: &Checkpoint,
    ) -> Result<Self, CheckpointError> {
        if checkpoint.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: checkpoint.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if checkpoint.machine != definition.name() {
            return Err(CheckpointError::ValidationFailed(format!(
                "checkpoint belongs to machine '{}', not '{}'",
                checkpoint.machine,
                definition.name()
            )));
        }

        let state = Code::<S>::from_raw(checkpoint.state);
        if !state.is_valid() {
            return Err(CheckpointError::ValidationFailed(format!(
                "state code {} is outside the {} declared states",
                checkpoint.state,
                S::COUNT
            )));
        }

        info!(
            machine = definition.name(),
            checkpoint = %checkpoint.id,
            state = state.name(),
            "resumed from checkpoint"
        );
        Ok(Self::with_state(definition, state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::MachineBuilder;
    use crate::symbol_enum;

    symbol_enum! {
        enum JobState {
            Queued,
            Running,
            Done,
        }
    }

    symbol_enum! {
        enum JobEvent {
            Run,
            Finish,
            Corrupt,
        }
    }

    fn job() -> Machine<JobState, JobEvent> {
        MachineBuilder::new("job")
            .on(JobState::Queued, JobEvent::Run, |_, _| JobState::Running.into())
            .on(JobState::Running, JobEvent::Finish, |_, _| JobState::Done.into())
            .on(JobState::Running, JobEvent::Corrupt, |_, _| Code::from_raw(9))
            .build()
            .unwrap()
    }

    #[test]
    fn checkpoint_captures_current_state() {
        let mut machine = job();
        machine.fire(JobEvent::Run).unwrap();

        let checkpoint = machine.checkpoint();
        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert_eq!(checkpoint.machine, "job");
        assert_eq!(checkpoint.state, 1);
        assert_eq!(checkpoint.state_name.as_deref(), Some("Running"));
    }

    #[test]
    fn checkpoint_of_corrupted_state_has_no_name() {
        let mut machine = job();
        machine.fire(JobEvent::Run).unwrap();
        machine.fire(JobEvent::Corrupt).unwrap();

        let checkpoint = machine.checkpoint();
        assert_eq!(checkpoint.state, 9);
        assert_eq!(checkpoint.state_name, None);
    }

    #[test]
    fn resume_restores_state_in_new_instance() {
        let mut machine = job();
        machine.fire(JobEvent::Run).unwrap();
        let checkpoint = machine.checkpoint();

        let mut resumed = Machine::resume(Arc::clone(machine.definition()), &checkpoint).unwrap();
        assert!(resumed.is_in(JobState::Running));

        resumed.fire(JobEvent::Finish).unwrap();
        assert!(resumed.is_in(JobState::Done));
        assert!(machine.is_in(JobState::Running));
    }

    #[test]
    fn json_round_trip() {
        let checkpoint = job().checkpoint();
        let json = checkpoint.to_json().unwrap();
        let restored = Checkpoint::from_json(&json).unwrap();
        assert_eq!(checkpoint, restored);
    }

    #[test]
    fn binary_round_trip() {
        let checkpoint = job().checkpoint();
        let bytes = checkpoint.to_bytes().unwrap();
        let restored = Checkpoint::from_bytes(&bytes).unwrap();
        assert_eq!(checkpoint, restored);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = Checkpoint::from_json("{ not json");
        assert!(matches!(
            result,
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn truncated_bytes_are_rejected() {
        let bytes = job().checkpoint().to_bytes().unwrap();
        let result = Checkpoint::from_bytes(&bytes[..bytes.len() / 2]);
        assert!(matches!(
            result,
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn resume_rejects_unsupported_version() {
        let machine = job();
        let mut checkpoint = machine.checkpoint();
        checkpoint.version = CHECKPOINT_VERSION + 1;

        let result = Machine::resume(Arc::clone(machine.definition()), &checkpoint);
        assert!(matches!(
            result,
            Err(CheckpointError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn resume_rejects_other_machine() {
        let machine = job();
        let mut checkpoint = machine.checkpoint();
        checkpoint.machine = "pump".to_string();

        let result = Machine::resume(Arc::clone(machine.definition()), &checkpoint);
        assert!(matches!(result, Err(CheckpointError::ValidationFailed(_))));
    }

    #[test]
    fn resume_rejects_out_of_range_state() {
        let mut machine = job();
        machine.fire(JobEvent::Run).unwrap();
        machine.fire(JobEvent::Corrupt).unwrap();
        let checkpoint = machine.checkpoint();

        let result = Machine::resume(Arc::clone(machine.definition()), &checkpoint);
        assert!(matches!(result, Err(CheckpointError::ValidationFailed(_))));
    }
}

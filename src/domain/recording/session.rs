//! Capture session state machine

use std::fmt;
use thiserror::Error;

/// Capture states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    Recording,
    Finalizing,
}

impl CaptureState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Recording => "recording",
            Self::Finalizing => "finalizing",
        }
    }
}

impl fmt::Display for CaptureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while in {current_state} state")]
pub struct InvalidStateTransition {
    pub current_state: CaptureState,
    pub action: String,
}

/// Capture session entity.
/// Manages state transitions for the recording lifecycle.
///
/// State machine:
///   IDLE -> RECORDING (start_recording)
///   RECORDING -> FINALIZING (stop_recording)
///   FINALIZING -> IDLE (complete)
///
/// There is no transition out of IDLE on stop, and no transition out of
/// RECORDING on start; callers decide whether that misuse is an error
/// (stop while idle) or an ignored no-op (re-entrant start).
#[derive(Debug, Default)]
pub struct CaptureSession {
    state: CaptureState,
}

impl CaptureSession {
    /// Create a new capture session in idle state
    pub fn new() -> Self {
        Self {
            state: CaptureState::Idle,
        }
    }

    /// Get the current state
    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Check if currently idle
    pub fn is_idle(&self) -> bool {
        self.state == CaptureState::Idle
    }

    /// Check if currently recording
    pub fn is_recording(&self) -> bool {
        self.state == CaptureState::Recording
    }

    /// Check if currently finalizing
    pub fn is_finalizing(&self) -> bool {
        self.state == CaptureState::Finalizing
    }

    /// Transition from IDLE to RECORDING
    pub fn start_recording(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != CaptureState::Idle {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "start recording".to_string(),
            });
        }
        self.state = CaptureState::Recording;
        Ok(())
    }

    /// Transition from RECORDING to FINALIZING
    pub fn stop_recording(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != CaptureState::Recording {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "stop recording".to_string(),
            });
        }
        self.state = CaptureState::Finalizing;
        Ok(())
    }

    /// Transition from FINALIZING to IDLE
    pub fn complete(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != CaptureState::Finalizing {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "complete finalizing".to_string(),
            });
        }
        self.state = CaptureState::Idle;
        Ok(())
    }
}

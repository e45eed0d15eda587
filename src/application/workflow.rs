use std::fmt;

/// Where a run currently is. Every run starts and ends in `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowPhase {
    #[default]
    Idle,
    Validating,
    AwaitingExternalResult,
    Presenting,
    Notifying,
}

impl WorkflowPhase {
    pub fn is_busy(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

impl fmt::Display for WorkflowPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Validating => write!(f, "validating"),
            Self::AwaitingExternalResult => write!(f, "awaiting external result"),
            Self::Presenting => write!(f, "presenting"),
            Self::Notifying => write!(f, "notifying"),
        }
    }
}

/// Progress update sent from a worker to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowProgress {
    pub phase: WorkflowPhase,
    /// 0..=100
    pub percent: u8,
    pub status: String,
}

impl WorkflowProgress {
    pub fn new(phase: WorkflowPhase, percent: u8, status: impl Into<String>) -> Self {
        Self {
            phase,
            percent: percent.min(100),
            status: status.into(),
        }
    }

    pub fn fraction(&self) -> f32 {
        f32::from(self.percent) / 100.0
    }
}

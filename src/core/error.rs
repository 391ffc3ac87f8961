use std::fmt;

use super::state::{Pid, Ticks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedError {
    InvalidProcess { pid: Pid, reason: String },
    InvalidQuantum(Ticks),
    EmptyProcessSet,
    // Timeline covers no time, utilization is undefined
    ZeroElapsedTime,
}

impl fmt::Display for SchedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProcess { pid, reason } => write!(f, "invalid process {pid}: {reason}"),
            Self::InvalidQuantum(q) => write!(f, "invalid time quantum {q}, must be positive"),
            Self::EmptyProcessSet => write!(f, "no processes to schedule"),
            Self::ZeroElapsedTime => write!(f, "schedule covers zero elapsed time"),
        }
    }
}

impl std::error::Error for SchedError {}

use super::error::SchedError;

pub type Pid = u64;
pub type Ticks = i64;
pub type Priority = i32;

/// A process as read from the workload. Never mutated by a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub pid: Pid,
    pub arrival: Ticks,
    pub burst: Ticks,
    // Carried through to the results, not consulted by FCFS or RR
    pub priority: Priority,
}

impl Process {
    pub fn new(pid: Pid, arrival: Ticks, burst: Ticks, priority: Priority) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority,
        }
    }

    pub fn validate(&self) -> Result<(), SchedError> {
        if self.arrival < 0 {
            return Err(SchedError::InvalidProcess {
                pid: self.pid,
                reason: format!("negative arrival time {}", self.arrival),
            });
        }
        if self.burst <= 0 {
            return Err(SchedError::InvalidProcess {
                pid: self.pid,
                reason: format!("non-positive burst time {}", self.burst),
            });
        }
        Ok(())
    }
}

/// Run-scoped state of one process. Each scheduler run builds its own set from
/// the caller's `Process` list, so nothing leaks between runs.
#[derive(Debug, Clone)]
pub struct ProcessRun {
    pub process: Process,
    pub remaining: Ticks,
    pub first_run: Option<Ticks>,
    pub completion: Option<Ticks>,
}

impl ProcessRun {
    pub fn new(process: Process) -> Self {
        Self {
            remaining: process.burst,
            process,
            first_run: None,
            completion: None,
        }
    }

    pub fn pid(&self) -> Pid {
        self.process.pid
    }

    pub fn is_completed(&self) -> bool {
        self.completion.is_some()
    }

    /// Account `slice` ticks of CPU starting at `start`. Returns true once the
    /// process has no burst left, at which point its completion time is fixed.
    pub fn consume(&mut self, start: Ticks, slice: Ticks) -> bool {
        debug_assert!(
            slice > 0 && slice <= self.remaining,
            "Slice {slice} out of range for process {} with {} remaining",
            self.pid(),
            self.remaining
        );
        debug_assert!(
            !self.is_completed(),
            "Process {} already completed",
            self.pid()
        );

        self.first_run.get_or_insert(start);
        self.remaining -= slice;
        if self.remaining == 0 {
            self.completion = Some(start + slice);
            true
        } else {
            false
        }
    }
}

//! Offline single-CPU scheduling simulator.
//!
//! A fixed process set with known arrival times is scheduled under
//! first-come-first-served or round robin. Each run yields a timeline of busy
//! and idle segments plus per-process completion, waiting, turnaround and
//! response times, from which aggregate metrics are derived.

pub mod core;
pub mod scheduler;
pub mod sim;

pub use crate::core::{Process, SchedError, Segment, SegmentKind, Ticks, Timeline};
pub use scheduler::{FcfsScheduler, RoundRobinScheduler, Scheduler};
pub use sim::{Metrics, ProcessResult, Report, Schedule, Sim};

/// Schedule `processes` first-come-first-served, without preemption.
pub fn run_fcfs(processes: &[Process]) -> Result<Schedule, SchedError> {
    Sim::new(processes.to_vec()).run(&FcfsScheduler)
}

/// Schedule `processes` round robin.
///
/// * `quantum` - the most ticks a process may run before yielding to the next
///   ready process. Must be positive.
pub fn run_round_robin(processes: &[Process], quantum: Ticks) -> Result<Schedule, SchedError> {
    let scheduler = RoundRobinScheduler::new(quantum)?;
    Sim::new(processes.to_vec()).run(&scheduler)
}

pub mod fcfs;
pub mod round_robin;

use crate::core::{ProcessRun, Timeline};
pub use fcfs::FcfsScheduler;
pub use round_robin::RoundRobinScheduler;

/// A single-CPU scheduling discipline.
///
/// `schedule` is handed freshly reset runs sorted by arrival (ties in input
/// order) and an empty timeline. It must drive every run to completion and
/// record each busy and idle interval on the timeline.
pub trait Scheduler {
    fn name(&self) -> String;

    fn schedule(&self, runs: &mut [ProcessRun], timeline: &mut Timeline);
}

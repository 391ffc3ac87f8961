use average::{Estimate, Mean};

use crate::core::{Pid, Priority, ProcessRun, SchedError, Ticks, Timeline};

/// Per-process outcome of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub pid: Pid,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub priority: Priority,
    pub first_run: Ticks,
    pub completion: Ticks,
    pub waiting: Ticks,
    pub turnaround: Ticks,
    pub response: Ticks,
}

impl ProcessResult {
    pub fn from_run(run: &ProcessRun) -> Self {
        let completion = run
            .completion
            .expect("Scheduler returned with an unfinished process");
        let first_run = run
            .first_run
            .expect("Completed process must have been dispatched");
        let p = &run.process;
        let turnaround = completion - p.arrival;

        Self {
            pid: p.pid,
            arrival: p.arrival,
            burst: p.burst,
            priority: p.priority,
            first_run,
            completion,
            waiting: turnaround - p.burst,
            turnaround,
            response: first_run - p.arrival,
        }
    }
}

/// Aggregate statistics over one schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    pub avg_response: f64,
    /// Percentage of elapsed time the CPU was busy, in `[0, 100]`.
    pub cpu_utilization: f64,
    pub busy_time: Ticks,
    pub elapsed: Ticks,
}

impl Metrics {
    pub fn compute(results: &[ProcessResult], timeline: &Timeline) -> Result<Self, SchedError> {
        if results.is_empty() {
            return Err(SchedError::EmptyProcessSet);
        }
        let elapsed = timeline.elapsed();
        if elapsed == 0 {
            return Err(SchedError::ZeroElapsedTime);
        }
        let busy_time = timeline.busy_time();

        Ok(Self {
            avg_waiting: avg(results.iter().map(|r| r.waiting as f64)),
            avg_turnaround: avg(results.iter().map(|r| r.turnaround as f64)),
            avg_response: avg(results.iter().map(|r| r.response as f64)),
            cpu_utilization: busy_time as f64 / elapsed as f64 * 100.0,
            busy_time,
            elapsed,
        })
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<Mean>().estimate()
}

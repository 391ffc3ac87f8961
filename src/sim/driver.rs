use log::info;
use rustc_hash::FxHashSet;

use super::metrics::{Metrics, ProcessResult};
use crate::{
    core::{Observer, Pid, Process, ProcessRun, SchedError, Timeline},
    scheduler::Scheduler,
};

/// Outcome of one scheduler run over a process set.
#[derive(Debug, Clone)]
pub struct Schedule {
    pub policy: String,
    pub timeline: Timeline,
    // Admission (stable arrival) order
    pub results: Vec<ProcessResult>,
}

impl Schedule {
    pub fn metrics(&self) -> Result<Metrics, SchedError> {
        Metrics::compute(&self.results, &self.timeline)
    }

    pub fn result(&self, pid: Pid) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.pid == pid)
    }
}

/// A loaded process set that can be scheduled any number of times. Every run
/// starts from a fresh copy, so runs never observe each other.
#[derive(Debug, Clone)]
pub struct Sim {
    processes: Vec<Process>,
}

impl Sim {
    pub fn new(processes: Vec<Process>) -> Self {
        Self { processes }
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    fn validate(&self) -> Result<(), SchedError> {
        if self.processes.is_empty() {
            return Err(SchedError::EmptyProcessSet);
        }
        let mut seen = FxHashSet::default();
        for p in &self.processes {
            p.validate()?;
            if !seen.insert(p.pid) {
                return Err(SchedError::InvalidProcess {
                    pid: p.pid,
                    reason: "duplicate pid".to_owned(),
                });
            }
        }

        // The cursor never passes the last arrival plus every burst
        let last = self
            .processes
            .iter()
            .max_by_key(|p| p.arrival)
            .ok_or(SchedError::EmptyProcessSet)?;
        self.processes
            .iter()
            .try_fold(last.arrival, |t, p| t.checked_add(p.burst))
            .ok_or_else(|| SchedError::InvalidProcess {
                pid: last.pid,
                reason: "schedule end time overflows".to_owned(),
            })?;
        Ok(())
    }

    pub fn run<S: Scheduler>(&self, scheduler: &S) -> Result<Schedule, SchedError> {
        self.validate()?;

        let mut runs: Vec<ProcessRun> = self
            .processes
            .iter()
            .cloned()
            .map(ProcessRun::new)
            .collect();
        // Stable: equal arrivals keep input order
        runs.sort_by_key(|run| run.process.arrival);

        let mut timeline = Timeline::new();
        scheduler.schedule(&mut runs, &mut timeline);
        Observer.observe(&runs, &timeline);

        let results: Vec<ProcessResult> = runs.iter().map(ProcessResult::from_run).collect();
        info!(
            "{}: {} processes finished at t={} ({} segments)",
            scheduler.name(),
            results.len(),
            timeline.elapsed(),
            timeline.segments().len()
        );

        Ok(Schedule {
            policy: scheduler.name(),
            timeline,
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{FcfsScheduler, RoundRobinScheduler};

    #[test]
    fn empty_set_is_rejected_by_both_policies() {
        let sim = Sim::new(Vec::new());
        assert_eq!(
            sim.run(&FcfsScheduler).unwrap_err(),
            SchedError::EmptyProcessSet
        );
        let rr = RoundRobinScheduler::new(2).unwrap();
        assert_eq!(sim.run(&rr).unwrap_err(), SchedError::EmptyProcessSet);
    }

    #[test]
    fn invalid_record_is_rejected() {
        let sim = Sim::new(vec![Process::new(1, 0, 3, 0), Process::new(2, 1, 0, 0)]);
        assert!(matches!(
            sim.run(&FcfsScheduler),
            Err(SchedError::InvalidProcess { pid: 2, .. })
        ));
    }

    #[test]
    fn duplicate_pid_is_rejected() {
        let sim = Sim::new(vec![Process::new(1, 0, 3, 0), Process::new(1, 1, 2, 0)]);
        assert!(matches!(
            sim.run(&FcfsScheduler),
            Err(SchedError::InvalidProcess { pid: 1, .. })
        ));
    }

    #[test]
    fn end_time_past_tick_range_is_rejected() {
        let late = Sim::new(vec![Process::new(1, i64::MAX - 1, 5, 0)]);
        assert!(matches!(
            late.run(&FcfsScheduler),
            Err(SchedError::InvalidProcess { pid: 1, .. })
        ));
        assert!(matches!(
            late.run(&RoundRobinScheduler::new(2).unwrap()),
            Err(SchedError::InvalidProcess { pid: 1, .. })
        ));

        // Each burst fits, their sum does not
        let long = Sim::new(vec![
            Process::new(1, 0, i64::MAX / 2 + 1, 0),
            Process::new(2, 3, i64::MAX / 2 + 1, 0),
        ]);
        assert!(matches!(
            long.run(&FcfsScheduler),
            Err(SchedError::InvalidProcess { pid: 2, .. })
        ));
    }

    #[test]
    fn end_time_at_tick_limit_is_accepted() {
        let sim = Sim::new(vec![Process::new(1, i64::MAX - 5, 5, 0)]);
        let schedule = sim.run(&FcfsScheduler).unwrap();
        assert_eq!(schedule.results[0].completion, i64::MAX);
    }

    #[test]
    fn equal_arrivals_keep_input_order() {
        let sim = Sim::new(vec![
            Process::new(9, 2, 1, 0),
            Process::new(3, 0, 1, 0),
            Process::new(5, 2, 1, 0),
            Process::new(1, 2, 1, 0),
        ]);
        let schedule = sim.run(&FcfsScheduler).unwrap();
        let order: Vec<_> = schedule.results.iter().map(|r| r.pid).collect();
        assert_eq!(order, vec![3, 9, 5, 1]);
    }

    #[test]
    fn runs_do_not_leak_into_each_other() {
        let processes = vec![Process::new(1, 0, 5, 0), Process::new(2, 1, 3, 0)];
        let sim = Sim::new(processes.clone());

        let rr = sim.run(&RoundRobinScheduler::new(1).unwrap()).unwrap();
        let fcfs = sim.run(&FcfsScheduler).unwrap();
        let rr_again = sim.run(&RoundRobinScheduler::new(1).unwrap()).unwrap();

        assert_eq!(sim.processes(), processes.as_slice());
        assert_eq!(fcfs.result(1).map(|r| r.completion), Some(5));
        assert_eq!(rr.results, rr_again.results);
        assert_eq!(rr.timeline, rr_again.timeline);
        assert_eq!(rr.policy, "Round Robin (q = 1)");
    }
}

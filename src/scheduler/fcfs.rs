use log::debug;

use super::Scheduler;
use crate::core::{ProcessRun, Timeline};

/// Non-preemptive first-come-first-served.
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl Scheduler for FcfsScheduler {
    fn name(&self) -> String {
        "FCFS".to_owned()
    }

    fn schedule(&self, runs: &mut [ProcessRun], timeline: &mut Timeline) {
        for run in runs.iter_mut() {
            if timeline.now() < run.process.arrival {
                debug!("t={} idle until {}", timeline.now(), run.process.arrival);
                timeline.idle_until(run.process.arrival);
            }

            let burst = run.remaining;
            let start = timeline.run(run.pid(), burst);
            debug!("t={start} P{} runs for {burst}", run.pid());
            run.consume(start, burst);
        }
    }
}

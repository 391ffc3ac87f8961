use std::collections::VecDeque;

use log::{debug, trace};

use super::Scheduler;
use crate::core::{ProcessRun, SchedError, Ticks, Timeline};

/// Time-sliced round robin over a single FIFO ready queue.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: Ticks,
}

impl RoundRobinScheduler {
    pub fn new(quantum: Ticks) -> Result<Self, SchedError> {
        if quantum <= 0 {
            return Err(SchedError::InvalidQuantum(quantum));
        }
        Ok(Self { quantum })
    }

    pub fn quantum(&self) -> Ticks {
        self.quantum
    }
}

// Push every not-yet-admitted run that has arrived by `now`. Runs are sorted
// by arrival, so arrivals form a contiguous prefix from `next`.
fn admit(runs: &[ProcessRun], next: &mut usize, now: Ticks, ready: &mut VecDeque<usize>) {
    while let Some(run) = runs.get(*next) {
        if run.process.arrival > now {
            break;
        }
        trace!("t={now} admit P{}", run.pid());
        ready.push_back(*next);
        *next += 1;
    }
}

impl Scheduler for RoundRobinScheduler {
    fn name(&self) -> String {
        format!("Round Robin (q = {})", self.quantum)
    }

    fn schedule(&self, runs: &mut [ProcessRun], timeline: &mut Timeline) {
        let mut ready: VecDeque<usize> = VecDeque::with_capacity(runs.len());
        let mut next = 0;
        let mut done = 0;

        while done < runs.len() {
            admit(runs, &mut next, timeline.now(), &mut ready);

            let Some(idx) = ready.pop_front() else {
                // Nothing ready: every unfinished run is still to arrive
                let Some(upcoming) = runs.get(next) else {
                    debug_assert!(false, "Ready queue empty with no pending arrivals");
                    break;
                };
                debug!(
                    "t={} idle until {}",
                    timeline.now(),
                    upcoming.process.arrival
                );
                timeline.idle_until(upcoming.process.arrival);
                continue;
            };

            let run = &mut runs[idx];
            let pid = run.pid();
            let slice = self.quantum.min(run.remaining);
            let start = timeline.run(pid, slice);
            let finished = run.consume(start, slice);
            debug!("t={start} P{pid} runs for {slice}");

            // Arrivals during the slice queue ahead of the preempted run
            admit(runs, &mut next, timeline.now(), &mut ready);

            if finished {
                done += 1;
            } else {
                ready.push_back(idx);
            }
        }
    }
}

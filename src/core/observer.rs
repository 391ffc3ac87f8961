use rustc_hash::FxHashMap;

use super::{
    state::{Pid, ProcessRun, Ticks},
    timeline::Timeline,
};

/// Checks a finished run against its timeline. Only active in debug builds.
#[derive(Debug, Default)]
pub struct Observer;

impl Observer {
    pub fn observe(&self, runs: &[ProcessRun], timeline: &Timeline) {
        let mut cursor: Ticks = 0;
        let mut served: FxHashMap<Pid, Ticks> = FxHashMap::default();
        for seg in timeline.segments() {
            debug_assert_eq!(
                seg.start, cursor,
                "Segment {seg:?} does not start where the previous one ended"
            );
            debug_assert!(seg.end > seg.start, "Empty segment {seg:?}");
            if let Some(pid) = seg.pid() {
                *served.entry(pid).or_default() += seg.duration();
            }
            cursor = seg.end;
        }
        debug_assert_eq!(cursor, timeline.elapsed(), "Timeline cursor out of sync");

        let mut last_completion = 0;
        for run in runs {
            let pid = run.pid();
            debug_assert_eq!(run.remaining, 0, "Process {pid} left with burst remaining");
            let completion = run.completion;
            debug_assert!(completion.is_some(), "Process {pid} never completed");
            let completion = completion.unwrap_or_default();
            debug_assert_eq!(
                served.get(&pid).copied().unwrap_or_default(),
                run.process.burst,
                "CPU time given to process {pid} differs from its burst"
            );
            debug_assert!(
                completion - run.process.arrival >= run.process.burst,
                "Process {pid} completed before its burst could elapse"
            );
            last_completion = last_completion.max(completion);
        }
        debug_assert_eq!(
            last_completion,
            timeline.elapsed(),
            "Timeline must end at the last completion"
        );
        debug_assert_eq!(
            timeline.busy_time(),
            runs.iter().map(|r| r.process.burst).sum::<Ticks>(),
            "Busy time must equal total burst"
        );
    }
}

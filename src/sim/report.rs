use std::fmt;

use super::{driver::Schedule, metrics::Metrics};
use crate::core::{SchedError, Segment, SegmentKind};

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy { pid } => write!(f, "P{pid}"),
            Self::Idle => f.write_str("IDLE"),
        }
    }
}

/// Text Gantt chart: a bar of labels over a tick axis.
pub struct GanttChart<'a>(pub &'a [Segment]);

impl fmt::Display for GanttChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.0.first() else {
            return writeln!(f, "(empty)");
        };
        for seg in self.0 {
            write!(f, "| {} ", seg.kind)?;
        }
        writeln!(f, "|")?;

        write!(f, "{}", first.start)?;
        for seg in self.0 {
            write!(f, "{:>5}", seg.end)?;
        }
        writeln!(f)
    }
}

/// Full rendering of one schedule: chart, per-process table, aggregates.
pub struct Report<'a> {
    schedule: &'a Schedule,
    metrics: Metrics,
    merge: bool,
}

impl<'a> Report<'a> {
    pub fn new(schedule: &'a Schedule) -> Result<Self, SchedError> {
        Ok(Self {
            schedule,
            metrics: schedule.metrics()?,
            merge: false,
        })
    }

    /// Draw adjacent slices of the same process as one bar.
    pub fn merged(mut self, merge: bool) -> Self {
        self.merge = merge;
        self
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Gantt Chart:", self.schedule.policy)?;
        if self.merge {
            write!(f, "{}", GanttChart(&self.schedule.timeline.coalesced()))?;
        } else {
            write!(f, "{}", GanttChart(self.schedule.timeline.segments()))?;
        }

        writeln!(f)?;
        writeln!(f, "PID  AT  BT  CT  WT  TAT  RT")?;
        for r in &self.schedule.results {
            writeln!(
                f,
                "{:>3}{:>4}{:>4}{:>4}{:>4}{:>5}{:>4}",
                r.pid, r.arrival, r.burst, r.completion, r.waiting, r.turnaround, r.response
            )?;
        }

        let m = &self.metrics;
        writeln!(f)?;
        writeln!(f, "Average WT: {:.2}", m.avg_waiting)?;
        writeln!(f, "Average TAT: {:.2}", m.avg_turnaround)?;
        writeln!(f, "Average RT: {:.2}", m.avg_response)?;
        writeln!(f, "CPU Utilization: {:.2}%", m.cpu_utilization)
    }
}

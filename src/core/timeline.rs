use super::state::{Pid, Ticks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Busy { pid: Pid },
    Idle,
}

/// Half-open interval `[start, end)` of CPU activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub start: Ticks,
    pub end: Ticks,
}

impl Segment {
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }

    pub fn is_idle(&self) -> bool {
        self.kind == SegmentKind::Idle
    }

    pub fn pid(&self) -> Option<Pid> {
        match self.kind {
            SegmentKind::Busy { pid } => Some(pid),
            SegmentKind::Idle => None,
        }
    }
}

/// Chronological record of CPU assignment, built by appending at a cursor
/// that starts at 0 and only moves forward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    segments: Vec<Segment>,
    now: Ticks,
    busy: Ticks,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Ticks {
        self.now
    }

    pub fn busy_time(&self) -> Ticks {
        self.busy
    }

    /// Final cursor value, i.e. the end of the last segment.
    pub fn elapsed(&self) -> Ticks {
        self.now
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Leave the CPU idle until `until`. No-op if the cursor is already there.
    pub fn idle_until(&mut self, until: Ticks) {
        if until <= self.now {
            return;
        }
        self.segments.push(Segment {
            kind: SegmentKind::Idle,
            start: self.now,
            end: until,
        });
        self.now = until;
    }

    /// Run `pid` for `len` ticks from the cursor. Returns the segment start.
    pub fn run(&mut self, pid: Pid, len: Ticks) -> Ticks {
        debug_assert!(
            len > 0,
            "Busy segment for {pid} must have positive length"
        );
        let start = self.now;
        self.segments.push(Segment {
            kind: SegmentKind::Busy { pid },
            start,
            end: start + len,
        });
        self.now += len;
        self.busy += len;
        start
    }

    /// Adjacent segments with the same kind merged into one. Display only,
    /// statistics are unaffected.
    pub fn coalesced(&self) -> Vec<Segment> {
        let mut merged: Vec<Segment> = Vec::with_capacity(self.segments.len());
        for seg in &self.segments {
            match merged.last_mut() {
                Some(last) if last.kind == seg.kind && last.end == seg.start => last.end = seg.end,
                _ => merged.push(*seg),
            }
        }
        merged
    }
}

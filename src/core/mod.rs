pub mod error;
pub mod observer;
pub mod state;
pub mod timeline;

pub use error::SchedError;
pub use observer::Observer;
pub use state::{Pid, Priority, Process, ProcessRun, Ticks};
pub use timeline::{Segment, SegmentKind, Timeline};

pub mod driver;
pub mod metrics;
pub mod report;
pub mod workload;

pub use driver::{Schedule, Sim};
pub use metrics::{Metrics, ProcessResult};
pub use report::{GanttChart, Report};
pub use workload::{bernoulli_workload, load_processes, parse_processes};

use std::{fs, io, path::Path};

use log::warn;
use rand::prelude::*;

use crate::core::{Pid, Process, Ticks};

/// Parse `pid arrival burst priority` lines.
///
/// Blank lines and lines whose first token is not an unsigned integer (such as
/// a header row) are skipped silently. Lines with missing or non-numeric
/// fields after the pid are skipped with a warning. Value ranges are not
/// checked here; the simulator rejects them when a run starts.
pub fn parse_processes(text: &str) -> Vec<Process> {
    let mut processes = Vec::new();

    for (lineno, line) in text.lines().enumerate() {
        let mut fields = line.split_whitespace();
        let Some(first) = fields.next() else {
            continue;
        };
        if !first.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }

        match parse_record(first, &mut fields) {
            Some(process) => processes.push(process),
            None => warn!("line {}: skipping malformed record {line:?}", lineno + 1),
        }
    }

    processes
}

fn parse_record<'a>(first: &str, fields: &mut impl Iterator<Item = &'a str>) -> Option<Process> {
    let pid: Pid = first.parse().ok()?;
    let arrival: Ticks = fields.next()?.parse().ok()?;
    let burst: Ticks = fields.next()?.parse().ok()?;
    let priority = fields.next()?.parse().ok()?;
    Some(Process::new(pid, arrival, burst, priority))
}

pub fn load_processes(path: impl AsRef<Path>) -> io::Result<Vec<Process>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_processes(&text))
}

/// Seeded random workload: over `ticks` time units, a process arrives at each
/// tick with probability `p_arrival`. Its burst is `short_burst` with
/// probability `p_short`, otherwise `long_burst`. Pids count up from 1.
pub fn bernoulli_workload(
    ticks: Ticks,
    p_arrival: f64,
    p_short: f64,
    short_burst: Ticks,
    long_burst: Ticks,
    seed: u64,
) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut processes = Vec::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            let burst = if rng.random::<f64>() < p_short {
                short_burst
            } else {
                long_burst
            };
            let priority = rng.random_range(0..5);

            let pid = processes.len() as Pid + 1;
            processes.push(Process::new(pid, t, burst, priority));
        }
    }

    processes
}

use rand::prelude::*;
use sched_sim::{
    FcfsScheduler, Process, RoundRobinScheduler, Schedule, Sim, Ticks, sim::bernoulli_workload,
};

const SEEDS: u64 = 32;

// Unsorted input with colliding arrivals and mixed bursts.
fn shuffled_workload(seed: u64) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = rng.random_range(1..=12);
    (0..n)
        .map(|i| {
            Process::new(
                i as u64 + 1,
                rng.random_range(0..15),
                rng.random_range(1..=9),
                rng.random_range(0..5),
            )
        })
        .collect()
}

fn workloads() -> impl Iterator<Item = Vec<Process>> {
    (0..SEEDS)
        .flat_map(|seed| {
            [
                shuffled_workload(seed),
                bernoulli_workload(40, 0.3, 0.3, 2, 6, seed),
            ]
        })
        .filter(|w| !w.is_empty())
}

fn schedules(processes: Vec<Process>) -> Vec<(Option<Ticks>, Schedule)> {
    let sim = Sim::new(processes);
    let mut out = vec![(None, sim.run(&FcfsScheduler).unwrap())];
    for q in [1, 2, 3, 5] {
        let rr = RoundRobinScheduler::new(q).unwrap();
        out.push((Some(q), sim.run(&rr).unwrap()));
    }
    out
}

#[test]
fn repeated_runs_are_identical() {
    for processes in workloads() {
        let first = schedules(processes.clone());
        let second = schedules(processes);
        for ((_, a), (_, b)) in first.iter().zip(&second) {
            assert_eq!(a.timeline, b.timeline);
            assert_eq!(a.results, b.results);
            assert_eq!(a.metrics().unwrap(), b.metrics().unwrap());
        }
    }
}

#[test]
fn busy_time_equals_total_burst() {
    for processes in workloads() {
        let total: Ticks = processes.iter().map(|p| p.burst).sum();
        for (_, schedule) in schedules(processes) {
            let busy: Ticks = schedule
                .timeline
                .segments()
                .iter()
                .filter(|s| !s.is_idle())
                .map(|s| s.duration())
                .sum();
            assert_eq!(busy, total);
            assert_eq!(schedule.timeline.busy_time(), total);
        }
    }
}

#[test]
fn timeline_is_contiguous() {
    for processes in workloads() {
        let min_arrival = processes.iter().map(|p| p.arrival).min().unwrap();
        for (_, schedule) in schedules(processes) {
            let segments = schedule.timeline.segments();
            assert!(segments[0].start <= min_arrival);
            assert!(segments.iter().all(|s| s.end > s.start));
            assert!(segments.windows(2).all(|w| w[0].end == w[1].start));

            let last_completion = schedule.results.iter().map(|r| r.completion).max();
            assert_eq!(segments.last().map(|s| s.end), last_completion);
        }
    }
}

#[test]
fn fcfs_never_overtakes() {
    for processes in workloads() {
        let schedule = Sim::new(processes).run(&FcfsScheduler).unwrap();
        for p in &schedule.results {
            for q in &schedule.results {
                if p.arrival < q.arrival {
                    assert!(p.completion <= q.completion);
                }
            }
        }
    }
}

#[test]
fn round_robin_slices_respect_quantum() {
    for processes in workloads() {
        for (quantum, schedule) in schedules(processes) {
            let Some(quantum) = quantum else { continue };
            let busy: Vec<_> = schedule
                .timeline
                .segments()
                .iter()
                .filter(|s| !s.is_idle())
                .collect();
            assert!(busy.iter().all(|s| s.duration() <= quantum));

            // Only a process's last slice may be short
            for r in &schedule.results {
                let mine: Vec<_> = busy.iter().filter(|s| s.pid() == Some(r.pid)).collect();
                let (last, rest) = mine.split_last().unwrap();
                assert!(rest.iter().all(|s| s.duration() == quantum));
                assert_eq!(last.end, r.completion);
            }
        }
    }
}

#[test]
fn turnaround_is_waiting_plus_burst() {
    for processes in workloads() {
        for (_, schedule) in schedules(processes) {
            for r in &schedule.results {
                assert_eq!(r.turnaround, r.waiting + r.burst);
                assert!(r.waiting >= 0);
                assert!(r.response >= 0 && r.response <= r.waiting);
            }
        }
    }
}

#[test]
fn utilization_is_a_percentage() {
    for processes in workloads() {
        for (_, schedule) in schedules(processes) {
            let m = schedule.metrics().unwrap();
            assert!(m.cpu_utilization > 0.0 && m.cpu_utilization <= 100.0);
        }
    }
}

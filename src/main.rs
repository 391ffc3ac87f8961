use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use sched_sim::{
    FcfsScheduler, Process, Report, RoundRobinScheduler, Sim, Ticks,
    sim::{bernoulli_workload, load_processes},
};

const DEFAULT_QUANTUM: Ticks = 2;

fn cli() -> Command {
    Command::new("sched_sim")
        .about("FCFS and Round Robin CPU scheduling simulator")
        .arg(
            Arg::new("input")
                .long("input")
                .default_value("processes.txt")
                .help("Process file, one `pid arrival burst priority` record per line"),
        )
        .arg(
            Arg::new("random")
                .long("random")
                .value_name("SEED")
                .value_parser(value_parser!(u64))
                .help("Generate a random workload with this seed instead of reading --input"),
        )
        .arg(
            Arg::new("ticks")
                .long("ticks")
                .value_parser(value_parser!(Ticks))
                .default_value("20")
                .help("Arrival window of the random workload"),
        )
        .arg(
            Arg::new("p_arrival")
                .long("p-arrival")
                .value_parser(value_parser!(f64))
                .default_value("0.3")
                .help("Per-tick arrival probability of the random workload"),
        )
        .arg(
            Arg::new("fcfs")
                .long("fcfs")
                .action(ArgAction::SetTrue)
                .help("Run first-come-first-served"),
        )
        .arg(
            Arg::new("rr")
                .long("rr")
                .value_name("QUANTUM")
                .value_parser(value_parser!(Ticks))
                .action(ArgAction::Append)
                .help("Run round robin with this quantum (repeatable)"),
        )
        .arg(
            Arg::new("merge")
                .long("merge")
                .action(ArgAction::SetTrue)
                .help("Draw consecutive slices of one process as a single bar"),
        )
}

fn load_workload(matches: &ArgMatches) -> Result<Vec<Process>> {
    let processes = match matches.get_one::<u64>("random") {
        Some(&seed) => {
            // Both carry clap defaults, so they are always present
            let ticks = matches
                .get_one::<Ticks>("ticks")
                .copied()
                .unwrap_or_default();
            let p_arrival = matches
                .get_one::<f64>("p_arrival")
                .copied()
                .unwrap_or_default();
            bernoulli_workload(ticks, p_arrival, 0.3, 2, 6, seed)
        }
        None => {
            let input = matches
                .get_one::<String>("input")
                .cloned()
                .unwrap_or_default();
            load_processes(&input)
                .with_context(|| format!("Failed to read {input}"))?
        }
    };
    Ok(processes)
}

fn main() -> Result<()> {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    let matches = cli().get_matches();
    let processes = load_workload(&matches)?;
    println!("Loaded {} process(es)", processes.len());

    let run_fcfs = matches.get_flag("fcfs");
    let mut quanta: Vec<Ticks> = matches
        .get_many::<Ticks>("rr")
        .map(|q| q.copied().collect())
        .unwrap_or_default();
    let run_all = !run_fcfs && quanta.is_empty();
    if run_all {
        quanta.push(DEFAULT_QUANTUM);
    }
    let merge = matches.get_flag("merge");

    let sim = Sim::new(processes);

    if run_fcfs || run_all {
        let schedule = sim.run(&FcfsScheduler)?;
        println!("\n{}", Report::new(&schedule)?.merged(merge));
    }

    for quantum in quanta {
        let scheduler = RoundRobinScheduler::new(quantum)?;
        let schedule = sim.run(&scheduler)?;
        println!("\n{}", Report::new(&schedule)?.merged(merge));
    }

    Ok(())
}

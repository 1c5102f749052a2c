use std::env;

use anyhow::{bail, Context};
use serde::Serialize;

use cpu_sched::loader;
use cpu_sched::logging::init_tracing;
use cpu_sched::models::{Policy, ScheduleResult};
use cpu_sched::report::Report;
use cpu_sched::scheduler::ScheduleMetrics;
use cpu_sched::timeline::{TextGantt, Timeline, TimelineRenderer};
use cpu_sched::SimulationConfig;

const USAGE: &str = "usage: cpu-sched <fcfs|sjf> <input-file> [--json]";

#[derive(Serialize)]
struct JsonOutput<'a> {
    result: &'a ScheduleResult,
    metrics: &'a ScheduleMetrics,
    skipped_lines: &'a [usize],
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let positional: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|a| *a != "--json")
        .collect();

    let [policy, path] = positional.as_slice() else {
        bail!(USAGE);
    };
    let policy: Policy = policy.parse()?;

    let workload = loader::load_file(path, policy)
        .with_context(|| format!("failed to load workload from {path}"))?;
    let config = SimulationConfig::for_workload(policy, &workload);
    let result = config.run(&workload.processes)?;

    let report = Report::new(&result)?;

    if json {
        let output = JsonOutput {
            result: &result,
            metrics: report.metrics(),
            skipped_lines: &workload.skipped_lines,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("\n{policy} Scheduling Results:");
    print!("{report}");
    println!();
    print!("{}", TextGantt::default().render(&Timeline::from_result(&result)));

    Ok(())
}

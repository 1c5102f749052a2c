//! Property tests over generated process sets.

use std::collections::HashSet;

use cpu_sched::models::{Process, ScheduleResult};
use cpu_sched::scheduler::{FcfsScheduler, ScheduleMetrics, Scheduler, SjfScheduler};
use cpu_sched::timeline::Timeline;
use cpu_sched::workload::WorkloadGenerator;
use proptest::prelude::*;

/// Valid process sets with unique pids, arrivals and bursts drawn freely.
fn processes() -> impl Strategy<Value = Vec<Process>> {
    prop::collection::vec((0i64..50, 1i64..20), 1..40).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst))| Process::new(i as i64 + 1, arrival, burst))
            .collect()
    })
}

fn assert_record_invariants(result: &ScheduleResult) -> Result<(), TestCaseError> {
    for r in &result.records {
        prop_assert_eq!(r.finish_time - r.start_time, r.burst_time);
        prop_assert_eq!(r.turnaround_time, r.finish_time - r.arrival_time);
        prop_assert_eq!(r.waiting_time, r.turnaround_time - r.burst_time);
        prop_assert!(r.waiting_time >= 0);
        prop_assert!(r.start_time >= r.arrival_time);
    }
    Ok(())
}

fn assert_no_overlap(result: &ScheduleResult) -> Result<(), TestCaseError> {
    let mut spans: Vec<(i64, i64)> = result
        .records
        .iter()
        .map(|r| (r.start_time, r.finish_time))
        .collect();
    spans.sort_unstable();
    for w in spans.windows(2) {
        prop_assert!(w[0].1 <= w[1].0, "spans {:?} and {:?} overlap", w[0], w[1]);
    }
    for idle in &result.idle_intervals {
        prop_assert!(!idle.is_empty());
        for r in &result.records {
            prop_assert!(!r.overlaps(idle.begin, idle.end));
        }
    }
    Ok(())
}

fn pid_set(result: &ScheduleResult) -> Vec<i64> {
    let mut pids = result.execution_order();
    pids.sort_unstable();
    pids
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_fcfs_invariants(input in processes()) {
        let result = FcfsScheduler::new().schedule(&input).unwrap();

        prop_assert_eq!(result.len(), input.len());
        assert_record_invariants(&result)?;
        assert_no_overlap(&result)?;
        prop_assert!(result
            .records
            .windows(2)
            .all(|w| w[0].finish_time <= w[1].finish_time));
        // Supplied order is execution order.
        let input_pids: Vec<i64> = input.iter().map(|p| p.pid).collect();
        prop_assert_eq!(result.execution_order(), input_pids);
    }

    #[test]
    fn prop_sjf_invariants(input in processes(), cs in 0i64..4) {
        let result = SjfScheduler::new()
            .with_context_switch(cs)
            .schedule(&input)
            .unwrap();

        let mut input_pids: Vec<i64> = input.iter().map(|p| p.pid).collect();
        input_pids.sort_unstable();
        prop_assert_eq!(pid_set(&result), input_pids);

        assert_record_invariants(&result)?;
        assert_no_overlap(&result)?;

        let expected_switches = if cs > 0 { input.len() - 1 } else { 0 };
        prop_assert_eq!(result.context_switches.len(), expected_switches);
        prop_assert_eq!(result.total_switch_time(), cs * (input.len() as i64 - 1));
        prop_assert!(result
            .records
            .windows(2)
            .all(|w| w[0].finish_time <= w[1].finish_time));
        if let Some(first) = result.context_switches.first() {
            prop_assert!(first.begin >= result.records[0].finish_time);
        }
    }

    #[test]
    fn prop_sjf_picks_shortest_ready(input in processes()) {
        let result = SjfScheduler::new().schedule(&input).unwrap();

        // Whenever a process starts, nothing already arrived and still
        // pending was strictly shorter.
        let mut done: HashSet<i64> = HashSet::new();
        for r in &result.records {
            let shorter_waiting = input.iter().any(|p| {
                !done.contains(&p.pid)
                    && p.pid != r.pid
                    && p.arrival_time <= r.start_time
                    && p.burst_time < r.burst_time
            });
            prop_assert!(!shorter_waiting, "pid {} ran while a shorter job waited", r.pid);
            done.insert(r.pid);
        }
    }

    #[test]
    fn prop_deterministic(input in processes(), cs in 0i64..3) {
        let scheduler = SjfScheduler::new().with_context_switch(cs);
        let copy = input.clone();
        prop_assert_eq!(scheduler.schedule(&input).unwrap(), scheduler.schedule(&copy).unwrap());
        prop_assert_eq!(
            FcfsScheduler::new().schedule(&input).unwrap(),
            FcfsScheduler::new().schedule(&copy).unwrap()
        );
    }

    #[test]
    fn prop_utilization_in_range(input in processes(), cs in 0i64..3) {
        for result in [
            FcfsScheduler::new().schedule(&input).unwrap(),
            SjfScheduler::new().with_context_switch(cs).schedule(&input).unwrap(),
        ] {
            let m = ScheduleMetrics::calculate(&result).unwrap();
            prop_assert!(m.cpu_utilization > 0.0 && m.cpu_utilization <= 100.0);
            // Busy, idle and switching time partition the makespan.
            prop_assert_eq!(
                m.total_burst_time + m.total_idle_time + m.total_switch_time,
                m.makespan
            );
        }
    }

    #[test]
    fn prop_timeline_covers_every_run(input in processes()) {
        let result = SjfScheduler::new().with_context_switch(1).schedule(&input).unwrap();
        let timeline = Timeline::from_result(&result);
        let runs: Vec<(i64, i64, i64)> = timeline.runs().collect();
        let expected: Vec<(i64, i64, i64)> = result
            .records
            .iter()
            .map(|r| (r.pid, r.start_time, r.burst_time))
            .collect();
        prop_assert_eq!(runs, expected);
        prop_assert_eq!(timeline.end(), result.makespan());
    }
}

#[test]
fn generated_workloads_schedule_cleanly() {
    for seed in 0..10 {
        let input = WorkloadGenerator::new(200).with_seed(seed).generate();
        let fcfs = FcfsScheduler::new().schedule(&input).unwrap();
        let sjf = SjfScheduler::new().with_context_switch(1).schedule(&input).unwrap();
        assert_eq!(fcfs.len(), input.len());
        assert_eq!(sjf.len(), input.len());
        assert!(ScheduleMetrics::calculate(&sjf).is_ok());
    }
}

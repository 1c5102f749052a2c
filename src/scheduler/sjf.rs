//! Non-preemptive Shortest-Job-First scheduler.
//!
//! # Algorithm
//!
//! Repeat until nothing is unarrived or ready:
//! 1. If the ready queue is empty, jump the clock to the next arrival and
//!    record the skipped span as idle.
//! 2. Admit every process whose arrival time has been reached.
//! 3. Pop the shortest ready job (ties: earliest arrival, then input order),
//!    charge the context-switch overhead unless it is the first execution,
//!    and run it to completion.
//!
//! A process's state is given by where it lives: unarrived processes sit in
//! an arrival-sorted cursor, ready ones in a binary heap, and finished ones in
//! the result records. Nothing is rescanned and idle gaps cost one step
//! instead of one step per tick.
//!
//! # Complexity
//! O(n log n).

use tracing::{debug, info};

use super::{ReadyQueue, Scheduler};
use crate::error::Result;
use crate::models::{Interval, Policy, Process, ProcessRecord, ScheduleResult, Time};
use crate::validation::validate_input;

/// Shortest-Job-First scheduler with fixed context-switch overhead.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::{Scheduler, SjfScheduler};
///
/// let processes = vec![
///     Process::new(1, 0, 7),
///     Process::new(2, 2, 4),
///     Process::new(3, 4, 1),
///     Process::new(4, 5, 4),
/// ];
/// let result = SjfScheduler::new().schedule(&processes).unwrap();
/// assert_eq!(result.execution_order(), vec![1, 3, 2, 4]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SjfScheduler {
    context_switch_time: Time,
}

impl SjfScheduler {
    /// Creates a scheduler with no context-switch overhead.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the overhead charged between consecutive executions.
    pub fn with_context_switch(mut self, context_switch_time: Time) -> Self {
        self.context_switch_time = context_switch_time;
        self
    }
}

impl Scheduler for SjfScheduler {
    fn policy(&self) -> Policy {
        Policy::Sjf
    }

    fn schedule(&self, processes: &[Process]) -> Result<ScheduleResult> {
        validate_input(processes, self.context_switch_time)?;

        let mut result = ScheduleResult::new(Policy::Sjf, self.context_switch_time);
        let mut ready = ReadyQueue::new();

        // Stable sort keeps input order among equal arrivals.
        let mut arrival_order: Vec<usize> = (0..processes.len()).collect();
        arrival_order.sort_by_key(|&i| processes[i].arrival_time);
        let mut unarrived = arrival_order.into_iter().peekable();

        let mut clock: Time = 0;

        loop {
            if ready.is_empty() {
                let Some(&next) = unarrived.peek() else {
                    break;
                };
                let next_arrival = processes[next].arrival_time;
                if clock < next_arrival {
                    debug!(from = clock, to = next_arrival, "processor idle");
                    result
                        .idle_intervals
                        .push(Interval::new(clock, next_arrival));
                    clock = next_arrival;
                }
            }

            while let Some(index) = unarrived.next_if(|&i| processes[i].arrival_time <= clock) {
                ready.push(index, &processes[index]);
            }

            let Some(index) = ready.pop() else {
                break;
            };

            if !result.is_empty() && self.context_switch_time > 0 {
                let switch = Interval::new(clock, clock + self.context_switch_time);
                result.context_switches.push(switch);
                clock = switch.end;
            }

            let record = ProcessRecord::execute(&processes[index], clock);
            debug!(
                pid = record.pid,
                burst = record.burst_time,
                start = record.start_time,
                finish = record.finish_time,
                ready = ready.len(),
                "dispatched"
            );
            clock = record.finish_time;
            result.records.push(record);
        }

        info!(
            policy = %Policy::Sjf,
            processes = result.len(),
            makespan = result.makespan(),
            context_switches = result.context_switches.len(),
            idle_time = result.total_idle_time(),
            "simulation complete"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::validation::ValidationErrorKind;
    use pretty_assertions::assert_eq;

    fn spans(result: &ScheduleResult) -> Vec<(i64, i64, i64)> {
        result
            .records
            .iter()
            .map(|r| (r.pid, r.start_time, r.finish_time))
            .collect()
    }

    fn reference_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0, 7),
            Process::new(2, 2, 4),
            Process::new(3, 4, 1),
            Process::new(4, 5, 4),
        ]
    }

    #[test]
    fn test_reference_scenario() {
        let result = SjfScheduler::new()
            .schedule(&reference_processes())
            .unwrap();

        assert_eq!(
            spans(&result),
            vec![(1, 0, 7), (3, 7, 8), (2, 8, 12), (4, 12, 16)]
        );
        assert!(result.idle_intervals.is_empty());
        assert!(result.context_switches.is_empty());

        let p2 = result.record_for(2).unwrap();
        assert_eq!(p2.waiting_time, 6);
        assert_eq!(p2.turnaround_time, 10);
    }

    #[test]
    fn test_context_switch_between_executions_only() {
        let result = SjfScheduler::new()
            .with_context_switch(1)
            .schedule(&reference_processes())
            .unwrap();

        // 1 [0,7) cs [7,8) 3 [8,9) cs [9,10) 2 [10,14) cs [14,15) 4 [15,19)
        assert_eq!(
            spans(&result),
            vec![(1, 0, 7), (3, 8, 9), (2, 10, 14), (4, 15, 19)]
        );
        assert_eq!(
            result.context_switches,
            vec![
                Interval::new(7, 8),
                Interval::new(9, 10),
                Interval::new(14, 15)
            ]
        );
        assert_eq!(result.records[0].start_time, 0);
    }

    #[test]
    fn test_idle_gap_jumps_to_next_arrival() {
        let processes = vec![Process::new(1, 2, 3), Process::new(2, 10, 2)];
        let result = SjfScheduler::new().schedule(&processes).unwrap();

        assert_eq!(spans(&result), vec![(1, 2, 5), (2, 10, 12)]);
        assert_eq!(
            result.idle_intervals,
            vec![Interval::new(0, 2), Interval::new(5, 10)]
        );
    }

    #[test]
    fn test_context_switch_after_idle_gap() {
        let processes = vec![Process::new(1, 0, 2), Process::new(2, 5, 2)];
        let result = SjfScheduler::new()
            .with_context_switch(2)
            .schedule(&processes)
            .unwrap();

        assert_eq!(result.idle_intervals, vec![Interval::new(2, 5)]);
        assert_eq!(result.context_switches, vec![Interval::new(5, 7)]);
        assert_eq!(result.record_for(2).unwrap().start_time, 7);
    }

    #[test]
    fn test_tie_break_by_arrival_then_input_order() {
        let processes = vec![
            Process::new(1, 0, 10),
            Process::new(2, 3, 2),
            Process::new(3, 1, 2),
            Process::new(4, 1, 2),
        ];
        let result = SjfScheduler::new().schedule(&processes).unwrap();
        assert_eq!(result.execution_order(), vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_simultaneous_arrivals_at_zero() {
        let processes = vec![
            Process::new(1, 0, 6),
            Process::new(2, 0, 2),
            Process::new(3, 0, 4),
        ];
        let result = SjfScheduler::new().schedule(&processes).unwrap();
        assert_eq!(result.execution_order(), vec![2, 3, 1]);
        assert!(result.idle_intervals.is_empty());
    }

    #[test]
    fn test_input_not_mutated_and_deterministic() {
        let processes = reference_processes();
        let snapshot = processes.clone();
        let scheduler = SjfScheduler::new().with_context_switch(3);

        let first = scheduler.schedule(&processes).unwrap();
        let second = scheduler.schedule(&processes.clone()).unwrap();

        assert_eq!(processes, snapshot);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        let result = SjfScheduler::new()
            .with_context_switch(5)
            .schedule(&[])
            .unwrap();
        assert!(result.is_empty());
        assert!(result.idle_intervals.is_empty());
        assert!(result.context_switches.is_empty());
    }

    #[test]
    fn test_context_switch_overflow_rejected() {
        let err = SjfScheduler::new()
            .with_context_switch(i64::MAX)
            .schedule(&[Process::new(1, 0, 1), Process::new(2, 0, 1)])
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(ref errors)
                if errors[0].kind == ValidationErrorKind::TimeOverflow
        ));
    }

    #[test]
    fn test_negative_context_switch_rejected() {
        let err = SjfScheduler::new()
            .with_context_switch(-1)
            .schedule(&reference_processes())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(ref errors)
                if errors[0].kind == ValidationErrorKind::InvalidContextSwitch
        ));
    }
}

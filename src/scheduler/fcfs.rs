//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Walk the processes in the order supplied (no sorting by arrival).
//! 2. If the clock is behind the next arrival, jump to it and record the gap
//!    as idle time.
//! 3. Run the process to completion and advance the clock to its finish.
//!
//! # Complexity
//! O(n).

use tracing::{debug, info};

use super::Scheduler;
use crate::error::Result;
use crate::models::{Interval, Policy, Process, ProcessRecord, ScheduleResult, Time};
use crate::validation::validate_input;

/// First-Come-First-Served scheduler.
///
/// Assumes the caller presents processes in submission order. Finish times
/// are non-decreasing across the output and no two execution spans overlap.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::{FcfsScheduler, Scheduler};
///
/// let processes = vec![
///     Process::new(1, 0, 5),
///     Process::new(2, 1, 3),
///     Process::new(3, 2, 8),
/// ];
/// let result = FcfsScheduler::new().schedule(&processes).unwrap();
/// let finish: Vec<_> = result.records.iter().map(|r| r.finish_time).collect();
/// assert_eq!(finish, vec![5, 8, 16]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for FcfsScheduler {
    fn policy(&self) -> Policy {
        Policy::Fcfs
    }

    fn schedule(&self, processes: &[Process]) -> Result<ScheduleResult> {
        validate_input(processes, 0)?;

        let mut result = ScheduleResult::new(Policy::Fcfs, 0);
        let mut clock: Time = 0;

        for process in processes {
            if clock < process.arrival_time {
                debug!(from = clock, to = process.arrival_time, "processor idle");
                result
                    .idle_intervals
                    .push(Interval::new(clock, process.arrival_time));
                clock = process.arrival_time;
            }

            let record = ProcessRecord::execute(process, clock);
            debug!(
                pid = record.pid,
                start = record.start_time,
                finish = record.finish_time,
                "dispatched"
            );
            clock = record.finish_time;
            result.records.push(record);
        }

        info!(
            policy = %Policy::Fcfs,
            processes = result.len(),
            makespan = result.makespan(),
            "simulation complete"
        );
        Ok(result)
    }
}

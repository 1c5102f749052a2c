//! Schedule metrics.
//!
//! Computes per-run performance indicators from a completed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total / Avg Waiting | Sum / mean of (turnaround - burst) |
//! | Total / Avg Turnaround | Sum / mean of (finish - arrival) |
//! | CPU Utilization | Σ burst / max finish × 100 |
//! | Makespan | Latest finish time |
//! | Throughput | Processes completed per tick of makespan |
//!
//! Utilization divides by the maximum finish time over all records, not by
//! the finish time of whichever record happens to be last.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{ProcessRecord, ScheduleResult, Time};

/// Aggregate statistics for a completed schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Number of executed processes.
    pub process_count: usize,
    /// Sum of waiting times.
    pub total_waiting_time: Time,
    /// Sum of turnaround times.
    pub total_turnaround_time: Time,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Longest single wait.
    pub max_waiting_time: Time,
    /// Busy time as a percentage of makespan (0.0..=100.0).
    pub cpu_utilization: f64,
    /// Latest finish time.
    pub makespan: Time,
    /// Sum of burst times.
    pub total_burst_time: Time,
    /// Time with no ready process.
    pub total_idle_time: Time,
    /// Time spent on context switches.
    pub total_switch_time: Time,
    /// Completed processes per tick.
    pub throughput: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from a schedule.
    ///
    /// # Errors
    /// [`Error::EmptySchedule`] if the schedule holds no records, and
    /// [`Error::MetricOverflow`] if a waiting or turnaround total exceeds
    /// the tick range.
    pub fn calculate(result: &ScheduleResult) -> Result<Self> {
        if result.is_empty() {
            return Err(Error::EmptySchedule);
        }

        let count = result.len();
        let total_waiting_time = checked_total(result, "total waiting time", |r| r.waiting_time)?;
        let total_turnaround_time =
            checked_total(result, "total turnaround time", |r| r.turnaround_time)?;
        let max_waiting_time = result
            .records
            .iter()
            .map(|r| r.waiting_time)
            .max()
            .unwrap_or(0);

        // Non-empty with positive bursts, so makespan > 0.
        let makespan = result.makespan();
        let total_burst_time = result.total_burst_time();

        Ok(Self {
            process_count: count,
            total_waiting_time,
            total_turnaround_time,
            average_waiting_time: total_waiting_time as f64 / count as f64,
            average_turnaround_time: total_turnaround_time as f64 / count as f64,
            max_waiting_time,
            cpu_utilization: total_burst_time as f64 / makespan as f64 * 100.0,
            makespan,
            total_burst_time,
            total_idle_time: result.total_idle_time(),
            total_switch_time: result.total_switch_time(),
            throughput: count as f64 / makespan as f64,
        })
    }
}

/// Sums a per-record value, failing instead of wrapping.
///
/// Validation bounds every individual tick, but per-record sums such as
/// turnaround can still exceed `i64::MAX` on large inputs.
fn checked_total(
    result: &ScheduleResult,
    metric: &'static str,
    value: impl Fn(&ProcessRecord) -> Time,
) -> Result<Time> {
    result
        .records
        .iter()
        .try_fold(0 as Time, |acc, r| acc.checked_add(value(r)))
        .ok_or(Error::MetricOverflow(metric))
}

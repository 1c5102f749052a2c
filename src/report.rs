//! Textual schedule report.
//!
//! One row per executed process (pid, finish, waiting, turnaround) in
//! completion order, followed by CPU utilization and the average waiting
//! and turnaround times, all to two decimals.

use std::fmt;

use crate::error::Result;
use crate::models::ScheduleResult;
use crate::scheduler::ScheduleMetrics;

/// A printable report over a completed schedule.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    result: &'a ScheduleResult,
    metrics: ScheduleMetrics,
}

impl<'a> Report<'a> {
    /// Builds a report, computing metrics up front.
    ///
    /// Fails with [`Error::EmptySchedule`](crate::Error::EmptySchedule) when
    /// the schedule has no records.
    pub fn new(result: &'a ScheduleResult) -> Result<Self> {
        let metrics = ScheduleMetrics::calculate(result)?;
        Ok(Self { result, metrics })
    }

    pub fn metrics(&self) -> &ScheduleMetrics {
        &self.metrics
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<12}{:>13}{:>14}{:>17}",
            "Process ID", "Finish Time", "Waiting Time", "Turnaround Time"
        )?;
        for r in &self.result.records {
            writeln!(
                f,
                "{:<12}{:>13}{:>14}{:>17}",
                r.pid, r.finish_time, r.waiting_time, r.turnaround_time
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Total CPU Utilization: {:.2}%",
            self.metrics.cpu_utilization
        )?;
        writeln!(
            f,
            "Average Waiting Time: {:.2}",
            self.metrics.average_waiting_time
        )?;
        writeln!(
            f,
            "Average Turnaround Time: {:.2}",
            self.metrics.average_turnaround_time
        )
    }
}

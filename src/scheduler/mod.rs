//! Non-preemptive single-processor schedulers and schedule metrics.
//!
//! # Policies
//!
//! - [`FcfsScheduler`]: runs processes strictly in the order supplied.
//! - [`SjfScheduler`]: runs the shortest ready job next, charging a fixed
//!   context-switch overhead between consecutive executions.
//!
//! Both are pure transformations `&[Process] → ScheduleResult`: the input
//! slice is never mutated, so each policy effectively runs on its own copy.
//! Input is validated first and rejected as a whole on any problem.
//!
//! # Metrics
//!
//! [`ScheduleMetrics`] computes waiting/turnaround totals and averages and
//! CPU utilization from a completed [`ScheduleResult`].
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod fcfs;
mod kpi;
mod ready_queue;
mod sjf;

pub use fcfs::FcfsScheduler;
pub use kpi::ScheduleMetrics;
pub use ready_queue::ReadyQueue;
pub use sjf::SjfScheduler;

use crate::error::Result;
use crate::models::{Policy, Process, ScheduleResult};

/// A scheduling policy that turns a process set into a schedule.
pub trait Scheduler {
    /// The policy this scheduler implements.
    fn policy(&self) -> Policy;

    /// Simulates the processes and returns records in completion order.
    ///
    /// Fails with [`Error::InvalidInput`](crate::Error::InvalidInput) if any
    /// process (or scheduler parameter) is invalid. An empty input yields an
    /// empty result.
    fn schedule(&self, processes: &[Process]) -> Result<ScheduleResult>;
}

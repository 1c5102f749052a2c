//! Non-preemptive single-processor CPU scheduling simulator.
//!
//! Simulates a fixed, known-in-advance set of processes under
//! First-Come-First-Served or Shortest-Job-First scheduling, producing
//! per-process timing statistics and a chronological execution timeline.
//! All time is logical: the simulation clock only moves when the
//! scheduler advances it.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessRecord`, `ScheduleResult`,
//!   `Interval`, `Policy`
//! - **`scheduler`**: `FcfsScheduler`, `SjfScheduler`, `ScheduleMetrics`
//! - **`validation`**: Input checks (burst, arrival, duplicate pids)
//! - **`loader`**: Line-oriented text input
//! - **`report`**: Textual result table and summary
//! - **`timeline`**: Timeline data and ASCII Gantt rendering
//! - **`config`**: Policy selection, JSON-loadable
//! - **`workload`**: Seeded synthetic workloads
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::scheduler::{ScheduleMetrics, Scheduler, SjfScheduler};
//!
//! let processes = vec![Process::new(1, 0, 4), Process::new(2, 1, 2)];
//! let result = SjfScheduler::new().with_context_switch(1).schedule(&processes)?;
//! let metrics = ScheduleMetrics::calculate(&result)?;
//! assert_eq!(metrics.makespan, 7);
//! # Ok::<(), cpu_sched::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod timeline;
pub mod validation;
pub mod workload;

pub use config::SimulationConfig;
pub use error::{Error, Result};

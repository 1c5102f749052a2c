//! Scheduling domain models.
//!
//! Plain data shared by every scheduler: the input [`Process`] descriptor,
//! the executed [`ProcessRecord`], and the [`ScheduleResult`] a scheduler
//! returns. No model type performs I/O, so everything here is usable
//! without a filesystem or a display.

mod process;
mod schedule;

pub use process::{Pid, Process, ProcessRecord, Time};
pub use schedule::{Interval, Policy, ScheduleResult};

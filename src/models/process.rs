//! Process model.
//!
//! A [`Process`] is the immutable input descriptor handed to a scheduler.
//! A [`ProcessRecord`] is the value a scheduler produces once the process
//! has run: the descriptor plus every derived timing field.
//!
//! # Time Representation
//! All times are logical ticks relative to the simulation epoch (t=0).
//! Times are signed so that invalid input (negative arrival, zero burst)
//! can be represented and rejected by validation instead of by the parser.

use serde::{Deserialize, Serialize};

/// Process identifier as read from input. Opaque to ordering.
pub type Pid = i64;

/// Logical simulation time in ticks.
pub type Time = i64;

/// A process to be scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier.
    pub pid: Pid,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: Time,
    /// Total CPU time required, consumed in one contiguous span.
    pub burst_time: Time,
}

impl Process {
    /// Creates a new process descriptor.
    pub fn new(pid: Pid, arrival_time: Time, burst_time: Time) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
        }
    }
}

/// A process after execution, with all timing fields set.
///
/// Constructed only through [`ProcessRecord::execute`], which derives every
/// field from the start tick so the timing invariants always hold:
/// `finish = start + burst`, `turnaround = finish - arrival`,
/// `waiting = turnaround - burst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub pid: Pid,
    pub arrival_time: Time,
    pub burst_time: Time,
    pub start_time: Time,
    pub finish_time: Time,
    pub waiting_time: Time,
    pub turnaround_time: Time,
}

impl ProcessRecord {
    /// Runs `process` starting at `start_time`.
    ///
    /// Callers guarantee `start_time >= process.arrival_time` and that the
    /// finish tick fits in [`Time`]; validation rejects inputs that could
    /// push it past `i64::MAX`.
    pub fn execute(process: &Process, start_time: Time) -> Self {
        debug_assert!(start_time >= process.arrival_time);
        let finish_time = start_time + process.burst_time;
        let turnaround_time = finish_time - process.arrival_time;
        Self {
            pid: process.pid,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            start_time,
            finish_time,
            waiting_time: turnaround_time - process.burst_time,
            turnaround_time,
        }
    }

    /// Whether `[start, finish)` overlaps the half-open span `[begin, end)`.
    #[inline]
    pub fn overlaps(&self, begin: Time, end: Time) -> bool {
        self.start_time < end && begin < self.finish_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_derives_timings() {
        let p = Process::new(2, 1, 3);
        let r = ProcessRecord::execute(&p, 5);
        assert_eq!(r.start_time, 5);
        assert_eq!(r.finish_time, 8);
        assert_eq!(r.turnaround_time, 7);
        assert_eq!(r.waiting_time, 4);
        assert_eq!((r.pid, r.arrival_time, r.burst_time), (2, 1, 3));
    }

    #[test]
    fn test_execute_on_arrival_has_no_wait() {
        let r = ProcessRecord::execute(&Process::new(1, 4, 2), 4);
        assert_eq!(r.waiting_time, 0);
        assert_eq!(r.turnaround_time, 2);
    }

    #[test]
    fn test_overlaps_is_half_open() {
        let r = ProcessRecord::execute(&Process::new(1, 0, 5), 0);
        assert!(r.overlaps(4, 6));
        assert!(!r.overlaps(5, 8));
        assert!(!r.overlaps(0, 0));
    }
}

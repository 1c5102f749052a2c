//! Schedule (simulation result) model.
//!
//! A schedule is the ordered list of executed process records together
//! with the spans in which the processor was idle or switching context.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Pid, ProcessRecord, Time};
use crate::error::Error;

/// Scheduling policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// First-Come-First-Served, in the order the processes were supplied.
    #[default]
    Fcfs,
    /// Shortest-Job-First with optional context-switch overhead.
    Sjf,
}

impl Policy {
    /// Display name used in reports and chart titles.
    pub fn label(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Policy::Fcfs),
            "sjf" => Ok(Policy::Sjf),
            other => Err(Error::UnknownPolicy(other.to_string())),
        }
    }
}

/// A half-open time span `[begin, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub begin: Time,
    pub end: Time,
}

impl Interval {
    /// Creates a new interval.
    pub fn new(begin: Time, end: Time) -> Self {
        Self { begin, end }
    }

    /// Length of the span in ticks.
    #[inline]
    pub fn len(&self) -> Time {
        self.end - self.begin
    }

    /// Whether the span covers no ticks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.begin
    }
}

/// Result of running a scheduler over a set of processes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Policy that produced this result.
    pub policy: Policy,
    /// Context-switch overhead (ticks) charged between executions.
    pub context_switch_time: Time,
    /// Executed processes in completion order.
    pub records: Vec<ProcessRecord>,
    /// Spans where no process was ready, in chronological order.
    pub idle_intervals: Vec<Interval>,
    /// Spans spent switching context, in chronological order.
    pub context_switches: Vec<Interval>,
}

impl ScheduleResult {
    /// Creates an empty result for the given policy.
    pub fn new(policy: Policy, context_switch_time: Time) -> Self {
        Self {
            policy,
            context_switch_time,
            records: Vec::new(),
            idle_intervals: Vec::new(),
            context_switches: Vec::new(),
        }
    }

    /// Number of executed processes.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no process was executed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Latest finish time across all records (0 when empty).
    pub fn makespan(&self) -> Time {
        self.records
            .iter()
            .map(|r| r.finish_time)
            .max()
            .unwrap_or(0)
    }

    /// Sum of burst times over all records.
    pub fn total_burst_time(&self) -> Time {
        self.records.iter().map(|r| r.burst_time).sum()
    }

    /// Sum of idle interval lengths.
    pub fn total_idle_time(&self) -> Time {
        self.idle_intervals.iter().map(Interval::len).sum()
    }

    /// Sum of context-switch interval lengths.
    pub fn total_switch_time(&self) -> Time {
        self.context_switches.iter().map(Interval::len).sum()
    }

    /// Finds the record for a given pid.
    pub fn record_for(&self, pid: Pid) -> Option<&ProcessRecord> {
        self.records.iter().find(|r| r.pid == pid)
    }

    /// Pids in completion order.
    pub fn execution_order(&self) -> Vec<Pid> {
        self.records.iter().map(|r| r.pid).collect()
    }
}

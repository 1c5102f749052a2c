//! Input validation for scheduling runs.
//!
//! Checks every process before it enters a scheduler. Detects:
//! - Negative arrival times
//! - Non-positive burst times
//! - Duplicate process IDs
//! - Negative context-switch overhead
//! - Process sets whose simulated clock could overflow `i64`
//!
//! Schedulers never repair invalid input; every problem found is
//! reported back to the caller in one pass.

use std::collections::HashSet;
use thiserror::Error;

use crate::models::{Process, Time};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same pid.
    DuplicateId,
    /// Arrival time is negative.
    InvalidArrivalTime,
    /// Burst time is zero or negative.
    InvalidBurstTime,
    /// Context-switch overhead is negative.
    InvalidContextSwitch,
    /// Latest possible finish time does not fit in a tick counter.
    TimeOverflow,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. `arrival_time >= 0`
/// 2. `burst_time > 0`
/// 3. No duplicate pids
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut pids = HashSet::new();

    for p in processes {
        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrivalTime,
                format!(
                    "Process {} has negative arrival time {}",
                    p.pid, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurstTime,
                format!(
                    "Process {} has non-positive burst time {}",
                    p.pid, p.burst_time
                ),
            ));
        }

        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.pid),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a process set together with a context-switch overhead.
pub fn validate_input(processes: &[Process], context_switch_time: Time) -> ValidationResult {
    let mut errors = validate_processes(processes).err().unwrap_or_default();

    if context_switch_time < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidContextSwitch,
            format!("Context switch time must be non-negative, got {context_switch_time}"),
        ));
    }

    // Only meaningful once every value is individually in range.
    if errors.is_empty() && horizon(processes, context_switch_time).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest possible finish time (max arrival + total burst + context switches) \
             overflows the simulation clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on every tick a scheduler can reach:
/// `max(arrival) + Σ burst + (n - 1) · context_switch_time`.
///
/// The clock only ever jumps to an arrival or advances by a burst or a
/// switch, so no start, finish, or interval bound exceeds this value.
/// Returns `None` on overflow.
fn horizon(processes: &[Process], context_switch_time: Time) -> Option<Time> {
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    let total_burst = processes
        .iter()
        .try_fold(0 as Time, |acc, p| acc.checked_add(p.burst_time))?;
    let switches = Time::try_from(processes.len().saturating_sub(1)).ok()?;
    latest_arrival
        .checked_add(total_burst)?
        .checked_add(switches.checked_mul(context_switch_time)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 8),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
        assert!(validate_input(&sample_processes(), 2).is_ok());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_processes(&[Process::new(1, -1, 5)]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidArrivalTime);
    }

    #[test]
    fn test_non_positive_burst() {
        let errors =
            validate_processes(&[Process::new(1, 0, 0), Process::new(2, 0, -3)]).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::InvalidBurstTime));
    }

    #[test]
    fn test_duplicate_pid() {
        let errors =
            validate_processes(&[Process::new(7, 0, 1), Process::new(7, 3, 2)]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains('7')));
    }

    #[test]
    fn test_negative_context_switch() {
        let errors = validate_input(&sample_processes(), -1).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidContextSwitch);
    }

    #[test]
    fn test_late_arrival_overflow_rejected() {
        let errors = validate_input(&[Process::new(1, i64::MAX - 1, 5)], 0).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_context_switch_overflow_rejected() {
        let processes = [Process::new(1, 0, 1), Process::new(2, 0, 1)];
        let errors = validate_input(&processes, i64::MAX).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        // A single process never pays the switch.
        assert!(validate_input(&processes[..1], i64::MAX).is_ok());
    }

    #[test]
    fn test_total_burst_overflow_rejected() {
        let processes: Vec<Process> = (1..=5)
            .map(|pid| Process::new(pid, 0, i64::MAX / 4))
            .collect();
        let errors = validate_input(&processes, 0).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_horizon_at_limit_accepted() {
        let processes = [Process::new(1, i64::MAX - 10, 4), Process::new(2, 0, 4)];
        assert!(validate_input(&processes, 2).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let errors = validate_input(&[Process::new(1, -2, 0)], -5).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}

//! Text input loader.
//!
//! # Format
//!
//! Line-oriented, whitespace-separated integers:
//!
//! ```text
//! ContextSwitchTime 2      <- SJF only, first non-blank line
//! 1 0 7                    <- pid arrival_time burst_time
//! 2 2 4
//! ```
//!
//! Blank lines are ignored. A process line that is not exactly three
//! integers is skipped, logged at `warn`, and its line number recorded in
//! [`Workload::skipped_lines`]. Lines that parse but carry invalid values
//! (zero burst, negative arrival) are kept; validation rejects them before
//! scheduling.
//!
//! A `ContextSwitchTime` header whose value is not an integer is a hard
//! [`Error::Parse`]. If the first non-blank SJF line is not a header at all,
//! the overhead defaults to 0 and the line is read as a process line.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{Policy, Process, Time};

/// Header keyword on the first line of SJF input.
pub const CONTEXT_SWITCH_HEADER: &str = "ContextSwitchTime";

/// Processes read from input, plus the SJF overhead if given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    /// Context-switch overhead (0 for FCFS input).
    pub context_switch_time: Time,
    /// Processes in input order.
    pub processes: Vec<Process>,
    /// 1-based numbers of malformed lines that were skipped.
    pub skipped_lines: Vec<usize>,
}

impl Workload {
    /// Creates a workload from processes with no overhead.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            ..Default::default()
        }
    }

    /// Sets the context-switch overhead.
    pub fn with_context_switch(mut self, context_switch_time: Time) -> Self {
        self.context_switch_time = context_switch_time;
        self
    }
}

/// Parses FCFS input: one `pid arrival burst` triple per line.
pub fn parse_fcfs(input: &str) -> Workload {
    let mut workload = Workload::default();
    read_process_lines(input.lines().enumerate(), &mut workload);
    workload
}

/// Parses SJF input: a `ContextSwitchTime <n>` header, then process lines.
pub fn parse_sjf(input: &str) -> Result<Workload> {
    let mut workload = Workload::default();
    let mut lines = input
        .lines()
        .enumerate()
        .skip_while(|(_, line)| line.trim().is_empty())
        .peekable();

    if let Some(&(index, first)) = lines.peek() {
        let mut tokens = first.split_whitespace();
        if tokens.next() == Some(CONTEXT_SWITCH_HEADER) {
            let value = tokens.next().ok_or_else(|| Error::Parse {
                line: index + 1,
                message: format!("{CONTEXT_SWITCH_HEADER} header has no value"),
            })?;
            workload.context_switch_time = value.parse().map_err(|_| Error::Parse {
                line: index + 1,
                message: format!("{CONTEXT_SWITCH_HEADER} value '{value}' is not an integer"),
            })?;
            lines.next();
        } else {
            warn!("no {CONTEXT_SWITCH_HEADER} header, assuming 0");
        }
    }

    read_process_lines(lines, &mut workload);
    Ok(workload)
}

/// Parses input for the given policy.
pub fn parse(input: &str, policy: Policy) -> Result<Workload> {
    match policy {
        Policy::Fcfs => Ok(parse_fcfs(input)),
        Policy::Sjf => parse_sjf(input),
    }
}

/// Reads and parses an input file for the given policy.
pub fn load_file(path: impl AsRef<Path>, policy: Policy) -> Result<Workload> {
    let path = path.as_ref();
    let input = fs::read_to_string(path)?;
    let workload = parse(&input, policy)?;
    debug!(
        path = %path.display(),
        processes = workload.processes.len(),
        skipped = workload.skipped_lines.len(),
        "loaded workload"
    );
    Ok(workload)
}

fn read_process_lines<'a>(
    lines: impl Iterator<Item = (usize, &'a str)>,
    workload: &mut Workload,
) {
    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        match parse_process_line(line) {
            Some(process) => workload.processes.push(process),
            None => {
                warn!(line = index + 1, content = line, "skipping malformed process line");
                workload.skipped_lines.push(index + 1);
            }
        }
    }
}

/// Parses `pid arrival burst`. Returns `None` unless exactly three integers.
fn parse_process_line(line: &str) -> Option<Process> {
    let mut fields = line.split_whitespace().map(str::parse::<i64>);
    let pid = fields.next()?.ok()?;
    let arrival = fields.next()?.ok()?;
    let burst = fields.next()?.ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(Process::new(pid, arrival, burst))
}

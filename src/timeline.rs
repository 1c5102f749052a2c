//! Execution timeline and Gantt rendering.
//!
//! [`Timeline`] is the plain-data view a renderer consumes: per executed
//! process `(pid, start, burst)`, plus idle and context-switch spans, in
//! chronological order. [`TimelineRenderer`] turns it into an artifact;
//! [`TextGantt`] draws an ASCII chart with one row per process.

use serde::{Deserialize, Serialize};

use crate::models::{Pid, Policy, ScheduleResult, Time};

/// One span on the processor timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    Run { pid: Pid, start: Time, burst: Time },
    Idle { begin: Time, end: Time },
    ContextSwitch { begin: Time, end: Time },
}

impl Segment {
    /// Start tick.
    pub fn begin(&self) -> Time {
        match *self {
            Segment::Run { start, .. } => start,
            Segment::Idle { begin, .. } | Segment::ContextSwitch { begin, .. } => begin,
        }
    }

    /// End tick (exclusive).
    pub fn end(&self) -> Time {
        match *self {
            Segment::Run { start, burst, .. } => start + burst,
            Segment::Idle { end, .. } | Segment::ContextSwitch { end, .. } => end,
        }
    }
}

/// Chronological processor timeline for one schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub policy: Policy,
    pub segments: Vec<Segment>,
}

impl Timeline {
    /// Builds the timeline from a schedule result.
    pub fn from_result(result: &ScheduleResult) -> Self {
        let mut segments: Vec<Segment> = result
            .records
            .iter()
            .map(|r| Segment::Run {
                pid: r.pid,
                start: r.start_time,
                burst: r.burst_time,
            })
            .chain(result.idle_intervals.iter().map(|i| Segment::Idle {
                begin: i.begin,
                end: i.end,
            }))
            .chain(
                result
                    .context_switches
                    .iter()
                    .map(|i| Segment::ContextSwitch {
                        begin: i.begin,
                        end: i.end,
                    }),
            )
            .collect();
        segments.sort_by_key(Segment::begin);

        Self {
            policy: result.policy,
            segments,
        }
    }

    /// Last tick covered by any segment.
    pub fn end(&self) -> Time {
        self.segments.iter().map(Segment::end).max().unwrap_or(0)
    }

    /// Executed processes as `(pid, start, burst)` in execution order.
    pub fn runs(&self) -> impl Iterator<Item = (Pid, Time, Time)> + '_ {
        self.segments.iter().filter_map(|s| match *s {
            Segment::Run { pid, start, burst } => Some((pid, start, burst)),
            _ => None,
        })
    }
}

/// Produces a visual artifact from a timeline.
pub trait TimelineRenderer {
    fn render(&self, timeline: &Timeline) -> String;
}

/// ASCII Gantt chart.
///
/// Each cell covers `scale` ticks, where `scale` is the smallest integer
/// that fits the timeline into `max_width` cells. A cell is filled when its
/// span overlaps a segment.
#[derive(Debug, Clone, Copy)]
pub struct TextGantt {
    max_width: usize,
}

const RUN_CELL: char = '#';
const IDLE_CELL: char = '.';
const SWITCH_CELL: char = '~';

impl TextGantt {
    pub fn new(max_width: usize) -> Self {
        Self {
            max_width: max_width.max(1),
        }
    }

    fn row(cells: usize, scale: Time, spans: &[(Time, Time)], fill: char) -> String {
        (0..cells)
            .map(|i| {
                let cell_begin = i as Time * scale;
                let cell_end = cell_begin + scale;
                if spans.iter().any(|&(b, e)| b < cell_end && cell_begin < e) {
                    fill
                } else {
                    ' '
                }
            })
            .collect()
    }
}

impl Default for TextGantt {
    fn default() -> Self {
        Self::new(72)
    }
}

impl TimelineRenderer for TextGantt {
    fn render(&self, timeline: &Timeline) -> String {
        let end = timeline.end();
        let width = self.max_width as Time;
        let scale = ((end + width - 1) / width).max(1);
        let cells = ((end + scale - 1) / scale) as usize;

        let mut rows: Vec<(String, String)> = timeline
            .runs()
            .map(|(pid, start, burst)| {
                let cells = Self::row(cells, scale, &[(start, start + burst)], RUN_CELL);
                (format!("P{pid}"), cells)
            })
            .collect();

        let idle: Vec<(Time, Time)> = timeline
            .segments
            .iter()
            .filter_map(|s| match *s {
                Segment::Idle { begin, end } => Some((begin, end)),
                _ => None,
            })
            .collect();
        if !idle.is_empty() {
            rows.push(("Idle".into(), Self::row(cells, scale, &idle, IDLE_CELL)));
        }

        let switches: Vec<(Time, Time)> = timeline
            .segments
            .iter()
            .filter_map(|s| match *s {
                Segment::ContextSwitch { begin, end } => Some((begin, end)),
                _ => None,
            })
            .collect();
        if !switches.is_empty() {
            rows.push(("CS".into(), Self::row(cells, scale, &switches, SWITCH_CELL)));
        }

        let label_width = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
        let mut out = format!(
            "{} Gantt Chart (1 cell = {} tick{})\n",
            timeline.policy,
            scale,
            if scale == 1 { "" } else { "s" }
        );
        for (label, cells) in &rows {
            out.push_str(&format!("{label:<label_width$} |{cells}|\n"));
        }
        out.push_str(&format!("{:label_width$}  0{end:>cells$}\n", ""));
        out
    }
}

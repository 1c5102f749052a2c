//! Simulation configuration.
//!
//! Selects the policy and its parameters. Deserializable from JSON, with
//! every field optional:
//!
//! ```json
//! { "policy": "sjf", "context_switch_time": 2 }
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::loader::Workload;
use crate::models::{Policy, Process, ScheduleResult, Time};
use crate::scheduler::{FcfsScheduler, Scheduler, SjfScheduler};

/// Which scheduler to run and with what overhead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Scheduling policy.
    pub policy: Policy,
    /// Context-switch overhead in ticks. Only SJF charges it.
    pub context_switch_time: Time,
}

impl SimulationConfig {
    /// Creates a config for the given policy with no overhead.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            context_switch_time: 0,
        }
    }

    /// Creates a config for running a loaded workload.
    pub fn for_workload(policy: Policy, workload: &Workload) -> Self {
        Self::new(policy).with_context_switch(workload.context_switch_time)
    }

    /// Sets the context-switch overhead.
    pub fn with_context_switch(mut self, context_switch_time: Time) -> Self {
        self.context_switch_time = context_switch_time;
        self
    }

    /// Parses a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the configured scheduler.
    pub fn scheduler(&self) -> Box<dyn Scheduler> {
        match self.policy {
            Policy::Fcfs => {
                if self.context_switch_time != 0 {
                    warn!(
                        context_switch_time = self.context_switch_time,
                        "FCFS ignores context-switch overhead"
                    );
                }
                Box::new(FcfsScheduler::new())
            }
            Policy::Sjf => {
                Box::new(SjfScheduler::new().with_context_switch(self.context_switch_time))
            }
        }
    }

    /// Runs the configured scheduler over `processes`.
    pub fn run(&self, processes: &[Process]) -> Result<ScheduleResult> {
        self.scheduler().schedule(processes)
    }
}

//! Synthetic workload generation.
//!
//! Produces reproducible process sets for experiments and property tests:
//! at every tick a process arrives with probability `arrival_probability`;
//! each arrival is short with probability `short_probability`, long
//! otherwise.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Process, Time};

/// Seeded Bernoulli-arrival workload generator.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    horizon: Time,
    arrival_probability: f64,
    short_probability: f64,
    short_burst: Time,
    long_burst: Time,
    seed: u64,
}

impl WorkloadGenerator {
    /// Creates a generator over `horizon` ticks with default mix.
    pub fn new(horizon: Time) -> Self {
        Self {
            horizon,
            arrival_probability: 0.3,
            short_probability: 0.3,
            short_burst: 2,
            long_burst: 6,
            seed: 0,
        }
    }

    /// Sets the per-tick arrival probability (clamped to 0.0..=1.0).
    pub fn with_arrival_probability(mut self, p: f64) -> Self {
        self.arrival_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the probability that an arrival is short (clamped to 0.0..=1.0).
    pub fn with_short_probability(mut self, p: f64) -> Self {
        self.short_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the short and long burst lengths (each at least 1 tick).
    pub fn with_bursts(mut self, short: Time, long: Time) -> Self {
        self.short_burst = short.max(1);
        self.long_burst = long.max(1);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates processes in arrival order with pids starting at 1.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut processes = Vec::new();

        for t in 0..self.horizon.max(0) {
            if rng.random::<f64>() < self.arrival_probability {
                let burst = if rng.random::<f64>() < self.short_probability {
                    self.short_burst
                } else {
                    self.long_burst
                };
                let pid = processes.len() as i64 + 1;
                processes.push(Process::new(pid, t, burst));
            }
        }

        processes
    }
}

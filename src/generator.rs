//! Random workload generation.
//!
//! Produces valid workloads (arrival ≥ 0, service > 0, one priority per
//! process) from configurable ranges. The caller supplies the RNG, so a
//! seeded generator gives reproducible workloads.
//!
//! # Usage
//!
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use u_cpusched::generator::{generate, WorkloadConfig};
//!
//! let mut rng = SmallRng::seed_from_u64(1);
//! let workload = generate(&WorkloadConfig::new().with_process_count(4), &mut rng);
//! assert_eq!(workload.len(), 4);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Workload;

/// Ranges for generated workloads. All bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub process_count: usize,
    /// Latest arrival time.
    pub max_arrival: i64,
    /// Shortest service time (≥ 1).
    pub min_service: i64,
    /// Longest service time.
    pub max_service: i64,
    /// Largest priority value; priorities are drawn from `0..=max_priority`.
    pub max_priority: i32,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            process_count: 5,
            max_arrival: 10,
            min_service: 1,
            max_service: 10,
            max_priority: 5,
        }
    }
}

impl WorkloadConfig {
    /// Creates a config with default ranges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of processes.
    pub fn with_process_count(mut self, count: usize) -> Self {
        self.process_count = count;
        self
    }

    /// Sets the latest arrival time (negative values clamp to 0).
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the service time range. `min` clamps to 1 and `max` to `min`.
    pub fn with_service_range(mut self, min: i64, max: i64) -> Self {
        self.min_service = min.max(1);
        self.max_service = max.max(self.min_service);
        self
    }

    /// Sets the largest priority value (negative values clamp to 0).
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority.max(0);
        self
    }
}

/// Draws a workload with priorities attached.
pub fn generate<R: Rng>(config: &WorkloadConfig, rng: &mut R) -> Workload {
    let n = config.process_count;
    let max_arrival = config.max_arrival.max(0);
    let min_service = config.min_service.max(1);
    let max_service = config.max_service.max(min_service);
    let max_priority = config.max_priority.max(0);

    let arrival_times = (0..n).map(|_| rng.random_range(0..=max_arrival)).collect();
    let service_times = (0..n)
        .map(|_| rng.random_range(min_service..=max_service))
        .collect();
    let priorities = (0..n).map(|_| rng.random_range(0..=max_priority)).collect();

    Workload::from_arrays(arrival_times, service_times).with_priorities(priorities)
}

//! Process and workload models.
//!
//! A process is a single CPU burst with a known arrival time and service
//! duration. A workload is the caller-facing input shape: parallel arrays,
//! as read from a file or the command line.

use serde::{Deserialize, Serialize};

/// A process to be dispatched on the simulated processor.
///
/// Immutable input. Remaining service time is working state owned by each
/// simulation run, not stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// 1-based position in the original input.
    pub id: usize,
    /// Time unit at which the process becomes ready (≥ 0).
    pub arrival_time: i64,
    /// Total processor time required (> 0).
    pub service_time: i64,
}

impl Process {
    /// Creates a process with the given 1-based id.
    pub fn new(id: usize, arrival_time: i64, service_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            service_time,
        }
    }

    /// Position of this process in the input slice.
    #[inline]
    pub fn index(&self) -> usize {
        self.id - 1
    }
}

/// Raw simulation input as parallel arrays.
///
/// Priorities are optional here and only required by the priority policies;
/// see [`crate::validation::resolve_policy`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    /// Arrival time per process.
    pub arrival_times: Vec<i64>,
    /// Service time per process.
    pub service_times: Vec<i64>,
    /// Priority per process (lower = more urgent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priorities: Option<Vec<i32>>,
}

impl Workload {
    /// Creates a workload from arrival and service arrays.
    pub fn from_arrays(arrival_times: Vec<i64>, service_times: Vec<i64>) -> Self {
        Self {
            arrival_times,
            service_times,
            priorities: None,
        }
    }

    /// Attaches per-process priorities.
    pub fn with_priorities(mut self, priorities: Vec<i32>) -> Self {
        self.priorities = Some(priorities);
        self
    }

    /// Number of processes (length of the arrival array).
    pub fn len(&self) -> usize {
        self.arrival_times.len()
    }

    /// Whether the workload has no processes.
    pub fn is_empty(&self) -> bool {
        self.arrival_times.is_empty()
    }

    /// Builds the process set with 1-based ids.
    ///
    /// Assumes equal array lengths; extra entries in the longer array are
    /// ignored. Run [`crate::validation::validate_workload`] first.
    pub fn processes(&self) -> Vec<Process> {
        self.arrival_times
            .iter()
            .zip(&self.service_times)
            .enumerate()
            .map(|(i, (&arrival, &service))| Process::new(i + 1, arrival, service))
            .collect()
    }
}

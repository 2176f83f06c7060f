//! Simulation result model.
//!
//! A result records which process held the processor when (the timeline),
//! the dispatch trace, and the derived per-process metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - service |
//! | Response | first dispatch - arrival |
//! | Makespan | latest completion time |
//! | Utilization | busy time / makespan |

use serde::{Deserialize, Serialize};
use std::fmt;

use super::PolicyKind;

/// A contiguous interval during which one process held the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Id of the running process.
    pub process_id: usize,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(process_id: usize, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Length of the slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Outcome of one simulation run.
///
/// Per-process vectors are indexed by original input position, regardless
/// of the order in which the policy dispatched the processes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Policy that produced this result.
    pub policy: PolicyKind,
    /// Process ids, one entry per dispatch unit.
    ///
    /// Non-preemptive policies emit one entry per process, SJF-P and
    /// Priority-P one per time unit, Round Robin one per time slice.
    pub execution_order: Vec<usize>,
    /// Gantt timeline, adjacent runs of the same process merged.
    pub slices: Vec<Slice>,
    /// Completion time per process.
    pub completion_times: Vec<i64>,
    /// Waiting time per process.
    pub waiting_times: Vec<i64>,
    /// Turnaround time per process.
    pub turnaround_times: Vec<i64>,
    /// Response time per process (first dispatch - arrival).
    pub response_times: Vec<i64>,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean response time.
    pub avg_response: f64,
}

impl SimulationResult {
    /// Number of simulated processes.
    pub fn process_count(&self) -> usize {
        self.completion_times.len()
    }

    /// Latest completion time (0 for an empty result).
    pub fn makespan(&self) -> i64 {
        self.completion_times.iter().copied().max().unwrap_or(0)
    }

    /// Total time the processor was running a process.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// Time in `[0, makespan)` during which the processor was idle.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Fraction of `[0, makespan)` the processor was busy (0.0..1.0).
    pub fn utilization(&self) -> f64 {
        let makespan = self.makespan();
        if makespan == 0 {
            0.0
        } else {
            self.busy_time() as f64 / makespan as f64
        }
    }

    /// Number of times the processor switched from one process to another.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }

    /// Multi-line text report with averages rounded to two decimals.
    pub fn report(&self) -> String {
        self.to_string()
    }
}

fn join<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order of Execution: {}", join(&self.execution_order))?;
        writeln!(f, "Waiting Times: {}", join(&self.waiting_times))?;
        writeln!(f, "Turnaround Times: {}", join(&self.turnaround_times))?;
        write!(
            f,
            "Average Waiting Time: {:.2}, Average Turnaround Time: {:.2}",
            self.avg_waiting, self.avg_turnaround
        )
    }
}

//! Per-process timing metrics.
//!
//! Derives waiting and turnaround times from completion times. Shared by
//! every dispatch policy; the policies only decide *when* each process
//! completes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - service |
//! | Response | first dispatch - arrival |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use crate::models::{PolicyKind, Process, SimulationResult, Slice};

/// Computes turnaround and waiting times.
///
/// Pure function. All three slices must have the same length and every
/// process must already have a completion time.
///
/// # Returns
/// `(turnaround_times, waiting_times)`, indexed like the inputs.
pub fn compute_times(
    arrival_times: &[i64],
    service_times: &[i64],
    completion_times: &[i64],
) -> (Vec<i64>, Vec<i64>) {
    debug_assert_eq!(arrival_times.len(), service_times.len());
    debug_assert_eq!(arrival_times.len(), completion_times.len());

    let turnaround: Vec<i64> = completion_times
        .iter()
        .zip(arrival_times)
        .map(|(&completion, &arrival)| completion - arrival)
        .collect();
    let waiting: Vec<i64> = turnaround
        .iter()
        .zip(service_times)
        .map(|(&turnaround, &service)| turnaround - service)
        .collect();

    (turnaround, waiting)
}

/// Arithmetic mean. Returns 0.0 for an empty slice.
///
/// Accumulates in `f64`, so sums past `i64::MAX` do not overflow.
pub fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
    }
}

/// Assembles the final result from a finished run.
pub(crate) fn summarize(
    policy: PolicyKind,
    processes: &[Process],
    completion_times: Vec<i64>,
    first_dispatch: Vec<i64>,
    execution_order: Vec<usize>,
    slices: Vec<Slice>,
) -> SimulationResult {
    let arrival: Vec<i64> = processes.iter().map(|p| p.arrival_time).collect();
    let service: Vec<i64> = processes.iter().map(|p| p.service_time).collect();

    let (turnaround_times, waiting_times) = compute_times(&arrival, &service, &completion_times);
    let response_times: Vec<i64> = first_dispatch
        .iter()
        .zip(&arrival)
        .map(|(&start, &arrival)| start - arrival)
        .collect();

    debug_assert!(
        waiting_times.iter().all(|&w| w >= 0),
        "negative waiting time under {policy}: {waiting_times:?}"
    );
    debug_assert!(response_times.iter().all(|&r| r >= 0));

    SimulationResult {
        policy,
        execution_order,
        slices,
        avg_waiting: mean(&waiting_times),
        avg_turnaround: mean(&turnaround_times),
        avg_response: mean(&response_times),
        completion_times,
        waiting_times,
        turnaround_times,
        response_times,
    }
}

//! Priority policies.
//!
//! Lower priority value = more urgent. Priorities are supplied by the
//! caller, indexed by input position.
//!
//! The two variants break ties differently:
//! - **Priority-NP** orders by `(priority, arrival time)`, then by input
//!   position (stable sort), and serves that order first-come-first-served.
//!   It does not check which processes have arrived at each decision point;
//!   the processor idles for a process that ranks first but arrives late.
//! - **Priority-P** picks, every time unit, the first ready process in
//!   index order with the smallest priority value.

use super::fcfs::run_in_order;
use super::state::run_unit_steps;
use crate::models::{PolicyKind, Process, SimulationResult};

/// Priority, non-preemptive.
///
/// Reorders the processes by `(priority asc, arrival asc)` and runs them
/// FCFS in that order. Results are reported by original id and position.
pub fn priority_non_preemptive(processes: &[Process], priorities: &[i32]) -> SimulationResult {
    debug_assert_eq!(processes.len(), priorities.len());

    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| (priorities[i], processes[i].arrival_time));

    run_in_order(processes, &order).finish(PolicyKind::PriorityNonPreemptive)
}

/// Priority, preemptive, re-evaluated every time unit.
pub fn priority_preemptive(processes: &[Process], priorities: &[i32]) -> SimulationResult {
    debug_assert_eq!(processes.len(), priorities.len());

    run_unit_steps(processes, |_, i| priorities[i]).finish(PolicyKind::PriorityPreemptive)
}

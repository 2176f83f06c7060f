//! First-Come-First-Served.
//!
//! Non-preemptive dispatch in input order. The input order is taken as the
//! arrival order; callers wanting true arrival order must sort first.

use super::state::RunState;
use crate::models::{PolicyKind, Process, SimulationResult};

/// Runs FCFS over the processes in input order.
///
/// Each process starts at `max(clock, arrival)` and runs to completion.
pub fn fcfs(processes: &[Process]) -> SimulationResult {
    let order: Vec<usize> = (0..processes.len()).collect();
    run_in_order(processes, &order).finish(PolicyKind::Fcfs)
}

/// Runs each process to completion in the given index order, idling until
/// a process arrives if the processor gets ahead of it.
pub(crate) fn run_in_order<'a>(processes: &'a [Process], order: &[usize]) -> RunState<'a> {
    let mut state = RunState::new(processes);
    for &i in order {
        state.wait_until(processes[i].arrival_time);
        state.run(i, processes[i].service_time);
    }
    state
}

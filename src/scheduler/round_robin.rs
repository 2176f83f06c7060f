//! Round Robin.
//!
//! A FIFO ready queue over which the processor rotates in fixed time
//! slices. Each dispatch runs the queue head for `min(remaining, quantum)`.
//!
//! # Queue discipline
//! 1. Admit every newly arrived process, in index order.
//! 2. Dequeue the head and run one slice.
//! 3. Admit processes that arrived during the slice.
//! 4. Requeue the current process at the tail if it is unfinished.
//!
//! Step 3 precedes step 4: arrivals during a slice are queued ahead of the
//! process that was just preempted.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use log::trace;

use super::state::RunState;
use crate::models::{PolicyKind, Process, SimulationResult};

/// Round Robin with the given quantum (> 0).
///
/// Emits one execution-order entry per time slice.
pub fn round_robin(processes: &[Process], quantum: i64) -> SimulationResult {
    debug_assert!(quantum > 0, "quantum must be positive");

    let n = processes.len();
    let mut state = RunState::new(processes);
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(n);
    // Admitted to the queue at least once; never reset.
    let mut visited = vec![false; n];

    while !state.is_finished() {
        admit_arrivals(&state, &mut queue, &mut visited);

        let Some(current) = queue.pop_front() else {
            if !state.idle_until_next_arrival() {
                break;
            }
            continue;
        };

        let slice = state.remaining(current).min(quantum);
        state.run(current, slice);

        admit_arrivals(&state, &mut queue, &mut visited);

        if state.remaining(current) > 0 {
            queue.push_back(current);
        }
    }

    state.finish(PolicyKind::RoundRobin)
}

fn admit_arrivals(state: &RunState<'_>, queue: &mut VecDeque<usize>, visited: &mut [bool]) {
    for (i, seen) in visited.iter_mut().enumerate() {
        if !*seen && state.is_ready(i) {
            *seen = true;
            queue.push_back(i);
            trace!("P{} enters ready queue (depth {})", i + 1, queue.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Slice, Workload};
    use crate::scheduler::fcfs;

    #[test]
    fn test_rr_basic_rotation() {
        let processes = Workload::from_arrays(vec![0, 0, 0], vec![5, 3, 1]).processes();
        let result = round_robin(&processes, 2);

        // 0-2 P1, 2-4 P2, 4-5 P3, 5-7 P1, 7-8 P2, 8-9 P1
        assert_eq!(result.execution_order, vec![1, 2, 3, 1, 2, 1]);
        assert_eq!(result.completion_times, vec![9, 8, 5]);
        assert_eq!(result.waiting_times, vec![4, 5, 4]);
    }

    #[test]
    fn test_rr_arrivals_queue_ahead_of_preempted() {
        // P2 arrives during P1's first slice and must run before P1 resumes.
        let processes = Workload::from_arrays(vec![0, 1], vec![4, 2]).processes();
        let result = round_robin(&processes, 2);

        assert_eq!(result.execution_order, vec![1, 2, 1]);
        assert_eq!(result.completion_times, vec![6, 4]);
    }

    #[test]
    fn test_rr_arrival_at_slice_end_goes_first() {
        // P3 arrives exactly when P1's slice ends (t=3): queued before P1.
        let processes = Workload::from_arrays(vec![0, 0, 3], vec![6, 3, 3]).processes();
        let result = round_robin(&processes, 3);

        // 0-3 P1, 3-6 P2, 6-9 P3, 9-12 P1
        assert_eq!(result.execution_order, vec![1, 2, 3, 1]);
        assert_eq!(result.completion_times, vec![12, 6, 9]);
    }

    #[test]
    fn test_rr_idle_between_arrivals() {
        let processes = Workload::from_arrays(vec![0, 10], vec![1, 3]).processes();
        let result = round_robin(&processes, 2);

        assert_eq!(result.execution_order, vec![1, 2, 2]);
        assert_eq!(result.completion_times, vec![1, 13]);
        assert_eq!(
            result.slices,
            vec![Slice::new(1, 0, 1), Slice::new(2, 10, 13)]
        );
    }

    #[test]
    fn test_rr_large_quantum_matches_fcfs() {
        let processes = Workload::from_arrays(vec![0, 0, 0, 0], vec![3, 7, 1, 4]).processes();
        let rr = round_robin(&processes, 7);
        let fcfs = fcfs(&processes);

        assert_eq!(rr.completion_times, fcfs.completion_times);
        assert_eq!(rr.execution_order, fcfs.execution_order);
    }

    #[test]
    fn test_rr_quantum_one() {
        let processes = Workload::from_arrays(vec![0, 0], vec![2, 2]).processes();
        let result = round_robin(&processes, 1);

        assert_eq!(result.execution_order, vec![1, 2, 1, 2]);
        assert_eq!(result.completion_times, vec![3, 4]);
        assert_eq!(result.context_switches(), 3);
    }
}

//! Shortest-Job-First policies.
//!
//! - **SJF-NP**: at each decision point, the arrived process with the
//!   shortest service time runs to completion.
//! - **SJF-P** (SRTF): every time unit, the arrived process with the
//!   shortest remaining time runs for one unit.
//!
//! Ties go to the lowest original index in both variants.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use super::state::{run_unit_steps, RunState};
use crate::models::{PolicyKind, Process, SimulationResult};

/// Shortest-Job-First, non-preemptive.
///
/// If nothing has arrived, the processor idles until the next arrival.
pub fn sjf_non_preemptive(processes: &[Process]) -> SimulationResult {
    let mut state = RunState::new(processes);
    while !state.is_finished() {
        match state.select_ready(|i| processes[i].service_time) {
            Some(i) => state.run(i, processes[i].service_time),
            None => {
                if !state.idle_until_next_arrival() {
                    break;
                }
            }
        }
    }
    state.finish(PolicyKind::SjfNonPreemptive)
}

/// Shortest-Remaining-Time-First.
///
/// Produces a per-time-unit execution trace.
pub fn sjf_preemptive(processes: &[Process]) -> SimulationResult {
    run_unit_steps(processes, |state, i| state.remaining(i)).finish(PolicyKind::SjfPreemptive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Slice, Workload};

    #[test]
    fn test_sjf_np_picks_shortest_arrived() {
        // At t=4 both P2 (3) and P3 (1) have arrived: P3 goes first.
        let processes = Workload::from_arrays(vec![0, 1, 2], vec![4, 3, 1]).processes();
        let result = sjf_non_preemptive(&processes);

        assert_eq!(result.execution_order, vec![1, 3, 2]);
        assert_eq!(result.completion_times, vec![4, 8, 5]);
        assert_eq!(result.waiting_times, vec![0, 4, 2]);
    }

    #[test]
    fn test_sjf_np_no_preemption() {
        // P2 is shorter but arrives after P1 started.
        let processes = Workload::from_arrays(vec![0, 1], vec![5, 1]).processes();
        let result = sjf_non_preemptive(&processes);

        assert_eq!(result.execution_order, vec![1, 2]);
        assert_eq!(result.completion_times, vec![5, 6]);
    }

    #[test]
    fn test_sjf_np_tie_lowest_index() {
        let processes = Workload::from_arrays(vec![0, 0, 0], vec![2, 2, 2]).processes();
        let result = sjf_non_preemptive(&processes);
        assert_eq!(result.execution_order, vec![1, 2, 3]);
    }

    #[test]
    fn test_sjf_np_idle_until_arrival() {
        let processes = Workload::from_arrays(vec![3, 4], vec![2, 1]).processes();
        let result = sjf_non_preemptive(&processes);

        assert_eq!(result.completion_times, vec![5, 6]);
        assert_eq!(result.slices[0], Slice::new(1, 3, 5));
    }

    #[test]
    fn test_srtf_preempts_on_shorter_arrival() {
        let processes = Workload::from_arrays(vec![0, 1], vec![5, 2]).processes();
        let result = sjf_preemptive(&processes);

        assert_eq!(result.execution_order, vec![1, 2, 2, 1, 1, 1, 1]);
        assert_eq!(result.completion_times, vec![7, 3]);
        assert_eq!(result.waiting_times, vec![2, 0]);
        assert_eq!(
            result.slices,
            vec![Slice::new(1, 0, 1), Slice::new(2, 1, 3), Slice::new(1, 3, 7)]
        );
        assert_eq!(result.context_switches(), 2);
    }

    #[test]
    fn test_srtf_tie_keeps_lower_index() {
        // At t=2 P1 has 2 left and P2 needs 2: P1 keeps the processor.
        let processes = Workload::from_arrays(vec![0, 2], vec![4, 2]).processes();
        let result = sjf_preemptive(&processes);

        assert_eq!(result.completion_times, vec![4, 6]);
        assert_eq!(result.context_switches(), 1);
    }

    #[test]
    fn test_srtf_idle_gap() {
        let processes = Workload::from_arrays(vec![0, 6], vec![2, 1]).processes();
        let result = sjf_preemptive(&processes);

        assert_eq!(result.execution_order, vec![1, 1, 2]);
        assert_eq!(result.completion_times, vec![2, 7]);
        assert_eq!(result.idle_time(), 4);
    }
}

//! Dispatch policies and timing metrics.
//!
//! Each policy is a pure function from the immutable process set (plus its
//! own parameters) to a [`SimulationResult`]. Policies own their working
//! state, so runs are independent and deterministic.
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection | Tie-break |
//! |--------|-----------|-----------|-----------|
//! | FCFS | no | input order | n/a |
//! | SJF-NP | no | min service time | lowest index |
//! | SJF-P | per unit | min remaining time | lowest index |
//! | Priority-NP | no | (priority, arrival) order | input order |
//! | Priority-P | per unit | min priority | first found |
//! | RR | per quantum | FIFO queue | index order on admission |
//!
//! When no process is ready, the clock jumps to the next arrival.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::models::{Policy, Workload};
//! use u_cpusched::scheduler;
//!
//! let workload = Workload::from_arrays(vec![0, 1], vec![5, 2]);
//! let result = scheduler::run(&workload, &Policy::SjfPreemptive).unwrap();
//! assert_eq!(result.completion_times, vec![7, 3]);
//! ```

mod fcfs;
mod metrics;
mod priority;
mod round_robin;
mod sjf;
mod state;

pub use fcfs::fcfs;
pub use metrics::{compute_times, mean};
pub use priority::{priority_non_preemptive, priority_preemptive};
pub use round_robin::round_robin;
pub use sjf::{sjf_non_preemptive, sjf_preemptive};

use log::debug;

use crate::models::{Policy, Process, SimulationResult, Workload};
use crate::validation::{validate_input, ValidationError};

/// Runs the selected policy over pre-validated processes.
///
/// The engine performs no validation: priorities must match the process
/// count, the quantum must be positive, and the process set non-empty.
pub fn simulate(processes: &[Process], policy: &Policy) -> SimulationResult {
    debug!("simulating {policy} over {} processes", processes.len());

    let result = match policy {
        Policy::Fcfs => fcfs(processes),
        Policy::SjfNonPreemptive => sjf_non_preemptive(processes),
        Policy::SjfPreemptive => sjf_preemptive(processes),
        Policy::PriorityNonPreemptive { priorities } => {
            priority_non_preemptive(processes, priorities)
        }
        Policy::PriorityPreemptive { priorities } => priority_preemptive(processes, priorities),
        Policy::RoundRobin { quantum } => round_robin(processes, *quantum),
    };

    debug!(
        "{policy} finished: makespan={}, dispatches={}, avg_waiting={:.2}, avg_turnaround={:.2}",
        result.makespan(),
        result.execution_order.len(),
        result.avg_waiting,
        result.avg_turnaround
    );
    result
}

/// Validates the input, then runs the selected policy.
///
/// # Returns
/// The simulation result, or every validation error found. No policy runs
/// if validation fails.
pub fn run(workload: &Workload, policy: &Policy) -> Result<SimulationResult, Vec<ValidationError>> {
    validate_input(workload, policy)?;
    Ok(simulate(&workload.processes(), policy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate, WorkloadConfig};
    use crate::models::PolicyKind;
    use crate::validation::ValidationErrorKind;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn all_policies(n: usize, priorities: &[i32]) -> Vec<Policy> {
        assert_eq!(priorities.len(), n);
        vec![
            Policy::Fcfs,
            Policy::SjfNonPreemptive,
            Policy::SjfPreemptive,
            Policy::PriorityNonPreemptive {
                priorities: priorities.to_vec(),
            },
            Policy::PriorityPreemptive {
                priorities: priorities.to_vec(),
            },
            Policy::RoundRobin { quantum: 1 },
            Policy::RoundRobin { quantum: 3 },
        ]
    }

    fn check_invariants(processes: &[Process], result: &SimulationResult) {
        let n = processes.len();
        assert_eq!(result.completion_times.len(), n);
        assert_eq!(result.waiting_times.len(), n);
        assert_eq!(result.turnaround_times.len(), n);

        // Averages are the plain means.
        let sum_w: i64 = result.waiting_times.iter().sum();
        let sum_t: i64 = result.turnaround_times.iter().sum();
        assert!((result.avg_waiting - sum_w as f64 / n as f64).abs() < 1e-10);
        assert!((result.avg_turnaround - sum_t as f64 / n as f64).abs() < 1e-10);

        for (i, p) in processes.iter().enumerate() {
            assert!(result.waiting_times[i] >= 0);
            assert!(result.turnaround_times[i] >= p.service_time);
            assert_eq!(
                result.turnaround_times[i],
                result.completion_times[i] - p.arrival_time
            );
            assert!(result.execution_order.contains(&p.id));
        }

        // Timeline: single core, no run before arrival or after completion,
        // each process receives exactly its service time.
        let mut served = vec![0i64; n];
        for pair in result.slices.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
        for slice in &result.slices {
            let p = &processes[slice.process_id - 1];
            assert!(slice.start >= p.arrival_time);
            assert!(slice.end <= result.completion_times[p.index()]);
            served[p.index()] += slice.duration();
        }
        for (i, p) in processes.iter().enumerate() {
            assert_eq!(served[i], p.service_time);
        }
        assert_eq!(result.busy_time(), processes.iter().map(|p| p.service_time).sum::<i64>());
    }

    #[test]
    fn test_invariants_on_random_workloads() {
        let mut rng = SmallRng::seed_from_u64(42);
        let config = WorkloadConfig::new()
            .with_process_count(8)
            .with_max_arrival(20)
            .with_service_range(1, 9)
            .with_max_priority(4);

        for _ in 0..50 {
            let workload = generate(&config, &mut rng);
            let processes = workload.processes();
            let priorities = workload.priorities.clone().unwrap();

            for policy in all_policies(processes.len(), &priorities) {
                let result = simulate(&processes, &policy);
                assert_eq!(result.policy, policy.kind());
                check_invariants(&processes, &result);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let mut rng = SmallRng::seed_from_u64(7);
        let workload = generate(&WorkloadConfig::new(), &mut rng);
        let processes = workload.processes();
        let priorities = workload.priorities.clone().unwrap();

        for policy in all_policies(processes.len(), &priorities) {
            assert_eq!(simulate(&processes, &policy), simulate(&processes, &policy));
        }
    }

    #[test]
    fn test_rr_large_quantum_equals_fcfs_when_all_arrive_at_zero() {
        let mut rng = SmallRng::seed_from_u64(3);
        let config = WorkloadConfig::new().with_process_count(6).with_max_arrival(0);

        for _ in 0..20 {
            let workload = generate(&config, &mut rng);
            let processes = workload.processes();
            let max_service = processes.iter().map(|p| p.service_time).max().unwrap();

            let rr = simulate(&processes, &Policy::RoundRobin { quantum: max_service });
            let fcfs = simulate(&processes, &Policy::Fcfs);
            assert_eq!(rr.completion_times, fcfs.completion_times);
        }
    }

    #[test]
    fn test_preemptive_trace_is_per_unit() {
        let workload = Workload::from_arrays(vec![0, 1, 3], vec![3, 2, 4]);
        let processes = workload.processes();

        let srtf = simulate(&processes, &Policy::SjfPreemptive);
        assert_eq!(srtf.execution_order.len(), 9);

        let prio = simulate(
            &processes,
            &Policy::PriorityPreemptive {
                priorities: vec![1, 2, 3],
            },
        );
        assert_eq!(prio.execution_order, vec![1, 1, 1, 2, 2, 3, 3, 3, 3]);
    }

    #[test]
    fn test_run_validates_first() {
        let workload = Workload::from_arrays(vec![0, 1], vec![3]);
        let errors = run(&workload, &Policy::Fcfs).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::LengthMismatch);

        let workload = Workload::from_arrays(vec![0], vec![3]);
        let errors = run(&workload, &Policy::RoundRobin { quantum: 0 }).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveQuantum);
    }

    #[test]
    fn test_run_rejects_clock_overflow() {
        let workload = Workload::from_arrays(vec![i64::MAX - 1, 0], vec![5, 1]);
        for policy in all_policies(2, &[1, 2]) {
            let errors = run(&workload, &policy).unwrap_err();
            assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
        }
    }

    #[test]
    fn test_run_near_time_limit() {
        // P2 runs 0..6, the processor idles, P1 finishes exactly at i64::MAX - 6;
        // FCFS serves P1 first so P2 ends exactly at i64::MAX.
        let workload = Workload::from_arrays(vec![i64::MAX - 10, 0], vec![4, 6]);
        for policy in all_policies(2, &[2, 1]) {
            let result = run(&workload, &policy).unwrap();
            if result.policy == PolicyKind::Fcfs {
                assert_eq!(result.completion_times, vec![i64::MAX - 6, i64::MAX]);
            } else {
                assert_eq!(result.completion_times, vec![i64::MAX - 6, 6]);
            }
            assert_eq!(result.turnaround_times[0], 4);
            assert_eq!(result.busy_time(), 10);
        }
    }

    #[test]
    fn test_run_fcfs_reference() {
        let workload = Workload::from_arrays(vec![0, 1, 2], vec![4, 3, 1]);
        let result = run(&workload, &Policy::Fcfs).unwrap();

        assert_eq!(result.policy, PolicyKind::Fcfs);
        assert_eq!(result.completion_times, vec![4, 7, 8]);
        assert_eq!(result.waiting_times, vec![0, 3, 5]);
        assert!((result.avg_waiting - 8.0 / 3.0).abs() < 1e-10);
    }
}

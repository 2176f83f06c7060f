//! Single-core CPU dispatch simulator.
//!
//! Simulates a fixed set of processes with known arrival and service times
//! under six classical dispatch policies and reports the execution order
//! together with per-process waiting and turnaround times.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Workload`, `Policy`,
//!   `SimulationResult`, `Slice`
//! - **`scheduler`**: The policies (FCFS, SJF-NP, SJF-P, Priority-NP,
//!   Priority-P, Round Robin) and the shared timing metrics
//! - **`validation`**: Boundary checks run before any policy
//! - **`generator`**: Seeded random workloads
//!
//! # Architecture
//!
//! The engine in `scheduler` is pure and assumes validated input. Input
//! parsing, validation, and rendering sit at the boundary (`validation`,
//! `SimulationResult::report`, and the `cpusched` binary).
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod generator;
pub mod models;
pub mod scheduler;
pub mod validation;

//! Simulation domain models.
//!
//! Provides the value types shared by every dispatch policy: the input
//! processes, the policy selector, and the simulation result.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).
//! The unit is abstract; the consumer decides whether it means ticks or ms.
//!
//! # Identity
//! A process is identified by its 1-based position in the caller's input.
//! Execution orders and timelines report this id, never a slice index.

mod policy;
mod process;
mod result;

pub use policy::{Policy, PolicyKind};
pub use process::{Process, Workload};
pub use result::{SimulationResult, Slice};

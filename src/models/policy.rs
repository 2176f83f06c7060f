//! Dispatch policy selection.
//!
//! [`PolicyKind`] names a policy; [`Policy`] is the tagged variant carrying
//! the auxiliary parameters a policy needs (priorities, quantum). Names are
//! resolved once at the boundary, so the engine never matches on strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::{ValidationError, ValidationErrorKind};

/// The six supported dispatch policies, without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    /// First-Come-First-Served (input order).
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    SjfNonPreemptive,
    /// Shortest-Remaining-Time-First.
    SjfPreemptive,
    /// Priority, non-preemptive.
    PriorityNonPreemptive,
    /// Priority, preemptive at unit granularity.
    PriorityPreemptive,
    /// Round Robin with a fixed quantum.
    RoundRobin,
}

impl PolicyKind {
    /// All policies, in menu order.
    pub const ALL: [PolicyKind; 6] = [
        PolicyKind::Fcfs,
        PolicyKind::SjfNonPreemptive,
        PolicyKind::SjfPreemptive,
        PolicyKind::PriorityNonPreemptive,
        PolicyKind::PriorityPreemptive,
        PolicyKind::RoundRobin,
    ];

    /// Canonical short name (e.g., "SJF-NP").
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "FCFS",
            PolicyKind::SjfNonPreemptive => "SJF-NP",
            PolicyKind::SjfPreemptive => "SJF-P",
            PolicyKind::PriorityNonPreemptive => "Priority-NP",
            PolicyKind::PriorityPreemptive => "Priority-P",
            PolicyKind::RoundRobin => "RR",
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "First-Come-First-Served",
            PolicyKind::SjfNonPreemptive => "Shortest Job First (non-preemptive)",
            PolicyKind::SjfPreemptive => "Shortest Remaining Time First",
            PolicyKind::PriorityNonPreemptive => "Priority (non-preemptive)",
            PolicyKind::PriorityPreemptive => "Priority (preemptive)",
            PolicyKind::RoundRobin => "Round Robin",
        }
    }

    /// Whether the policy may switch away from an unfinished process.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            PolicyKind::SjfPreemptive | PolicyKind::PriorityPreemptive | PolicyKind::RoundRobin
        )
    }

    /// Whether the policy needs a priority per process.
    pub fn requires_priorities(&self) -> bool {
        matches!(
            self,
            PolicyKind::PriorityNonPreemptive | PolicyKind::PriorityPreemptive
        )
    }

    /// Whether the policy needs a quantum.
    pub fn requires_quantum(&self) -> bool {
        matches!(self, PolicyKind::RoundRobin)
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = ValidationError;

    /// Accepts the canonical names and the long forms
    /// (`SJF-non-preemptive`, `Priority-preemptive`, ...), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => PolicyKind::Fcfs,
            "sjf-np" | "sjf-non-preemptive" => PolicyKind::SjfNonPreemptive,
            "sjf-p" | "sjf-preemptive" | "srtf" => PolicyKind::SjfPreemptive,
            "priority-np" | "priority-non-preemptive" => PolicyKind::PriorityNonPreemptive,
            "priority-p" | "priority-preemptive" => PolicyKind::PriorityPreemptive,
            "rr" | "round-robin" => PolicyKind::RoundRobin,
            _ => {
                return Err(ValidationError::new(
                    ValidationErrorKind::UnknownPolicy,
                    format!("Unknown scheduling algorithm: '{}'", s.trim()),
                ))
            }
        };
        Ok(kind)
    }
}

/// A policy together with its required parameters.
///
/// # Example
/// ```
/// use u_cpusched::models::{Policy, PolicyKind};
///
/// let rr = Policy::RoundRobin { quantum: 2 };
/// assert_eq!(rr.kind(), PolicyKind::RoundRobin);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "kebab-case")]
pub enum Policy {
    /// First-Come-First-Served: input order, each process runs to completion.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    SjfNonPreemptive,
    /// Shortest-Remaining-Time-First, re-evaluated every time unit.
    SjfPreemptive,
    /// Priority order (lower = more urgent), non-preemptive.
    PriorityNonPreemptive {
        /// Priority per process, indexed by input position.
        priorities: Vec<i32>,
    },
    /// Priority, re-evaluated every time unit.
    PriorityPreemptive {
        /// Priority per process, indexed by input position.
        priorities: Vec<i32>,
    },
    /// Round Robin over a FIFO ready queue.
    RoundRobin {
        /// Maximum time slice per dispatch (> 0).
        quantum: i64,
    },
}

impl Policy {
    /// The parameterless kind of this policy.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Policy::Fcfs => PolicyKind::Fcfs,
            Policy::SjfNonPreemptive => PolicyKind::SjfNonPreemptive,
            Policy::SjfPreemptive => PolicyKind::SjfPreemptive,
            Policy::PriorityNonPreemptive { .. } => PolicyKind::PriorityNonPreemptive,
            Policy::PriorityPreemptive { .. } => PolicyKind::PriorityPreemptive,
            Policy::RoundRobin { .. } => PolicyKind::RoundRobin,
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::RoundRobin { quantum } => write!(f, "RR(q={quantum})"),
            other => f.write_str(other.kind().name()),
        }
    }
}

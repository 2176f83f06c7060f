//! Input validation for simulation runs.
//!
//! The simulation engine assumes well-formed input and performs no checks
//! of its own. Everything that can be wrong with caller input is detected
//! here, before any policy runs:
//! - Empty workload
//! - Mismatched array lengths
//! - Negative arrival times, non-positive service times
//! - Missing or mismatched priorities for the priority policies
//! - Missing or non-positive quantum for Round Robin
//! - Unknown policy names and malformed list input
//! - Workloads whose schedule would end past `i64::MAX`

use crate::models::{Policy, PolicyKind, Workload};
use std::fmt;
use std::str::FromStr;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The workload has no processes.
    EmptyWorkload,
    /// Parallel input arrays differ in length.
    LengthMismatch,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires zero or negative service.
    NonPositiveService,
    /// A priority policy was selected without priorities.
    MissingPriorities,
    /// Round Robin was selected without a positive quantum.
    NonPositiveQuantum,
    /// The policy name is not recognized.
    UnknownPolicy,
    /// A list or file could not be parsed.
    MalformedInput,
    /// The latest arrival plus the total service exceeds `i64::MAX`.
    TimeOverflow,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates the workload arrays.
///
/// Checks:
/// 1. At least one process
/// 2. Service array has the same length as the arrival array
/// 3. Priorities, if present, have the same length
/// 4. All arrival times ≥ 0
/// 5. All service times > 0
/// 6. Latest arrival + total service fits in `i64` (no schedule can end later)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_workload(workload: &Workload) -> ValidationResult {
    let mut errors = Vec::new();
    let n = workload.len();

    if n == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "Number of processes must be positive",
        ));
    }

    if workload.service_times.len() != n {
        errors.push(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!(
                "Expected {n} service times, got {}",
                workload.service_times.len()
            ),
        ));
    }

    if let Some(priorities) = &workload.priorities {
        if priorities.len() != n {
            errors.push(ValidationError::new(
                ValidationErrorKind::LengthMismatch,
                format!("Expected {n} priorities, got {}", priorities.len()),
            ));
        }
    }

    for (i, &arrival) in workload.arrival_times.iter().enumerate() {
        if arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} has negative arrival time {arrival}", i + 1),
            ));
        }
    }

    for (i, &service) in workload.service_times.iter().enumerate() {
        if service <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveService,
                format!("Process {} has non-positive service time {service}", i + 1),
            ));
        }
    }

    if errors.is_empty() && schedule_horizon(workload).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total service time exceeds the representable time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on every completion time: the latest arrival plus the sum of
/// all service times. `None` if that bound overflows `i64`.
fn schedule_horizon(workload: &Workload) -> Option<i64> {
    let latest = workload.arrival_times.iter().copied().max().unwrap_or(0);
    workload
        .service_times
        .iter()
        .try_fold(latest, |acc, &service| acc.checked_add(service))
}

/// Validates policy parameters against a workload of `n` processes.
pub fn validate_policy(policy: &Policy, n: usize) -> ValidationResult {
    let mut errors = Vec::new();

    match policy {
        Policy::PriorityNonPreemptive { priorities } | Policy::PriorityPreemptive { priorities } => {
            if priorities.len() != n {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MissingPriorities,
                    format!(
                        "{} requires {n} priorities, got {}",
                        policy.kind(),
                        priorities.len()
                    ),
                ));
            }
        }
        Policy::RoundRobin { quantum } => {
            if *quantum <= 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonPositiveQuantum,
                    format!("Quantum must be positive, got {quantum}"),
                ));
            }
        }
        Policy::Fcfs | Policy::SjfNonPreemptive | Policy::SjfPreemptive => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a workload and the policy selected for it.
///
/// Collects errors from both [`validate_workload`] and [`validate_policy`].
pub fn validate_input(workload: &Workload, policy: &Policy) -> ValidationResult {
    let mut errors = Vec::new();

    if let Err(mut e) = validate_workload(workload) {
        errors.append(&mut e);
    }
    if let Err(mut e) = validate_policy(policy, workload.len()) {
        errors.append(&mut e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Builds a [`Policy`] from its kind and the auxiliary parameters.
///
/// Priorities are required for the priority policies and a quantum for
/// Round Robin; parameters a policy does not use are ignored. Parameter
/// values themselves are checked later by [`validate_policy`].
pub fn resolve_policy(
    kind: PolicyKind,
    priorities: Option<Vec<i32>>,
    quantum: Option<i64>,
) -> Result<Policy, ValidationError> {
    let missing_priorities = || {
        ValidationError::new(
            ValidationErrorKind::MissingPriorities,
            format!("{kind} requires a priority for each process"),
        )
    };

    let policy = match kind {
        PolicyKind::Fcfs => Policy::Fcfs,
        PolicyKind::SjfNonPreemptive => Policy::SjfNonPreemptive,
        PolicyKind::SjfPreemptive => Policy::SjfPreemptive,
        PolicyKind::PriorityNonPreemptive => Policy::PriorityNonPreemptive {
            priorities: priorities.ok_or_else(missing_priorities)?,
        },
        PolicyKind::PriorityPreemptive => Policy::PriorityPreemptive {
            priorities: priorities.ok_or_else(missing_priorities)?,
        },
        PolicyKind::RoundRobin => Policy::RoundRobin {
            quantum: quantum.ok_or_else(|| {
                ValidationError::new(
                    ValidationErrorKind::NonPositiveQuantum,
                    "RR requires a quantum",
                )
            })?,
        },
    };

    Ok(policy)
}

/// Parses a comma-separated list (e.g., `"0, 1, 2"`).
///
/// Blank entries are rejected rather than read as zero.
pub fn parse_list<T: FromStr>(field: &str, input: &str) -> Result<Vec<T>, ValidationError> {
    input
        .split(',')
        .map(str::trim)
        .enumerate()
        .map(|(i, item)| {
            item.parse::<T>().map_err(|_| {
                ValidationError::new(
                    ValidationErrorKind::MalformedInput,
                    format!("{field}: entry {} ('{item}') is not a valid integer", i + 1),
                )
            })
        })
        .collect()
}

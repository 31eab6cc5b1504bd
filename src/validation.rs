//! Input validation for simulation instances.
//!
//! Checks structural integrity of a job set before a run. Detects:
//! - Duplicate job ids
//! - Processing-time vectors that do not cover every machine
//! - Negative arrival times
//! - Negative workloads or processing times
//!
//! Zero durations are legitimate work (the machine is busy until the
//! next time advance) and pass validation.

use std::collections::HashSet;

use crate::models::{UniformJob, UnrelatedJob};

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
    /// Two jobs share the same id.
    DuplicateId,
    /// A processing-time vector does not match the machine count.
    ProcessingVectorMismatch,
    /// A job arrives before the epoch.
    NegativeArrival,
    /// A workload or processing-time entry is negative.
    NegativeDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a uniform job set (identical and related models).
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_uniform(jobs: &[UniformJob]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for job in jobs {
        if !seen.insert(job.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate job id {}", job.id),
            ));
        }
        if job.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("job {} arrives at {}", job.id, job.arrival),
            ));
        }
        if job.workload < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeDuration,
                format!("job {} has workload {}", job.id, job.workload),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates an unrelated job set against a machine count.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_unrelated(jobs: &[UnrelatedJob], machine_count: usize) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for job in jobs {
        if !seen.insert(job.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate job id {}", job.id),
            ));
        }
        if job.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("job {} arrives at {}", job.id, job.arrival),
            ));
        }
        if job.processing_times.len() != machine_count {
            errors.push(ValidationError::new(
                ValidationErrorKind::ProcessingVectorMismatch,
                format!(
                    "job {} has {} processing times for {} machines",
                    job.id,
                    job.processing_times.len(),
                    machine_count
                ),
            ));
        }
        if let Some(&bad) = job.processing_times.iter().find(|&&t| t < 0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeDuration,
                format!("job {} has processing time {}", job.id, bad),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

//! Job models.
//!
//! A job is an immutable description of one unit of work: identity,
//! arrival time, and how long it takes to process. The identical and
//! related machine models share a scalar-workload job; the unrelated
//! model carries one processing time per machine.
//!
//! Jobs are created by a job source when their arrival tick is reached,
//! accumulate in a scheduler until placed, and are never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::{JobId, Time};

/// Anything with an arrival tick. Job sources use this to deliver
/// jobs in arrival order regardless of the machine model.
pub trait Arriving {
    /// Tick at which the job becomes schedulable.
    fn arrival(&self) -> Time;
}

/// A job for the identical and related machine models.
///
/// `workload` is the amount of work to process; a machine of speed `s`
/// finishes it in `workload / s` ticks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniformJob {
    /// Unique identifier, assigned by the job producer.
    pub id: JobId,
    /// Tick at which the job became schedulable.
    pub arrival: Time,
    /// Work units to process.
    pub workload: Time,
}

/// A job for the unrelated machine model.
///
/// `processing_times[m]` is the time the job takes on machine `m`.
/// The vector length must equal the machine count, and entries carry
/// no cross-machine relationship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnrelatedJob {
    /// Unique identifier, assigned by the job producer.
    pub id: JobId,
    /// Tick at which the job became schedulable.
    pub arrival: Time,
    /// Processing time per machine index.
    pub processing_times: Vec<Time>,
}

impl UniformJob {
    /// Creates a new job.
    pub fn new(id: JobId, arrival: Time, workload: Time) -> Self {
        Self {
            id,
            arrival,
            workload,
        }
    }
}

impl UnrelatedJob {
    /// Creates a new job.
    pub fn new(id: JobId, arrival: Time, processing_times: Vec<Time>) -> Self {
        Self {
            id,
            arrival,
            processing_times,
        }
    }

    /// Processing time of this job on the machine at `index`.
    #[inline]
    pub fn time_on(&self, index: usize) -> Time {
        self.processing_times[index]
    }
}

impl Arriving for UniformJob {
    fn arrival(&self) -> Time {
        self.arrival
    }
}

impl Arriving for UnrelatedJob {
    fn arrival(&self) -> Time {
        self.arrival
    }
}

// Identity is the id alone; two deliveries of the same job compare equal.
impl PartialEq for UniformJob {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for UniformJob {}

impl Hash for UniformJob {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialEq for UnrelatedJob {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for UnrelatedJob {}

impl Hash for UnrelatedJob {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for UniformJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "job {} (arrival {}, workload {})",
            self.id, self.arrival, self.workload
        )
    }
}

impl fmt::Display for UnrelatedJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "job {} (arrival {}, times {:?})",
            self.id, self.arrival, self.processing_times
        )
    }
}

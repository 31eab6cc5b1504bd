//! Job sources.
//!
//! A [`JobSource`] is the boundary between the simulation driver and
//! job production: queried with the current tick, it hands over every
//! job that has become schedulable since the previous query, exactly
//! once and in arrival order. Its exhaustion signal is independent of
//! the scheduler's completion flag; the driver needs both.
//!
//! Two implementations are provided: [`MemorySource`] serves a
//! pre-built job list, and [`JsonJobFile`] reads the JSON instance
//! format:
//!
//! ```json
//! {
//!   "machines": 2,
//!   "jobs": [
//!     { "arrival": 0, "processing_times": [3, 2] },
//!     { "arrival": 1, "processing_times": [5, 4] }
//!   ]
//! }
//! ```
//!
//! Uniform instances carry `"workload": 3` per job instead of the
//! vector. Job ids are assigned by position in the file.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::models::{Arriving, JobId, Time, UniformJob, UnrelatedJob};

/// Errors raised while loading a job instance.
#[derive(Debug, Error)]
pub enum InputError {
    /// The instance file could not be read.
    #[error("failed to read instance file: {0}")]
    Io(#[from] std::io::Error),
    /// The instance file is not valid JSON or misses required fields.
    #[error("malformed instance: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The instance was written for a different machine count.
    #[error("instance declares {declared} machines but the run uses {actual}")]
    MachineCountMismatch {
        /// Count declared in the instance file.
        declared: usize,
        /// Count requested by the caller.
        actual: usize,
    },
    /// A job's processing-time vector does not cover every machine.
    #[error("job {job} has {got} processing times for {expected} machines")]
    ProcessingVectorMismatch {
        /// Offending job id.
        job: JobId,
        /// Vector length found.
        got: usize,
        /// Declared machine count.
        expected: usize,
    },
}

/// Supplies jobs to the driver as simulated time reaches their arrival.
pub trait JobSource {
    /// Job shape this source produces.
    type Job;

    /// Returns every not-yet-delivered job with arrival `<= now`, in
    /// arrival order. A job is delivered at most once; querying a tick
    /// twice yields nothing new the second time.
    fn fetch_due(&mut self, now: Time) -> Vec<Self::Job>;

    /// True once every known job has been delivered.
    fn is_exhausted(&self) -> bool;
}

/// In-memory job source.
///
/// Keeps the jobs sorted by arrival and walks a cursor forward on each
/// query, so late queries catch up on everything due in between.
#[derive(Debug, Clone)]
pub struct MemorySource<J> {
    jobs: Vec<J>,
    cursor: usize,
}

impl<J: Arriving> MemorySource<J> {
    /// Creates a source over `jobs`. Sorting is stable, so jobs sharing
    /// an arrival keep their construction order.
    pub fn new(mut jobs: Vec<J>) -> Self {
        jobs.sort_by_key(|job| job.arrival());
        Self { jobs, cursor: 0 }
    }

    /// Total number of jobs this source knows about.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the source holds no jobs at all.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl<J: Arriving + Clone> JobSource for MemorySource<J> {
    type Job = J;

    fn fetch_due(&mut self, now: Time) -> Vec<J> {
        let due: Vec<J> = self.jobs[self.cursor..]
            .iter()
            .take_while(|job| job.arrival() <= now)
            .cloned()
            .collect();
        self.cursor += due.len();
        due
    }

    fn is_exhausted(&self) -> bool {
        self.cursor == self.jobs.len()
    }
}

#[derive(Debug, Deserialize)]
struct Instance<R> {
    machines: usize,
    jobs: Vec<R>,
}

#[derive(Debug, Deserialize)]
struct UniformRecord {
    arrival: Time,
    workload: Time,
}

#[derive(Debug, Deserialize)]
struct UnrelatedRecord {
    arrival: Time,
    processing_times: Vec<Time>,
}

/// File-backed job source over the JSON instance format.
///
/// Carries the machine count declared by the instance so the driver can
/// check it against the bank it actually built.
#[derive(Debug)]
pub struct JsonJobFile<J> {
    machines: usize,
    source: MemorySource<J>,
}

impl JsonJobFile<UniformJob> {
    /// Loads a uniform-job instance from `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, InputError> {
        Self::from_str(&fs::read_to_string(path)?)
    }

    /// Parses a uniform-job instance from JSON text.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Result<Self, InputError> {
        let instance: Instance<UniformRecord> = serde_json::from_str(text)?;
        let jobs = instance
            .jobs
            .into_iter()
            .enumerate()
            .map(|(id, record)| UniformJob::new(id as JobId, record.arrival, record.workload))
            .collect();
        Ok(Self {
            machines: instance.machines,
            source: MemorySource::new(jobs),
        })
    }
}

impl JsonJobFile<UnrelatedJob> {
    /// Loads an unrelated-job instance from `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, InputError> {
        Self::from_str(&fs::read_to_string(path)?)
    }

    /// Parses an unrelated-job instance from JSON text. Every job's
    /// vector must cover the declared machine count.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Result<Self, InputError> {
        let instance: Instance<UnrelatedRecord> = serde_json::from_str(text)?;
        let mut jobs = Vec::with_capacity(instance.jobs.len());
        for (id, record) in instance.jobs.into_iter().enumerate() {
            let id = id as JobId;
            if record.processing_times.len() != instance.machines {
                return Err(InputError::ProcessingVectorMismatch {
                    job: id,
                    got: record.processing_times.len(),
                    expected: instance.machines,
                });
            }
            jobs.push(UnrelatedJob::new(id, record.arrival, record.processing_times));
        }
        Ok(Self {
            machines: instance.machines,
            source: MemorySource::new(jobs),
        })
    }
}

impl<J> JsonJobFile<J> {
    /// Machine count declared by the instance.
    pub fn machines(&self) -> usize {
        self.machines
    }

    /// Errors unless the instance fits a bank of `count` machines.
    pub fn check_machine_count(&self, count: usize) -> Result<(), InputError> {
        if self.machines != count {
            return Err(InputError::MachineCountMismatch {
                declared: self.machines,
                actual: count,
            });
        }
        Ok(())
    }
}

impl<J: Arriving + Clone> JobSource for JsonJobFile<J> {
    type Job = J;

    fn fetch_due(&mut self, now: Time) -> Vec<J> {
        self.source.fetch_due(now)
    }

    fn is_exhausted(&self) -> bool {
        self.source.is_exhausted()
    }
}

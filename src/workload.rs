//! Random instance generation for simulation experiments.
//!
//! Produces job sets with uniformly drawn arrivals and durations. The
//! generator is seeded, so an experiment can be reproduced exactly from
//! its parameters.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{JobId, Time, UniformJob, UnrelatedJob};

/// Builder for random job sets.
///
/// Arrivals are drawn from `0..=arrival_span` and sorted, so ids follow
/// arrival order; durations are drawn from the configured range.
///
/// # Example
///
/// ```
/// use schedsim::workload::WorkloadBuilder;
///
/// let jobs = WorkloadBuilder::new(20)
///     .with_arrival_span(10)
///     .with_durations(1, 8)
///     .with_seed(42)
///     .unrelated(4);
///
/// assert_eq!(jobs.len(), 20);
/// assert!(jobs.iter().all(|j| j.processing_times.len() == 4));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadBuilder {
    jobs: usize,
    arrival_span: Time,
    min_duration: Time,
    max_duration: Time,
    seed: u64,
}

impl WorkloadBuilder {
    /// Creates a builder for `jobs` jobs with default parameters:
    /// arrivals over `0..=10`, durations in `1..=10`, seed 0.
    pub fn new(jobs: usize) -> Self {
        Self {
            jobs,
            arrival_span: 10,
            min_duration: 1,
            max_duration: 10,
            seed: 0,
        }
    }

    /// Sets the latest possible arrival tick.
    pub fn with_arrival_span(mut self, span: Time) -> Self {
        self.arrival_span = span;
        self
    }

    /// Sets the inclusive duration range for workloads and
    /// processing-time entries.
    pub fn with_durations(mut self, min: Time, max: Time) -> Self {
        debug_assert!(min <= max, "empty duration range");
        self.min_duration = min;
        self.max_duration = max;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates jobs for the identical and related models.
    pub fn uniform(&self) -> Vec<UniformJob> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.arrivals(&mut rng)
            .into_iter()
            .enumerate()
            .map(|(id, arrival)| {
                UniformJob::new(id as JobId, arrival, self.duration(&mut rng))
            })
            .collect()
    }

    /// Generates jobs for the unrelated model, one processing-time
    /// entry per machine.
    pub fn unrelated(&self, machines: usize) -> Vec<UnrelatedJob> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.arrivals(&mut rng)
            .into_iter()
            .enumerate()
            .map(|(id, arrival)| {
                let times = (0..machines).map(|_| self.duration(&mut rng)).collect();
                UnrelatedJob::new(id as JobId, arrival, times)
            })
            .collect()
    }

    fn arrivals(&self, rng: &mut StdRng) -> Vec<Time> {
        let mut arrivals: Vec<Time> = (0..self.jobs)
            .map(|_| rng.random_range(0..=self.arrival_span))
            .collect();
        arrivals.sort_unstable();
        arrivals
    }

    fn duration(&self, rng: &mut StdRng) -> Time {
        rng.random_range(self.min_duration..=self.max_duration)
    }
}

//! Machine runtime state.
//!
//! A machine is either fully free or fully busy. The running job and
//! its remaining work live in a single `Option`, so no free-with-job
//! or busy-without-job state can be represented.
//!
//! Exactly one live instance exists per machine id for the whole run.
//! A machine transitions Free→Busy in [`UnrelatedMachine::execute`] /
//! [`UniformMachine::execute`] and Busy→Free when `advance` drives its
//! remaining work to zero.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{JobId, Time, UniformJob, UnrelatedJob};

/// The job currently executing on a machine, with its outstanding work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningJob {
    /// Identity of the executing job.
    pub job: JobId,
    /// Work left until the machine frees itself. For unrelated machines
    /// this is time; for uniform machines it is workload units.
    pub remaining: Time,
}

/// A machine in the unrelated model.
///
/// Per-job processing time comes from the job's time vector, indexed by
/// `id`, so machine ids must stay aligned with vector positions. Use
/// [`UnrelatedMachine::bank`] to build an aligned array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnrelatedMachine {
    /// Stable identity, equal to this machine's index in the bank.
    pub id: usize,
    running: Option<RunningJob>,
}

impl UnrelatedMachine {
    /// Creates a free machine.
    pub fn new(id: usize) -> Self {
        Self { id, running: None }
    }

    /// Builds a bank of `count` machines with ids `0..count`.
    pub fn bank(count: usize) -> Vec<Self> {
        (0..count).map(Self::new).collect()
    }

    /// Whether no job is executing.
    #[inline]
    pub fn is_free(&self) -> bool {
        self.running.is_none()
    }

    /// Identity of the executing job, if any.
    pub fn current_job(&self) -> Option<JobId> {
        self.running.map(|r| r.job)
    }

    /// Time left until the current job finishes, if any.
    pub fn remaining_time(&self) -> Option<Time> {
        self.running.map(|r| r.remaining)
    }

    /// Starts `job` on this machine for `job.time_on(self.id)` ticks.
    ///
    /// The machine must be free; violating that is a caller defect.
    pub fn execute(&mut self, job: &UnrelatedJob) {
        debug_assert!(self.is_free(), "machine {} already has a job", self.id);
        self.running = Some(RunningJob {
            job: job.id,
            remaining: job.time_on(self.id),
        });
    }

    /// Clears the machine. Idempotent.
    pub fn set_free(&mut self) {
        self.running = None;
    }

    /// Elapses `elapsed` ticks: remaining time drops (clamped at zero)
    /// and the machine frees itself on reaching zero. No-op when free.
    pub fn advance(&mut self, elapsed: Time) {
        if let Some(run) = &mut self.running {
            run.remaining = (run.remaining - elapsed).max(0);
            if run.remaining == 0 {
                self.running = None;
            }
        }
    }
}

/// A machine in the identical or related model.
///
/// Processes `speed` workload units per tick. Identical-model banks use
/// unit speed throughout; related-model banks vary it per machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniformMachine {
    /// Stable identity, equal to this machine's index in the bank.
    pub id: usize,
    /// Workload units processed per tick.
    pub speed: Time,
    running: Option<RunningJob>,
}

impl UniformMachine {
    /// Creates a free machine of unit speed.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            speed: 1,
            running: None,
        }
    }

    /// Sets the processing speed.
    pub fn with_speed(mut self, speed: Time) -> Self {
        self.speed = speed;
        self
    }

    /// Builds a bank of `count` unit-speed machines with ids `0..count`.
    pub fn bank(count: usize) -> Vec<Self> {
        (0..count).map(Self::new).collect()
    }

    /// Builds a bank with one machine per entry of `speeds`.
    pub fn bank_with_speeds(speeds: &[Time]) -> Vec<Self> {
        speeds
            .iter()
            .enumerate()
            .map(|(id, &speed)| Self::new(id).with_speed(speed))
            .collect()
    }

    /// Whether no job is executing.
    #[inline]
    pub fn is_free(&self) -> bool {
        self.running.is_none()
    }

    /// Identity of the executing job, if any.
    pub fn current_job(&self) -> Option<JobId> {
        self.running.map(|r| r.job)
    }

    /// Workload left on the current job, if any.
    pub fn remaining_work(&self) -> Option<Time> {
        self.running.map(|r| r.remaining)
    }

    /// Starts `job` on this machine with its full workload outstanding.
    ///
    /// The machine must be free; violating that is a caller defect.
    pub fn execute(&mut self, job: &UniformJob) {
        debug_assert!(self.is_free(), "machine {} already has a job", self.id);
        self.running = Some(RunningJob {
            job: job.id,
            remaining: job.workload,
        });
    }

    /// Clears the machine. Idempotent.
    pub fn set_free(&mut self) {
        self.running = None;
    }

    /// Elapses `elapsed` ticks: `speed * elapsed` workload units are
    /// removed (clamped at zero) and the machine frees itself on
    /// reaching zero. No-op when free.
    pub fn advance(&mut self, elapsed: Time) {
        if let Some(run) = &mut self.running {
            run.remaining = (run.remaining - self.speed * elapsed).max(0);
            if run.remaining == 0 {
                self.running = None;
            }
        }
    }
}

impl fmt::Display for UnrelatedMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.running {
            Some(run) => write!(
                f,
                "machine {} (job {}, {} left)",
                self.id, run.job, run.remaining
            ),
            None => write!(f, "machine {} (free)", self.id),
        }
    }
}

impl fmt::Display for UniformMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.running {
            Some(run) => write!(
                f,
                "machine {} (speed {}, job {}, {} left)",
                self.id, self.speed, run.job, run.remaining
            ),
            None => write!(f, "machine {} (speed {}, free)", self.id, self.speed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_ids_are_aligned() {
        let bank = UnrelatedMachine::bank(3);
        assert_eq!(bank.len(), 3);
        for (i, machine) in bank.iter().enumerate() {
            assert_eq!(machine.id, i);
            assert!(machine.is_free());
        }
    }

    #[test]
    fn test_execute_uses_own_column() {
        let job = UnrelatedJob::new(5, 0, vec![9, 4]);
        let mut machine = UnrelatedMachine::new(1);
        machine.execute(&job);

        assert!(!machine.is_free());
        assert_eq!(machine.current_job(), Some(5));
        assert_eq!(machine.remaining_time(), Some(4));
    }

    #[test]
    fn test_advance_frees_at_zero() {
        let mut machine = UnrelatedMachine::new(0);
        machine.execute(&UnrelatedJob::new(1, 0, vec![3]));

        machine.advance(1);
        assert_eq!(machine.remaining_time(), Some(2));
        machine.advance(2);
        assert!(machine.is_free());
        assert_eq!(machine.current_job(), None);
    }

    #[test]
    fn test_advance_clamps_overshoot() {
        let mut machine = UnrelatedMachine::new(0);
        machine.execute(&UnrelatedJob::new(1, 0, vec![3]));

        machine.advance(10);
        assert!(machine.is_free());

        // Free machine stays free.
        machine.advance(10);
        assert!(machine.is_free());
    }

    #[test]
    fn test_set_free_is_idempotent() {
        let mut machine = UnrelatedMachine::new(0);
        machine.execute(&UnrelatedJob::new(1, 0, vec![3]));
        machine.set_free();
        assert!(machine.is_free());
        machine.set_free();
        assert!(machine.is_free());
    }

    #[test]
    fn test_uniform_speed_scales_progress() {
        let mut machine = UniformMachine::new(0).with_speed(3);
        machine.execute(&UniformJob::new(2, 0, 7));

        machine.advance(1);
        assert_eq!(machine.remaining_work(), Some(4));
        machine.advance(1);
        assert_eq!(machine.remaining_work(), Some(1));
        machine.advance(1);
        assert!(machine.is_free());
    }

    #[test]
    fn test_bank_with_speeds() {
        let bank = UniformMachine::bank_with_speeds(&[1, 4, 2]);
        assert_eq!(bank[0].speed, 1);
        assert_eq!(bank[1].speed, 4);
        assert_eq!(bank[2].speed, 2);
        assert_eq!(bank[2].id, 2);
    }

    #[test]
    fn test_display_states() {
        let mut machine = UnrelatedMachine::new(1);
        assert_eq!(machine.to_string(), "machine 1 (free)");
        machine.execute(&UnrelatedJob::new(4, 0, vec![0, 6]));
        assert_eq!(machine.to_string(), "machine 1 (job 4, 6 left)");
    }

    #[test]
    fn test_zero_duration_job_counts_as_busy_until_advanced() {
        // A zero-time entry is legitimate work, distinct from "free".
        let mut machine = UnrelatedMachine::new(0);
        machine.execute(&UnrelatedJob::new(1, 0, vec![0]));
        assert!(!machine.is_free());
        assert_eq!(machine.remaining_time(), Some(0));

        machine.advance(1);
        assert!(machine.is_free());
    }
}

//! Recorded schedule model.
//!
//! A schedule is the externally visible outcome of a run: the ordered
//! sequence of assignment facts emitted by a scheduler, plus the tick
//! at which the driver observed completion. Steps are write-once; a
//! reporter may persist them as `(time, job, machine)` tuples in
//! emission order and recover the run exactly.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::{JobId, Time};

/// One assignment fact: at `time`, `job` started on `machine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleStep {
    /// Tick at which the assignment was made.
    pub time: Time,
    /// Assigned job.
    pub job: JobId,
    /// Target machine index.
    pub machine: usize,
}

impl ScheduleStep {
    /// Creates a new step.
    pub fn new(time: Time, job: JobId, machine: usize) -> Self {
        Self { time, job, machine }
    }
}

impl fmt::Display for ScheduleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}: job {} -> machine {}", self.time, self.job, self.machine)
    }
}

/// A complete recorded run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// Assignment facts in emission order.
    pub steps: Vec<ScheduleStep>,
    /// Tick at which the driver observed completion.
    pub completed_at: Time,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the steps emitted by one scheduling call.
    pub fn record(&mut self, steps: impl IntoIterator<Item = ScheduleStep>) {
        self.steps.extend(steps);
    }

    /// The step that placed `job`, if it was ever placed.
    pub fn step_for_job(&self, job: JobId) -> Option<&ScheduleStep> {
        self.steps.iter().find(|s| s.job == job)
    }

    /// All steps assigned to `machine`, in emission order.
    pub fn steps_on_machine(&self, machine: usize) -> Vec<&ScheduleStep> {
        self.steps.iter().filter(|s| s.machine == machine).collect()
    }

    /// Number of jobs placed on each machine that received any.
    pub fn assignment_counts(&self) -> HashMap<usize, usize> {
        let mut counts = HashMap::new();
        for step in &self.steps {
            *counts.entry(step.machine).or_insert(0) += 1;
        }
        counts
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.record([
            ScheduleStep::new(0, 0, 1),
            ScheduleStep::new(1, 1, 0),
            ScheduleStep::new(3, 2, 1),
        ]);
        s.completed_at = 8;
        s
    }

    #[test]
    fn test_step_for_job() {
        let s = sample_schedule();
        assert_eq!(s.step_for_job(1), Some(&ScheduleStep::new(1, 1, 0)));
        assert!(s.step_for_job(99).is_none());
    }

    #[test]
    fn test_steps_on_machine_preserve_order() {
        let s = sample_schedule();
        let on_1 = s.steps_on_machine(1);
        assert_eq!(on_1.len(), 2);
        assert_eq!(on_1[0].job, 0);
        assert_eq!(on_1[1].job, 2);
        assert!(s.steps_on_machine(7).is_empty());
    }

    #[test]
    fn test_assignment_counts() {
        let s = sample_schedule();
        let counts = s.assignment_counts();
        assert_eq!(counts[&1], 2);
        assert_eq!(counts[&0], 1);
        assert!(!counts.contains_key(&2));
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.completed_at, 0);
    }

    #[test]
    fn test_step_round_trip() {
        let step = ScheduleStep::new(3, 1, 0);
        let text = serde_json::to_string(&step).unwrap();
        let back: ScheduleStep = serde_json::from_str(&text).unwrap();
        assert_eq!(back, step);
    }

    #[test]
    fn test_step_display() {
        assert_eq!(
            ScheduleStep::new(2, 4, 1).to_string(),
            "t=2: job 4 -> machine 1"
        );
    }
}

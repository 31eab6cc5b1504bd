//! Greedy scheduler for the identical machine model with real-time
//! arrival.
//!
//! Identical machines all process one workload unit per tick, so every
//! free machine is as good as any other and the scan simply takes the
//! first free one. Stack policy, early exit, and completion semantics
//! match the rest of the greedy family (see the module docs on
//! [`crate::scheduler`]).

use log::debug;

use super::Scheduler;
use crate::models::{ScheduleStep, Time, UniformJob, UniformMachine};

/// Greedy matcher for identical machines under real-time arrival.
///
/// Expects a bank of unit-speed machines, as built by
/// [`UniformMachine::bank`].
#[derive(Debug, Default)]
pub struct GreedyIdenticalScheduler {
    pending: Vec<UniformJob>,
    done: bool,
}

impl GreedyIdenticalScheduler {
    /// Creates an engine with no pending jobs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Jobs that have arrived but not been placed, oldest first.
    pub fn pending(&self) -> &[UniformJob] {
        &self.pending
    }
}

impl Scheduler for GreedyIdenticalScheduler {
    type Job = UniformJob;
    type Machine = UniformMachine;

    fn schedule(
        &mut self,
        arrivals: Vec<UniformJob>,
        machines: &mut [UniformMachine],
        now: Time,
    ) -> Vec<ScheduleStep> {
        for job in arrivals {
            debug!("t={now}: {job} arrived");
            self.pending.push(job);
        }

        let mut steps = Vec::new();
        while let Some(job) = self.pending.last() {
            let mut num_free = 0;
            let mut target: Option<usize> = None;
            for (index, machine) in machines.iter().enumerate() {
                if machine.is_free() {
                    num_free += 1;
                    if target.is_none() {
                        target = Some(index);
                    }
                }
            }

            if let Some(index) = target {
                machines[index].execute(job);
                debug!("t={now}: job {} -> machine {index}", job.id);
                steps.push(ScheduleStep::new(now, job.id, index));
                self.pending.pop();
            }
            if num_free <= 1 {
                break;
            }
        }
        steps
    }

    fn advance_time(&mut self, machines: &mut [UniformMachine], elapsed: Time) {
        debug_assert!(elapsed >= 0, "time cannot run backwards");

        let mut done = self.pending.is_empty();
        for machine in machines.iter_mut() {
            if !machine.is_free() {
                done = false;
                machine.advance(elapsed);
            }
        }
        self.done = done;
    }

    fn done(&self) -> bool {
        self.done
    }
}

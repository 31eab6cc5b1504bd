//! Greedy scheduler for the unrelated machine model with real-time
//! arrival.
//!
//! # Algorithm
//!
//! 1. Append the jobs arriving this turn to the pending stack.
//! 2. Take the job at the back of the stack. Scan the bank left to
//!    right, counting free machines and tracking the free machine with
//!    the smallest processing-time entry for this job (strict `<`, so
//!    ties go to the lowest index).
//! 3. If any machine is free, start the job there, emit a step, and pop
//!    the job. If the scan saw at most one free machine, stop; otherwise
//!    repeat from 2 while jobs remain.
//!
//! The stop threshold is one, not zero: a call whose matching step
//! starts with a single free machine places at most that one job and
//! leaves the rest pending for a later call, even though a machine may
//! still be free afterwards. Jobs held back this way are not an error;
//! they surface through [`GreedyUnrelatedScheduler::pending`] and get
//! placed once more machines free up.
//!
//! # Complexity
//! O(pending * machines) per call.

use log::debug;

use super::Scheduler;
use crate::models::{ScheduleStep, Time, UnrelatedJob, UnrelatedMachine};

/// Greedy matcher for unrelated machines under real-time arrival.
///
/// Pending jobs live on a stack: the most recently arrived job is
/// matched first. The container is an ordered sequence, not a priority
/// queue; swapping one in changes which jobs get placed.
///
/// # Example
///
/// ```
/// use schedsim::models::{UnrelatedJob, UnrelatedMachine};
/// use schedsim::scheduler::{GreedyUnrelatedScheduler, Scheduler};
///
/// let mut machines = UnrelatedMachine::bank(2);
/// let mut scheduler = GreedyUnrelatedScheduler::new();
///
/// let job = UnrelatedJob::new(0, 0, vec![3, 2]);
/// let steps = scheduler.schedule(vec![job], &mut machines, 0);
///
/// // Machine 1 runs the job in 2 ticks, machine 0 would need 3.
/// assert_eq!(steps[0].machine, 1);
/// ```
#[derive(Debug, Default)]
pub struct GreedyUnrelatedScheduler {
    pending: Vec<UnrelatedJob>,
    done: bool,
}

impl GreedyUnrelatedScheduler {
    /// Creates an engine with no pending jobs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Jobs that have arrived but not been placed, oldest first.
    pub fn pending(&self) -> &[UnrelatedJob] {
        &self.pending
    }
}

impl Scheduler for GreedyUnrelatedScheduler {
    type Job = UnrelatedJob;
    type Machine = UnrelatedMachine;

    fn schedule(
        &mut self,
        arrivals: Vec<UnrelatedJob>,
        machines: &mut [UnrelatedMachine],
        now: Time,
    ) -> Vec<ScheduleStep> {
        for job in arrivals {
            debug!("t={now}: {job} arrived");
            self.pending.push(job);
        }

        let mut steps = Vec::new();
        while let Some(job) = self.pending.last() {
            let mut num_free = 0;
            let mut target: Option<(usize, Time)> = None;
            for (index, machine) in machines.iter().enumerate() {
                if machine.is_free() {
                    num_free += 1;
                    let expected = job.time_on(index);
                    if target.is_none_or(|(_, best)| expected < best) {
                        target = Some((index, expected));
                    }
                }
            }

            if let Some((index, expected)) = target {
                machines[index].execute(job);
                debug!("t={now}: job {} -> machine {index} ({expected} ticks)", job.id);
                steps.push(ScheduleStep::new(now, job.id, index));
                self.pending.pop();
            }
            if num_free <= 1 {
                break;
            }
        }
        steps
    }

    fn advance_time(&mut self, machines: &mut [UnrelatedMachine], elapsed: Time) {
        debug_assert!(elapsed >= 0, "time cannot run backwards");

        // Any machine busy at the start of the call blocks completion,
        // even one about to finish within it.
        let mut done = self.pending.is_empty();
        for machine in machines.iter_mut() {
            if !machine.is_free() {
                done = false;
                machine.advance(elapsed);
            }
        }
        self.done = done;
        debug!(
            "advanced {elapsed} ticks: {} pending, done={done}",
            self.pending.len()
        );
    }

    fn done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: u64, times: &[Time]) -> UnrelatedJob {
        UnrelatedJob::new(id, 0, times.to_vec())
    }

    #[test]
    fn test_picks_machine_with_smallest_entry() {
        let mut machines = UnrelatedMachine::bank(3);
        let mut scheduler = GreedyUnrelatedScheduler::new();

        let steps = scheduler.schedule(vec![job(0, &[5, 1, 9])], &mut machines, 0);

        assert_eq!(steps, vec![ScheduleStep::new(0, 0, 1)]);
        assert_eq!(machines[1].remaining_time(), Some(1));
        assert!(machines[0].is_free() && machines[2].is_free());
    }

    #[test]
    fn test_tie_breaks_to_lowest_index() {
        let mut machines = UnrelatedMachine::bank(3);
        let mut scheduler = GreedyUnrelatedScheduler::new();

        let steps = scheduler.schedule(vec![job(0, &[4, 2, 2])], &mut machines, 0);
        assert_eq!(steps[0].machine, 1);
    }

    #[test]
    fn test_most_recent_arrival_is_matched_first() {
        let mut machines = UnrelatedMachine::bank(3);
        let mut scheduler = GreedyUnrelatedScheduler::new();

        let steps = scheduler.schedule(
            vec![job(0, &[1, 1, 1]), job(1, &[1, 1, 1])],
            &mut machines,
            0,
        );

        // Stack order: job 1 placed before job 0.
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].job, 1);
        assert_eq!(steps[1].job, 0);
    }

    #[test]
    fn test_busy_machines_are_never_double_booked() {
        let mut machines = UnrelatedMachine::bank(2);
        let mut scheduler = GreedyUnrelatedScheduler::new();

        scheduler.schedule(vec![job(0, &[1, 1])], &mut machines, 0);
        let first = machines
            .iter()
            .position(|m| !m.is_free())
            .expect("one machine busy");

        let steps = scheduler.schedule(vec![job(1, &[1, 1])], &mut machines, 1);
        assert_eq!(steps.len(), 1);
        assert_ne!(steps[0].machine, first);
    }

    #[test]
    fn test_no_free_machine_keeps_job_pending() {
        let mut machines = UnrelatedMachine::bank(1);
        let mut scheduler = GreedyUnrelatedScheduler::new();

        scheduler.schedule(vec![job(0, &[5])], &mut machines, 0);
        let steps = scheduler.schedule(vec![job(1, &[5])], &mut machines, 1);

        assert!(steps.is_empty());
        assert_eq!(scheduler.pending().len(), 1);
        assert_eq!(scheduler.pending()[0].id, 1);
    }

    #[test]
    fn test_early_exit_with_three_free_machines() {
        // Five pending jobs, three free machines: placements happen at
        // observed free counts 3, 2, and 1, then the loop stops. Two
        // jobs stay pending even though nothing else blocks them.
        let mut machines = UnrelatedMachine::bank(3);
        let mut scheduler = GreedyUnrelatedScheduler::new();

        let arrivals: Vec<_> = (0..5).map(|id| job(id, &[2, 2, 2])).collect();
        let steps = scheduler.schedule(arrivals, &mut machines, 0);

        assert_eq!(steps.len(), 3);
        assert_eq!(scheduler.pending().len(), 2);
        assert!(machines.iter().all(|m| !m.is_free()));
    }

    #[test]
    fn test_single_free_machine_places_exactly_one() {
        let mut machines = UnrelatedMachine::bank(1);
        let mut scheduler = GreedyUnrelatedScheduler::new();

        let steps = scheduler.schedule(
            vec![job(0, &[1]), job(1, &[1]), job(2, &[1])],
            &mut machines,
            0,
        );

        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].job, 2);
        assert_eq!(scheduler.pending().len(), 2);
    }

    #[test]
    fn test_done_lags_one_call_behind_last_finish() {
        let mut machines = UnrelatedMachine::bank(1);
        let mut scheduler = GreedyUnrelatedScheduler::new();

        scheduler.schedule(vec![job(0, &[3])], &mut machines, 0);
        assert!(!scheduler.done());

        // The job finishes exactly during this call, but the machine was
        // busy at its start.
        scheduler.advance_time(&mut machines, 3);
        assert!(machines[0].is_free());
        assert!(!scheduler.done());

        scheduler.advance_time(&mut machines, 1);
        assert!(scheduler.done());
    }

    #[test]
    fn test_pending_jobs_block_done() {
        let mut machines = UnrelatedMachine::bank(1);
        let mut scheduler = GreedyUnrelatedScheduler::new();

        scheduler.schedule(vec![job(0, &[2]), job(1, &[2])], &mut machines, 0);
        scheduler.advance_time(&mut machines, 2);
        // Machine freed, but job 0 is still pending.
        assert!(!scheduler.done());
    }

    #[test]
    fn test_remaining_time_is_monotonic_and_clamped() {
        let mut machines = UnrelatedMachine::bank(2);
        let mut scheduler = GreedyUnrelatedScheduler::new();

        scheduler.schedule(vec![job(0, &[5, 7])], &mut machines, 0);
        let mut last = machines[0].remaining_time().unwrap();

        for _ in 0..4 {
            scheduler.advance_time(&mut machines, 2);
            let now = machines[0].remaining_time().unwrap_or(0);
            assert!(now <= last);
            assert!(now >= 0);
            last = now;
        }
        assert!(machines[0].is_free());
    }

    #[test]
    fn test_two_machine_run_end_to_end() {
        let mut machines = UnrelatedMachine::bank(2);
        let mut scheduler = GreedyUnrelatedScheduler::new();

        // t=0: the new job runs fastest on machine 1 (2 < 3).
        let steps = scheduler.schedule(
            vec![UnrelatedJob::new(0, 0, vec![3, 2])],
            &mut machines,
            0,
        );
        assert_eq!(steps, vec![ScheduleStep::new(0, 0, 1)]);
        scheduler.advance_time(&mut machines, 1);

        // t=1: machine 1 is busy, so machine 0 takes the new job.
        let steps = scheduler.schedule(
            vec![UnrelatedJob::new(1, 1, vec![5, 4])],
            &mut machines,
            1,
        );
        assert_eq!(steps, vec![ScheduleStep::new(1, 1, 0)]);

        scheduler.advance_time(&mut machines, 1);
        assert_eq!(machines[1].remaining_time(), Some(1));
        assert_eq!(machines[0].remaining_time(), Some(4));

        scheduler.advance_time(&mut machines, 1);
        assert!(machines[1].is_free());
        assert!(!scheduler.done());

        // Drain machine 0, then one more call for the completion lag.
        scheduler.advance_time(&mut machines, 4);
        assert!(machines[0].is_free());
        assert!(!scheduler.done());
        scheduler.advance_time(&mut machines, 1);
        assert!(scheduler.done());
    }
}

//! Greedy online schedulers, one per machine model.
//!
//! Every scheduler in this family shares the same shape: jobs that have
//! arrived but not yet been placed accumulate on a stack (push at the
//! back, match from the back), and each scheduling call pairs pending
//! jobs with free machines until the matching loop's early-exit fires.
//! Only the machine-selection rule differs per model:
//!
//! - [`GreedyIdenticalScheduler`]: any free machine; lowest index.
//! - [`GreedyRelatedScheduler`]: fastest free machine.
//! - [`GreedyUnrelatedScheduler`]: free machine with the smallest
//!   processing-time entry for the candidate job.
//!
//! The heuristic is deliberately myopic: it trades optimality for a
//! single machine scan per placement.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5:
//! Parallel Machine Models

mod identical;
mod related;
mod unrelated;

pub use identical::GreedyIdenticalScheduler;
pub use related::GreedyRelatedScheduler;
pub use unrelated::GreedyUnrelatedScheduler;

use crate::models::{ScheduleStep, Time};

/// The seam between the simulation driver and a matching engine.
///
/// Call order matters: the driver hands over the jobs due at the
/// current tick via [`Scheduler::schedule`], then elapses time via
/// [`Scheduler::advance_time`]; calls for a given tick are neither
/// reordered nor repeated. All state is owned by the engine and the
/// machine bank, so independent runs need independent instances.
pub trait Scheduler {
    /// Job shape consumed by this engine.
    type Job;
    /// Machine shape this engine places jobs on.
    type Machine;

    /// Accumulates `arrivals` and places as many pending jobs onto free
    /// machines as the greedy policy allows. Returns the assignment
    /// facts emitted by this call, in placement order.
    fn schedule(
        &mut self,
        arrivals: Vec<Self::Job>,
        machines: &mut [Self::Machine],
        now: Time,
    ) -> Vec<ScheduleStep>;

    /// Elapses `elapsed` ticks on every machine that is busy at the
    /// start of the call, freeing those that finish, and refreshes the
    /// completion flag.
    fn advance_time(&mut self, machines: &mut [Self::Machine], elapsed: Time);

    /// Whether the most recent [`Scheduler::advance_time`] call started
    /// with no pending jobs and no busy machine. False before the first
    /// call. A machine that finishes during a call still holds this
    /// false for that call; completion shows up one call later.
    fn done(&self) -> bool;
}

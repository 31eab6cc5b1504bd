//! Time-stepped simulation driver.
//!
//! The driver owns the machine bank and the clock. Each turn it
//! fetches the jobs due at the current tick, lets the scheduler place
//! what it can, then elapses one step of simulated time. The run ends
//! once the job source is exhausted AND the scheduler reports done;
//! because completion shows up one advance call after the last machine
//! frees itself, the recorded completion tick includes that lag.

use log::{debug, info};

use crate::input::JobSource;
use crate::models::{Schedule, Time};
use crate::scheduler::Scheduler;

/// Drives a scheduler against a job source until both report
/// completion.
///
/// # Example
///
/// ```
/// use schedsim::input::MemorySource;
/// use schedsim::models::{UnrelatedJob, UnrelatedMachine};
/// use schedsim::scheduler::GreedyUnrelatedScheduler;
/// use schedsim::sim::Simulation;
///
/// let jobs = vec![
///     UnrelatedJob::new(0, 0, vec![3, 2]),
///     UnrelatedJob::new(1, 1, vec![5, 4]),
/// ];
/// let mut sim = Simulation::new(
///     GreedyUnrelatedScheduler::new(),
///     MemorySource::new(jobs),
///     UnrelatedMachine::bank(2),
/// );
/// let schedule = sim.run();
/// assert_eq!(schedule.len(), 2);
/// ```
pub struct Simulation<S: Scheduler, I> {
    scheduler: S,
    source: I,
    machines: Vec<S::Machine>,
    step: Time,
    horizon: Option<Time>,
}

impl<S, I> Simulation<S, I>
where
    S: Scheduler,
    I: JobSource<Job = S::Job>,
{
    /// Creates a driver over `machines` with a step size of one tick.
    pub fn new(scheduler: S, source: I, machines: Vec<S::Machine>) -> Self {
        Self {
            scheduler,
            source,
            machines,
            step: 1,
            horizon: None,
        }
    }

    /// Sets the amount of simulated time elapsed per turn.
    pub fn with_step(mut self, step: Time) -> Self {
        debug_assert!(step > 0, "a turn must elapse time");
        self.step = step;
        self
    }

    /// Caps the run at `horizon` ticks. Without a cap a run whose jobs
    /// can never be placed (an empty machine bank, say) never ends.
    pub fn with_horizon(mut self, horizon: Time) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// The scheduler, e.g. to inspect jobs left pending after a capped
    /// run.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// The machine bank in its current state.
    pub fn machines(&self) -> &[S::Machine] {
        &self.machines
    }

    /// Runs the simulation to completion and returns the recorded
    /// schedule.
    pub fn run(&mut self) -> Schedule {
        let mut schedule = Schedule::new();
        let mut now: Time = 0;

        loop {
            let due = self.source.fetch_due(now);
            let steps = self.scheduler.schedule(due, &mut self.machines, now);
            schedule.record(steps);

            self.scheduler.advance_time(&mut self.machines, self.step);
            now += self.step;

            if self.source.is_exhausted() && self.scheduler.done() {
                break;
            }
            if self.horizon.is_some_and(|h| now >= h) {
                debug!("horizon {h} reached with the run incomplete", h = now);
                break;
            }
        }

        schedule.completed_at = now;
        info!(
            "run complete at t={now}: {} jobs placed",
            schedule.len()
        );
        schedule
    }
}

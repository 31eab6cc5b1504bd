//! Simulation domain models.
//!
//! Provides the core data types shared by every machine model:
//! jobs, machine runtime state, and the recorded schedule.
//!
//! # Machine Models
//!
//! | Model | Graham class | Job shape | Machine shape |
//! |-------|--------------|-----------|---------------|
//! | Identical | P | scalar workload | unit speed |
//! | Related | Q | scalar workload | per-machine speed |
//! | Unrelated | R | per-machine time vector | plain |
//!
//! # Time Representation
//!
//! All times are integer ticks relative to the simulation epoch (t=0).
//! The consumer defines what one tick means (seconds, slots, ...).
//!
//! # Reference
//! Graham et al. (1979), "Optimization and approximation in deterministic
//! sequencing and scheduling: a survey"

mod job;
mod machine;
mod schedule;

pub use job::{Arriving, UniformJob, UnrelatedJob};
pub use machine::{RunningJob, UniformMachine, UnrelatedMachine};
pub use schedule::{Schedule, ScheduleStep};

/// Simulated time, in ticks from the epoch.
pub type Time = i64;

/// Job identifier, unique across a run.
pub type JobId = u64;

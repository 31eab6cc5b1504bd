//! Parallel-machine scheduling simulation.
//!
//! Feeds a sequence of timestamped jobs to a bank of machines under one
//! of three machine-speed models and records, turn by turn, which job
//! ran where and when each machine freed up again. Placement uses a
//! greedy online heuristic; there is no preemption and no priority
//! beyond arrival order.
//!
//! # Modules
//!
//! - **`models`**: Domain types — jobs, machine runtime state, recorded
//!   schedule
//! - **`scheduler`**: The [`scheduler::Scheduler`] seam and one greedy
//!   engine per machine model
//! - **`input`**: Job sources — in-memory lists and the JSON instance
//!   format
//! - **`sim`**: The time-stepped driver loop
//! - **`validation`**: Instance integrity checks
//! - **`workload`**: Seeded random instance generation
//!
//! # Example
//!
//! ```
//! use schedsim::input::MemorySource;
//! use schedsim::models::{UnrelatedJob, UnrelatedMachine};
//! use schedsim::scheduler::GreedyUnrelatedScheduler;
//! use schedsim::sim::Simulation;
//!
//! let jobs = vec![
//!     UnrelatedJob::new(0, 0, vec![3, 2]),
//!     UnrelatedJob::new(1, 1, vec![5, 4]),
//! ];
//! let mut sim = Simulation::new(
//!     GreedyUnrelatedScheduler::new(),
//!     MemorySource::new(jobs),
//!     UnrelatedMachine::bank(2),
//! );
//! let schedule = sim.run();
//!
//! // Each job went to the machine that runs it fastest at the time.
//! assert_eq!(schedule.step_for_job(0).unwrap().machine, 1);
//! assert_eq!(schedule.step_for_job(1).unwrap().machine, 0);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Graham et al. (1979), "Optimization and approximation in
//!   deterministic sequencing and scheduling: a survey"

pub mod input;
pub mod models;
pub mod scheduler;
pub mod sim;
pub mod validation;
pub mod workload;

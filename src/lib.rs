//! # Studyplan
//!
//! Study-plan generation engine for the Nissho Bookkeeping Level-2 exam.
//!
//! Given a weighted curriculum of topics and a plan window (start date, exam
//! date, daily study budget, rest-day policy), this crate computes a
//! day-by-day schedule of study tasks: textbook/problem-set work for every
//! topic, a daily mini review, a weekly progress review on Sundays, and a
//! taper window of mock exams before the exam date. The host application
//! persists the generated task seeds verbatim.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Domain types (topics, plan options, task seeds)
//! - [`parsing`]: JSON loading of externally-sourced topic lists
//! - [`config`]: TOML plan-configuration files
//! - [`curriculum`]: Built-in default Level-2 curriculum
//! - [`scheduler`]: The task-generation core (date window, interleaving,
//!   bin-packing, recurring tasks)
//!
//! ## Determinism
//!
//! [`scheduler::generate_tasks`] is a pure, synchronous function: no I/O, no
//! shared state, identical output for identical input. Callers may invoke it
//! concurrently without coordination.

pub mod config;
pub mod curriculum;
pub mod error;
pub mod models;
pub mod parsing;
pub mod scheduler;

pub use error::{PlannerError, PlannerResult};
pub use models::{PlanOptions, RestDays, TaskKind, TaskSeed, Topic, TopicId, Track};
pub use scheduler::{generate_tasks, Scheduler};

//! Task-generation core.
//!
//! Converts a weighted topic list and a plan window into minute-accurate
//! daily task seeds. The computation is staged so each step stays
//! independently testable:
//!
//! 1. [`calendar`] — enumerate the window, apply the rest-day policy, and
//!    reserve the taper tail for mock exams
//! 2. [`interleave`] — merge the two tracks by remaining estimated minutes
//! 3. [`expand`] — split every topic into a learn and a drill template
//! 4. [`pack`] — greedily fill study days, splitting oversized tasks
//! 5. [`recurring`] — daily/weekly reviews and the mock queue
//!
//! The whole pass is pure and deterministic: identical inputs yield
//! identical output, and nothing is shared between invocations.

pub mod calendar;
pub mod expand;
pub mod interleave;
pub mod pack;
pub mod recurring;


use crate::error::PlannerResult;
use crate::models::{PlanOptions, TaskSeed, TaskTemplate, Topic};
use calendar::StudyCalendar;

/// Stateless plan-generation service.
///
/// Holds no state; it exists so the generator can be injected alongside the
/// host application's persistence layer. [`generate_tasks`] is the same
/// computation as a free function.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scheduler;

impl Scheduler {
    pub fn new() -> Self {
        Scheduler
    }

    /// See [`generate_tasks`].
    pub fn generate(&self, topics: &[Topic], options: &PlanOptions) -> PlannerResult<Vec<TaskSeed>> {
        generate_tasks(topics, options)
    }
}

/// Generate the full task list for one plan.
///
/// Fails with [`crate::PlannerError::ConfigurationError`] when the exam date
/// is not strictly after the start date; every other input is handled
/// best-effort (zero topics still produce the recurring tasks, and work that
/// does not fit the window is dropped).
///
/// The returned list is not sorted by date; callers group or sort as needed
/// before persisting.
pub fn generate_tasks(topics: &[Topic], options: &PlanOptions) -> PlannerResult<Vec<TaskSeed>> {
    options.validate_window()?;

    let cal = StudyCalendar::build(options);
    log::debug!(
        "plan window {} -> {}: {} study days ({} topic coverage, {} taper), {} mock exams",
        options.start_date,
        options.exam_date,
        cal.total_study_days(),
        cal.pre_mock_days.len(),
        cal.mock_days.len(),
        cal.mock_count
    );

    let mut tasks: Vec<TaskSeed> = Vec::new();

    let daily_review = recurring::daily_review_minutes(options.daily_minutes);
    let capacity = options.daily_minutes.saturating_sub(daily_review);

    // Weekly review on Sundays, even rest Sundays.
    for &sunday in &cal.sundays {
        tasks.push(recurring::weekly_review_seed(sunday));
    }

    // Topic coverage: interleave, expand, pack into the pre-mock days.
    let theme_queue: Vec<TaskTemplate> = interleave::interleave_topics(topics)
        .iter()
        .flat_map(|t| expand::expand_topic(t))
        .collect();
    log::debug!(
        "{} topic templates queued for {} coverage days",
        theme_queue.len(),
        cal.pre_mock_days.len()
    );

    if daily_review > 0 {
        for &day in &cal.pre_mock_days {
            tasks.push(recurring::daily_review_seed(day, daily_review));
        }
    }
    pack::pack_into_days(&theme_queue, &cal.pre_mock_days, capacity, &mut tasks);

    // Taper: mock exams and their reviews packed into the reserved tail.
    if daily_review > 0 {
        for &day in &cal.mock_days {
            tasks.push(recurring::daily_review_seed(day, daily_review));
        }
    }
    let mock_queue = recurring::mock_queue(cal.mock_count);
    pack::pack_into_days(&mock_queue, &cal.mock_days, capacity, &mut tasks);

    Ok(tasks)
}

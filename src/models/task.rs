use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{TopicId, Track};

/// Kind of scheduled work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Textbook / worked-example study for one topic.
    Learn,
    /// Problem-set drilling for one topic.
    Drill,
    /// Review work (daily mini review, mock review, final check).
    Review,
    /// Full-length practice exam.
    Mock,
    /// Sunday progress review.
    WeeklyReview,
}

/// One scheduled, minute-bounded unit of work, not yet persisted.
///
/// Seeds have no storage identity; the caller assigns plan/user association
/// and an initial "todo" status when persisting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSeed {
    pub task_date: NaiveDate,
    pub subject: Track,
    /// Referenced topic; `None` for recurring and mock tasks.
    pub topic_id: Option<TopicId>,
    pub task_type: TaskKind,
    pub title: String,
    pub planned_minutes: u32,
    /// Free-form payload (topic code/title, resource kind, problem-set page,
    /// mock sequence number, ...).
    #[serde(default)]
    pub meta: Map<String, Value>,
}

/// A task seed before day assignment: everything but the date.
///
/// Templates are produced by topic expansion and by the mock-queue builder,
/// then dated (and possibly split) by the packer.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskTemplate {
    pub subject: Track,
    pub topic_id: Option<TopicId>,
    pub task_type: TaskKind,
    pub title: String,
    pub planned_minutes: u32,
    pub meta: Map<String, Value>,
}

impl TaskTemplate {
    /// Date this template, overriding the minutes and optionally appending a
    /// continuation suffix to the title.
    pub fn assigned(&self, date: NaiveDate, minutes: u32, suffix: Option<&str>) -> TaskSeed {
        let title = match suffix {
            Some(s) => format!("{} {}", self.title, s),
            None => self.title.clone(),
        };
        TaskSeed {
            task_date: date,
            subject: self.subject,
            topic_id: self.topic_id,
            task_type: self.task_type,
            title,
            planned_minutes: minutes,
            meta: self.meta.clone(),
        }
    }
}

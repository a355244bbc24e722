//! Fixed recurring tasks: daily mini review, Sunday progress review, and the
//! mock-exam queue for the taper window.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::models::{TaskKind, TaskSeed, TaskTemplate, Track};

/// Upper bound for the daily mini review; a smaller daily budget shrinks it.
pub const DAILY_REVIEW_CAP_MINUTES: u32 = 15;
/// Fixed length of the Sunday progress review.
pub const WEEKLY_REVIEW_MINUTES: u32 = 20;
/// Fixed length of one full mock exam.
pub const MOCK_EXAM_MINUTES: u32 = 90;
/// Fixed length of the review after each mock exam.
pub const MOCK_REVIEW_MINUTES: u32 = 60;
/// Fixed length of the final check closing the mock queue.
pub const FINAL_CHECK_MINUTES: u32 = 30;

/// Minutes reserved each study day for the mini review. This amount is
/// deducted from the day's packing capacity.
pub fn daily_review_minutes(daily_minutes: u32) -> u32 {
    daily_minutes.min(DAILY_REVIEW_CAP_MINUTES)
}

fn kind_meta(kind: &str) -> Map<String, Value> {
    let mut meta = Map::new();
    meta.insert("kind".into(), Value::String(kind.to_string()));
    meta
}

/// The habit anchor: one mini review per study day.
pub fn daily_review_seed(date: NaiveDate, minutes: u32) -> TaskSeed {
    TaskSeed {
        task_date: date,
        subject: Track::Mixed,
        topic_id: None,
        task_type: TaskKind::Review,
        title: "[毎日] ミニ復習（前日のミス直し・仕訳確認）".to_string(),
        planned_minutes: minutes,
        meta: kind_meta("daily"),
    }
}

/// Sunday progress review. Emitted on every Sunday of the window, rest
/// Sundays included, and not charged against packing capacity.
pub fn weekly_review_seed(date: NaiveDate) -> TaskSeed {
    TaskSeed {
        task_date: date,
        subject: Track::Mixed,
        topic_id: None,
        task_type: TaskKind::WeeklyReview,
        title: "[週次] 進捗レビュー（遅れ/苦手テーマ確認→来週を調整）".to_string(),
        planned_minutes: WEEKLY_REVIEW_MINUTES,
        meta: kind_meta("weekly"),
    }
}

/// Build the taper queue: one mock exam plus its review per mock index,
/// closed by a single final check.
pub fn mock_queue(mock_count: u32) -> Vec<TaskTemplate> {
    let mut queue = Vec::with_capacity(mock_count as usize * 2 + 1);

    for mock_no in 1..=mock_count {
        let mut mock_meta = Map::new();
        mock_meta.insert("mock_no".into(), Value::from(mock_no));
        queue.push(TaskTemplate {
            subject: Track::Mixed,
            topic_id: None,
            task_type: TaskKind::Mock,
            title: format!("[総合] 本試験形式 模試 #{}（90分）", mock_no),
            planned_minutes: MOCK_EXAM_MINUTES,
            meta: mock_meta.clone(),
        });
        queue.push(TaskTemplate {
            subject: Track::Mixed,
            topic_id: None,
            task_type: TaskKind::Review,
            title: format!("[総合] 模試 #{} 復習（60分）", mock_no),
            planned_minutes: MOCK_REVIEW_MINUTES,
            meta: mock_meta,
        });
    }

    queue.push(TaskTemplate {
        subject: Track::Mixed,
        topic_id: None,
        task_type: TaskKind::Review,
        title: "[総合] 最終確認（重要仕訳・連結の型）".to_string(),
        planned_minutes: FINAL_CHECK_MINUTES,
        meta: kind_meta("final_check"),
    });

    queue
}

//! Calendar-window computation and taper sizing.
//!
//! Enumerates the study window (start date through the day before the exam),
//! applies the rest-day policy, and reserves the tail of the study days for
//! mock-exam practice.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::PlanOptions;

/// Partitioned calendar window for one plan.
#[derive(Debug, Clone)]
pub struct StudyCalendar {
    /// Every calendar day from the start date to the day before the exam,
    /// rest days included.
    pub all_days: Vec<NaiveDate>,
    /// Non-rest days, chronological.
    pub study_days: Vec<NaiveDate>,
    /// Study days reserved for topic coverage (everything before the taper).
    pub pre_mock_days: Vec<NaiveDate>,
    /// Tail of the study days reserved for mock exams and their review.
    pub mock_days: Vec<NaiveDate>,
    /// Every Sunday in the full window, rest Sundays included.
    pub sundays: Vec<NaiveDate>,
    /// Number of mock exams to schedule in the taper.
    pub mock_count: u32,
}

impl StudyCalendar {
    /// Build the window for `options`. The caller must have validated the
    /// window ordering first; an inverted window yields empty partitions.
    pub fn build(options: &PlanOptions) -> Self {
        let last = options.exam_date - Duration::days(1);

        let mut all_days = Vec::new();
        let mut day = options.start_date;
        while day <= last {
            all_days.push(day);
            day += Duration::days(1);
        }

        let study_days: Vec<NaiveDate> = all_days
            .iter()
            .copied()
            .filter(|d| !options.rest_days_per_week.is_rest_day(*d))
            .collect();
        let sundays: Vec<NaiveDate> = all_days
            .iter()
            .copied()
            .filter(|d| d.weekday() == Weekday::Sun)
            .collect();

        let total = study_days.len();
        let pre_mock_len = total.saturating_sub(mock_window_len(total));
        let pre_mock_days = study_days[..pre_mock_len].to_vec();
        let mock_days = study_days[pre_mock_len..].to_vec();

        StudyCalendar {
            all_days,
            study_days,
            pre_mock_days,
            mock_days,
            sundays,
            mock_count: mock_exam_count(total),
        }
    }

    pub fn total_study_days(&self) -> usize {
        self.study_days.len()
    }
}

/// Size of the mock-exam taper in study days, as a step function of the
/// total number of study days.
pub fn mock_window_len(total_study_days: usize) -> usize {
    match total_study_days {
        n if n >= 45 => 14,
        n if n >= 30 => 10,
        n if n >= 20 => 7,
        n => 3.max(n / 4),
    }
}

/// Number of mock exams to schedule, as a step function of the total number
/// of study days.
pub fn mock_exam_count(total_study_days: usize) -> u32 {
    match total_study_days {
        n if n >= 40 => 6,
        n if n >= 28 => 4,
        n if n >= 18 => 2,
        _ => 1,
    }
}

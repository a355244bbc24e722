//! Property tests for the task generator.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;

use studyplan::scheduler::{expand, recurring};
use studyplan::{generate_tasks, PlanOptions, RestDays, TaskKind, TaskSeed, Topic, Track};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn arb_options() -> impl Strategy<Value = PlanOptions> {
    (0i64..400, 1i64..150, 1u32..=240, 0u8..=2).prop_map(
        |(start_offset, window_days, daily_minutes, rest_level)| {
            let start_date = base_date() + Duration::days(start_offset);
            PlanOptions {
                start_date,
                exam_date: start_date + Duration::days(window_days),
                daily_minutes,
                rest_days_per_week: RestDays::try_from(rest_level).unwrap(),
            }
        },
    )
}

fn arb_topics() -> impl Strategy<Value = Vec<Topic>> {
    prop::collection::vec(
        (any::<bool>(), 10u32..600, prop::option::of(1u32..300)),
        0..10,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (commercial, minutes, page))| {
                let track = if commercial {
                    Track::Commercial
                } else {
                    Track::Industrial
                };
                Topic::new(
                    i as i64 + 1,
                    track,
                    format!("T{:02}", i + 1),
                    format!("トピック{}", i + 1),
                    i as i32,
                    page,
                    minutes,
                )
            })
            .collect()
    })
}

fn is_fixed_recurring(task: &TaskSeed) -> bool {
    task.task_type == TaskKind::WeeklyReview
        || task
            .meta
            .get("kind")
            .map(|k| k == "daily")
            .unwrap_or(false)
}

proptest! {
    #[test]
    fn prop_minutes_positive_and_dates_in_window(
        topics in arb_topics(),
        options in arb_options(),
    ) {
        let tasks = generate_tasks(&topics, &options).unwrap();
        for task in &tasks {
            prop_assert!(task.planned_minutes > 0);
            prop_assert!(task.task_date >= options.start_date);
            prop_assert!(task.task_date < options.exam_date);
        }
    }

    #[test]
    fn prop_rest_days_hold_only_weekly_reviews(
        topics in arb_topics(),
        options in arb_options(),
    ) {
        let tasks = generate_tasks(&topics, &options).unwrap();
        for task in &tasks {
            if task.task_type == TaskKind::WeeklyReview {
                prop_assert_eq!(task.task_date.weekday(), Weekday::Sun);
            } else {
                prop_assert!(
                    !options.rest_days_per_week.is_rest_day(task.task_date),
                    "'{}' scheduled on rest day {}", task.title, task.task_date
                );
            }
        }
    }

    #[test]
    fn prop_packed_minutes_respect_daily_capacity(
        topics in arb_topics(),
        options in arb_options(),
    ) {
        let review = recurring::daily_review_minutes(options.daily_minutes);
        let capacity = options.daily_minutes - review;

        let tasks = generate_tasks(&topics, &options).unwrap();
        let mut packed_by_day: HashMap<NaiveDate, u32> = HashMap::new();
        for task in tasks.iter().filter(|t| !is_fixed_recurring(t)) {
            *packed_by_day.entry(task.task_date).or_default() += task.planned_minutes;
        }
        for (day, total) in packed_by_day {
            prop_assert!(total <= capacity, "day {} holds {} > {}", day, total, capacity);
        }
    }

    #[test]
    fn prop_generation_is_deterministic(
        topics in arb_topics(),
        options in arb_options(),
    ) {
        let first = generate_tasks(&topics, &options).unwrap();
        let second = generate_tasks(&topics, &options).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_topic_fragments_never_exceed_expansion(
        topics in arb_topics(),
        options in arb_options(),
    ) {
        let tasks = generate_tasks(&topics, &options).unwrap();

        // Fragments of one topic pass sum to the expanded minutes, minus
        // whatever was truncated when the window filled up.
        for topic in &topics {
            for (kind, expanded) in [
                (TaskKind::Learn, expand::learn_minutes(topic.estimated_minutes)),
                (TaskKind::Drill, expand::drill_minutes(topic.estimated_minutes)),
            ] {
                let placed: u32 = tasks
                    .iter()
                    .filter(|t| t.topic_id == Some(topic.id) && t.task_type == kind)
                    .map(|t| t.planned_minutes)
                    .sum();
                prop_assert!(
                    placed <= expanded,
                    "topic {} {:?}: placed {} > expanded {}",
                    topic.code, kind, placed, expanded
                );
            }
        }
    }

    #[test]
    fn prop_weekly_reviews_cover_every_sunday(
        topics in arb_topics(),
        options in arb_options(),
    ) {
        let tasks = generate_tasks(&topics, &options).unwrap();

        let mut expected = 0usize;
        let mut day = options.start_date;
        while day < options.exam_date {
            if day.weekday() == Weekday::Sun {
                expected += 1;
            }
            day += Duration::days(1);
        }

        let weekly = tasks
            .iter()
            .filter(|t| t.task_type == TaskKind::WeeklyReview)
            .count();
        prop_assert_eq!(weekly, expected);
    }
}

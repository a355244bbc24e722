//! Per-topic task expansion.
//!
//! Every topic becomes exactly two undated task templates: a "learn" pass
//! over the textbook and a "drill" pass over the companion problem set. The
//! split is 45% learn / remainder drill, floored at 30 minutes each and
//! rounded to 5-minute steps.

use serde_json::{Map, Value};

use crate::models::{TaskKind, TaskTemplate, Topic};

/// Share of a topic's estimate that goes to the learn pass.
const LEARN_SHARE: f64 = 0.45;
/// Floor for either pass, before rounding.
const MIN_PASS_MINUTES: f64 = 30.0;

/// Round to the nearest multiple of 5, never below 5.
pub fn round_to_five(minutes: f64) -> u32 {
    let rounded = (minutes / 5.0).round() * 5.0;
    rounded.max(5.0) as u32
}

/// Minutes of the learn pass for an estimate.
pub fn learn_minutes(estimated_minutes: u32) -> u32 {
    round_to_five(MIN_PASS_MINUTES.max(f64::from(estimated_minutes) * LEARN_SHARE))
}

/// Minutes of the drill pass: the remainder after the (already rounded)
/// learn pass, floored and rounded the same way.
pub fn drill_minutes(estimated_minutes: u32) -> u32 {
    let remainder = f64::from(estimated_minutes) - f64::from(learn_minutes(estimated_minutes));
    round_to_five(MIN_PASS_MINUTES.max(remainder))
}

/// Expand one topic into its learn and drill templates.
pub fn expand_topic(topic: &Topic) -> [TaskTemplate; 2] {
    let theme_label = format!("テーマ{}", topic.code);
    let subject_label = topic.subject.label();

    let mut learn_meta = Map::new();
    learn_meta.insert("theme_code".into(), Value::String(topic.code.clone()));
    learn_meta.insert("theme_title".into(), Value::String(topic.title.clone()));
    learn_meta.insert("resource".into(), Value::String("textbook".into()));

    let mut drill_meta = Map::new();
    drill_meta.insert("theme_code".into(), Value::String(topic.code.clone()));
    drill_meta.insert("theme_title".into(), Value::String(topic.title.clone()));
    drill_meta.insert("resource".into(), Value::String("problem_book".into()));
    drill_meta.insert(
        "problem_page_start".into(),
        match topic.problem_page_start {
            Some(page) => Value::from(page),
            None => Value::Null,
        },
    );

    let page_info = match topic.problem_page_start {
        Some(page) => format!("問題集 p{}〜", page),
        None => "問題集".to_string(),
    };

    [
        TaskTemplate {
            subject: topic.subject,
            topic_id: Some(topic.id),
            task_type: TaskKind::Learn,
            title: format!(
                "[{}] {} {}：テキスト・例題",
                subject_label, theme_label, topic.title
            ),
            planned_minutes: learn_minutes(topic.estimated_minutes),
            meta: learn_meta,
        },
        TaskTemplate {
            subject: topic.subject,
            topic_id: Some(topic.id),
            task_type: TaskKind::Drill,
            title: format!(
                "[{}] {} {}：{}",
                subject_label, theme_label, topic.title, page_info
            ),
            planned_minutes: drill_minutes(topic.estimated_minutes),
            meta: drill_meta,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Track;

    fn topic(minutes: u32, page: Option<u32>) -> Topic {
        Topic::new(5, Track::Commercial, "C05", "有価証券", 5, page, minutes)
    }

    #[test]
    fn test_round_to_five() {
        assert_eq!(round_to_five(45.0), 45);
        assert_eq!(round_to_five(43.0), 45);
        assert_eq!(round_to_five(42.4), 40);
        assert_eq!(round_to_five(2.0), 5);
        assert_eq!(round_to_five(0.0), 5);
    }

    #[test]
    fn test_split_for_100_minutes() {
        // 45% of 100 = 45 learn; remainder 55 drill.
        assert_eq!(learn_minutes(100), 45);
        assert_eq!(drill_minutes(100), 55);
    }

    #[test]
    fn test_split_floors_at_30() {
        // 45% of 60 = 27 -> floored to 30; remainder 30.
        assert_eq!(learn_minutes(60), 30);
        assert_eq!(drill_minutes(60), 30);
        // Tiny estimate still yields two 30-minute passes.
        assert_eq!(learn_minutes(10), 30);
        assert_eq!(drill_minutes(10), 30);
    }

    #[test]
    fn test_expand_learn_template() {
        let [learn, _] = expand_topic(&topic(100, Some(46)));
        assert_eq!(learn.task_type, TaskKind::Learn);
        assert_eq!(learn.subject, Track::Commercial);
        assert_eq!(learn.topic_id.map(|id| id.value()), Some(5));
        assert_eq!(learn.planned_minutes, 45);
        assert_eq!(learn.title, "[商業] テーマC05 有価証券：テキスト・例題");
        assert_eq!(learn.meta["resource"], "textbook");
        assert_eq!(learn.meta["theme_code"], "C05");
    }

    #[test]
    fn test_expand_drill_template_with_page() {
        let [_, drill] = expand_topic(&topic(100, Some(46)));
        assert_eq!(drill.task_type, TaskKind::Drill);
        assert_eq!(drill.planned_minutes, 55);
        assert_eq!(drill.title, "[商業] テーマC05 有価証券：問題集 p46〜");
        assert_eq!(drill.meta["resource"], "problem_book");
        assert_eq!(drill.meta["problem_page_start"], 46);
    }

    #[test]
    fn test_expand_drill_template_without_page() {
        let [_, drill] = expand_topic(&topic(100, None));
        assert_eq!(drill.title, "[商業] テーマC05 有価証券：問題集");
        assert!(drill.meta["problem_page_start"].is_null());
    }
}

//! Generate a plan over the default curriculum and print it grouped by day.
//!
//! Run with: `cargo run --example generate_plan`

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use studyplan::curriculum;
use studyplan::{generate_tasks, PlanOptions, RestDays, TaskSeed};

fn main() -> anyhow::Result<()> {
    let start_date = NaiveDate::from_ymd_opt(2025, 1, 6).expect("valid date");
    let options = PlanOptions {
        start_date,
        exam_date: start_date + Duration::days(90),
        daily_minutes: 90,
        rest_days_per_week: RestDays::Sundays,
    };

    let tasks = generate_tasks(curriculum::default_topics(), &options)?;

    let mut by_day: BTreeMap<NaiveDate, Vec<&TaskSeed>> = BTreeMap::new();
    for task in &tasks {
        by_day.entry(task.task_date).or_default().push(task);
    }

    println!(
        "Plan {} -> exam {}: {} tasks over {} days\n",
        options.start_date,
        options.exam_date,
        tasks.len(),
        by_day.len()
    );

    for (day, day_tasks) in &by_day {
        let total: u32 = day_tasks.iter().map(|t| t.planned_minutes).sum();
        println!("{} ({} min)", day, total);
        for task in day_tasks {
            println!("  {:>3} min  {}", task.planned_minutes, task.title);
        }
    }

    Ok(())
}

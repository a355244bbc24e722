//! Greedy bin-packing of task templates into study days.
//!
//! Templates are consumed in order against a fixed per-day capacity. A
//! template that does not fit in the current day's remainder is split into
//! continuation fragments; whatever is still unplaced when the dates run out
//! is dropped. The same pass packs the topic queue into the pre-mock days
//! and the mock queue into the taper days.

use chrono::NaiveDate;

use crate::models::{TaskSeed, TaskTemplate};

/// Pack `queue` into `dates`, appending the dated seeds to `out`.
///
/// Every date carries the same `capacity_per_day` (the daily budget minus
/// the daily-review deduction). A zero capacity schedules nothing.
pub fn pack_into_days(
    queue: &[TaskTemplate],
    dates: &[NaiveDate],
    capacity_per_day: u32,
    out: &mut Vec<TaskSeed>,
) {
    if dates.is_empty() {
        if !queue.is_empty() {
            log::debug!("no dates available, skipping {} queued tasks", queue.len());
        }
        return;
    }

    let mut day_idx = 0usize;
    let mut remaining = capacity_per_day;

    for template in queue {
        let mut minutes_left = template.planned_minutes;
        let mut part: u32 = 1;

        while minutes_left > 0 {
            if day_idx >= dates.len() {
                // Out of days: the rest of this task (and everything after
                // it) is silently not scheduled.
                log::warn!(
                    "study window full, dropping {} unplaced minutes of '{}'",
                    minutes_left,
                    template.title
                );
                break;
            }

            if remaining == 0 {
                day_idx += 1;
                remaining = capacity_per_day;
                continue;
            }

            let date = dates[day_idx];
            if minutes_left <= remaining {
                out.push(template.assigned(date, minutes_left, full_fit_suffix(part).as_deref()));
                remaining -= minutes_left;
                minutes_left = 0;
            } else {
                out.push(template.assigned(date, remaining, split_suffix(part).as_deref()));
                minutes_left -= remaining;
                remaining = 0;
                part += 1;
            }
        }
    }
}

/// Suffix for a fragment that closes out its task on the current day.
fn full_fit_suffix(part: u32) -> Option<String> {
    (part > 1).then(|| format!("(続き{})", part))
}

/// Suffix for a fragment cut short by the day boundary. The first cut is
/// titled plain "(続き)", later cuts carry their part number.
fn split_suffix(part: u32) -> Option<String> {
    if part > 1 {
        Some(format!("(続き{})", part))
    } else {
        Some("(続き)".to_string())
    }
}

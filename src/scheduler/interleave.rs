//! Track interleaving.
//!
//! Merges the two curriculum tracks into one study order by a greedy
//! remaining-minutes comparison, so both tracks progress at roughly
//! proportional pace instead of one finishing before the other starts.

use std::collections::VecDeque;

use crate::models::{Topic, Track};

/// Merge the commercial and industrial topic lists (each pre-sorted by
/// display order) into one study order.
///
/// At each step the topic comes from whichever track has the larger
/// remaining estimated-minutes total; ties favor the commercial track. This
/// is a deterministic heuristic, not an optimal schedule, and must stay
/// byte-compatible with the host application's ordering.
pub fn interleave_by_remaining<'a>(
    commercial: Vec<&'a Topic>,
    industrial: Vec<&'a Topic>,
) -> Vec<&'a Topic> {
    let mut c: VecDeque<&Topic> = commercial.into();
    let mut i: VecDeque<&Topic> = industrial.into();

    let mut rem_c: i64 = c.iter().map(|t| i64::from(t.estimated_minutes)).sum();
    let mut rem_i: i64 = i.iter().map(|t| i64::from(t.estimated_minutes)).sum();

    let mut order = Vec::with_capacity(c.len() + i.len());

    while !c.is_empty() || !i.is_empty() {
        let pick_commercial = (!c.is_empty() && rem_c >= rem_i) || i.is_empty();
        if pick_commercial {
            if let Some(t) = c.pop_front() {
                rem_c -= i64::from(t.estimated_minutes);
                order.push(t);
            }
        } else if let Some(t) = i.pop_front() {
            rem_i -= i64::from(t.estimated_minutes);
            order.push(t);
        }
    }

    order
}

/// Select and order the topics of one track, ascending by display order.
/// The sort is stable, so equal display orders keep their input order.
pub fn track_topics(topics: &[Topic], track: Track) -> Vec<&Topic> {
    let mut selected: Vec<&Topic> = topics.iter().filter(|t| t.subject == track).collect();
    selected.sort_by_key(|t| t.display_order);
    selected
}

/// Full interleaving pass over an unordered topic list.
pub fn interleave_topics(topics: &[Topic]) -> Vec<&Topic> {
    interleave_by_remaining(
        track_topics(topics, Track::Commercial),
        track_topics(topics, Track::Industrial),
    )
}

use serde::{Deserialize, Serialize};

crate::define_id_type!(i64, TopicId);

/// Curriculum track a topic or task belongs to.
///
/// `Commercial` and `Industrial` are the two bookkeeping tracks of the
/// Level-2 syllabus. `Mixed` is reserved for generated tasks that are not
/// topic-specific (mock exams, reviews); no topic ever carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    Commercial,
    Industrial,
    Mixed,
}

impl Track {
    /// Japanese label used in task titles.
    pub fn label(&self) -> &'static str {
        match self {
            Track::Commercial => "商業",
            Track::Industrial => "工業",
            Track::Mixed => "総合",
        }
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Track::Commercial => "commercial",
            Track::Industrial => "industrial",
            Track::Mixed => "mixed",
        };
        write!(f, "{}", s)
    }
}

/// One curriculum unit with an estimated effort budget and display ordering.
///
/// Topics are supplied by the caller (the host application reads them from
/// its `themes` table) and are read-only to the scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    /// Track assignment; must be `Commercial` or `Industrial`.
    pub subject: Track,
    /// Short display code, e.g. "C03".
    pub code: String,
    pub title: String,
    /// Sort key within the track; ties in scheduling are broken by this order.
    pub display_order: i32,
    /// First page of the companion problem set, when known.
    #[serde(default)]
    pub problem_page_start: Option<u32>,
    /// Estimated total minutes to fully cover the topic (positive).
    pub estimated_minutes: u32,
}

impl Topic {
    pub fn new(
        id: i64,
        subject: Track,
        code: impl Into<String>,
        title: impl Into<String>,
        display_order: i32,
        problem_page_start: Option<u32>,
        estimated_minutes: u32,
    ) -> Self {
        Self {
            id: TopicId::new(id),
            subject,
            code: code.into(),
            title: title.into(),
            display_order,
            problem_page_start,
            estimated_minutes,
        }
    }
}

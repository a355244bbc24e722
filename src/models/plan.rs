use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};

/// Weekly rest-day policy.
///
/// Level 1 takes Sundays off; level 2 additionally takes Wednesdays off.
/// Weekly reviews are exempt and land on Sundays regardless of this policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RestDays {
    None,
    Sundays,
    SundaysAndWednesdays,
}

impl RestDays {
    /// Number of rest days per week (0-2), matching the stored form value.
    pub fn per_week(&self) -> u8 {
        match self {
            RestDays::None => 0,
            RestDays::Sundays => 1,
            RestDays::SundaysAndWednesdays => 2,
        }
    }

    /// Whether `date` is excluded from study under this policy.
    pub fn is_rest_day(&self, date: NaiveDate) -> bool {
        match date.weekday() {
            Weekday::Sun => *self >= RestDays::Sundays,
            Weekday::Wed => *self >= RestDays::SundaysAndWednesdays,
            _ => false,
        }
    }
}

impl TryFrom<u8> for RestDays {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(RestDays::None),
            1 => Ok(RestDays::Sundays),
            2 => Ok(RestDays::SundaysAndWednesdays),
            other => Err(format!("rest_days_per_week must be 0-2, got {}", other)),
        }
    }
}

impl From<RestDays> for u8 {
    fn from(v: RestDays) -> u8 {
        v.per_week()
    }
}

/// Options for one plan-generation request.
///
/// Dates are local calendar days with no time component. The exam day itself
/// is never a study day; the last study day is `exam_date - 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanOptions {
    pub start_date: NaiveDate,
    pub exam_date: NaiveDate,
    /// Daily study budget in minutes.
    pub daily_minutes: u32,
    #[serde(default = "default_rest_days")]
    pub rest_days_per_week: RestDays,
}

fn default_rest_days() -> RestDays {
    RestDays::Sundays
}

impl PlanOptions {
    /// Last calendar day available for study (the day before the exam).
    pub fn last_study_day(&self) -> NaiveDate {
        self.exam_date - Duration::days(1)
    }

    /// Enforce the window invariant: the last study day must not precede the
    /// start date.
    pub fn validate_window(&self) -> PlannerResult<()> {
        if self.last_study_day() < self.start_date {
            return Err(PlannerError::ConfigurationError(format!(
                "exam date {} is not after start date {} (no study day exists)",
                self.exam_date, self.start_date
            )));
        }
        Ok(())
    }
}

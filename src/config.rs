//! Plan-configuration files.
//!
//! The host application collects the plan window, daily budget, and rest-day
//! policy from a setup form; this module accepts the same fields from a TOML
//! document, optionally bundling an inline curriculum. Dates are quoted
//! calendar-day strings (`"2025-01-06"`).
//!
//! ```toml
//! [plan]
//! start_date = "2025-01-06"
//! exam_date = "2025-06-08"
//! daily_minutes = 90
//! rest_days_per_week = 1
//!
//! [[topics]]
//! id = 1
//! subject = "commercial"
//! code = "C01"
//! title = "商品売買"
//! display_order = 1
//! problem_page_start = 2
//! estimated_minutes = 150
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::models::{PlanOptions, Topic, Track};

/// One plan-generation request loaded from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanConfig {
    pub plan: PlanOptions,
    /// Inline curriculum; empty means the caller supplies topics separately
    /// (e.g. [`crate::curriculum::default_topics`]).
    #[serde(default)]
    pub topics: Vec<Topic>,
}

impl PlanConfig {
    /// Parse and validate a configuration document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: PlanConfig =
            toml::from_str(text).context("Failed to parse plan configuration TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan configuration {}", path.display()))?;
        Self::from_toml_str(&text)
    }

    /// Form-level validation: the same rules the host's setup form applies.
    /// The scheduler itself only enforces the window ordering.
    fn validate(&self) -> Result<()> {
        if self.plan.daily_minutes == 0 {
            bail!("daily_minutes must be positive");
        }
        for topic in &self.topics {
            if topic.estimated_minutes == 0 {
                bail!("Topic {} has zero estimated minutes", topic.code);
            }
            if topic.subject == Track::Mixed {
                bail!("Topic {} cannot use the mixed track", topic.code);
            }
        }
        Ok(())
    }
}

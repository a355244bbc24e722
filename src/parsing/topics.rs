//! Topic-list JSON loading.
//!
//! The host application exports its `themes` table as a JSON array; this
//! module deserializes that export and checks the shape invariants the
//! scheduler relies on (unique ids, non-empty codes, positive estimates,
//! real track assignment).

use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::path::Path;

use crate::models::{Topic, Track};

/// Parse a topic-list JSON array from a string.
///
/// Deserialization errors name the offending element path
/// (e.g. `[3].estimated_minutes`).
pub fn parse_topics_json_str(json: &str) -> Result<Vec<Topic>> {
    let deserializer = &mut serde_json::Deserializer::from_str(json);
    let topics: Vec<Topic> = serde_path_to_error::deserialize(deserializer)
        .context("Failed to deserialize topic list JSON")?;
    validate_topics(&topics)?;
    Ok(topics)
}

/// Parse a topic-list JSON array from a file.
pub fn parse_topics_json_file(path: &Path) -> Result<Vec<Topic>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read topic list {}", path.display()))?;
    parse_topics_json_str(&json)
}

fn validate_topics(topics: &[Topic]) -> Result<()> {
    let mut seen = HashSet::new();
    for topic in topics {
        if !seen.insert(topic.id) {
            bail!("Duplicate topic id {}", topic.id);
        }
        if topic.code.trim().is_empty() {
            bail!("Topic {} has an empty code", topic.id);
        }
        if topic.estimated_minutes == 0 {
            bail!("Topic {} has zero estimated minutes", topic.code);
        }
        if topic.subject == Track::Mixed {
            bail!(
                "Topic {} uses the synthetic mixed track; topics must be commercial or industrial",
                topic.code
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_JSON: &str = r#"[
        {
            "id": 1,
            "subject": "commercial",
            "code": "C01",
            "title": "商品売買",
            "display_order": 1,
            "problem_page_start": 2,
            "estimated_minutes": 150
        },
        {
            "id": 17,
            "subject": "industrial",
            "code": "I01",
            "title": "工業簿記の基礎",
            "display_order": 1,
            "problem_page_start": null,
            "estimated_minutes": 90
        }
    ]"#;

    #[test]
    fn test_parse_valid_topic_list() {
        let topics = parse_topics_json_str(VALID_JSON).unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].subject, Track::Commercial);
        assert_eq!(topics[0].problem_page_start, Some(2));
        assert_eq!(topics[1].problem_page_start, None);
    }

    #[test]
    fn test_parse_error_names_element_path() {
        let json = r#"[{
            "id": 1,
            "subject": "commercial",
            "code": "C01",
            "title": "商品売買",
            "display_order": 1,
            "estimated_minutes": "a lot"
        }]"#;
        let err = parse_topics_json_str(json).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("estimated_minutes"), "got: {}", chain);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id": 1, "subject": "commercial", "code": "C01", "title": "a",
             "display_order": 1, "estimated_minutes": 60},
            {"id": 1, "subject": "industrial", "code": "I01", "title": "b",
             "display_order": 1, "estimated_minutes": 60}
        ]"#;
        assert!(parse_topics_json_str(json).is_err());
    }

    #[test]
    fn test_zero_estimate_rejected() {
        let json = r#"[
            {"id": 1, "subject": "commercial", "code": "C01", "title": "a",
             "display_order": 1, "estimated_minutes": 0}
        ]"#;
        assert!(parse_topics_json_str(json).is_err());
    }

    #[test]
    fn test_mixed_track_rejected() {
        let json = r#"[
            {"id": 1, "subject": "mixed", "code": "X01", "title": "a",
             "display_order": 1, "estimated_minutes": 60}
        ]"#;
        assert!(parse_topics_json_str(json).is_err());
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert!(parse_topics_json_str("[]").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json() {
        assert!(parse_topics_json_str("not valid json {").is_err());
    }
}

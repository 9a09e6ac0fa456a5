use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Nested category relation carried on a tool record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
}

/// A tool record as supplied by the item repository.
///
/// Everything beyond `name` is optional in the upstream data; absent fields
/// degrade to "no match" in the search pipeline rather than erroring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub categories: Option<CategoryRef>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub click_count: u64,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Tool {
    /// Creation time in milliseconds since the epoch.
    ///
    /// Missing or unparseable timestamps rank as epoch 0 so date sorts stay
    /// total instead of producing undefined order.
    #[must_use]
    pub fn created_at_ms(&self) -> i64 {
        let Some(raw) = self.created_at.as_deref() else {
            return 0;
        };
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return dt.timestamp_millis();
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                return midnight.and_utc().timestamp_millis();
            }
        }
        0
    }
}

//! JSON export of the task list
//!
//! The document is an array of task objects with `due` written as
//! `YYYY-MM-DD`, or an empty string when the task has no due date.

use super::error::Result;
use super::model::Task;

/// Suggested file name when offering the export for download
pub const EXPORT_FILE_NAME: &str = "tasks.json";

pub const EXPORT_MIME_TYPE: &str = "application/json";

/// Serialize tasks as a pretty-printed JSON array
pub fn to_json(tasks: &[Task]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tasks)?)
}

/// Parse a document produced by [`to_json`]
pub fn from_json(content: &str) -> Result<Vec<Task>> {
    Ok(serde_json::from_str(content)?)
}

/// Serde adapter for `Option<NaiveDate>` as `"YYYY-MM-DD"` or `""`
pub mod due_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(due: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match due {
            Some(date) => serializer.collect_str(&date.format(FORMAT)),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

//! Task data model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque task identifier, unique within a session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub String);

impl TaskId {
    /// Generate a fresh random ID (16 hex chars)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string()[..16].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    /// Get the label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category tag attached to a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Email,
    Coding,
    Research,
    Meeting,
    Design,
    Deploy,
    /// Fallback when no category matched
    General,
}

impl Tag {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Coding => "coding",
            Self::Research => "research",
            Self::Meeting => "meeting",
            Self::Design => "design",
            Self::Deploy => "deploy",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifier output: priority, estimate and tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub priority: TaskPriority,
    pub est_minutes: u32,
    /// Never empty; `[General]` when nothing matched
    pub tags: Vec<Tag>,
}

/// A task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task ID
    pub id: TaskId,

    /// Trimmed description, fixed at creation
    pub text: String,

    /// Due date (if any)
    #[serde(default, with = "super::export::due_date")]
    pub due: Option<NaiveDate>,

    pub priority: TaskPriority,

    pub est_minutes: u32,

    pub tags: Vec<Tag>,

    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// Create a new, not-yet-done task from a suggestion
    pub fn new(
        id: TaskId,
        text: impl Into<String>,
        due: Option<NaiveDate>,
        suggestion: Suggestion,
    ) -> Self {
        let Suggestion {
            priority,
            est_minutes,
            tags,
        } = suggestion;

        Self {
            id,
            text: text.into(),
            due,
            priority,
            est_minutes,
            tags,
            done: false,
        }
    }

    /// Replace priority, estimate and tags together
    pub fn apply(&mut self, suggestion: Suggestion) {
        let Suggestion {
            priority,
            est_minutes,
            tags,
        } = suggestion;
        (self.priority, self.est_minutes, self.tags) = (priority, est_minutes, tags);
    }

    /// The current priority, estimate and tags
    pub fn suggestion(&self) -> Suggestion {
        Suggestion {
            priority: self.priority,
            est_minutes: self.est_minutes,
            tags: self.tags.clone(),
        }
    }

    pub fn tags_label(&self) -> String {
        self.tags
            .iter()
            .map(Tag::label)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Format as the one-line detail shown under the task text
    pub fn detail_line(&self) -> String {
        let due = self
            .due
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "—".to_string());

        format!(
            "Priority: {} • Est: {}m • Tags: {} • Due: {}",
            self.priority,
            self.est_minutes,
            self.tags_label(),
            due
        )
    }
}

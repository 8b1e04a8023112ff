use thiserror::Error;

use super::model::TaskId;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task description must not be empty")]
    Validation,

    #[error("Task not found: {0}")]
    NotFound(TaskId),

    #[error("Invalid task {0} in export: {1}")]
    InvalidTask(TaskId, &'static str),

    #[error("Failed to serialize tasks: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TaskError>;

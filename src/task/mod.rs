//! Task management module
//!
//! This module provides the in-memory to-do list:
//! - Rule-based suggestion of priority, estimate and tags
//! - Ordered task store (add, toggle, reclassify, delete, clear completed)
//! - JSON export

pub mod classifier;
pub mod error;
pub mod export;
pub mod model;
pub mod store;

pub use classifier::classify;
pub use error::{Result, TaskError};
pub use export::{EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
pub use model::{Suggestion, Tag, Task, TaskId, TaskPriority};
pub use store::TaskStore;

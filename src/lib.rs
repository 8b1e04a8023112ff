//! ai-todo library - In-memory to-do list with rule-based suggestions
//!
//! The [`task`] module holds the classifier and the task store; [`cli`] is the
//! command-line shell built on top of it.

pub mod cli;
pub mod config;
pub mod task;

//! Errors raised by task list operations.
//!
//! Every variant is caught by the UI handler that triggered it and turned into
//! an error toast, so the `Display` text is what the user reads.

use chrono::NaiveDate;
use thiserror::Error;

/// Input rejected before it reaches the task list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a task title.")]
    EmptyTitle,

    #[error("Please enter a due date.")]
    EmptyDueDate,

    /// Not `yyyy-MM-dd`, or not a real calendar day.
    #[error("'{0}' is not a valid yyyy-MM-dd date.")]
    InvalidDate(String),

    #[error("Due date {date} is in the past (today is {today}).")]
    PastDate { date: NaiveDate, today: NaiveDate },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The action needs a selected task and none (or a stale one) was given.
    #[error("Please select a task first.")]
    NoSelection,
}

pub type Result<T> = std::result::Result<T, TaskError>;

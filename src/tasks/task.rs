use chrono::NaiveDate;

use super::{due_date, priority::Priority};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub title: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub completed: bool,
}

impl Task {
    pub fn new(title: impl Into<String>, due_date: NaiveDate, priority: Priority) -> Self {
        Self {
            title: title.into(),
            due_date,
            priority,
            completed: false,
        }
    }

    /// Flips the completion flag and returns the new value.
    pub fn toggle_completed(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    pub fn due_date_label(&self) -> String {
        due_date::format(self.due_date)
    }

    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Pending"
        }
    }
}

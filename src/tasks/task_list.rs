use tracing::debug;

use super::{due_date, priority::Priority, task::Task};
use crate::error::{Result, TaskError, ValidationError};

/// Ordered, in-memory list of tasks. Order is insertion order.
#[derive(Debug, Default)]
pub struct TaskList {
    items: Vec<Task>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Updated,
    /// At least one field was not supplied; nothing changed.
    Cancelled,
}

fn required(input: &str, missing: ValidationError) -> std::result::Result<&str, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        Err(missing)
    } else {
        Ok(input)
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Task] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.items.get(index)
    }

    fn resolve(&self, index: Option<usize>) -> Result<usize> {
        index
            .filter(|i| *i < self.items.len())
            .ok_or(TaskError::NoSelection)
    }

    /// Validates the input and appends a new, pending task.
    pub fn add(&mut self, title: &str, due: &str, priority: Priority) -> Result<&Task> {
        let title = required(title, ValidationError::EmptyTitle)?;
        let due = required(due, ValidationError::EmptyDueDate)?;
        let due_date = due_date::parse(due, due_date::today())?;

        self.items.push(Task::new(title, due_date, priority));
        debug!(len = self.items.len(), "task appended");
        Ok(&self.items[self.items.len() - 1])
    }

    pub fn remove(&mut self, index: Option<usize>) -> Result<Task> {
        let index = self.resolve(index)?;
        let task = self.items.remove(index);
        debug!(index, len = self.items.len(), "task removed");
        Ok(task)
    }

    /// Replaces title, due date and priority of the task at `index` in one step.
    ///
    /// A `None` field means the user backed out of that prompt: the whole edit
    /// is dropped and [`EditOutcome::Cancelled`] is returned. Completion state
    /// and position are kept.
    pub fn edit(
        &mut self,
        index: Option<usize>,
        title: Option<&str>,
        due: Option<&str>,
        priority: Option<Priority>,
    ) -> Result<EditOutcome> {
        let index = self.resolve(index)?;
        let (Some(title), Some(due), Some(priority)) = (title, due, priority) else {
            debug!(index, "edit cancelled");
            return Ok(EditOutcome::Cancelled);
        };

        let title = required(title, ValidationError::EmptyTitle)?;
        let due = required(due, ValidationError::EmptyDueDate)?;
        let due_date = due_date::parse(due, due_date::today())?;

        let task = &mut self.items[index];
        task.title = title.to_string();
        task.due_date = due_date;
        task.priority = priority;
        debug!(index, "task edited");
        Ok(EditOutcome::Updated)
    }

    /// Flips the completion flag and returns the new value.
    pub fn toggle_completed(&mut self, index: Option<usize>) -> Result<bool> {
        let index = self.resolve(index)?;
        Ok(self.items[index].toggle_completed())
    }
}

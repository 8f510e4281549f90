pub mod due_date;
pub mod priority;
pub mod task;
pub mod task_list;

pub use priority::Priority;
pub use task::Task;
pub use task_list::{EditOutcome, TaskList};

pub mod dispatch;
pub mod task_list;

pub use dispatch::{execute, CommandError, Outcome};
pub use task_list::{IndexError, TaskList};

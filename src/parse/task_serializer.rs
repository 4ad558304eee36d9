use crate::model::task::{Task, TaskKind};

/// Encode one task as a storage line.
///
/// Inverse of `decode_task`: variant tag, done flag, description, then the
/// variant's dates in ISO form, ` | `-delimited.
pub fn encode_task(task: &Task) -> String {
    let done = if task.done { '1' } else { '0' };
    match &task.kind {
        TaskKind::Todo => format!("T | {} | {}", done, task.description),
        TaskKind::Deadline { by } => {
            format!("D | {} | {} | {}", done, task.description, by)
        }
        TaskKind::Event { from, to } => {
            format!("E | {} | {} | {} | {}", done, task.description, from, to)
        }
    }
}

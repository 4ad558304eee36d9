use chrono::NaiveDate;
use serde::Serialize;

use crate::model::task::{Task, TaskKind};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub kind: &'static str,
    pub description: String,
    pub done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub count: usize,
    pub tasks: Vec<TaskJson>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson {
    let (kind, by, from, to) = match task.kind {
        TaskKind::Todo => ("todo", None, None, None),
        TaskKind::Deadline { by } => ("deadline", Some(by), None, None),
        TaskKind::Event { from, to } => ("event", None, Some(from), Some(to)),
    };
    TaskJson {
        kind,
        description: task.description.clone(),
        done: task.done,
        by,
        from,
        to,
    }
}

pub fn list_to_json(tasks: &[Task]) -> TaskListJson {
    TaskListJson {
        count: tasks.len(),
        tasks: tasks.iter().map(task_to_json).collect(),
    }
}

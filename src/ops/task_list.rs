use crate::model::task::Task;

/// Error type for out-of-bounds list operations
#[derive(Debug, Clone, thiserror::Error)]
#[error("index {index} out of bounds for a list of {len}")]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

/// The ordered task collection, plus a single-slot snapshot for undo.
///
/// All indices here are 0-based; the 1-based user-facing conversion is the
/// dispatcher's responsibility. Every mutating operation copies the current
/// sequence into the snapshot slot first, overwriting whatever was stored,
/// so exactly the last mutation is recoverable.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    snapshot: Option<Vec<Task>>,
}

impl TaskList {
    pub fn new() -> Self {
        TaskList::default()
    }

    /// Wrap an already-loaded sequence (e.g. read from storage).
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        TaskList {
            tasks,
            snapshot: None,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Raw sequence accessor for the persistence collaborator.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Append a task to the end of the list.
    pub fn add(&mut self, task: Task) {
        self.save_snapshot();
        self.tasks.push(task);
    }

    /// Set the done flag on the task at `index`.
    pub fn mark(&mut self, index: usize) -> Result<&Task, IndexError> {
        self.set_done(index, true)
    }

    /// Clear the done flag on the task at `index`.
    pub fn unmark(&mut self, index: usize) -> Result<&Task, IndexError> {
        self.set_done(index, false)
    }

    /// Remove and return the task at `index`. Later tasks shift down by one.
    pub fn delete(&mut self, index: usize) -> Result<Task, IndexError> {
        self.check_bounds(index)?;
        self.save_snapshot();
        Ok(self.tasks.remove(index))
    }

    /// Case-sensitive literal substring search over descriptions. Returns
    /// the matching tasks with their original 0-based positions, in list
    /// order. An empty needle matches every task.
    pub fn find<'a>(&'a self, needle: &str) -> Vec<(usize, &'a Task)> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.description.contains(needle))
            .collect()
    }

    /// Restore the sequence stored before the last mutation. Returns false
    /// when there is nothing to undo. Restoring consumes the snapshot, so a
    /// second consecutive undo cannot re-apply stale state.
    pub fn undo(&mut self) -> bool {
        match self.snapshot.take() {
            Some(previous) => {
                self.tasks = previous;
                true
            }
            None => false,
        }
    }

    fn set_done(&mut self, index: usize, done: bool) -> Result<&Task, IndexError> {
        self.check_bounds(index)?;
        self.save_snapshot();
        self.tasks[index].done = done;
        Ok(&self.tasks[index])
    }

    // Bounds are checked before the snapshot is taken, so a rejected call
    // never clobbers the undo slot.
    fn check_bounds(&self, index: usize) -> Result<(), IndexError> {
        if index >= self.tasks.len() {
            return Err(IndexError {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(())
    }

    fn save_snapshot(&mut self) {
        self.snapshot = Some(self.tasks.clone());
    }
}

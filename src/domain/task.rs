use super::enums::{Bucket, Priority, TaskStatus};
use std::fmt;
use thiserror::Error;

/// Store-local task identifier. Monotonic, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u32);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single task record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub bucket: Bucket,
}

impl Task {
    /// Copy of this task with the status flipped
    pub fn toggled(&self) -> Task {
        Task {
            status: self.status.flipped(),
            ..self.clone()
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }
}

/// Rejection reasons for store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("task title must not be empty")]
    EmptyTitle,
}

/// What a successful toggle/remove did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Toggled,
    Removed,
}

/// Result of a successful mutating operation, handed to the notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub kind: MutationKind,
    /// The task after a toggle, or the record that was removed
    pub task: Task,
    /// Human-readable description for toasts/notifications
    pub description: String,
}

impl Mutation {
    fn toggled(task: Task) -> Self {
        let description = format!("Task \"{}\" marked as {}", task.title, task.status.name());
        Self {
            kind: MutationKind::Toggled,
            task,
            description,
        }
    }

    fn removed(task: Task) -> Self {
        let description = format!("Task \"{}\" deleted", task.title);
        Self {
            kind: MutationKind::Removed,
            task,
            description,
        }
    }
}

/// Ordered task collection, owned by the caller
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u32,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the sample tasks shown on first launch with `--demo`
    pub fn demo(bucket: Bucket) -> Self {
        let mut store = Self::new();
        let seed = [
            ("Review Q1 Report", Priority::High, false),
            ("Team Meeting", Priority::Medium, true),
            ("Update Documentation", Priority::Low, false),
        ];
        for (title, priority, done) in seed {
            if let Ok(task) = store.add(title, priority, bucket) {
                if done {
                    store.toggle(task.id);
                }
            }
        }
        store
    }

    /// Add a task. Rejects empty or whitespace-only titles without touching the store.
    pub fn add(&mut self, title: &str, priority: Priority, bucket: Bucket) -> Result<Task, TaskError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(TaskError::EmptyTitle);
        }

        self.next_id += 1;
        let task = Task {
            id: TaskId(self.next_id),
            title: trimmed.to_string(),
            priority,
            status: TaskStatus::Pending,
            bucket,
        };
        self.tasks.push(task.clone());
        tracing::debug!(id = %task.id, priority = task.priority.name(), "task added");
        Ok(task)
    }

    /// Flip the status of a task. `None` if the id is unknown.
    pub fn toggle(&mut self, id: TaskId) -> Option<Mutation> {
        let slot = self.tasks.iter_mut().find(|t| t.id == id)?;
        let replacement = slot.toggled();
        *slot = replacement.clone();
        tracing::debug!(%id, status = replacement.status.name(), "task toggled");
        Some(Mutation::toggled(replacement))
    }

    /// Remove a task. `None` if the id is unknown.
    pub fn remove(&mut self, id: TaskId) -> Option<Mutation> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        let removed = self.tasks.remove(idx);
        tracing::debug!(%id, "task removed");
        Some(Mutation::removed(removed))
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[cfg(test)]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks of one priority, insertion order preserved
    pub fn by_priority(&self, priority: Priority) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.priority == priority).collect()
    }

    /// The three priority columns: high, medium, low
    pub fn partition_by_priority(&self) -> [(Priority, Vec<&Task>); 3] {
        [
            (Priority::High, self.by_priority(Priority::High)),
            (Priority::Medium, self.by_priority(Priority::Medium)),
            (Priority::Low, self.by_priority(Priority::Low)),
        ]
    }
}

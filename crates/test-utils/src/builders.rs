#![allow(dead_code)]

use meshwork::task::Task;
use meshwork::types::TaskStatus;

/// Builder for a single `Task`.
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    /// A task named after its id, status `Todo`, no dependencies.
    pub fn new(id: &str) -> Self {
        Self {
            task: Task::new(id, format!("Task {id}")),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.task.name = name.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.task.description = description.to_string();
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.task.status = status;
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.depends_on.push(dep.to_string());
        self
    }

    pub fn user(mut self, user: &str) -> Self {
        self.task.users.push(user.to_string());
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.task.tags.push(tag.to_string());
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}

/// Builder for a snapshot (`Vec<Task>`), preserving insertion order.
pub struct SnapshotBuilder {
    tasks: Vec<Task>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn with(mut self, task: TaskBuilder) -> Self {
        self.tasks.push(task.build());
        self
    }

    /// Shorthand: task `id` depending on `deps`.
    pub fn task(self, id: &str, deps: &[&str]) -> Self {
        let builder = deps
            .iter()
            .fold(TaskBuilder::new(id), |b, dep| b.after(dep));
        self.with(builder)
    }

    /// A straight chain `ids[0] <- ids[1] <- ...`.
    pub fn chain(mut self, ids: &[&str]) -> Self {
        for (i, id) in ids.iter().enumerate() {
            let deps: &[&str] = if i == 0 { &[] } else { &ids[i - 1..i] };
            self = self.task(id, deps);
        }
        self
    }

    pub fn build(self) -> Vec<Task> {
        self.tasks
    }
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

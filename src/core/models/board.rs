use serde::{Deserialize, Serialize};

use super::column::{Column, DONE_COLUMN, IN_PROGRESS_COLUMN, TODO_COLUMN};
use super::task::{Priority, Task, TaskDraft, NO_DATE};

/// Ordered columns of the board. Serialized as a bare JSON array of columns.
///
/// Every operation returns a new snapshot and leaves `self` untouched, so the
/// UI can swap the whole board in one signal write and persist it as-is.
/// Operations never fail: input that does not point at a real column or task
/// yields an unchanged copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Board {
    pub columns: Vec<Column>,
}

/// A slot on the board: a column and an index inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragLocation {
    pub column_id: String,
    pub index: usize,
}

impl DragLocation {
    pub fn new(column_id: impl Into<String>, index: usize) -> Self {
        Self {
            column_id: column_id.into(),
            index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Column(DragLocation),
    Trash,
}

/// Outcome of a drag gesture. `destination` is `None` when the drag was cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragResult {
    pub source: DragLocation,
    pub destination: Option<DropTarget>,
}

impl Board {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// The board shown when nothing usable is in storage.
    pub fn seed() -> Self {
        Self::new(vec![
            Column::new(
                TODO_COLUMN,
                "To Do",
                vec![
                    Task::new("t1", "Design System Update", Priority::High, "Oct 24"),
                    Task::new("t2", "User Research", Priority::Medium, "Oct 25"),
                ],
            ),
            Column::new(
                IN_PROGRESS_COLUMN,
                "In Progress",
                vec![Task::new("t3", "API Integration", Priority::High, "Oct 23")],
            ),
            Column::new(
                DONE_COLUMN,
                "Done",
                vec![Task::new("t4", "Homepage Animation", Priority::Low, "Oct 20")],
            ),
        ])
    }

    pub fn total_tasks(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    fn column_index(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == column_id)
    }

    /// Where a task currently sits.
    pub fn find_task(&self, task_id: &str) -> Option<DragLocation> {
        self.columns.iter().find_map(|column| {
            column
                .position(task_id)
                .map(|index| DragLocation::new(column.id.clone(), index))
        })
    }

    pub fn contains_task(&self, task_id: &str) -> bool {
        self.find_task(task_id).is_some()
    }

    /// `task-<millis>`, bumped forward until no task on the board uses it.
    pub fn next_task_id(&self, now_millis: i64) -> String {
        let mut stamp = now_millis;
        loop {
            let id = format!("task-{}", stamp);
            if !self.contains_task(&id) {
                return id;
            }
            stamp += 1;
        }
    }

    /// Appends a new task to the first column.
    pub fn create_task(&self, draft: &TaskDraft, now_millis: i64) -> Board {
        let Some(content) = draft.trimmed_content() else {
            return self.clone();
        };
        if self.columns.is_empty() {
            log::warn!("Board has no columns, dropping new task {:?}", content);
            return self.clone();
        }

        let task = Task::new(
            self.next_task_id(now_millis),
            content,
            draft.priority,
            draft.display_date().unwrap_or_else(|| NO_DATE.to_string()),
        );

        let mut next = self.clone();
        next.columns[0].tasks.push(task);
        next
    }

    /// Replaces content and priority of the task with `task_id`, wherever it is.
    /// The date only changes when the draft carries a valid one.
    pub fn update_task(&self, task_id: &str, draft: &TaskDraft) -> Board {
        let Some(content) = draft.trimmed_content() else {
            return self.clone();
        };
        let Some(location) = self.find_task(task_id) else {
            log::warn!("Task {} not found, nothing to update", task_id);
            return self.clone();
        };

        let mut next = self.clone();
        if let Some(column) = next.columns.iter_mut().find(|c| c.id == location.column_id) {
            let task = &mut column.tasks[location.index];
            task.content = content.to_string();
            task.priority = draft.priority;
            if let Some(date) = draft.display_date() {
                task.date = date;
            }
        }
        next
    }

    /// Single entry point of the task form: edit when `editing` names a task,
    /// create otherwise.
    pub fn save_task(&self, editing: Option<&str>, draft: &TaskDraft, now_millis: i64) -> Board {
        match editing {
            Some(task_id) => self.update_task(task_id, draft),
            None => self.create_task(draft, now_millis),
        }
    }

    /// Removes the task at `source_index` and inserts it at `destination_index`.
    ///
    /// Both indices follow splice semantics: the destination index is applied
    /// after the removal, and an index past the end appends.
    pub fn move_task(
        &self,
        source_column: &str,
        source_index: usize,
        destination_column: &str,
        destination_index: usize,
    ) -> Board {
        let (Some(src), Some(dst)) = (
            self.column_index(source_column),
            self.column_index(destination_column),
        ) else {
            return self.clone();
        };
        if source_index >= self.columns[src].len() {
            return self.clone();
        }

        let mut next = self.clone();
        let task = next.columns[src].tasks.remove(source_index);
        let tasks = &mut next.columns[dst].tasks;
        let at = destination_index.min(tasks.len());
        tasks.insert(at, task);
        next
    }

    pub fn delete_task(&self, source_column: &str, source_index: usize) -> Board {
        let Some(src) = self.column_index(source_column) else {
            return self.clone();
        };
        if source_index >= self.columns[src].len() {
            return self.clone();
        }

        let mut next = self.clone();
        next.columns[src].tasks.remove(source_index);
        next
    }

    pub fn apply_drop(&self, result: &DragResult) -> Board {
        let source = &result.source;
        match &result.destination {
            None => self.clone(),
            Some(DropTarget::Trash) => self.delete_task(&source.column_id, source.index),
            Some(DropTarget::Column(destination)) => self.move_task(
                &source.column_id,
                source.index,
                &destination.column_id,
                destination.index,
            ),
        }
    }
}

use redb::{Database, ReadableTable, TableDefinition};
use std::{path::Path, sync::Arc};
use uuid::Uuid;

use crate::{
    task::{Task, TaskChanges},
    task_error::TaskError,
};

const TASKS_TABLE: TableDefinition<&[u8], &[u8]> = TableDefinition::new("tasks");

#[derive(Clone)]
pub struct DataContext {
    db: Arc<Database>,
}

impl DataContext {
    /// Open (or create) the database file and make sure the tasks table exists.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = Database::create(path)?;
        let write_txn = db.begin_write()?;
        let _ = write_txn.open_table(TASKS_TABLE)?;
        write_txn.commit()?;
        Ok(DataContext { db: Arc::new(db) })
    }

    /// All tasks in key order. No other ordering is promised.
    pub fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let tasks_table = read_txn.open_table(TASKS_TABLE)?;

        let mut tasks = Vec::new();
        for entry in tasks_table.iter()? {
            let (_, value) = entry?;
            tasks.push(decode(value.value())?);
        }
        tracing::debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    pub fn create_task(&self, task: &Task) -> Result<(), StoreError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut tasks_table = write_txn.open_table(TASKS_TABLE)?;
            let task_bytes = encode(task)?;
            tasks_table.insert(task.id.as_bytes().as_slice(), task_bytes.as_slice())?;
        }
        write_txn.commit()?;
        tracing::debug!(task_id = %task.id, "stored new task");
        Ok(())
    }

    pub fn get_task(&self, id: Uuid) -> Result<Task, TaskError> {
        self.find_task(id)?.ok_or(TaskError::NotFound)
    }

    /// Applies `changes` to the stored task and returns the result.
    pub fn update_task(&self, id: Uuid, changes: TaskChanges) -> Result<Task, TaskError> {
        self.apply_changes(id, changes)?.ok_or(TaskError::NotFound)
    }

    pub fn delete_task(&self, id: Uuid) -> Result<(), TaskError> {
        if self.remove_task(id)? {
            Ok(())
        } else {
            Err(TaskError::NotFound)
        }
    }

    fn find_task(&self, id: Uuid) -> Result<Option<Task>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let tasks_table = read_txn.open_table(TASKS_TABLE)?;

        match tasks_table.get(id.as_bytes().as_slice())? {
            Some(data) => Ok(Some(decode(data.value())?)),
            None => Ok(None),
        }
    }

    // Read and write share one transaction so the edit lands on the latest value.
    fn apply_changes(&self, id: Uuid, changes: TaskChanges) -> Result<Option<Task>, StoreError> {
        let write_txn = self.db.begin_write()?;
        let edited;
        {
            let mut tasks_table = write_txn.open_table(TASKS_TABLE)?;
            let current = match tasks_table.get(id.as_bytes().as_slice())? {
                Some(data) => decode(data.value())?,
                None => return Ok(None),
            };
            edited = current.edit(changes);
            let task_bytes = encode(&edited)?;
            tasks_table.insert(id.as_bytes().as_slice(), task_bytes.as_slice())?;
        }
        write_txn.commit()?;
        tracing::debug!(task_id = %id, "updated task");
        Ok(Some(edited))
    }

    fn remove_task(&self, id: Uuid) -> Result<bool, StoreError> {
        let write_txn = self.db.begin_write()?;
        let deleted;
        {
            let mut tasks_table = write_txn.open_table(TASKS_TABLE)?;
            let result = tasks_table.remove(id.as_bytes().as_slice())?;
            deleted = result.is_some();
        }
        write_txn.commit()?;
        tracing::debug!(task_id = %id, deleted, "removed task");
        Ok(deleted)
    }
}

fn encode(task: &Task) -> Result<Vec<u8>, StoreError> {
    postcard::to_allocvec(task).map_err(|e| StoreError::Encode(e.to_string()))
}

fn decode(bytes: &[u8]) -> Result<Task, StoreError> {
    postcard::from_bytes(bytes).map_err(|e| StoreError::Decode(e.to_string()))
}

// ── Errors ─────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("redb: {0}")]
    Redb(String),
    #[error("decode: {0}")]
    Decode(String),
    #[error("encode: {0}")]
    Encode(String),
    #[error("connect: {0}")]
    Connect(String),
}

// redb 2.x has many error types. Blanket them all into StoreError::Redb.
macro_rules! from_redb {
    ($($t:ty),*) => {
        $(impl From<$t> for StoreError {
            fn from(e: $t) -> Self { StoreError::Redb(e.to_string()) }
        })*
    };
}

from_redb!(
    redb::Error,
    redb::DatabaseError,
    redb::TableError,
    redb::TransactionError,
    redb::StorageError,
    redb::CommitError
);

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{task::NewTask, task_status::TaskStatus};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    /// Fresh database in a temp dir that is removed on drop.
    fn temp_context() -> (DataContext, TempDir) {
        let dir = TempDir::new().unwrap();
        let context = DataContext::new(dir.path().join("tasks.redb")).unwrap();
        (context, dir)
    }

    fn sample(title: &str) -> Task {
        Task::new(NewTask {
            title: title.into(),
            description: "something to do".into(),
            due_date: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            status: TaskStatus::Pending,
        })
    }

    #[test]
    fn empty_store_lists_nothing() {
        let (ctx, _dir) = temp_context();
        assert!(ctx.list_tasks().unwrap().is_empty());
    }

    #[test]
    fn create_then_get() {
        let (ctx, _dir) = temp_context();
        let task = sample("Buy milk");
        ctx.create_task(&task).unwrap();

        assert_eq!(ctx.get_task(task.id).unwrap(), task);
        assert_eq!(ctx.list_tasks().unwrap().len(), 1);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let (ctx, _dir) = temp_context();
        assert!(matches!(ctx.get_task(Uuid::new_v4()), Err(TaskError::NotFound)));
        assert!(matches!(
            ctx.update_task(Uuid::new_v4(), TaskChanges::default()),
            Err(TaskError::NotFound)
        ));
        assert!(matches!(ctx.delete_task(Uuid::new_v4()), Err(TaskError::NotFound)));
    }

    #[test]
    fn update_persists_partial_changes() {
        let (ctx, _dir) = temp_context();
        let task = sample("Paint fence");
        ctx.create_task(&task).unwrap();

        let updated = ctx
            .update_task(
                task.id,
                TaskChanges {
                    status: Some(TaskStatus::InProgress),
                    ..TaskChanges::default()
                },
            )
            .unwrap();
        assert_eq!(updated.status, TaskStatus::InProgress);
        assert_eq!(updated.title, "Paint fence");

        let reloaded = ctx.get_task(task.id).unwrap();
        assert_eq!(reloaded, updated);
    }

    #[test]
    fn delete_removes_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.redb");
        let task = sample("Doomed");
        {
            let ctx = DataContext::new(&path).unwrap();
            ctx.create_task(&task).unwrap();
            ctx.delete_task(task.id).unwrap();
        }

        // Reopen: the task should be gone
        let ctx = DataContext::new(&path).unwrap();
        assert!(ctx.list_tasks().unwrap().is_empty());
        assert!(matches!(ctx.get_task(task.id), Err(TaskError::NotFound)));
    }

    #[test]
    fn tasks_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.redb");
        let first = sample("One");
        let second = sample("Two");
        {
            let ctx = DataContext::new(&path).unwrap();
            ctx.create_task(&first).unwrap();
            ctx.create_task(&second).unwrap();
        }

        let ctx = DataContext::new(&path).unwrap();
        let mut titles: Vec<String> = ctx.list_tasks().unwrap().into_iter().map(|t| t.title).collect();
        titles.sort();
        assert_eq!(titles, vec!["One", "Two"]);
    }
}

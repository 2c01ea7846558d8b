// Task persistence over SQLite

use crate::error::{Result, StoreError};
use crate::import;
use crate::models::{Task, TaskId};
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Persistent task store backed by a single SQLite database file.
///
/// The handle owns the connection; there is no shared global state. Every
/// mutating call runs as a single autocommit statement and is durable
/// before it returns.
pub struct Store {
    db: Connection,
}

impl Store {
    /// Open or create the store at the given database path.
    ///
    /// Parent directories are created if missing and the schema is applied
    /// with `IF NOT EXISTS`, so opening an already-initialized database is
    /// safe.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let db = Connection::open(path)?;
        let store = Self { db };
        store.create_schema()?;

        Ok(store)
    }

    /// Create database schema
    fn create_schema(&self) -> Result<()> {
        debug!("Creating database schema");

        // AUTOINCREMENT keeps deleted ids from ever being reassigned.
        self.db.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                description TEXT NOT NULL,
                completed BOOLEAN NOT NULL CHECK (completed IN (0, 1))
            );
            "#,
        )?;

        Ok(())
    }

    /// Add a new task with the given description, initially not completed.
    ///
    /// Returns the id assigned by the database.
    pub fn add(&mut self, description: &str) -> Result<TaskId> {
        Self::validate_description(description)?;

        self.db.execute(
            "INSERT INTO tasks (description, completed) VALUES (?1, 0)",
            [description],
        )?;

        Ok(self.db.last_insert_rowid())
    }

    /// Delete the task with the given id. No-op if the id does not exist.
    pub fn remove(&mut self, id: TaskId) -> Result<()> {
        let changed = self
            .db
            .execute("DELETE FROM tasks WHERE id = ?1", [id])?;
        if changed == 0 {
            debug!(id, "remove: no such task");
        }
        Ok(())
    }

    /// Mark the task with the given id completed.
    ///
    /// Idempotent, and a no-op if the id does not exist. There is no
    /// reverse operation; completion is one-way.
    pub fn mark_completed(&mut self, id: TaskId) -> Result<()> {
        let changed = self
            .db
            .execute("UPDATE tasks SET completed = 1 WHERE id = ?1", [id])?;
        if changed == 0 {
            debug!(id, "mark_completed: no such task");
        }
        Ok(())
    }

    /// Replace the description of the task with the given id.
    ///
    /// The completed flag is untouched. No-op if the id does not exist.
    pub fn update_description(&mut self, id: TaskId, description: &str) -> Result<()> {
        Self::validate_description(description)?;

        let changed = self.db.execute(
            "UPDATE tasks SET description = ?1 WHERE id = ?2",
            rusqlite::params![description, id],
        )?;
        if changed == 0 {
            debug!(id, "update_description: no such task");
        }
        Ok(())
    }

    /// List all tasks in insertion order.
    pub fn list(&self) -> Result<Vec<Task>> {
        let mut stmt = self
            .db
            .prepare("SELECT id, description, completed FROM tasks ORDER BY id")?;

        let rows = stmt.query_map([], |row| {
            Ok(Task {
                id: row.get(0)?,
                description: row.get(1)?,
                completed: row.get(2)?,
            })
        })?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row?);
        }

        Ok(tasks)
    }

    /// Import tasks from a JSON file of `{description, completed}` records.
    ///
    /// Each record is added and, when flagged, marked completed, one
    /// commit at a time. Not atomic: a failure partway through leaves the
    /// records before it committed.
    pub fn import_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let records = import::read_import_file(path)?;

        let mut count = 0;
        for record in &records {
            let id = self.add(&record.description)?;
            if record.completed {
                self.mark_completed(id)?;
            }
            count += 1;
        }

        info!(file = ?path, count, "Imported tasks");

        Ok(count)
    }

    fn validate_description(description: &str) -> Result<()> {
        if description.trim().is_empty() {
            return Err(StoreError::Validation(
                "task description cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{TodoError, TodoResult};
use crate::models::Task;

/// Repository trait for Task persistence
///
/// Storage only: no uniqueness or status rules live here. Backend failures
/// come back as [`TodoError::Backend`] and are never retried.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Insert a task; the store assigns the id
    async fn insert_item(&self, task: &str, status: &str) -> TodoResult<Task>;

    /// Every stored task, in no guaranteed order
    async fn get_all_items(&self) -> TodoResult<Vec<Task>>;

    /// Overwrite one task's status; `NotFound` when no row has `id`
    async fn update_item_status(&self, id: i32, status: &str) -> TodoResult<()>;

    /// Remove one task; `NotFound` when no row has `id`
    async fn delete_item(&self, id: i32) -> TodoResult<()>;
}

#[derive(Debug)]
struct Table {
    rows: BTreeMap<i32, Task>,
    next_id: i32,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory implementation of TodoRepository (for development/testing)
///
/// Ids start at 1 and are never reused.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTodoRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn insert_item(&self, task: &str, status: &str) -> TodoResult<Task> {
        let mut table = self.table.write().await;

        let id = table.next_id;
        table.next_id += 1;

        let item = Task {
            id,
            task: task.to_string(),
            status: status.to_string(),
        };
        table.rows.insert(id, item.clone());

        tracing::info!(task_id = id, "Inserted task");
        Ok(item)
    }

    async fn get_all_items(&self) -> TodoResult<Vec<Task>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn update_item_status(&self, id: i32, status: &str) -> TodoResult<()> {
        let mut table = self.table.write().await;

        let item = table.rows.get_mut(&id).ok_or(TodoError::NotFound(id))?;
        item.status = status.to_string();

        tracing::info!(task_id = id, "Updated task status");
        Ok(())
    }

    async fn delete_item(&self, id: i32) -> TodoResult<()> {
        let mut table = self.table.write().await;

        if table.rows.remove(&id).is_none() {
            return Err(TodoError::NotFound(id));
        }

        tracing::info!(task_id = id, "Deleted task");
        Ok(())
    }
}

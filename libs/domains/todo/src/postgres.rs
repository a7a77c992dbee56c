use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    entity,
    error::{TodoError, TodoResult},
    models::Task,
    repository::TodoRepository,
};

/// `TodoRepository` over the `todo_items` table.
///
/// Each operation is a single statement; the pool handles concurrency.
#[derive(Clone)]
pub struct PgTodoRepository {
    db: DatabaseConnection,
}

impl PgTodoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn insert_item(&self, task: &str, status: &str) -> TodoResult<Task> {
        let active_model = entity::ActiveModel {
            task: Set(task.to_owned()),
            status: Set(status.to_owned()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;

        tracing::info!(task_id = model.id, "Inserted task");
        Ok(model.into())
    }

    async fn get_all_items(&self) -> TodoResult<Vec<Task>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Task::from).collect())
    }

    async fn update_item_status(&self, id: i32, status: &str) -> TodoResult<()> {
        let result = entity::Entity::update_many()
            .col_expr(entity::Column::Status, Expr::value(status.to_owned()))
            .filter(entity::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(TodoError::NotFound(id));
        }

        tracing::info!(task_id = id, "Updated task status");
        Ok(())
    }

    async fn delete_item(&self, id: i32) -> TodoResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(TodoError::NotFound(id));
        }

        tracing::info!(task_id = id, "Deleted task");
        Ok(())
    }
}

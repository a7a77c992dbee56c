//! Todo Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{TodoError, TodoResult};
use crate::models::{DEFAULT_STATUS, Task, UpdateStatus};
use crate::repository::TodoRepository;

/// Task service enforcing the duplicate-text and non-empty-status rules.
///
/// Depends only on [`TodoRepository`], so any store can back it.
pub struct TodoService<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Add a task with the default status.
    ///
    /// Fails with `Validation` if a task with exactly this text exists. The
    /// check and the insert are separate store calls, so concurrent adds of
    /// the same text can both succeed.
    #[instrument(skip(self))]
    pub async fn add(&self, task: &str) -> TodoResult<Task> {
        let existing = self.repository.get_all_items().await?;

        if existing.iter().any(|item| item.task == task) {
            return Err(TodoError::Validation(format!(
                "task '{}' already exists",
                task
            )));
        }

        self.repository.insert_item(task, DEFAULT_STATUS).await
    }

    /// Tasks whose text contains `query`, ignoring case.
    ///
    /// An empty query matches everything; callers reject it beforehand.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> TodoResult<Vec<Task>> {
        let needle = fold_case(query);

        let matches = self
            .repository
            .get_all_items()
            .await?
            .into_iter()
            .filter(|item| fold_case(&item.task).contains(&needle))
            .collect();

        Ok(matches)
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> TodoResult<Vec<Task>> {
        self.repository.get_all_items().await
    }

    /// Set a task's status. Empty status fails before the store is touched.
    #[instrument(skip(self, input), fields(status = %input.status))]
    pub async fn update_status(&self, id: i32, input: UpdateStatus) -> TodoResult<()> {
        input
            .validate()
            .map_err(|e| TodoError::Validation(e.to_string()))?;

        self.repository.update_item_status(id, &input.status).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> TodoResult<()> {
        self.repository.delete_item(id).await
    }
}

/// Lowercases one char at a time, so a char folds the same wherever it sits
/// in a word. `str::to_lowercase` maps a word-final 'Σ' to 'ς' but a lone
/// one to 'σ', which would hide substring matches.
fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

impl<R: TodoRepository> Clone for TodoService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryTodoRepository, MockTodoRepository};

    fn task(id: i32, text: &str) -> Task {
        Task {
            id,
            task: text.to_string(),
            status: DEFAULT_STATUS.to_string(),
        }
    }

    fn service() -> TodoService<InMemoryTodoRepository> {
        TodoService::new(InMemoryTodoRepository::new())
    }

    #[tokio::test]
    async fn test_add_then_get_all_has_default_status() {
        let service = service();

        service.add("shop").await.unwrap();

        let items = service.get_all().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].task, "shop");
        assert_eq!(items[0].status, "TO_BE_STARTED");
    }

    #[tokio::test]
    async fn test_add_duplicate_fails_and_leaves_store_unchanged() {
        let service = service();
        service.add("shop").await.unwrap();

        let result = service.add("shop").await;

        assert!(matches!(result, Err(TodoError::Validation(_))));
        assert_eq!(service.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_check_is_exact() {
        let service = service();
        service.add("shop").await.unwrap();

        service.add("Shop").await.unwrap();
        service.add("shop ").await.unwrap();

        assert_eq!(service.get_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_duplicate_never_reaches_insert() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo
            .expect_get_all_items()
            .returning(|| Ok(vec![task(1, "shop")]));
        mock_repo.expect_insert_item().times(0);

        let service = TodoService::new(mock_repo);

        assert!(matches!(
            service.add("shop").await,
            Err(TodoError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_add_inserts_with_default_status() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo.expect_get_all_items().returning(|| Ok(vec![]));
        mock_repo
            .expect_insert_item()
            .withf(|task, status| {
                task.to_string() == "shop" && status.to_string() == DEFAULT_STATUS
            })
            .times(1)
            .returning(|text, _| Ok(task(1, text)));

        let service = TodoService::new(mock_repo);

        assert_eq!(service.add("shop").await.unwrap().task, "shop");
    }

    #[tokio::test]
    async fn test_backend_failure_propagates_from_add() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo
            .expect_get_all_items()
            .returning(|| Err(TodoError::Backend("connection refused".into())));
        mock_repo.expect_insert_item().times(0);

        let service = TodoService::new(mock_repo);

        assert!(matches!(
            service.add("shop").await,
            Err(TodoError::Backend(_))
        ));
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let service = service();
        service.add("shop").await.unwrap();
        service.add("Shopping").await.unwrap();
        service.add(" go Shopping").await.unwrap();
        service.add("cook").await.unwrap();

        let found: Vec<String> = service
            .search("sh")
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.task)
            .collect();
        assert_eq!(found, vec!["shop", "Shopping", " go Shopping"]);

        let upper = service.search("SHOP").await.unwrap();
        assert_eq!(upper.len(), 3);

        let go = service.search("go").await.unwrap();
        assert_eq!(go.len(), 1);
        assert_eq!(go[0].task, " go Shopping");
    }

    #[tokio::test]
    async fn test_search_matches_final_sigma() {
        let service = service();
        service.add("ΟΔΟΣ").await.unwrap();

        for query in ["Σ", "σ", "ΟΣ", "δο"] {
            let found = service.search(query).await.unwrap();
            assert_eq!(found.len(), 1, "query {:?}", query);
        }
    }

    #[tokio::test]
    async fn test_search_without_match_is_empty() {
        let service = service();
        service.add("shop").await.unwrap();

        assert!(service.search("xyz").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_status_empty_fails_for_any_id() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo.expect_update_item_status().times(0);
        let service = TodoService::new(mock_repo);

        for id in [1, 999] {
            let result = service.update_status(id, UpdateStatus::new("")).await;
            assert!(matches!(result, Err(TodoError::Validation(_))));
        }
    }

    #[tokio::test]
    async fn test_update_status_keeps_task_text() {
        let service = service();
        let item = service.add("shop").await.unwrap();

        service
            .update_status(item.id, UpdateStatus::new("DONE"))
            .await
            .unwrap();

        let items = service.get_all().await.unwrap();
        assert_eq!(items[0].task, "shop");
        assert_eq!(items[0].status, "DONE");
    }

    #[tokio::test]
    async fn test_update_status_missing_id_is_not_found() {
        let service = service();

        let result = service.update_status(42, UpdateStatus::new("DONE")).await;

        assert!(matches!(result, Err(TodoError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let service = service();
        let keep = service.add("keep").await.unwrap();
        let gone = service.add("gone").await.unwrap();

        service.delete(gone.id).await.unwrap();

        assert_eq!(service.get_all().await.unwrap(), vec![keep]);
    }

    #[tokio::test]
    async fn test_delete_missing_id_leaves_store_unchanged() {
        let service = service();
        service.add("shop").await.unwrap();

        let result = service.delete(42).await;

        assert!(matches!(result, Err(TodoError::NotFound(42))));
        assert_eq!(service.get_all().await.unwrap().len(), 1);
    }
}

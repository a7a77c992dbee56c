use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{delete, get, patch},
};
use axum_helpers::{AppError, IdPath, JsonBody};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{TodoError, TodoResult};
use crate::models::{CreateTask, SearchQuery, Task, UpdateStatus};
use crate::repository::TodoRepository;
use crate::service::TodoService;

const TAG: &str = "todo";

/// OpenAPI documentation for the todo API
#[derive(OpenApi)]
#[openapi(
    paths(list_tasks, create_task, search_tasks, update_status, delete_task),
    components(schemas(Task, CreateTask, UpdateStatus)),
    tags(
        (name = TAG, description = "Task management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the todo router with all HTTP endpoints
pub fn router<R: TodoRepository + 'static>(service: TodoService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/todo", get(list_tasks).post(create_task))
        .route("/search", get(search_tasks))
        .route("/todo/{id}/status", patch(update_status))
        .route("/todo/{id}", delete(delete_task))
        .with_state(shared_service)
}

/// Classification for the create, search and status endpoints: anything
/// other than a missing id is the caller's problem.
fn client_error(err: TodoError) -> AppError {
    match err {
        TodoError::NotFound(id) => AppError::NotFound(format!("Task {} not found", id)),
        TodoError::Validation(msg) | TodoError::Backend(msg) => AppError::BadRequest(msg),
    }
}

/// List all tasks
#[utoipa::path(
    get,
    path = "/todo",
    tag = TAG,
    responses(
        (status = 200, description = "All tasks", body = Vec<Task>),
        (status = 500, description = "Store failure")
    )
)]
async fn list_tasks<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
) -> TodoResult<Json<Vec<Task>>> {
    let items = service.get_all().await?;
    Ok(Json(items))
}

/// Add a task with status `TO_BE_STARTED`
#[utoipa::path(
    post,
    path = "/todo",
    tag = TAG,
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created"),
        (status = 400, description = "Malformed body, duplicate task or store failure")
    )
)]
async fn create_task<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    JsonBody(input): JsonBody<CreateTask>,
) -> Result<StatusCode, AppError> {
    service.add(&input.item).await.map_err(client_error)?;
    Ok(StatusCode::CREATED)
}

/// Case-insensitive substring search over task text
#[utoipa::path(
    get,
    path = "/search",
    tag = TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching tasks", body = Vec<Task>),
        (status = 400, description = "Missing or empty `q`, or store failure")
    )
)]
async fn search_tasks<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<Task>>, AppError> {
    let query = params.q.filter(|q| !q.is_empty()).ok_or_else(|| {
        client_error(TodoError::Validation(
            "query parameter 'q' is required".into(),
        ))
    })?;

    let items = service.search(&query).await.map_err(client_error)?;
    Ok(Json(items))
}

/// Replace a task's status
#[utoipa::path(
    patch,
    path = "/todo/{id}/status",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    request_body = UpdateStatus,
    responses(
        (status = 200, description = "Status updated"),
        (status = 400, description = "Malformed id or body, empty status, or store failure"),
        (status = 404, description = "No task with this id")
    )
)]
async fn update_status<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<UpdateStatus>,
) -> Result<StatusCode, AppError> {
    service.update_status(id, input).await.map_err(client_error)?;
    Ok(StatusCode::OK)
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/todo/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No task with this id"),
        (status = 500, description = "Store failure")
    )
)]
async fn delete_task<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    IdPath(id): IdPath,
) -> TodoResult<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    /// No task with this id
    #[error("task not found: {0}")]
    NotFound(i32),

    /// Caller input broke a rule: duplicate text, empty status, empty query
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The store could not complete the operation
    #[error("Backend error: {0}")]
    Backend(String),
}

pub type TodoResult<T> = Result<T, TodoError>;

impl From<DbErr> for TodoError {
    fn from(err: DbErr) -> Self {
        TodoError::Backend(format!("Database error: {}", err))
    }
}

/// Default classification, used by the list and delete endpoints.
impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(id) => AppError::NotFound(format!("Task {} not found", id)),
            TodoError::Validation(msg) => AppError::BadRequest(msg),
            TodoError::Backend(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_error_kinds_map_to_status() {
        let cases = [
            (TodoError::NotFound(7), StatusCode::NOT_FOUND),
            (
                TodoError::Validation("status is required".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                TodoError::Backend("connection reset".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_db_error_is_backend() {
        let err: TodoError = DbErr::Custom("boom".into()).into();
        assert!(matches!(err, TodoError::Backend(msg) if msg.contains("boom")));
    }
}

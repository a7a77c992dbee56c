use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Status given to every newly added task.
pub const DEFAULT_STATUS: &str = "TO_BE_STARTED";

/// A stored task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Assigned by the store on insert
    pub id: i32,
    /// Description text; unique across all tasks (exact match)
    pub task: String,
    pub status: String,
}

/// Body of `POST /todo`.
///
/// A missing `item` deserializes as the empty string.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateTask {
    #[serde(default)]
    pub item: String,
}

/// Body of `PATCH /todo/{id}/status`.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateStatus {
    #[serde(default)]
    #[validate(length(min = 1, message = "status is required"))]
    pub status: String,
}

impl UpdateStatus {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

/// Query string of `GET /search`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring to look for; required and non-empty
    pub q: Option<String>,
}

//! JSON body extractor that does not insist on a `Content-Type` header.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// Deserializes the raw request body as JSON.
///
/// Unlike `axum::Json`, the content type is not checked and every failure
/// (unreadable body, syntax error, wrong shape) is a 400. Only the first JSON
/// value is decoded; anything after it is ignored.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::JsonBody;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct CreateTask {
///     item: String,
/// }
///
/// async fn create(JsonBody(payload): JsonBody<CreateTask>) -> String {
///     payload.item
/// }
///
/// let app = Router::new().route("/todo", post(create));
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read request body: {}", e)))?;

        match serde_json::Deserializer::from_slice(&bytes)
            .into_iter::<T>()
            .next()
        {
            Some(Ok(value)) => Ok(JsonBody(value)),
            Some(Err(e)) => Err(AppError::BadRequest(format!("Invalid request body: {}", e))),
            None => Err(AppError::BadRequest("Empty request body".to_string())),
        }
    }
}

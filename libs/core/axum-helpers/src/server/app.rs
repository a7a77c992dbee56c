use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use axum::{Router, http::StatusCode};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Wraps the API routes with docs, a 404 fallback and the shared layers.
///
/// This sets up:
/// - Swagger UI at `/swagger-ui`, backed by `/api-docs/openapi.json`
/// - `apis` merged at the root (no `/api` prefix)
/// - Bare 404 for anything unmatched
/// - A per-request deadline of `server_config.request_timeout()` (408 when exceeded)
/// - HTTP tracing spans at INFO
///
/// Health endpoints are not included; merge `health_router()` and the
/// app's own readiness route onto the result.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::create_router;
/// use utoipa::OpenApi;
///
/// #[derive(OpenApi)]
/// #[openapi(paths(/* your paths */))]
/// struct ApiDoc;
///
/// let api_routes = Router::new()
///     .route("/todo", get(list))
///     .with_state(state);
///
/// let router = create_router::<ApiDoc>(api_routes, &ServerConfig::default());
/// ```
pub fn create_router<T>(apis: Router, server_config: &ServerConfig) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(apis)
        .fallback(not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            server_config.request_timeout(),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Serves until a shutdown signal, drains in-flight requests, then runs
/// `cleanup` (closing the store pool etc.) bounded by `shutdown_timeout`.
///
/// # Example
/// ```ignore
/// let cleanup = async move {
///     db.close().await.ok();
/// };
///
/// create_production_app(router, &config, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test"))]
    struct EmptyDoc;

    fn config(timeout_secs: u64) -> ServerConfig {
        ServerConfig {
            request_timeout_secs: timeout_secs,
            ..ServerConfig::default()
        }
    }

    async fn status_for(router: Router, uri: &str) -> StatusCode {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        router.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_unknown_route_is_bare_404() {
        let router = create_router::<EmptyDoc>(Router::new(), &config(30));
        let request = Request::builder().uri("/nope").body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = http_body_util::BodyExt::collect(response.into_body())
            .await
            .unwrap()
            .to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_api_routes_are_merged_at_root() {
        let apis = Router::new().route("/ping", get(|| async { "pong" }));
        let router = create_router::<EmptyDoc>(apis, &config(30));

        assert_eq!(status_for(router, "/ping").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let router = create_router::<EmptyDoc>(Router::new(), &config(30));

        assert_eq!(
            status_for(router, "/api-docs/openapi.json").await,
            StatusCode::OK
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_request_hits_deadline() {
        let apis = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                "late"
            }),
        );
        let router = create_router::<EmptyDoc>(apis, &config(1));

        assert_eq!(
            status_for(router, "/slow").await,
            StatusCode::REQUEST_TIMEOUT
        );
    }
}

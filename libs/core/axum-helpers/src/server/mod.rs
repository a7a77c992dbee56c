//! Server infrastructure module.
//!
//! - Router assembly with OpenAPI docs, tracing and a request deadline
//! - Liveness and readiness helpers
//! - Graceful shutdown with post-drain cleanup
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let config = ServerConfig::default();
//! let app = create_router::<ApiDoc>(api_routes, &config).merge(health_router(app_info!()));
//! create_production_app(app, &config, Duration::from_secs(30), async { db.close().await.ok(); }).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::shutdown_signal;

//! Custom extractors for Axum handlers.
//!
//! Both reject with [`crate::AppError::BadRequest`], so a malformed id or body
//! always yields a bare 400.

pub mod id_path;
pub mod json_body;

pub use id_path::IdPath;
pub use json_body::JsonBody;

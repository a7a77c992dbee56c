//! Shared test utilities for the todo workspace
//!
//! - `TestDatabase`: PostgreSQL container with migrations applied (feature: "postgres")
//! - `TestDataBuilder`: deterministic task texts keyed by test name
//! - `assertions`: small assertion helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let text = builder.task("groceries");
//! }
//! ```
//!
//! Container-backed tests need a Docker daemon; mark them `#[ignore]` and run
//! them with `cargo test -- --ignored`.

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Builder for test data with deterministic randomization
///
/// Texts derived from different test names do not collide, so tests sharing
/// one database never trip the duplicate-task rule by accident.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_add_task");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Task text unique to this builder's seed.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.task("shop"), "test-7-shop");
    /// ```
    pub fn task(&self, suffix: &str) -> String {
        format!("test-{}-{}", self.seed, suffix)
    }

    /// An id no store will have handed out.
    pub fn missing_id(&self) -> i32 {
        i32::MAX - (self.seed % 1024) as i32
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that `haystack` has exactly one entry matching `pred`.
    pub fn assert_single<T, F>(haystack: &[T], pred: F, context: &str)
    where
        F: Fn(&T) -> bool,
    {
        let count = haystack.iter().filter(|item| pred(item)).count();
        assert_eq!(count, 1, "{}: expected exactly one match, got {}", context, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.task("shop"), builder2.task("shop"));
        assert_eq!(builder1.missing_id(), builder2.missing_id());
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.task("shop"), builder2.task("shop"));
    }

    #[test]
    fn test_missing_id_is_positive() {
        let builder = TestDataBuilder::from_test_name("ids");
        assert!(builder.missing_id() > 0);
    }

    #[test]
    fn test_assert_single() {
        assertions::assert_single(&[1, 2, 3], |n| *n == 2, "numbers");
    }
}

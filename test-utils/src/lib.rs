//! HoYo Code Sender Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the code
//! sender. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of five components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert entity rows with sensible defaults
//! - **fixture** / **serenity**: In-memory entity models and Serenity objects (no database)
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::RedemptionCode;
//!
//! #[tokio::test]
//! async fn test_code_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(RedemptionCode)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod serenity;

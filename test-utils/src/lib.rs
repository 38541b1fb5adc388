//! Drone Scheduler Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the drone
//! scheduler backend. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and factories for seeding drones, missions and schedules.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Helpers inserting entities with sensible defaults
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Drone;
//!
//! #[tokio::test]
//! async fn test_drone_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Drone)
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

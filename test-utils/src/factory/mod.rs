//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible
//! defaults, reducing boilerplate in tests. Factory-created rows receive ids from a
//! process-wide counter rather than from the application's id allocator, so they
//! can seed a table before the code under test allocates.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let drone = factory::create_drone(&db).await?;
//!     let mission = factory::create_mission(&db).await?;
//!
//!     // Create a schedule along with the drone and mission it references
//!     let (drone, mission, schedule) =
//!         factory::helpers::create_schedule_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let drone = factory::drone::DroneFactory::new(&db)
//!     .name("Scout")
//!     .status("charging")
//!     .possible_missions_ids(vec![3, 1, 3])
//!     .build()
//!     .await?;
//! ```

pub mod drone;
pub mod helpers;
pub mod mission;
pub mod schedule;

pub use drone::{create_drone, create_drone_with_status};
pub use mission::create_mission;
pub use schedule::{create_schedule, create_schedule_between};

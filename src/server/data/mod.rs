//! Database repository layer for drones, missions and schedules.
//!
//! This module contains repository structs that handle database operations for each
//! collection. Repositories use SeaORM entity models internally and return parameter
//! models to maintain separation between the data layer and business logic layer.
//! Creates go through the [`IdAllocator`](crate::server::allocator::IdAllocator), which
//! picks the record id and retries on id collisions.

pub mod drone;
pub mod mission;
pub mod schedule;

#[cfg(test)]
mod test;

//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! drones, missions and schedules plus the parameters of the operations on them. Domain
//! models are converted from entity models at the repository boundary and transformed
//! to DTOs at the controller boundary.

pub mod drone;
pub mod mission;
pub mod schedule;

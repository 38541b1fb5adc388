//! HTTP request handlers.
//!
//! Each handler extracts its inputs, converts DTOs into server params, calls the
//! matching service and converts the result back into a DTO. Missing records are
//! turned into `AppError::NotFound` here.

pub mod drone;
pub mod extract;
pub mod health;
pub mod mission;
pub mod schedule;

//! SeaORM entity models for the drone scheduler tables.

pub mod prelude;

pub mod drone;
pub mod mission;
pub mod schedule;

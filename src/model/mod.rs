//! Transfer objects exchanged with HTTP clients.

pub mod api;
pub mod drone;
pub mod mission;
pub mod schedule;

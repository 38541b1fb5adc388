//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They apply the rules
//! that are not plain storage concerns:
//!
//! - **Not-found handling**: an empty status filter is reported as missing rather
//!   than as an empty list
//! - **Validation**: schedule creation checks its drone and mission references and
//!   its time window
//! - **Allocation**: create operations hand the shared `IdAllocator` to the
//!   repository

pub mod drone;
pub mod mission;
pub mod schedule;

#[cfg(test)]
mod test;

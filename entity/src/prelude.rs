pub use super::drone::Entity as Drone;
pub use super::mission::Entity as Mission;
pub use super::schedule::Entity as Schedule;

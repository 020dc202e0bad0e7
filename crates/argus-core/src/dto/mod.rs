//! Data Transfer Objects (DTOs) for the Argus wire format.
//!
//! These types define the JSON contract with explicit serialization
//! control. They decouple the persisted entities in [`crate::domain`] from
//! their external representation.

mod dashboard;
mod example;

pub use dashboard::DashboardDto;
pub use example::Exemplifiable;

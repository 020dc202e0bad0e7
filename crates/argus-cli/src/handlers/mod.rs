//! Command handlers.
//!
//! Handlers are thin: they resolve CLI input, call the port or the core
//! types, and write pretty-printed JSON to the given output.

pub mod example;
pub mod user;

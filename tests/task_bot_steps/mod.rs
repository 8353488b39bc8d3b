//! Step definitions for task bot BDD scenarios.

pub mod given;
pub mod when;
pub mod world;

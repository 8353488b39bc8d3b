//! Shared task tracking.
//!
//! Tasks are created by chat users, claimed and released by whoever works on
//! them, and resolved by their current assignee. The module follows
//! hexagonal architecture:
//!
//! - Domain types and lifecycle guards in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;

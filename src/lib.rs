//! Liftoff library exports
//!
//! Fetches past SpaceX launches from the public GraphQL API once per session
//! and keeps a mission-name-filtered view of them in lockstep with a search
//! term. The binary in `main.rs` is a thin terminal consumer of this core.

pub mod core;
pub mod graphql;
pub mod render;

#[cfg(test)]
pub mod test_support;

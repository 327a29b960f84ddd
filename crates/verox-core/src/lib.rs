//! Domain layer for the VeroX franchise advisor.
//!
//! Everything here is synchronous and deterministic apart from id and
//! timestamp generation. Scheduling of the simulated reply delay lives in
//! `verox-application`.

pub mod advisor;
pub mod catalog;
pub mod config;
pub mod error;
pub mod inbox;
pub mod pipeline;
pub mod session;
pub mod view;

// Re-export common error type
pub use error::VeroxError;

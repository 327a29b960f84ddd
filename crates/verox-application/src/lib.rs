//! Application layer for VeroX.
//!
//! This crate runs the chat use case on the tokio runtime: it owns the
//! conversation store, schedules the simulated advisor reply and publishes
//! [`ChatEvent`]s for render layers.

pub mod chat_service;
pub mod event;

pub use chat_service::ChatService;
pub use event::ChatEvent;

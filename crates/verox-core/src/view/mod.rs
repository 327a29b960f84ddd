//! View routing.
//!
//! Tracks which screen is shown and which franchise, if any, is open in the
//! detail overlay. Every transition is total.

mod router;

pub use router::{View, ViewAction, ViewRouter};

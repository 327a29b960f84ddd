//! The simulated advisor.
//!
//! There is no model behind the assistant: an ordered keyword matcher picks
//! an [`Intent`], the engine filters the catalog for it, and a fixed reply
//! string is chosen per intent.

mod intent;
mod recommend;
mod reply;

pub use intent::{Intent, classify};
pub use recommend::{BUDGET_CEILING, GENERAL_LIMIT, recommend};
pub use reply::{AdvisorReply, advise};

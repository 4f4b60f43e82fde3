//! Idlebot shared contract.
//!
//! The narrow request/response boundary between the bot core and the
//! (external) webhook layer. The web layer parses the platform payload
//! into an [`InboundEvent`], and renders the returned [`Reply`] into the
//! platform-specific envelope. Nothing platform-shaped lives on this
//! side of the boundary.

mod events;
mod responses;

pub use events::InboundEvent;
pub use responses::{QuickReply, Reply};

//! The conversational agent and its run/detour cycle.

#[allow(clippy::module_inception)]
pub mod agent;

pub use agent::{Agent, ToolFallback};

//! Convenience re-exports for common use.

pub use crate::agent::{Agent, ToolFallback};
pub use crate::config::DetourConfig;
pub use crate::error::{DetourError, Result};
pub use crate::protocol::ToolInvocation;
pub use crate::provider::{ChatCompletionsProvider, CompletionRequest, Provider};
pub use crate::tools::{FunctionTool, Tool, ToolArguments};
pub use crate::types::{Message, Role, Transcript};

//! Tool trait and closure-based tool wrapper.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;

use super::arguments::ToolArguments;
use crate::error::DetourError;

/// Description used when a tool is registered without one.
pub const DEFAULT_DESCRIPTION: &str = "No description provided.";

/// Core tool trait — implement to create custom tools.
///
/// Names must be unique within an agent; dispatch is by exact string match
/// against the name the model writes after the `TOOL:` marker. Tools are
/// registered at agent construction time and cannot be added or removed
/// afterwards.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (what the model writes after `TOOL:`).
    fn name(&self) -> &str;

    /// Human-readable description, injected into the tool catalogue.
    fn description(&self) -> &str;

    /// Invoke the tool with parsed arguments.
    async fn invoke(&self, args: &ToolArguments) -> Result<serde_json::Value, DetourError>;
}

/// Type alias for the tool handler function.
type ToolHandler =
    dyn Fn(ToolArguments) -> BoxFuture<'static, Result<serde_json::Value, DetourError>>
        + Send
        + Sync;

/// Closure-based tool for quick registration of plain async functions.
pub struct FunctionTool {
    name: String,
    description: String,
    handler: Arc<ToolHandler>,
}

impl FunctionTool {
    /// Create a tool from a closure. An empty description is replaced with
    /// [`DEFAULT_DESCRIPTION`].
    pub fn new<F, Fut>(name: impl Into<String>, description: impl Into<String>, handler: F) -> Self
    where
        F: Fn(ToolArguments) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<serde_json::Value, DetourError>> + Send + 'static,
    {
        let description = description.into();
        Self {
            name: name.into(),
            description: if description.is_empty() {
                DEFAULT_DESCRIPTION.to_string()
            } else {
                description
            },
            handler: Arc::new(move |args| Box::pin(handler(args))),
        }
    }
}

#[async_trait]
impl Tool for FunctionTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn invoke(&self, args: &ToolArguments) -> Result<serde_json::Value, DetourError> {
        (self.handler)(args.clone()).await
    }
}

impl std::fmt::Debug for FunctionTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

//! Core Agent struct driving the single-turn-with-optional-detour cycle.

use tracing::{debug, warn};

use crate::config::DEFAULT_MAX_OUTPUT_TOKENS;
use crate::error::DetourError;
use crate::protocol::{self, ToolInvocation};
use crate::provider::{CompletionRequest, Provider};
use crate::tools::{Tool, ToolArguments};
use crate::types::{Message, Transcript};

/// How detour failures (unknown tool, tool error, failed second call)
/// surface to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolFallback {
    /// Swallow the failure and return the first-round assistant text, with
    /// no indication a detour was attempted.
    #[default]
    Lenient,
    /// Surface the failure as an error from [`Agent::try_run`].
    Strict,
}

/// A conversational agent that maintains its own transcript and can
/// delegate to tools mid-turn.
///
/// Not internally synchronized: overlapping `run` calls on a shared
/// instance would interleave transcript writes. Use one agent per
/// concurrent conversation.
pub struct Agent {
    provider: Box<dyn Provider>,
    system_prompt: Option<String>,
    tools: Vec<Box<dyn Tool>>,
    transcript: Transcript,
    max_output_tokens: u32,
    fallback: ToolFallback,
}

impl Agent {
    /// Create a new agent backed by the given provider.
    pub fn new(provider: Box<dyn Provider>) -> Self {
        Self {
            provider,
            system_prompt: None,
            tools: Vec::new(),
            transcript: Transcript::new(),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            fallback: ToolFallback::default(),
        }
    }

    /// Set the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Register a tool. Names must be unique; the catalogue lists tools in
    /// registration order and dispatch takes the first name match.
    pub fn with_tool(mut self, tool: Box<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    /// Set the per-call output token budget.
    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = max;
        self
    }

    /// Set the detour failure policy.
    pub fn with_fallback(mut self, fallback: ToolFallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Run one conversational turn. Never fails: provider and detour errors
    /// are folded into the returned string as `Error: <description>`.
    pub async fn run(&mut self, query: impl Into<String>) -> String {
        match self.try_run(query).await {
            Ok(text) => text,
            Err(e) => format!("Error: {e}"),
        }
    }

    /// Run one conversational turn, surfacing errors to the caller.
    ///
    /// Provider failure on the first call always errors. Detour failures
    /// error only under [`ToolFallback::Strict`]; otherwise the first-round
    /// text is returned unchanged.
    pub async fn try_run(&mut self, query: impl Into<String>) -> Result<String, DetourError> {
        let query = query.into();
        let system = self.effective_system_prompt();

        let mut outbound = self.transcript.messages().to_vec();
        outbound.push(Message::user(query.clone()));

        let request = CompletionRequest {
            system: system.clone(),
            messages: outbound.clone(),
            max_output_tokens: self.max_output_tokens,
        };

        debug!(provider = self.provider.name(), "first-round completion");
        let first = self.provider.complete(&request).await?;

        // The transcript records the first-round pair exactly once per run,
        // whether or not a detour happens below. Detour-internal messages
        // are never recorded.
        self.transcript.push_user(query);
        self.transcript.push_assistant(first.clone());

        let invocation = if self.tools.is_empty() {
            None
        } else {
            protocol::parse_invocation(&first)
        };

        let Some(invocation) = invocation else {
            return Ok(first);
        };

        match self.detour(system, outbound, &first, invocation).await {
            Ok(text) => Ok(text),
            Err(e) => match self.fallback {
                ToolFallback::Lenient => {
                    warn!(error = %e, "tool detour failed, returning first-round text");
                    Ok(first)
                }
                ToolFallback::Strict => Err(e),
            },
        }
    }

    /// Execute the requested tool and ask the provider for a final answer
    /// given its result.
    async fn detour(
        &self,
        system: Option<String>,
        outbound: Vec<Message>,
        first: &str,
        invocation: ToolInvocation,
    ) -> Result<String, DetourError> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.name() == invocation.name)
            .ok_or_else(|| DetourError::ToolNotFound(invocation.name.clone()))?;

        let args = ToolArguments::new(invocation.arguments);
        let result =
            tool.invoke(&args)
                .await
                .map_err(|e| DetourError::ToolExecution {
                    tool_name: invocation.name.clone(),
                    message: e.to_string(),
                })?;

        let mut messages = outbound;
        messages.push(Message::assistant(first));
        messages.push(Message::user(format!(
            "{}{}",
            protocol::TOOL_RESULT_PREFIX,
            protocol::stringify_result(&result)
        )));

        debug!(tool = %invocation.name, "second-round completion");
        self.provider
            .complete(&CompletionRequest {
                system,
                messages,
                max_output_tokens: self.max_output_tokens,
            })
            .await
    }

    /// Effective system prompt: the configured prompt plus the tool
    /// catalogue block, which is omitted entirely when no tools are
    /// registered.
    fn effective_system_prompt(&self) -> Option<String> {
        let catalogue =
            protocol::render_catalogue(self.tools.iter().map(|t| (t.name(), t.description())));
        match (&self.system_prompt, catalogue) {
            (Some(prompt), Some(block)) => Some(format!("{prompt}\n\n{block}")),
            (Some(prompt), None) => Some(prompt.clone()),
            (None, Some(block)) => Some(block),
            (None, None) => None,
        }
    }

    /// Clear the transcript. Tools and system prompt persist. Idempotent.
    pub fn reset(&mut self) {
        self.transcript.clear();
    }

    /// Read-only view of the conversation so far.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}

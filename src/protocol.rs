//! Pure functions for the textual tool-invocation protocol.
//!
//! The model signals a tool call by embedding two literal markers in its
//! reply: `TOOL:` followed by the tool name, then `ARGS:` followed by a JSON
//! object of arguments. Detection and decoding live here as pure functions;
//! the agent decides what to do with the result.

/// Literal marker introducing the tool name.
pub const TOOL_MARKER: &str = "TOOL:";

/// Literal marker introducing the argument blob.
pub const ARGS_MARKER: &str = "ARGS:";

/// Prefix of the synthetic user message carrying a tool result back to the
/// model on the second round.
pub const TOOL_RESULT_PREFIX: &str = "Tool result: ";

/// A decoded tool invocation request.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInvocation {
    pub name: String,
    pub arguments: serde_json::Value,
}

/// Render the tool catalogue block appended to the system prompt.
///
/// Returns `None` when no tools are registered; the block is omitted from
/// the prompt entirely in that case. Tools are listed in registration order,
/// one `- <name>: <description>` line each, followed by the fixed invocation
/// instruction.
pub fn render_catalogue<'a>(
    tools: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Option<String> {
    let mut lines = String::new();
    for (name, description) in tools {
        lines.push_str(&format!("- {name}: {description}\n"));
    }
    if lines.is_empty() {
        return None;
    }
    Some(format!(
        "You have access to the following tools:\n{lines}\nTo use a tool, respond with \
         {TOOL_MARKER}<tool name> {ARGS_MARKER}<JSON object of arguments>."
    ))
}

/// Detect a tool invocation in assistant text.
///
/// Both markers must be present, `TOOL:` before `ARGS:`; otherwise the text
/// is treated as a plain reply and `None` is returned. A reply containing
/// `TOOL:` but no `ARGS:` is malformed and deliberately does not trigger a
/// detour.
pub fn parse_invocation(text: &str) -> Option<ToolInvocation> {
    let after_tool = text.split_once(TOOL_MARKER)?.1;
    let (name, blob) = after_tool.split_once(ARGS_MARKER)?;
    Some(ToolInvocation {
        name: name.trim().to_string(),
        arguments: parse_arguments(blob.trim()),
    })
}

/// Parse an argument blob as a JSON object.
///
/// Anything that does not parse as a JSON object (including an empty blob)
/// is downgraded to a single synthetic `{"input": <raw blob>}` argument
/// rather than rejected.
pub fn parse_arguments(blob: &str) -> serde_json::Value {
    match serde_json::from_str::<serde_json::Value>(blob) {
        Ok(value @ serde_json::Value::Object(_)) => value,
        _ => serde_json::json!({ "input": blob }),
    }
}

/// Flatten a tool result into the text fed back to the model.
///
/// String results are passed through verbatim; everything else is compact
/// JSON.
pub fn stringify_result(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

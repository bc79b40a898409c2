//! Conversation history owned by one agent.

use super::message::Message;

/// The ordered user/assistant history of a single conversation.
///
/// Grows monotonically across agent runs until explicitly cleared. The
/// owning agent appends exactly one user/assistant pair per run; tool
/// detour exchanges are never recorded here.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user message.
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(Message::user(text));
    }

    /// Append an assistant message.
    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(Message::assistant(text));
    }

    /// All messages, in order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Clear the history.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn push_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push_user("hi");
        transcript.push_assistant("hello");
        transcript.push_user("again");

        let roles: Vec<Role> = transcript.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User]);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut transcript = Transcript::new();
        transcript.push_user("hi");
        transcript.clear();
        transcript.clear();
        assert!(transcript.is_empty());
    }
}

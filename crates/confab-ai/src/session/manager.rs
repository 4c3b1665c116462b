//! Session struct and history management.

use crate::{Message, Role};

/// Default model, matching the wrapped Together deployment.
pub const DEFAULT_MODEL: &str = "meta-llama/Llama-3.3-70B-Instruct-Turbo";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// A conversation session: an append-only message history plus the
/// parameters sent with every completion call.
///
/// History is insertion-ordered and never reordered, deduplicated, or
/// trimmed. Every session owns its own history; nothing is shared
/// between instances.
pub struct Session {
    /// Conversation message history, oldest first.
    pub(super) messages: Vec<Message>,
    /// Remote model identifier.
    pub(super) model: String,
    /// Sampling temperature, constant unless explicitly rebuilt.
    pub(super) temperature: f64,
}

impl Session {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Seed the history with a system message.
    pub fn with_system_message(mut self, content: impl Into<String>) -> Self {
        self.push_system(content);
        self
    }

    /// Append one message. Content is stored verbatim — empty strings
    /// included — and no normalization is applied.
    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(Message::new(role, content));
    }

    pub fn push_system(&mut self, content: impl Into<String>) {
        self.push(Role::System, content);
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(Role::User, content);
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(Role::Assistant, content);
    }

    /// The full conversation history, in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Number of messages in history.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Clear conversation history.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod history_tests {
    use super::*;

    #[test]
    fn push_preserves_order_roles_and_content() {
        let mut session = Session::new();
        session.push_system("be concise");
        session.push_user("  hi  ");
        session.push_assistant("");
        session.push_user("again");

        let msgs = session.messages();
        assert_eq!(msgs.len(), 4);
        assert_eq!(msgs[0], Message::new(Role::System, "be concise"));
        // No trimming, no normalization, empty content allowed.
        assert_eq!(msgs[1], Message::new(Role::User, "  hi  "));
        assert_eq!(msgs[2], Message::new(Role::Assistant, ""));
        assert_eq!(msgs[3], Message::new(Role::User, "again"));
    }

    #[test]
    fn duplicate_messages_are_kept() {
        let mut session = Session::new();
        session.push_user("same");
        session.push_user("same");
        assert_eq!(session.message_count(), 2);
    }

    #[test]
    fn sessions_do_not_share_history() {
        let mut a = Session::new();
        a.push_user("only in a");
        let b = Session::new();
        assert_eq!(b.message_count(), 0);
    }

    #[test]
    fn system_seed_is_first_message() {
        let session = Session::new()
            .with_model("test-model")
            .with_temperature(0.2)
            .with_system_message("be concise");
        assert_eq!(session.model(), "test-model");
        assert_eq!(session.temperature(), 0.2);
        assert_eq!(
            session.messages(),
            &[Message::new(Role::System, "be concise")]
        );
    }

    #[test]
    fn clear_empties_history() {
        let mut session = Session::new().with_system_message("sys");
        session.push_user("hi");
        session.clear();
        assert_eq!(session.message_count(), 0);
    }
}

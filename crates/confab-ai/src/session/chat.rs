//! Async generate method for Session.

use tracing::debug;

use crate::{ChatError, CompletionProvider};

use super::manager::Session;

impl Session {
    /// Send the current history to the provider and append the reply.
    ///
    /// The extracted reply is always appended as an assistant message,
    /// whichever extraction tier produced it — an unparseable response
    /// degrades to stringified or empty content rather than an error.
    /// Provider failures propagate unchanged and leave the history as it
    /// was at call time (no rollback of the triggering user message).
    ///
    /// With `print_live`, a non-empty reply is printed to stdout before
    /// this returns.
    pub async fn generate(
        &mut self,
        provider: &dyn CompletionProvider,
        print_live: bool,
    ) -> Result<String, ChatError> {
        debug!(
            model = %self.model,
            history_len = self.messages.len(),
            "requesting completion"
        );

        let response = provider
            .complete(&self.model, self.temperature, &self.messages)
            .await?;
        let reply = response.reply_text();

        if print_live && !reply.is_empty() {
            println!("{reply}");
        }

        self.push_assistant(reply.clone());
        Ok(reply)
    }
}

#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::BackendBox;
use crate::domain::models::ChatRequest;
use crate::domain::models::ChatResponse;
use crate::domain::models::Event;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

pub const CONNECTION_ERROR_TEXT: &str =
    "Couldn't reach the chat API. Check that the backend server is running.";

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /clear (/c) - Clears all messages from the chat.
- /quit /exit (/q) - Exit cocochat.
- /help (/h) - Provides this help menu.

HOTKEYS:
- Enter or CTRL+S - Send your message
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U or Page Up - Page up
- CTRL+D or Page Down - Page down
- CTRL+C - Exit cocochat.
        "#;

    return text.trim().to_string();
}

/// Turns the outcome of a chat request into the message shown to the user.
/// Every failure collapses into the same connection error.
pub fn reply_message(res: Result<ChatResponse>) -> Message {
    match res {
        Ok(response) => {
            tracing::debug!(
                intent = ?response.intent,
                entities = ?response.entities,
                has_reply = response.reply.is_some(),
                "chat response"
            );

            return Message::new(
                Author::Bot,
                &response.reply_text(&Config::get(ConfigKey::Placeholder)),
            );
        }
        Err(err) => {
            tracing::error!(error = ?err, "chat request failed");

            return Message::new_with_type(Author::Bot, MessageType::Error, CONNECTION_ERROR_TEXT);
        }
    }
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        backend: BackendBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        while let Some(action) = rx.recv().await {
            match action {
                Action::ChatRequest(text) => {
                    let res = backend.send(ChatRequest::new(&text)).await;
                    tx.send(Event::ChatReply(reply_message(res)))?;
                }
            }
        }

        return Ok(());
    }
}

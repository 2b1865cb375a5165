#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use ratatui::prelude::Rect;

use super::actions::help_text;
use super::BubbleList;
use super::Scroll;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::BackendBox;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::SlashCommand;
use crate::domain::models::TextArea;

/// What the UI should do after the user submitted the input area.
#[derive(Debug, PartialEq, Eq)]
pub enum Submission {
    /// Nothing to send, the input is left untouched.
    Empty,
    /// Handled locally by a slash command.
    Local,
    Quit,
    Send(String),
}

impl Submission {
    pub fn into_action(self) -> Option<Action> {
        if let Submission::Send(text) = self {
            return Some(Action::ChatRequest(text));
        }

        return None;
    }
}

pub struct AppState {
    pub bubble_list: BubbleList,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub messages: Vec<Message>,
    pub scroll: Scroll,
    pub waiting_for_backend: bool,
}

impl AppState {
    pub async fn new(backend: &BackendBox) -> AppState {
        let mut app_state = AppState {
            bubble_list: BubbleList::default(),
            last_known_height: 0,
            last_known_width: 0,
            messages: vec![],
            scroll: Scroll::default(),
            waiting_for_backend: false,
        };

        app_state.messages.push(Message::new(
            Author::Bot,
            &Config::get(ConfigKey::Greeting),
        ));

        if let Err(err) = backend.health_check().await {
            let chat_url = Config::get(ConfigKey::ChatURL);
            app_state.messages.push(Message::new_with_type(
                Author::App,
                MessageType::Error,
                &format!("Hey, it looks like the chat API at {chat_url} isn't running, I can't connect to it. You should double check that before we start talking.\n\nError: {err}"),
            ));
        }

        return app_state;
    }

    /// Validates the input area contents and renders it as a user message.
    /// Only plain text is returned for sending, slash commands are handled
    /// here.
    pub fn submit(&mut self, input: &str) -> Submission {
        let text = input.trim();
        if text.is_empty() {
            return Submission::Empty;
        }

        if let Some(command) = SlashCommand::parse(text) {
            if command.is_quit() {
                return Submission::Quit;
            }

            if command.is_clear() {
                self.messages.clear();
                self.sync_dependants();
                self.scroll.last();
                return Submission::Local;
            }

            if command.is_help() {
                self.add_message(Message::new(Author::User, text));
                self.add_message(Message::new(Author::App, &help_text()));
                return Submission::Local;
            }
        }

        self.add_message(Message::new(Author::User, text));
        self.waiting_for_backend = true;

        return Submission::Send(text.to_string());
    }

    /// Submits the input area. Anything but empty input resets it, empty
    /// input stays where the user left it.
    pub fn submit_textarea(&mut self, textarea: &mut tui_textarea::TextArea) -> Submission {
        let submission = self.submit(&textarea.lines().join("\n"));
        if submission != Submission::Empty {
            *textarea = TextArea::default();
        }

        return submission;
    }

    pub fn handle_reply(&mut self, message: Message) {
        self.waiting_for_backend = false;
        self.add_message(message);
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
        self.sync_dependants();
        self.scroll.last();
    }

    fn sync_dependants(&mut self) {
        self.bubble_list
            .set_messages(&self.messages, self.last_known_width.into());

        self.scroll
            .set_state(self.bubble_list.len() as u16, self.last_known_height);

        if self.waiting_for_backend {
            self.scroll.last();
        }
    }
}

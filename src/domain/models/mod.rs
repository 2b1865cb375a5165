mod action;
mod author;
mod backend;
mod chat;
mod event;
mod loading;
mod message;
mod slash_commands;
mod textarea;

pub use action::*;
pub use author::*;
pub use backend::*;
pub use chat::*;
pub use event::*;
pub use loading::*;
pub use message::*;
pub use slash_commands::*;
pub use textarea::*;

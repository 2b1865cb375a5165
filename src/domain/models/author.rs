use std::fmt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
    /// Local notices that never came from the chat API.
    App,
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Author::User => return write!(f, "{}", Config::get(ConfigKey::Username)),
            Author::Bot => return write!(f, "{}", Config::get(ConfigKey::BotName)),
            Author::App => return write!(f, "cocochat"),
        }
    }
}

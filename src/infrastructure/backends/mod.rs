pub mod chat_api;

use crate::domain::models::BackendBox;

pub struct BackendManager {}

impl BackendManager {
    /// Backend for the chat API currently configured.
    pub fn get() -> BackendBox {
        return Box::<chat_api::ChatApi>::default();
    }
}

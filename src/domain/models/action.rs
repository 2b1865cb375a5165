pub enum Action {
    /// Trimmed, non-empty text to send to the chat API.
    ChatRequest(String),
}

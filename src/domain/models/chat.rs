#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Deserializer;
use serde_derive::Serialize;
use serde_json::Value;

/// Body POSTed to the chat API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: &str) -> ChatRequest {
        return ChatRequest {
            message: message.to_string(),
        };
    }
}

/// Body returned by the chat API. Only `reply` is displayed, the other fields
/// are what the CocoBot backend reports about how it classified the message.
///
/// Any JSON document decodes. Fields of an unexpected type, or a body that
/// isn't an object, are read as missing so the placeholder is shown instead of
/// failing the request.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatResponse {
    pub reply: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<Value>,
}

impl ChatResponse {
    pub fn from_value(value: Value) -> ChatResponse {
        let mut fields = match value {
            Value::Object(fields) => fields,
            _ => return ChatResponse::default(),
        };

        let reply = match fields.remove("reply") {
            Some(Value::String(reply)) => Some(reply),
            _ => None,
        };
        let intent = match fields.remove("intent") {
            Some(Value::String(intent)) => Some(intent),
            _ => None,
        };
        let entities = match fields.remove("entities") {
            Some(Value::Array(entities)) => entities,
            _ => vec![],
        };

        return ChatResponse {
            reply,
            intent,
            entities,
        };
    }

    pub fn reply_text(&self, placeholder: &str) -> String {
        return match &self.reply {
            Some(reply) if !reply.is_empty() => reply.to_string(),
            _ => placeholder.to_string(),
        };
    }
}

impl<'de> Deserialize<'de> for ChatResponse {
    fn deserialize<D>(deserializer: D) -> Result<ChatResponse, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        return Ok(ChatResponse::from_value(value));
    }
}

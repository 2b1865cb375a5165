#[cfg(test)]
#[path = "chat_api_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ChatBackend;
use crate::domain::models::ChatRequest;
use crate::domain::models::ChatResponse;

/// Chat API answering `POST {"message": ...}` with `{"reply": ...}`.
pub struct ChatApi {
    url: String,
    timeout: String,
}

impl Default for ChatApi {
    fn default() -> ChatApi {
        return ChatApi::new(
            &Config::get(ConfigKey::ChatURL),
            &Config::get(ConfigKey::HealthCheckTimeout),
        );
    }
}

impl ChatApi {
    pub fn new(url: &str, timeout: &str) -> ChatApi {
        return ChatApi {
            url: url.to_string(),
            timeout: timeout.to_string(),
        };
    }

    fn root_url(&self) -> Result<reqwest::Url> {
        let url = reqwest::Url::parse(&self.url)?.join("/")?;
        return Ok(url);
    }
}

#[async_trait]
impl ChatBackend for ChatApi {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        if self.url.is_empty() {
            bail!("Chat API URL is not defined");
        }

        let res = reqwest::Client::new()
            .get(self.root_url()?)
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await;

        let status = match res {
            Ok(res) => res.status().as_u16(),
            Err(err) => {
                tracing::error!(error = ?err, "Chat API is not reachable");
                bail!("Chat API is not reachable");
            }
        };
        if status >= 400 {
            tracing::error!(status = status, "Chat API health check failed");
            bail!("Chat API health check failed");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn send(&self, request: ChatRequest) -> Result<ChatResponse> {
        let res = reqwest::Client::new()
            .post(&self.url)
            .json(&request)
            .send()
            .await?;

        // The body is decoded whatever the status, a JSON error body simply
        // has no reply.
        if !res.status().is_success() {
            tracing::warn!(
                status = res.status().as_u16(),
                "Chat API answered with a non-success status"
            );
        }

        let response = res.json::<ChatResponse>().await?;
        return Ok(response);
    }
}

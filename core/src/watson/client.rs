//! HTTP client for the Watson Assistant v2 API

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::time::Duration;

use crate::config::WatsonConfig;

use super::{ConversationProvider, ProviderError};

const API_VERSION: &str = "2021-06-14";

// IBM IAM convention: basic auth with this username, API key as password
const BASIC_AUTH_USERNAME: &str = "apikey";

/// Watson Assistant v2 client
#[derive(Clone)]
pub struct WatsonAssistant {
    http_client: Client,
    service_url: String,
    assistant_id: String,
    api_key: String,
}

impl WatsonAssistant {
    pub fn new(config: &WatsonConfig) -> Self {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(20))
            .timeout(Duration::from_secs(60));

        if config.accept_invalid_certs {
            tracing::warn!("TLS certificate verification toward Watson is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http_client = builder.build().expect("Failed to create HTTP client");

        Self {
            http_client,
            service_url: config.service_url.trim_end_matches('/').to_string(),
            assistant_id: config.assistant_id.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn sessions_url(&self) -> String {
        format!(
            "{}/v2/assistants/{}/sessions?version={}",
            self.service_url, self.assistant_id, API_VERSION
        )
    }

    fn message_url(&self, session_id: &str) -> String {
        format!(
            "{}/v2/assistants/{}/sessions/{}/message?version={}",
            self.service_url, self.assistant_id, session_id, API_VERSION
        )
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ProviderError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ConversationProvider for WatsonAssistant {
    async fn create_session(&self) -> Result<String, ProviderError> {
        let response = self
            .http_client
            .post(self.sessions_url())
            .basic_auth(BASIC_AUTH_USERNAME, Some(&self.api_key))
            .send()
            .await?;

        let session: SessionResponse = Self::decode(response).await?;
        Ok(session.session_id)
    }

    async fn send_message(
        &self,
        session_id: &str,
        text: &str,
    ) -> Result<Vec<Value>, ProviderError> {
        let body = MessageRequest {
            input: MessageInput {
                message_type: "text",
                text,
            },
        };

        let response = self
            .http_client
            .post(self.message_url(session_id))
            .basic_auth(BASIC_AUTH_USERNAME, Some(&self.api_key))
            .json(&body)
            .send()
            .await?;

        let message: MessageResponse = Self::decode(response).await?;
        Ok(message.output.generic)
    }
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    session_id: String,
}

#[derive(Debug, Serialize)]
struct MessageRequest<'a> {
    input: MessageInput<'a>,
}

#[derive(Debug, Serialize)]
struct MessageInput<'a> {
    message_type: &'static str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    output: MessageOutput,
}

#[derive(Debug, Deserialize)]
struct MessageOutput {
    #[serde(default)]
    generic: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> WatsonConfig {
        WatsonConfig {
            api_key: "key".to_string(),
            service_url: "https://assistant.example.com/".to_string(),
            assistant_id: "assistant-1".to_string(),
            accept_invalid_certs: false,
        }
    }

    #[test]
    fn sessions_url_pins_the_api_version() {
        let client = WatsonAssistant::new(&test_config());

        assert_eq!(
            client.sessions_url(),
            "https://assistant.example.com/v2/assistants/assistant-1/sessions?version=2021-06-14"
        );
    }

    #[test]
    fn message_url_addresses_the_session() {
        let client = WatsonAssistant::new(&test_config());

        assert_eq!(
            client.message_url("abc123"),
            "https://assistant.example.com/v2/assistants/assistant-1/sessions/abc123/message?version=2021-06-14"
        );
    }

    #[test]
    fn message_body_is_a_text_input() {
        let body = MessageRequest {
            input: MessageInput {
                message_type: "text",
                text: "hi",
            },
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"input": {"message_type": "text", "text": "hi"}})
        );
    }

    #[test]
    fn generic_output_defaults_to_empty() {
        let response: MessageResponse = serde_json::from_str(r#"{"output": {}}"#).unwrap();
        assert!(response.output.generic.is_empty());
    }
}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::client::LlmClient;
use super::error::LlmError;
use crate::util::SecretString;

const SYSTEM_PERSONA: &str = "You are an algorithms expert who writes clean practice material.";

/// Kept low so repeated runs produce similar skeletons.
const TEMPERATURE: f64 = 0.3;

// ============================================================================
// OpenAI-compatible chat completions client
// ============================================================================

pub struct ChatCompletionsClient {
    api_key: SecretString,
    model: String,
    endpoint: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl ChatCompletionsClient {
    /// `endpoint` is the full chat-completions URL. A `timeout_secs` of `None`
    /// leaves requests without a deadline.
    pub fn new(
        api_key: String,
        model: String,
        endpoint: String,
        timeout_secs: Option<u64>,
    ) -> Result<Self, LlmError> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            api_key: api_key.into(),
            model,
            endpoint,
            client: builder.build().map_err(|e| {
                LlmError::RequestBuild(format!("failed to build HTTP client: {}", e))
            })?,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn chat_request(&self, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PERSONA.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            temperature: TEMPERATURE,
        }
    }
}

/// Pull the first choice's content out of a raw response body.
fn extract_content(body: &str) -> Result<String, LlmError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| LlmError::ResponseShape(e.to_string()))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::ResponseShape("no choices in response".to_string()))?;

    choice
        .message
        .content
        .ok_or_else(|| LlmError::ResponseShape("message has no content".to_string()))
}

#[async_trait]
impl LlmClient for ChatCompletionsClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request = self.chat_request(prompt);

        debug!(
            "Calling chat completions at {} with model: {}",
            self.endpoint, self.model
        );

        let mut builder = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(&request);

        // Keyless local endpoints get no Authorization header
        let key = self.api_key.expose();
        if !key.is_empty() && key.to_lowercase() != "none" {
            builder = builder.header("authorization", format!("Bearer {}", key));
        }

        let http_request = builder
            .build()
            .map_err(|e| LlmError::RequestBuild(e.to_string()))?;

        let response = self
            .client
            .execute(http_request)
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::BodyRead(e.to_string()))?;

        if !status.is_success() {
            return Err(LlmError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Received {} bytes from chat completions", body.len());

        extract_content(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ChatCompletionsClient {
        ChatCompletionsClient::new(
            "test_key".to_string(),
            "deepseek-v3".to_string(),
            "http://localhost:8080/v1/chat/completions".to_string(),
            Some(30),
        )
        .unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = client();
        assert_eq!(client.api_key.expose(), "test_key");
        assert_eq!(client.model(), "deepseek-v3");
        assert_eq!(client.endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_client_without_timeout() {
        let client = ChatCompletionsClient::new(
            String::new(),
            "local".to_string(),
            "http://localhost:11434/v1/chat/completions".to_string(),
            None,
        )
        .unwrap();
        assert_eq!(client.api_key.expose(), "");
    }

    #[test]
    fn test_request_structure() {
        let request = client().chat_request("solve it");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "deepseek-v3");
        assert_eq!(json["messages"].as_array().unwrap().len(), 2);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], SYSTEM_PERSONA);
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "solve it");
        assert_eq!(json["temperature"], 0.3);
    }

    #[test]
    fn test_extract_content_success() {
        let body = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "Hello, world!"}}
            ]
        }"#;
        assert_eq!(extract_content(body).unwrap(), "Hello, world!");
    }

    #[test]
    fn test_extract_content_empty_choices() {
        let err = extract_content(r#"{"choices": []}"#).unwrap_err();
        assert!(matches!(err, LlmError::ResponseShape(_)));
    }

    #[test]
    fn test_extract_content_missing_choices() {
        let err = extract_content(r#"{"id": "x"}"#).unwrap_err();
        assert!(matches!(err, LlmError::ResponseShape(_)));
    }

    #[test]
    fn test_extract_content_null_content() {
        let err = extract_content(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap_err();
        assert!(matches!(err, LlmError::ResponseShape(_)));
    }

    #[test]
    fn test_extract_content_not_json() {
        let err = extract_content("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, LlmError::ResponseShape(_)));
    }
}

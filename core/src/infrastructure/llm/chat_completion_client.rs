use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    diagnostic::ports::{CompletionRequest, LLMClient},
};

/// Client of an OpenAI-compatible chat-completion gateway.
#[derive(Debug, Clone)]
pub struct ChatCompletionClient {
    gateway_url: String,
    api_key: String,
    model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: MessageResponse,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionClient {
    pub fn new(
        gateway_url: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, CoreError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            tracing::error!("Failed to build chat completion client: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Self {
            gateway_url,
            api_key,
            model,
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.gateway_url.trim_end_matches('/')
        )
    }

    fn request_body(&self, request: CompletionRequest) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system",
                    content: request.system_prompt,
                },
                Message {
                    role: "user",
                    content: request.user_prompt,
                },
            ],
            temperature: request.temperature,
        }
    }
}

fn status_error(status: StatusCode, body: &str) -> CoreError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => CoreError::RateLimited,
        StatusCode::PAYMENT_REQUIRED => CoreError::PaymentRequired,
        _ => CoreError::ExternalServiceError(format!(
            "LLM gateway returned error: {} - {}",
            status, body
        )),
    }
}

impl LLMClient for ChatCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CoreError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&self.request_body(request))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("LLM gateway request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("LLM gateway error: {} - {}", status, error_text);
            return Err(status_error(status, &error_text));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse LLM gateway response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ChatCompletionClient {
        ChatCompletionClient::new(
            "https://gateway.example/".to_string(),
            "key".to_string(),
            "google/gemini-2.5-flash".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn throttling_statuses_have_dedicated_errors() {
        assert_eq!(
            status_error(StatusCode::TOO_MANY_REQUESTS, ""),
            CoreError::RateLimited
        );
        assert_eq!(
            status_error(StatusCode::PAYMENT_REQUIRED, ""),
            CoreError::PaymentRequired
        );
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, "upstream"),
            CoreError::ExternalServiceError(_)
        ));
    }

    #[test]
    fn body_omits_temperature_when_unset() {
        let client = client();
        assert_eq!(client.endpoint(), "https://gateway.example/v1/chat/completions");

        let body = serde_json::to_value(client.request_body(CompletionRequest {
            system_prompt: "system".to_string(),
            user_prompt: "user".to_string(),
            temperature: None,
        }))
        .unwrap();

        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "user");
        assert!(body.get("temperature").is_none());
    }

    #[test]
    fn reply_content_is_read_from_the_first_choice() {
        let reply: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"{\"a\":1}"}}]}"#,
        )
        .unwrap();
        assert_eq!(reply.choices[0].message.content.as_deref(), Some("{\"a\":1}"));
    }
}

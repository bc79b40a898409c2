//! Provider for OpenAI-compatible chat completion APIs.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::DetourError;
use crate::types::Role;

use super::http::{bearer_headers, shared_client, status_to_error};
use super::{CompletionRequest, Provider};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Provider for any endpoint speaking the OpenAI chat completions dialect.
pub struct ChatCompletionsProvider {
    model: String,
    api_key: String,
    base_url: String,
}

impl ChatCompletionsProvider {
    pub fn new(
        model: impl Into<String>,
        api_key: impl Into<String>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            model: model.into(),
            api_key: api_key.into(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        let mut messages = Vec::new();
        if let Some(ref system) = request.system {
            messages.push(serde_json::json!({"role": "system", "content": system}));
        }
        for msg in &request.messages {
            let role = match msg.role {
                Role::User => "user",
                Role::Assistant => "assistant",
            };
            messages.push(serde_json::json!({"role": role, "content": msg.content}));
        }

        serde_json::json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": request.max_output_tokens,
        })
    }
}

#[async_trait]
impl Provider for ChatCompletionsProvider {
    fn name(&self) -> &str {
        "openai-compatible"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, DetourError> {
        let body = self.build_request_body(request);
        let url = format!("{}/chat/completions", self.base_url);

        debug!(model = %self.model, messages = request.messages.len(), "chat completion");

        let resp = shared_client()
            .post(&url)
            .headers(bearer_headers(&self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let data: ChatResponse = resp.json().await?;
        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DetourError::api(200, "no choices in completion response"))?;

        Ok(choice.message.content.unwrap_or_default())
    }
}

// Internal response types, limited to the fields we read.

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Message;

    fn request(system: Option<&str>) -> CompletionRequest {
        CompletionRequest {
            system: system.map(String::from),
            messages: vec![Message::user("hi"), Message::assistant("hello")],
            max_output_tokens: 256,
        }
    }

    #[test]
    fn system_prompt_leads_message_array() {
        let provider = ChatCompletionsProvider::new("test-model", "key", None);
        let body = provider.build_request_body(&request(Some("be terse")));

        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "be terse");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][2]["role"], "assistant");
        assert_eq!(body["max_tokens"], 256);
    }

    #[test]
    fn no_system_message_when_unset() {
        let provider = ChatCompletionsProvider::new("test-model", "key", None);
        let body = provider.build_request_body(&request(None));

        assert_eq!(body["messages"].as_array().unwrap().len(), 2);
        assert_eq!(body["messages"][0]["role"], "user");
    }
}

mod models;

use async_trait::async_trait;

use crate::config::Config;
use crate::services::chatbot::{ChatClient, ChatbotError, ChatbotResult, GenerationRequest};
use models::{
    Content, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    Part,
};

/// `ChatClient` backed by the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl ChatClient for GeminiClient {
    async fn generate(&self, request: GenerationRequest<'_>) -> ChatbotResult<String> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(request.prompt)],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part::text(request.system_instruction)],
            },
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        };

        tracing::debug!(model = %self.model, "calling Gemini generateContent");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::error!(%status, error = %e, "failed to read Gemini error body");
                    format!("<unreadable body: {e}>")
                }
            };
            tracing::error!(%status, %body, "Gemini API error");
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("{status}: {body}"));
            return Err(ChatbotError::Api(message));
        }

        let response = response.json::<GenerateContentResponse>().await?;
        Ok(response.text())
    }
}

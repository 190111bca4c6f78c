use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::Config;
use crate::consts;
use crate::errors::RelayError;
use crate::models::gemini::{ApiErrorBody, GenerateContentRequest, GenerateContentResponse};

/// Prompt in, generated text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_content(&self, prompt: &str) -> Result<String, RelayError>;
}

pub struct GeminiClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            url: config.generate_content_url(),
            api_key: config.api_key.clone(),
        }
    }

    #[cfg(test)]
    pub(crate) fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_content(&self, prompt: &str) -> Result<String, RelayError> {
        let response = self
            .client
            .post(&self.url)
            .header(consts::GEMINI_API_KEY_HEADER, &self.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    log::debug!("failed to read gemini error body ({}): {}", status, e);
                    String::new()
                }
            };

            return Err(RelayError::ApiError(describe_api_error(status, &text)));
        }

        let body = response.bytes().await?;
        let generated: GenerateContentResponse = serde_json::from_slice(&body)?;

        if let Some(usage) = &generated.usage_metadata {
            log::debug!(
                "gemini usage: prompt {} / candidates {} / total {} tokens",
                usage.prompt_token_count,
                usage.candidates_token_count,
                usage.total_token_count
            );
        }

        generated.text()
    }
}

pub(crate) fn describe_api_error(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => {
            let code = if envelope.error.code == 0 {
                status.as_u16()
            } else {
                envelope.error.code
            };
            format!("{} {}", code, envelope.error.message)
        }
        _ => format!("{} {}", status, body.trim()).trim_end().to_string(),
    }
}

use crate::config::Config;
use crate::errors::RelayError;
use crate::gemini_client::{GeminiClient, TextGenerator};

pub struct RelayService {
    generator: Box<dyn TextGenerator>,
}

impl RelayService {
    pub fn new(http_client: reqwest::Client, config: &Config) -> Self {
        Self::with_generator(Box::new(GeminiClient::new(http_client, config)))
    }

    pub fn with_generator(generator: Box<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Forwards the question verbatim; every failure comes back as `Err`, never a panic.
    pub async fn ask(&self, question: &str) -> Result<String, RelayError> {
        log::info!("Prompt sent to Gemini: {}", question);

        self.generator.generate_content(question).await
    }
}

//! Text generation through an OpenAI-compatible chat endpoint (OpenRouter by
//! default), using rig-core.

use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use rig::{client::CompletionClient, completion::Prompt, providers::openai};

use crate::config::GenerativeConfig;
use crate::errors::ResolverError;

use super::traits::{GenerationRequest, TextGenerator};

const CAPABILITY_ID: &str = "GENERATIVE";

/// [`TextGenerator`] backed by an OpenAI-compatible Completions API.
///
/// The rig client is built once and reused for every request.
pub struct LlmTextGenerator {
    client: openai::CompletionsClient<HttpClient>,
    model: String,
}

impl LlmTextGenerator {
    pub fn new(
        api_key: &str,
        base_url: Option<&str>,
        model: impl Into<String>,
    ) -> Result<Self, ResolverError> {
        let mut builder = openai::CompletionsClient::<HttpClient>::builder().api_key(api_key);
        if let Some(url) = base_url {
            builder = builder.base_url(url);
        }
        let client = builder
            .build()
            .map_err(|e| ResolverError::capability(CAPABILITY_ID, e.to_string()))?;

        Ok(Self {
            client,
            model: model.into(),
        })
    }

    /// Build from configuration. Fails with [`ResolverError::MissingApiKey`]
    /// when no key is configured.
    pub fn from_config(config: &GenerativeConfig) -> Result<Self, ResolverError> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ResolverError::MissingApiKey(CAPABILITY_ID.to_string()))?;

        Self::new(api_key, config.base_url.as_deref(), config.model.clone())
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenerator for LlmTextGenerator {
    fn id(&self) -> &'static str {
        CAPABILITY_ID
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, ResolverError> {
        debug!(
            "Generative request with model {} ({} max tokens)",
            self.model, request.max_output_tokens
        );

        let mut builder = self
            .client
            .agent(&self.model)
            .max_tokens(u64::from(request.max_output_tokens));
        if let Some(preamble) = &request.preamble {
            builder = builder.preamble(preamble);
        }

        builder
            .build()
            .prompt(request.instruction.as_str())
            .await
            .map_err(|e| ResolverError::capability(CAPABILITY_ID, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_requires_api_key() {
        let config = GenerativeConfig::default();
        match LlmTextGenerator::from_config(&config) {
            Err(ResolverError::MissingApiKey(capability)) => assert_eq!(capability, "GENERATIVE"),
            _ => panic!("Expected MissingApiKey"),
        }
    }

    #[test]
    fn test_from_config_uses_model() {
        let config = GenerativeConfig {
            api_key: Some(" sk-test ".to_string()),
            ..GenerativeConfig::default()
        };
        let generator = LlmTextGenerator::from_config(&config).unwrap();
        assert_eq!(generator.model(), "x-ai/grok-4.1-fast");
        assert_eq!(generator.id(), "GENERATIVE");
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let config = GenerativeConfig {
            api_key: Some("   ".to_string()),
            ..GenerativeConfig::default()
        };
        assert!(matches!(
            LlmTextGenerator::from_config(&config),
            Err(ResolverError::MissingApiKey(_))
        ));
    }

    #[test]
    fn test_new_with_custom_base_url() {
        let generator =
            LlmTextGenerator::new("sk-test", Some("http://127.0.0.1:9/v1"), "local-model").unwrap();
        assert_eq!(generator.model(), "local-model");
    }
}

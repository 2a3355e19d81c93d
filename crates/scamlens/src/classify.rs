use crate::prelude::*;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::gemini;

/// Failure talking to the generative model. Carried as a structured value
/// so callers can decide how (and whether) to show it; the web handlers
/// flatten it into a display string at render time.
#[derive(thiserror::Error, Debug, Clone)]
#[error("{0}")]
pub struct ProviderError(pub String);

/// Capability seam for the external classification model, so the web
/// handlers and one-shot commands can run against a deterministic stub.
#[async_trait::async_trait]
pub trait ClassificationProvider: Send + Sync {
    async fn classify(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Model configuration shared by every subcommand that talks to Gemini.
#[derive(Debug, Clone, clap::Args)]
pub struct ModelOptions {
    /// Gemini API key
    #[clap(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Model name for classification
    #[clap(long, env = "SCAMLENS_MODEL", default_value = "gemini-2.5-flash")]
    pub model: String,
}

/// Production provider backed by rig's Gemini client.
pub struct Gemini {
    client: gemini::Client,
    model: String,
}

impl Gemini {
    pub fn new(options: &ModelOptions) -> Result<Self> {
        let client = gemini::Client::builder()
            .api_key(options.api_key.as_str())
            .build()
            .map_err(|e| eyre!("Failed to create Gemini client: {}", e))?;

        Ok(Gemini {
            client,
            model: options.model.clone(),
        })
    }
}

#[async_trait::async_trait]
impl ClassificationProvider for Gemini {
    async fn classify(&self, prompt: &str) -> Result<String, ProviderError> {
        let agent = self.client.agent(&self.model).build();

        agent
            .prompt(prompt)
            .await
            .map_err(|e| ProviderError(e.to_string()))
    }
}

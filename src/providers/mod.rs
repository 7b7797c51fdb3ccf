//! LLM provider implementations

pub mod gemini;
pub mod openai;

// Re-export for convenience
pub use gemini::GeminiClient;
pub use openai::OpenAiClient;

use crate::error::Error;
use crate::request::PromptRequest;
use crate::Provider;

/// One configured provider adapter.
#[derive(Debug, Clone)]
pub enum ProviderClient
{   Gemini(GeminiClient)
  , OpenAI(OpenAiClient)
}

impl ProviderClient
{   pub fn provider(&self) -> Provider
    {   match self
        {   ProviderClient::Gemini(_) => Provider::Gemini
          , ProviderClient::OpenAI(_) => Provider::OpenAI
        }
    }

    pub fn model(&self) -> &str
    {   match self
        {   ProviderClient::Gemini(c) => c.model()
          , ProviderClient::OpenAI(c) => c.model()
        }
    }

    pub async fn send_prompt(
      &self
    , request: &PromptRequest
    ) -> Result<String, Error>
    {   match self
        {   ProviderClient::Gemini(c) => c.send_prompt(request).await
          , ProviderClient::OpenAI(c) => c.send_prompt(request).await
        }
    }
}

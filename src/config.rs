//! Configuration for providers and the HTTP server

use serde::{Deserialize, Serialize};
use log::debug;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Credentials and endpoint overrides for one provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig
{   /// API credential
    pub api_key: String
  , /// API base URL (if custom)
    pub api_base: Option<String>
  , /// Model name (if not the provider default)
    pub model: Option<String>
  , /// Request timeout in seconds; unset means the client default
    pub timeout_secs: Option<u64>
}

impl ProviderConfig
{   pub fn new(api_key: impl Into<String>) -> Self
    {   ProviderConfig
        {   api_key: api_key.into()
          , api_base: None
          , model: None
          , timeout_secs: None
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self
    {   self.api_base = Some(api_base.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self
    {   self.model = Some(model.into());
        self
    }
}

/// Studio configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudioConfig
{   /// Gemini credentials, tried first
    pub gemini: Option<ProviderConfig>
  , /// OpenAI credentials, tried second
    pub openai: Option<ProviderConfig>
  , /// Listen address for the binary
    pub bind_addr: String
  , /// Fixed seed for the fallback title prefix
    pub title_seed: Option<u64>
}

impl Default for StudioConfig
{   fn default() -> Self
    {   StudioConfig
        {   gemini: None
          , openai: None
          , bind_addr: DEFAULT_BIND_ADDR.to_string()
          , title_seed: None
        }
    }
}

impl StudioConfig
{   /// Read configuration from the process environment
    pub fn from_env() -> Self
    {   Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where F: Fn(&str) -> Option<String>
    {   let present = |key: &str| {
          lookup(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        };

        let provider = |key_var: &str, base_var: &str, model_var: &str| {
          present(key_var).map(|api_key| ProviderConfig
          {   api_key
            , api_base: present(base_var)
            , model: present(model_var)
            , timeout_secs: None
          })
        };

        let gemini = provider(
          "GEMINI_API_KEY", "GEMINI_API_BASE", "GEMINI_MODEL"
        );
        let openai = provider(
          "OPENAI_API_KEY", "OPENAI_API_BASE", "OPENAI_MODEL"
        );
        debug!(
          "Config loaded: gemini={}, openai={}",
          gemini.is_some(),
          openai.is_some()
        );

        StudioConfig
        {   gemini
          , openai
          , bind_addr: present("SASTRA_BIND_ADDR")
              .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
          , title_seed: present("SASTRA_TITLE_SEED")
              .and_then(|s| s.parse().ok())
        }
    }
}

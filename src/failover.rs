//! Provider gateway: sequential failover across configured providers

use std::time::Duration;
use log::{debug, error, info};

use crate::config::{ProviderConfig, StudioConfig};
use crate::error::Error;
use crate::providers::{GeminiClient, OpenAiClient, ProviderClient};
use crate::request::PromptRequest;
use crate::Provider;

/// Text produced by a live provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderReply<T = String>
{   pub provider: Provider
  , pub value: T
}

/// Ordered set of provider adapters. Attempts are strictly sequential
/// in `Provider::PRIORITY` order; a provider is only asked after every
/// earlier one has failed or is not configured.
#[derive(Debug, Clone, Default)]
pub struct ProviderGateway
{   clients: Vec<ProviderClient>
}

fn http_client(config: &ProviderConfig) -> Result<reqwest::Client, Error>
{   let mut builder = reqwest::Client::builder();
    if let Some(secs) = config.timeout_secs
    {   builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build().map_err(|e| {
      Error::InvalidConfiguration(format!("HTTP client: {}", e))
    })
}

impl ProviderGateway
{   /// Gateway with no providers; every call yields nothing.
    pub fn empty() -> Self
    {   ProviderGateway::default()
    }

    /// Build adapters for every provider that has a credential.
    pub fn new(config: &StudioConfig) -> Result<Self, Error>
    {   let mut clients = Vec::with_capacity(2);
        for provider in Provider::PRIORITY
        {   let client = match provider
            {   Provider::Gemini => match &config.gemini
                {   Some(c) => ProviderClient::Gemini(
                      GeminiClient::new(c, http_client(c)?)
                    )
                  , None => continue
                }
              , Provider::OpenAI => match &config.openai
                {   Some(c) => ProviderClient::OpenAI(
                      OpenAiClient::new(c, http_client(c)?)
                    )
                  , None => continue
                }
            };
            info!(
              "Provider {} configured with model {}",
              provider.as_str(),
              client.model()
            );
            clients.push(client);
        }
        if clients.is_empty()
        {   info!("No provider credentials configured; sample works only");
        }
        Ok(ProviderGateway { clients })
    }

    /// Providers that will be attempted, in attempt order.
    pub fn configured(&self) -> Vec<Provider>
    {   self.clients.iter().map(|c| c.provider()).collect()
    }

    pub fn is_empty(&self) -> bool
    {   self.clients.is_empty()
    }

    /// Call one provider. `None` when it is not configured, fails, or
    /// answers without text; failures are logged, never returned.
    pub async fn call_provider(
      &self
    , provider: Provider
    , request: &PromptRequest
    ) -> Option<String>
    {   let client = match self.clients
          .iter()
          .find(|c| c.provider() == provider)
        {   Some(c) => c
          , None => {
              debug!("{} not configured, skipping", provider.as_str());
              return None;
            }
        };

        match client.send_prompt(request).await
        {   Ok(text) => Some(text)
          , Err(e) => {
              error!("{} call failed: {}", provider.as_str(), e);
              None
            }
        }
    }

    /// First provider, in priority order, that returns text.
    pub async fn first_response(
      &self
    , request: &PromptRequest
    ) -> Option<ProviderReply>
    {   self.first_accepted(request, |text| Some(text.to_string())).await
    }

    /// First provider whose text passes `accept`. A rejected answer
    /// moves on to the next provider just like a failed call.
    pub async fn first_accepted<T, F>(
      &self
    , request: &PromptRequest
    , accept: F
    ) -> Option<ProviderReply<T>>
    where F: Fn(&str) -> Option<T>
    {   for provider in Provider::PRIORITY
        {   let text = match self.call_provider(provider, request).await
            {   Some(text) => text
              , None => continue
            };
            match accept(&text)
            {   Some(value) => {
                  debug!("Accepted answer from {}", provider.as_str());
                  return Some(ProviderReply { provider, value });
                }
              , None => {
                  debug!("Rejected answer from {}", provider.as_str());
                }
            }
        }
        debug!("No provider produced an acceptable answer");
        None
    }
}

use serde::{Deserialize, Serialize};
use log::{debug, trace, error};

use crate::config::ProviderConfig;
use crate::error::Error;
use crate::request::PromptRequest;

pub const OPENAI_API_BASE: &str = "https://api.openai.com";
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-4o";

// ===== Message Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , #[serde(default)]
    pub content: Option<String>
}

#[derive(Debug, Clone, Serialize)]
pub struct OpenAiChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , pub temperature: f32
  , pub max_tokens: u32
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiChatResponse
{   #[serde(default)]
    pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: Option<ChatMessage>
}

impl OpenAiChatResponse
{   /// `choices[0].message.content`, if non-empty
    pub fn first_text(&self) -> Option<&str>
    {   self.choices.first()
          .and_then(|c| c.message.as_ref())
          .and_then(|m| m.content.as_deref())
          .filter(|t| !t.is_empty())
    }
}

// ===== OpenAI Client =====

/// Adapter for the OpenAI chat completions endpoint
#[derive(Debug, Clone)]
pub struct OpenAiClient
{   api_key: String
  , api_base: String
  , model: String
  , http_client: reqwest::Client
}

impl OpenAiClient
{   pub fn new(
      config: &ProviderConfig
    , http_client: reqwest::Client
    ) -> Self
    {   debug!("Creating OpenAiClient");
        OpenAiClient
        {   api_key: config.api_key.clone()
          , api_base: config.api_base.clone()
              .unwrap_or_else(|| OPENAI_API_BASE.to_string())
              .trim_end_matches('/')
              .to_string()
          , model: config.model.clone()
              .unwrap_or_else(|| OPENAI_DEFAULT_MODEL.to_string())
          , http_client
        }
    }

    pub fn model(&self) -> &str
    {   &self.model
    }

    fn build_request(&self, request: &PromptRequest) -> OpenAiChatRequest
    {   let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system_message
        {   messages.push(ChatMessage
            {   role: "system".to_string()
              , content: Some(system.clone())
            });
        }
        messages.push(ChatMessage
        {   role: "user".to_string()
          , content: Some(request.prompt.clone())
        });

        OpenAiChatRequest
        {   model: self.model.clone()
          , messages
          , temperature: request.params.temperature
          , max_tokens: request.params.max_tokens
        }
    }

    pub async fn send_prompt(
      &self
    , request: &PromptRequest
    ) -> Result<String, Error>
    {   debug!("OpenAI send_prompt for model: {}", self.model);

        let body = self.build_request(request);
        trace!(
          "OpenAI request: {} messages, temperature {}",
          body.messages.len(),
          body.temperature
        );

        let response = self.http_client
          .post(format!("{}/v1/chat/completions", self.api_base))
          .header("Authorization", format!("Bearer {}", self.api_key))
          .header("Content-Type", "application/json")
          .json(&body)
          .send()
          .await
          .map_err(|e| {
            let e = e.without_url();
            error!("OpenAI HTTP error: {}", e);
            Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        trace!("OpenAI response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("OpenAI API error: {} {}", status, error_text);
            return Err(Error::ApiError(
              format!("OpenAI error {}: {}", status, error_text)
            ));
        }

        let envelope: OpenAiChatResponse
          = response.json().await.map_err(|e| {
            error!("OpenAI parse error: {}", e);
            Error::ParseError(e.to_string())
          })?;

        envelope.first_text()
          .map(|t| t.to_string())
          .ok_or_else(|| {
            error!("OpenAI returned no choices with content");
            Error::EmptyResponse("openai".to_string())
          })
    }
}

#[cfg(test)]
mod tests
{   use super::*;
    use crate::request::GenerationParams;

    #[test]
    fn test_system_message_goes_first()
    {   let client = OpenAiClient::new(
          &ProviderConfig::new("sk").with_model("gpt-4o-mini"),
          reqwest::Client::new()
        );
        let body = client.build_request(
          &PromptRequest::new("tulis", GenerationParams::CONTENT)
            .with_system("sistem")
        );
        assert_eq!(body.model, "gpt-4o-mini");
        assert_eq!(body.messages.len(), 2);
        assert_eq!(body.messages[0].role, "system");
        assert_eq!(body.messages[1].content.as_deref(), Some("tulis"));
        assert_eq!(body.max_tokens, 4096);
    }

    #[test]
    fn test_title_call_has_no_system_message()
    {   let client = OpenAiClient::new(
          &ProviderConfig::new("sk"),
          reqwest::Client::new()
        );
        let body = client.build_request(
          &PromptRequest::new("judul", GenerationParams::TITLE)
        );
        assert_eq!(body.messages.len(), 1);
        assert_eq!(body.messages[0].role, "user");
    }

    #[test]
    fn test_envelope_text_extraction()
    {   let full: OpenAiChatResponse = serde_json::from_str(
          r#"{"choices":[{"message":{"role":"assistant","content":"syair"}}]}"#
        ).unwrap();
        assert_eq!(full.first_text(), Some("syair"));

        let null_content: OpenAiChatResponse = serde_json::from_str(
          r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#
        ).unwrap();
        assert_eq!(null_content.first_text(), None);

        let none: OpenAiChatResponse
          = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(none.first_text(), None);
    }

    #[test]
    fn test_transport_error_hides_api_key()
    {   let client = OpenAiClient::new(
          &ProviderConfig::new("SECRET-OPENAI-KEY")
            .with_api_base("http://127.0.0.1:1"),
          reqwest::Client::new()
        );
        let err = tokio_test::block_on(client.send_prompt(
          &PromptRequest::new("halo", GenerationParams::TITLE)
        )).unwrap_err();
        assert!(matches!(err, Error::HttpError(_)));
        assert!(!err.to_string().contains("SECRET-OPENAI-KEY"));
    }
}

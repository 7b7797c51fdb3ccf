use serde::{Deserialize, Serialize};
use log::{debug, trace, error};

use crate::config::ProviderConfig;
use crate::error::Error;
use crate::request::PromptRequest;

pub const GEMINI_API_BASE: &str
  = "https://generativelanguage.googleapis.com";
pub const GEMINI_DEFAULT_MODEL: &str = "gemini-1.5-flash";

// ===== Message Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part
{   #[serde(default)]
    pub text: String
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content
{   #[serde(default)]
    pub parts: Vec<Part>
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig
{   pub temperature: f32
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>
  , pub max_output_tokens: u32
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest
{   pub contents: Vec<Content>
  , pub generation_config: GenerationConfig
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponse
{   #[serde(default)]
    pub candidates: Vec<Candidate>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate
{   pub content: Option<Content>
}

impl GeminiResponse
{   /// `candidates[0].content.parts[0].text`, if non-empty
    pub fn first_text(&self) -> Option<&str>
    {   self.candidates.first()
          .and_then(|c| c.content.as_ref())
          .and_then(|c| c.parts.first())
          .map(|p| p.text.as_str())
          .filter(|t| !t.is_empty())
    }
}

// ===== Gemini Client =====

/// Adapter for the Gemini `generateContent` endpoint
#[derive(Debug, Clone)]
pub struct GeminiClient
{   api_key: String
  , api_base: String
  , model: String
  , http_client: reqwest::Client
}

impl GeminiClient
{   pub fn new(
      config: &ProviderConfig
    , http_client: reqwest::Client
    ) -> Self
    {   debug!("Creating GeminiClient");
        GeminiClient
        {   api_key: config.api_key.clone()
          , api_base: config.api_base.clone()
              .unwrap_or_else(|| GEMINI_API_BASE.to_string())
              .trim_end_matches('/')
              .to_string()
          , model: config.model.clone()
              .unwrap_or_else(|| GEMINI_DEFAULT_MODEL.to_string())
          , http_client
        }
    }

    pub fn model(&self) -> &str
    {   &self.model
    }

    fn build_request(&self, request: &PromptRequest) -> GeminiRequest
    {   GeminiRequest
        {   contents: vec![
              Content
              {   parts: vec![Part { text: request.prompt.clone() }]
              }
            ]
          , generation_config: GenerationConfig
            {   temperature: request.params.temperature
              , top_k: request.params.top_k
              , top_p: request.params.top_p
              , max_output_tokens: request.params.max_tokens
            }
        }
    }

    /// Gemini has no system role here; the system message is ignored.
    pub async fn send_prompt(
      &self
    , request: &PromptRequest
    ) -> Result<String, Error>
    {   debug!("Gemini send_prompt for model: {}", self.model);

        let body = self.build_request(request);
        trace!("Gemini request: {:?}", body.generation_config);

        let response = self.http_client
          .post(format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
          ))
          .header("x-goog-api-key", self.api_key.as_str())
          .header("Content-Type", "application/json")
          .json(&body)
          .send()
          .await
          .map_err(|e| {
            let e = e.without_url();
            error!("Gemini HTTP error: {}", e);
            Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        trace!("Gemini response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("Gemini API error: {} {}", status, error_text);
            return Err(Error::ApiError(
              format!("Gemini error {}: {}", status, error_text)
            ));
        }

        let envelope: GeminiResponse
          = response.json().await.map_err(|e| {
            error!("Gemini parse error: {}", e);
            Error::ParseError(e.to_string())
          })?;

        match envelope.first_text()
        {   Some(text) => {
              debug!("Gemini success, content length: {}", text.len());
              Ok(text.to_string())
            }
          , None => {
              error!("Gemini returned empty content");
              Err(Error::EmptyResponse("gemini".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests
{   use super::*;
    use crate::request::GenerationParams;

    #[test]
    fn test_request_shape_matches_api()
    {   let client = GeminiClient::new(
          &ProviderConfig::new("k"),
          reqwest::Client::new()
        );
        let body = client.build_request(
          &PromptRequest::new("halo", GenerationParams::TITLE)
        );
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "halo");
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 50);
        assert!(value["generationConfig"].get("topK").is_none());
        assert_eq!(client.model(), GEMINI_DEFAULT_MODEL);
    }

    #[test]
    fn test_envelope_text_extraction()
    {   let full: GeminiResponse = serde_json::from_str(
          r#"{"candidates":[{"content":{"parts":[{"text":"puisi"}]}}]}"#
        ).unwrap();
        assert_eq!(full.first_text(), Some("puisi"));

        let blocked: GeminiResponse = serde_json::from_str(
          r#"{"candidates":[{"finishReason":"SAFETY"}]}"#
        ).unwrap();
        assert_eq!(blocked.first_text(), None);

        let empty: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.first_text(), None);
    }

    #[test]
    fn test_transport_error_hides_api_key()
    {   let client = GeminiClient::new(
          &ProviderConfig::new("SECRET-GEMINI-KEY")
            .with_api_base("http://127.0.0.1:1"),
          reqwest::Client::new()
        );
        let err = tokio_test::block_on(client.send_prompt(
          &PromptRequest::new("halo", GenerationParams::TITLE)
        )).unwrap_err();
        assert!(matches!(err, Error::HttpError(_)));
        assert!(!err.to_string().contains("SECRET-GEMINI-KEY"));
    }
}

//! Wire types for the HTTP surface and the provider calls

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// `null` reads the same as a missing field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where D: Deserializer<'de>
{   Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Incoming generation request. Fields stay raw strings so that
/// unknown axis values reach the template defaults instead of
/// failing deserialization; only emptiness is a validation error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationRequest
{   #[serde(deserialize_with = "null_as_empty")]
    pub literature_type: String
  , #[serde(deserialize_with = "null_as_empty")]
    pub theme: String
  , #[serde(deserialize_with = "null_as_empty")]
    pub style: String
  , #[serde(deserialize_with = "null_as_empty")]
    pub mood: String
  , pub length: Option<String>
  , pub additional_instructions: Option<String>
}

impl GenerationRequest
{   /// The free-text description, when it carries something.
    pub fn description(&self) -> Option<&str>
    {   self.additional_instructions
          .as_deref()
          .filter(|d| !d.trim().is_empty())
    }

    pub fn length_or_empty(&self) -> &str
    {   self.length.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMetadata
{   pub literature_type: String
  , pub theme: String
  , pub style: String
  , pub mood: String
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<String>
  , pub model: crate::ModelSource
  , pub generated_at: DateTime<Utc>
}

/// Successful generation payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse
{   pub success: bool
  , pub content: String
  , pub title: String
  , pub metadata: GenerationMetadata
}

/// Incoming analysis request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisRequest
{   #[serde(deserialize_with = "null_as_empty")]
    pub content: String
  , pub literature_type: Option<String>
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FigurativeLanguage
{   #[serde(rename = "type")]
    pub kind: String
  , pub example: String
  , pub explanation: String
}

/// Structured critique of a work. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult
{   pub summary: String
  , pub literature_type: String
  , pub theme: String
  , pub mood: String
  , pub strengths: Vec<String>
  , pub improvements: Vec<String>
  , pub style_analysis: String
  , pub figurative_language: Vec<FigurativeLanguage>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub rhyme_pattern: Option<String>
  , pub overall_score: u8
  , pub detailed_feedback: String
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse
{   pub success: bool
  , pub analysis: AnalysisResult
}

/// Failure payload shared by both endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse
{   pub success: bool
  , pub error: String
}

impl ErrorResponse
{   pub fn new(error: impl Into<String>) -> Self
    {   ErrorResponse
        {   success: false
          , error: error.into()
        }
    }
}

/// Sampling parameters for one provider call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams
{   pub temperature: f32
  , pub top_k: Option<u32>
  , pub top_p: Option<f32>
  , pub max_tokens: u32
}

impl GenerationParams
{   /// Main literary generation call
    pub const CONTENT: GenerationParams = GenerationParams
    {   temperature: 0.9
      , top_k: Some(64)
      , top_p: Some(0.95)
      , max_tokens: 4096
    };

    /// Short title call
    pub const TITLE: GenerationParams = GenerationParams
    {   temperature: 0.7
      , top_k: None
      , top_p: None
      , max_tokens: 50
    };

    /// Critique call
    pub const ANALYSIS: GenerationParams = GenerationParams
    {   temperature: 0.7
      , top_k: Some(40)
      , top_p: Some(0.95)
      , max_tokens: 2048
    };
}

/// Unified prompt request handed to every provider adapter
#[derive(Debug, Clone)]
pub struct PromptRequest
{   /// The prompt text
    pub prompt: String
  , /// Optional system message (only chat-style providers use it)
    pub system_message: Option<String>
  , /// Sampling parameters
    pub params: GenerationParams
}

impl PromptRequest
{   pub fn new(prompt: impl Into<String>, params: GenerationParams) -> Self
    {   PromptRequest
        {   prompt: prompt.into()
          , system_message: None
          , params
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self
    {   self.system_message = Some(system.into());
        self
    }
}

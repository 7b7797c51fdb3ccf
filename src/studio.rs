//! Request orchestration for the generation and analysis endpoints.
//!
//! generate: validate -> prompt -> providers in order -> title | sample
//! analyze:  validate -> prompt -> providers in order -> parse -> mock
//!
//! Once validation passes neither path fails: the offline fallbacks
//! always produce a result.

use chrono::Utc;
use log::{debug, info};

use crate::config::StudioConfig;
use crate::error::Error;
use crate::failover::{ProviderGateway, ProviderReply};
use crate::mock;
use crate::parse;
use crate::prompt;
use crate::request::{
  AnalysisRequest, AnalysisResult, GenerationMetadata,
  GenerationParams, GenerationRequest, GenerationResponse, PromptRequest,
};
use crate::title::{self, TitleSeed};
use crate::ModelSource;

pub const MIN_ANALYSIS_CHARS: usize = 10;

pub const MISSING_FIELDS_MESSAGE: &str = "Mohon lengkapi semua field yang diperlukan: jenis sastra, tema, gaya, dan suasana";
pub const CONTENT_TOO_SHORT_MESSAGE: &str = "Karya terlalu pendek untuk dianalisis. Minimal 10 karakter.";

/// Stateless per request; cloning shares nothing mutable.
#[derive(Debug, Clone)]
pub struct Studio
{   gateway: ProviderGateway
  , title_seed: TitleSeed
}

fn is_blank(s: &str) -> bool
{   s.trim().is_empty()
}

impl Studio
{   pub fn new(config: &StudioConfig) -> Result<Self, Error>
    {   Ok(Studio
        {   gateway: ProviderGateway::new(config)?
          , title_seed: TitleSeed::from_config(config.title_seed)
        })
    }

    pub fn with_gateway(gateway: ProviderGateway, title_seed: TitleSeed) -> Self
    {   Studio { gateway, title_seed }
    }

    pub fn gateway(&self) -> &ProviderGateway
    {   &self.gateway
    }

    pub fn validate_generation(request: &GenerationRequest) -> Result<(), Error>
    {   let required = [
          &request.literature_type
        , &request.theme
        , &request.style
        , &request.mood
        ];
        if required.iter().any(|field| is_blank(field))
        {   return Err(Error::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }
        Ok(())
    }

    pub fn validate_analysis(request: &AnalysisRequest) -> Result<(), Error>
    {   if request.content.trim().chars().count() < MIN_ANALYSIS_CHARS
        {   return Err(Error::Validation(CONTENT_TOO_SHORT_MESSAGE.to_string()));
        }
        Ok(())
    }

    pub async fn generate(
      &self
    , request: GenerationRequest
    ) -> Result<GenerationResponse, Error>
    {   Self::validate_generation(&request)?;
        debug!(
          "Generating {} / {} / {}",
          request.literature_type, request.style, request.mood
        );

        let prompt_request = PromptRequest::new(
          prompt::build_generation_prompt(&request)
        , GenerationParams::CONTENT
        ).with_system(prompt::GENERATION_SYSTEM);

        let (content, title, model) = match self.gateway
          .first_response(&prompt_request)
          .await
        {   Some(ProviderReply { provider, value }) => {
              let title = title::generate_title(
                &self.gateway
              , self.title_seed
              , &request.literature_type
              , &request.theme
              ).await;
              (value, title, ModelSource::from(provider))
            }
          , None => {
              let work = mock::mock_generation(&request);
              (work.content, work.title, ModelSource::Sample)
            }
        };
        info!("Generated {} via {:?}", request.literature_type, model);

        Ok(GenerationResponse
        {   success: true
          , content
          , title
          , metadata: GenerationMetadata
            {   literature_type: request.literature_type
              , theme: request.theme
              , style: request.style
              , mood: request.mood
              , length: request.length
              , model
              , generated_at: Utc::now()
            }
        })
    }

    pub async fn analyze(
      &self
    , request: AnalysisRequest
    ) -> Result<AnalysisResult, Error>
    {   Self::validate_analysis(&request)?;

        let prompt_request = PromptRequest::new(
          prompt::build_analysis_prompt(
            &request.content
          , request.literature_type.as_deref()
          )
        , GenerationParams::ANALYSIS
        ).with_system(prompt::ANALYSIS_SYSTEM);

        let parsed = match self.gateway.first_response(&prompt_request).await
        {   Some(ProviderReply { provider, value }) => {
              debug!("Parsing analysis from {}", provider.as_str());
              parse::parse_analysis(&value)
            }
          , None => None
        };

        Ok(match parsed
        {   Some(analysis) => analysis
          , None => {
              info!("Using offline analysis");
              mock::mock_analysis(&request.content)
            }
        })
    }
}

//! Short titles for provider-generated works.
//!
//! The templated fallback picks a random poetic prefix. That choice is
//! the only intentionally non-deterministic step in the pipeline, so
//! the RNG is passed in and tests seed it.

use log::debug;
use rand::seq::SliceRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::failover::{ProviderGateway, ProviderReply};
use crate::prompt;
use crate::request::{GenerationParams, PromptRequest};

pub const POETIC_PREFIXES: [&str; 5]
  = ["Aksara", "Untaian", "Nyanyian", "Bisikan", "Jejak"];

/// Titles at or above this many characters are rejected.
pub const MAX_TITLE_CHARS: usize = 50;

/// Source of fallback-title randomness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleSeed
{   /// Fresh entropy per request
    #[default]
    Entropy
  , /// Reproducible sequence
    Fixed(u64)
}

impl TitleSeed
{   pub fn from_config(seed: Option<u64>) -> Self
    {   seed.map(TitleSeed::Fixed).unwrap_or_default()
    }

    pub fn rng(&self) -> StdRng
    {   match self
        {   TitleSeed::Entropy => StdRng::from_entropy()
          , TitleSeed::Fixed(seed) => StdRng::seed_from_u64(*seed)
        }
    }
}

/// Drop one leading and one trailing quote mark.
pub fn strip_quotes(title: &str) -> &str
{   let title = title
      .strip_prefix(|c: char| c == '"' || c == '\'')
      .unwrap_or(title);
    title
      .strip_suffix(|c: char| c == '"' || c == '\'')
      .unwrap_or(title)
}

/// Trimmed, unquoted title if the model's answer is usable.
pub fn clean_title(raw: &str) -> Option<String>
{   let title = strip_quotes(raw.trim());
    if title.is_empty() || title.chars().count() >= MAX_TITLE_CHARS
    {   return None;
    }
    Some(title.to_string())
}

/// Random prefix followed by the theme.
pub fn default_title<R: Rng + ?Sized>(rng: &mut R, theme: &str) -> String
{   let prefix = POETIC_PREFIXES
      .choose(rng)
      .copied()
      .unwrap_or(POETIC_PREFIXES[0]);
    format!("{} {}", prefix, theme)
}

/// Ask the providers for a title, falling back to the template.
pub async fn generate_title(
  gateway: &ProviderGateway
, seed: TitleSeed
, literature_type: &str
, theme: &str
) -> String
{   let request = PromptRequest::new(
      prompt::build_title_prompt(literature_type, theme)
    , GenerationParams::TITLE
    );

    match gateway.first_accepted(&request, clean_title).await
    {   Some(ProviderReply { provider, value }) => {
          debug!("Title from {}: {}", provider.as_str(), value);
          value
        }
      , None => {
          let title = default_title(&mut seed.rng(), theme);
          debug!("Templated title: {}", title);
          title
        }
    }
}

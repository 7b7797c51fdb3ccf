pub mod error;
pub mod config;
pub mod request;
pub mod rules;
pub mod templates;
pub mod imagery;
pub mod mood;
pub mod prompt;
pub mod providers;
pub mod failover;
pub mod parse;
pub mod mock;
pub mod title;
pub mod studio;
pub mod server;

use serde::{Deserialize, Serialize};

pub use config::{ProviderConfig, StudioConfig};
pub use error::Error;
pub use failover::ProviderGateway;
pub use studio::Studio;

/*

sastra: generation pipeline behind the Indonesian literature studio.

A request names a literary form plus theme, style, mood and length.
The studio turns that into one prompt, walks the configured LLM
providers in fixed priority order, and when none of them answers it
falls back to the curated sample works so the caller always gets a
plausible piece back. The analysis endpoint has the same shape but
expects JSON from the model and validates it before trusting it.

src/
├── lib.rs          # Shared axis enums and re-exports
├── error.rs        # Crate error type
├── config.rs       # Provider credentials and server settings
├── request.rs      # Wire DTOs and prompt parameters
├── rules.rs        # First-match keyword rule tables
├── templates.rs    # Form/style/mood/length fragments
├── imagery.rs      # Imagery suggestions from the description
├── mood.rs         # Mood inference from the theme
├── prompt.rs       # Prompt composition
├── providers/      # Gemini and OpenAI adapters
├── failover.rs     # Provider gateway
├── parse.rs        # Analysis JSON extraction/validation
├── mock/           # Offline fallbacks
├── title.rs        # Title generation
├── studio.rs       # Request orchestration
└── server.rs       # HTTP surface

*/

/// SASTRA STRUCTURES:

/// External text-generation providers, declared in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Provider
{
  /// Google AI Studio (Gemini), free tier friendly so it goes first
  Gemini
  ,
  /// OpenAI chat completions
  OpenAI
}

impl Provider
{   /// Fixed attempt order. Configuration never reorders this.
    pub const PRIORITY: [Provider; 2]
      = [Provider::Gemini, Provider::OpenAI];

    pub fn as_str(&self) -> &'static str
    {   match self
        {   Provider::Gemini => "gemini"
          , Provider::OpenAI => "openai"
        }
    }
}

/// Which path produced a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelSource
{   Gemini
  , OpenAI
  , Sample
}

impl From<Provider> for ModelSource
{   fn from(provider: Provider) -> Self
    {   match provider
        {   Provider::Gemini => ModelSource::Gemini
          , Provider::OpenAI => ModelSource::OpenAI
        }
    }
}

/// Literary forms the studio knows how to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LiteratureType
{   Puisi
  , Pantun
  , Cerpen
  , Gurindam
  , Syair
  , Prosa
}

/// Writing register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Style
{   Klasik
  , Modern
  , Kontemporer
}

/// Emotional register of a work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mood
{   Romantis
  , Melankolis
  , Gembira
  , Inspiratif
  , Filosofis
}

/// Requested size of a work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Length
{   Short
  , Medium
  , Long
}

/// Shared behavior of the four request axes: a closed set of slugs,
/// a display name, and a default used when the caller sends something
/// outside the set.
pub trait Axis: Sized + Copy + 'static
{   const ALL: &'static [Self];
    const DEFAULT: Self;

    fn slug(&self) -> &'static str;
    fn display_name(&self) -> &'static str;

    /// Exact slug lookup, case-insensitive.
    fn parse(raw: &str) -> Option<Self>
    {   let needle = raw.trim().to_lowercase();
        Self::ALL.iter().copied().find(|v| v.slug() == needle)
    }

    /// Lookup that never fails.
    fn parse_or_default(raw: &str) -> Self
    {   Self::parse(raw).unwrap_or(Self::DEFAULT)
    }
}

impl Axis for LiteratureType
{   const ALL: &'static [Self] = &[
      LiteratureType::Puisi
    , LiteratureType::Pantun
    , LiteratureType::Cerpen
    , LiteratureType::Gurindam
    , LiteratureType::Syair
    , LiteratureType::Prosa
    ];
    const DEFAULT: Self = LiteratureType::Puisi;

    fn slug(&self) -> &'static str
    {   match self
        {   LiteratureType::Puisi => "puisi"
          , LiteratureType::Pantun => "pantun"
          , LiteratureType::Cerpen => "cerpen"
          , LiteratureType::Gurindam => "gurindam"
          , LiteratureType::Syair => "syair"
          , LiteratureType::Prosa => "prosa"
        }
    }

    fn display_name(&self) -> &'static str
    {   match self
        {   LiteratureType::Puisi => "Puisi"
          , LiteratureType::Pantun => "Pantun"
          , LiteratureType::Cerpen => "Cerpen"
          , LiteratureType::Gurindam => "Gurindam"
          , LiteratureType::Syair => "Syair"
          , LiteratureType::Prosa => "Prosa"
        }
    }
}

impl Axis for Style
{   const ALL: &'static [Self]
      = &[Style::Klasik, Style::Modern, Style::Kontemporer];
    const DEFAULT: Self = Style::Modern;

    fn slug(&self) -> &'static str
    {   match self
        {   Style::Klasik => "klasik"
          , Style::Modern => "modern"
          , Style::Kontemporer => "kontemporer"
        }
    }

    fn display_name(&self) -> &'static str
    {   match self
        {   Style::Klasik => "Klasik"
          , Style::Modern => "Modern"
          , Style::Kontemporer => "Kontemporer"
        }
    }
}

impl Axis for Mood
{   const ALL: &'static [Self] = &[
      Mood::Romantis
    , Mood::Melankolis
    , Mood::Gembira
    , Mood::Inspiratif
    , Mood::Filosofis
    ];
    const DEFAULT: Self = Mood::Inspiratif;

    fn slug(&self) -> &'static str
    {   match self
        {   Mood::Romantis => "romantis"
          , Mood::Melankolis => "melankolis"
          , Mood::Gembira => "gembira"
          , Mood::Inspiratif => "inspiratif"
          , Mood::Filosofis => "filosofis"
        }
    }

    fn display_name(&self) -> &'static str
    {   match self
        {   Mood::Romantis => "Romantis"
          , Mood::Melankolis => "Melankolis"
          , Mood::Gembira => "Gembira"
          , Mood::Inspiratif => "Inspiratif"
          , Mood::Filosofis => "Filosofis"
        }
    }
}

impl Axis for Length
{   const ALL: &'static [Self]
      = &[Length::Short, Length::Medium, Length::Long];
    const DEFAULT: Self = Length::Medium;

    fn slug(&self) -> &'static str
    {   match self
        {   Length::Short => "short"
          , Length::Medium => "medium"
          , Length::Long => "long"
        }
    }

    fn display_name(&self) -> &'static str
    {   match self
        {   Length::Short => "Pendek"
          , Length::Medium => "Sedang"
          , Length::Long => "Panjang"
        }
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn test_axis_parse_is_case_insensitive()
    {   assert_eq!(
          LiteratureType::parse(" Pantun "),
          Some(LiteratureType::Pantun)
        );
        assert_eq!(Mood::parse("FILOSOFIS"), Some(Mood::Filosofis));
        assert_eq!(Style::parse("barok"), None);
    }

    #[test]
    fn test_axis_defaults()
    {   assert_eq!(
          LiteratureType::parse_or_default("novel"),
          LiteratureType::Puisi
        );
        assert_eq!(Style::parse_or_default(""), Style::Modern);
        assert_eq!(Mood::parse_or_default("marah"), Mood::Inspiratif);
        assert_eq!(Length::parse_or_default("epic"), Length::Medium);
    }

    #[test]
    fn test_provider_priority_starts_with_gemini()
    {   assert_eq!(Provider::PRIORITY[0], Provider::Gemini);
        assert_eq!(
          ModelSource::from(Provider::OpenAI),
          ModelSource::OpenAI
        );
        assert_eq!(
          serde_json::to_string(&ModelSource::Sample).unwrap(),
          "\"sample\""
        );
    }
}

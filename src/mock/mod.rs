//! Offline fallbacks for both endpoints. Fully deterministic.

pub mod samples;

use log::debug;

use crate::mood;
use crate::request::{AnalysisResult, FigurativeLanguage, GenerationRequest};
use crate::rules::{first_predicate, PredicateRule};
use crate::{Axis, LiteratureType, Mood};

pub const MOCK_ANALYSIS_SCORE: u8 = 75;

/// Title and body produced without a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockWork
{   pub title: String
  , pub content: String
}

fn capitalize(s: &str) -> String
{   let mut chars = s.chars();
    match chars.next()
    {   Some(first) => first.to_uppercase().chain(chars).collect()
      , None => String::new()
    }
}

/// Pick a curated sample by form and effective mood. The title is the
/// caller's own theme so the result still reads as relevant.
pub fn mock_generation(request: &GenerationRequest) -> MockWork
{   let kind = match LiteratureType::parse(&request.literature_type)
    {   Some(kind) => kind
      , None => return generic_work(request)
    };

    let effective = mood::effective_mood(
      &request.theme
    , Mood::parse(&request.mood)
    );
    let table = samples::samples_for(kind);

    let chosen = effective
      .and_then(|m| table.iter().find(|(sample_mood, _)| *sample_mood == m))
      .or_else(|| table.first());

    match chosen
    {   Some((sample_mood, content)) => {
          debug!(
            "Sample work for {} / {} (effective {:?})",
            kind.slug(),
            sample_mood.slug(),
            effective
          );
          MockWork
          {   title: request.theme.clone()
            , content: content.to_string()
          }
        }
      , None => generic_work(request)
    }
}

fn generic_work(request: &GenerationRequest) -> MockWork
{   debug!("No sample for '{}', using generic work", request.literature_type);
    MockWork
    {   title: format!(
          "{} tentang {}",
          capitalize(&request.literature_type),
          request.theme
        )
      , content: format!(
          "Sebuah karya {} yang indah dengan tema \"{}\" dalam gaya {} dan suasana {}.\n\
           \n\
           Untuk menghasilkan karya sastra AI yang sesungguhnya, silakan atur API key pada environment server:\n\
           - GEMINI_API_KEY (gratis dari Google AI Studio)\n\
           - atau OPENAI_API_KEY\n\
           \n\
           Karya ini akan menjadi sangat istimewa dengan sentuhan AI!",
          request.literature_type, request.theme, request.style, request.mood
        )
    }
}

/// Coarse structure of a submitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextShape
{   pub lines: usize
  , pub words: usize
  , pub has_space: bool
}

impl TextShape
{   pub fn of(content: &str) -> Self
    {   TextShape
        {   lines: content.lines().filter(|l| !l.trim().is_empty()).count()
          , words: content.split_whitespace().count()
          , has_space: content.contains(' ')
        }
    }
}

const SHAPE_RULES: &[PredicateRule<TextShape, LiteratureType>] = &[
  PredicateRule
  {   name: "long prose"
    , test: |s| s.words > 200
    , outcome: LiteratureType::Cerpen
  }
, PredicateRule
  {   name: "couplet"
    , test: |s| s.lines == 2
    , outcome: LiteratureType::Gurindam
  }
, PredicateRule
  {   name: "quatrain"
    , test: |s| s.lines == 4 && s.has_space
    , outcome: LiteratureType::Pantun
  }
];

/// Structural guess at the form of `content`.
pub fn guess_type(content: &str) -> LiteratureType
{   first_predicate(SHAPE_RULES, &TextShape::of(content))
      .unwrap_or(LiteratureType::Puisi)
}

/// Generic but complete critique used when no provider answers.
pub fn mock_analysis(content: &str) -> AnalysisResult
{   let shape = TextShape::of(content);
    let kind = guess_type(content);
    debug!(
      "Mock analysis: {} lines, {} words, guessed {}",
      shape.lines,
      shape.words,
      kind.slug()
    );

    AnalysisResult
    {   summary: format!(
          "Karya {} yang menarik dengan {} baris dan {} kata. \
           Karya ini menampilkan gaya penulisan yang khas.",
          kind.slug(), shape.lines, shape.words
        )
      , literature_type: kind.slug().to_string()
      , theme: "Kehidupan dan refleksi".to_string()
      , mood: Mood::Inspiratif.slug().to_string()
      , strengths: vec![
          "Pemilihan kata yang cermat".to_string()
        , "Alur yang mengalir natural".to_string()
        , "Pesan yang jelas tersampaikan".to_string()
        ]
      , improvements: vec![
          "Dapat ditambahkan lebih banyak imaji/citraan".to_string()
        , "Eksplorasi majas untuk memperkaya makna".to_string()
        ]
      , style_analysis: "Gaya penulisan yang sederhana namun bermakna. \
          Penulis menunjukkan pemahaman dasar tentang struktur karya sastra."
          .to_string()
      , figurative_language: vec![FigurativeLanguage
        {   kind: "Personifikasi".to_string()
          , example: "Contoh personifikasi jika ada".to_string()
          , explanation: "Memberikan sifat manusia pada benda/alam".to_string()
        }]
      , rhyme_pattern: (kind == LiteratureType::Pantun)
          .then(|| "a-b-a-b".to_string())
      , overall_score: MOCK_ANALYSIS_SCORE
      , detailed_feedback: "Karya yang baik sebagai permulaan. Terus berlatih \
          dan eksplorasi berbagai gaya penulisan untuk mengembangkan suara unik \
          Anda sebagai penulis. Untuk analisis AI yang lebih mendalam, atur \
          GEMINI_API_KEY atau OPENAI_API_KEY pada server."
          .to_string()
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    fn request(kind: &str, theme: &str, mood: &str) -> GenerationRequest
    {   GenerationRequest
        {   literature_type: kind.to_string()
          , theme: theme.to_string()
          , style: "modern".to_string()
          , mood: mood.to_string()
          , length: Some("short".to_string())
          , additional_instructions: None
        }
    }

    fn sample(kind: LiteratureType, mood: Mood) -> &'static str
    {   samples::samples_for(kind)
          .iter()
          .find(|(m, _)| *m == mood)
          .map(|(_, c)| *c)
          .unwrap()
    }

    #[test]
    fn test_selected_mood_sample_with_theme_title()
    {   let got = mock_generation(&request("pantun", "Persahabatan", "gembira"));
        assert_eq!(got.title, "Persahabatan");
        assert_eq!(
          got.content,
          sample(LiteratureType::Pantun, Mood::Gembira)
        );
    }

    #[test]
    fn test_inferred_mood_overrides_selection()
    {   let got = mock_generation(&request("puisi", "patah hati", "gembira"));
        assert_eq!(
          got.content,
          sample(LiteratureType::Puisi, Mood::Melankolis)
        );
    }

    #[test]
    fn test_missing_mood_falls_back_to_first_sample()
    {   // no melancholic gurindam exists
        let got = mock_generation(&request("gurindam", "kesedihan", "gembira"));
        assert_eq!(
          got.content,
          sample(LiteratureType::Gurindam, Mood::Inspiratif)
        );
        assert_eq!(got.title, "kesedihan");
    }

    #[test]
    fn test_unknown_form_gets_generic_work()
    {   let got = mock_generation(&request("haiku", "Embun", "filosofis"));
        assert_eq!(got.title, "Haiku tentang Embun");
        assert!(got.content.contains("karya haiku"));
        assert!(got.content.contains("\"Embun\""));
        assert!(got.content.contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_mock_generation_is_deterministic()
    {   let req = request("syair", "Laut", "romantis");
        assert_eq!(mock_generation(&req), mock_generation(&req));
    }

    #[test]
    fn test_shape_guesses()
    {   assert_eq!(
          guess_type("Buah delima merah\nDipetik pagi\nSejak berjumpa\nHatiku jatuh"),
          LiteratureType::Pantun
        );
        assert_eq!(
          guess_type("Barang siapa rajin berusaha\nNiscaya berhasil"),
          LiteratureType::Gurindam
        );
        assert_eq!(guess_type(&"kata ".repeat(201)), LiteratureType::Cerpen);
        assert_eq!(
          guess_type("satu\ndua\ntiga"),
          LiteratureType::Puisi
        );
    }

    #[test]
    fn test_mock_analysis_is_complete()
    {   let got = mock_analysis(
          "Buah delima merah merona\nDipetik tangan di pagi hari\n\
           Sejak pertama mata berjumpa\nHatiku telah jatuh padamu"
        );
        assert_eq!(got.literature_type, "pantun");
        assert_eq!(got.rhyme_pattern.as_deref(), Some("a-b-a-b"));
        assert_eq!(got.overall_score, 75);
        assert_eq!(got.strengths.len(), 3);
        assert_eq!(got.figurative_language.len(), 1);
        assert!(got.summary.contains("4 baris"));

        let free = mock_analysis("Sebuah renungan panjang tentang pagi yang tenang");
        assert_eq!(free.literature_type, "puisi");
        assert_eq!(free.rhyme_pattern, None);
    }
}

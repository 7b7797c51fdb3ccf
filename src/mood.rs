//! Mood inference from the free-text theme.
//!
//! Melancholic phrases are checked before anything else so that a
//! theme such as "cinta yang hilang" is not read as romantic just
//! because it contains "cinta".

use crate::rules::{first_match, KeywordRule};
use crate::Mood;

pub const MOOD_RULES: &[KeywordRule<Mood>] = &[
  KeywordRule
  {   keywords: &[
        "cinta hilang", "cinta yang hilang", "patah hati",
        "hati yang luka", "kehilangan cinta", "ditinggal pergi",
        "cinta pergi", "hati yang sepi",
      ]
    , outcome: Mood::Melankolis
  }
, KeywordRule
  {   keywords: &[
        "hilang", "pergi", "kehilangan", "sedih", "duka", "patah",
        "luka", "air mata", "tangis", "sepi", "sunyi", "mati",
        "kematian", "perpisahan", "ditinggal", "sendiri", "galau",
        "putus", "broken", "lost", "hancur", "berakhir",
      ]
    , outcome: Mood::Melankolis
  }
, KeywordRule
  {   keywords: &[
        "cinta", "kasih", "sayang", "rindu", "kekasih", "jatuh cinta",
        "asmara", "romantis", "peluk", "hati", "jodoh", "pasangan",
        "bersama", "love",
      ]
    , outcome: Mood::Romantis
  }
, KeywordRule
  {   keywords: &[
        "semangat", "bangkit", "sukses", "impian", "mimpi", "harapan",
        "perjuangan", "motivasi", "inspirasi", "berani", "kuat",
        "pantang menyerah", "masa depan",
      ]
    , outcome: Mood::Inspiratif
  }
, KeywordRule
  {   keywords: &[
        "bahagia", "senang", "sukacita", "ceria", "tawa", "riang",
        "gembira", "perayaan", "syukur", "beruntung",
      ]
    , outcome: Mood::Gembira
  }
, KeywordRule
  {   keywords: &[
        "hidup", "kehidupan", "waktu", "makna", "tujuan", "eksistensi",
        "alam", "semesta", "kematian", "keabadian", "refleksi",
        "perenungan",
      ]
    , outcome: Mood::Filosofis
  }
];

/// Infer a mood from `theme`, or `None` to keep the caller's choice.
pub fn classify(theme: &str) -> Option<Mood>
{   first_match(MOOD_RULES, theme)
}

/// Inferred mood if any, else whatever the caller selected.
pub fn effective_mood(theme: &str, selected: Option<Mood>) -> Option<Mood>
{   classify(theme).or(selected)
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn test_phrase_beats_romantic_keyword()
    {   assert_eq!(classify("cinta yang hilang"), Some(Mood::Melankolis));
        assert_eq!(classify("Patah Hati"), Some(Mood::Melankolis));
    }

    #[test]
    fn test_single_keywords()
    {   assert_eq!(classify("aku sangat bahagia"), Some(Mood::Gembira));
        assert_eq!(classify("jatuh cinta"), Some(Mood::Romantis));
        assert_eq!(classify("meraih impian"), Some(Mood::Inspiratif));
        assert_eq!(classify("makna keberadaan"), Some(Mood::Filosofis));
    }

    #[test]
    fn test_no_match_keeps_selection()
    {   assert_eq!(classify("warna baju"), None);
        assert_eq!(classify("Persahabatan"), None);
        assert_eq!(
          effective_mood("warna baju", Some(Mood::Gembira)),
          Some(Mood::Gembira)
        );
        assert_eq!(
          effective_mood("kesedihan", Some(Mood::Gembira)),
          Some(Mood::Melankolis)
        );
    }
}

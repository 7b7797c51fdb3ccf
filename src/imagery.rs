//! Imagery suggestions injected into the prompt when the caller wrote
//! a free-text description.

use crate::rules::{first_match, KeywordRule};

const DISTANCE_AND_SILENCE: &str = "\
- Tatapan dari kejauhan, bayangan yang tak tergapai
- Kata-kata yang tertelan, bibir yang terkunci
- Jarak yang terasa seperti lautan
- Rindu yang hanya bisa dipendam
- Harapan yang disimpan dalam hati";

const LONGING_AND_DEPARTURE: &str = "\
- Kenangan yang melintas seperti angin
- Jejak langkah yang tertinggal
- Ruang kosong yang tak terisi
- Waktu yang berjalan tanpa kehadiran
- Bayang-bayang yang tak kunjung pudar";

const HEARTBREAK_AND_LOSS: &str = "\
- Serpihan yang tak bisa disatukan
- Air mata yang mengering
- Luka yang perlahan sembuh
- Malam yang terasa panjang
- Pagi yang datang dengan harapan baru";

const IMAGERY_RULES: &[KeywordRule<&str>] = &[
  KeywordRule
  {   keywords: &["jauh", "diam", "tak mampu"]
    , outcome: DISTANCE_AND_SILENCE
  }
, KeywordRule
  {   keywords: &["rindu", "pergi"]
    , outcome: LONGING_AND_DEPARTURE
  }
, KeywordRule
  {   keywords: &["patah", "sedih", "kehilangan"]
    , outcome: HEARTBREAK_AND_LOSS
  }
];

/// Pick an imagery block for `description`. Never empty: with no
/// keyword hit the description itself is echoed back as the hint.
/// `theme` is accepted alongside so callers pass both directives, but
/// only the description drives the choice.
pub fn suggest(description: &str, _theme: &str) -> String
{   match first_match(IMAGERY_RULES, description)
    {   Some(block) => block.to_string()
      , None => format!(
          "- Imaji yang sesuai dengan: \"{}\"\n\
           - Metafora alam yang relevan\n\
           - Perasaan mendalam yang tersirat",
          description
        )
    }
}

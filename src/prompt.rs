//! Prompt composition for the generation, title and analysis calls.
//!
//! Everything here is deterministic: the same request always yields
//! the same prompt bytes.

use crate::imagery;
use crate::request::GenerationRequest;
use crate::templates;

pub const GENERATION_SYSTEM: &str = "Anda adalah asisten penulisan sastra Indonesia yang ahli dan berbakat. Hasilkan karya sastra berkualitas tinggi, orisinal, dan menyentuh hati dalam bahasa Indonesia yang indah.";

pub const ANALYSIS_SYSTEM: &str = "Anda adalah kritikus sastra Indonesia yang ahli. Berikan analisis dalam format JSON yang valid.";

/// Build the instruction string for one generation request.
pub fn build_generation_prompt(request: &GenerationRequest) -> String
{   let fragments = templates::fragments(
      &request.literature_type
    , &request.style
    , &request.mood
    , request.length_or_empty()
    );
    let description = request.description();

    let mut out = String::with_capacity(4096);
    for fragment in [
      fragments.craft
    , fragments.style
    , fragments.mood
    , fragments.length
    ]
    {   out.push_str(fragment);
        out.push_str("\n\n");
    }

    match description
    {   Some(desc) => {
          out.push_str("===== DESKRIPSI SPESIFIK =====\n");
          out.push_str("FOKUS UTAMA KARYA (WAJIB):\n\"");
          out.push_str(desc);
          out.push_str("\"\n\nTema umum: ");
          out.push_str(&request.theme);
          out.push_str(
            "\n\nPENTING: Karya yang Anda buat harus 100% menggambarkan \
             situasi di atas. Setiap baris, setiap kata, setiap imaji \
             HARUS secara langsung mengekspresikan perasaan/situasi \
             tersebut.\n\n"
          );

          out.push_str("===== CONTOH IMAJI YANG RELEVAN =====\n");
          out.push_str(&imagery::suggest(desc, &request.theme));
          out.push_str("\n\n");
        }
      , None => {
          out.push_str("===== TEMA =====\n");
          out.push_str("TEMA UTAMA KARYA (WAJIB):\n\"");
          out.push_str(&request.theme);
          out.push_str(
            "\"\n\nKarya yang Anda buat harus sepenuhnya mengeksplorasi \
             tema ini dari berbagai sudut pandang yang menyentuh.\n\n"
          );
        }
    }

    out.push_str("===== FORMAT OUTPUT =====\n");
    out.push_str(
      "Berikan HANYA karya sastra saja. Tanpa judul, tanpa penjelasan, \
       tanpa komentar. Jangan bungkus karya dengan markdown.\n\n"
    );

    out.push_str("===== ATURAN KETAT =====\n");
    let focus = match description
    {   Some(desc) => format!("1. Fokus pada: \"{}\"\n", desc)
      , None => format!("1. Fokus pada tema: \"{}\"\n", request.theme)
    };
    out.push_str(&focus);
    out.push_str(
      "2. Gunakan imaji dan metafora yang LANGSUNG terkait dengan fokus di atas\n\
       3. JANGAN membuat karya generik - harus SPESIFIK sesuai instruksi\n\
       4. Setiap bait harus mengeksplorasi aspek berbeda dari fokus utama\n\
       5. Buat pembaca MERASAKAN emosi yang digambarkan\n\
       6. Bahasa Indonesia yang indah, natural, dan menyentuh\n\n"
    );

    out.push_str("MULAI BERKARYA:");
    out
}

/// Short follow-up prompt asking only for a title.
pub fn build_title_prompt(literature_type: &str, theme: &str) -> String
{   format!(
      "Berikan HANYA judul singkat (2-5 kata) yang RELEVAN dengan tema: \"{theme}\"\n\
       \n\
       Judul harus:\n\
       - Mencerminkan tema \"{theme}\"\n\
       - Puitis dan indah\n\
       - Cocok untuk karya {literature_type}\n\
       \n\
       HANYA berikan judul, tanpa penjelasan, tanpa tanda kutip."
    )
}

/// Critique prompt; the model is asked for a single JSON object.
pub fn build_analysis_prompt(
  content: &str
, literature_type: Option<&str>
) -> String
{   let kind_line = match literature_type.filter(|t| !t.trim().is_empty())
    {   Some(kind) => format!("Jenis sastra: {}", kind)
      , None => "Identifikasi jenis sastranya terlebih dahulu.".to_string()
    };

    format!(
      "Anda adalah seorang kritikus sastra Indonesia yang berpengalaman dan ahli dalam menganalisis berbagai bentuk karya sastra.

Analisis karya sastra berikut secara mendalam dan komprehensif:

===== KARYA YANG AKAN DIANALISIS =====
{content}
=====================================

{kind_line}

Berikan analisis dalam format JSON yang VALID dengan struktur berikut (HANYA JSON, tanpa penjelasan tambahan):

{{
    \"summary\": \"Ringkasan singkat tentang karya ini dalam 2-3 kalimat\",
    \"literatureType\": \"Jenis sastra (puisi/pantun/cerpen/gurindam/syair/prosa)\",
    \"theme\": \"Tema utama karya\",
    \"mood\": \"Suasana/mood karya (romantis/melankolis/gembira/inspiratif/filosofis)\",
    \"strengths\": [\"Kekuatan 1\", \"Kekuatan 2\", \"Kekuatan 3\"],
    \"improvements\": [\"Saran perbaikan 1\", \"Saran perbaikan 2\"],
    \"styleAnalysis\": \"Analisis gaya penulisan dalam 2-3 kalimat\",
    \"figurativeLanguage\": [
        {{
            \"type\": \"Jenis majas/gaya bahasa\",
            \"example\": \"Contoh dari karya\",
            \"explanation\": \"Penjelasan singkat\"
        }}
    ],
    \"rhymePattern\": \"Pola rima jika ada (contoh: a-b-a-b)\",
    \"overallScore\": 85,
    \"detailedFeedback\": \"Umpan balik mendetail untuk penulis dalam 3-4 kalimat yang membangun dan positif\"
}}

PENTING:
- Berikan skor 1-100 berdasarkan kualitas keseluruhan
- Bersikaplah konstruktif dan positif dalam memberikan feedback
- Identifikasi minimal 2 majas/gaya bahasa jika ada
- Pastikan output adalah JSON yang valid
"
    )
}

#[cfg(test)]
mod tests
{   use super::*;
    use crate::{Axis, Length, LiteratureType, Mood, Style};

    fn request(theme: &str, desc: Option<&str>) -> GenerationRequest
    {   GenerationRequest
        {   literature_type: "puisi".to_string()
          , theme: theme.to_string()
          , style: "modern".to_string()
          , mood: "romantis".to_string()
          , length: Some("short".to_string())
          , additional_instructions: desc.map(str::to_string)
        }
    }

    #[test]
    fn test_theme_is_the_directive_without_description()
    {   let prompt = build_generation_prompt(&request("Senja di Kota", None));
        assert!(prompt.contains("TEMA UTAMA KARYA (WAJIB):\n\"Senja di Kota\""));
        assert!(!prompt.contains("CONTOH IMAJI"));
        assert!(prompt.ends_with("MULAI BERKARYA:"));
    }

    #[test]
    fn test_description_takes_over_and_brings_imagery()
    {   let prompt = build_generation_prompt(
          &request("Cinta", Some("memandangnya dari jauh"))
        );
        assert!(prompt.contains("FOKUS UTAMA KARYA (WAJIB):\n\"memandangnya dari jauh\""));
        assert!(prompt.contains("Tema umum: Cinta"));
        assert!(prompt.contains("Tatapan dari kejauhan"));
        assert!(prompt.contains("1. Fokus pada: \"memandangnya dari jauh\""));
    }

    #[test]
    fn test_sections_follow_fixed_order()
    {   let prompt = build_generation_prompt(
          &request("Hujan", Some("menunggu di halte"))
        );
        let pos = |needle: &str| prompt.find(needle).unwrap();
        assert!(pos("penyair Indonesia") < pos("gaya bahasa modern"));
        assert!(pos("gaya bahasa modern") < pos("suasana romantis"));
        assert!(pos("suasana romantis") < pos("singkat namun padat"));
        assert!(pos("singkat namun padat") < pos("DESKRIPSI SPESIFIK"));
        assert!(pos("DESKRIPSI SPESIFIK") < pos("CONTOH IMAJI"));
        assert!(pos("CONTOH IMAJI") < pos("FORMAT OUTPUT"));
        assert!(pos("FORMAT OUTPUT") < pos("ATURAN KETAT"));
    }

    #[test]
    fn test_every_combination_carries_the_theme()
    {   let descriptions = [None, Some("rindu pada rumah masa kecil")];
        for description in descriptions
        {   for kind in LiteratureType::ALL
            {   for style in Style::ALL
                {   for mood in Mood::ALL
                    {   for length in Length::ALL
                        {   let req = GenerationRequest
                            {   literature_type: kind.slug().to_string()
                              , theme: "Tema Uji".to_string()
                              , style: style.slug().to_string()
                              , mood: mood.slug().to_string()
                              , length: Some(length.slug().to_string())
                              , additional_instructions: description
                                  .map(str::to_string)
                            };
                            let prompt = build_generation_prompt(&req);
                            assert!(prompt.contains("Tema Uji"));
                            assert!(prompt.contains(
                              templates::craft_instructions(*kind)
                            ));
                            match description
                            {   Some(desc) => assert!(
                                  prompt.contains(&format!("\"{}\"", desc))
                                )
                              , None => assert!(
                                  prompt.contains("\"Tema Uji\"")
                                )
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_prompt_is_idempotent()
    {   let req = request("Laut", Some("ombak yang pergi"));
        assert_eq!(
          build_generation_prompt(&req),
          build_generation_prompt(&req)
        );
    }

    #[test]
    fn test_title_prompt_names_theme_and_form()
    {   let prompt = build_title_prompt("pantun", "Persahabatan");
        assert!(prompt.contains("tema: \"Persahabatan\""));
        assert!(prompt.contains("Cocok untuk karya pantun"));
    }

    #[test]
    fn test_analysis_prompt_kind_hint()
    {   let hinted = build_analysis_prompt("isi karya", Some("syair"));
        assert!(hinted.contains("Jenis sastra: syair"));
        let open = build_analysis_prompt("isi karya", None);
        assert!(open.contains("Identifikasi jenis sastranya"));
        assert!(open.contains("\"overallScore\": 85"));
    }
}

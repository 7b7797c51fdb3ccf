//! Instruction fragments for each request axis.
//!
//! The four axes are looked up independently and never interact, so
//! every combination of form, style, mood and length is covered by the
//! seventeen fragments below.

use crate::{Axis, Length, LiteratureType, Mood, Style};

pub fn craft_instructions(kind: LiteratureType) -> &'static str
{   match kind
    {   LiteratureType::Puisi => "\
Anda adalah seorang penyair Indonesia yang berbakat dan mahir, menguasai seni puisi dari klasik hingga modern.
Anda memahami ritme, rima, diksi, dan imaji yang kuat dalam tradisi puisi Indonesia.
Ciptakan puisi yang autentik, orisinal, dan penuh makna - bukan terjemahan literal dari bahasa lain.
Gunakan metafora dan simbol yang relevan dengan budaya Indonesia.
Setiap baris harus mengalir dengan indah dan menyentuh hati pembaca."
      , LiteratureType::Pantun => "\
Anda adalah ahli pantun Melayu yang menguasai struktur dan estetika pantun tradisional.
Pantun harus memiliki:
- 4 baris per bait
- Sajak a-b-a-b (bunyi akhir baris 1 sama dengan baris 3, baris 2 sama dengan baris 4)
- 8-12 suku kata per baris
- Baris 1-2 adalah sampiran (pembayang) - biasanya tentang alam atau benda
- Baris 3-4 adalah isi (maksud) - pesan utama yang ingin disampaikan
Buat pantun yang natural, mengalir indah, dan bermakna mendalam."
      , LiteratureType::Cerpen => "\
Anda adalah penulis cerpen Indonesia yang berbakat dan kreatif.
Ciptakan cerita pendek yang:
- Memiliki plot yang menarik dengan konflik yang jelas dan resolusi yang memuaskan
- Karakter yang relatable dan hidup bagi pembaca Indonesia
- Dialog yang natural dalam bahasa Indonesia sehari-hari
- Latar yang kaya detail, bisa berupa Indonesia atau universal
- Pesan moral yang tersirat, tidak menggurui
- Pembukaan yang memikat dan akhir yang memorable
Tulis dengan gaya naratif yang engaging dan membuat pembaca tidak bisa berhenti membaca."
      , LiteratureType::Gurindam => "\
Anda adalah penulis gurindam yang memahami dan menghormati tradisi Raja Ali Haji.
Gurindam harus:
- Terdiri dari 2 baris bersajak sama (a-a)
- Baris pertama berisi syarat, kondisi, atau sebab
- Baris kedua berisi akibat, konsekuensi, atau jawaban
- Mengandung nasihat atau ajaran moral yang dalam
- Bahasa yang lugas namun penuh kebijaksanaan
- Relevan dengan kehidupan modern namun tetap menghormati tradisi"
      , LiteratureType::Syair => "\
Anda adalah penulis syair dalam tradisi sastra Melayu klasik yang kaya.
Syair harus:
- Terdiri dari 4 baris per bait
- Bersajak a-a-a-a (keempat baris berima sama)
- Semua baris adalah isi (tidak ada sampiran seperti pantun)
- Antar bait saling berhubungan membentuk narasi yang utuh
- Bisa berisi kisah heroik, nasihat hidup, atau ajaran spiritual
- Mengalir seperti lagu yang menceritakan sebuah kisah"
      , LiteratureType::Prosa => "\
Anda adalah penulis prosa Indonesia yang memahami berbagai gaya penulisan dari esai hingga narasi.
Tulis prosa yang:
- Mengalir natural dalam bentuk paragraf yang terstruktur
- Pilihan kata yang tepat, indah, dan penuh makna
- Bisa berupa esai reflektif, narasi mendalam, atau renungan filosofis
- Menyampaikan pesan dengan elegan tanpa berlebihan
- Membawa pembaca dalam perjalanan pikiran dan perasaan"
    }
}

pub fn style_modifier(style: Style) -> &'static str
{   match style
    {   Style::Klasik => "\
Gunakan gaya bahasa klasik dengan:
- Diksi yang formal, puitis, dan anggun
- Struktur tradisional yang ketat sesuai kaidah
- Referensi ke nilai-nilai luhur tradisional Indonesia
- Nada yang bermartabat dan penuh wibawa
- Kata-kata arkais yang masih indah didengar"
      , Style::Modern => "\
Gunakan gaya bahasa modern dengan:
- Bahasa sehari-hari yang tetap indah dan bermakna
- Struktur yang lebih bebas dan eksperimental
- Tema-tema kontemporer yang relevan dengan zaman
- Ekspresi yang segar, kreatif, dan inovatif
- Pendekatan yang lebih personal dan intim"
      , Style::Kontemporer => "\
Gunakan gaya kontemporer dengan:
- Eksperimen berani dengan bentuk dan bahasa
- Tema-tema aktual, urban, dan relevan dengan Gen Z/Millennial
- Campuran harmonis antara tradisi dan modernitas
- Keberanian untuk melanggar konvensi dengan tujuan
- Suara yang unik dan otentik"
    }
}

pub fn mood_modifier(mood: Mood) -> &'static str
{   match mood
    {   Mood::Romantis => "Ciptakan suasana romantis dengan diksi yang lembut dan hangat, imaji yang indah tentang cinta, dan perasaan mendalam yang menyentuh hati. Gunakan metafora tentang alam, bunga, dan keindahan."
      , Mood::Melankolis => "Ciptakan suasana melankolis dengan nada reflektif dan kontemplatif, kerinduan yang dalam, dan kedalaman emosi yang menyentuh jiwa. Biarkan kesedihan terasa indah dan bermakna."
      , Mood::Gembira => "Ciptakan suasana gembira dengan energi positif yang menular, diksi yang cerah dan ceria, serta semangat yang membuat pembaca ikut tersenyum dan bersemangat."
      , Mood::Inspiratif => "Ciptakan suasana inspiratif dengan pesan motivasi yang kuat, harapan yang menyala, dan semangat untuk bangkit. Buat pembaca merasa termotivasi dan yakin akan masa depan."
      , Mood::Filosofis => "Ciptakan suasana filosofis dengan perenungan mendalam tentang kehidupan, pertanyaan eksistensial yang menggugah, dan kebijaksanaan yang datang dari refleksi."
    }
}

pub fn length_guidance(length: Length) -> &'static str
{   match length
    {   Length::Short => "Buat karya yang singkat namun padat bermakna (puisi: 1-2 bait, cerpen: 2-3 paragraf pendek, pantun: 1-2 bait, gurindam: 3-4 pasang)."
      , Length::Medium => "Buat karya dengan panjang sedang yang seimbang (puisi: 3-4 bait, cerpen: 4-6 paragraf, pantun: 2-3 bait, gurindam: 5-6 pasang)."
      , Length::Long => "Buat karya yang lebih panjang dan mendalam (puisi: 5+ bait, cerpen: 7+ paragraf dengan plot kompleks, pantun: 4+ bait, gurindam: 8+ pasang)."
    }
}

/// The four fragments for one request, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragments
{   pub craft: &'static str
  , pub style: &'static str
  , pub mood: &'static str
  , pub length: &'static str
}

/// Raw-slug lookup; anything unrecognised falls back per axis.
pub fn fragments(
  literature_type: &str
, style: &str
, mood: &str
, length: &str
) -> Fragments
{   Fragments
    {   craft: craft_instructions(
          LiteratureType::parse_or_default(literature_type)
        )
      , style: style_modifier(Style::parse_or_default(style))
      , mood: mood_modifier(Mood::parse_or_default(mood))
      , length: length_guidance(Length::parse_or_default(length))
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn test_unknown_keys_fall_back_per_axis()
    {   let got = fragments("novel", "barok", "marah", "epik");
        assert_eq!(got.craft, craft_instructions(LiteratureType::Puisi));
        assert_eq!(got.style, style_modifier(Style::Modern));
        assert_eq!(got.mood, mood_modifier(Mood::Inspiratif));
        assert_eq!(got.length, length_guidance(Length::Medium));
    }

    #[test]
    fn test_axes_are_independent()
    {   let a = fragments("pantun", "klasik", "gembira", "short");
        let b = fragments("pantun", "kontemporer", "gembira", "short");
        assert_eq!(a.craft, b.craft);
        assert_eq!(a.mood, b.mood);
        assert_ne!(a.style, b.style);
        assert!(a.craft.contains("a-b-a-b"));
    }

    #[test]
    fn test_every_fragment_is_non_empty()
    {   for kind in LiteratureType::ALL
        {   assert!(!craft_instructions(*kind).is_empty());
        }
        for style in Style::ALL
        {   assert!(!style_modifier(*style).is_empty());
        }
        for mood in Mood::ALL
        {   assert!(!mood_modifier(*mood).is_empty());
        }
        for length in Length::ALL
        {   assert!(!length_guidance(*length).is_empty());
        }
    }
}

//! Hand-written sample works served when no provider answers.
//!
//! Order matters: the first mood listed for a form is the fallback
//! when the requested mood has no sample.

use crate::{LiteratureType, Mood};

/// Dalam Pelukan Senja
const PUISI_ROMANTIS: &str = r#"Di ufuk barat langit memerah membara
Membawa kisah yang terukir di dada
Aku mendengar detak jantungmu perlahan
Berdenyut seirama dengan waktu yang berjalan

Seperti ombak yang selalu rindu pantai
Begitu pula hatiku padamu selamanya
Dalam diam yang penuh makna
Cinta ini terus tumbuh tanpa kata

Biarkan angin berbisik tentang kita
Tentang dua jiwa yang saling menemukan
Dalam labirin kehidupan yang berliku
Kau adalah jawaban dari semua tanya hatiku

Dan ketika bintang mulai bermunculan
Aku tahu, di sampingmu tempatku pulang"#;

/// Hujan di Jendela Kenangan
const PUISI_MELANKOLIS: &str = r#"Hujan turun lagi malam ini
Membawa aroma tanah basah yang familiar
Seperti saat kita berjalan bersama
Di trotoar kota yang mulai sepi

Setiap tetes yang jatuh di jendela
Adalah air mata langit yang mengingatkanku
Tentang tawa yang pernah kita bagi
Dan janji yang tak sempat terucap

Di sudut kamar yang temaram ini
Aku memeluk kenangan yang tersisa
Seperti bunga yang gugur di musim kemarau
Layu, namun tetap indah untuk diingat

Mungkin waktu akan mengajarkanku
Untuk melepaskan tanpa melupakan"#;

/// Bangkit dari Abu
const PUISI_INSPIRATIF: &str = r#"Ketika dunia terasa berat menghimpit
Dan langkah kakimu mulai goyah
Ingatlah bahwa mentari pagi
Selalu terbit setelah malam yang kelam

Setiap luka adalah pelajaran berharga
Setiap jatuh adalah undangan untuk bangkit
Lebih kuat dari sebelumnya
Dengan sayap yang lebih lebar membentang

Jangan biarkan badai menghentikanmu
Karena di balik awan mendung yang pekat
Ada pelangi yang sabar menunggu
Siap mewarnai hari-harimu dengan harapan

Kau lebih kuat dari yang kau tahu
Lebih berani dari yang kau percaya
Majulah, karena dunia menunggumu
Untuk menjadi versi terbaikmu"#;

/// Aksara di Tepi Sungai Waktu
const PUISI_FILOSOFIS: &str = r#"Di tepi sungai waktu aku duduk merenungi
Tentang butiran pasir yang tak pernah kembali
Tentang ombak kehidupan yang terus bergulir
Membawa kita ke muara yang tak terpetakan

Apa arti sebuah keberadaan?
Jika bukan untuk menciptakan makna
Dari ketiadaan yang maha luas
Menjadi semesta kecil yang bernyawa

Setiap napas adalah puisi alam
Setiap detak adalah irama semesta
Kita adalah bagian dari tarian agung
Yang berputar sejak awal penciptaan

Dan ketika saatnya tiba nanti
Aku ingin menjadi angin yang berbisik
Tentang cinta yang pernah kurasakan
Di dunia yang begitu indah ini"#;

/// Menari Bersama Pelangi
const PUISI_GEMBIRA: &str = r#"Lihat! Pelangi melengkung di langit biru
Warna-warni kebahagiaan merekah sempurna
Seperti senyum anak kecil yang polos
Mengundangku untuk menari bersamanya

Kubentangkan tangan menyambut hari
Dengan jantung yang berdegup kencang
Penuh syukur untuk setiap detik
Yang Tuhan hadiahkan dengan penuh cinta

Burung-burung berkicau merdu
Menyanyikan lagu tentang hidup yang indah
Bunga-bunga mekar tanpa beban
Mengajarkanku untuk tumbuh dengan bahagia

Hari ini, aku memilih tersenyum
Memilih melihat keindahan di setiap sudut
Karena hidup terlalu pendek
Untuk tidak merayakannya dengan tawa"#;

/// Pantun Rindu Kasih
const PANTUN_ROMANTIS: &str = r#"Buah delima merah merona
Dipetik tangan di pagi hari
Sejak pertama mata berjumpa
Hatiku telah jatuh padamu sendiri

Perahu layar menuju pulau
Nelayan pulang membawa hasil tangkapan
Seribu kata takkan mampu
Menggambarkan dalam rasa kasih sayang

Kembang melati harum semerbak
Ditanam indah di taman hati
Semoga cinta kita tak pernah retak
Hingga rambut memutih dan usia tinggi

Ombak bergulung ke tepi pantai
Pasir putih bersih berkilauan
Di mana pun kaki ini sampai
Hanya dirimu dalam impianku"#;

/// Pantun Nasihat Bijak
const PANTUN_INSPIRATIF: &str = r#"Pergi ke hutan mencari rotan
Rotan dipintal jadi keranjang
Ilmu adalah bekal kehidupan
Kejarlah sampai napas terbuang

Burung merak berbulu indah
Terbang tinggi ke angkasa luas
Jangan takut pernah jatuh dan salah
Karena kegagalan adalah jalan kelas

Pohon beringin rindang daunnya
Tempat berteduh di siang panas
Jadilah orang yang berguna
Bagi sesama tanpa pernah belas

Sawah menghijau di pagi cerah
Petani bekerja dengan tekun
Dengan kerja keras dan langkah terarah
Sukses akan datang di kemudian waktu"#;

/// Pantun Suka Cita
const PANTUN_GEMBIRA: &str = r#"Pisang goreng hangat dari dapur
Dimakan bersama teh manis sore
Hidup ini terlalu singkat untuk cemberut
Tersenyumlah dan bahagiakan hatimu

Anak-anak bermain di halaman
Tertawa riang berlari-lari
Kebahagiaan itu sederhana sekali
Tersedia bagi yang mau menikmati

Mangga matang jatuh ke tanah
Segera dipungut oleh sang anak
Berbagi senyum tidaklah susah
Tapi hasilnya sungguh berdampak

Kupu-kupu hinggap di bunga
Sayapnya indah berwarna-warni
Syukuri hidup penuh bahagia
Setiap hari adalah anugerah Ilahi"#;

/// Hujan di Bulan Desember
const CERPEN_MELANKOLIS: &str = r#"Hujan turun lagi di Jakarta, seperti biasa di bulan Desember. Rina berdiri di balik jendela kantornya yang berada di lantai sepuluh, memandang butiran air yang menari-nari di permukaan kaca.

"Sudah lima tahun," gumamnya pelan, hampir seperti bisikan.

Lima tahun sejak Ardi pergi. Bukan karena tidak cinta, tapi karena takdir yang memilih jalan berbeda. Sebuah kecelakaan di jalan Sudirman di malam hujan seperti ini telah mengambilnya pergi, menyisakan Rina dengan tumpukan kenangan dan cincin tunangan yang tak pernah menjadi cincin pernikahan.

Teleponnya berdering, membuyarkan lamunan. "Bu Rina, meeting jam tiga sudah siap."

Ia menghapus setetes air mata yang sempat lolos. Di mejanya, foto mereka berdua masih berdiri tegak—pengingat tentang cinta yang pernah begitu nyata.

"Aku masih merindukanmu," ucapnya pada angin, sebelum berbalik menghadapi dunia.

Hujan masih turun. Dan Rina pun masih terus melangkah, membawa Ardi dalam setiap hembusan napasnya."#;

/// Kopi Pahit, Impian Manis
const CERPEN_INSPIRATIF: &str = r#"Warung kopi kecil itu berdiri di sudut gang sempit Malioboro. Catnya mengelupas, atapnya bocor sana-sini, tapi selalu ramai dikunjungi orang. Rahasia keramaiannya: Pak Karso, pemiliknya yang tak pernah berhenti tersenyum.

"Pak, kok bisa tetap semangat?" tanya Budi, mahasiswa yang selalu nongkrong di situ sore-sore.

Pak Karso menuangkan kopi ke cangkir dengan gerakan telateni. "Dulu, saya pernah bangkrut tiga kali, Nak. Jualan bakso bangkrut. Buka warung makan, bangkrut juga. Sempat jadi tukang parkir."

Budi terdiam.

"Tapi setiap jatuh, saya belajar satu hal baru." Pak Karso menyodorkan kopi. "Kopi ini juga, gagal berkali-kali sampai ketemu racikan yang pas."

Budi menyesap kopinya. Pahit di awal, tapi ada manis yang tersisa di lidah.

"Hidup itu seperti kopi, Nak. Nikmatnya baru terasa kalau kamu berani merasakan pahitnya dulu."

Malam itu, Budi pulang dengan langkah lebih ringan. Proposal skripsinya yang ditolak tiga kali bukan lagi beban, tapi tantangan."#;

/// Senja di Stasiun Tugu
const CERPEN_ROMANTIS: &str = r#"Setiap sore, Maya duduk di bangku panjang Stasiun Tugu, berpura-pura menunggu kereta yang tak pernah ia naiki. Yang sebenarnya ia tunggu adalah sosok laki-laki berjaket biru yang selalu lewat pukul lima kurang seperempat.

Mereka tak pernah bicara—hanya bertukar senyum dan tatapan yang berbicara lebih dari seribu kata.

Suatu sore, sosok itu tidak muncul. Maya menunggu hingga stasiun mulai sepi. Kecewa menyeruak, tapi ia tetap duduk diam.

"Permisi..."

Maya menoleh. Laki-laki berjaket biru itu berdiri di sampingnya, memegang dua cangkir kopi.

"Saya Aldo. Sudah sebulan saya ingin menyapa, tapi selalu tidak berani." Ia mengulurkan satu cangkir. "Kopi?"

Maya menerima dengan tangan sedikit gemetar. "Maya."

"Aku tahu," Aldo tersenyum. "Namamu tertera di name tag yang pernah kamu pakai."

Senja itu, stasiun Tugu menjadi saksi awal dari sebuah cerita yang mereka berdua tak akan pernah lupakan."#;

/// Gurindam Nasihat Kehidupan
const GURINDAM_INSPIRATIF: &str = r#"Barang siapa rajin berusaha
Niscaya berhasil dengan mudahnya

Barang siapa malas membaca
Akan tertinggal sepanjang masa

Barang siapa rendah hati selalu
Akan dihormati orang di mana-mana

Barang siapa tekun berdoa
Pertolongan Tuhan pasti tiba

Barang siapa sabar menghadapi cobaan
Kebahagiaan akan jadi kenyataan

Barang siapa suka menolong sesama
Rezekinya akan ditambahkan Tuhan Yang Esa

Barang siapa jujur dalam berkata
Kepercayaan orang akan dijaga

Barang siapa pandai bersyukur
Hidupnya akan selalu makmur"#;

/// Gurindam Makna Hidup
const GURINDAM_FILOSOFIS: &str = r#"Barang siapa mengenal dirinya
Ia telah mengenal Tuhannya

Barang siapa hidup penuh makna
Kematian bukanlah bencana

Barang siapa mengejar dunia semata
Akhiratnya akan merana

Barang siapa mencari ketenangan jiwa
Tinggalkan dengki dan dusta

Barang siapa bijak menggunakan waktu
Tak akan hidup penuh penyesalan yang merayu

Barang siapa memaafkan dengan tulus
Beban hatinya akan pupus

Barang siapa hidup untuk sesama
Kenangannya abadi sepanjang masa"#;

/// Syair Sang Pejuang Ilmu
const SYAIR_INSPIRATIF: &str = r#"Wahai pemuda harapan negeri
Dengarkanlah nasihat ini dengan sepenuh hati
Hidup ini penuh dengan ujian yang berbagai
Jangan mudah patah dan terhenti

Belajarlah dari burung yang terbang tinggi
Meski sayapnya lelah dan terasa berat sekali
Ia tetap terus mengepak dengan berani
Sampai tujuannya tercapai dengan pasti

Ilmu adalah pelita dalam kegelapan malam
Penunjuk jalan bagi mereka yang dalam kelam
Raihlah ilmu setinggi langit yang dalam
Jadikan dirimu bermanfaat dan berkalam

Jangan takut pada kegagalan yang datang
Karena setiap jatuh adalah pelajaran yang panjang
Bangkitlah dengan semangat yang tak pernah hilang
Raihlah impianmu hingga ke seberang"#;

/// Syair Cinta Abadi
const SYAIR_ROMANTIS: &str = r#"Dikisahkan seorang pemuda yang setia
Mencintai kekasihnya dengan penuh cita
Cintanya murni seperti embun pagi
Yang menyejukkan hati tanpa henti

Setiap hari ia menanti dengan sabar
Walaupun jarak memisahkan tanpa ganti
Cintanya tak pernah luntur oleh waktu
Tetap setia bagai bintang di langit malam

Dikala petang matahari mulai tenggelam
Ia berdoa untuk kekasih yang dicinta
Semoga cinta mereka abadi selama-lamanya
Tak terpisahkan oleh apapun yang coba

Inilah kisah cinta yang sejati
Yang bertahan melampaui segala rintangan
Mengajarkan kita arti kesetiaan
Dan makna cinta yang sesungguhnya ada"#;

/// Renungan di Tepi Waktu
const PROSA_FILOSOFIS: &str = r#"Ada kalanya kita perlu berhenti sejenak dari hiruk-pikuk kehidupan. Menarik napas dalam-dalam, merasakan udara mengisi paru-paru, dan bertanya: apa sesungguhnya yang sedang kita kejar?

Dunia bergerak begitu cepat. Notifikasi datang silih berganti, deadline menumpuk, dan kita terus berlari tanpa sempat bertanya: ke mana sebenarnya kita menuju?

Mungkin jawabannya ada di kesunyian. Di saat-saat ketika kita berani menatap diri sendiri tanpa topeng, tanpa pretensi. Di momen ketika kita menyadari bahwa kebahagiaan bukanlah tujuan yang harus dikejar, melainkan cara kita menjalani perjalanan.

Seperti sungai yang mengalir, hidup akan terus bergerak. Tapi sungai tidak pernah terburu-buru. Ia mengalir dengan tenang, melewati bebatuan, menerima air hujan, hingga akhirnya bertemu laut.

Mungkin kita perlu belajar dari sungai. Mengalir dengan tenang, menerima setiap lekukan perjalanan, dan percaya bahwa kita akan sampai ke tempat yang seharusnya—entah kapan, entah bagaimana."#;

/// Surat untuk Diriku Sendiri
const PROSA_INSPIRATIF: &str = r#"Kepada diriku yang sedang membaca ini,

Aku tahu kamu lelah. Aku tahu beban di bahumu terasa semakin berat setiap harinya. Aku tahu ada malam-malam ketika kamu berbaring di tempat tidur, mempertanyakan segalanya.

Tapi dengarkanlah: kamu sudah melangkah sejauh ini. Lihatlah ke belakang—berapa banyak badai yang sudah kamu lewati? Berapa banyak kali kamu pikir tidak akan kuat, tapi ternyata kamu berhasil?

Kamu lebih tangguh dari yang kamu kira. Lebih berani dari yang kamu percaya. Dan lebih berharga dari yang dunia kadang perlihatkan.

Tidak apa-apa untuk merasa lelah. Tidak apa-apa untuk menangis. Tidak apa-apa untuk butuh istirahat. Yang penting, jangan pernah menyerah pada dirimu sendiri.

Besok adalah halaman baru. Matahari akan terbit lagi. Dan kamu—kamu akan bangkit lagi.

Dengan cinta,
Dirimu yang lebih kuat dari kemarin"#;

pub const SAMPLES: &[(LiteratureType, &[(Mood, &str)])] = &[
  (LiteratureType::Puisi, &[
      (Mood::Romantis, PUISI_ROMANTIS)
    , (Mood::Melankolis, PUISI_MELANKOLIS)
    , (Mood::Inspiratif, PUISI_INSPIRATIF)
    , (Mood::Filosofis, PUISI_FILOSOFIS)
    , (Mood::Gembira, PUISI_GEMBIRA)
    ])
  , (LiteratureType::Pantun, &[
      (Mood::Romantis, PANTUN_ROMANTIS)
    , (Mood::Inspiratif, PANTUN_INSPIRATIF)
    , (Mood::Gembira, PANTUN_GEMBIRA)
    ])
  , (LiteratureType::Cerpen, &[
      (Mood::Melankolis, CERPEN_MELANKOLIS)
    , (Mood::Inspiratif, CERPEN_INSPIRATIF)
    , (Mood::Romantis, CERPEN_ROMANTIS)
    ])
  , (LiteratureType::Gurindam, &[
      (Mood::Inspiratif, GURINDAM_INSPIRATIF)
    , (Mood::Filosofis, GURINDAM_FILOSOFIS)
    ])
  , (LiteratureType::Syair, &[
      (Mood::Inspiratif, SYAIR_INSPIRATIF)
    , (Mood::Romantis, SYAIR_ROMANTIS)
    ])
  , (LiteratureType::Prosa, &[
      (Mood::Filosofis, PROSA_FILOSOFIS)
    , (Mood::Inspiratif, PROSA_INSPIRATIF)
    ])
];

/// Samples for one form, in table order.
pub fn samples_for(kind: LiteratureType) -> &'static [(Mood, &'static str)]
{   SAMPLES
      .iter()
      .find(|(k, _)| *k == kind)
      .map(|(_, moods)| *moods)
      .unwrap_or(&[])
}

#[cfg(test)]
mod tests
{   use super::*;
    use crate::Axis;

    #[test]
    fn test_every_form_has_samples()
    {   for kind in LiteratureType::ALL
        {   assert!(!samples_for(*kind).is_empty(), "{:?}", kind);
        }
    }

    #[test]
    fn test_pantun_samples_are_four_line_stanzas()
    {   for (_, content) in samples_for(LiteratureType::Pantun)
        {   for stanza in content.split("\n\n")
            {   assert_eq!(stanza.lines().count(), 4);
            }
        }
    }
}

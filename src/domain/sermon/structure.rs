//! Sermon structure value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidStructureError;

/// All available sermon structures
pub const ALL_STRUCTURES: &[SermonStructure] = &[
    SermonStructure::Topical,
    SermonStructure::Exegesis,
    SermonStructure::Textual,
    SermonStructure::Expository,
    SermonStructure::Narrative,
];

/// Rhetorical structure of the requested sermon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SermonStructure {
    #[default]
    Topical,
    Exegesis,
    Textual,
    Expository,
    Narrative,
}

impl SermonStructure {
    /// Get the human-readable label shown in selection lists
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Topical => "Topikal - Tema dengan multi-ayat",
            Self::Exegesis => "Eksegesis - Analisis mendalam teks",
            Self::Textual => "Tekstual - Satu ayat kunci",
            Self::Expository => "Ekspositori - Perikop ayat demi ayat",
            Self::Narrative => "Naratif - Alur cerita Alkitab",
        }
    }

    /// Get the multi-step description injected into the prompt
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Topical => "Fokus pada tema tertentu (misal: kasih, pengampunan) yang didukung oleh multi-ayat dari berbagai kitab. Struktur: (1) Pendahuluan dengan hook berupa pertanyaan reflektif atau pernyataan yang merangsang pemikiran, (2) Definisi dan klarifikasi tema, (3) 3-4 poin utama dengan ayat-ayat pendukung dari berbagai kitab, (4) Ilustrasi personal/kontemporer untuk setiap poin, (5) Aplikasi praktis dalam berbagai konteks kehidupan, (6) Panggilan untuk respons dengan pertanyaan reflektif dan komitmen spesifik.",
            Self::Exegesis => "Analisis mendalam satu teks Alkitab dengan pendalaman bahasa asli, konteks historis, dan struktur sastra. Struktur: (1) Pendahuluan dengan hook berupa pertanyaan tentang makna tersembunyi teks, (2) Penjelasan konteks historis dan latar belakang teks, (3) Analisis kata-kata kunci dalam bahasa Yunani/Ibrani, (4) Eksplorasi implikasi teologis, (5) Ilustrasi dari konteks sejarah atau budaya, (6) Aplikasi kontemporer yang menjembatani gap antara teks kuno dan kehidupan modern, (7) Panggilan untuk merespons kebenaran dengan pertanyaan 'Bagaimana jika...?'",
            Self::Textual => "Menjelaskan satu ayat kunci dengan pendalaman makna dan implikasi. Struktur: (1) Pendahuluan dengan hook berupa sorotan frasa spesifik dalam ayat, (2) Definisi dan klarifikasi konsep utama dalam ayat, (3) Penjelasan simbol, metafora, atau konsep teologis, (4) Komparasi dengan ayat-ayat lain yang menggunakan konsep serupa, (5) Ilustrasi berupa perbandingan budaya atau analogi modern, (6) Aplikasi dengan triplet (kelompok tiga) untuk penekanan, (7) Penutup dengan paradoks spiritual yang memperdalam pemahaman.",
            Self::Expository => "Menjelaskan satu perikop secara sistematis (ayat demi ayat) dengan pendekatan holistik. Struktur: (1) Pendahuluan dengan hook berupa kutipan langsung dari teks yang menantang, (2) Penjelajahan lintas Testament untuk menunjukkan kontinuitas tema, (3) Pembagian perikop menjadi bagian-bagian logis, (4) Analisis mendalam setiap bagian dengan metode 5W+1H, (5) Ilustrasi berupa data atau kisah yang memperkuat penafsiran, (6) Aplikasi praktis yang menunjukkan relevansi abadi dari prinsip alkitabiah, (7) Panggilan untuk tindakan dengan antitesis (kontras) yang jelas.",
            Self::Narrative => "Bercerita dengan alur yang menarik (konflik, klimaks, resolusi) berdasarkan kisah Alkitab. Struktur: (1) Hook berupa narasi dramatis yang mengundang pendengar masuk ke dalam cerita, (2) Penggambaran latar, karakter, dan konflik dalam kisah, (3) Pendalaman dialog dan momen-momen kunci dalam narasi, (4) Klimaks cerita dengan penekanan pada pelajaran spiritual, (5) Ilustrasi visual dan deskriptif yang membuat cerita hidup, (6) Aplikasi dengan mengidentifikasi diri dalam karakter cerita, (7) Panggilan untuk 'menulis bab berikutnya' dalam kehidupan pribadi.",
        }
    }

    /// Get the tag used on the wire and inside the prompt
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Topical => "topical",
            Self::Exegesis => "exegesis",
            Self::Textual => "textual",
            Self::Expository => "expository",
            Self::Narrative => "narrative",
        }
    }
}

impl FromStr for SermonStructure {
    type Err = InvalidStructureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "topical" => Ok(Self::Topical),
            "exegesis" => Ok(Self::Exegesis),
            "textual" => Ok(Self::Textual),
            "expository" => Ok(Self::Expository),
            "narrative" => Ok(Self::Narrative),
            _ => Err(InvalidStructureError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for SermonStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Static prompt template catalog

use super::placeholder::{Placeholder, ALL_PLACEHOLDERS};

const PURPOSE_TEMPLATE: &str = r#"
TUJUAN KOTBAH:
1. Menyampaikan satu kebenaran utama tentang "{topic}"
2. Mendorong perubahan spiritual/perilaku yang konkret
3. Mengaitkan dengan tantangan kontemporer yang relevan
"#;

const BIBLE_RESEARCH_TEMPLATE: &str = r#"
PENELITIAN ALKITAB:
1. Identifikasi 7-10 ayat utama yang mendukung tema
2. Perhatikan pola atau kata kunci yang berulang di ayat-ayat tersebut
3. Sertakan kisah/tokoh Alkitab yang mendemonstrasikan tema ini
"#;

const STRUCTURE_TEMPLATE: &str = r#"
STRUKTUR KOTBAH:
Ikuti struktur {structure} dengan detail sebagai berikut:

1. Judul yang menarik dan menangkap esensi pesan
   - Gunakan judul yang singkat, mudah diingat, dan memicu keingintahuan

2. Daftar ayat-ayat utama yang akan digunakan
   - Jadikan {bibleVerse} sebagai teks acuan utama
   - Sertakan referensi lengkap (kitab, pasal, ayat)

3. Pendahuluan dengan "hook" yang sesuai:
   - Untuk topical: Pertanyaan reflektif atau pernyataan yang merangsang pemikiran
   - Untuk exegesis: Pertanyaan tentang makna tersembunyi teks
   - Untuk narrative: Narasi dramatis yang mengundang pendengar masuk ke dalam cerita
   - Untuk expository: Kutipan langsung dari teks yang menantang
   - Untuk textual: Sorotan frasa spesifik dalam ayat

4. Definisi dan klarifikasi:
   - Apa yang BUKAN tema ini (menghilangkan kesalahpahaman)
   - Apa yang SESUNGGUHNYA tema ini (definisi positif)
   - Paradoks atau ketegangan dalam tema ini (jika ada)

5. 3-4 poin utama yang mengikuti pola struktur:
   - Setiap poin harus memiliki judul yang jelas dan mudah diingat
   - Setiap poin harus didukung ayat-ayat Alkitab yang relevan
   - Setiap poin harus menyertakan penjelasan singkat tentang teks
   - Setiap poin harus menyertakan ilustrasi yang sesuai dengan jenis struktur
   - Gunakan transisi yang efektif antar poin
"#;

const APPLICATION_TEMPLATE: &str = r#"
6. Aplikasi praktis yang disesuaikan untuk audiens {audience}:
   - Aplikasi bagi individu
   - Aplikasi dalam keluarga
   - Aplikasi dalam komunitas gereja
   - Aplikasi di tempat kerja/sekolah/masyarakat
"#;

const CALL_TO_ACTION_TEMPLATE: &str = r#"
7. Panggilan untuk respons:
   - Sertakan pertanyaan reflektif untuk perenungan
   - Ajakan untuk komitmen spesifik
   - Doa penutup yang meminta pertolongan Tuhan
"#;

const CUSTOM_INSTRUCTIONS_TEMPLATE: &str = r#"
INSTRUKSI TAMBAHAN:
{customInstructions}
"#;

const FORMAT_TEMPLATE: &str = r#"
Format outline kotbah dalam format markdown dengan heading dan bullet point yang jelas.
"#;

/// Catalog sections in the order they are emitted
pub const ALL_SECTIONS: &[PromptSection] = &[
    PromptSection::Purpose,
    PromptSection::BibleResearch,
    PromptSection::Structure,
    PromptSection::Application,
    PromptSection::CallToAction,
    PromptSection::CustomInstructions,
    PromptSection::Format,
];

/// Named, immutable template in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptSection {
    Purpose,
    BibleResearch,
    Structure,
    Application,
    CallToAction,
    CustomInstructions,
    Format,
}

impl PromptSection {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Purpose => "purpose",
            Self::BibleResearch => "bible-research",
            Self::Structure => "structure",
            Self::Application => "application",
            Self::CallToAction => "call-to-action",
            Self::CustomInstructions => "custom-instructions",
            Self::Format => "format",
        }
    }

    /// Get the raw template text, tokens unresolved
    pub const fn template(&self) -> &'static str {
        match self {
            Self::Purpose => PURPOSE_TEMPLATE,
            Self::BibleResearch => BIBLE_RESEARCH_TEMPLATE,
            Self::Structure => STRUCTURE_TEMPLATE,
            Self::Application => APPLICATION_TEMPLATE,
            Self::CallToAction => CALL_TO_ACTION_TEMPLATE,
            Self::CustomInstructions => CUSTOM_INSTRUCTIONS_TEMPLATE,
            Self::Format => FORMAT_TEMPLATE,
        }
    }

    /// Token-free opening text of the block, used to locate it in a prompt
    pub const fn heading(&self) -> &'static str {
        match self {
            Self::Purpose => "TUJUAN KOTBAH:",
            Self::BibleResearch => "PENELITIAN ALKITAB:",
            Self::Structure => "STRUKTUR KOTBAH:",
            Self::Application => "6. Aplikasi praktis",
            Self::CallToAction => "7. Panggilan untuk respons:",
            Self::CustomInstructions => "INSTRUKSI TAMBAHAN:",
            Self::Format => "Format outline kotbah",
        }
    }

    /// Get the placeholder tokens this template contains
    pub fn placeholders(&self) -> Vec<Placeholder> {
        ALL_PLACEHOLDERS
            .iter()
            .copied()
            .filter(|p| self.template().contains(p.token()))
            .collect()
    }

    /// Whether the section is emitted regardless of prompt options
    pub const fn is_mandatory(&self) -> bool {
        matches!(self, Self::Structure | Self::Format)
    }
}

//! Placeholder tokens and substitution

use super::audience::Audience;
use super::structure::SermonStructure;

/// Phrase used wherever a verse is referenced but none was supplied
pub const BIBLE_VERSE_FALLBACK: &str = "ayat yang relevan";

/// All recognized placeholder tokens
pub const ALL_PLACEHOLDERS: &[Placeholder] = &[
    Placeholder::Topic,
    Placeholder::BibleVerse,
    Placeholder::Structure,
    Placeholder::Audience,
    Placeholder::CustomInstructions,
];

/// Token that a catalog template may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Topic,
    BibleVerse,
    Structure,
    Audience,
    CustomInstructions,
}

impl Placeholder {
    /// Get the literal token as it appears in template text
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Topic => "{topic}",
            Self::BibleVerse => "{bibleVerse}",
            Self::Structure => "{structure}",
            Self::Audience => "{audience}",
            Self::CustomInstructions => "{customInstructions}",
        }
    }
}

/// Values for every placeholder of a single request
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderContext<'a> {
    pub topic: &'a str,
    pub bible_verse: Option<&'a str>,
    pub structure: SermonStructure,
    pub audience: Audience,
    pub custom_instructions: Option<&'a str>,
}

impl PlaceholderContext<'_> {
    /// Return a copy of `template` with every recognized token resolved.
    ///
    /// `{customInstructions}` is resolved first so the standard tokens are
    /// also resolved inside the user's instructions. A missing verse becomes
    /// [`BIBLE_VERSE_FALLBACK`]. Unknown tokens are left untouched, as is
    /// `{customInstructions}` when no instructions were given.
    pub fn substitute(&self, template: &str) -> String {
        let mut text = match self.custom_instructions {
            Some(instructions) => {
                template.replace(Placeholder::CustomInstructions.token(), instructions)
            }
            None => template.to_string(),
        };

        let verse = self
            .bible_verse
            .filter(|v| !v.is_empty())
            .unwrap_or(BIBLE_VERSE_FALLBACK);

        for (placeholder, value) in [
            (Placeholder::Topic, self.topic),
            (Placeholder::BibleVerse, verse),
            (Placeholder::Structure, self.structure.as_str()),
            (Placeholder::Audience, self.audience.as_str()),
        ] {
            text = text.replace(placeholder.token(), value);
        }

        text
    }
}

/// Check whether `text` still carries any recognized token
pub fn has_unresolved(text: &str) -> bool {
    ALL_PLACEHOLDERS.iter().any(|p| text.contains(p.token()))
}

//! Hexagram records and their translation links.

use serde::{Deserialize, Serialize};

use crate::line::Signature;

/// An online translation of the I Ching addressable by hexagram number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranslationSource {
    /// Richard Wilhelm and Cary F. Baynes, "I Ching: Or, Book of Changes" (1950).
    Wilhelm,
    /// James Legge, "The I Ching" (1899).
    Legge,
}

impl TranslationSource {
    /// All sources, in the order links are listed.
    pub fn all() -> &'static [Self] {
        &[Self::Wilhelm, Self::Legge]
    }

    /// The URL of the entry for hexagram `number`.
    pub fn url(self, number: u8) -> String {
        match self {
            Self::Wilhelm => format!("http://www.akirarabelais.com/i/i.html#{number}"),
            Self::Legge => format!("http://www.sacred-texts.com/ich/ic{number:02}.htm"),
        }
    }
}

impl std::fmt::Display for TranslationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wilhelm => write!(f, "Wilhelm/Baynes"),
            Self::Legge => write!(f, "Legge"),
        }
    }
}

/// One of the 64 canonical hexagrams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hexagram {
    /// King Wen number (1-64).
    pub number: u8,
    /// Line polarities, bottom first.
    pub signature: Signature,
    /// English name.
    pub name: String,
    /// Romanized Chinese name, if the data provides one.
    pub romanized: Option<String>,
    /// Unicode hexagram character.
    pub glyph: char,
    /// Short description.
    pub description: String,
    /// Links to online translations, one per [`TranslationSource`].
    pub translation_urls: Vec<String>,
}

impl Hexagram {
    /// Build a record, deriving its translation links from `number`.
    pub fn new(
        number: u8,
        signature: Signature,
        name: impl Into<String>,
        glyph: char,
        description: impl Into<String>,
    ) -> Self {
        Self {
            number,
            signature,
            name: name.into(),
            romanized: None,
            glyph,
            description: description.into(),
            translation_urls: TranslationSource::all()
                .iter()
                .map(|source| source.url(number))
                .collect(),
        }
    }

    /// Set the romanized name.
    pub fn with_romanized(mut self, romanized: impl Into<String>) -> Self {
        self.romanized = Some(romanized.into());
        self
    }

    /// The link for one translation source.
    pub fn translation_url(&self, source: TranslationSource) -> String {
        source.url(self.number)
    }
}

impl std::fmt::Display for Hexagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}. {}", self.glyph, self.number, self.name)
    }
}

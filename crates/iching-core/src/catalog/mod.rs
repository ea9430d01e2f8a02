//! The hexagram catalog.
//!
//! An immutable table of the 64 hexagrams, indexed by King Wen number and by
//! line signature. It is built once, either from the bundled reference data
//! or from an external file, and shared read-only afterwards. Loading fails
//! unless the data describes exactly 64 hexagrams with distinct signatures,
//! which makes signature lookup a bijection over all six-line patterns.

pub mod parse;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use strsim::jaro_winkler;

use crate::error::{IchingError, IchingResult};
use crate::hexagram::Hexagram;
use crate::line::Signature;

pub use parse::HEXAGRAM_COUNT;

/// Reference data bundled with the crate.
pub const BUILTIN_DATA: &str = include_str!("../../data/hexagrams.csv");

/// Minimum Jaro-Winkler score for a name suggestion.
const SUGGEST_THRESHOLD: f64 = 0.7;

/// Where hexagram reference data comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    /// The data compiled into the crate.
    #[default]
    Builtin,
    /// A CSV file on disk.
    File(PathBuf),
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin => write!(f, "built-in data"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolves signatures to hexagrams.
///
/// Implemented by [`HexagramCatalog`]; readings depend only on this so tests
/// can substitute a fake table.
pub trait HexagramLookup {
    /// The hexagram with this signature.
    fn by_signature(&self, signature: &Signature) -> IchingResult<&Hexagram>;
}

/// The 64 hexagrams, ordered by number.
#[derive(Debug, Clone)]
pub struct HexagramCatalog {
    hexagrams: Vec<Hexagram>,
    by_signature: HashMap<Signature, usize>,
}

impl HexagramCatalog {
    /// Load the bundled reference data.
    pub fn builtin() -> IchingResult<Self> {
        Self::load(&CatalogSource::Builtin)
    }

    /// Load from the given source.
    pub fn load(source: &CatalogSource) -> IchingResult<Self> {
        let result = match source {
            CatalogSource::Builtin => Self::from_csv(BUILTIN_DATA),
            CatalogSource::File(path) => Self::from_path(path),
        };
        match &result {
            Ok(catalog) => {
                tracing::debug!(%source, count = catalog.hexagrams.len(), "hexagram catalog loaded");
            }
            Err(e) => tracing::warn!(%source, error = %e, "hexagram catalog rejected"),
        }
        result
    }

    /// Load reference data from a CSV file.
    pub fn from_path(path: &Path) -> IchingResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| IchingError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv(&text)
    }

    /// Parse reference data from CSV text.
    pub fn from_csv(text: &str) -> IchingResult<Self> {
        Self::from_hexagrams(parse::parse_hexagrams(text)?)
    }

    /// Build a catalog from records numbered 1 through 64.
    pub fn from_hexagrams(mut hexagrams: Vec<Hexagram>) -> IchingResult<Self> {
        if hexagrams.len() != HEXAGRAM_COUNT {
            return Err(IchingError::CatalogSize(hexagrams.len()));
        }
        hexagrams.sort_by_key(|h| h.number);
        for (expected, hexagram) in (1u8..).zip(&hexagrams) {
            if hexagram.number != expected {
                return Err(IchingError::NumberOutOfRange(u32::from(hexagram.number)));
            }
        }

        let mut by_signature = HashMap::with_capacity(HEXAGRAM_COUNT);
        for (index, hexagram) in hexagrams.iter().enumerate() {
            if let Some(previous) = by_signature.insert(hexagram.signature, index) {
                return Err(IchingError::DuplicateSignature {
                    signature: hexagram.signature,
                    first: hexagrams[previous].number,
                    second: hexagram.number,
                });
            }
        }

        Ok(Self {
            hexagrams,
            by_signature,
        })
    }

    /// All hexagrams, ordered by number.
    pub fn all(&self) -> &[Hexagram] {
        &self.hexagrams
    }

    /// The hexagram with King Wen number `number` (1-64).
    pub fn by_number(&self, number: u32) -> IchingResult<&Hexagram> {
        number
            .checked_sub(1)
            .and_then(|i| self.hexagrams.get(i as usize))
            .ok_or(IchingError::NumberOutOfRange(number))
    }

    /// Find a hexagram by English or romanized name, ignoring case and tone marks.
    pub fn find_by_name(&self, name: &str) -> Option<&Hexagram> {
        let wanted = normalize(name);
        self.hexagrams.iter().find(|h| {
            normalize(&h.name) == wanted
                || h.romanized.as_deref().is_some_and(|r| normalize(r) == wanted)
        })
    }

    /// Names close to `partial`, best match first.
    pub fn suggest(&self, partial: &str, limit: usize) -> Vec<&Hexagram> {
        let partial = normalize(partial);
        let mut scored: Vec<(&Hexagram, f64)> = self
            .hexagrams
            .iter()
            .filter_map(|h| {
                let names = std::iter::once(h.name.as_str()).chain(h.romanized.as_deref());
                names
                    .map(|n| name_score(&partial, &normalize(n)))
                    .fold(None, |best: Option<f64>, s| Some(best.map_or(s, |b| b.max(s))))
                    .filter(|score| *score >= SUGGEST_THRESHOLD)
                    .map(|score| (h, score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().take(limit).map(|(h, _)| h).collect()
    }
}

impl HexagramLookup for HexagramCatalog {
    fn by_signature(&self, signature: &Signature) -> IchingResult<&Hexagram> {
        self.by_signature
            .get(signature)
            .map(|&i| &self.hexagrams[i])
            .ok_or(IchingError::SignatureNotFound(*signature))
    }
}

fn name_score(partial: &str, name: &str) -> f64 {
    if name.starts_with(partial) {
        2.0
    } else if name.contains(partial) {
        1.0
    } else {
        jaro_winkler(partial, name)
    }
}

/// Lowercase and strip pinyin tone marks.
fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'ā' | 'á' | 'ǎ' | 'à' => 'a',
            'ē' | 'é' | 'ě' | 'è' => 'e',
            'ī' | 'í' | 'ǐ' | 'ì' => 'i',
            'ō' | 'ó' | 'ǒ' | 'ò' => 'o',
            'ū' | 'ú' | 'ǔ' | 'ù' => 'u',
            'ǖ' | 'ǘ' | 'ǚ' | 'ǜ' => 'ü',
            other => other,
        })
        .collect()
}

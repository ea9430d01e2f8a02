//! Readings and the engine that casts them.
//!
//! A reading casts six lines, resolves their signature to the primary
//! hexagram, and, when any line is changing, resolves the changed signature
//! to the next hexagram. A signature the catalog cannot resolve means the
//! catalog is broken, so it aborts the reading rather than yielding a default.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::catalog::{HexagramCatalog, HexagramLookup};
use crate::change::resolve_next;
use crate::config::ReadingConfig;
use crate::error::{IchingError, IchingResult};
use crate::generator::generate_sequence;
use crate::hexagram::{Hexagram, TranslationSource};
use crate::line::{LineSequence, Signature};

/// The result of one divination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// The question asked.
    pub question: String,
    /// The six lines cast, bottom first.
    pub lines: LineSequence,
    /// The hexagram the lines form.
    pub hexagram: Hexagram,
    /// The hexagram the changing lines turn into; `None` when nothing changes.
    pub next_hexagram: Option<Hexagram>,
    /// When the reading was made.
    pub cast_at: DateTime<Utc>,
}

impl Reading {
    /// Zero-based positions of changing lines, bottom first.
    pub fn changing_positions(&self) -> Vec<usize> {
        self.lines.changing_positions()
    }

    /// Whether the reading leads to a second hexagram.
    pub fn has_changes(&self) -> bool {
        self.next_hexagram.is_some()
    }

    /// The next hexagram, or the primary when nothing changes.
    pub fn next_or_primary(&self) -> &Hexagram {
        self.next_hexagram.as_ref().unwrap_or(&self.hexagram)
    }

    /// Render the reading as markdown.
    pub fn to_markdown(&self) -> String {
        let mut out = String::from("# I Ching Reading\n\n");
        if !self.question.is_empty() {
            out.push_str(&format!("**Question**: {}\n\n", self.question));
        }
        out.push_str(&format!("**Lines** (bottom first): {}\n\n", self.lines));
        push_hexagram(&mut out, "", &self.hexagram);

        match &self.next_hexagram {
            Some(next) => {
                let positions: Vec<String> = self
                    .changing_positions()
                    .iter()
                    .map(|p| (p + 1).to_string())
                    .collect();
                out.push_str(&format!("**Changing lines**: {}\n\n", positions.join(", ")));
                push_hexagram(&mut out, "Changing to ", next);
            }
            None => out.push_str("*No changing lines.*\n"),
        }
        out
    }
}

fn push_hexagram(out: &mut String, prefix: &str, hexagram: &Hexagram) {
    out.push_str(&format!("## {prefix}{hexagram}\n\n"));
    if !hexagram.description.is_empty() {
        out.push_str(&format!("{}\n\n", hexagram.description));
    }
    for source in TranslationSource::all() {
        out.push_str(&format!("- {source}: {}\n", hexagram.translation_url(*source)));
    }
    out.push('\n');
}

/// Casts readings against a hexagram table.
pub struct ReadingEngine<'c, C: HexagramLookup + ?Sized = HexagramCatalog> {
    catalog: &'c C,
    rng: StdRng,
}

impl<'c, C: HexagramLookup + ?Sized> ReadingEngine<'c, C> {
    /// Create an engine. The RNG is seeded once, here.
    pub fn new(catalog: &'c C, config: &ReadingConfig) -> Self {
        Self {
            catalog,
            rng: config.rng(),
        }
    }

    /// The table this engine resolves against.
    pub fn catalog(&self) -> &C {
        self.catalog
    }

    /// Cast six lines and interpret them.
    pub fn conduct_reading(&mut self, question: &str) -> IchingResult<Reading> {
        let lines = generate_sequence(&mut self.rng);
        self.interpret(question, lines)
    }

    /// Interpret lines that were cast elsewhere.
    pub fn interpret(&self, question: &str, lines: LineSequence) -> IchingResult<Reading> {
        let primary_signature = lines.signature();
        let hexagram = self.lookup(&primary_signature)?;

        let next_signature = resolve_next(&lines);
        let next_hexagram = if next_signature == primary_signature {
            None
        } else {
            Some(self.lookup(&next_signature)?)
        };

        tracing::debug!(
            %lines,
            primary = hexagram.number,
            next = next_hexagram.as_ref().map(|h| h.number),
            "reading cast"
        );

        Ok(Reading {
            question: question.to_string(),
            lines,
            hexagram,
            next_hexagram,
            cast_at: Utc::now(),
        })
    }

    fn lookup(&self, signature: &Signature) -> IchingResult<Hexagram> {
        match self.catalog.by_signature(signature) {
            Ok(hexagram) => Ok(hexagram.clone()),
            Err(IchingError::SignatureNotFound(sig)) => {
                tracing::error!(signature = %sig, "catalog does not cover signature");
                Err(IchingError::CatalogInconsistent(sig))
            }
            Err(e) => Err(e),
        }
    }
}

//! Three-coin I Ching divination.
//!
//! Generates six lines by simulated coin tosses, resolves them to one of the
//! 64 canonical hexagrams through an immutable catalog, and derives the
//! hexagram the changing lines turn into.

pub mod catalog;
pub mod change;
pub mod config;
pub mod error;
pub mod generator;
pub mod hexagram;
pub mod line;
pub mod reading;

pub use catalog::{CatalogSource, HexagramCatalog, HexagramLookup};
pub use change::resolve_next;
pub use config::ReadingConfig;
pub use error::{IchingError, IchingResult};
pub use generator::{Coin, LineToss, generate_line, generate_sequence, toss_line};
pub use hexagram::{Hexagram, TranslationSource};
pub use line::{LINE_COUNT, Line, LineSequence, Polarity, Signature};
pub use reading::{Reading, ReadingEngine};

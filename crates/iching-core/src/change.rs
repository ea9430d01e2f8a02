//! Change rules: old lines flip, young lines hold.

use crate::line::{LineSequence, Signature};

/// The signature the sequence turns into once every changing line flips.
///
/// Old yang (9) becomes yin, old yin (6) becomes yang, and stable lines keep
/// their polarity. Positions are preserved.
pub fn resolve_next(seq: &LineSequence) -> Signature {
    Signature::new(seq.lines().map(|line| line.changed_polarity()))
}

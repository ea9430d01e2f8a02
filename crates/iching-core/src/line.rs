//! Lines, line sequences, and polarity signatures.
//!
//! A line is the sum of three coin tosses (6-9). Its polarity (yin or yang)
//! and whether it is changing both follow from that value. Six lines, bottom
//! to top, form a [`LineSequence`]; their polarities form a [`Signature`].

use serde::{Deserialize, Serialize};

use crate::error::{IchingError, IchingResult};

/// Number of lines in a hexagram.
pub const LINE_COUNT: usize = 6;

/// The polarity of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// A broken line.
    Yin,
    /// A solid line.
    Yang,
}

impl Polarity {
    /// Map `true` to yang and `false` to yin.
    pub fn from_bool(yang: bool) -> Self {
        if yang { Self::Yang } else { Self::Yin }
    }

    /// Whether this is the yang polarity.
    pub fn is_yang(self) -> bool {
        self == Self::Yang
    }

    /// The opposite polarity.
    pub fn flipped(self) -> Self {
        match self {
            Self::Yin => Self::Yang,
            Self::Yang => Self::Yin,
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yin => write!(f, "yin"),
            Self::Yang => write!(f, "yang"),
        }
    }
}

/// One of the four three-coin outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Line {
    /// Broken, changing to solid (6).
    OldYin,
    /// Solid, stable (7).
    YoungYang,
    /// Broken, stable (8).
    YoungYin,
    /// Solid, changing to broken (9).
    OldYang,
}

impl Line {
    /// Parse a line from its traditional value.
    pub fn from_value(value: u32) -> IchingResult<Self> {
        match value {
            6 => Ok(Self::OldYin),
            7 => Ok(Self::YoungYang),
            8 => Ok(Self::YoungYin),
            9 => Ok(Self::OldYang),
            other => Err(IchingError::InvalidLine(other)),
        }
    }

    /// The traditional value of this line (6-9).
    pub fn value(self) -> u8 {
        match self {
            Self::OldYin => 6,
            Self::YoungYang => 7,
            Self::YoungYin => 8,
            Self::OldYang => 9,
        }
    }

    /// Yang for 7 and 9, yin for 6 and 8.
    pub fn polarity(self) -> Polarity {
        match self {
            Self::YoungYang | Self::OldYang => Polarity::Yang,
            Self::OldYin | Self::YoungYin => Polarity::Yin,
        }
    }

    /// Whether this is an "old" line (6 or 9).
    pub fn is_changing(self) -> bool {
        matches!(self, Self::OldYin | Self::OldYang)
    }

    /// The polarity this line holds once changing lines have flipped.
    pub fn changed_polarity(self) -> Polarity {
        if self.is_changing() {
            self.polarity().flipped()
        } else {
            self.polarity()
        }
    }

    /// The bar drawn for this line, with a marker on changing lines.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::OldYin => "━━━ ━━━ x",
            Self::YoungYang => "━━━━━━━",
            Self::YoungYin => "━━━ ━━━",
            Self::OldYang => "━━━━━━━ o",
        }
    }

    /// All four lines in value order.
    pub fn all() -> &'static [Self] {
        &[Self::OldYin, Self::YoungYang, Self::YoungYin, Self::OldYang]
    }
}

impl From<Line> for u8 {
    fn from(line: Line) -> Self {
        line.value()
    }
}

impl TryFrom<u8> for Line {
    type Error = IchingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(u32::from(value))
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OldYin => write!(f, "6 (old yin)"),
            Self::YoungYang => write!(f, "7 (young yang)"),
            Self::YoungYin => write!(f, "8 (young yin)"),
            Self::OldYang => write!(f, "9 (old yang)"),
        }
    }
}

/// Six lines ordered bottom (index 0) to top (index 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSequence([Line; LINE_COUNT]);

impl LineSequence {
    /// Wrap six lines.
    pub fn new(lines: [Line; LINE_COUNT]) -> Self {
        Self(lines)
    }

    /// Build a sequence from traditional values, bottom first.
    pub fn from_values(values: &[u32]) -> IchingResult<Self> {
        if values.len() != LINE_COUNT {
            return Err(IchingError::InvalidLineCount(values.len()));
        }
        let mut lines = [Line::YoungYang; LINE_COUNT];
        for (slot, value) in lines.iter_mut().zip(values) {
            *slot = Line::from_value(*value)?;
        }
        Ok(Self(lines))
    }

    /// Parse `"9,8,8,6,7,8"` or `"988678"`, bottom line first.
    pub fn parse(input: &str) -> IchingResult<Self> {
        let values: Vec<u32> = if input.contains(',') {
            input
                .split(',')
                .map(|tok| {
                    let tok = tok.trim();
                    tok.parse::<u32>()
                        .map_err(|_| IchingError::UnparsableLines(input.to_string()))
                })
                .collect::<IchingResult<_>>()?
        } else {
            input
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| {
                    c.to_digit(10)
                        .ok_or_else(|| IchingError::UnparsableLines(input.to_string()))
                })
                .collect::<IchingResult<_>>()?
        };
        Self::from_values(&values)
    }

    /// The lines, bottom first.
    pub fn lines(&self) -> &[Line; LINE_COUNT] {
        &self.0
    }

    /// The polarity signature of the lines as cast.
    pub fn signature(&self) -> Signature {
        Signature(self.0.map(Line::polarity))
    }

    /// Zero-based positions of changing lines, bottom first.
    pub fn changing_positions(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, line)| line.is_changing())
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether any line is changing.
    pub fn has_changing(&self) -> bool {
        self.0.iter().any(|line| line.is_changing())
    }
}

impl std::fmt::Display for LineSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.0.iter().map(|l| l.value().to_string()).collect();
        write!(f, "[{}]", values.join(", "))
    }
}

/// The six polarities of a hexagram, bottom first. Used as the catalog key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature([Polarity; LINE_COUNT]);

impl Signature {
    /// Wrap six polarities.
    pub fn new(polarities: [Polarity; LINE_COUNT]) -> Self {
        Self(polarities)
    }

    /// Build from booleans, `true` meaning yang.
    pub fn from_bools(bools: [bool; LINE_COUNT]) -> Self {
        Self(bools.map(Polarity::from_bool))
    }

    /// Build from the low six bits of `bits`; bit `i` is line `i`, set meaning yang.
    pub fn from_bits(bits: u8) -> Self {
        let mut polarities = [Polarity::Yin; LINE_COUNT];
        for (i, p) in polarities.iter_mut().enumerate() {
            *p = Polarity::from_bool(bits & (1 << i) != 0);
        }
        Self(polarities)
    }

    /// The signature as six bits, line `i` at bit `i`.
    pub fn bits(&self) -> u8 {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_yang())
            .fold(0, |acc, (i, _)| acc | (1 << i))
    }

    /// The polarities, bottom first.
    pub fn polarities(&self) -> &[Polarity; LINE_COUNT] {
        &self.0
    }

    /// The polarities as booleans, `true` meaning yang.
    pub fn to_bools(&self) -> [bool; LINE_COUNT] {
        self.0.map(Polarity::is_yang)
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tokens: Vec<&str> = self
            .0
            .iter()
            .map(|p| if p.is_yang() { "true" } else { "false" })
            .collect();
        write!(f, "{}", tokens.join("|"))
    }
}

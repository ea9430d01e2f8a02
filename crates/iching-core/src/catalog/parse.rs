//! Reference data parsing.
//!
//! One CSV record per hexagram, in King Wen order:
//! `signature,name,glyph,description[,romanized,...]`. The signature is six
//! `true`/`false` tokens joined by `|`, bottom line first. Fields may be
//! double-quoted; `""` inside quotes is a literal quote.

use crate::error::{IchingError, IchingResult};
use crate::hexagram::Hexagram;
use crate::line::{LINE_COUNT, Signature};

/// Number of hexagrams the data must describe.
pub const HEXAGRAM_COUNT: usize = 64;

const SIGNATURE_DELIMITER: char = '|';

/// Parse reference data into hexagrams numbered by record order.
pub fn parse_hexagrams(text: &str) -> IchingResult<Vec<Hexagram>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let records: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| (i + 1, line))
        .collect();

    if records.len() != HEXAGRAM_COUNT {
        return Err(IchingError::CatalogSize(records.len()));
    }

    records
        .into_iter()
        .zip(1u8..)
        .map(|((row, line), number)| parse_record(line, row, number))
        .collect()
}

fn parse_record(line: &str, row: usize, number: u8) -> IchingResult<Hexagram> {
    let fields = split_fields(line, row)?;
    if fields.len() < 4 {
        return Err(malformed(
            row,
            format!("expected at least 4 fields, found {}", fields.len()),
        ));
    }

    let signature = parse_signature(&fields[0], row)?;

    let name = fields[1].trim();
    if name.is_empty() {
        return Err(malformed(row, "empty name"));
    }

    let glyph_field = fields[2].trim();
    let mut chars = glyph_field.chars();
    let glyph = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(malformed(
                row,
                format!("glyph must be a single character, got \"{glyph_field}\""),
            ));
        }
    };

    let mut hexagram = Hexagram::new(number, signature, name, glyph, fields[3].trim());
    if let Some(romanized) = fields.get(4).map(|s| s.trim()).filter(|s| !s.is_empty()) {
        hexagram = hexagram.with_romanized(romanized);
    }
    Ok(hexagram)
}

/// Parse `true|false|...` into a signature.
pub fn parse_signature(field: &str, row: usize) -> IchingResult<Signature> {
    let tokens: Vec<&str> = field.split(SIGNATURE_DELIMITER).map(str::trim).collect();
    if tokens.len() != LINE_COUNT {
        return Err(malformed(
            row,
            format!("signature needs 6 tokens, found {}", tokens.len()),
        ));
    }

    let mut bools = [false; LINE_COUNT];
    for (slot, token) in bools.iter_mut().zip(&tokens) {
        *slot = match token.to_ascii_lowercase().as_str() {
            "true" | "1" => true,
            "false" | "0" => false,
            other => return Err(malformed(row, format!("not a boolean: \"{other}\""))),
        };
    }
    Ok(Signature::from_bools(bools))
}

fn split_fields(line: &str, row: usize) -> IchingResult<Vec<String>> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.trim().is_empty() => {
                current.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    if in_quotes {
        return Err(malformed(row, "unterminated quoted field"));
    }
    fields.push(current);
    Ok(fields)
}

fn malformed(row: usize, message: impl Into<String>) -> IchingError {
    IchingError::MalformedRow {
        row,
        message: message.into(),
    }
}

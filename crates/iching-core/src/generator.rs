//! Three-coin line generation.
//!
//! Each line is cast by tossing three fair coins: heads count 3, tails
//! count 2, and the sum (6-9) is the line. All tosses draw from the
//! caller's RNG, which is seeded once and never reseeded per toss.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::line::{LINE_COUNT, Line, LineSequence};

/// Number of coins tossed per line.
pub const COIN_COUNT: usize = 3;

/// The face a coin lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coin {
    /// Counts 3.
    Heads,
    /// Counts 2.
    Tails,
}

impl Coin {
    /// The value this face contributes to a line.
    pub fn value(self) -> u32 {
        match self {
            Self::Heads => 3,
            Self::Tails => 2,
        }
    }

    /// Toss one fair coin.
    pub fn toss(rng: &mut StdRng) -> Self {
        if rng.random_bool(0.5) {
            Self::Heads
        } else {
            Self::Tails
        }
    }
}

/// The coins behind one cast line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineToss {
    /// The three coin faces, in toss order.
    pub coins: [Coin; COIN_COUNT],
    /// The resulting line.
    pub line: Line,
}

impl LineToss {
    /// Derive the line from three coin faces.
    pub fn from_coins(coins: [Coin; COIN_COUNT]) -> Self {
        let line = match coins.iter().map(|c| c.value()).sum::<u32>() {
            6 => Line::OldYin,
            7 => Line::YoungYang,
            8 => Line::YoungYin,
            9 => Line::OldYang,
            _ => unreachable!(),
        };
        Self { coins, line }
    }
}

/// Toss three coins and keep the faces.
pub fn toss_line(rng: &mut StdRng) -> LineToss {
    LineToss::from_coins([Coin::toss(rng), Coin::toss(rng), Coin::toss(rng)])
}

/// Cast a single line.
pub fn generate_line(rng: &mut StdRng) -> Line {
    toss_line(rng).line
}

/// Cast six lines, bottom (position 0) first.
pub fn generate_sequence(rng: &mut StdRng) -> LineSequence {
    let mut lines = [Line::YoungYang; LINE_COUNT];
    for slot in &mut lines {
        *slot = generate_line(rng);
    }
    LineSequence::new(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn coin_values() {
        assert_eq!(Coin::Heads.value(), 3);
        assert_eq!(Coin::Tails.value(), 2);
    }

    #[test]
    fn coins_to_lines() {
        use Coin::{Heads as H, Tails as T};
        assert_eq!(LineToss::from_coins([T, T, T]).line, Line::OldYin);
        assert_eq!(LineToss::from_coins([H, T, T]).line, Line::YoungYang);
        assert_eq!(LineToss::from_coins([T, H, T]).line, Line::YoungYang);
        assert_eq!(LineToss::from_coins([H, H, T]).line, Line::YoungYin);
        assert_eq!(LineToss::from_coins([T, H, H]).line, Line::YoungYin);
        assert_eq!(LineToss::from_coins([H, H, H]).line, Line::OldYang);
    }

    #[test]
    fn all_lines_reachable() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            seen.insert(generate_line(&mut rng));
        }
        assert_eq!(seen.len(), 4, "missing lines: {seen:?}");
    }

    #[test]
    fn distribution_matches_three_coins() {
        // Expected frequencies: 6 and 9 at 1/8, 7 and 8 at 3/8.
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0u32; 4];
        let n = 80_000;
        for _ in 0..n {
            counts[usize::from(generate_line(&mut rng).value() - 6)] += 1;
        }
        let expected = [n / 8, 3 * n / 8, 3 * n / 8, n / 8];
        for (got, want) in counts.iter().zip(expected) {
            let tolerance = want / 20;
            assert!(
                got.abs_diff(want) < tolerance,
                "counts {counts:?} too far from {expected:?}"
            );
        }
    }

    #[test]
    fn successive_sequences_differ() {
        let mut rng = StdRng::seed_from_u64(3);
        let sequences: std::collections::HashSet<_> =
            (0..50).map(|_| generate_sequence(&mut rng)).collect();
        assert!(sequences.len() > 40);
    }

    #[test]
    fn deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        assert_eq!(generate_sequence(&mut rng1), generate_sequence(&mut rng2));
    }

    proptest! {
        #[test]
        fn generated_lines_in_range(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let seq = generate_sequence(&mut rng);
            for line in seq.lines() {
                prop_assert!((6..=9).contains(&line.value()));
            }
        }

        #[test]
        fn toss_sum_matches_line(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let toss = toss_line(&mut rng);
            let sum: u32 = toss.coins.iter().map(|c| c.value()).sum();
            prop_assert_eq!(sum, u32::from(toss.line.value()));
        }
    }
}

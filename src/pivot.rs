//! Pivot selection strategies.
//!
//! A [`PivotPolicy`] picks one index out of an inclusive segment `[lo, hi]`.
//! Parsing a policy name never fails: anything unrecognized falls back to
//! [`PivotPolicy::First`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::engine::Segment;

/// Strategy used to choose the pivot of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PivotPolicy {
    /// Leftmost index of the segment
    #[default]
    First,
    /// `(lo + hi) / 2`, biased toward the lower index on even lengths
    Middle,
    /// Uniformly random index in `[lo, hi]`
    Random,
}

impl std::fmt::Display for PivotPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PivotPolicy::First => write!(f, "first"),
            PivotPolicy::Middle => write!(f, "middle"),
            PivotPolicy::Random => write!(f, "random"),
        }
    }
}

impl std::str::FromStr for PivotPolicy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "first" | "first element" => Self::First,
            "middle" | "middle element" => Self::Middle,
            "random" | "random element" => Self::Random,
            other => {
                tracing::warn!(policy = other, "unknown pivot policy, using 'first'");
                Self::First
            }
        })
    }
}

impl PivotPolicy {
    /// Parse a policy name, defaulting to `first` for unknown names.
    pub fn parse(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Choose the pivot index for `segment`.
    ///
    /// The random source is only consumed by [`PivotPolicy::Random`].
    pub fn select_index<R: Rng + ?Sized>(&self, segment: Segment, rng: &mut R) -> usize {
        match self {
            PivotPolicy::First => segment.lo,
            PivotPolicy::Middle => (segment.lo + segment.hi) / 2,
            PivotPolicy::Random => rng.gen_range(segment.lo..=segment.hi),
        }
    }

    /// Choose the pivot of `segment` within `array`, returning its value and index.
    pub fn choose<R: Rng + ?Sized>(&self, array: &[i64], segment: Segment, rng: &mut R) -> Pivot {
        let index = self.select_index(segment, rng);
        Pivot {
            value: array[index],
            index,
        }
    }
}

/// A chosen pivot: its value and the index it was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pivot {
    pub value: i64,
    pub index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_policy_display() {
        assert_eq!(PivotPolicy::First.to_string(), "first");
        assert_eq!(PivotPolicy::Middle.to_string(), "middle");
        assert_eq!(PivotPolicy::Random.to_string(), "random");
    }

    #[test]
    fn test_policy_parse_names() {
        assert_eq!(PivotPolicy::parse("first"), PivotPolicy::First);
        assert_eq!(PivotPolicy::parse("MIDDLE"), PivotPolicy::Middle);
        assert_eq!(PivotPolicy::parse(" Random element "), PivotPolicy::Random);
        assert_eq!(PivotPolicy::parse("First element"), PivotPolicy::First);
    }

    #[test]
    fn test_unknown_policy_defaults_to_first() {
        assert_eq!(PivotPolicy::parse("zzz"), PivotPolicy::First);
        assert_eq!(PivotPolicy::parse(""), PivotPolicy::First);
    }

    #[test]
    fn test_first_picks_lo() {
        let seg = Segment::new(2, 6);
        assert_eq!(PivotPolicy::First.select_index(seg, &mut rng()), 2);
    }

    #[test]
    fn test_middle_floors_toward_lower_index() {
        // Odd length
        assert_eq!(
            PivotPolicy::Middle.select_index(Segment::new(0, 4), &mut rng()),
            2
        );
        // Even length biases low
        assert_eq!(
            PivotPolicy::Middle.select_index(Segment::new(0, 5), &mut rng()),
            2
        );
        assert_eq!(
            PivotPolicy::Middle.select_index(Segment::new(3, 4), &mut rng()),
            3
        );
    }

    #[test]
    fn test_random_stays_within_segment() {
        let mut rng = rng();
        let seg = Segment::new(4, 9);
        for _ in 0..200 {
            let idx = PivotPolicy::Random.select_index(seg, &mut rng);
            assert!((4..=9).contains(&idx));
        }
    }

    #[test]
    fn test_random_reaches_both_ends() {
        let mut rng = rng();
        let seg = Segment::new(0, 1);
        let picks: Vec<usize> = (0..100)
            .map(|_| PivotPolicy::Random.select_index(seg, &mut rng))
            .collect();
        assert!(picks.contains(&0));
        assert!(picks.contains(&1));
    }

    #[test]
    fn test_choose_returns_value_and_index() {
        let array = [3, 9, 2, 8, 5, 1];
        let pivot = PivotPolicy::Middle.choose(&array, Segment::new(0, 5), &mut rng());
        assert_eq!(pivot, Pivot { value: 2, index: 2 });
    }
}

//! Data model for a partition game.
//!
//! These types describe the pieces of quicksort the learner steps through:
//! inclusive index segments, the left/right classification, the running
//! score and the partition currently being classified.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Inclusive index range `[lo, hi]` of the array still needing partitioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub lo: usize,
    pub hi: usize,
}

impl Segment {
    pub fn new(lo: usize, hi: usize) -> Self {
        Self { lo, hi }
    }

    /// Number of positions covered.
    pub fn len(&self) -> usize {
        self.hi + 1 - self.lo
    }

    /// Segments of one element are already sorted.
    pub fn is_trivial(&self) -> bool {
        self.lo >= self.hi
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.lo..=self.hi).contains(&index)
    }

    pub fn indices(&self) -> std::ops::RangeInclusive<usize> {
        self.lo..=self.hi
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}..={}]", self.lo, self.hi)
    }
}

/// Which side of the pivot an element is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Strictly less than the pivot
    Left,
    /// Greater than or equal to the pivot
    Right,
}

impl Side {
    /// The correct side for `value` against `pivot`. Ties go right.
    pub fn for_value(value: i64, pivot: i64) -> Self {
        if value < pivot { Side::Left } else { Side::Right }
    }

    /// Relation symbol used in feedback text.
    pub fn relation(&self) -> &'static str {
        match self {
            Side::Left => "<",
            Side::Right => "≥",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

impl std::str::FromStr for Side {
    type Err = crate::errors::ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" | "<" => Ok(Side::Left),
            "right" | "r" | ">=" | "≥" => Ok(Side::Right),
            _ => Err(crate::errors::ChoiceError::Unrecognized {
                input: s.to_string(),
            }),
        }
    }
}

/// Running score: `correct` never exceeds `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

impl Score {
    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.correct == self.total
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Score: {}/{}", self.correct, self.total)
    }
}

/// Classification progress for the segment currently being partitioned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePartition {
    pub segment: Segment,
    pub pivot_value: i64,
    pub pivot_index: usize,
    /// Indices still to classify, left to right, pivot excluded
    pub remaining: VecDeque<usize>,
    pub left: Vec<i64>,
    pub right: Vec<i64>,
}

impl ActivePartition {
    pub fn new(segment: Segment, pivot_value: i64, pivot_index: usize) -> Self {
        let remaining = segment.indices().filter(|&i| i != pivot_index).collect();
        Self {
            segment,
            pivot_value,
            pivot_index,
            remaining,
            left: Vec::new(),
            right: Vec::new(),
        }
    }

    /// The user's placements rebuilt into segment order: left, pivot, right.
    pub fn rebuilt(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.left.len() + 1 + self.right.len());
        out.extend_from_slice(&self.left);
        out.push(self.pivot_value);
        out.extend_from_slice(&self.right);
        out
    }
}

/// User-visible state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    /// A partition is active and has an element waiting to be classified
    AwaitingClassification,
    /// No segments are left to partition
    Finished,
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

/// One scored classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub value: i64,
    pub pivot: i64,
    pub chosen: Side,
    pub correct_side: Side,
}

impl Move {
    pub fn is_correct(&self) -> bool {
        self.chosen == self.correct_side
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_len_and_trivial() {
        assert_eq!(Segment::new(0, 5).len(), 6);
        assert_eq!(Segment::new(3, 3).len(), 1);
        assert!(Segment::new(3, 3).is_trivial());
        assert!(!Segment::new(3, 4).is_trivial());
    }

    #[test]
    fn test_side_ties_go_right() {
        assert_eq!(Side::for_value(2, 3), Side::Left);
        assert_eq!(Side::for_value(3, 3), Side::Right);
        assert_eq!(Side::for_value(4, 3), Side::Right);
    }

    #[test]
    fn test_side_from_str() {
        assert_eq!("L".parse::<Side>().unwrap(), Side::Left);
        assert_eq!(" right ".parse::<Side>().unwrap(), Side::Right);
        assert_eq!(">=".parse::<Side>().unwrap(), Side::Right);
        assert!("middle".parse::<Side>().is_err());
    }

    #[test]
    fn test_score_record() {
        let mut score = Score::default();
        score.record(true);
        score.record(false);
        assert_eq!(score, Score { correct: 1, total: 2 });
        assert!(!score.is_perfect());
        assert_eq!(score.to_string(), "Score: 1/2");
    }

    #[test]
    fn test_active_partition_excludes_pivot() {
        let part = ActivePartition::new(Segment::new(2, 5), 10, 3);
        assert_eq!(part.remaining, VecDeque::from(vec![2, 4, 5]));
        assert!(part.left.is_empty());
        assert!(part.right.is_empty());
    }

    #[test]
    fn test_rebuilt_concatenates_left_pivot_right() {
        let mut part = ActivePartition::new(Segment::new(0, 3), 5, 0);
        part.left = vec![4, 1];
        part.right = vec![9];
        assert_eq!(part.rebuilt(), vec![4, 1, 5, 9]);
    }

    #[test]
    fn test_game_state_terminal() {
        assert!(GameState::Finished.is_terminal());
        assert!(!GameState::AwaitingClassification.is_terminal());
    }
}

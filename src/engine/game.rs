//! The partition state machine.
//!
//! A [`Game`] owns the array, the LIFO stack of segments still to partition
//! and the active partition. The caller drives it one classification at a
//! time with [`Game::classify`] and gets a fresh [`GameSnapshot`] back after
//! every call.
//!
//! When a segment's last element has been classified, the user's placements
//! (not the canonical partition) are written back into the array as
//! `left + [pivot] + right`. A learner who places an element wrongly therefore
//! sees the consequence in the final array; the answer key computed at
//! [`Game::begin`] is shown next to it.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info};

use super::snapshot::GameSnapshot;
use super::state::{ActivePartition, GameState, Move, Score, Segment, Side};
use crate::answer_key::answer_key;
use crate::pivot::PivotPolicy;

const INSTRUCTIONS: &str = "Classify each element as LEFT (< pivot) or RIGHT (≥ pivot).";
const ALREADY_SORTED: &str = "Array has 0 or 1 element, so it is already sorted.";
const ALL_SORTED: &str = "All done! The array is fully sorted.";
const ALL_DONE_WITH_MISTAKES: &str =
    "All done! Some placements were wrong; compare with the answer key.";
const NO_MORE_MOVES: &str = "No more moves.";
const GAME_OVER_PROMPT: &str = "Game over. Start a new game to play again.";
const NOTHING_TO_DO_PROMPT: &str = "Nothing to do. Try entering more numbers.";

/// One quicksort game.
#[derive(Debug, Clone)]
pub struct Game {
    array: Vec<i64>,
    policy: PivotPolicy,
    stack: Vec<Segment>,
    active: Option<ActivePartition>,
    /// Positions that no segment will touch again
    settled: Vec<bool>,
    score: Score,
    moves: Vec<Move>,
    last_move: Option<Move>,
    pivots_chosen: usize,
    answer_key: Vec<i64>,
    feedback: String,
    rng: StdRng,
}

impl Game {
    /// Start a game with an entropy-seeded random source.
    pub fn begin(values: Vec<i64>, policy: PivotPolicy) -> Self {
        Self::begin_with_rng(values, policy, StdRng::from_entropy())
    }

    /// Start a game whose random pivots are reproducible.
    pub fn begin_seeded(values: Vec<i64>, policy: PivotPolicy, seed: u64) -> Self {
        Self::begin_with_rng(values, policy, StdRng::seed_from_u64(seed))
    }

    pub fn begin_with_rng(values: Vec<i64>, policy: PivotPolicy, mut rng: StdRng) -> Self {
        let key = answer_key(&values, policy, &mut rng);
        let n = values.len();
        info!(len = n, %policy, "starting game");

        let mut game = Self {
            array: values,
            policy,
            stack: Vec::new(),
            active: None,
            settled: vec![false; n],
            score: Score::default(),
            moves: Vec::new(),
            last_move: None,
            pivots_chosen: 0,
            answer_key: key,
            feedback: String::new(),
            rng,
        };

        if n < 2 {
            game.settled.fill(true);
            game.feedback = ALREADY_SORTED.to_string();
            return game;
        }

        game.stack.push(Segment::new(0, n - 1));
        game.feedback = game.advance();
        debug_assert!(game.covers_exactly_once());
        game
    }

    /// Replace this game with a fresh one. Nothing carries over except the
    /// random stream.
    pub fn restart(&mut self, values: Vec<i64>, policy: PivotPolicy) -> GameSnapshot {
        let rng = StdRng::seed_from_u64(self.rng.next_u64());
        *self = Self::begin_with_rng(values, policy, rng);
        self.snapshot()
    }

    /// Send the current element to `choice` and return the new snapshot.
    pub fn classify(&mut self, choice: Side) -> GameSnapshot {
        self.last_move = None;
        if self.state().is_terminal() {
            self.feedback = NO_MORE_MOVES.to_string();
            return self.snapshot();
        }

        let Some(active) = self.active.as_mut() else {
            // Stack still holds work but nothing is active
            self.feedback = self.advance();
            return self.snapshot();
        };

        let Some(idx) = active.remaining.pop_front() else {
            unreachable!("active partition {} has nothing to classify", active.segment);
        };
        let value = self.array[idx];
        let pivot = active.pivot_value;
        let correct_side = Side::for_value(value, pivot);
        let correct = choice == correct_side;

        let scored = Move {
            value,
            pivot,
            chosen: choice,
            correct_side,
        };
        self.score.record(correct);
        self.moves.push(scored);
        self.last_move = Some(scored);

        // Placement follows the user's choice, right or wrong
        match choice {
            Side::Left => active.left.push(value),
            Side::Right => active.right.push(value),
        }

        let relation = correct_side.relation();
        let mut feedback = if correct {
            format!("Correct! {value} {relation} pivot ({pivot}).")
        } else {
            format!(
                "Not quite. {value} {relation} pivot ({pivot}), so it should go to the {correct_side} partition."
            )
        };
        debug!(value, pivot, %choice, correct, "classified");

        if active.remaining.is_empty() {
            let next = self.finalize_partition();
            feedback.push(' ');
            feedback.push_str(&next);
        }

        self.feedback = feedback;
        debug_assert!(self.covers_exactly_once());
        self.snapshot()
    }

    /// Write the active partition back into the array and schedule its halves.
    fn finalize_partition(&mut self) -> String {
        let Some(active) = self.active.take() else {
            unreachable!("finalize called without an active partition");
        };
        let segment = active.segment;
        let rebuilt = active.rebuilt();
        assert_eq!(
            rebuilt.len(),
            segment.len(),
            "rebuilt segment {segment} has the wrong length"
        );

        self.array[segment.lo..=segment.hi].copy_from_slice(&rebuilt);
        let pivot_pos = segment.lo + active.left.len();
        self.settled[pivot_pos] = true;
        debug!(%segment, pivot_pos, "partition written back");

        // Right half first so the left half is partitioned next
        if pivot_pos < segment.hi {
            self.schedule(Segment::new(pivot_pos + 1, segment.hi));
        }
        if pivot_pos > segment.lo {
            self.schedule(Segment::new(segment.lo, pivot_pos - 1));
        }

        self.advance()
    }

    fn schedule(&mut self, segment: Segment) {
        if segment.is_trivial() {
            self.settle(segment);
        } else {
            debug!(%segment, "pushing segment");
            self.stack.push(segment);
        }
    }

    fn settle(&mut self, segment: Segment) {
        for i in segment.indices() {
            self.settled[i] = true;
        }
    }

    /// Pop segments until one needs partitioning, or finish the game.
    fn advance(&mut self) -> String {
        while let Some(segment) = self.stack.pop() {
            if segment.is_trivial() {
                self.settle(segment);
                continue;
            }

            let pivot = self.policy.choose(&self.array, segment, &mut self.rng);
            self.pivots_chosen += 1;
            debug!(%segment, pivot = pivot.value, index = pivot.index, "pivot chosen");
            self.active = Some(ActivePartition::new(segment, pivot.value, pivot.index));
            return INSTRUCTIONS.to_string();
        }

        info!(score = %self.score, "game finished");
        if self.array == self.answer_key {
            ALL_SORTED.to_string()
        } else {
            ALL_DONE_WITH_MISTAKES.to_string()
        }
    }

    /// Every index is covered exactly once by the settled positions, the
    /// stacked segments and the active segment.
    pub fn covers_exactly_once(&self) -> bool {
        let mut counts = vec![0usize; self.array.len()];
        for (i, settled) in self.settled.iter().enumerate() {
            if *settled {
                counts[i] += 1;
            }
        }
        let pending = self.stack.iter().chain(self.active.as_ref().map(|a| &a.segment));
        for segment in pending {
            for i in segment.indices() {
                counts[i] += 1;
            }
        }
        counts.iter().all(|&c| c == 1)
    }

    pub fn state(&self) -> GameState {
        if self.active.is_none() && self.stack.is_empty() {
            GameState::Finished
        } else {
            GameState::AwaitingClassification
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn policy(&self) -> PivotPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn mistakes(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter().filter(|m| !m.is_correct())
    }

    pub fn pivots_chosen(&self) -> usize {
        self.pivots_chosen
    }

    pub fn pending_segments(&self) -> &[Segment] {
        &self.stack
    }

    /// Project the current state for display.
    pub fn snapshot(&self) -> GameSnapshot {
        match &self.active {
            Some(active) => {
                let current = active.remaining.front().map(|&i| self.array[i]);
                let prompt = match current {
                    Some(value) => {
                        format!("Pivot = {}. Where does {} belong?", active.pivot_value, value)
                    }
                    None => String::new(),
                };
                GameSnapshot {
                    state: self.state(),
                    left: active.left.clone(),
                    pivot: Some(active.pivot_value),
                    right: active.right.clone(),
                    segment: Some(active.segment),
                    current,
                    prompt,
                    feedback: self.feedback.clone(),
                    last_move: self.last_move,
                    score: self.score,
                    final_array: None,
                    answer_key: None,
                }
            }
            None => {
                let finished = self.state().is_terminal();
                let prompt = if self.array.len() < 2 {
                    NOTHING_TO_DO_PROMPT
                } else {
                    GAME_OVER_PROMPT
                };
                GameSnapshot {
                    state: self.state(),
                    left: Vec::new(),
                    pivot: None,
                    right: Vec::new(),
                    segment: None,
                    current: None,
                    prompt: prompt.to_string(),
                    feedback: self.feedback.clone(),
                    last_move: self.last_move,
                    score: self.score,
                    final_array: finished.then(|| self.array.clone()),
                    answer_key: finished.then(|| self.answer_key.clone()),
                }
            }
        }
    }
}

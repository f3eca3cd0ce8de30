//! Board rendering for a partition game.
//!
//! [`BoardUI`] turns each [`GameSnapshot`] into terminal output: the left
//! bucket, the pivot and the right bucket, the feedback for the last move and
//! the question for the next one. Rendering is split from printing so the
//! text can be checked without a terminal.

use console::{Emoji, Style};
use serde::Serialize;

use super::UiMode;
use super::icons::{CHECK, CROSS, KEY, LEFT, PIVOT, RIGHT, SPARKLE, TROPHY};
use crate::engine::{GameSnapshot, Move, Score, format_list};

/// End-of-game report in JSON mode.
#[derive(Debug, Serialize)]
struct SummaryEvent<'a> {
    summary: Summary<'a>,
}

#[derive(Debug, Serialize)]
struct Summary<'a> {
    score: Score,
    mistakes: Vec<&'a Move>,
}

/// Terminal board for one session.
pub struct BoardUI {
    mode: UiMode,
}

impl BoardUI {
    pub fn new(mode: UiMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    fn icon(&self, emoji: &Emoji<'_, '_>) -> String {
        match self.mode {
            UiMode::Full => emoji.to_string(),
            _ => emoji.1.to_string(),
        }
    }

    fn style(&self, style: Style) -> Style {
        match self.mode {
            UiMode::Full => style,
            _ => Style::new(),
        }
    }

    /// Render a snapshot as text (or a JSON line in JSON mode).
    pub fn render(&self, snap: &GameSnapshot) -> Result<String, serde_json::Error> {
        if self.mode == UiMode::Json {
            return serde_json::to_string(snap);
        }

        let mut lines = Vec::new();
        let feedback_icon = match snap.last_move {
            Some(m) if m.is_correct() => self.icon(&CHECK),
            Some(_) => self.icon(&CROSS),
            None => String::new(),
        };
        if !snap.feedback.is_empty() {
            lines.push(format!("{}{}", feedback_icon, snap.feedback));
        }

        if snap.is_finished() {
            lines.push(format!(
                "{}Final array: {}",
                self.icon(&SPARKLE),
                self.style(Style::new().bold()).apply_to(snap.final_array_text())
            ));
            lines.push(format!(
                "{}Answer key:  {}",
                self.icon(&KEY),
                self.style(Style::new().green()).apply_to(snap.answer_key_text())
            ));
        } else {
            if let Some(segment) = snap.segment {
                lines.push(format!(
                    "{}",
                    self.style(Style::new().dim())
                        .apply_to(format!("Partitioning positions {}-{}", segment.lo, segment.hi))
                ));
            }
            lines.push(format!(
                "{}Left  (< pivot): {}",
                self.icon(&LEFT),
                self.style(Style::new().cyan()).apply_to(snap.left_text())
            ));
            lines.push(format!(
                "{}Pivot:           {}",
                self.icon(&PIVOT),
                self.style(Style::new().yellow().bold()).apply_to(snap.pivot_text())
            ));
            lines.push(format!(
                "{}Right (≥ pivot): {}",
                self.icon(&RIGHT),
                self.style(Style::new().magenta()).apply_to(snap.right_text())
            ));
        }

        lines.push(snap.score.to_string());
        lines.push(format!(
            "{}",
            self.style(Style::new().bold()).apply_to(&snap.prompt)
        ));
        Ok(lines.join("\n"))
    }

    /// Render the end-of-game mistake list.
    pub fn render_summary(&self, score: Score, moves: &[Move]) -> Result<String, serde_json::Error> {
        let mistakes: Vec<&Move> = moves.iter().filter(|m| !m.is_correct()).collect();

        if self.mode == UiMode::Json {
            return serde_json::to_string(&SummaryEvent {
                summary: Summary { score, mistakes },
            });
        }

        if score.total == 0 {
            return Ok(String::new());
        }
        if mistakes.is_empty() {
            return Ok(format!(
                "{}Perfect game! Every element classified correctly.",
                self.icon(&TROPHY)
            ));
        }

        let mut lines = vec![format!(
            "Mistakes ({} of {}):",
            mistakes.len(),
            score.total
        )];
        for m in mistakes {
            lines.push(format!(
                "  {} vs pivot {}: sent {}, belongs {}",
                m.value,
                m.pivot,
                self.style(Style::new().red()).apply_to(m.chosen),
                self.style(Style::new().green()).apply_to(m.correct_side)
            ));
        }
        Ok(lines.join("\n"))
    }

    /// Print a snapshot to stdout.
    pub fn show(&self, snap: &GameSnapshot) -> Result<(), serde_json::Error> {
        let text = self.render(snap)?;
        println!("{}", text);
        if self.mode != UiMode::Json {
            println!();
        }
        Ok(())
    }

    /// Print the end-of-game summary to stdout.
    pub fn show_summary(&self, score: Score, moves: &[Move]) -> Result<(), serde_json::Error> {
        let text = self.render_summary(score, moves)?;
        if !text.is_empty() {
            println!("{}", text);
        }
        Ok(())
    }

    /// Print a bare answer key.
    pub fn show_answer_key(&self, key: &[i64]) -> Result<(), serde_json::Error> {
        match self.mode {
            UiMode::Json => println!("{}", serde_json::json!({ "answer_key": key })),
            _ => println!("{}", format_list(key)),
        }
        Ok(())
    }
}

//! Pull-based interaction loop.
//!
//! A session alternates between showing the current [`GameSnapshot`] and
//! asking a [`ChoiceSource`] for the next classification. Sources:
//! - [`InteractivePrompt`] — asks the user with a `dialoguer` menu
//! - [`ScriptedChoices`] — replays choices given up front (`"l r r l"`)
//! - [`PerfectPlayer`] — always answers correctly

use anyhow::Result;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::collections::VecDeque;
use tracing::debug;

use crate::engine::{Game, GameSnapshot, Side};
use crate::errors::ChoiceError;
use crate::input::parse_integer_list;
use crate::ui::BoardUI;

/// Supplies one classification at a time.
pub trait ChoiceSource {
    /// Next choice for `snapshot`, or `None` to stop playing.
    fn next_choice(&mut self, snapshot: &GameSnapshot) -> Result<Option<Side>>;
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every segment was partitioned
    Finished,
    /// The source stopped before the game was over
    Abandoned,
}

/// Drive `game` until it finishes or `source` stops.
pub fn run_session(
    game: &mut Game,
    source: &mut dyn ChoiceSource,
    ui: &BoardUI,
) -> Result<SessionOutcome> {
    let mut snapshot = game.snapshot();
    ui.show(&snapshot)?;

    while !snapshot.is_finished() {
        let Some(choice) = source.next_choice(&snapshot)? else {
            debug!(score = %snapshot.score, "session abandoned");
            return Ok(SessionOutcome::Abandoned);
        };
        snapshot = game.classify(choice);
        ui.show(&snapshot)?;
    }

    ui.show_summary(game.score(), game.moves())?;
    Ok(SessionOutcome::Finished)
}

/// Menu prompt on the terminal.
pub struct InteractivePrompt {
    theme: ColorfulTheme,
}

impl Default for InteractivePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractivePrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    /// Ask for the list of numbers to sort.
    pub fn ask_numbers(&self) -> Result<Vec<i64>> {
        let text: String = Input::with_theme(&self.theme)
            .with_prompt("Enter an unsorted list of integers (e.g. 3 9 2 8 5 1)")
            .validate_with(|input: &String| -> Result<(), String> {
                parse_integer_list(input)
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .interact_text()?;
        Ok(parse_integer_list(&text)?)
    }
}

impl ChoiceSource for InteractivePrompt {
    fn next_choice(&mut self, _snapshot: &GameSnapshot) -> Result<Option<Side>> {
        let options = &[
            "Send to LEFT partition",
            "Send to RIGHT partition",
            "Quit",
        ];

        let selection = Select::with_theme(&self.theme)
            .with_prompt("Where does it belong?")
            .items(options)
            .default(0)
            .interact()?;

        match selection {
            0 => Ok(Some(Side::Left)),
            1 => Ok(Some(Side::Right)),
            2 => Ok(None),
            _ => unreachable!(),
        }
    }
}

/// Choices given ahead of time; the session stops when they run out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedChoices {
    choices: VecDeque<Side>,
}

impl ScriptedChoices {
    pub fn new(choices: impl IntoIterator<Item = Side>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.choices.len()
    }
}

impl std::str::FromStr for ScriptedChoices {
    type Err = ChoiceError;

    /// Accepts separated words (`"left, r right"`) or a compact run of
    /// `l`/`r` letters (`"lrrl"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();

        let compact = tokens.len() == 1
            && tokens[0].len() > 1
            && tokens[0].chars().all(|c| matches!(c, 'l' | 'r' | 'L' | 'R'));

        let choices = if compact {
            tokens[0]
                .chars()
                .map(|c| c.to_string().parse())
                .collect::<Result<VecDeque<Side>, _>>()?
        } else {
            tokens
                .iter()
                .map(|t| t.parse())
                .collect::<Result<VecDeque<Side>, _>>()?
        };
        Ok(Self { choices })
    }
}

impl ChoiceSource for ScriptedChoices {
    fn next_choice(&mut self, _snapshot: &GameSnapshot) -> Result<Option<Side>> {
        Ok(self.choices.pop_front())
    }
}

/// Answers every question correctly.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerfectPlayer;

impl ChoiceSource for PerfectPlayer {
    fn next_choice(&mut self, snapshot: &GameSnapshot) -> Result<Option<Side>> {
        Ok(match (snapshot.current, snapshot.pivot) {
            (Some(value), Some(pivot)) => Some(Side::for_value(value, pivot)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pivot::PivotPolicy;
    use crate::ui::UiMode;

    fn quiet_ui() -> BoardUI {
        BoardUI::new(UiMode::Json)
    }

    #[test]
    fn test_scripted_parses_words() {
        let script: ScriptedChoices = "left, R  right l".parse().unwrap();
        assert_eq!(
            script,
            ScriptedChoices::new([Side::Left, Side::Right, Side::Right, Side::Left])
        );
    }

    #[test]
    fn test_scripted_parses_compact_letters() {
        let script: ScriptedChoices = "lrRL".parse().unwrap();
        assert_eq!(
            script,
            ScriptedChoices::new([Side::Left, Side::Right, Side::Right, Side::Left])
        );
    }

    #[test]
    fn test_scripted_single_letter() {
        let script: ScriptedChoices = "r".parse().unwrap();
        assert_eq!(script.remaining(), 1);
    }

    #[test]
    fn test_scripted_rejects_unknown_word() {
        let err = "left up".parse::<ScriptedChoices>().unwrap_err();
        assert_eq!(
            err,
            ChoiceError::Unrecognized {
                input: "up".to_string()
            }
        );
    }

    #[test]
    fn test_perfect_player_finishes_sorted() {
        let mut game = Game::begin_seeded(vec![3, 9, 2, 8, 5, 1], PivotPolicy::Random, 3);
        let outcome = run_session(&mut game, &mut PerfectPlayer, &quiet_ui()).unwrap();
        assert_eq!(outcome, SessionOutcome::Finished);
        let snap = game.snapshot();
        assert_eq!(snap.final_array, Some(vec![1, 2, 3, 5, 8, 9]));
        assert!(game.score().is_perfect());
    }

    #[test]
    fn test_short_script_abandons() {
        let mut game = Game::begin_seeded(vec![3, 9, 2, 8], PivotPolicy::First, 0);
        let mut script = ScriptedChoices::new([Side::Right]);
        let outcome = run_session(&mut game, &mut script, &quiet_ui()).unwrap();
        assert_eq!(outcome, SessionOutcome::Abandoned);
        assert_eq!(game.score().total, 1);
    }

    #[test]
    fn test_already_sorted_input_needs_no_choices() {
        let mut game = Game::begin_seeded(vec![42], PivotPolicy::First, 0);
        let mut script = ScriptedChoices::default();
        let outcome = run_session(&mut game, &mut script, &quiet_ui()).unwrap();
        assert_eq!(outcome, SessionOutcome::Finished);
    }
}

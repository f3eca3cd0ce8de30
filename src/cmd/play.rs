//! Interactive and scripted play — `pivot-drill play`.

use anyhow::{Result, anyhow, bail};
use console::{Term, style};

use pivot_drill::config::Settings;
use pivot_drill::engine::Game;
use pivot_drill::errors::ParseError;
use pivot_drill::input::parse_integer_list;
use pivot_drill::session::{
    ChoiceSource, InteractivePrompt, PerfectPlayer, ScriptedChoices, SessionOutcome, run_session,
};
use pivot_drill::ui::{BoardUI, UiMode};

pub fn cmd_play(
    settings: &Settings,
    numbers: Option<&str>,
    script: Option<&str>,
    auto: bool,
) -> Result<()> {
    let attended = Term::stdout().is_term();
    let scripted = auto || script.is_some();

    let values = match numbers {
        Some(text) => parse_integer_list(text).map_err(|e| anyhow!("Input error: {}", e))?,
        None if attended && !scripted => InteractivePrompt::new().ask_numbers()?,
        None => bail!("Input error: {}", ParseError::Empty),
    };

    if !attended && !scripted {
        bail!("No terminal available for prompts. Pass --script or --auto.");
    }

    let mut source: Box<dyn ChoiceSource> = if auto {
        Box::new(PerfectPlayer)
    } else if let Some(script) = script {
        Box::new(script.parse::<ScriptedChoices>()?)
    } else {
        Box::new(InteractivePrompt::new())
    };

    let mut game = match settings.seed {
        Some(seed) => Game::begin_seeded(values, settings.policy, seed),
        None => Game::begin(values, settings.policy),
    };

    let ui = BoardUI::new(settings.mode);
    if ui.mode() != UiMode::Json {
        println!(
            "{} (pivot: {})",
            style("Quick Sort partition game").bold(),
            settings.policy
        );
        println!();
    }

    let outcome = run_session(&mut game, source.as_mut(), &ui)?;
    if outcome == SessionOutcome::Abandoned && ui.mode() != UiMode::Json {
        println!(
            "Stopped before the end. {}",
            style(game.score().to_string()).dim()
        );
    }
    Ok(())
}

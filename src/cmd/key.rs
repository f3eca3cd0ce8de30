//! Answer key without playing — `pivot-drill key`.

use anyhow::{Result, anyhow};
use rand::SeedableRng;
use rand::rngs::StdRng;

use pivot_drill::answer_key::answer_key;
use pivot_drill::config::Settings;
use pivot_drill::input::parse_integer_list;
use pivot_drill::ui::BoardUI;

pub fn cmd_key(settings: &Settings, numbers: &str) -> Result<()> {
    let values = parse_integer_list(numbers).map_err(|e| anyhow!("Input error: {}", e))?;
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let key = answer_key(&values, settings.policy, &mut rng);
    BoardUI::new(settings.mode).show_answer_key(&key)?;
    Ok(())
}

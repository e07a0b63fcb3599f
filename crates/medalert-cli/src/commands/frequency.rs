//! Frequency command - normalize a directions phrase.

use clap::Args;

use medalert_core::label::rules::FrequencyNormalizer;

use super::load_config;

/// Arguments for the frequency command.
#[derive(Args)]
pub struct FrequencyArgs {
    /// Directions text, e.g. "Take 1 tablet by mouth bid"
    directions: String,
}

pub async fn run(args: FrequencyArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let normalizer =
        FrequencyNormalizer::new().with_empty_policy(config.extraction.empty_directions);

    match normalizer.normalize(&args.directions) {
        Some(found) => println!(
            "{} per day ({})",
            found.times_per_day,
            serde_json::to_value(found.rule)?
                .as_str()
                .unwrap_or("unknown")
        ),
        None => println!("unknown"),
    }

    Ok(())
}

//! `hilo shoe`: shuffle a seeded shoe, deal from it and report the count.

use hilo_engine::engine::Engine;
use hilo_engine::mt::DEFAULT_SEED;
use std::io::Write;
use tracing::warn;

use crate::cli::RuleFlags;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_cards, format_chart, format_rules};
use crate::ui;

/// Deals up to `deal` cards from a fresh shoe. With `chart`, solves for the
/// shoe's true count after the deal and prints the chart.
pub fn handle_shoe_command(
    decks: Option<u32>,
    seed: Option<u32>,
    deal: usize,
    chart: bool,
    flags: RuleFlags,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let config = config::load()?;
    let decks = decks.unwrap_or(config.decks);
    let seed = seed.or(config.seed).unwrap_or(DEFAULT_SEED);

    let mut engine = Engine::new();
    engine.seed(seed);
    let shoe = engine.new_shoe(decks)?;

    if deal > shoe.remaining() {
        warn!(deal, remaining = shoe.remaining(), "deal exceeds shoe");
        ui::display_warning(
            err,
            &format!("only {} cards in the shoe; dealing all of them", shoe.remaining()),
        )?;
    }
    for _ in 0..deal {
        if shoe.draw().is_none() {
            break;
        }
    }

    writeln!(out, "Shoe: {} deck(s), {} cards, seed {}", shoe.decks(), shoe.len(), seed)?;
    writeln!(out, "Dealt: {}", format_cards(shoe.in_play()))?;
    writeln!(out, "Running count: {:+}", shoe.running_count())?;
    writeln!(out, "True count: {:+.2}", shoe.true_count())?;
    writeln!(
        out,
        "Remaining: {}/{} (penetration {:.1}%)",
        shoe.remaining(),
        shoe.len(),
        shoe.penetration() * 100.0
    )?;

    if chart {
        let rules = flags.apply(&config);
        let strategy = engine.compute_strategy_for_shoe(rules.bits())?;
        writeln!(out)?;
        writeln!(out, "Rules: {}  True count: {:+.2}", format_rules(&rules), strategy.count)?;
        writeln!(out)?;
        writeln!(out, "{}", format_chart(strategy)?)?;
    }
    Ok(())
}

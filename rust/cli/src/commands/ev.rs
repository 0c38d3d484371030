//! `hilo ev`: expectancy of each action for one hand against one up-card.

use hilo_engine::engine::Engine;
use hilo_engine::solver::pair_total;
use std::io::Write;

use crate::cli::RuleFlags;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_ev, format_rules, total_label, value_label};
use crate::validation::Hand;

pub fn handle_ev_command(
    hand: Hand,
    up: u8,
    flags: RuleFlags,
    count: Option<f64>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let config = config::load()?;
    let rules = flags.apply(&config);
    let count = count.unwrap_or(config.count);

    let mut engine = Engine::new();
    let strategy = engine.compute_strategy(rules.bits(), count)?;

    let (total, split, best, label) = match hand {
        Hand::Total(total) => (total, None, strategy.decision(total, up)?, total_label(total)),
        Hand::Pair(pair) => {
            let card = value_label(pair);
            (
                pair_total(pair),
                Some(strategy.split.get(pair, up)?),
                strategy.pair_decision(pair, up)?,
                format!("pair {},{}", card, card),
            )
        }
    };
    let stand = strategy.stand.get(total, up)?;
    let stand_or_hit = strategy.stand_or_hit.get(total, up)?;
    let double = strategy.double.get(total, up)?;

    if json {
        let display = serde_json::json!({
            "hand": label,
            "up": up,
            "rules": rules,
            "count": count,
            "stand": stand,
            "stand_or_hit": stand_or_hit,
            "double": double,
            "split": split,
            "best": best,
        });
        let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
        return Ok(());
    }

    writeln!(
        out,
        "{} vs {}  ({}, count {:+.1})",
        label,
        value_label(up),
        format_rules(&rules),
        count
    )?;
    writeln!(out, "  stand         {}", format_ev(stand))?;
    writeln!(out, "  stand or hit  {}", format_ev(stand_or_hit))?;
    writeln!(out, "  double        {}", format_ev(double))?;
    if let Some(split) = split {
        writeln!(out, "  split         {}", format_ev(split))?;
    }
    writeln!(out, "  best          {}", best.letter())?;
    Ok(())
}

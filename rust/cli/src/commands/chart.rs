//! `hilo chart`: basic-strategy chart for a rule set and true count.

use hilo_engine::engine::Engine;
use std::io::Write;
use tracing::debug;

use crate::cli::RuleFlags;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_chart, format_rules};

/// Solves the tables and prints the chart, or with `json` the whole
/// strategy (dealer outcomes, every expectancy table and the bitmap).
///
/// # Errors
///
/// Returns `CliError::Config` for an invalid configuration and
/// `CliError::Engine` when the count is out of range.
pub fn handle_chart_command(
    flags: RuleFlags,
    count: Option<f64>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let config = config::load()?;
    let rules = flags.apply(&config);
    let count = count.unwrap_or(config.count);
    debug!(options = rules.bits(), count, json, "chart requested");

    let mut engine = Engine::new();
    let strategy = engine.compute_strategy(rules.bits(), count)?;

    if json {
        let json_str = serde_json::to_string_pretty(strategy).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
        return Ok(());
    }
    writeln!(out, "Rules: {}  True count: {:+.1}", format_rules(&rules), count)?;
    writeln!(out)?;
    writeln!(out, "{}", format_chart(strategy)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn prints_header_and_sections() {
        let mut out = Vec::new();
        handle_chart_command(RuleFlags::default(), Some(0.0), false, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Rules: S17, no DAS, no resplit, no peek  True count: +0.0"));
        assert!(output.contains("\nhard   2 3 4 5 6 7 8 9 T A\n"));
        assert!(output.contains("\nsoft   2 3 4 5 6 7 8 9 T A\n"));
        assert!(output.contains("\npair   2 3 4 5 6 7 8 9 T A\n"));
    }

    #[test]
    #[serial]
    fn json_is_the_full_strategy() {
        let mut out = Vec::new();
        let flags = RuleFlags {
            peek: true,
            ..RuleFlags::default()
        };
        handle_chart_command(flags, Some(2.0), true, &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["rules"]["hole_card_peek"], true);
        assert_eq!(json["count"], 2.0);
        for key in ["dealer", "stand", "stand_or_hit", "double", "split", "bitmap"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    #[serial]
    fn out_of_range_count_is_an_engine_error() {
        let mut out = Vec::new();
        let result = handle_chart_command(RuleFlags::default(), Some(50.0), false, &mut out);
        assert!(matches!(result, Err(CliError::Engine(_))));
        assert!(out.is_empty());
    }
}

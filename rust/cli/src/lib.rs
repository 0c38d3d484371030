//! # hilo CLI Library
//!
//! Command-line front end for the `hilo-engine` blackjack solver.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, dispatches to a subcommand and returns the
//! process exit code. Output streams are injected so tests can capture them.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = hilo_cli::run(["hilo", "rng", "--seed", "5489", "--draws", "1"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert_eq!(String::from_utf8(out).unwrap(), "MT19937 seed 5489: [3499211612]\n");
//! ```
//!
//! ## Available Subcommands
//!
//! - `chart`: Basic-strategy chart for a rule set and true count (`--json` for every table)
//! - `ev`: Expectancy of stand, stand-or-hit, double and split for one hand
//! - `shoe`: Shuffle a seeded shoe, deal, and report running and true count
//! - `rng`: Raw MT19937 outputs for a seed
//! - `cfg`: Display current configuration settings
//!
//! ## Configuration
//!
//! Defaults are overridden by the TOML file named in `HILO_CONFIG`, then by
//! `HILO_DECKS`, `HILO_SEED`, `HILO_COUNT`, `HILO_DAS`, `HILO_RESPLIT`,
//! `HILO_H17` and `HILO_PEEK`, then by command-line flags.

use clap::Parser;
use std::io::Write;
use tracing::debug;

#[macro_use]
mod macros;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, HiloCli};
use commands::{
    handle_cfg_command, handle_chart_command, handle_ev_command, handle_rng_command,
    handle_shoe_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["chart", "ev", "shoe", "rng", "cfg"];

/// Parses `args` and runs the selected subcommand.
///
/// # Returns
///
/// [`exit_code::SUCCESS`] on success, [`exit_code::ERROR`] for usage,
/// configuration and engine errors, [`exit_code::INTERRUPTED`] when the
/// output stream closes early.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HiloCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: hilo <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: hilo --help");
            return exit_code::ERROR;
        }
    };
    debug!(command = ?cli.cmd, "dispatching");

    let result = match cli.cmd {
        Commands::Chart { rules, count, json } => handle_chart_command(rules, count, json, out),
        Commands::Ev {
            hand,
            up,
            rules,
            count,
            json,
        } => handle_ev_command(hand, up, rules, count, json, out),
        Commands::Shoe {
            decks,
            seed,
            deal,
            chart,
            rules,
        } => handle_shoe_command(decks, seed, deal, chart, rules, out, err),
        Commands::Rng { seed, draws } => handle_rng_command(seed, draws, out),
        Commands::Cfg => {
            // cfg reports its own configuration errors
            return match handle_cfg_command(out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
                Err(_) => exit_code::ERROR,
            };
        }
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn run_capture(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn help_goes_to_stdout() {
        let (code, out, err) = run_capture(&["hilo", "--help"]);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(out.contains("chart"));
        assert!(err.is_empty());
    }

    #[test]
    fn unknown_command_lists_commands() {
        let (code, out, err) = run_capture(&["hilo", "play"]);
        assert_eq!(code, exit_code::ERROR);
        assert!(out.is_empty());
        for c in COMMANDS {
            assert!(err.contains(&format!("  {}\n", c)), "missing {c}");
        }
    }

    #[test]
    #[serial]
    fn engine_errors_are_reported() {
        let (code, out, err) = run_capture(&["hilo", "shoe", "--decks", "0"]);
        assert_eq!(code, exit_code::ERROR);
        assert!(out.is_empty());
        assert_eq!(err, "Error: Engine error: Invalid deck count: 0, minimum: 1\n");
    }

    #[test]
    #[serial]
    fn closed_output_is_an_interruption() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let mut err = Vec::new();
        let code = run(["hilo", "chart"], &mut Closed, &mut err);
        assert_eq!(code, exit_code::INTERRUPTED);
        assert!(err.is_empty());
    }
}

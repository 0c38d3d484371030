//! `hilo cfg`: the resolved configuration with the source of each value.
//!
//! # Example Output
//!
//! ```json
//! {
//!   "decks": {
//!     "value": 6,
//!     "source": "default"
//!   },
//!   "count": {
//!     "value": 1.5,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// # Errors
///
/// Returns `CliError::Config` if the configuration cannot be loaded; the
/// reason is also written to `err`.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "decks": {
            "value": config.decks,
            "source": sources.decks,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "count": {
            "value": config.count,
            "source": sources.count,
        },
        "double_after_split": {
            "value": config.double_after_split,
            "source": sources.double_after_split,
        },
        "resplit": {
            "value": config.resplit,
            "source": sources.resplit,
        },
        "dealer_hits_soft_17": {
            "value": config.dealer_hits_soft_17,
            "source": sources.dealer_hits_soft_17,
        },
        "hole_card_peek": {
            "value": config.hole_card_peek,
            "source": sources.hole_card_peek,
        },
        "options": config.rules().bits(),
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

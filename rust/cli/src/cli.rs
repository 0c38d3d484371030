//! Command-line definitions.

use clap::{Args, Parser, Subcommand};
use hilo_engine::rules::Rules;

use crate::config::Config;
use crate::validation::{Hand, parse_hand, parse_up_card};

#[derive(Parser, Debug)]
#[command(
    name = "hilo",
    version,
    about = "Hi-Lo blackjack expectancy solver and seeded shoe"
)]
pub struct HiloCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Rule flags shared by the solver commands. Each rule has an `--x` and a
/// `--no-x` form; the last one given wins and either replaces the configured
/// value. Rules with neither flag keep their configured value.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct RuleFlags {
    /// Allow doubling after a split
    #[arg(long, overrides_with = "no_das")]
    pub das: bool,
    #[arg(long, overrides_with = "das", hide = true)]
    pub no_das: bool,
    /// Allow resplitting pairs
    #[arg(long, overrides_with = "no_resplit")]
    pub resplit: bool,
    #[arg(long, overrides_with = "resplit", hide = true)]
    pub no_resplit: bool,
    /// Dealer hits soft 17
    #[arg(long, overrides_with = "no_h17")]
    pub h17: bool,
    #[arg(long, overrides_with = "h17", hide = true)]
    pub no_h17: bool,
    /// Dealer checks the hole card for blackjack
    #[arg(long, overrides_with = "no_peek")]
    pub peek: bool,
    #[arg(long, overrides_with = "peek", hide = true)]
    pub no_peek: bool,
}

fn resolve_flag(on: bool, off: bool, configured: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => configured,
    }
}

impl RuleFlags {
    pub fn apply(&self, config: &Config) -> Rules {
        let configured = config.rules();
        Rules {
            double_after_split: resolve_flag(
                self.das,
                self.no_das,
                configured.double_after_split,
            ),
            resplit: resolve_flag(self.resplit, self.no_resplit, configured.resplit),
            dealer_hits_soft_17: resolve_flag(
                self.h17,
                self.no_h17,
                configured.dealer_hits_soft_17,
            ),
            hole_card_peek: resolve_flag(self.peek, self.no_peek, configured.hole_card_peek),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the basic-strategy chart for a rule set and true count
    Chart {
        #[command(flatten)]
        rules: RuleFlags,
        /// Hi-Lo true count
        #[arg(long, allow_negative_numbers = true)]
        count: Option<f64>,
        /// Emit every expectancy table as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the expectancy of each action for one hand
    Ev {
        /// Hand: `16` or `h16` (hard), `s18` (soft), `p8` or `pA` (pair)
        #[arg(long, value_parser = parse_hand)]
        hand: Hand,
        /// Dealer up-card: 2-9, T or A
        #[arg(long, value_parser = parse_up_card)]
        up: u8,
        #[command(flatten)]
        rules: RuleFlags,
        #[arg(long, allow_negative_numbers = true)]
        count: Option<f64>,
        #[arg(long)]
        json: bool,
    },
    /// Shuffle a shoe and deal from it
    Shoe {
        #[arg(long)]
        decks: Option<u32>,
        #[arg(long)]
        seed: Option<u32>,
        /// Cards to deal
        #[arg(long, default_value_t = 10)]
        deal: usize,
        /// Also print the chart for the shoe's true count
        #[arg(long)]
        chart: bool,
        #[command(flatten)]
        rules: RuleFlags,
    },
    /// Print raw generator outputs
    Rng {
        #[arg(long)]
        seed: Option<u32>,
        /// Number of outputs
        #[arg(long, default_value_t = 5)]
        draws: usize,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}

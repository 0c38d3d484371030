//! Expectancy solver.
//!
//! [`solve`] runs the builders in dependency order, each consuming the tables
//! produced before it:
//!
//! | Stage | Module | Produces |
//! |-------|--------|----------|
//! | 1 | [`dealer`] | dealer finishing distribution per up-card |
//! | 2 | [`stand`] | EV of standing per total |
//! | 3 | [`double`] | EV of doubling per total |
//! | 4 | [`hit`] | EV of stand-or-hit per total and the hit/stand bitmap |
//! | 5 | [`split`] | EV of splitting per pair |
//!
//! Draws are modelled as independent with count-biased probabilities, so
//! each builder is a short backward induction over totals with rows of ten
//! up-card lanes.

pub mod dealer;
pub mod double;
pub mod hit;
pub mod split;
pub mod stand;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::EngineError;
use crate::probability::Weights;
use crate::rules::Rules;
use crate::tables::{
    DealerOutcomes, ExpectancyTable, SplitTable, StrategyBitmap, Total, HARD_MAX,
    HARD_MIN, SOFT_MAX, SOFT_MIN,
};
use split::{Played, SplitPolicy};

/// The action with the best EV for one cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Stand,
    Hit,
    Double,
    Split,
}

impl Decision {
    /// Chart letter: S, H, D or P.
    pub fn letter(&self) -> char {
        match self {
            Decision::Stand => 'S',
            Decision::Hit => 'H',
            Decision::Double => 'D',
            Decision::Split => 'P',
        }
    }
}

/// Every table for one (rules, count) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub rules: Rules,
    pub count: f64,
    pub weights: Weights,
    pub dealer: DealerOutcomes,
    pub stand: ExpectancyTable,
    pub stand_or_hit: ExpectancyTable,
    pub double: ExpectancyTable,
    pub split: SplitTable,
    pub bitmap: StrategyBitmap,
}

impl Strategy {
    /// Best of stand, hit and double for a total. Doubling is offered on
    /// every total; callers that only allow it on two cards filter it out.
    pub fn decision(&self, total: Total, up: u8) -> Result<Decision, EngineError> {
        let played = self.stand_or_hit.get(total, up)?;
        if self.double.get(total, up)? > played {
            return Ok(Decision::Double);
        }
        Ok(if self.bitmap.hits(total, up)? {
            Decision::Hit
        } else {
            Decision::Stand
        })
    }

    /// Best action holding a pair of cards worth `pair` (2..=11).
    pub fn pair_decision(&self, pair: u8, up: u8) -> Result<Decision, EngineError> {
        let split = self.split.get(pair, up)?;
        let total = pair_total(pair);
        let unsplit = self
            .stand_or_hit
            .get(total, up)?
            .max(self.double.get(total, up)?);
        if split > unsplit {
            return Ok(Decision::Split);
        }
        self.decision(total, up)
    }
}

/// Two-card total of a pair: hard `2 * pair`, or soft 12 for aces.
pub fn pair_total(pair: u8) -> Total {
    if pair == 11 {
        Total::soft(12)
    } else {
        Total::hard(pair * 2)
    }
}

/// Builds every table for `rules` under a Hi-Lo true count.
///
/// # Errors
///
/// Returns [`EngineError::CountOutOfRange`] when the count cannot be turned
/// into valid draw probabilities.
pub fn solve(rules: Rules, count: f64) -> Result<Strategy, EngineError> {
    let weights = Weights::from_count(count)?;

    let dealer = dealer::build(&weights, &rules);
    debug!(large = weights.large, small = weights.small, "dealer outcomes built");
    let stand = stand::build(&dealer);
    let double = double::build(&weights, &stand);
    let (stand_or_hit, bitmap) = hit::build(&weights, &stand);
    debug!("stand, double and hit tables built");

    let policy = SplitPolicy::from_rules(&rules);
    let split = split::build(
        policy,
        &weights,
        &Played {
            stand: &stand,
            stand_or_hit: &stand_or_hit,
            double: &double,
        },
    );
    info!(options = rules.bits(), count, ?policy, "strategy computed");

    Ok(Strategy {
        rules,
        count,
        weights,
        dealer,
        stand,
        stand_or_hit,
        double,
        split,
        bitmap,
    })
}

/// Probability that one more card busts `total`.
pub(crate) fn bust_probability(weights: &Weights, total: Total) -> f64 {
    (2..=11u8)
        .filter(|&card| total.advance(card).is_none())
        .map(|card| weights.value(card))
        .sum()
}

/// Every player total with a table row, hard then soft.
pub(crate) fn player_totals() -> impl Iterator<Item = Total> {
    (HARD_MIN..=HARD_MAX)
        .map(Total::hard)
        .chain((SOFT_MIN..=SOFT_MAX).map(Total::soft))
}

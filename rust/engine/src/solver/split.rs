//! EV of splitting a pair into two hands.

use serde::{Deserialize, Serialize};

use crate::kernels::{accumulate, accumulate_max, scale};
use crate::probability::Weights;
use crate::rules::Rules;
use crate::tables::{ExpectancyTable, Row, SplitTable, Total, UP_CARDS};

/// How each post-split hand continues after its second card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Continuation {
    /// Stand or hit only.
    StandOrHit,
    /// Stand, hit, or double, whichever is best.
    BestWithDouble,
}

/// Split policy, fixed once per strategy computation from the rule flags.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum SplitPolicy {
    /// Each pair is split once; a second card of the same value is played as a total.
    Once(Continuation),
    /// A card of the pair value is split again, so the played hands are the
    /// ones that did not pair up.
    Resplit(Continuation),
}

impl SplitPolicy {
    pub fn from_rules(rules: &Rules) -> Self {
        let continuation = if rules.double_after_split {
            Continuation::BestWithDouble
        } else {
            Continuation::StandOrHit
        };
        if rules.resplit {
            SplitPolicy::Resplit(continuation)
        } else {
            SplitPolicy::Once(continuation)
        }
    }

    fn continuation(&self) -> Continuation {
        match *self {
            SplitPolicy::Once(c) | SplitPolicy::Resplit(c) => c,
        }
    }
}

/// Tables a post-split hand plays from.
pub(crate) struct Played<'a> {
    pub stand: &'a ExpectancyTable,
    pub stand_or_hit: &'a ExpectancyTable,
    pub double: &'a ExpectancyTable,
}

pub(crate) fn build(policy: SplitPolicy, weights: &Weights, played: &Played<'_>) -> SplitTable {
    let mut table = SplitTable::default();
    for pair in 2..=11u8 {
        *table.at_mut(pair) = split_pair(policy, weights, played, pair);
    }
    table
}

fn split_pair(policy: SplitPolicy, weights: &Weights, played: &Played<'_>, pair: u8) -> Row {
    let resplit = matches!(policy, SplitPolicy::Resplit(_));
    let start = Total::single(pair);
    let mut row = [0.0; UP_CARDS];
    for card in 2..=11u8 {
        if resplit && card == pair {
            continue;
        }
        let Some(next) = start.advance(card) else {
            continue;
        };
        let p = weights.value(card);
        if pair == 11 {
            // split aces receive one card each
            accumulate(p, played.stand.at(next), &mut row);
            continue;
        }
        match policy.continuation() {
            Continuation::StandOrHit => accumulate(p, played.stand_or_hit.at(next), &mut row),
            Continuation::BestWithDouble => accumulate_max(
                p,
                played.stand_or_hit.at(next),
                played.double.at(next),
                &mut row,
            ),
        }
    }
    let hands = if resplit {
        2.0 / (1.0 - weights.value(pair))
    } else {
        2.0
    };
    scale(hands, &mut row);
    row
}

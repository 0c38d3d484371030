//! Where the dealer finishes, by backward induction over dealer totals.

use crate::kernels::{accumulate, fill, scale};
use crate::probability::Weights;
use crate::rules::Rules;
use crate::tables::{DealerOutcomes, Total, TotalKind, BUST, OUTCOMES, UP_CARDS};

type Outcome = [f64; OUTCOMES];

/// Outcome distribution for every dealer total, indexed by total value.
struct Chain {
    hard: [Outcome; 22],
    soft: [Outcome; 22],
}

impl Chain {
    fn get(&self, total: Total) -> &Outcome {
        match total.kind {
            TotalKind::Hard => &self.hard[total.value as usize],
            TotalKind::Soft => &self.soft[total.value as usize],
        }
    }

    /// Distribution after the dealer draws one more card from `total`.
    fn draw(&self, weights: &Weights, total: Total) -> Outcome {
        let mut out = [0.0; OUTCOMES];
        for card in 2..=11 {
            let p = weights.value(card);
            match total.advance(card) {
                Some(next) => accumulate(p, self.get(next), &mut out),
                None => out[BUST] += p,
            }
        }
        out
    }
}

pub(crate) fn build(weights: &Weights, rules: &Rules) -> DealerOutcomes {
    let mut chain = Chain {
        hard: [[0.0; OUTCOMES]; 22],
        soft: [[0.0; OUTCOMES]; 22],
    };
    let soft_stand = if rules.dealer_hits_soft_17 { 18 } else { 17 };
    for t in 17..=21u8 {
        chain.hard[t as usize][(t - 17) as usize] = 1.0;
    }
    for t in soft_stand..=21u8 {
        chain.soft[t as usize][(t - 17) as usize] = 1.0;
    }

    // hard 12..=16 and 11 only ever reach higher hard totals
    for t in (11..=16).rev() {
        chain.hard[t as usize] = chain.draw(weights, Total::hard(t));
    }
    // soft totals fall back to hard 12..=21 when they would bust
    for t in (12..soft_stand).rev() {
        chain.soft[t as usize] = chain.draw(weights, Total::soft(t));
    }
    for t in (2..=10).rev() {
        chain.hard[t as usize] = chain.draw(weights, Total::hard(t));
    }

    let mut outcomes = DealerOutcomes::default();
    for (lane, up) in (2..=11u8).enumerate() {
        let row = &mut outcomes.rows[lane];
        fill(row, 0.0);
        let start = Total::single(up);
        for hole in 2..=11u8 {
            if is_blackjack(up, hole) {
                continue;
            }
            if let Some(next) = start.advance(hole) {
                accumulate(weights.value(hole), chain.get(next), row);
            }
        }
        outcomes.blackjack[lane] = blackjack_probability(weights, up);
    }

    if rules.hole_card_peek {
        for lane in 0..UP_CARDS {
            let bj = outcomes.blackjack[lane];
            if bj > 0.0 {
                scale(1.0 / (1.0 - bj), &mut outcomes.rows[lane]);
                outcomes.blackjack[lane] = 0.0;
            }
        }
    }
    outcomes
}

fn is_blackjack(up: u8, hole: u8) -> bool {
    matches!((up, hole), (10, 11) | (11, 10))
}

fn blackjack_probability(weights: &Weights, up: u8) -> f64 {
    match up {
        10 => weights.value(11),
        11 => weights.value(10),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_mass(outcomes: &DealerOutcomes, up: u8) -> f64 {
        let finals: f64 = (17..=21).map(|t| outcomes.finish(up, t).unwrap()).sum();
        finals + outcomes.bust(up).unwrap() + outcomes.blackjack(up).unwrap()
    }

    #[test]
    fn every_up_card_row_is_a_distribution() {
        let weights = Weights::from_count(0.0).unwrap();
        for options in 0..16u8 {
            let rules = Rules::from_bits(options).unwrap();
            let outcomes = build(&weights, &rules);
            for up in 2..=11 {
                let mass = total_mass(&outcomes, up);
                assert!((mass - 1.0).abs() < 1e-12, "up {up} options {options}: {mass}");
            }
        }
    }

    #[test]
    fn blackjack_odds_sit_under_ten_and_ace() {
        let weights = Weights::from_count(0.0).unwrap();
        let outcomes = build(&weights, &Rules::default());
        assert!((outcomes.blackjack(10).unwrap() - 1.0 / 13.0).abs() < 1e-15);
        assert!((outcomes.blackjack(11).unwrap() - 4.0 / 13.0).abs() < 1e-15);
        assert_eq!(outcomes.blackjack(9).unwrap(), 0.0);
    }

    #[test]
    fn peeking_removes_blackjack_and_rescales() {
        let weights = Weights::from_count(0.0).unwrap();
        let open = build(&weights, &Rules::default());
        let peek = build(&weights, &Rules::from_bits(Rules::HOLE_CARD_PEEK).unwrap());
        assert_eq!(peek.blackjack(11).unwrap(), 0.0);
        let ratio = peek.finish(11, 19).unwrap() / open.finish(11, 19).unwrap();
        assert!((ratio - 13.0 / 9.0).abs() < 1e-12);
        assert_eq!(peek.finish(6, 20).unwrap(), open.finish(6, 20).unwrap());
    }

    #[test]
    fn hitting_soft_17_never_finishes_on_soft_17() {
        let weights = Weights::from_count(0.0).unwrap();
        let stand = build(&weights, &Rules::default());
        let hit = build(&weights, &Rules::from_bits(Rules::DEALER_HITS_SOFT_17).unwrap());
        // an ace up-card lands on 17 less often when soft 17 is drawn to
        assert!(hit.finish(11, 17).unwrap() < stand.finish(11, 17).unwrap());
        assert!(hit.bust(6).unwrap() > stand.bust(6).unwrap());
    }
}

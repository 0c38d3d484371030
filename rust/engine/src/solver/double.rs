//! EV of doubling down: exactly one more card at twice the stake.

use crate::kernels::{accumulate, fill, scale};
use crate::probability::Weights;
use crate::solver::{bust_probability, player_totals};
use crate::tables::{ExpectancyTable, Row, Total, UP_CARDS};

pub(crate) fn build(weights: &Weights, stand: &ExpectancyTable) -> ExpectancyTable {
    let mut table = ExpectancyTable::default();
    for total in player_totals() {
        let row = one_card(weights, stand, total);
        *table.at_mut(total) = row;
    }
    table
}

fn one_card(weights: &Weights, stand: &ExpectancyTable, total: Total) -> Row {
    let mut row = [0.0; UP_CARDS];
    fill(&mut row, -bust_probability(weights, total));
    for card in 2..=11 {
        if let Some(next) = total.advance(card) {
            accumulate(weights.value(card), stand.at(next), &mut row);
        }
    }
    scale(2.0, &mut row);
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rules;
    use crate::solver::{dealer, stand};

    fn tables(count: f64) -> (Weights, ExpectancyTable, ExpectancyTable) {
        let weights = Weights::from_count(count).unwrap();
        let stand = stand::build(&dealer::build(&weights, &Rules::default()));
        let double = build(&weights, &stand);
        (weights, stand, double)
    }

    #[test]
    fn doubling_hard_20_is_terrible() {
        let (_, stand, double) = tables(0.0);
        for up in 2..=11 {
            assert!(
                double.get(Total::hard(20), up).unwrap() < stand.get(Total::hard(20), up).unwrap()
            );
        }
    }

    #[test]
    fn doubling_11_against_a_six_pays() {
        let (_, _, double) = tables(0.0);
        assert!(double.get(Total::hard(11), 6).unwrap() > 0.3);
    }

    #[test]
    fn low_totals_cannot_bust_on_one_card() {
        let (weights, stand, double) = tables(0.0);
        // hard 6 reaches 8..=16 or soft 17; every result stands at the hard-16 row or better
        let mut expected = [0.0; UP_CARDS];
        for card in 2..=11 {
            let next = Total::hard(6).advance(card).unwrap();
            accumulate(2.0 * weights.value(card), stand.at(next), &mut expected);
        }
        let got = double.row(Total::hard(6)).unwrap();
        for lane in 0..UP_CARDS {
            assert!((got[lane] - expected[lane]).abs() < 1e-12);
        }
    }

    #[test]
    fn positive_count_makes_doubling_10_better() {
        let (_, _, cold) = tables(-3.0);
        let (_, _, hot) = tables(3.0);
        assert!(hot.get(Total::hard(10), 9).unwrap() > cold.get(Total::hard(10), 9).unwrap());
    }
}

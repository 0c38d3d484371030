//! EV of playing on optimally (stand or hit) and the hit/stand bitmap.

use crate::kernels::{accumulate, compare_and_track_max, copy, fill};
use crate::probability::Weights;
use crate::solver::bust_probability;
use crate::tables::{
    ExpectancyTable, Row, StrategyBitmap, Total, ALL_UP_CARDS, HARD_MAX, HARD_MIN, SOFT_MAX,
    SOFT_MIN, UP_CARDS,
};

/// Hard totals at or below this never bust on one card.
const SAFE_HARD_MAX: u8 = 10;

pub(crate) fn build(
    weights: &Weights,
    stand: &ExpectancyTable,
) -> (ExpectancyTable, StrategyBitmap) {
    let mut table = stand.clone();
    let mut bitmap = StrategyBitmap::default();

    // hard 21 always stands; soft rows can fall back onto hard 12..=21
    bitmap.set(Total::hard(HARD_MAX), 0);
    for value in ((SAFE_HARD_MAX + 1)..HARD_MAX).rev() {
        decide(weights, &mut table, &mut bitmap, Total::hard(value));
    }
    for value in (SOFT_MIN..=SOFT_MAX).rev() {
        decide(weights, &mut table, &mut bitmap, Total::soft(value));
    }

    for value in (HARD_MIN..=SAFE_HARD_MAX).rev() {
        let total = Total::hard(value);
        let row = hit_once(weights, &table, total);
        copy(&row, table.at_mut(total));
        bitmap.set(total, ALL_UP_CARDS);
    }
    (table, bitmap)
}

fn decide(
    weights: &Weights,
    table: &mut ExpectancyTable,
    bitmap: &mut StrategyBitmap,
    total: Total,
) {
    let row = hit_once(weights, table, total);
    let mask = compare_and_track_max(&row, table.at_mut(total));
    bitmap.set(total, mask);
}

/// EV of taking exactly one card and then playing on from `table`.
fn hit_once(weights: &Weights, table: &ExpectancyTable, total: Total) -> Row {
    let mut row = [0.0; UP_CARDS];
    fill(&mut row, -bust_probability(weights, total));
    for card in 2..=11 {
        if let Some(next) = total.advance(card) {
            accumulate(weights.value(card), table.at(next), &mut row);
        }
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rules;
    use crate::solver::{dealer, stand};

    fn solve(count: f64, options: u8) -> (ExpectancyTable, ExpectancyTable, StrategyBitmap) {
        let weights = Weights::from_count(count).unwrap();
        let rules = Rules::from_bits(options).unwrap();
        let stand = stand::build(&dealer::build(&weights, &rules));
        let (hit, bitmap) = build(&weights, &stand);
        (stand, hit, bitmap)
    }

    #[test]
    fn playing_on_is_never_worse_than_standing() {
        let (stand, hit, _) = solve(0.0, 0);
        for value in HARD_MIN..=HARD_MAX {
            let total = Total::hard(value);
            for up in 2..=11 {
                assert!(hit.get(total, up).unwrap() >= stand.get(total, up).unwrap());
            }
        }
    }

    #[test]
    fn bitmap_agrees_with_table() {
        let (stand, hit, bitmap) = solve(2.0, Rules::HOLE_CARD_PEEK);
        for value in (SAFE_HARD_MAX + 1)..=HARD_MAX {
            let total = Total::hard(value);
            for up in 2..=11 {
                let hits = bitmap.hits(total, up).unwrap();
                let raised = hit.get(total, up).unwrap() > stand.get(total, up).unwrap();
                assert_eq!(hits, raised, "hard {value} vs {up}");
            }
        }
    }

    #[test]
    fn low_hard_totals_always_hit() {
        let (_, _, bitmap) = solve(-5.0, 0);
        for value in HARD_MIN..=SAFE_HARD_MAX {
            assert_eq!(bitmap.mask(Total::hard(value)).unwrap(), ALL_UP_CARDS);
        }
        assert_eq!(bitmap.mask(Total::hard(21)).unwrap(), 0);
    }

    #[test]
    fn soft_17_is_always_hit() {
        let (_, _, bitmap) = solve(0.0, 0);
        assert_eq!(bitmap.mask(Total::soft(17)).unwrap(), ALL_UP_CARDS);
        assert_eq!(bitmap.mask(Total::soft(21)).unwrap(), 0);
    }
}

//! EV of standing on each total.

use crate::kernels::{accumulate, accumulate_strided, copy, fill};
use crate::tables::{
    DealerOutcomes, ExpectancyTable, Row, Total, HARD_MAX, HARD_MIN, OUTCOMES, SOFT_MIN,
    UP_CARDS,
};

/// `row[u] += a * P(dealer finishes on total | u)`; totals outside 17..=21 add nothing.
fn add_finish(dealer: &DealerOutcomes, total: u8, a: f64, row: &mut Row) {
    if !(17..=21).contains(&total) {
        return;
    }
    let column = &dealer.flat()[(total - 17) as usize..];
    accumulate_strided(UP_CARDS, a, column, OUTCOMES, row, 1);
}

pub(crate) fn build(dealer: &DealerOutcomes) -> ExpectancyTable {
    let mut table = ExpectancyTable::default();

    // 21 wins unless the dealer also makes 21 (push) or has blackjack
    let top = table.at_mut(Total::hard(HARD_MAX));
    fill(top, 1.0);
    add_finish(dealer, 21, -1.0, top);
    accumulate(-2.0, &dealer.blackjack, top);

    // one lower: finishing on n turns a push into a loss, on n - 1 a win into a push
    for n in ((HARD_MIN + 1)..=HARD_MAX).rev() {
        let mut row = *table.at(Total::hard(n));
        add_finish(dealer, n, -1.0, &mut row);
        add_finish(dealer, n - 1, -1.0, &mut row);
        copy(&row, table.at_mut(Total::hard(n - 1)));
    }

    for n in SOFT_MIN..=HARD_MAX {
        let row = *table.at(Total::hard(n));
        copy(&row, table.at_mut(Total::soft(n)));
    }
    table
}

//! Typed expectancy tables.
//!
//! Every table is addressed by `(kind, total, up-card)`; rows hold one lane
//! per dealer up-card, lane `i` for up-card `i + 2` (lane 9 is the ace).

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Dealer up-cards per row: 2..=10 and the ace.
pub const UP_CARDS: usize = 10;

pub const HARD_MIN: u8 = 4;
pub const HARD_MAX: u8 = 21;
pub const SOFT_MIN: u8 = 12;
pub const SOFT_MAX: u8 = 21;

const HARD_ROWS: usize = (HARD_MAX - HARD_MIN + 1) as usize;
const SOFT_ROWS: usize = (SOFT_MAX - SOFT_MIN + 1) as usize;
const PAIR_ROWS: usize = 10;

/// One value per dealer up-card.
pub type Row = [f64; UP_CARDS];

/// Mask with one bit per up-card.
pub const ALL_UP_CARDS: u16 = (1 << UP_CARDS) - 1;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalKind {
    Hard,
    Soft,
}

impl TotalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TotalKind::Hard => "hard",
            TotalKind::Soft => "soft",
        }
    }

    /// Totals with a row in the player tables.
    pub fn range(&self) -> std::ops::RangeInclusive<u8> {
        match self {
            TotalKind::Hard => HARD_MIN..=HARD_MAX,
            TotalKind::Soft => SOFT_MIN..=SOFT_MAX,
        }
    }
}

/// A hand total: its value and whether an ace is counted as 11.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Total {
    pub kind: TotalKind,
    pub value: u8,
}

impl Total {
    pub const fn hard(value: u8) -> Self {
        Self {
            kind: TotalKind::Hard,
            value,
        }
    }

    pub const fn soft(value: u8) -> Self {
        Self {
            kind: TotalKind::Soft,
            value,
        }
    }

    /// Total of a hand holding a single card worth `card` (11 = ace).
    pub const fn single(card: u8) -> Self {
        if card == 11 {
            Self::soft(11)
        } else {
            Self::hard(card)
        }
    }

    pub fn is_soft(&self) -> bool {
        self.kind == TotalKind::Soft
    }

    /// Adds one card worth `card` (2..=11, 11 = ace); `None` on bust.
    ///
    /// An ace counts as 11 when that does not bust the hand. A soft hand
    /// that would bust demotes its ace to 1 and becomes hard.
    ///
    /// ```
    /// use hilo_engine::tables::Total;
    ///
    /// assert_eq!(Total::hard(5).advance(11), Some(Total::soft(16)));
    /// assert_eq!(Total::hard(15).advance(11), Some(Total::hard(16)));
    /// assert_eq!(Total::soft(15).advance(9), Some(Total::hard(14)));
    /// assert_eq!(Total::soft(21).advance(11), Some(Total::hard(12)));
    /// assert_eq!(Total::hard(15).advance(7), None);
    /// ```
    pub fn advance(self, card: u8) -> Option<Total> {
        let mut value = self.value + card;
        let mut soft = self.is_soft();
        if card == 11 {
            if value > 21 {
                value -= 10;
            } else {
                soft = true;
            }
        }
        if value > 21 && soft {
            value -= 10;
            soft = false;
        }
        if value > 21 {
            return None;
        }
        Some(if soft {
            Total::soft(value)
        } else {
            Total::hard(value)
        })
    }
}

/// Lane for a dealer up-card (2..=11).
pub fn up_index(up: u8) -> Result<usize, EngineError> {
    match up {
        2..=11 => Ok((up - 2) as usize),
        _ => Err(EngineError::InvalidUpCard { up }),
    }
}

/// EV per (kind, total, up-card): hard 4..=21, soft 12..=21.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectancyTable {
    hard: [Row; HARD_ROWS],
    soft: [Row; SOFT_ROWS],
}

impl Default for ExpectancyTable {
    fn default() -> Self {
        Self {
            hard: [[0.0; UP_CARDS]; HARD_ROWS],
            soft: [[0.0; UP_CARDS]; SOFT_ROWS],
        }
    }
}

/// Slot of a total the builders know to be in range.
fn known_slot(total: Total) -> usize {
    debug_assert!(
        slot(total).is_some(),
        "{} {} outside table range",
        total.kind.as_str(),
        total.value
    );
    let min = match total.kind {
        TotalKind::Hard => HARD_MIN,
        TotalKind::Soft => SOFT_MIN,
    };
    (total.value - min) as usize
}

fn slot(total: Total) -> Option<usize> {
    let (min, max) = match total.kind {
        TotalKind::Hard => (HARD_MIN, HARD_MAX),
        TotalKind::Soft => (SOFT_MIN, SOFT_MAX),
    };
    (min..=max)
        .contains(&total.value)
        .then(|| (total.value - min) as usize)
}

impl ExpectancyTable {
    pub fn row(&self, total: Total) -> Result<&Row, EngineError> {
        let i = slot(total).ok_or(EngineError::InvalidTotal {
            kind: total.kind.as_str(),
            total: total.value,
        })?;
        Ok(match total.kind {
            TotalKind::Hard => &self.hard[i],
            TotalKind::Soft => &self.soft[i],
        })
    }

    pub fn get(&self, total: Total, up: u8) -> Result<f64, EngineError> {
        Ok(self.row(total)?[up_index(up)?])
    }

    pub(crate) fn at(&self, total: Total) -> &Row {
        let i = known_slot(total);
        match total.kind {
            TotalKind::Hard => &self.hard[i],
            TotalKind::Soft => &self.soft[i],
        }
    }

    pub(crate) fn at_mut(&mut self, total: Total) -> &mut Row {
        let i = known_slot(total);
        match total.kind {
            TotalKind::Hard => &mut self.hard[i],
            TotalKind::Soft => &mut self.soft[i],
        }
    }
}

/// EV of splitting a pair, per pair card value (2..=11) and up-card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitTable {
    pairs: [Row; PAIR_ROWS],
}

impl Default for SplitTable {
    fn default() -> Self {
        Self {
            pairs: [[0.0; UP_CARDS]; PAIR_ROWS],
        }
    }
}

impl SplitTable {
    pub fn row(&self, pair: u8) -> Result<&Row, EngineError> {
        match pair {
            2..=11 => Ok(&self.pairs[(pair - 2) as usize]),
            _ => Err(EngineError::InvalidPair { pair }),
        }
    }

    pub fn get(&self, pair: u8, up: u8) -> Result<f64, EngineError> {
        Ok(self.row(pair)?[up_index(up)?])
    }

    pub(crate) fn at_mut(&mut self, pair: u8) -> &mut Row {
        &mut self.pairs[(pair - 2) as usize]
    }
}

/// Per total, the up-cards against which hitting beats standing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StrategyBitmap {
    hard: [u16; HARD_ROWS],
    soft: [u16; SOFT_ROWS],
}

impl StrategyBitmap {
    pub fn mask(&self, total: Total) -> Result<u16, EngineError> {
        let i = slot(total).ok_or(EngineError::InvalidTotal {
            kind: total.kind.as_str(),
            total: total.value,
        })?;
        Ok(match total.kind {
            TotalKind::Hard => self.hard[i],
            TotalKind::Soft => self.soft[i],
        })
    }

    pub fn hits(&self, total: Total, up: u8) -> Result<bool, EngineError> {
        Ok(self.mask(total)? & (1 << up_index(up)?) != 0)
    }

    pub(crate) fn set(&mut self, total: Total, mask: u16) {
        let i = known_slot(total);
        match total.kind {
            TotalKind::Hard => self.hard[i] = mask,
            TotalKind::Soft => self.soft[i] = mask,
        }
    }
}

/// Dealer finishing totals tracked per up-card: 17, 18, 19, 20, 21, bust.
pub const OUTCOMES: usize = 6;
/// Column of [`DealerOutcomes`] holding the bust probability.
pub const BUST: usize = 5;

/// Where the dealer finishes, per up-card.
///
/// Rows exclude the dealer blackjack, whose probability is kept per up-card
/// in its own column. When the hole card is checked the 10 and ace rows are
/// conditioned on no blackjack and that column is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealerOutcomes {
    pub(crate) rows: [[f64; OUTCOMES]; UP_CARDS],
    pub(crate) blackjack: [f64; UP_CARDS],
}

impl Default for DealerOutcomes {
    fn default() -> Self {
        Self {
            rows: [[0.0; OUTCOMES]; UP_CARDS],
            blackjack: [0.0; UP_CARDS],
        }
    }
}

impl DealerOutcomes {
    /// Probability of finishing on `total` (17..=21) without a blackjack.
    pub fn finish(&self, up: u8, total: u8) -> Result<f64, EngineError> {
        let row = &self.rows[up_index(up)?];
        match total {
            17..=21 => Ok(row[(total - 17) as usize]),
            _ => Err(EngineError::InvalidTotal {
                kind: "dealer",
                total,
            }),
        }
    }

    pub fn bust(&self, up: u8) -> Result<f64, EngineError> {
        Ok(self.rows[up_index(up)?][BUST])
    }

    pub fn blackjack(&self, up: u8) -> Result<f64, EngineError> {
        Ok(self.blackjack[up_index(up)?])
    }

    /// Up-card-major view: `OUTCOMES` lanes per up-card.
    pub(crate) fn flat(&self) -> &[f64] {
        self.rows.as_flattened()
    }
}

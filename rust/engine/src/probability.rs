use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::errors::EngineError;

/// Probability of each neutral rank (7, 8, 9), independent of the count.
pub const NEUTRAL: f64 = 1.0 / 13.0;

/// Cards of one rank-group shifted per unit of true count, per rank.
const COUNT_SHIFT: f64 = 1.0 / 520.0;

/// Draw probabilities biased by a Hi-Lo true count.
///
/// `large` is the probability of each of the five large ranks (T, J, Q, K, A)
/// and `small` the probability of each of 2..=6. A positive count moves mass
/// from the small ranks to the large ones; the neutral ranks never move.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub large: f64,
    pub small: f64,
}

impl Weights {
    /// # Errors
    ///
    /// Returns [`EngineError::CountOutOfRange`] when the count is not finite
    /// or pushes either probability outside `(0, 1)`, including the
    /// ten-valued group `4 * large` used when conditioning on the dealer's
    /// hole card.
    ///
    /// # Examples
    ///
    /// ```
    /// use hilo_engine::probability::Weights;
    ///
    /// let w = Weights::from_count(0.0).unwrap();
    /// assert!((w.large - 1.0 / 13.0).abs() < 1e-15);
    ///
    /// let hot = Weights::from_count(4.0).unwrap();
    /// assert!(hot.large > hot.small);
    ///
    /// assert!(Weights::from_count(45.0).is_err());
    /// ```
    pub fn from_count(count: f64) -> Result<Self, EngineError> {
        if !count.is_finite() {
            return Err(EngineError::CountOutOfRange { count });
        }
        let shift = count * COUNT_SHIFT;
        let w = Self {
            large: NEUTRAL + shift,
            small: NEUTRAL - shift,
        };
        let in_unit = |p: f64| p > 0.0 && p < 1.0;
        if !in_unit(w.small) || !in_unit(w.large) || !in_unit(4.0 * w.large) {
            return Err(EngineError::CountOutOfRange { count });
        }
        Ok(w)
    }

    /// Probability of drawing a card of this exact rank.
    pub fn rank(&self, rank: Rank) -> f64 {
        match rank {
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King | Rank::Ace => self.large,
            Rank::Seven | Rank::Eight | Rank::Nine => NEUTRAL,
            _ => self.small,
        }
    }

    /// Probability of drawing a card worth `value` (2..=11, 11 = ace).
    ///
    /// A value of 10 covers the four ten-valued ranks.
    pub fn value(&self, value: u8) -> f64 {
        match value {
            2..=6 => self.small,
            7..=9 => NEUTRAL,
            10 => 4.0 * self.large,
            11 => self.large,
            _ => 0.0,
        }
    }

    /// Probability of drawing any of the five large ranks.
    pub fn large_group(&self) -> f64 {
        5.0 * self.large
    }
}

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Table rules that change the expectancy tables.
///
/// Packed as four bit flags on the wire, matching the `options` argument of
/// [`crate::engine::Engine::compute_strategy`]:
///
/// | bit | flag |
/// |-----|------|
/// | 0 | double allowed after split |
/// | 1 | resplit allowed |
/// | 2 | dealer hits soft 17 |
/// | 3 | dealer checks the hole card, so EVs are conditional on no dealer blackjack |
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Rules {
    pub double_after_split: bool,
    pub resplit: bool,
    pub dealer_hits_soft_17: bool,
    pub hole_card_peek: bool,
}

impl Rules {
    pub const DOUBLE_AFTER_SPLIT: u8 = 1 << 0;
    pub const RESPLIT: u8 = 1 << 1;
    pub const DEALER_HITS_SOFT_17: u8 = 1 << 2;
    pub const HOLE_CARD_PEEK: u8 = 1 << 3;

    const MASK: u8 = 0b1111;

    /// Decodes the 4-bit option mask.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidOptions`] when any bit above bit 3 is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use hilo_engine::rules::Rules;
    ///
    /// let rules = Rules::from_bits(Rules::RESPLIT | Rules::HOLE_CARD_PEEK).unwrap();
    /// assert!(rules.resplit && rules.hole_card_peek);
    /// assert!(!rules.double_after_split);
    ///
    /// assert!(Rules::from_bits(16).is_err());
    /// ```
    pub fn from_bits(options: u8) -> Result<Self, EngineError> {
        if options & !Self::MASK != 0 {
            return Err(EngineError::InvalidOptions { options });
        }
        Ok(Self {
            double_after_split: options & Self::DOUBLE_AFTER_SPLIT != 0,
            resplit: options & Self::RESPLIT != 0,
            dealer_hits_soft_17: options & Self::DEALER_HITS_SOFT_17 != 0,
            hole_card_peek: options & Self::HOLE_CARD_PEEK != 0,
        })
    }

    pub fn bits(&self) -> u8 {
        let mut bits = 0;
        if self.double_after_split {
            bits |= Self::DOUBLE_AFTER_SPLIT;
        }
        if self.resplit {
            bits |= Self::RESPLIT;
        }
        if self.dealer_hits_soft_17 {
            bits |= Self::DEALER_HITS_SOFT_17;
        }
        if self.hole_card_peek {
            bits |= Self::HOLE_CARD_PEEK;
        }
        bits
    }
}

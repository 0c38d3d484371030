use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, DECK_SIZE};
use crate::errors::EngineError;

/// Smallest deck estimate used when converting the running count.
const MIN_DECKS_REMAINING: f64 = 0.5;

/// One or more decks dealt from a single shuffled sequence.
///
/// Cursors satisfy `first <= next <= end`: cards in `[first, next)` are on the
/// table, `[next, end)` are still undealt, and anything before `first` has
/// been discarded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Shoe {
    cards: Vec<Card>,
    first: usize,
    next: usize,
    end: usize,
    running_count: i32,
}

impl Shoe {
    /// An unshuffled shoe of `decks` decks in canonical order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDecks`] when `decks` is zero.
    pub fn ordered(decks: u32) -> Result<Self, EngineError> {
        let mut shoe = Self::default();
        shoe.reset(decks)?;
        Ok(shoe)
    }

    /// Refills the shoe with `decks` decks in canonical order and rewinds all cursors.
    pub fn reset(&mut self, decks: u32) -> Result<(), EngineError> {
        if decks < 1 {
            return Err(EngineError::InvalidDecks { decks });
        }
        let len = DECK_SIZE * decks as usize;
        self.cards.clear();
        self.cards.extend((0..len).map(Card::from_index));
        self.first = 0;
        self.next = 0;
        self.end = len;
        self.running_count = 0;
        Ok(())
    }

    /// Shuffles the undealt cards in place, walking down from the last one
    /// and swapping each with `rng.next_u32() % (i + 1)`.
    ///
    /// The modulo keeps the reference card order for a given seed even
    /// though it is not perfectly uniform for every shoe size.
    pub fn shuffle<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        let undealt = &mut self.cards[self.next..self.end];
        for i in (1..undealt.len()).rev() {
            let j = (rng.next_u32() % (i as u32 + 1)) as usize;
            undealt.swap(i, j);
        }
    }

    pub fn draw(&mut self) -> Option<Card> {
        if self.next >= self.end {
            return None;
        }
        let card = self.cards[self.next];
        self.next += 1;
        self.running_count += card.rank().hi_lo();
        Some(card)
    }

    /// Moves the cards on the table to the discard pile.
    pub fn discard_in_play(&mut self) {
        self.first = self.next;
    }

    pub fn in_play(&self) -> &[Card] {
        &self.cards[self.first..self.next]
    }

    pub fn discarded(&self) -> &[Card] {
        &self.cards[..self.first]
    }

    pub fn remaining(&self) -> usize {
        self.end.saturating_sub(self.next)
    }

    pub fn len(&self) -> usize {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn decks(&self) -> u32 {
        (self.end / DECK_SIZE) as u32
    }

    /// Fraction of the shoe already dealt.
    pub fn penetration(&self) -> f64 {
        if self.end == 0 {
            return 0.0;
        }
        self.next as f64 / self.end as f64
    }

    /// Hi-Lo running count of every card dealt so far.
    pub fn running_count(&self) -> i32 {
        self.running_count
    }

    /// Running count per remaining deck.
    pub fn true_count(&self) -> f64 {
        let decks_left = (self.remaining() as f64 / DECK_SIZE as f64).max(MIN_DECKS_REMAINING);
        f64::from(self.running_count) / decks_left
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mt::MersenneTwister;

    #[test]
    fn zero_decks_is_rejected() {
        assert_eq!(
            Shoe::ordered(0).unwrap_err(),
            EngineError::InvalidDecks { decks: 0 }
        );
    }

    #[test]
    fn cursors_track_table_and_discards() {
        let mut shoe = Shoe::ordered(1).unwrap();
        let a = shoe.draw().unwrap();
        let b = shoe.draw().unwrap();
        assert_eq!(shoe.in_play(), &[a, b]);
        shoe.discard_in_play();
        assert!(shoe.in_play().is_empty());
        assert_eq!(shoe.discarded(), &[a, b]);
        let c = shoe.draw().unwrap();
        assert_eq!(shoe.in_play(), &[c]);
        assert_eq!(shoe.remaining(), 49);
    }

    #[test]
    fn default_seed_single_deck_golden_order() {
        let mut shoe = Shoe::ordered(1).unwrap();
        shoe.shuffle(&mut MersenneTwister::default());
        let first: Vec<u8> = (0..8).map(|_| shoe.draw().unwrap().index()).collect();
        assert_eq!(first, vec![21, 43, 2, 32, 10, 14, 30, 41]);
    }

    #[test]
    fn running_count_follows_hi_lo_tags() {
        let mut shoe = Shoe::ordered(1).unwrap();
        // canonical order starts 2..=6 of clubs
        for _ in 0..5 {
            shoe.draw();
        }
        assert_eq!(shoe.running_count(), 5);
        // 7, 8, 9 are neutral; T, J, Q, K, A count -1
        for _ in 0..8 {
            shoe.draw();
        }
        assert_eq!(shoe.running_count(), 0);
        let mut empty = Shoe::ordered(1).unwrap();
        while empty.draw().is_some() {}
        assert_eq!(empty.running_count(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn true_count_divides_by_decks_left() {
        let mut shoe = Shoe::ordered(2).unwrap();
        for _ in 0..5 {
            shoe.draw();
        }
        let decks_left = 99.0 / 52.0;
        assert!((shoe.true_count() - 5.0 / decks_left).abs() < 1e-12);
    }
}

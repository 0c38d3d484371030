use serde::{Deserialize, Serialize};

/// Number of cards in a single deck.
pub const DECK_SIZE: usize = 52;

/// Represents one of the four suits in a standard 52-card deck.
/// Suits never affect blackjack values; they only matter for display.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

/// Represents the rank (face value) of a playing card from Two through Ace.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Blackjack value of the rank: 2..=10 for pips and faces, 11 for the ace.
    pub fn value(self) -> u8 {
        match self {
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
            r => r as u8,
        }
    }

    /// Hi-Lo tag: +1 for 2..=6, 0 for 7..=9, -1 for tens and aces.
    pub fn hi_lo(self) -> i32 {
        match self.value() {
            2..=6 => 1,
            7..=9 => 0,
            _ => -1,
        }
    }
}

/// A card as stored in the shoe: an index in `0..52`.
///
/// The rank is `index % 13` (Two first, Ace last) and the suit is
/// `index / 13`, so a multi-deck shoe simply repeats the indices per deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card(u8);

impl Card {
    /// Builds a card from its deck index. Indices wrap per deck.
    pub fn from_index(index: usize) -> Self {
        Card((index % DECK_SIZE) as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn rank(self) -> Rank {
        Rank::ALL[(self.0 % 13) as usize]
    }

    pub fn suit(self) -> Suit {
        match self.0 / 13 {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    pub fn value(self) -> u8 {
        self.rank().value()
    }
}

/// One deck in canonical order: every rank of clubs, then diamonds, hearts, spades.
pub fn full_deck() -> Vec<Card> {
    (0..DECK_SIZE).map(Card::from_index).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_is_index_mod_13() {
        assert_eq!(Card::from_index(0).rank(), Rank::Two);
        assert_eq!(Card::from_index(12).rank(), Rank::Ace);
        assert_eq!(Card::from_index(13).rank(), Rank::Two);
        assert_eq!(Card::from_index(51).rank(), Rank::Ace);
        assert_eq!(Card::from_index(51).suit(), Suit::Spades);
        assert_eq!(Card::from_index(52), Card::from_index(0));
    }

    #[test]
    fn deck_values_match_blackjack_counts() {
        let deck = full_deck();
        let tens = deck.iter().filter(|c| c.value() == 10).count();
        let aces = deck.iter().filter(|c| c.value() == 11).count();
        assert_eq!(tens, 16);
        assert_eq!(aces, 4);
        let balance: i32 = deck.iter().map(|c| c.rank().hi_lo()).sum();
        assert_eq!(balance, 0, "Hi-Lo is a balanced count");
    }
}

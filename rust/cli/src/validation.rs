//! Parsing of card and hand arguments.
//!
//! Card tokens are case-insensitive: `2`..`9`, `T`, `J`, `Q`, `K` and `10`
//! are worth their blackjack value, `A` is worth 11.

use hilo_engine::tables::{HARD_MAX, HARD_MIN, SOFT_MAX, SOFT_MIN, Total};

/// A hand named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Total(Total),
    /// A pair of cards, by card value (11 = aces)
    Pair(u8),
}

/// Blackjack value of a card token.
///
/// # Example
///
/// ```rust
/// # use hilo_cli::validation::parse_card_value;
/// assert_eq!(parse_card_value("a"), Ok(11));
/// assert_eq!(parse_card_value("K"), Ok(10));
/// assert!(parse_card_value("1").is_err());
/// ```
pub fn parse_card_value(input: &str) -> Result<u8, String> {
    let token = input.trim().to_ascii_uppercase();
    match token.as_str() {
        "A" => Ok(11),
        "T" | "J" | "Q" | "K" | "10" => Ok(10),
        _ => match token.parse::<u8>() {
            Ok(v @ 2..=9) => Ok(v),
            _ => Err(format!("unknown card '{}'; use 2-9, T, J, Q, K or A", input)),
        },
    }
}

/// Dealer up-card as a value in `2..=11`. Also accepts `11` for the ace.
pub fn parse_up_card(input: &str) -> Result<u8, String> {
    if input.trim() == "11" {
        return Ok(11);
    }
    parse_card_value(input)
}

/// Parses `16`/`h16` (hard), `s18` (soft) or `p8`/`pA` (pair).
///
/// # Example
///
/// ```rust
/// # use hilo_cli::validation::{parse_hand, Hand};
/// use hilo_engine::tables::Total;
///
/// assert_eq!(parse_hand("s18"), Ok(Hand::Total(Total::soft(18))));
/// assert_eq!(parse_hand("pA"), Ok(Hand::Pair(11)));
/// assert!(parse_hand("s22").is_err());
/// ```
pub fn parse_hand(input: &str) -> Result<Hand, String> {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();
    if let Some(card) = lower.strip_prefix('p') {
        return parse_card_value(card).map(Hand::Pair);
    }
    let (soft, digits) = match lower.strip_prefix('s') {
        Some(rest) => (true, rest),
        None => (false, lower.strip_prefix('h').unwrap_or(&lower)),
    };
    let value: u8 = digits
        .parse()
        .map_err(|_| format!("invalid hand '{}'", trimmed))?;
    let (min, max) = if soft {
        (SOFT_MIN, SOFT_MAX)
    } else {
        (HARD_MIN, HARD_MAX)
    };
    if !(min..=max).contains(&value) {
        return Err(format!(
            "{} total must be between {} and {}",
            if soft { "soft" } else { "hard" },
            min,
            max
        ));
    }
    Ok(Hand::Total(if soft {
        Total::soft(value)
    } else {
        Total::hard(value)
    }))
}

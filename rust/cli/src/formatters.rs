//! Card, expectancy and chart formatters for terminal display.
//!
//! Cards use Unicode suit symbols with an ASCII fallback on Windows consoles
//! that do not render them.
//!
//! ## Example
//!
//! ```rust
//! use hilo_engine::cards::Card;
//! use hilo_cli::formatters::{format_card, format_ev};
//!
//! let ace_spades = Card::from_index(51);
//! assert!(format_card(ace_spades) == "A♠" || format_card(ace_spades) == "As");
//! assert_eq!(format_ev(-0.5), "-0.5000");
//! ```

use hilo_engine::cards::{Card, Rank, Suit};
use hilo_engine::errors::EngineError;
use hilo_engine::rules::Rules;
use hilo_engine::solver::Strategy;
use hilo_engine::tables::{HARD_MAX, HARD_MIN, SOFT_MAX, SOFT_MIN, Total, TotalKind};

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> &'static str {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
    }
}

/// Format a Rank as a single character (2-9, T, J, Q, K, A).
pub fn format_rank(rank: Rank) -> &'static str {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
}

pub fn format_card(card: Card) -> String {
    format!("{}{}", format_rank(card.rank()), format_suit(card.suit()))
}

/// Cards in bracket notation, e.g. "[A♠ 7♦]" or "[]".
pub fn format_cards(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().copied().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Label of a card value (2..=11): digits, `T` for ten, `A` for the ace.
pub fn value_label(value: u8) -> String {
    match value {
        10 => "T".into(),
        11 => "A".into(),
        v => v.to_string(),
    }
}

/// Signed, four decimals.
pub fn format_ev(ev: f64) -> String {
    format!("{:+.4}", ev)
}

/// One-line rule summary, e.g. "S17, DAS, no resplit, no peek".
pub fn format_rules(rules: &Rules) -> String {
    let flag = |on: bool, name: &str| {
        if on {
            name.to_string()
        } else {
            format!("no {}", name)
        }
    };
    format!(
        "{}, {}, {}, {}",
        if rules.dealer_hits_soft_17 { "H17" } else { "S17" },
        flag(rules.double_after_split, "DAS"),
        flag(rules.resplit, "resplit"),
        flag(rules.hole_card_peek, "peek"),
    )
}

/// e.g. "hard 16", "soft 18"
pub fn total_label(total: Total) -> String {
    format!("{} {}", total.kind.as_str(), total.value)
}

fn header(label: &str) -> String {
    let mut line = format!("{:<6}", label);
    for up in 2..=11 {
        line.push_str(&format!(" {}", value_label(up)));
    }
    line
}

fn total_row(strategy: &Strategy, kind: TotalKind, value: u8) -> Result<String, EngineError> {
    let total = Total { kind, value };
    let mut line = format!("{:<6}", value);
    for up in 2..=11 {
        line.push_str(&format!(" {}", strategy.decision(total, up)?.letter()));
    }
    Ok(line)
}

/// Basic-strategy chart: hard, soft and pair sections, one column per
/// dealer up-card, letters S/H/D/P.
pub fn format_chart(strategy: &Strategy) -> Result<String, EngineError> {
    let mut lines = Vec::new();
    lines.push(header("hard"));
    for value in HARD_MIN..=HARD_MAX {
        lines.push(total_row(strategy, TotalKind::Hard, value)?);
    }
    lines.push(String::new());
    lines.push(header("soft"));
    for value in SOFT_MIN..=SOFT_MAX {
        lines.push(total_row(strategy, TotalKind::Soft, value)?);
    }
    lines.push(String::new());
    lines.push(header("pair"));
    for pair in 2..=11 {
        let label = value_label(pair);
        let mut line = format!("{:<6}", format!("{},{}", label, label));
        for up in 2..=11 {
            line.push_str(&format!(" {}", strategy.pair_decision(pair, up)?.letter()));
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid deck count: {decks}, minimum: 1")]
    InvalidDecks { decks: u32 },
    #[error("Invalid rule options: {options:#06b}, must fit in 4 bits")]
    InvalidOptions { options: u8 },
    #[error("True count {count} drives draw probabilities outside (0, 1)")]
    CountOutOfRange { count: f64 },
    #[error("No {kind} total {total} in table")]
    InvalidTotal { kind: &'static str, total: u8 },
    #[error("Invalid dealer up-card: {up}, expected 2..=11")]
    InvalidUpCard { up: u8 },
    #[error("Invalid pair value: {pair}, expected 2..=11")]
    InvalidPair { pair: u8 },
}

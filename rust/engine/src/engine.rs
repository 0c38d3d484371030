use tracing::info;

use crate::errors::EngineError;
use crate::mt::{MersenneTwister, DEFAULT_SEED};
use crate::rules::Rules;
use crate::shoe::Shoe;
use crate::solver::{solve, Strategy};

/// Owns the generator, the current shoe and the last solved strategy.
///
/// Nothing is shared between engines: two engines seeded alike deal
/// identical shoes, and an engine is safe to move to another thread.
///
/// # Examples
///
/// ```
/// use hilo_engine::engine::Engine;
/// use hilo_engine::tables::Total;
///
/// let mut engine = Engine::new();
///
/// // Default rules at a neutral count: hit 16 against a ten
/// let strategy = engine.compute_strategy(0, 0.0).unwrap();
/// assert!(strategy.bitmap.hits(Total::hard(16), 10).unwrap());
///
/// // A fresh single-deck shoe
/// let shoe = engine.new_shoe(1).unwrap();
/// assert_eq!(shoe.remaining(), 52);
/// let first = shoe.draw().unwrap();
/// assert_eq!(shoe.in_play(), &[first]);
/// ```
#[derive(Debug, Default)]
pub struct Engine {
    /// Seeded on first draw if never seeded explicitly
    rng: Option<MersenneTwister>,
    shoe: Shoe,
    strategy: Option<Strategy>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reseeds the generator; later shoes follow the new stream.
    pub fn seed(&mut self, seed: u32) {
        self.rng = Some(MersenneTwister::new(seed));
    }

    fn rng(&mut self) -> &mut MersenneTwister {
        self.rng
            .get_or_insert_with(|| MersenneTwister::new(DEFAULT_SEED))
    }

    /// Next raw 32-bit generator output.
    pub fn next_u32(&mut self) -> u32 {
        self.rng().draw()
    }

    /// Solves every expectancy table for the 4-bit `options` mask (see
    /// [`Rules`]) under a Hi-Lo true count, replacing the previous strategy.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidOptions`] if bits above bit 3 are set
    /// - [`EngineError::CountOutOfRange`] if the count leaves the draw
    ///   probabilities outside `(0, 1)`
    pub fn compute_strategy(&mut self, options: u8, count: f64) -> Result<&Strategy, EngineError> {
        let rules = Rules::from_bits(options)?;
        let strategy = solve(rules, count)?;
        Ok(self.strategy.insert(strategy))
    }

    /// Solves for the true count of the current shoe.
    pub fn compute_strategy_for_shoe(&mut self, options: u8) -> Result<&Strategy, EngineError> {
        let count = self.shoe.true_count();
        self.compute_strategy(options, count)
    }

    pub fn strategy(&self) -> Option<&Strategy> {
        self.strategy.as_ref()
    }

    /// Replaces the shoe with `decks` freshly shuffled decks.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDecks`] when `decks` is zero; the
    /// current shoe is left untouched in that case.
    pub fn new_shoe(&mut self, decks: u32) -> Result<&mut Shoe, EngineError> {
        let mut shoe = Shoe::ordered(decks)?;
        shoe.shuffle(self.rng());
        info!(decks, cards = shoe.len(), "new shoe shuffled");
        self.shoe = shoe;
        Ok(&mut self.shoe)
    }

    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    pub fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }
}

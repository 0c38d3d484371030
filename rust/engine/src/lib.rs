//! # hilo-engine: Blackjack Expectancy Solver and Seeded Shoe
//!
//! Computes the expected value of standing, hitting, doubling and splitting
//! for every player total against every dealer up-card, under four table
//! rules and a Hi-Lo true count. Also deals from a multi-deck shoe shuffled
//! by a bit-exact Mersenne Twister, so a seed always reproduces the same
//! card order.
//!
//! ## Core Modules
//!
//! - [`engine`] - The [`engine::Engine`] object owning generator, shoe and strategy
//! - [`solver`] - Dealer, stand, double, hit and split builders
//! - [`tables`] - Typed expectancy tables, split table and hit/stand bitmap
//! - [`kernels`] - Row arithmetic shared by the builders
//! - [`probability`] - Count-biased draw probabilities
//! - [`rules`] - The four rule flags
//! - [`mt`] - MT19937 generator
//! - [`shoe`] - Shoe cursors, shuffle and running count
//! - [`cards`] - Card, rank and suit
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use hilo_engine::engine::Engine;
//! use hilo_engine::rules::Rules;
//! use hilo_engine::solver::Decision;
//! use hilo_engine::tables::Total;
//!
//! let mut engine = Engine::new();
//! let options = Rules::DOUBLE_AFTER_SPLIT | Rules::HOLE_CARD_PEEK;
//! let strategy = engine.compute_strategy(options, 0.0).unwrap();
//!
//! assert_eq!(strategy.decision(Total::hard(17), 10).unwrap(), Decision::Stand);
//! assert_eq!(strategy.decision(Total::hard(11), 6).unwrap(), Decision::Double);
//! assert_eq!(strategy.pair_decision(8, 7).unwrap(), Decision::Split);
//! ```
//!
//! ## Deterministic Shoes
//!
//! ```rust
//! use hilo_engine::engine::Engine;
//!
//! fn first_cards(seed: u32) -> Vec<u8> {
//!     let mut engine = Engine::new();
//!     engine.seed(seed);
//!     let shoe = engine.new_shoe(6).unwrap();
//!     (0..5).filter_map(|_| shoe.draw()).map(|c| c.index()).collect()
//! }
//!
//! assert_eq!(first_cards(2024), first_cards(2024));
//! assert_eq!(first_cards(2024).len(), 5);
//! ```

pub mod cards;
pub mod engine;
pub mod errors;
pub mod kernels;
pub mod mt;
pub mod probability;
pub mod rules;
pub mod shoe;
pub mod solver;
pub mod tables;

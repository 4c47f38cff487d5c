//! # holdem-engine: Texas Hold'em Table Engine
//!
//! A turn-based No-Limit Texas Hold'em engine for two to eight seats.
//! Decisions come in through an [`source::ActionSource`], table state goes
//! out through a [`snapshot::PresentationSink`], and buy-ins and cash-outs
//! are mirrored to a [`wallet::WalletService`]. Deals are reproducible from
//! a seed.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and text parsing
//! - [`deck`] - Seeded deck shuffling with ChaCha20 RNG
//! - [`hand`] - Best-of-seven hand evaluation and ranking
//! - [`player`] - Player state, actions, and stack management
//! - [`pot`] - Single pot, split and uncalled-bet handling
//! - [`rules`] - Action validation and raise limits
//! - [`betting`] - Betting round state machine
//! - [`engine`] - Hand orchestration from blinds to settlement
//! - [`game`] - Seats, dealer button and eliminations
//! - [`config`] - Table stakes and limits
//! - [`history`] - Hand outcome records
//! - [`source`], [`snapshot`], [`wallet`] - Seams to the outside world
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::hand::{evaluate_cards, Category};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let rank = evaluate_cards(&cards);
//! assert_eq!(rank.category, Category::RoyalFlush);
//! ```
//!
//! ## Deterministic Deals
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! let mut a = Deck::new_with_seed(42);
//! let mut b = Deck::new_with_seed(42);
//! assert_eq!(a.draw_n(5).unwrap(), b.draw_n(5).unwrap());
//! ```

pub mod betting;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod history;
pub mod player;
pub mod pot;
pub mod rules;
pub mod snapshot;
pub mod source;
pub mod wallet;

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand classifier and showdown resolver.
//!
//! The classifier takes a pool of five to seven cards, the community cards
//! plus a player's hole cards, and finds the best of the ten hand
//! categories together with the cards that break ties within the category:
//!
//! ```
//! # use showdown_eval::*;
//! # fn main() -> anyhow::Result<()> {
//! let pool = [
//!     Card::new(Rank::Ace, Suit::Hearts),
//!     Card::new(Rank::King, Suit::Hearts),
//!     Card::new(Rank::Queen, Suit::Hearts),
//!     Card::new(Rank::Jack, Suit::Hearts),
//!     Card::new(Rank::Ten, Suit::Hearts),
//!     Card::new(Rank::Deuce, Suit::Clubs),
//!     Card::new(Rank::Trey, Suit::Diamonds),
//! ];
//! let hand = ClassifiedHand::classify(&pool)?;
//! assert_eq!(hand.category(), HandCategory::RoyalFlush);
//! # Ok(())
//! # }
//! ```
//!
//! Classified hands order by strength so the strongest hand is the
//! maximum, and [Showdown] resolves the winner set amongst many players
//! including split pots and folded players.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod classify;
pub use classify::{ClassifiedHand, HandCategory};

pub mod showdown;
pub use showdown::{Showdown, ShowdownEntry};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit, select};

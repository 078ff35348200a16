// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! a [Deck] type that deals and burns cards from a uniformly shuffled
//! 52-cards deck:
//!
//! ```
//! # use showdown_cards::{Card, Deck};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! assert!(deck.deal().is_some());
//! assert!(deck.burn());
//! assert_eq!(deck.count(), Deck::SIZE - 2);
//! ```
//!
//! and the [select] utilities for filtering and sorting card collections.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};

pub mod select;

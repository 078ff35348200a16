// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Utilities over immutable card collections.
//!
//! Every function returns a fresh collection and leaves its input
//! untouched, callers can keep reusing the same pool across checks.
use crate::{Card, Rank, Suit};

/// Returns the cards matching the given suit, order preserved.
pub fn by_suit(cards: &[Card], suit: Suit) -> Vec<Card> {
    cards.iter().copied().filter(|c| c.suit() == suit).collect()
}

/// Returns the cards matching the given rank, order preserved.
pub fn by_rank(cards: &[Card], rank: Rank) -> Vec<Card> {
    cards.iter().copied().filter(|c| c.rank() == rank).collect()
}

/// Checks if any card has the given rank.
pub fn has_rank(cards: &[Card], rank: Rank) -> bool {
    cards.iter().any(|c| c.rank() == rank)
}

/// Checks if the given card is in the collection.
pub fn has_card(cards: &[Card], card: Card) -> bool {
    cards.contains(&card)
}

/// Returns a copy of the cards sorted by rank, highest first.
pub fn sorted_desc(cards: &[Card]) -> Vec<Card> {
    let mut cards = cards.to_vec();
    cards.sort_by(|a, b| b.rank().cmp(&a.rank()));
    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<Card> {
        vec![
            Card::new(Rank::Deuce, Suit::Clubs),
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Ten, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Seven, Suit::Diamonds),
        ]
    }

    #[test]
    fn by_suit_preserves_order() {
        let hearts = by_suit(&pool(), Suit::Hearts);
        assert_eq!(
            hearts,
            vec![
                Card::new(Rank::Ace, Suit::Hearts),
                Card::new(Rank::Ten, Suit::Hearts),
            ]
        );

        assert!(by_suit(&pool(), Suit::Clubs).len() == 1);
    }

    #[test]
    fn by_rank_collects_all_suits() {
        let aces = by_rank(&pool(), Rank::Ace);
        assert_eq!(aces.len(), 2);
        assert!(aces.iter().all(|c| c.rank() == Rank::Ace));

        assert!(by_rank(&pool(), Rank::King).is_empty());
    }

    #[test]
    fn membership() {
        assert!(has_rank(&pool(), Rank::Seven));
        assert!(!has_rank(&pool(), Rank::Queen));

        assert!(has_card(&pool(), Card::new(Rank::Ace, Suit::Spades)));
        assert!(!has_card(&pool(), Card::new(Rank::Ace, Suit::Diamonds)));
    }

    #[test]
    fn sorted_desc_leaves_input_untouched() {
        let cards = pool();
        let sorted = sorted_desc(&cards);

        let ranks = sorted.iter().map(|c| c.rank()).collect::<Vec<_>>();
        assert_eq!(
            ranks,
            vec![Rank::Ace, Rank::Ace, Rank::Ten, Rank::Seven, Rank::Deuce]
        );

        // Input order unchanged.
        assert_eq!(cards[0], Card::new(Rank::Deuce, Suit::Clubs));
    }
}

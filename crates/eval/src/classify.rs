// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classification.
//!
//! [ClassifiedHand::classify] runs the ten category checks from best to
//! worst and stops at the first match, High Card matches any pool so
//! classification always succeeds. Each check is a pure function that
//! returns the cards deciding ties within the category, the caller's pool
//! is never modified.
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use showdown_cards::{Card, Rank, Suit, select};

/// The ten hand categories.
///
/// The numeric degree runs from 0 for the best hand to 9 for the worst,
/// see [HandCategory::degree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// Ace, King, Queen, Jack, and Ten of one suit.
    RoyalFlush = 0,
    /// Five consecutive ranks of one suit.
    StraightFlush,
    /// Four cards of one rank.
    FourOfAKind,
    /// Three cards of one rank and a pair of another.
    FullHouse,
    /// Five cards of one suit.
    Flush,
    /// Five consecutive ranks.
    Straight,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Two pairs of different ranks.
    TwoPair,
    /// Two cards of one rank.
    OnePair,
    /// None of the above.
    HighCard,
}

impl HandCategory {
    /// The numeric degree, 0 for a Royal Flush up to 9 for High Card.
    ///
    /// A smaller degree is a stronger hand.
    pub fn degree(self) -> u8 {
        self as u8
    }

    /// The category with the given degree.
    pub fn from_degree(degree: u8) -> Option<HandCategory> {
        use HandCategory::*;
        match degree {
            0 => Some(RoyalFlush),
            1 => Some(StraightFlush),
            2 => Some(FourOfAKind),
            3 => Some(FullHouse),
            4 => Some(Flush),
            5 => Some(Straight),
            6 => Some(ThreeOfAKind),
            7 => Some(TwoPair),
            8 => Some(OnePair),
            9 => Some(HighCard),
            _ => None,
        }
    }

    /// Returns all categories, best first.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            RoyalFlush,
            StraightFlush,
            FourOfAKind,
            FullHouse,
            Flush,
            Straight,
            ThreeOfAKind,
            TwoPair,
            OnePair,
            HighCard,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::RoyalFlush => "Royal Flush",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::OnePair => "One Pair",
            HandCategory::HighCard => "High Card",
        };

        write!(f, "{name}")
    }
}

/// A classified hand.
///
/// Holds the best category a pool satisfies and the cards that break ties
/// within that category. For a Full House or Two Pair the cards keep the
/// grouped [primary][secondary] order, position encodes which group a card
/// belongs to; every other category is sorted by rank descending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedHand {
    category: HandCategory,
    cards: Vec<Card>,
}

impl ClassifiedHand {
    /// Classifies a pool of at least five cards.
    ///
    /// Fails when the pool has fewer than five cards, never otherwise as
    /// High Card matches any pool.
    pub fn classify(pool: &[Card]) -> Result<ClassifiedHand> {
        if pool.len() < 5 {
            bail!("classification needs at least 5 cards, got {}", pool.len());
        }

        let pool = select::sorted_desc(pool);

        let (category, cards) = if let Some(cards) = royal_flush(&pool) {
            (HandCategory::RoyalFlush, cards)
        } else if let Some(cards) = straight_flush(&pool) {
            (HandCategory::StraightFlush, cards)
        } else if let Some(cards) = n_of_a_kind(&pool, 4) {
            (HandCategory::FourOfAKind, cards)
        } else if let Some(cards) = full_house(&pool) {
            (HandCategory::FullHouse, cards)
        } else if let Some(cards) = flush(&pool) {
            (HandCategory::Flush, cards)
        } else if let Some(cards) = straight(&pool) {
            (HandCategory::Straight, cards)
        } else if let Some(cards) = n_of_a_kind(&pool, 3) {
            (HandCategory::ThreeOfAKind, cards)
        } else if let Some(cards) = two_pair(&pool) {
            (HandCategory::TwoPair, cards)
        } else if let Some(cards) = n_of_a_kind(&pool, 2) {
            (HandCategory::OnePair, cards)
        } else {
            // The highest card, matches any pool.
            (HandCategory::HighCard, vec![pool[0]])
        };

        Ok(ClassifiedHand { category, cards })
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The cards that break ties within the category.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Checks if this is an ace to five straight, plain or flush.
    ///
    /// The Ace sits in front of the cards but plays low, the Five decides
    /// ties.
    fn is_wheel(&self) -> bool {
        matches!(
            self.category,
            HandCategory::StraightFlush | HandCategory::Straight
        ) && self.cards[0].rank() == Rank::Ace
            && self.cards[1].rank() == Rank::Five
    }

    /// The card that leads the tie break within a category.
    fn leading(&self) -> Card {
        if self.is_wheel() {
            self.cards[1]
        } else {
            self.cards[0]
        }
    }
}

impl fmt::Display for ClassifiedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        for card in &self.cards {
            write!(f, " {card}")?;
        }
        Ok(())
    }
}

impl Ord for ClassifiedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        // A smaller degree is the stronger hand, then the leading card,
        // then the fourth card when both hands carry one: the secondary
        // group of a Full House or Two Pair. Anything still equal is an
        // exact tie that splits the pot.
        (other.category.degree())
            .cmp(&self.category.degree())
            .then_with(|| self.leading().rank().cmp(&other.leading().rank()))
            .then_with(|| match (self.cards.get(3), other.cards.get(3)) {
                (Some(a), Some(b)) => a.rank().cmp(&b.rank()),
                _ => Ordering::Equal,
            })
    }
}

impl PartialOrd for ClassifiedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Equality is equal strength, not equal cards.
impl PartialEq for ClassifiedHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ClassifiedHand {}

/// An Ace with the King, Queen, Jack, and Ten of its suit.
fn royal_flush(pool: &[Card]) -> Option<Vec<Card>> {
    for ace in select::by_rank(pool, Rank::Ace) {
        let royal = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten]
            .map(|r| Card::new(r, ace.suit()));
        if royal.iter().all(|&c| select::has_card(pool, c)) {
            return Some(royal.to_vec());
        }
    }

    None
}

/// A suit whose cards alone form a straight, wheel included.
fn straight_flush(pool: &[Card]) -> Option<Vec<Card>> {
    Suit::suits().find_map(|suit| straight(&select::by_suit(pool, suit)))
}

/// The highest rank occurring at least `n` times, `cards` must be sorted
/// by rank descending.
fn n_of_a_kind(cards: &[Card], n: usize) -> Option<Vec<Card>> {
    for card in cards {
        let matched = select::by_rank(cards, card.rank());
        if matched.len() >= n {
            return Some(matched.into_iter().take(n).collect());
        }
    }

    None
}

/// The highest triple followed by the highest pair amongst the other
/// ranks, grouped order.
fn full_house(pool: &[Card]) -> Option<Vec<Card>> {
    let triple = n_of_a_kind(pool, 3)?;
    let rest = pool
        .iter()
        .copied()
        .filter(|c| c.rank() != triple[0].rank())
        .collect::<Vec<_>>();
    let pair = n_of_a_kind(&rest, 2)?;

    Some(triple.into_iter().chain(pair).collect())
}

/// The best five cards of a suit occurring at least five times.
fn flush(pool: &[Card]) -> Option<Vec<Card>> {
    for card in pool {
        let suited = select::by_suit(pool, card.suit());
        if suited.len() >= 5 {
            return Some(suited.into_iter().take(5).collect());
        }
    }

    None
}

/// The highest run of five consecutive ranks, `cards` must be sorted by
/// rank descending.
fn straight(cards: &[Card]) -> Option<Vec<Card>> {
    // One card per rank, highest first.
    let mut distinct: Vec<Card> = Vec::with_capacity(cards.len());
    for &card in cards {
        if !select::has_rank(&distinct, card.rank()) {
            distinct.push(card);
        }
    }

    // Ace to five wheel, unless the pool also completes a ten to ace
    // straight that must win the scan below.
    let wheel = [Rank::Ace, Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce];
    let broadway = [Rank::King, Rank::Queen, Rank::Jack, Rank::Ten];
    if wheel.iter().all(|&r| select::has_rank(&distinct, r))
        && !broadway.iter().all(|&r| select::has_rank(&distinct, r))
    {
        // The Ace stays in front but plays low.
        let mut cards = Vec::with_capacity(5);
        for &rank in &wheel {
            cards.extend(distinct.iter().copied().filter(|c| c.rank() == rank));
        }
        return Some(cards);
    }

    let mut run = 1;
    for i in 1..distinct.len() {
        if distinct[i - 1].rank() as u8 == distinct[i].rank() as u8 + 1 {
            run += 1;
            if run == 5 {
                return Some(distinct[i - 4..=i].to_vec());
            }
        } else {
            run = 1;
        }
    }

    None
}

/// The highest pair followed by the next pair amongst the other ranks,
/// grouped order.
fn two_pair(pool: &[Card]) -> Option<Vec<Card>> {
    let first = n_of_a_kind(pool, 2)?;
    let rest = pool
        .iter()
        .copied()
        .filter(|c| c.rank() != first[0].rank())
        .collect::<Vec<_>>();
    let second = n_of_a_kind(&rest, 2)?;

    Some(first.into_iter().chain(second).collect())
}

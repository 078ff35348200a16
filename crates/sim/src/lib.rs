// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker simulator.
//!
//! Plays many hands amongst CPU players: deals the hole cards and the
//! board, lets players fold after the turn with a configurable policy,
//! resolves the showdown and aggregates win statistics. The evaluation
//! crates stay silent, all narration and reporting is owned here.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{anyhow, bail, Result};
use log::debug;
use rand::prelude::*;
use std::thread;

use showdown_eval::{Card, ClassifiedHand, Deck, HandCategory, Showdown, ShowdownEntry};

/// Fold policy applied after the turn card.
///
/// The policy is the only decision making in the simulator, its constants
/// are injected rather than baked into the evaluation crates.
#[derive(Debug, Clone, Copy)]
pub struct FoldPolicy {
    /// Fold when the category classified so far is this degree or worse.
    pub threshold: HandCategory,
    /// Probability of folding once the threshold is hit.
    pub probability: f64,
}

impl Default for FoldPolicy {
    fn default() -> Self {
        Self {
            threshold: HandCategory::OnePair,
            probability: 0.5,
        }
    }
}

/// Simulation configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of players at the table.
    pub players: usize,
    /// Number of games to simulate.
    pub games: u64,
    /// The players fold policy.
    pub fold_policy: FoldPolicy,
    /// Seed for reproducible runs, random when `None`.
    pub seed: Option<u64>,
    /// Number of worker threads the games are split across.
    pub tasks: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 4,
            games: 1000,
            fold_policy: FoldPolicy::default(),
            seed: None,
            tasks: 1,
        }
    }
}

/// Aggregate statistics over all simulated games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    /// Wins per seat, a split pot counts a win for every winner.
    pub wins: Vec<u64>,
    /// Games that reached the showdown with at least one player in.
    pub games_played: u64,
    /// Games where every player folded.
    pub void_games: u64,
    /// Games aborted because the deck ran out while dealing.
    pub aborted_games: u64,
    /// Games where the winning hand tied the best hand amongst all
    /// players, folded ones included.
    pub best_hand_wins: u64,
    /// How many games each category degree won.
    pub winning_categories: [u64; 10],
}

impl Stats {
    fn new(players: usize) -> Self {
        Self {
            wins: vec![0; players],
            games_played: 0,
            void_games: 0,
            aborted_games: 0,
            best_hand_wins: 0,
            winning_categories: [0; 10],
        }
    }

    /// The percentage of played games the seat won.
    pub fn win_rate(&self, seat: usize) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.wins[seat] as f64 / self.games_played as f64 * 100.0
        }
    }

    fn merge(&mut self, other: &Stats) {
        for (wins, other_wins) in self.wins.iter_mut().zip(&other.wins) {
            *wins += other_wins;
        }

        self.games_played += other.games_played;
        self.void_games += other.void_games;
        self.aborted_games += other.aborted_games;
        self.best_hand_wins += other.best_hand_wins;

        for (count, other_count) in self
            .winning_categories
            .iter_mut()
            .zip(&other.winning_categories)
        {
            *count += other_count;
        }
    }
}

/// A player at the table for one game.
#[derive(Debug)]
struct Player {
    name: String,
    hole_cards: (Card, Card),
    folded: bool,
}

/// The cards of one fully dealt game.
struct DealtHand {
    players: Vec<Player>,
    board: Vec<Card>,
}

/// Plays the configured number of games and aggregates statistics.
#[derive(Debug)]
pub struct Simulation {
    config: Config,
    rng: StdRng,
}

impl Simulation {
    /// Minimum number of players at the table.
    pub const MIN_PLAYERS: usize = 2;
    /// Maximum number of players at the table.
    pub const MAX_PLAYERS: usize = 8;

    /// Creates a simulation, validating the configuration.
    pub fn new(config: Config) -> Result<Self> {
        if config.players < Self::MIN_PLAYERS || config.players > Self::MAX_PLAYERS {
            bail!(
                "players must be between {} and {}",
                Self::MIN_PLAYERS,
                Self::MAX_PLAYERS
            );
        }

        if config.games == 0 {
            bail!("at least one game must be simulated");
        }

        if config.tasks == 0 {
            bail!("at least one task is needed");
        }

        if !(0.0..=1.0).contains(&config.fold_policy.probability) {
            bail!("fold probability must be between 0 and 1");
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self { config, rng })
    }

    /// Runs all games, splitting them across tasks when configured.
    pub fn run(&mut self) -> Result<Stats> {
        if self.config.tasks > 1 {
            self.run_parallel()
        } else {
            self.run_games(self.config.games)
        }
    }

    fn run_games(&mut self, games: u64) -> Result<Stats> {
        let mut stats = Stats::new(self.config.players);
        for game in 0..games {
            debug!("game {}", game + 1);
            self.play_hand(&mut stats)?;
        }

        Ok(stats)
    }

    /// Splits the games across tasks each with its own rng and stats.
    ///
    /// Games share no state so the only synchronization is the final
    /// merge.
    fn run_parallel(&mut self) -> Result<Stats> {
        let tasks = self.config.tasks as u64;
        let games = self.config.games;

        let mut stats = Stats::new(self.config.players);
        thread::scope(|s| -> Result<()> {
            let mut handles = Vec::with_capacity(self.config.tasks);
            for task_id in 0..tasks {
                // Spread the remainder over the first tasks.
                let task_games = games / tasks + u64::from(task_id < games % tasks);
                if task_games == 0 {
                    continue;
                }

                let config = Config {
                    games: task_games,
                    seed: self.config.seed.map(|seed| seed.wrapping_add(task_id)),
                    tasks: 1,
                    ..self.config.clone()
                };

                handles.push(s.spawn(move || Simulation::new(config)?.run()));
            }

            for handle in handles {
                let task_stats = handle
                    .join()
                    .map_err(|_| anyhow!("simulation task panicked"))??;
                stats.merge(&task_stats);
            }

            Ok(())
        })?;

        Ok(stats)
    }

    /// Plays one game to the showdown and updates the statistics.
    fn play_hand(&mut self, stats: &mut Stats) -> Result<()> {
        let Some(DealtHand { mut players, board }) = self.deal() else {
            stats.aborted_games += 1;
            debug!("deck ran out, hand aborted");
            return Ok(());
        };

        // Fold decisions after the turn, on the four board cards dealt so
        // far plus the hole cards.
        let policy = self.config.fold_policy;
        for player in &mut players {
            let mut pool = board[..4].to_vec();
            pool.extend([player.hole_cards.0, player.hole_cards.1]);
            let hand = ClassifiedHand::classify(&pool)?;

            if hand.category().degree() >= policy.threshold.degree()
                && self.rng.random_bool(policy.probability)
            {
                player.folded = true;
                debug!("{} folds holding {hand}", player.name);
            }
        }

        // The showdown on the full board.
        let mut hands = Vec::with_capacity(players.len());
        for player in &players {
            let mut pool = board.clone();
            pool.extend([player.hole_cards.0, player.hole_cards.1]);
            hands.push(ClassifiedHand::classify(&pool)?);
        }

        for (player, hand) in players.iter().zip(&hands) {
            let verb = if player.folded { "would've had" } else { "has" };
            debug!("{} {verb} {hand}", player.name);
        }

        let entries = hands
            .iter()
            .zip(&players)
            .enumerate()
            .map(|(seat, (hand, player))| ShowdownEntry::new(seat, hand.clone(), player.folded))
            .collect();
        let showdown = Showdown::new(entries);

        let winners = showdown.active_winners();
        let Some(&winner) = winners.iter().next() else {
            // Everyone folded, the hand is void and stays out of the win
            // statistics.
            stats.void_games += 1;
            debug!("all players folded, void hand");
            return Ok(());
        };

        stats.games_played += 1;
        for &seat in &winners {
            stats.wins[seat] += 1;
            debug!("{} wins", players[seat].name);
        }

        // Tied winners hold equal hands so any of them names the winning
        // category.
        let winning_hand = &hands[winner];
        stats.winning_categories[winning_hand.category().degree() as usize] += 1;

        let all_winners = showdown.all_winners();
        if let Some(&best) = all_winners.iter().next() {
            if *winning_hand == hands[best] {
                stats.best_hand_wins += 1;
            }
        }

        Ok(())
    }

    /// Deals a full game: two hole cards per seat, then burn and flop,
    /// burn and turn, burn and river.
    ///
    /// Returns `None` when the deck runs out.
    fn deal(&mut self) -> Option<DealtHand> {
        let mut deck = Deck::new_and_shuffled(&mut self.rng);

        let mut players = Vec::with_capacity(self.config.players);
        for seat in 0..self.config.players {
            let hole_cards = (deck.deal()?, deck.deal()?);
            players.push(Player {
                name: format!("Player {}", seat + 1),
                hole_cards,
                folded: false,
            });
        }

        let mut board = Vec::with_capacity(5);
        if !deck.burn() {
            return None;
        }
        for _ in 0..3 {
            board.push(deck.deal()?);
        }

        for _ in 0..2 {
            if !deck.burn() {
                return None;
            }
            board.push(deck.deal()?);
        }

        let cards = board
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        debug!("board {cards}");

        Some(DealtHand { players, board })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(games: u64, seed: u64) -> Config {
        Config {
            players: 4,
            games,
            seed: Some(seed),
            ..Config::default()
        }
    }

    fn check_accounting(config: &Config, stats: &Stats) {
        assert_eq!(stats.wins.len(), config.players);
        assert_eq!(
            stats.games_played + stats.void_games + stats.aborted_games,
            config.games
        );
        assert_eq!(
            stats.winning_categories.iter().sum::<u64>(),
            stats.games_played
        );
        assert!(stats.wins.iter().all(|&w| w <= stats.games_played));
        assert!(stats.best_hand_wins <= stats.games_played);
    }

    #[test]
    fn config_validation() {
        assert!(Simulation::new(Config::default()).is_ok());

        let too_few = Config {
            players: 1,
            ..Config::default()
        };
        assert!(Simulation::new(too_few).is_err());

        let too_many = Config {
            players: 9,
            ..Config::default()
        };
        assert!(Simulation::new(too_many).is_err());

        let no_games = Config {
            games: 0,
            ..Config::default()
        };
        assert!(Simulation::new(no_games).is_err());

        let no_tasks = Config {
            tasks: 0,
            ..Config::default()
        };
        assert!(Simulation::new(no_tasks).is_err());

        let bad_probability = Config {
            fold_policy: FoldPolicy {
                probability: 1.5,
                ..FoldPolicy::default()
            },
            ..Config::default()
        };
        assert!(Simulation::new(bad_probability).is_err());
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let a = Simulation::new(config(200, 7)).unwrap().run().unwrap();
        let b = Simulation::new(config(200, 7)).unwrap().run().unwrap();
        assert_eq!(a, b);

        check_accounting(&config(200, 7), &a);
    }

    #[test]
    fn nobody_folds_with_zero_probability() {
        let config = Config {
            fold_policy: FoldPolicy {
                probability: 0.0,
                ..FoldPolicy::default()
            },
            ..config(300, 11)
        };

        let stats = Simulation::new(config.clone()).unwrap().run().unwrap();
        check_accounting(&config, &stats);

        // Every game reaches the showdown and the winning hand is always
        // the best hand at the table.
        assert_eq!(stats.void_games, 0);
        assert_eq!(stats.games_played, config.games);
        assert_eq!(stats.best_hand_wins, stats.games_played);
    }

    #[test]
    fn everybody_folds_with_certain_policy() {
        let config = Config {
            fold_policy: FoldPolicy {
                threshold: HandCategory::RoyalFlush,
                probability: 1.0,
            },
            ..config(50, 3)
        };

        let stats = Simulation::new(config.clone()).unwrap().run().unwrap();
        check_accounting(&config, &stats);

        // Any category hits the threshold so every hand is void.
        assert_eq!(stats.void_games, config.games);
        assert_eq!(stats.games_played, 0);
        assert!(stats.wins.iter().all(|&w| w == 0));
    }

    #[test]
    fn parallel_run_accounting() {
        let config = Config {
            tasks: 3,
            ..config(100, 5)
        };

        let stats = Simulation::new(config.clone()).unwrap().run().unwrap();
        check_accounting(&config, &stats);
    }
}

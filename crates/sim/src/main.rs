// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
use anyhow::{anyhow, Result};
use clap::Parser;
use log::error;

use showdown_eval::HandCategory;
use showdown_sim::{Config, FoldPolicy, Simulation, Stats};

#[derive(Debug, Parser)]
struct Cli {
    /// The number of players at the table.
    #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=8))]
    players: u8,
    /// The number of games to simulate.
    #[clap(long, short, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    games: u64,
    /// Fold when the hand after the turn has this category degree or
    /// worse, 0 for a Royal Flush up to 9 for High Card.
    #[clap(long, default_value_t = 8, value_parser = clap::value_parser!(u8).range(0..=9))]
    fold_threshold: u8,
    /// Probability a player folds once the threshold is hit.
    #[clap(long, default_value_t = 0.5)]
    fold_probability: f64,
    /// Seed for reproducible runs.
    #[clap(long)]
    seed: Option<u64>,
    /// Number of tasks the games are split across.
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=32))]
    tasks: u8,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(stats) => report(&stats),
        Err(e) => error!("{e}"),
    }
}

fn run(cli: &Cli) -> Result<Stats> {
    let threshold = HandCategory::from_degree(cli.fold_threshold)
        .ok_or_else(|| anyhow!("invalid fold threshold {}", cli.fold_threshold))?;

    let config = Config {
        players: cli.players as usize,
        games: cli.games,
        fold_policy: FoldPolicy {
            threshold,
            probability: cli.fold_probability,
        },
        seed: cli.seed,
        tasks: cli.tasks as usize,
    };

    Simulation::new(config)?.run()
}

fn report(stats: &Stats) {
    println!("----- Simulation Report -----");
    println!("Games played:   {}", stats.games_played);
    println!("Void hands:     {}", stats.void_games);
    if stats.aborted_games > 0 {
        println!("Aborted hands:  {}", stats.aborted_games);
    }
    println!(
        "Best hand won:  {} ({:.1}%)",
        stats.best_hand_wins,
        percent(stats.best_hand_wins, stats.games_played)
    );

    println!("\nWins for each player:");
    for (seat, &wins) in stats.wins.iter().enumerate() {
        println!(
            "  Player {}: {wins} ({:.1}%)",
            seat + 1,
            stats.win_rate(seat)
        );
    }

    println!("\nWinning hand count:");
    for category in HandCategory::categories() {
        let count = stats.winning_categories[category.degree() as usize];
        if count > 0 {
            println!("{count:8}  {category}");
        }
    }
}

fn percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

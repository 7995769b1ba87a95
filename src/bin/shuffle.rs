//! Demo driver: shuffle a roster CSV into teams and seed a bracket from them.
//! Run with: cargo run --bin shuffle -- roster.csv
//! Prints the shuffle result and the bracket as JSON on stdout.
//! Override with env: TEAM_SIZE (e.g. 5), SHUFFLE_ITERATIONS (e.g. 1000).

use serde::Serialize;
use team_shuffle::{
    build_bracket, load_roster, shuffle_teams, Bracket, BracketTeam, ShuffleConfig, ShuffleResult,
    DEFAULT_ITERATIONS, DEFAULT_TEAM_SIZE,
};

#[derive(Serialize)]
struct Output {
    shuffle: ShuffleResult,
    bracket: Bracket,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: shuffle <roster.csv>")?;
    let config = ShuffleConfig::default()
        .with_team_size(env_or("TEAM_SIZE", DEFAULT_TEAM_SIZE))
        .with_iterations(env_or("SHUFFLE_ITERATIONS", DEFAULT_ITERATIONS));

    let players = load_roster(&path)?;
    let shuffle = shuffle_teams(&players, &config)?;
    for team in &shuffle.teams {
        log::info!(
            "{}: {} players, average rating {}",
            team.display_name(),
            team.players.len(),
            team.average_rating
        );
    }
    log::info!(
        "Reserve players: {}, rating spread: {}",
        shuffle.reserve_players.len(),
        shuffle.balance.rating_spread
    );

    let seeds: Vec<BracketTeam> = shuffle.teams.iter().map(BracketTeam::from).collect();
    let bracket = build_bracket(&seeds)?;

    let output = Output { shuffle, bracket };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

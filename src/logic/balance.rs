//! Skill rating statistics over teams.

use crate::models::{BalanceStats, Player, Team};
use std::borrow::Borrow;

/// Total and rounded average rating of a group of players. Empty groups average 0.
///
/// The total is summed as `u64` so unvalidated ratings cannot overflow it.
pub fn team_rating<P: Borrow<Player>>(players: &[P]) -> (u64, u32) {
    let total: u64 = players
        .iter()
        .map(|p| u64::from(p.borrow().skill_rating))
        .sum();
    let average = if players.is_empty() {
        0
    } else {
        (total as f64 / players.len() as f64).round() as u32
    };
    (total, average)
}

/// Build numbered `Team` records (1-based) with their rating totals.
pub fn build_teams(partition: Vec<Vec<Player>>) -> Vec<Team> {
    partition
        .into_iter()
        .enumerate()
        .map(|(i, players)| {
            let (total, average) = team_rating(&players);
            Team::with_generated_id(i as u32 + 1, players, total, average)
        })
        .collect()
}

fn mean(values: &[u32]) -> f64 {
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

/// Population variance of team averages (divides by the team count). 0 for no teams.
pub fn rating_variance(averages: &[u32]) -> f64 {
    if averages.is_empty() {
        return 0.0;
    }
    let m = mean(averages);
    averages
        .iter()
        .map(|&v| (v as f64 - m).powi(2))
        .sum::<f64>()
        / averages.len() as f64
}

/// Population variance of `average_rating` across teams.
pub fn variance(teams: &[Team]) -> f64 {
    let averages: Vec<u32> = teams.iter().map(|t| t.average_rating).collect();
    rating_variance(&averages)
}

/// Balance statistics of a team list; all zero when there are no teams.
pub fn balance_stats(teams: &[Team]) -> BalanceStats {
    if teams.is_empty() {
        return BalanceStats::default();
    }
    let averages: Vec<u32> = teams.iter().map(|t| t.average_rating).collect();
    let min_team_rating = averages.iter().copied().min().unwrap_or(0);
    let max_team_rating = averages.iter().copied().max().unwrap_or(0);
    BalanceStats {
        mean_rating: mean(&averages),
        variance: rating_variance(&averages),
        min_team_rating,
        max_team_rating,
        rating_spread: max_team_rating - min_team_rating,
    }
}

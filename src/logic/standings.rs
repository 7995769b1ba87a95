//! Standings derived from a bracket's decided matches.

use crate::models::{Bracket, BracketTeam, Standing, TeamId};
use std::collections::HashMap;

/// Wins, losses and placing for every team, most wins first.
///
/// Byes are not counted as wins. A team knocked out `d` rounds before the final
/// places `2^d + 1` (finals loser 2, semi-final losers 3, ...); the champion places 1.
pub fn calculate_standings(bracket: &Bracket, teams: &[BracketTeam]) -> Vec<Standing> {
    let mut standings: Vec<Standing> = teams
        .iter()
        .map(|t| Standing {
            team_id: t.id,
            team_number: t.team_number,
            team_name: t.name.clone(),
            wins: 0,
            losses: 0,
            placing: 0,
        })
        .collect();
    let index: HashMap<TeamId, usize> = standings
        .iter()
        .enumerate()
        .map(|(i, s)| (s.team_id, i))
        .collect();

    let total_rounds = bracket.total_rounds();
    for m in bracket.matches() {
        if !m.is_completed() || !m.is_ready() {
            continue;
        }
        let (Some(winner), Some(loser)) = (m.winner_id, m.loser_id()) else {
            continue;
        };
        if let Some(&i) = index.get(&winner) {
            standings[i].wins += 1;
        }
        if let Some(&i) = index.get(&loser) {
            standings[i].losses += 1;
            let distance = total_rounds.saturating_sub(m.round_number);
            standings[i].placing = 2u32.pow(distance) + 1;
        }
    }

    if let Some(champion) = bracket.champion() {
        if let Some(&i) = index.get(&champion) {
            standings[i].placing = 1;
        }
    }

    standings.sort_by(|a, b| b.wins.cmp(&a.wins));
    standings
}

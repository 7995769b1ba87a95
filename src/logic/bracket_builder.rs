//! Single-elimination bracket construction: rounds, progression links, seeding and byes.

use crate::logic::progression::advance_winner;
use crate::models::{
    match_id, round_name, Bracket, BracketTeam, EventError, Match, MatchId, MatchStatus, Round,
    TeamId,
};
use rand::seq::SliceRandom;
use rand::Rng;

/// Build a bracket for `teams`, seeded in the given order.
///
/// 1. Pad to the next power of two and create every round up front.
/// 2. Link each match to `floor(i / 2)` of the following round.
/// 3. Seed round 1: the first `n - slots / 2` matches get two teams, every other
///    match gets one team and is completed at once as a bye.
/// 4. Advance bye winners into the second round.
pub fn build_bracket(teams: &[BracketTeam]) -> Result<Bracket, EventError> {
    if teams.len() < 2 {
        return Err(EventError::InsufficientTeams {
            required: 2,
            available: teams.len(),
        });
    }

    let slots = teams.len().next_power_of_two();
    let total_rounds = slots.trailing_zeros();

    let mut rounds: Vec<Round> = (1..=total_rounds)
        .map(|round_number| {
            let matches_in_round = (slots >> round_number) as u32;
            let next_round = (round_number < total_rounds).then_some(round_number + 1);
            let matches = (1..=matches_in_round)
                .map(|match_number| {
                    let mut m = Match::new(round_number, match_number);
                    m.next_match_id = next_round.map(|r| match_id(r, (match_number + 1) / 2));
                    m
                })
                .collect();
            Round {
                round_number,
                round_name: round_name(round_number, total_rounds),
                matches,
            }
        })
        .collect();

    let byes = seed_first_round(&mut rounds[0], teams);
    let mut bracket = Bracket { rounds };
    for (bye_id, winner) in byes {
        advance_winner(&mut bracket, &bye_id, winner)?;
    }

    log::info!(
        "Built bracket: {} teams, {} rounds, {} byes",
        teams.len(),
        total_rounds,
        slots - teams.len()
    );
    Ok(bracket)
}

/// Place teams into the first round; returns the bye matches and their winners.
fn seed_first_round(first_round: &mut Round, teams: &[BracketTeam]) -> Vec<(MatchId, TeamId)> {
    let match_count = first_round.matches.len();
    let full_matches = teams.len() - match_count;
    let mut remaining = teams.iter();
    let mut byes = Vec::new();

    for (i, m) in first_round.matches.iter_mut().enumerate() {
        m.team1_id = remaining.next().map(|t| t.id);
        if i < full_matches {
            m.team2_id = remaining.next().map(|t| t.id);
        }
        if let (Some(team), None) = (m.team1_id, m.team2_id) {
            m.winner_id = Some(team);
            m.status = MatchStatus::Completed;
            byes.push((m.id.clone(), team));
        }
    }
    byes
}

/// Shuffle the seeding order in place before building.
pub fn randomize_seeds<R: Rng + ?Sized>(teams: &mut [BracketTeam], rng: &mut R) {
    teams.shuffle(rng);
}

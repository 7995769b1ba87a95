//! Captain draft: one designated captain per team, everyone else balanced by the same search.

use crate::logic::balance::balance_stats;
use crate::logic::shuffle::{combined_score, finish_partition, round_robin, search_partitions};
use crate::models::{CaptainShuffleResult, EventError, Player, PlayerId, ShuffleConfig};
use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Captain draft using the thread RNG.
pub fn shuffle_with_captains(
    players: &[Player],
    captain_ids: &[PlayerId],
    config: &ShuffleConfig,
) -> Result<CaptainShuffleResult, EventError> {
    shuffle_with_captains_with_rng(players, captain_ids, config, &mut rand::thread_rng())
}

/// Run the draft again with the captains of a previous result and a fresh random draw.
pub fn reshuffle_keep_captains(
    players: &[Player],
    previous: &CaptainShuffleResult,
    config: &ShuffleConfig,
) -> Result<CaptainShuffleResult, EventError> {
    shuffle_with_captains(players, &previous.captain_ids, config)
}

/// Build one team per captain. Captain `i` always heads team `i + 1`; the other
/// present players are dealt round-robin into the remaining seats and the best
/// of `config.iterations` draws is kept.
///
/// `config.min_players` does not apply here: the draft needs exactly enough
/// present players to fill `captain_ids.len() * config.team_size` seats.
pub fn shuffle_with_captains_with_rng<R: Rng + ?Sized>(
    players: &[Player],
    captain_ids: &[PlayerId],
    config: &ShuffleConfig,
    rng: &mut R,
) -> Result<CaptainShuffleResult, EventError> {
    if captain_ids.len() < 2 {
        return Err(EventError::InvalidCaptainCount(captain_ids.len()));
    }
    if config.team_size == 0 {
        return Err(EventError::InvalidTeamSize);
    }
    let captains = resolve_captains(players, captain_ids)?;
    let team_count = captains.len();

    let present: Vec<&Player> = players.iter().filter(|p| p.is_present()).collect();
    let required = team_count * config.team_size;
    if present.len() < required {
        return Err(EventError::InsufficientPlayers {
            required,
            available: present.len(),
        });
    }

    let captain_set: HashSet<PlayerId> = captain_ids.iter().copied().collect();
    let others: Vec<&Player> = present
        .iter()
        .copied()
        .filter(|p| !captain_set.contains(&p.id))
        .collect();
    let open_seats = team_count * (config.team_size - 1);

    log::info!(
        "Starting captain draft with {} captains, {} players, {} iterations",
        team_count,
        present.len(),
        config.iterations
    );

    let best = search_partitions(
        rng,
        config.iterations,
        |rng| {
            let mut pool = others.clone();
            pool.shuffle(rng);
            round_robin(&pool[..open_seats], team_count)
                .into_iter()
                .zip(&captains)
                .map(|(rest, &captain)| {
                    let mut team = Vec::with_capacity(config.team_size);
                    team.push(captain);
                    team.extend(rest);
                    team
                })
                .collect()
        },
        |partition| combined_score(partition),
    );

    log::info!(
        "Captain draft finished: best combined score {:.2} (iteration {})",
        best.score,
        best.iteration
    );

    let (teams, reserve_players) = finish_partition(&present, best.partition);
    Ok(CaptainShuffleResult {
        balance: balance_stats(&teams),
        teams,
        reserve_players,
        captain_ids: captain_ids.to_vec(),
        shuffled_at: Utc::now(),
    })
}

/// Look up captains in order, rejecting duplicates, unknown ids and absent players.
fn resolve_captains<'a>(
    players: &'a [Player],
    captain_ids: &[PlayerId],
) -> Result<Vec<&'a Player>, EventError> {
    let mut seen = HashSet::new();
    let mut captains = Vec::with_capacity(captain_ids.len());
    for &id in captain_ids {
        if !seen.insert(id) {
            return Err(EventError::DuplicateCaptain(id));
        }
        let captain = players
            .iter()
            .find(|p| p.id == id)
            .ok_or(EventError::CaptainNotFound(id))?;
        if !captain.is_present() {
            return Err(EventError::CaptainNotPresent(id));
        }
        captains.push(captain);
    }
    Ok(captains)
}

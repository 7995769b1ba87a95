//! Team shuffle: randomized search for a role- and rating-balanced partition.
//!
//! Each iteration draws a uniformly random permutation of the present players,
//! deals the first `team_count * team_size` of them round-robin into teams and
//! scores the result. The lowest score seen wins; on equal scores the earlier
//! partition is kept. Sorting by rating is deliberately avoided so the search
//! keeps its variation.

use crate::logic::balance::{balance_stats, build_teams, rating_variance, team_rating};
use crate::logic::roles::role_score;
use crate::models::{EventError, Player, PlayerId, ShuffleConfig, ShuffleResult, Team};
use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use std::borrow::Borrow;
use std::collections::HashSet;

/// Weight of the role score against rating variance in [`combined_score`].
pub const ROLE_WEIGHT: f64 = 100.0;

/// Fewest teams a shuffle may produce.
pub const MIN_TEAMS: usize = 2;

/// Best partition found by [`search_partitions`].
#[derive(Clone, Debug)]
pub struct Candidate<T> {
    pub partition: Vec<Vec<T>>,
    pub score: f64,
    /// 0-based iteration that produced it.
    pub iteration: usize,
}

/// `role_score * 100 + rating variance`: a missing role always outweighs rating imbalance.
pub fn combined_score<P: Borrow<Player>>(partition: &[Vec<P>]) -> f64 {
    let averages: Vec<u32> = partition.iter().map(|team| team_rating(team).1).collect();
    role_score(partition) as f64 * ROLE_WEIGHT + rating_variance(&averages)
}

/// Deal `players` into `team_count` teams: `players[i]` goes to team `i % team_count`.
pub fn round_robin<T: Clone>(players: &[T], team_count: usize) -> Vec<Vec<T>> {
    let mut teams: Vec<Vec<T>> = vec![Vec::new(); team_count];
    if team_count == 0 {
        return teams;
    }
    for (i, p) in players.iter().enumerate() {
        teams[i % team_count].push(p.clone());
    }
    teams
}

/// Fixed-budget random search. `draw` produces one candidate partition per
/// iteration, `score` ranks it (lower is better). A budget of 0 runs one iteration.
pub fn search_partitions<R, T, D, S>(
    rng: &mut R,
    iterations: usize,
    mut draw: D,
    score: S,
) -> Candidate<T>
where
    R: Rng + ?Sized,
    D: FnMut(&mut R) -> Vec<Vec<T>>,
    S: Fn(&[Vec<T>]) -> f64,
{
    let first = draw(rng);
    let mut best = Candidate {
        score: score(&first),
        partition: first,
        iteration: 0,
    };
    for iteration in 1..iterations {
        let partition = draw(rng);
        let s = score(&partition);
        if s < best.score {
            if iteration < 10 || iteration % 100 == 0 {
                log::debug!("Iteration {}: new best combined score {:.2}", iteration, s);
            }
            best = Candidate {
                partition,
                score: s,
                iteration,
            };
        }
    }
    best
}

/// Shuffle present players into balanced teams using the thread RNG.
pub fn shuffle_teams(
    players: &[Player],
    config: &ShuffleConfig,
) -> Result<ShuffleResult, EventError> {
    shuffle_teams_with_rng(players, config, &mut rand::thread_rng())
}

/// Shuffle present players into balanced teams. Non-present players are ignored.
///
/// Fails with `InsufficientPlayers` below `config.min_players` present players and
/// with `InsufficientTeams` when fewer than 2 full teams fit.
pub fn shuffle_teams_with_rng<R: Rng + ?Sized>(
    players: &[Player],
    config: &ShuffleConfig,
    rng: &mut R,
) -> Result<ShuffleResult, EventError> {
    let present: Vec<&Player> = players.iter().filter(|p| p.is_present()).collect();
    if present.len() < config.min_players {
        return Err(EventError::InsufficientPlayers {
            required: config.min_players,
            available: present.len(),
        });
    }
    if config.team_size == 0 {
        return Err(EventError::InvalidTeamSize);
    }
    let team_count = present.len() / config.team_size;
    if team_count < MIN_TEAMS {
        return Err(EventError::InsufficientTeams {
            required: MIN_TEAMS,
            available: team_count,
        });
    }
    let seats = team_count * config.team_size;

    log::info!(
        "Starting shuffle with {} players, {} teams, {} iterations",
        present.len(),
        team_count,
        config.iterations
    );

    let best = search_partitions(
        rng,
        config.iterations,
        |rng| {
            let mut pool = present.clone();
            pool.shuffle(rng);
            round_robin(&pool[..seats], team_count)
        },
        |partition| combined_score(partition),
    );

    log::info!(
        "Shuffle finished: best combined score {:.2} (iteration {})",
        best.score,
        best.iteration
    );

    let (teams, reserve_players) = finish_partition(&present, best.partition);
    Ok(ShuffleResult {
        balance: balance_stats(&teams),
        teams,
        reserve_players,
        shuffled_at: Utc::now(),
    })
}

/// Turn a winning partition into numbered teams plus the present players left over.
pub(crate) fn finish_partition(
    present: &[&Player],
    partition: Vec<Vec<&Player>>,
) -> (Vec<Team>, Vec<Player>) {
    let placed: HashSet<PlayerId> = partition.iter().flatten().map(|p| p.id).collect();
    let owned: Vec<Vec<Player>> = partition
        .into_iter()
        .map(|team| team.into_iter().cloned().collect())
        .collect();
    let reserves = present
        .iter()
        .filter(|p| !placed.contains(&p.id))
        .map(|&p| p.clone())
        .collect();
    (build_teams(owned), reserves)
}

//! Integration tests for the team shuffle and captain draft.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use team_shuffle::{
    has_valid_roles, reshuffle_keep_captains, role_score, search_partitions, shuffle_teams,
    shuffle_teams_with_rng, shuffle_with_captains_with_rng, AttendanceStatus, EventError, Player,
    PlayerId, Role, ShuffleConfig,
};

const LINEUP: [Role; 5] = [
    Role::Carry,
    Role::Mid,
    Role::Offlane,
    Role::SoftSupport,
    Role::HardSupport,
];

/// `n` present players cycling through the five roles, ratings 1000, 1100, ...
fn roster(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| {
            Player::new(
                format!("P{i}"),
                1000 + 100 * i as u32,
                vec![LINEUP[i % LINEUP.len()]],
            )
        })
        .collect()
}

fn ids(players: &[Player]) -> Vec<PlayerId> {
    players.iter().map(|p| p.id).collect()
}

#[test]
fn shuffle_requires_ten_present_players() {
    let mut players = roster(9);
    players.extend(roster(3).into_iter().map(|p| p.with_attendance(AttendanceStatus::Absent)));
    let result = shuffle_teams(&players, &ShuffleConfig::default());
    assert_eq!(
        result,
        Err(EventError::InsufficientPlayers {
            required: 10,
            available: 9
        })
    );
}

#[test]
fn shuffle_rejects_team_size_that_leaves_one_team() {
    let players = roster(10);
    let config = ShuffleConfig::default().with_team_size(6);
    assert_eq!(
        shuffle_teams(&players, &config),
        Err(EventError::InsufficientTeams {
            required: 2,
            available: 1
        })
    );
}

#[test]
fn shuffle_rejects_zero_team_size() {
    let players = roster(10);
    let config = ShuffleConfig::default().with_team_size(0);
    assert_eq!(
        shuffle_teams(&players, &config),
        Err(EventError::InvalidTeamSize)
    );
}

#[test]
fn ten_players_make_two_full_teams() {
    let players = roster(10);
    let mut rng = StdRng::seed_from_u64(7);
    let result = shuffle_teams_with_rng(&players, &ShuffleConfig::default(), &mut rng).unwrap();

    assert_eq!(result.teams.len(), 2);
    assert!(result.reserve_players.is_empty());
    for (i, team) in result.teams.iter().enumerate() {
        assert_eq!(team.team_number, i as u32 + 1);
        assert_eq!(team.players.len(), 5);
    }
}

#[test]
fn twelve_players_leave_two_reserves_and_nobody_is_lost() {
    let players = roster(12);
    let mut rng = StdRng::seed_from_u64(11);
    let result = shuffle_teams_with_rng(&players, &ShuffleConfig::default(), &mut rng).unwrap();

    assert_eq!(result.teams.len(), 2);
    assert_eq!(result.reserve_players.len(), 2);

    let mut placed: Vec<PlayerId> = result
        .teams
        .iter()
        .flat_map(|t| t.player_ids())
        .chain(ids(&result.reserve_players))
        .collect();
    let unique: HashSet<PlayerId> = placed.iter().copied().collect();
    assert_eq!(unique.len(), placed.len(), "a player was placed twice");

    let mut expected = ids(&players);
    placed.sort();
    expected.sort();
    assert_eq!(placed, expected);
}

#[test]
fn absent_and_reserve_players_are_never_placed() {
    let mut players = roster(10);
    let absent = Player::new("Away", 3000, vec![Role::Mid]).with_attendance(AttendanceStatus::Absent);
    let bench = Player::new("Bench", 3000, vec![Role::Carry]).with_attendance(AttendanceStatus::Reserve);
    players.push(absent.clone());
    players.push(bench.clone());

    let mut rng = StdRng::seed_from_u64(3);
    let result = shuffle_teams_with_rng(&players, &ShuffleConfig::default(), &mut rng).unwrap();

    for team in &result.teams {
        assert!(!team.contains(absent.id));
        assert!(!team.contains(bench.id));
    }
    assert!(result.reserve_players.is_empty());
}

#[test]
fn team_totals_and_rounded_averages_match_members() {
    let players = roster(15);
    let mut rng = StdRng::seed_from_u64(5);
    let result = shuffle_teams_with_rng(&players, &ShuffleConfig::default(), &mut rng).unwrap();

    assert_eq!(result.teams.len(), 3);
    for team in &result.teams {
        let total: u64 = team.players.iter().map(|p| u64::from(p.skill_rating)).sum();
        assert_eq!(team.total_rating, total);
        assert_eq!(team.average_rating, (total as f64 / 5.0).round() as u32);
    }
    let min = result.teams.iter().map(|t| t.average_rating).min().unwrap();
    let max = result.teams.iter().map(|t| t.average_rating).max().unwrap();
    assert_eq!(result.balance.min_team_rating, min);
    assert_eq!(result.balance.max_team_rating, max);
    assert_eq!(result.balance.rating_spread, max - min);
}

#[test]
fn search_finds_full_role_coverage_when_possible() {
    // Two of each core role and four supports: only some deals cover every role.
    let players = roster(10);
    let mut rng = StdRng::seed_from_u64(42);
    let result = shuffle_teams_with_rng(&players, &ShuffleConfig::default(), &mut rng).unwrap();

    let partition: Vec<Vec<Player>> = result.teams.iter().map(|t| t.players.clone()).collect();
    assert_eq!(role_score(&partition), 0);
    for team in &result.teams {
        assert!(has_valid_roles(&team.players));
    }
}

#[test]
fn same_seed_gives_same_partition() {
    let players = roster(12);
    let config = ShuffleConfig::default().with_iterations(200);
    let a = shuffle_teams_with_rng(&players, &config, &mut StdRng::seed_from_u64(99)).unwrap();
    let b = shuffle_teams_with_rng(&players, &config, &mut StdRng::seed_from_u64(99)).unwrap();

    let members = |r: &team_shuffle::ShuffleResult| -> Vec<Vec<PlayerId>> {
        r.teams.iter().map(|t| t.player_ids()).collect()
    };
    assert_eq!(members(&a), members(&b));
    assert_eq!(ids(&a.reserve_players), ids(&b.reserve_players));
}

#[test]
fn search_keeps_first_partition_on_equal_scores() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut calls = 0;
    let best = search_partitions(
        &mut rng,
        50,
        |_| {
            calls += 1;
            vec![vec![calls]]
        },
        |_| 1.0,
    );
    assert_eq!(best.iteration, 0);
    assert_eq!(best.partition, vec![vec![1]]);
    assert_eq!(calls, 50);
}

#[test]
fn search_keeps_lowest_score() {
    let mut rng = StdRng::seed_from_u64(1);
    let scores = [5.0, 3.0, 4.0, 1.0, 1.0, 2.0];
    let mut next = 0;
    let best = search_partitions(
        &mut rng,
        scores.len(),
        |_| {
            next += 1;
            vec![vec![next - 1]]
        },
        |p| scores[p[0][0]],
    );
    assert_eq!(best.iteration, 3);
    assert_eq!(best.score, 1.0);
}

#[test]
fn zero_iterations_still_draws_once() {
    let players = roster(10);
    let config = ShuffleConfig::default().with_iterations(0);
    let result =
        shuffle_teams_with_rng(&players, &config, &mut StdRng::seed_from_u64(2)).unwrap();
    assert_eq!(result.teams.len(), 2);
}

#[test]
fn captain_draft_needs_two_captains() {
    let players = roster(10);
    let result = shuffle_with_captains_with_rng(
        &players,
        &[players[0].id],
        &ShuffleConfig::default(),
        &mut StdRng::seed_from_u64(1),
    );
    assert_eq!(result, Err(EventError::InvalidCaptainCount(1)));
}

#[test]
fn captain_draft_rejects_duplicate_unknown_and_absent_captains() {
    let mut players = roster(10);
    let away = Player::new("Away", 2000, vec![Role::Mid]).with_attendance(AttendanceStatus::Absent);
    players.push(away.clone());
    let config = ShuffleConfig::default();
    let mut rng = StdRng::seed_from_u64(1);

    let dup = shuffle_with_captains_with_rng(&players, &[players[0].id, players[0].id], &config, &mut rng);
    assert_eq!(dup, Err(EventError::DuplicateCaptain(players[0].id)));

    let stranger = uuid::Uuid::new_v4();
    let unknown = shuffle_with_captains_with_rng(&players, &[players[0].id, stranger], &config, &mut rng);
    assert_eq!(unknown, Err(EventError::CaptainNotFound(stranger)));

    let absent = shuffle_with_captains_with_rng(&players, &[players[0].id, away.id], &config, &mut rng);
    assert_eq!(absent, Err(EventError::CaptainNotPresent(away.id)));
}

#[test]
fn captain_draft_needs_enough_players_to_fill_every_seat() {
    let players = roster(8);
    let result = shuffle_with_captains_with_rng(
        &players,
        &[players[0].id, players[1].id],
        &ShuffleConfig::default(),
        &mut StdRng::seed_from_u64(1),
    );
    assert_eq!(
        result,
        Err(EventError::InsufficientPlayers {
            required: 10,
            available: 8
        })
    );
}

#[test]
fn each_captain_heads_their_own_team() {
    let players = roster(17);
    let captains = vec![players[4].id, players[9].id, players[0].id];
    let result = shuffle_with_captains_with_rng(
        &players,
        &captains,
        &ShuffleConfig::default(),
        &mut StdRng::seed_from_u64(8),
    )
    .unwrap();

    assert_eq!(result.teams.len(), 3);
    assert_eq!(result.reserve_players.len(), 2);
    assert_eq!(result.captain_ids, captains);
    for (team, captain) in result.teams.iter().zip(&captains) {
        assert_eq!(team.players.len(), 5);
        assert_eq!(team.players[0].id, *captain);
        let captains_on_team = team.players.iter().filter(|p| captains.contains(&p.id)).count();
        assert_eq!(captains_on_team, 1);
        assert_eq!(result.captain_of(team).map(|p| p.id), Some(*captain));
    }
    for reserve in &result.reserve_players {
        assert!(!captains.contains(&reserve.id));
    }
}

#[test]
fn reshuffle_keeps_the_same_captains() {
    let players = roster(10);
    let captains = vec![players[1].id, players[2].id];
    let config = ShuffleConfig::default().with_iterations(100);
    let first = shuffle_with_captains_with_rng(
        &players,
        &captains,
        &config,
        &mut StdRng::seed_from_u64(4),
    )
    .unwrap();

    let again = reshuffle_keep_captains(&players, &first, &config).unwrap();
    assert_eq!(again.captain_ids, captains);
    assert_eq!(again.teams[0].players[0].id, captains[0]);
    assert_eq!(again.teams[1].players[0].id, captains[1]);
}

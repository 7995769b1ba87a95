//! Team shuffler and single-elimination bracket engine for in-house events.
//!
//! Players with a skill rating and one or two preferred roles are split into
//! fixed-size teams by a randomized search that keeps every team's role
//! coverage intact and the team rating averages close. The resulting teams can
//! then be seeded into a single-elimination bracket that is advanced and
//! corrected match by match.

pub mod logic;
pub mod models;
pub mod roster;

pub use logic::{
    balance_stats, build_bracket, build_teams, calculate_standings, combined_score,
    has_valid_roles, randomize_seeds, rating_variance, record_winner, reset_match,
    reshuffle_keep_captains, role_score, round_robin, search_partitions, shuffle_teams,
    shuffle_teams_with_rng, shuffle_with_captains, shuffle_with_captains_with_rng, team_rating,
    variance, Candidate, RoleCounts,
};
pub use models::{
    round_name, target_slot, AttendanceStatus, BalanceStats, Bracket, BracketTeam,
    CaptainShuffleResult, EventError, Match, MatchId, MatchStatus, Player, PlayerId, Role, Round,
    ShuffleConfig, ShuffleResult, Slot, Standing, Team, TeamId, DEFAULT_ITERATIONS,
    DEFAULT_MIN_PLAYERS, DEFAULT_TEAM_SIZE,
};
pub use roster::{load_roster, read_roster};

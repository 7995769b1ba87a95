//! Shuffle and bracket logic: role scoring, rating balance, team search, brackets.

mod balance;
mod bracket_builder;
mod captains;
mod progression;
mod roles;
mod shuffle;
mod standings;

pub use balance::{balance_stats, build_teams, rating_variance, team_rating, variance};
pub use bracket_builder::{build_bracket, randomize_seeds};
pub use captains::{reshuffle_keep_captains, shuffle_with_captains, shuffle_with_captains_with_rng};
pub use progression::{record_winner, reset_match};
pub use roles::{has_valid_roles, role_score, RoleCounts, HARD_PENALTY, SOFT_PENALTY};
pub use shuffle::{
    combined_score, round_robin, search_partitions, shuffle_teams, shuffle_teams_with_rng,
    Candidate, MIN_TEAMS, ROLE_WEIGHT,
};
pub use standings::calculate_standings;

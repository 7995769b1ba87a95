//! Data structures for event shuffles: players, teams, balance stats, brackets.

mod bracket;
mod config;
mod error;
mod player;
mod team;

pub use bracket::{
    round_name, target_slot, Bracket, BracketTeam, Match, MatchId, MatchStatus, Round, Slot,
    Standing,
};
pub(crate) use bracket::match_id;
pub use config::{ShuffleConfig, DEFAULT_ITERATIONS, DEFAULT_MIN_PLAYERS, DEFAULT_TEAM_SIZE};
pub use error::EventError;
pub use player::{
    AttendanceStatus, Player, PlayerId, Role, TeamId, MAX_PREFERRED_ROLES, MAX_SKILL_RATING,
};
pub use team::{BalanceStats, CaptainShuffleResult, ShuffleResult, Team};

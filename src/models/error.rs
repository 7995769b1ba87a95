//! Errors returned by the shuffler and the bracket engine.

use crate::models::bracket::MatchId;
use crate::models::player::{PlayerId, TeamId};

/// Errors that can occur during shuffle or bracket operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EventError {
    /// Fewer present players than the shuffle needs.
    InsufficientPlayers { required: usize, available: usize },
    /// Fewer than 2 teams can be formed (shuffle) or were supplied (bracket).
    InsufficientTeams { required: usize, available: usize },
    /// Team size must be at least 1.
    InvalidTeamSize,
    /// Captain draft needs at least 2 captains.
    InvalidCaptainCount(usize),
    /// The same captain id was given twice.
    DuplicateCaptain(PlayerId),
    /// Captain id does not match any roster player.
    CaptainNotFound(PlayerId),
    /// Captain is on the roster but not marked present.
    CaptainNotPresent(PlayerId),
    /// No match with this id in the bracket.
    MatchNotFound(MatchId),
    /// The reported winner is not one of the match's two teams.
    WinnerNotInMatch { match_id: MatchId, team_id: TeamId },
    /// The match still has an empty slot waiting for an earlier winner.
    MatchNotReady(MatchId),
    /// A roster entry breaks a player invariant (roles, rating).
    InvalidPlayer { name: String, reason: String },
    /// A roster file could not be read or parsed.
    InvalidRoster { line: u64, message: String },
}

impl std::fmt::Display for EventError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventError::InsufficientPlayers { required, available } => write!(
                f,
                "Not enough players. Minimum {} required, got {}",
                required, available
            ),
            EventError::InsufficientTeams { required, available } => write!(
                f,
                "Need at least {} teams, got {}",
                required, available
            ),
            EventError::InvalidTeamSize => write!(f, "Team size must be at least 1"),
            EventError::InvalidCaptainCount(n) => {
                write!(f, "At least 2 captains are required (got {})", n)
            }
            EventError::DuplicateCaptain(id) => write!(f, "Captain {} was selected twice", id),
            EventError::CaptainNotFound(id) => write!(f, "Captain {} is not on the roster", id),
            EventError::CaptainNotPresent(id) => write!(f, "Captain {} is not marked present", id),
            EventError::MatchNotFound(id) => write!(f, "Match {} not found", id),
            EventError::WinnerNotInMatch { match_id, team_id } => {
                write!(f, "Team {} is not playing in match {}", team_id, match_id)
            }
            EventError::MatchNotReady(id) => write!(f, "Match {} is waiting for its opponent", id),
            EventError::InvalidPlayer { name, reason } => {
                write!(f, "Invalid player '{}': {}", name, reason)
            }
            EventError::InvalidRoster { line, message } => {
                write!(f, "Roster line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for EventError {}

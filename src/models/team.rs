//! Team, BalanceStats and the shuffle result types.

use crate::models::player::{Player, PlayerId, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A team produced by the shuffler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    /// 1-based position in the shuffle output.
    pub team_number: u32,
    #[serde(default)]
    pub team_name: Option<String>,
    /// Draft order, not significant.
    pub players: Vec<Player>,
    pub total_rating: u64,
    /// round(total_rating / players.len()), 0 for an empty team.
    pub average_rating: u32,
}

impl Team {
    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id).collect()
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    /// Name to show: the custom name if set, else "Team {n}".
    pub fn display_name(&self) -> String {
        self.team_name
            .clone()
            .unwrap_or_else(|| format!("Team {}", self.team_number))
    }

    pub(crate) fn with_generated_id(
        team_number: u32,
        players: Vec<Player>,
        total_rating: u64,
        average_rating: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_number,
            team_name: None,
            players,
            total_rating,
            average_rating,
        }
    }
}

/// Rating balance across a set of teams. Always derived from the team list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceStats {
    /// Mean of the per-team average ratings.
    pub mean_rating: f64,
    /// Population variance of the per-team average ratings.
    pub variance: f64,
    pub min_team_rating: u32,
    pub max_team_rating: u32,
    /// max_team_rating - min_team_rating.
    pub rating_spread: u32,
}

/// Output of a standard shuffle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShuffleResult {
    pub teams: Vec<Team>,
    /// Present players left out of every team.
    pub reserve_players: Vec<Player>,
    pub balance: BalanceStats,
    pub shuffled_at: DateTime<Utc>,
}

/// Output of a captain draft shuffle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaptainShuffleResult {
    pub teams: Vec<Team>,
    pub reserve_players: Vec<Player>,
    pub balance: BalanceStats,
    /// Captain of team n is `captain_ids[n - 1]`.
    pub captain_ids: Vec<PlayerId>,
    pub shuffled_at: DateTime<Utc>,
}

impl CaptainShuffleResult {
    /// Captain of the given team, if the team came from this draft.
    pub fn captain_of<'a>(&self, team: &'a Team) -> Option<&'a Player> {
        team.players
            .iter()
            .find(|p| self.captain_ids.contains(&p.id))
    }
}
